//! HTTP client for the game server's JSON API.

use async_trait::async_trait;
use gloo::net::http::{Request, Response};
use serde::Serialize;
use serde::de::DeserializeOwned;
use thiserror::Error;

use crate::model::{
    AiToggleRequest, Direction, DirectionRequest, EmptyRequest, GameState, NewGameRequest,
};

#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ApiError {
    #[error("{path}: request failed ({reason})")]
    Network { path: String, reason: String },
    #[error("{path}: server answered {status}{}", body_suffix(.body))]
    Status { path: String, status: u16, body: String },
    #[error("{path}: malformed response ({reason})")]
    Malformed { path: String, reason: String },
}

fn body_suffix(body: &str) -> String {
    let trimmed = body.trim();
    if trimmed.is_empty() {
        String::new()
    } else {
        let short: String = trimmed.chars().take(120).collect();
        format!(": {}", short)
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ApiClient {
    base: String,
}

impl ApiClient {
    pub fn new(base: impl Into<String>) -> Self {
        let mut base = base.into();
        while base.ends_with('/') {
            base.pop();
        }
        Self { base }
    }

    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base, path)
    }

    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let resp = Request::get(&self.url(path))
            .send()
            .await
            .map_err(|e| network(path, e))?;
        decode(path, resp).await
    }

    pub async fn post<B: Serialize, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T, ApiError> {
        let resp = Request::post(&self.url(path))
            .header("Content-Type", "application/json")
            .json(body)
            .map_err(|e| network(path, e))?
            .send()
            .await
            .map_err(|e| network(path, e))?;
        decode(path, resp).await
    }

    /// `post` for endpoints whose body is only an acknowledgement.
    pub async fn post_ack<B: Serialize>(&self, path: &str, body: &B) -> Result<(), ApiError> {
        self.post::<B, serde_json::Value>(path, body).await.map(|_| ())
    }

    // ---------------- Endpoints -----------------

    pub async fn state(&self) -> Result<GameState, ApiError> {
        checked("/api/state", self.get("/api/state").await?)
    }

    pub async fn new_game(&self, req: NewGameRequest) -> Result<(), ApiError> {
        self.post_ack("/api/new", &req).await
    }

    pub async fn move_agent(&self, direction: Direction) -> Result<GameState, ApiError> {
        self.post_state("/api/move", &DirectionRequest { direction }).await
    }

    pub async fn grab(&self) -> Result<GameState, ApiError> {
        self.post_state("/api/grab", &EmptyRequest::default()).await
    }

    pub async fn climb(&self) -> Result<GameState, ApiError> {
        self.post_state("/api/climb", &EmptyRequest::default()).await
    }

    pub async fn shoot(&self, direction: Direction) -> Result<GameState, ApiError> {
        self.post_state("/api/shoot", &DirectionRequest { direction }).await
    }

    pub async fn toggle_ai(&self, enabled: bool) -> Result<(), ApiError> {
        self.post_ack("/api/ai/toggle", &AiToggleRequest { enabled }).await
    }

    pub async fn ai_step(&self) -> Result<GameState, ApiError> {
        self.post_state("/api/ai/step", &EmptyRequest::default()).await
    }

    pub async fn reveal(&self) -> Result<GameState, ApiError> {
        self.post_state("/api/reveal", &EmptyRequest::default()).await
    }

    async fn post_state<B: Serialize>(&self, path: &str, body: &B) -> Result<GameState, ApiError> {
        checked(path, self.post(path, body).await?)
    }
}

/// Game endpoints as `Action::perform` sees them.
#[async_trait(?Send)]
pub trait GameApi {
    async fn state(&self) -> Result<GameState, ApiError>;
    async fn new_game(&self, req: NewGameRequest) -> Result<(), ApiError>;
    async fn move_agent(&self, direction: Direction) -> Result<GameState, ApiError>;
    async fn grab(&self) -> Result<GameState, ApiError>;
    async fn climb(&self) -> Result<GameState, ApiError>;
    async fn shoot(&self, direction: Direction) -> Result<GameState, ApiError>;
    async fn toggle_ai(&self, enabled: bool) -> Result<(), ApiError>;
    async fn ai_step(&self) -> Result<GameState, ApiError>;
    async fn reveal(&self) -> Result<GameState, ApiError>;
}

#[async_trait(?Send)]
impl GameApi for ApiClient {
    async fn state(&self) -> Result<GameState, ApiError> {
        ApiClient::state(self).await
    }

    async fn new_game(&self, req: NewGameRequest) -> Result<(), ApiError> {
        ApiClient::new_game(self, req).await
    }

    async fn move_agent(&self, direction: Direction) -> Result<GameState, ApiError> {
        ApiClient::move_agent(self, direction).await
    }

    async fn grab(&self) -> Result<GameState, ApiError> {
        ApiClient::grab(self).await
    }

    async fn climb(&self) -> Result<GameState, ApiError> {
        ApiClient::climb(self).await
    }

    async fn shoot(&self, direction: Direction) -> Result<GameState, ApiError> {
        ApiClient::shoot(self, direction).await
    }

    async fn toggle_ai(&self, enabled: bool) -> Result<(), ApiError> {
        ApiClient::toggle_ai(self, enabled).await
    }

    async fn ai_step(&self) -> Result<GameState, ApiError> {
        ApiClient::ai_step(self).await
    }

    async fn reveal(&self) -> Result<GameState, ApiError> {
        ApiClient::reveal(self).await
    }
}

fn network(path: &str, err: gloo::net::Error) -> ApiError {
    ApiError::Network { path: path.to_string(), reason: err.to_string() }
}

async fn decode<T: DeserializeOwned>(path: &str, resp: Response) -> Result<T, ApiError> {
    let status = resp.status();
    let ok = resp.ok();
    let text = resp.text().await.map_err(|e| network(path, e))?;
    if !ok {
        return Err(ApiError::Status { path: path.to_string(), status, body: text });
    }
    parse_body(path, &text)
}

pub(crate) fn parse_body<T: DeserializeOwned>(path: &str, text: &str) -> Result<T, ApiError> {
    serde_json::from_str(text)
        .map_err(|e| ApiError::Malformed { path: path.to_string(), reason: e.to_string() })
}

pub(crate) fn checked(path: &str, state: GameState) -> Result<GameState, ApiError> {
    state
        .validate()
        .map(|_| state)
        .map_err(|reason| ApiError::Malformed { path: path.to_string(), reason })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn base_url_is_joined_without_double_slash() {
        assert_eq!(ApiClient::new("").url("/api/state"), "/api/state");
        assert_eq!(
            ApiClient::new("http://localhost:5000/").url("/api/move"),
            "http://localhost:5000/api/move"
        );
    }

    #[test]
    fn undecodable_body_is_malformed() {
        let err = parse_body::<GameState>("/api/grab", "<html>oops</html>").unwrap_err();
        assert!(matches!(err, ApiError::Malformed { ref path, .. } if path == "/api/grab"));
    }

    #[test]
    fn bad_shape_is_malformed() {
        let raw = r#"{"size":3,"tiles":[[]],"status":"","score":0,"arrow_available":true,
            "wumpus_alive":true,"percepts":{"breeze":false,"stench":false,"glitter":false,"scream":false}}"#;
        let st: GameState = parse_body("/api/state", raw).unwrap();
        let err = checked("/api/state", st).unwrap_err();
        assert_eq!(err.to_string(), "/api/state: malformed response (expected 3 rows, got 1)");
    }

    #[test]
    fn status_error_message_includes_body_excerpt() {
        let err = ApiError::Status { path: "/api/new".into(), status: 500, body: " boom \n".into() };
        assert_eq!(err.to_string(), "/api/new: server answered 500: boom");
        let err = ApiError::Status { path: "/api/new".into(), status: 502, body: String::new() };
        assert_eq!(err.to_string(), "/api/new: server answered 502");
    }
}
