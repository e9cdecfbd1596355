//! User actions and how each one maps onto API calls.

use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

use gloo::events::{EventListener, EventListenerOptions};
use wasm_bindgen::JsCast;
use web_sys::{EventTarget, KeyboardEvent};
use yew::Callback;

use crate::api::{ApiError, GameApi};
use crate::model::{Direction, GameState, NewGameRequest};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Action {
    Refresh,
    NewGame(NewGameRequest),
    Move(Direction),
    Grab,
    Climb,
    Shoot(Direction),
    ToggleAi(bool),
    AiStep,
    Reveal,
}

impl Action {
    /// Runs the action against the server and returns the state to display.
    /// New game and AI toggle only acknowledge, so the state is fetched afterwards.
    pub async fn perform<C: GameApi + ?Sized>(self, client: &C) -> Result<GameState, ApiError> {
        match self {
            Action::Refresh => client.state().await,
            Action::NewGame(req) => {
                client.new_game(req).await?;
                client.state().await
            }
            Action::Move(dir) => client.move_agent(dir).await,
            Action::Grab => client.grab().await,
            Action::Climb => client.climb().await,
            Action::Shoot(dir) => client.shoot(dir).await,
            Action::ToggleAi(enabled) => {
                client.toggle_ai(enabled).await?;
                client.state().await
            }
            Action::AiStep => client.ai_step().await,
            Action::Reveal => client.reveal().await,
        }
    }

    /// Endpoints hit, in order.
    pub fn endpoints(&self) -> &'static [&'static str] {
        match self {
            Action::Refresh => &["/api/state"],
            Action::NewGame(_) => &["/api/new", "/api/state"],
            Action::Move(_) => &["/api/move"],
            Action::Grab => &["/api/grab"],
            Action::Climb => &["/api/climb"],
            Action::Shoot(_) => &["/api/shoot"],
            Action::ToggleAi(_) => &["/api/ai/toggle", "/api/state"],
            Action::AiStep => &["/api/ai/step"],
            Action::Reveal => &["/api/reveal"],
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Action::Refresh => write!(f, "refresh"),
            Action::NewGame(req) => write!(f, "new game (size={:?}, pits={:?})", req.size, req.pits),
            Action::Move(d) => write!(f, "move {}", d),
            Action::Grab => write!(f, "grab"),
            Action::Climb => write!(f, "climb"),
            Action::Shoot(d) => write!(f, "shoot {}", d),
            Action::ToggleAi(on) => write!(f, "ai {}", if *on { "on" } else { "off" }),
            Action::AiStep => write!(f, "ai step"),
            Action::Reveal => write!(f, "reveal"),
        }
    }
}

/// Keyboard shortcut lookup. Shooting uses whatever direction the selector holds.
pub fn action_for_key(key: &str, shoot_dir: Direction) -> Option<Action> {
    match key {
        "ArrowUp" => Some(Action::Move(Direction::Up)),
        "ArrowDown" => Some(Action::Move(Direction::Down)),
        "ArrowLeft" => Some(Action::Move(Direction::Left)),
        "ArrowRight" => Some(Action::Move(Direction::Right)),
        "g" | "G" => Some(Action::Grab),
        "c" | "C" => Some(Action::Climb),
        "s" | "S" => Some(Action::Shoot(shoot_dir)),
        _ => None,
    }
}

/// Listens for shortcut keys on `target` (the document in the app). A claimed
/// key has its default suppressed and emits exactly one action; combos with
/// Ctrl, Meta or Alt are left to the browser.
pub fn attach_shortcuts(
    target: &EventTarget,
    shoot_dir: Rc<RefCell<Direction>>,
    on_action: Callback<Action>,
) -> EventListener {
    EventListener::new_with_options(
        target,
        "keydown",
        EventListenerOptions::enable_prevent_default(),
        move |event| {
            let Some(e) = event.dyn_ref::<KeyboardEvent>() else {
                return;
            };
            if e.ctrl_key() || e.meta_key() || e.alt_key() {
                return;
            }
            let dir = *shoot_dir.borrow();
            if let Some(action) = action_for_key(&e.key(), dir) {
                e.prevent_default();
                on_action.emit(action);
            }
        },
    )
}

/// Parses a form field the way the number inputs are forwarded: anything that
/// is not an integer becomes `None` and is sent as `null`.
pub fn parse_count(raw: &str) -> Option<i64> {
    raw.trim().parse::<i64>().ok()
}

pub fn new_game_request(size: &str, pits: &str) -> NewGameRequest {
    NewGameRequest { size: parse_count(size), pits: parse_count(pits) }
}
