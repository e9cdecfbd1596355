//! Client session: the one live game state plus request bookkeeping.
use std::rc::Rc;
use yew::Reducible;

use crate::api::ApiError;
use crate::input::Action;
use crate::model::GameState;

#[derive(Clone, Debug, Default, PartialEq)]
pub struct Session {
    /// Last state applied; replaced wholesale on every successful response.
    pub state: Option<GameState>,
    /// Message from the most recent failed request, cleared by the next success.
    pub error: Option<String>,
    /// Sequence number of the newest response applied (success or failure).
    pub last_applied: u64,
    /// Responses dropped because a newer one had already been applied.
    pub stale_dropped: u64,
    /// Game-over overlay closed for the current game. Holds until a state
    /// that is not over arrives (a new game).
    pub game_over_dismissed: bool,
    /// AI checkbox as shown; flips as soon as the user asks.
    pub ai_enabled: bool,
    /// AI flag the server last acknowledged.
    pub ai_confirmed: bool,
}

impl Session {
    pub fn show_game_over(&self) -> bool {
        self.state.as_ref().is_some_and(|st| st.game_over) && !self.game_over_dismissed
    }
}

#[derive(Clone, Debug)]
pub enum SessionAction {
    /// An action was sent; the AI checkbox follows it right away.
    Issued(Action),
    Applied { seq: u64, action: Action, outcome: Result<GameState, ApiError> },
    DismissError,
    HideGameOver,
}

impl Reducible for Session {
    type Action = SessionAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut new = (*self).clone();
        match action {
            SessionAction::Issued(sent) => match sent {
                // The server switches the AI off when it resets a game.
                Action::NewGame(_) => new.ai_enabled = false,
                Action::ToggleAi(on) => new.ai_enabled = on,
                _ => return self,
            },
            SessionAction::Applied { seq, action, outcome } => {
                if seq <= new.last_applied {
                    new.stale_dropped += 1;
                    return Rc::new(new);
                }
                new.last_applied = seq;
                match outcome {
                    Ok(state) => {
                        if !state.game_over {
                            new.game_over_dismissed = false;
                        }
                        match action {
                            Action::NewGame(_) => new.ai_confirmed = false,
                            Action::ToggleAi(on) => new.ai_confirmed = on,
                            _ => {}
                        }
                        new.state = Some(state);
                        new.error = None;
                    }
                    Err(err) => {
                        if matches!(action, Action::NewGame(_) | Action::ToggleAi(_)) {
                            new.ai_enabled = new.ai_confirmed;
                        }
                        new.error = Some(err.to_string());
                    }
                }
            }
            SessionAction::DismissError => {
                if new.error.is_none() {
                    return self;
                }
                new.error = None;
            }
            SessionAction::HideGameOver => {
                if new.game_over_dismissed {
                    return self;
                }
                new.game_over_dismissed = true;
            }
        }
        Rc::new(new)
    }
}
