//! Browser client for a Wumpus World server: renders the board it reports and
//! forwards player and AI commands to its `/api/*` endpoints.

pub mod api;
pub mod components;
pub mod config;
pub mod input;
pub mod model;
pub mod render;
pub mod state;
pub mod util;

pub use components::app::App;
