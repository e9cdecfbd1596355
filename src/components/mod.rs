pub mod action_panel;
pub mod app;
pub mod board;
pub mod controls_panel;
pub mod error_banner;
pub mod game_over_overlay;
pub mod legend;
pub mod legend_panel;
pub mod percepts_panel;
pub mod stats_panel;
