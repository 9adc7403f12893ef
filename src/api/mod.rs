//! HTTP API handlers for the highscore service

pub mod health;
pub mod scores;
pub mod ui;

pub use health::health_routes;
pub use scores::{dismiss_pending, get_state, register_pending, submit_time};
pub use ui::{serve_app_js, serve_index};
