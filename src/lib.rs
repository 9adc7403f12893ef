//! highscore library - pending time registration and top-10 leaderboard
//!
//! Local, single-instance service: times are submitted as pending entries, an
//! operator attaches a name and phone number to register them onto the
//! leaderboard (or dismisses them), and a browser UI polls `/state`.

use std::sync::Arc;

use axum::http::{header, HeaderValue};
use axum::Router;
use tower_http::set_header::SetResponseHeaderLayer;
use tower_http::trace::TraceLayer;

pub mod api;
pub mod config;
pub mod error;
pub mod model;
pub mod ranking;
pub mod service;
pub mod store;

pub use error::{Error, Result};
pub use service::ScoreService;

/// Application state shared across HTTP handlers
#[derive(Clone)]
pub struct AppState {
    /// Score service owning the leaderboard, pending set, and persistence
    pub service: Arc<ScoreService>,
}

impl AppState {
    /// Create new application state
    pub fn new(service: Arc<ScoreService>) -> Self {
        Self { service }
    }
}

/// Build application router
///
/// Every response carries `Cache-Control: no-store` — the UI polls `/state`
/// on a fixed interval and must never see a cached copy.
pub fn build_router(state: AppState) -> Router {
    use axum::routing::{get, post};

    Router::new()
        .route("/", get(api::serve_index))
        .route("/static/app.js", get(api::serve_app_js))
        .route("/submit", post(api::submit_time))
        .route("/state", get(api::get_state))
        .route("/register", post(api::register_pending))
        .route("/dismiss", post(api::dismiss_pending))
        .merge(api::health_routes())
        .layer(SetResponseHeaderLayer::overriding(
            header::CACHE_CONTROL,
            HeaderValue::from_static("no-store"),
        ))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
