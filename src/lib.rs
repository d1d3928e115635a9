pub mod config;
pub mod error;
pub mod models;
pub mod routes;
pub mod state;
pub mod store;

use std::sync::Arc;

use axum::extract::DefaultBodyLimit;
use axum::http::{HeaderName, HeaderValue};
use axum::Router;
use tower_http::services::ServeDir;
use tower_http::set_header::SetResponseHeaderLayer;
use tower_http::trace::TraceLayer;

use crate::config::Config;
use crate::state::{AppState, SharedState};
use crate::store::ProjectStore;

pub fn build_app(store: Arc<dyn ProjectStore>, config: &Config) -> Router {
    let static_dir = ServeDir::new(&config.static_dir);

    let state: SharedState = Arc::new(AppState { store });

    Router::new()
        .merge(routes::api_routes())
        .route("/health", axum::routing::get(health))
        // Landing page and its assets
        .fallback_service(static_dir)
        // Oversized bodies surface as a body rejection inside the handler
        .layer(DefaultBodyLimit::max(config.max_body_size))
        .layer(SetResponseHeaderLayer::overriding(
            HeaderName::from_static("x-content-type-options"),
            HeaderValue::from_static("nosniff"),
        ))
        .layer(SetResponseHeaderLayer::overriding(
            HeaderName::from_static("x-frame-options"),
            HeaderValue::from_static("DENY"),
        ))
        .layer(SetResponseHeaderLayer::overriding(
            HeaderName::from_static("referrer-policy"),
            HeaderValue::from_static("strict-origin-when-cross-origin"),
        ))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn health() -> &'static str {
    "ok"
}
