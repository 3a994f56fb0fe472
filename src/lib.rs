pub mod config;
pub mod error;
pub mod state;
pub mod i18n;
pub mod form;
pub mod forward;
pub mod session;
pub mod sweeper;
pub mod routes;
pub mod views;

use std::sync::Arc;

use axum::http::{HeaderName, HeaderValue};
use axum::Router;
use tower::ServiceBuilder;
use tower_http::services::ServeDir;
use tower_http::set_header::SetResponseHeaderLayer;
use tower_http::trace::TraceLayer;

use crate::config::Config;
use crate::forward::Forwarder;
use crate::session::SessionStore;
use crate::state::{AppState, SharedState};

pub fn build_app(config: Config, forwarder: Arc<dyn Forwarder>) -> (Router, SharedState) {
    tracing::info!(
        forwarder = forwarder.name(),
        default_language = %config.default_language,
        "Building form service"
    );

    let state: SharedState = Arc::new(AppState {
        sessions: SessionStore::new(config.default_language),
        config,
        forwarder,
    });

    // Security headers
    let headers = ServiceBuilder::new()
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
        ));

    let app = Router::new()
        .merge(views::view_routes())
        .merge(routes::form_routes())
        .nest_service("/static", ServeDir::new("static"))
        .route("/health", axum::routing::get(health))
        .layer(headers)
        .layer(TraceLayer::new_for_http())
        .with_state(state.clone());

    (app, state)
}

async fn health() -> &'static str {
    "ok"
}
