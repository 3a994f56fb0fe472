pub mod form;

use axum::routing::post;
use axum::Router;

use crate::state::SharedState;

pub fn form_routes() -> Router<SharedState> {
    Router::new()
        .route("/submit", post(form::submit))
        .route("/language", post(form::toggle_language))
        .route("/reset", post(form::reset))
}
