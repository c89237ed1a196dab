use axum::{
    routing::{get, post},
    Router,
};

use crate::controllers::calc_controller::{calculate, health};

/// Build the `/api/*` sub-router. Handlers are stateless, so no shared
/// state is attached.
pub fn api_routes() -> Router {
    Router::new()
        .route("/calculo", post(calculate))
        .route("/health", get(health))
}
