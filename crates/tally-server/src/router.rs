//! Axum router wiring.

use axum::{
    routing::{get, post},
    Router,
};

use crate::{api, app_state::AppState, ops};

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route(
            "/counters/:name",
            post(api::counters::create)
                .get(api::counters::read)
                .put(api::counters::increment),
        )
        .route("/healthz", get(ops::healthz))
        .with_state(state)
}
