//! Counter resource handlers (`/counters/:name`).
//!
//! - POST: create at 0, 201 / 409 on duplicate
//! - GET: read, 200 / 404
//! - PUT: increment by one and return the new value, 200 / 404
//!
//! The name is the percent-decoded path segment, used verbatim.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use tally_core::Counter;

use crate::api::ApiError;
use crate::app_state::AppState;

pub async fn create(
    State(app): State<AppState>,
    Path(name): Path<String>,
) -> Result<(StatusCode, Json<Counter>), ApiError> {
    let counter = app.store().create(&name)?;
    Ok((StatusCode::CREATED, Json(counter)))
}

pub async fn read(
    State(app): State<AppState>,
    Path(name): Path<String>,
) -> Result<Json<Counter>, ApiError> {
    Ok(Json(app.store().get(&name)?))
}

pub async fn increment(
    State(app): State<AppState>,
    Path(name): Path<String>,
) -> Result<Json<Counter>, ApiError> {
    Ok(Json(app.store().increment(&name)?))
}
