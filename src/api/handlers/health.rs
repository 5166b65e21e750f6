use axum::{extract::State, response::{Html, IntoResponse}, Json};
use crate::state::AppState;
use crate::error::AppError;
use serde_json::json;
use std::sync::Arc;

pub async fn health_check(
    State(state): State<Arc<AppState>>,
) -> Result<impl IntoResponse, AppError> {
    let events = state.event_repo.count().await?;
    Ok(Json(json!({ "status": "ok", "events": events })))
}

pub async fn home() -> Html<&'static str> {
    Html("<h1>Event Service REST API</h1>")
}
