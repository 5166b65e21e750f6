use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use crate::state::AppState;
use crate::api::dtos::requests::EventArgs;
use crate::api::extractors::event_id::EventId;
use crate::error::AppError;
use std::sync::Arc;
use tracing::info;

pub async fn list_events(
    State(state): State<Arc<AppState>>,
) -> Result<impl IntoResponse, AppError> {
    let events = state.event_repo.list().await?;
    Ok(Json(events))
}

/// Responds with the whole collection, not just the created event.
pub async fn create_event(
    State(state): State<Arc<AppState>>,
    args: EventArgs,
) -> Result<impl IntoResponse, AppError> {
    let fields = args.validate()?;

    let created = state.event_repo.create(&fields).await?;
    info!("Event created: {} ({})", created.id, created.name);

    let events = state.event_repo.list().await?;
    Ok((StatusCode::CREATED, Json(events)))
}

pub async fn get_event(
    State(state): State<Arc<AppState>>,
    EventId(id): EventId,
) -> Result<impl IntoResponse, AppError> {
    let event = state.event_repo.find_by_id(id).await?
        .ok_or_else(AppError::event_not_found)?;

    Ok(Json(event))
}

/// Full replacement: every field is required and overwritten.
pub async fn update_event(
    State(state): State<Arc<AppState>>,
    EventId(id): EventId,
    args: EventArgs,
) -> Result<impl IntoResponse, AppError> {
    let event = state.event_repo.find_by_id(id).await?
        .ok_or_else(AppError::event_not_found)?;

    let fields = args.validate()?;
    let updated = state.event_repo.update(event.id, &fields).await?;
    info!("Event updated: {}", updated.id);
    Ok(Json(updated))
}

/// Responds with the remaining collection.
pub async fn delete_event(
    State(state): State<Arc<AppState>>,
    EventId(id): EventId,
) -> Result<impl IntoResponse, AppError> {
    let event = state.event_repo.find_by_id(id).await?
        .ok_or_else(AppError::event_not_found)?;

    state.event_repo.delete(event.id).await?;
    info!("Event deleted: {}", event.id);

    let events = state.event_repo.list().await?;
    Ok(Json(events))
}
