use axum::{
    extract::{FromRequestParts, Path},
    http::request::Parts,
};
use crate::error::AppError;

/// Integer id from `/events/{id}`. A segment that is not an integer names no
/// event, so it is rejected as not found rather than as a bad request.
pub struct EventId(pub i64);

impl<S> FromRequestParts<S> for EventId
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(raw): Path<String> = Path::from_request_parts(parts, state)
            .await
            .map_err(|_| AppError::event_not_found())?;

        raw.parse::<i64>()
            .map(EventId)
            .map_err(|_| AppError::event_not_found())
    }
}
