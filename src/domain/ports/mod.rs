use crate::domain::models::event::{Event, EventFields};
use crate::error::AppError;
use async_trait::async_trait;

#[async_trait]
pub trait EventRepository: Send + Sync {
    async fn create(&self, fields: &EventFields) -> Result<Event, AppError>;
    async fn find_by_id(&self, id: i64) -> Result<Option<Event>, AppError>;
    async fn list(&self) -> Result<Vec<Event>, AppError>;
    async fn update(&self, id: i64, fields: &EventFields) -> Result<Event, AppError>;
    async fn delete(&self, id: i64) -> Result<(), AppError>;
    async fn count(&self) -> Result<i64, AppError>;
}
