use crate::domain::{models::event::{Event, EventFields}, ports::EventRepository};
use crate::error::AppError;
use async_trait::async_trait;
use sqlx::SqlitePool;

pub struct SqliteEventRepo {
    pool: SqlitePool,
}

impl SqliteEventRepo {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl EventRepository for SqliteEventRepo {
    async fn create(&self, fields: &EventFields) -> Result<Event, AppError> {
        sqlx::query_as::<_, Event>(
            "INSERT INTO events (name, date, type, game, description) VALUES (?, ?, ?, ?, ?) RETURNING *"
        )
            .bind(&fields.name)
            .bind(&fields.date)
            .bind(&fields.event_type)
            .bind(&fields.game)
            .bind(&fields.description)
            .fetch_one(&self.pool)
            .await
            .map_err(AppError::Database)
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Event>, AppError> {
        sqlx::query_as::<_, Event>("SELECT * FROM events WHERE id = ?")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(AppError::Database)
    }

    async fn list(&self) -> Result<Vec<Event>, AppError> {
        sqlx::query_as::<_, Event>("SELECT * FROM events ORDER BY id ASC")
            .fetch_all(&self.pool)
            .await
            .map_err(AppError::Database)
    }

    async fn update(&self, id: i64, fields: &EventFields) -> Result<Event, AppError> {
        sqlx::query_as::<_, Event>(
            "UPDATE events SET name=?, date=?, type=?, game=?, description=? WHERE id=? RETURNING *"
        )
            .bind(&fields.name)
            .bind(&fields.date)
            .bind(&fields.event_type)
            .bind(&fields.game)
            .bind(&fields.description)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(AppError::Database)?
            .ok_or_else(AppError::event_not_found)
    }

    async fn delete(&self, id: i64) -> Result<(), AppError> {
        let result = sqlx::query("DELETE FROM events WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(AppError::Database)?;

        if result.rows_affected() == 0 {
            return Err(AppError::event_not_found());
        }
        Ok(())
    }

    async fn count(&self) -> Result<i64, AppError> {
        sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM events")
            .fetch_one(&self.pool)
            .await
            .map_err(AppError::Database)
    }
}
