use serde::Serialize;
use sqlx::FromRow;

#[derive(Debug, Serialize, FromRow, Clone, PartialEq, Eq)]
pub struct Event {
    pub id: i64,
    pub name: String,
    pub date: String,
    #[serde(rename = "type")]
    #[sqlx(rename = "type")]
    pub event_type: String,
    pub game: String,
    pub description: String,
}

/// Everything an event carries except its storage-assigned id. Used for
/// inserts and for full-replacement updates.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EventFields {
    pub name: String,
    pub date: String,
    pub event_type: String,
    pub game: String,
    pub description: String,
}
