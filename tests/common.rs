#![allow(dead_code)]

use event_service::{
    api::router::create_router,
    config::Config,
    infra::factory::{connect_pool, run_sqlite_migrations, state_from_pool},
    state::AppState,
};
use axum::{
    body::Body,
    http::{header, Method, Request, StatusCode},
    Router,
};
use serde_json::Value;
use sqlx::SqlitePool;
use std::sync::Arc;
use tower::ServiceExt;
use uuid::Uuid;

pub struct TestApp {
    pub router: Router,
    pub pool: SqlitePool,
    pub db_filename: String,
    pub state: Arc<AppState>,
    cleanup_on_drop: bool,
}

impl TestApp {
    pub async fn new() -> Self {
        let db_filename = format!("test_{}.db", Uuid::new_v4());
        Self::open(db_filename, true).await
    }

    /// Boots against `db_filename`, optionally keeping whatever store is
    /// already there.
    pub async fn open(db_filename: String, reset_on_start: bool) -> Self {
        let config = test_config(&db_filename, reset_on_start);

        let pool = connect_pool(&config)
            .await
            .expect("Failed to connect to test db");
        run_sqlite_migrations(&pool)
            .await
            .expect("Failed to migrate test db");

        let state = Arc::new(state_from_pool(&config, pool.clone()));
        let router = create_router(state.clone());

        Self {
            router,
            pool,
            db_filename,
            state,
            cleanup_on_drop: true,
        }
    }

    pub async fn request(&self, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
        let builder = Request::builder().method(method).uri(uri);
        let req = match body {
            Some(payload) => builder
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(payload.to_string()))
                .unwrap(),
            None => builder.body(Body::empty()).unwrap(),
        };

        let response = self.router.clone().oneshot(req).await.unwrap();
        let status = response.status();
        (status, parse_body(response).await)
    }

    /// Closes the pool but leaves the store on disk for the next boot.
    pub async fn keep_store(mut self) {
        self.cleanup_on_drop = false;
        self.pool.close().await;
    }

    pub async fn count(&self) -> i64 {
        self.state.event_repo.count().await.unwrap()
    }
}

impl Drop for TestApp {
    fn drop(&mut self) {
        if self.cleanup_on_drop {
            remove_store(&self.db_filename);
        }
    }
}

pub fn test_config(db_filename: &str, reset_on_start: bool) -> Config {
    Config {
        database_url: format!("sqlite://{}", db_filename),
        port: 0,
        reset_on_start,
        log_dir: "./logs".to_string(),
    }
}

pub fn remove_store(db_filename: &str) {
    for suffix in ["", "-wal", "-shm"] {
        let _ = std::fs::remove_file(format!("{}{}", db_filename, suffix));
    }
}

pub async fn parse_body(response: axum::response::Response) -> Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    if bytes.is_empty() {
        return Value::Null;
    }
    serde_json::from_slice(&bytes).unwrap_or_else(|_| Value::String(String::from_utf8_lossy(&bytes).into_owned()))
}

pub fn lan_finals() -> Value {
    serde_json::json!({
        "name": "LAN Finals",
        "date": "2024-05-01",
        "type": "Tournament",
        "game": "Chess",
        "description": "Championship"
    })
}
