use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use std::sync::Arc;
use std::time::Duration;
use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions};
use sqlx::{ConnectOptions, SqlitePool};
use tracing::{info, warn};
use tracing::log::LevelFilter;

use crate::config::Config;
use crate::error::AppError;
use crate::state::AppState;
use crate::infra::repositories::sqlite_event_repo::SqliteEventRepo;

pub async fn bootstrap_state(config: &Config) -> Result<AppState, AppError> {
    let pool = connect_pool(config).await?;
    run_sqlite_migrations(&pool).await?;
    Ok(state_from_pool(config, pool))
}

pub fn state_from_pool(config: &Config, pool: SqlitePool) -> AppState {
    AppState {
        config: config.clone(),
        event_repo: Arc::new(SqliteEventRepo::new(pool)),
    }
}

pub async fn connect_pool(config: &Config) -> Result<SqlitePool, AppError> {
    let opts = SqliteConnectOptions::from_str(&config.database_url)?
        .create_if_missing(true)
        .journal_mode(SqliteJournalMode::Wal)
        .busy_timeout(Duration::from_secs(5))
        .log_statements(LevelFilter::Debug)
        .log_slow_statements(LevelFilter::Warn, Duration::from_millis(500));

    if config.reset_on_start {
        reset_store(opts.get_filename()).await?;
    } else {
        info!("Reusing existing SQLite store at {}", opts.get_filename().display());
    }

    info!("Initializing SQLite connection with WAL Mode...");
    let pool = SqlitePoolOptions::new()
        .max_connections(5)
        .connect_with(opts)
        .await?;

    Ok(pool)
}

/// Removes the store file and its WAL/shared-memory siblings. Missing files are
/// not an error, which also covers in-memory stores: they have no file on disk.
pub async fn reset_store(db_path: &Path) -> Result<(), AppError> {
    let mut removed = false;
    for path in store_files(db_path) {
        match tokio::fs::remove_file(&path).await {
            Ok(()) => removed = true,
            Err(e) if e.kind() == ErrorKind::NotFound => {}
            Err(e) => return Err(AppError::Io(e)),
        }
    }

    if removed {
        warn!("Deleted existing SQLite store at {} (reset on start)", db_path.display());
    }
    Ok(())
}

fn store_files(db_path: &Path) -> [PathBuf; 3] {
    let with_suffix = |suffix: &str| {
        let mut name = db_path.as_os_str().to_owned();
        name.push(suffix);
        PathBuf::from(name)
    };
    [db_path.to_path_buf(), with_suffix("-wal"), with_suffix("-shm")]
}

pub async fn run_sqlite_migrations(pool: &SqlitePool) -> Result<(), AppError> {
    sqlx::migrate!("./migrations/sqlite").run(pool).await?;
    Ok(())
}
