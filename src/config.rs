use std::env;

use crate::error::AppError;

#[derive(Clone, Debug)]
pub struct Config {
    pub database_url: String,
    pub port: u16,
    /// Delete the on-disk store before the schema is applied.
    pub reset_on_start: bool,
    pub log_dir: String,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        dotenvy::dotenv().ok();

        let port = match env::var("PORT") {
            Ok(raw) => raw
                .parse()
                .map_err(|_| AppError::Config(format!("PORT must be a number, got '{}'", raw)))?,
            Err(_) => 5000,
        };

        let reset_on_start = match env::var("RESET_DATABASE") {
            Ok(raw) => parse_flag(&raw).ok_or_else(|| {
                AppError::Config(format!("RESET_DATABASE must be a boolean, got '{}'", raw))
            })?,
            Err(_) => true,
        };

        Ok(Self {
            database_url: env::var("DATABASE_URL").unwrap_or_else(|_| "sqlite://database.db".to_string()),
            port,
            reset_on_start,
            log_dir: env::var("LOG_DIR").unwrap_or_else(|_| "./logs".to_string()),
        })
    }
}

fn parse_flag(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "true" | "1" | "yes" => Some(true),
        "false" | "0" | "no" => Some(false),
        _ => None,
    }
}
