use anyhow::{Context, Result};
use dotenvy::dotenv;
use std::env;

/// Application configuration loaded from environment variables
#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub detector_url: String,
    pub detector_timeout_secs: u64,
    pub review_limit_default: i64,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        // Load .env file if present (development)
        let _ = dotenv();

        Ok(Self {
            database_url: database_url_from_env()?,
            detector_url: env::var("DETECTOR_URL")
                .unwrap_or_else(|_| "http://localhost:8000".to_string()),
            detector_timeout_secs: env::var("DETECTOR_TIMEOUT_SECS")
                .unwrap_or_else(|_| "10".to_string())
                .parse()
                .context("DETECTOR_TIMEOUT_SECS must be a valid number")?,
            review_limit_default: env::var("REVIEW_LIMIT_DEFAULT")
                .unwrap_or_else(|_| "60".to_string())
                .parse()
                .context("REVIEW_LIMIT_DEFAULT must be a valid number")?,
        })
    }
}

/// Assemble the Postgres URL from the discrete DB_* variables unless a full
/// DATABASE_URL is provided.
fn database_url_from_env() -> Result<String> {
    if let Ok(url) = env::var("DATABASE_URL") {
        return Ok(url);
    }

    let host = env::var("DB_HOST").unwrap_or_else(|_| "localhost".to_string());
    let port: u16 = env::var("DB_PORT")
        .unwrap_or_else(|_| "5432".to_string())
        .parse()
        .context("DB_PORT must be a valid port number")?;
    let name = env::var("DB_NAME").unwrap_or_else(|_| "reviews".to_string());
    let user = env::var("DB_USER").unwrap_or_else(|_| "postgres".to_string());
    let password = env::var("DB_PASSWORD").unwrap_or_else(|_| "postgres".to_string());

    Ok(format!(
        "postgres://{}:{}@{}:{}/{}",
        user, password, host, port, name
    ))
}
