use serde::Serialize;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", content = "message")]
pub enum AppError {
    /// Any failure talking to the births feed: transport, non-success status or body decoding.
    #[error("Fetch error: {0}")]
    Fetch(String),

    #[error("Invalid date: {0}")]
    InvalidDate(String),

    #[error("No date selected")]
    NoDateSelected,

    #[error("Configuration error: {0}")]
    Config(String),
}

impl From<reqwest::Error> for AppError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            AppError::Fetch("Request timeout".to_string())
        } else if err.is_connect() {
            AppError::Fetch("Failed to connect to births feed".to_string())
        } else if let Some(status) = err.status() {
            AppError::Fetch(format!("HTTP {}: {}", status, err))
        } else {
            AppError::Fetch(err.to_string())
        }
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::Fetch(format!("Failed to parse births feed response: {}", err))
    }
}

impl From<std::num::ParseIntError> for AppError {
    fn from(err: std::num::ParseIntError) -> Self {
        AppError::Config(format!("Invalid number: {}", err))
    }
}

// Result type alias for convenience
pub type AppResult<T> = Result<T, AppError>;
