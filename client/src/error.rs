//! Error handling for the CropWeather advisory client
//!
//! The taxonomy matters for recovery: network failures on read-only panels
//! are recovered with fallback data, malformed responses are never retried,
//! and validation failures never reach the network layer.

use thiserror::Error;

/// Application error types
#[derive(Error, Debug)]
pub enum AppError {
    // Transport failure or non-2xx response from the advisory service
    #[error("Network error: {0}")]
    Network(String),

    // Response parsed but did not match the expected shape
    #[error("Malformed response: {0}")]
    Shape(String),

    // Client-side form input failed its constraints
    #[error("Validation error on {field}: {message}")]
    Validation { field: String, message: String },

    #[error("Invalid state transition: {0}")]
    InvalidStateTransition(String),

    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("Translation resource error: {0}")]
    Translation(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Internal error")]
    Internal(#[from] anyhow::Error),
}

impl AppError {
    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        AppError::Validation {
            field: field.into(),
            message: message.into(),
        }
    }

    /// Whether a retry could plausibly succeed
    pub fn is_transient(&self) -> bool {
        matches!(self, AppError::Network(_))
    }
}

impl From<validator::ValidationErrors> for AppError {
    fn from(errors: validator::ValidationErrors) -> Self {
        let detail = errors
            .field_errors()
            .iter()
            .map(|(field, errs)| {
                let message = errs
                    .first()
                    .and_then(|e| e.message.as_ref())
                    .map(|m| m.to_string())
                    .unwrap_or_else(|| "invalid value".to_string());
                (field.to_string(), message)
            })
            .next();

        match detail {
            Some((field, message)) => AppError::Validation { field, message },
            None => AppError::Validation {
                field: "form".to_string(),
                message: "invalid input".to_string(),
            },
        }
    }
}

/// Result type alias used throughout the client
pub type AppResult<T> = Result<T, AppError>;
