//! Typed errors. HTTP mapping lives in `response`.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("invalid value for {key}: '{value}'")]
    InvalidValue { key: &'static str, value: String },
    #[error("unknown store kind: '{0}' (expected 'postgres' or 'memory')")]
    UnknownStore(String),
}

#[derive(Error, Debug)]
pub enum AppError {
    #[error("{0}")]
    BadInput(String),
    #[error("student '{0}' not found")]
    NotFound(String),
    #[error("request body is too large")]
    BodyTooLarge,
    #[error("{context}")]
    Storage {
        context: String,
        #[source]
        source: sqlx::Error,
    },
}

impl AppError {
    /// Wraps a driver error with a caller-safe description of the failed operation.
    pub fn storage(context: impl Into<String>, source: sqlx::Error) -> Self {
        AppError::Storage {
            context: context.into(),
            source,
        }
    }
}
