//! Defines the application's primary error type `AppError` and a convenience `Result` alias.
//!
//! Uses the `thiserror` crate for ergonomic error definition and provides `From`
//! implementations to convert common external errors into `AppError` variants.
//! Errors that do not implement `Clone` are wrapped in `Arc` to allow `AppError` to be cloneable.

use std::sync::Arc;
use thiserror::Error;

/// The primary error enumeration for all application-specific errors.
///
/// The variants keep the failure taxonomy visible to callers: transport and
/// HTTP-status failures (`Api`), response-body decode failures (`JsonParse`),
/// and configuration problems (`Env`, `Config`) stay distinguishable instead
/// of collapsing into a single opaque "fetch failed".
#[derive(Error, Debug, Clone)]
pub enum AppError {
    /// Error originating from the HTTP transport or a non-success status (`reqwest`).
    #[error("API Error: {0}")]
    Api(Arc<reqwest::Error>),

    /// Error during JSON parsing (`serde_json`). Wrapped in Arc as serde_json::Error is not Clone.
    #[error("JSON Parsing Error: {0}")]
    JsonParse(Arc<serde_json::Error>),

    /// Error related to accessing environment variables.
    #[error("Environment Error: {0}")]
    Env(#[from] std::env::VarError),

    /// Error for malformed configuration values.
    #[error("Configuration Error: {0}")]
    Config(String),
}

/// A specialized `Result` type using the application's `AppError`.
pub type Result<T> = std::result::Result<T, AppError>;

// --- From implementations ---
// These allow easy conversion from external error types into AppError
// using the `?` operator. Arc is used for non-Clone error types.

impl From<reqwest::Error> for AppError {
    fn from(err: reqwest::Error) -> Self {
        AppError::Api(Arc::new(err))
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::JsonParse(Arc::new(err))
    }
}
