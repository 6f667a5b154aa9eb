//! # Common Error Types
//!
//! Consolidated error handling for the client core.
//!
//! This module provides a centralized error type [`AppError`] covering all
//! error scenarios in the client.
//!
//! ## Error Categories
//!
//! Errors are categorized by their source:
//!
//! - **Api**: Backend API communication errors (network, HTTP, JSON parsing)
//! - **Storage**: Persisted session-vault errors (read/write/serialize)
//! - **State**: Application state management errors (invalid transitions)
//! - **Validation**: Input validation errors (invalid format, missing fields)
//!
//! ## Usage Pattern
//!
//! ```rust,no_run
//! use client::core::error::AppError;
//!
//! fn validate_quantity(quantity: u32) -> Result<u32, AppError> {
//!     if quantity == 0 {
//!         return Err(AppError::Validation("Quantity must be positive".to_string()));
//!     }
//!     Ok(quantity)
//! }
//! ```

use thiserror::Error;

/// Application-wide error type covering all error scenarios in the client.
///
/// Each variant carries a descriptive `String` message for context. The
/// `#[error]` attribute from `thiserror` provides automatic `Display` and
/// `Error` implementations.
#[derive(Debug, Error)]
pub enum AppError {
    /// Backend API communication error.
    ///
    /// Network failures, HTTP errors, JSON parsing errors, and
    /// authentication failures all land here.
    #[error("API error: {0}")]
    Api(String),

    /// Persisted session-vault error.
    ///
    /// Read/write failures against the local key-value document, or
    /// serialization failures of its contents.
    #[error("Storage error: {0}")]
    Storage(String),

    /// Application state management error.
    ///
    /// Invalid state transitions, such as navigating to a screen that
    /// requires authentication without a session.
    #[error("State error: {0}")]
    State(String),

    /// Input validation error.
    ///
    /// Invalid format, missing required fields, out-of-range values.
    #[error("Validation error: {0}")]
    Validation(String),
}

/// Convenience type alias for `Result<T, AppError>`.
pub type Result<T> = std::result::Result<T, AppError>;

impl From<std::io::Error> for AppError {
    fn from(err: std::io::Error) -> Self {
        AppError::Storage(err.to_string())
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::Storage(err.to_string())
    }
}
