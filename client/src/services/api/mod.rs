//! # Backend API Client
//!
//! HTTP client for backend API communication.
//!
//! ## Module Overview
//!
//! ```text
//! api/
//! ├── client.rs  - ApiClient: reqwest client, base URL, bearer injection
//! ├── auth.rs    - Signup, login, email verification endpoints
//! ├── user.rs    - Profile and password endpoints
//! └── lists.rs   - List membership and item endpoints
//! ```
//!
//! ## Response Decoding
//!
//! Every response is decoded at this boundary into a tagged result:
//! `Ok(payload)` for HTTP success, [`ApiError::Server`] carrying the
//! backend's error message for application failures, [`ApiError::Network`]
//! for transport failures, and [`ApiError::Decode`] for malformed bodies.
//! Callers never inspect status strings themselves.

mod client;

pub mod auth;
pub mod lists;
pub mod user;

pub use client::ApiClient;

use serde::de::DeserializeOwned;
use shared::dto::auth::ErrorResponse;
use thiserror::Error;

/// Fallback shown to the user when the backend gave no usable message.
pub const GENERIC_API_ERROR: &str = "Something went wrong. Please try again.";

/// Tagged error produced at the API gateway boundary.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ApiError {
    /// Transport failure: no response was received.
    #[error("network error: {0}")]
    Network(String),

    /// The backend answered with an error payload; the message is the
    /// server's own wording.
    #[error("{0}")]
    Server(String),

    /// The response body could not be decoded into the expected shape.
    #[error("unexpected response: {0}")]
    Decode(String),
}

impl ApiError {
    /// Message suitable for direct display to the user.
    ///
    /// Server-provided messages are surfaced verbatim; transport and
    /// decoding failures collapse to a generic fallback.
    pub fn user_message(&self) -> String {
        match self {
            ApiError::Server(message) => message.clone(),
            ApiError::Network(_) | ApiError::Decode(_) => GENERIC_API_ERROR.to_string(),
        }
    }
}

/// Convenience alias for gateway results.
pub type ApiResult<T> = Result<T, ApiError>;

/// Decode an HTTP response into a tagged result.
///
/// HTTP success parses the payload; anything else parses the backend's
/// error body and surfaces its message, falling back to the HTTP status
/// line when no message is present.
pub(crate) async fn decode<T: DeserializeOwned>(response: reqwest::Response) -> ApiResult<T> {
    let status = response.status();

    if status.is_success() {
        response
            .json::<T>()
            .await
            .map_err(|e| ApiError::Decode(e.to_string()))
    } else {
        let fallback = format!("Request failed with status {}", status.as_u16());
        let message = match response.json::<ErrorResponse>().await {
            Ok(body) => body.message.unwrap_or(fallback),
            Err(_) => fallback,
        };
        tracing::warn!(status = status.as_u16(), error = %message, "API request failed");
        Err(ApiError::Server(message))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_message_passes_server_text_verbatim() {
        let err = ApiError::Server("Invalid code".to_string());
        assert_eq!(err.user_message(), "Invalid code");
    }

    #[test]
    fn test_user_message_hides_transport_details() {
        let err = ApiError::Network("connection refused".to_string());
        assert_eq!(err.user_message(), GENERIC_API_ERROR);

        let err = ApiError::Decode("missing field `token`".to_string());
        assert_eq!(err.user_message(), GENERIC_API_ERROR);
    }
}
