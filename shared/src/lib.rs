//! # Shared Data Transfer Objects Library
//!
//! This library defines the wire contract between the Cartlink client and the
//! backend API. All DTOs use JSON serialization via `serde`.
//!
//! ## Structure
//!
//! - **[`dto`]**: Data Transfer Objects for API communication
//!   - **[`dto::auth`]**: Signup, login, and email-verification DTOs
//!   - **[`dto::user`]**: User profile DTOs
//!   - **[`dto::list`]**: Shopping list and item DTOs
//! - **[`utils`]**: Shared utility functions
//!   - **[`utils::mask_email`]**: Redact an email address for log output
//!   - **[`utils::display_name`]**: Trimmed display name with fallback
//!
//! ## Wire Format
//!
//! The backend is a JavaScript service, so JSON fields are **camelCase**;
//! every struct carries `#[serde(rename_all = "camelCase")]`. Optional fields
//! are omitted from JSON when `None`, and all types implement both
//! `Serialize` and `Deserialize` for bidirectional communication.
//!
//! ## Usage in the client
//!
//! ```rust
//! use shared::dto::auth::LoginRequest;
//!
//! let request = LoginRequest {
//!     email: "alice@example.com".to_string(),
//!     password: "secret".to_string(),
//! };
//!
//! let body = serde_json::to_string(&request).unwrap();
//! assert!(body.contains("alice@example.com"));
//! ```

pub mod dto;
pub mod utils;

// Re-export commonly used types for convenience
// Note: Wildcard re-exports are used here since shared is a DTO library
// where all exports are meant to be public API
pub use dto::*;
pub use utils::*;
