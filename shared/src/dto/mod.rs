//! # Data Transfer Objects (DTOs)
//!
//! This module contains all data structures used for communication between
//! the Cartlink client and the backend via the REST API.
//!
//! ## Module Organization
//!
//! - [`auth`] - Signup, login, and email-verification DTOs
//! - [`user`] - User profile DTOs
//! - [`list`] - Shopping list, membership, and item DTOs
//!
//! ## Serialization Format
//!
//! All DTOs use `serde_json` for JSON serialization:
//!
//! - **Field naming**: camelCase on the wire (the backend is a JavaScript
//!   service), via `#[serde(rename_all = "camelCase")]`
//! - **Optional fields**: Omitted when `None` using
//!   `#[serde(skip_serializing_if = "Option::is_none")]`
//! - **All types**: Implement both `Serialize` and `Deserialize`
//!
//! ## Example JSON Communication
//!
//! ```text
//! POST /auth/login
//! Content-Type: application/json
//!
//! {
//!   "email": "alice@example.com",
//!   "password": "MyPassword123!"
//! }
//! ```
//!
//! ```text
//! HTTP/1.1 200 OK
//! Content-Type: application/json
//!
//! {
//!   "status": "success",
//!   "token": "eyJhbGciOiJIUzI1NiIsInR5cCI6IkpXVCJ9...",
//!   "user": {
//!     "id": "64f1c0a2",
//!     "name": "Alice",
//!     "email": "alice@example.com",
//!     "isVerified": true
//!   }
//! }
//! ```

pub mod auth;
pub mod list;
pub mod user;

pub use auth::*;
pub use list::*;
pub use user::*;
