//! # Services Module
//!
//! External integrations for the Cartlink client.
//!
//! ## Module Overview
//!
//! ```text
//! services/
//! ├── api/        - Backend HTTP API client
//! │                 (auth, user profile, lists, invite joins)
//! └── storage.rs  - Persisted session vault
//!                   (token, user profile, theme preference)
//! ```
//!
//! The API client and the vault are deliberately decoupled from the app
//! layer: the gateway reads the bearer token straight from the vault per
//! request, never from in-memory session state, so there is no circular
//! dependency between the request path and the session manager.

pub mod api;
pub mod storage;
