//! # Core Abstractions
//!
//! Core traits, error types, and configuration for the client.
//!
//! - **[`error`]**: Application error types (`AppError`, `Result<T>`)
//! - **[`service`]**: Service traits for dependency injection
//!   (`ApiService`, `SessionVault`)
//! - **[`config`]**: Runtime configuration from environment variables
//!
//! ## Dependency Injection
//!
//! The session manager and the invite resolver only see the traits in
//! [`service`]; production wires in [`crate::services::api::ApiClient`]
//! and [`crate::services::storage::FileVault`], tests wire in mocks and
//! [`crate::services::storage::MemoryVault`].

pub mod config;
pub mod error;
pub mod service;

// Re-export commonly used types for convenience
pub use config::ClientConfig;
pub use error::{AppError, Result};
pub use service::{ApiService, SessionVault};
