//! # Cartlink Client - Library Root
//!
//! Core of the Cartlink shared shopping-list client: the session
//! lifecycle, the invite/join deep-link flow, the backend API gateway,
//! and the persisted session vault. This library crate contains all
//! modules used by the binary crate (`main.rs`); a UI layer renders on
//! top of [`app::App`] and its shared state.
//!
//! ## Architecture
//!
//! ```text
//! ┌────────────────────────────────────────────────────────┐
//! │               client (this crate)                      │
//! ├────────────────────────────────────────────────────────┤
//! │  Tokio         - Async runtime                         │
//! │  Reqwest       - HTTP client                           │
//! │  async-channel - Event delivery                        │
//! │  tracing       - Structured logging                    │
//! └────────────────────────────────────────────────────────┘
//!                          │ HTTP (bearer auth)
//!                          ▼
//!               ┌─────────────────────┐
//!               │   Cartlink backend  │
//!               └─────────────────────┘
//! ```
//!
//! ## Module Structure
//!
//! - **app**: Orchestrator, session manager, theme manager, invite
//!   resolver, deep-link routing, navigation decisions, and handlers
//! - **core**: Configuration, error types, and the service traits the
//!   app layer is injected with
//! - **services**: The real implementations - HTTP API gateway and
//!   file-backed session vault
//! - **utils**: Form validation helpers
//!
//! ## Startup Sequence
//!
//! 1. [`logging::init`] sets up file logging
//! 2. [`crate::core::ClientConfig::from_env`] resolves the backend URL
//!    and data directory
//! 3. [`app::App::new`] wires vault, gateway, session, and theme
//! 4. [`app::App::bootstrap`] restores or discards the persisted session
//! 5. The UI loop renders from `app.state` and calls `app.on_tick()`

pub mod app;
pub mod core;
pub mod logging;
pub mod services;
pub mod utils;
