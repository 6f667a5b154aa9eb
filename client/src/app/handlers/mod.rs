//! # Action Handlers
//!
//! Handlers for user-triggered actions. Each handler validates its input
//! against the current state, spawns the async work on the Tokio runtime,
//! and reports the result back to the main loop as an [`AppEvent`].
//!
//! [`AppEvent`]: crate::app::events::AppEvent

pub(crate) mod auth;
pub(crate) mod navigation;
pub(crate) mod profile;
