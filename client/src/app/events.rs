//! # Application Events
//!
//! Event types for async task communication between background tasks and the main thread.

use shared::dto::user::UserProfile;

use crate::app::join::JoinOutcome;
use crate::app::session::{SessionEvent, SessionOutcome};
use crate::app::theme::ThemeMode;

/// Async task results sent to main thread
#[derive(Debug, Clone)]
pub enum AppEvent {
    /// Session manager notification forwarded from the subscription
    Session(SessionEvent),
    /// Login request plus session sign-in completed
    LoginResult(Result<(), String>),
    /// Signup completed; Ok carries the email awaiting verification
    SignupResult(Result<String, String>),
    /// Email verification plus session sign-in completed
    VerifyEmailResult(Result<(), String>),
    /// Verification code resend completed
    CodeResent(Result<(), String>),
    /// Sign-out completed
    SignOutResult(SessionOutcome),
    /// Profile update persisted on the server and in the session
    ProfileUpdateResult(Result<UserProfile, String>),
    /// Password change completed
    PasswordUpdateResult(Result<(), String>),
    /// A deep link resolved to a navigation reset (invite joins included)
    DeepLinkResolved(JoinOutcome),
    /// Theme selection persisted and applied
    ThemeApplied(ThemeMode),
}
