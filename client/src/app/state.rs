//! # Application State Types
//!
//! All state-related types for the client: screens, session snapshot,
//! notices, and the global [`AppState`].

use shared::dto::user::UserProfile;

use crate::app::session::{SessionPhase, SessionSnapshot};
use crate::app::theme::ThemeMode;

/// Application screens
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    /// Splash shown while the session bootstrap is in flight
    Loading,
    /// Login form
    Login,
    /// Signup form
    Signup,
    /// Email verification code entry
    VerifyEmail,
    /// Home screen with the user's lists
    Home,
    /// Single list with its items and members
    ListDetail,
    /// Profile overview
    Profile,
    /// Profile edit form
    EditProfile,
    /// Password change form
    ChangePassword,
    /// Theme selection screen
    Theme,
}

impl Screen {
    /// Get all screens in navigation order
    pub fn all() -> &'static [Screen] {
        &[
            Screen::Loading,
            Screen::Login,
            Screen::Signup,
            Screen::VerifyEmail,
            Screen::Home,
            Screen::ListDetail,
            Screen::Profile,
            Screen::EditProfile,
            Screen::ChangePassword,
            Screen::Theme,
        ]
    }

    /// Get screen title for header display
    pub fn title(&self) -> &'static str {
        match self {
            Screen::Loading => "Loading",
            Screen::Login => "Login",
            Screen::Signup => "Sign Up",
            Screen::VerifyEmail => "Verify Email",
            Screen::Home => "My Lists",
            Screen::ListDetail => "List",
            Screen::Profile => "Profile",
            Screen::EditProfile => "Edit Profile",
            Screen::ChangePassword => "Change Password",
            Screen::Theme => "Theme",
        }
    }
}

/// User-facing notification (the Alert equivalent of the mobile UI).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub title: String,
    pub message: String,
}

impl Notice {
    pub fn new(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            message: message.into(),
        }
    }
}

/// Global application state
#[derive(Debug, Clone)]
pub struct AppState {
    /// Current active screen
    pub current_screen: Screen,
    /// Snapshot of the session manager's state, kept in sync via events
    pub session: SessionSnapshot,
    /// Current theme selection
    pub theme: ThemeMode,
    /// List identifier the detail screen is showing
    pub active_list_id: Option<String>,
    /// Email awaiting verification after signup
    pub pending_verification_email: Option<String>,
    /// Error shown inline on the active auth form
    pub auth_form_error: Option<String>,
    /// Pending notices to display (drained by the UI)
    pub notices: Vec<Notice>,
}

impl AppState {
    pub fn new() -> Self {
        Self {
            current_screen: Screen::Loading,
            session: SessionSnapshot::loading(),
            theme: ThemeMode::Light,
            active_list_id: None,
            pending_verification_email: None,
            auth_form_error: None,
            notices: Vec::new(),
        }
    }

    /// Check if the user is authenticated
    pub fn is_authenticated(&self) -> bool {
        self.session.phase == SessionPhase::Authenticated
    }

    /// The signed-in profile, if any
    pub fn current_user(&self) -> Option<&UserProfile> {
        self.session.user.as_ref()
    }

    /// Check if a screen requires authentication
    pub fn requires_auth(screen: Screen) -> bool {
        matches!(
            screen,
            Screen::Home
                | Screen::ListDetail
                | Screen::Profile
                | Screen::EditProfile
                | Screen::ChangePassword
                | Screen::Theme
        )
    }

    /// Queue a notice for the UI to display
    pub fn push_notice(&mut self, notice: Notice) {
        self.notices.push(notice);
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
