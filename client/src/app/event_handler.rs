//! # Event Handler
//!
//! Handles async event results from background tasks, updating application state accordingly.
//!
//! This module processes `AppEvent` messages received from async tasks (network requests,
//! session mutations) and applies the resulting state and navigation transitions.

use crate::app::events::AppEvent;
use crate::app::join::JoinOutcome;
use crate::app::navigation::{self, NavReset};
use crate::app::session::{SessionEvent, SessionOutcome};
use crate::app::state::{Notice, Screen};
use crate::app::App;

/// Trait for event handling implementation
pub(crate) trait AppEventHandler {
    fn handle_event_impl(&mut self, event: AppEvent);
}

impl AppEventHandler for App {
    /// Handle async event results
    ///
    /// Acquires the write lock per-event for minimal duration.
    fn handle_event_impl(&mut self, event: AppEvent) {
        match event {
            AppEvent::Session(event) => {
                self.handle_session_event(event);
            }
            AppEvent::LoginResult(result) => {
                self.handle_auth_result(result);
            }
            AppEvent::SignupResult(result) => {
                self.handle_signup_result(result);
            }
            AppEvent::VerifyEmailResult(result) => {
                self.handle_verify_email_result(result);
            }
            AppEvent::CodeResent(result) => {
                self.handle_code_resent(result);
            }
            AppEvent::SignOutResult(outcome) => {
                self.handle_sign_out_result(outcome);
            }
            AppEvent::ProfileUpdateResult(result) => {
                self.handle_profile_update_result(result);
            }
            AppEvent::PasswordUpdateResult(result) => {
                self.handle_password_update_result(result);
            }
            AppEvent::DeepLinkResolved(outcome) => {
                self.handle_deep_link_resolved(outcome);
            }
            AppEvent::ThemeApplied(mode) => {
                self.state.write().theme = mode;
            }
        }
    }
}

impl App {
    /// A phase change moves the navigation root; a profile update only
    /// refreshes the snapshot.
    fn handle_session_event(&mut self, event: SessionEvent) {
        let snapshot = self.session.snapshot();
        let mut state = self.state.write();
        state.session = snapshot;

        match event {
            SessionEvent::PhaseChanged(phase) => {
                tracing::info!(phase = ?phase, "Session phase changed");
                if phase != crate::app::session::SessionPhase::Authenticated {
                    state.active_list_id = None;
                    state.pending_verification_email = None;
                }
                state.current_screen = navigation::root_screen(phase);
            }
            SessionEvent::ProfileUpdated(_) => {
                // Snapshot refresh above is the whole effect
            }
        }
    }

    fn handle_auth_result(&mut self, result: Result<(), String>) {
        // Success navigates via the session phase change; only failures
        // touch state here
        if let Err(message) = result {
            self.state.write().auth_form_error = Some(message);
        }
    }

    fn handle_signup_result(&mut self, result: Result<String, String>) {
        let mut state = self.state.write();
        match result {
            Ok(email) => {
                state.pending_verification_email = Some(email.clone());
                state.auth_form_error = None;
                state.current_screen = Screen::VerifyEmail;
                state.push_notice(Notice::new(
                    "Check your email",
                    format!("We sent a verification code to {}.", email),
                ));
            }
            Err(message) => {
                state.auth_form_error = Some(message);
            }
        }
    }

    fn handle_verify_email_result(&mut self, result: Result<(), String>) {
        match result {
            Ok(()) => {
                // Navigation follows the phase change; just drop the
                // pending email
                self.state.write().pending_verification_email = None;
            }
            Err(message) => {
                self.state.write().auth_form_error = Some(message);
            }
        }
    }

    fn handle_code_resent(&mut self, result: Result<(), String>) {
        let mut state = self.state.write();
        match result {
            Ok(()) => state.push_notice(Notice::new(
                "Code sent",
                "A new verification code is on its way.",
            )),
            Err(message) => state.push_notice(Notice::new("Could not send code", message)),
        }
    }

    fn handle_sign_out_result(&mut self, outcome: SessionOutcome) {
        // Successful sign-out navigates via the phase change
        if !outcome.success {
            let message = outcome
                .error
                .unwrap_or_else(|| "Sign-out failed, please try again.".to_string());
            self.state.write().push_notice(Notice::new("Sign out", message));
        }
    }

    fn handle_profile_update_result(
        &mut self,
        result: Result<shared::dto::user::UserProfile, String>,
    ) {
        let mut state = self.state.write();
        match result {
            Ok(_) => {
                // The session's ProfileUpdated event refreshes the snapshot
                state.auth_form_error = None;
                state.current_screen = Screen::Profile;
                state.push_notice(Notice::new("Profile", "Your profile has been updated."));
            }
            Err(message) => {
                state.auth_form_error = Some(message);
            }
        }
    }

    fn handle_password_update_result(&mut self, result: Result<(), String>) {
        let mut state = self.state.write();
        match result {
            Ok(()) => {
                state.auth_form_error = None;
                state.current_screen = Screen::Profile;
                state.push_notice(Notice::new("Password", "Your password has been changed."));
            }
            Err(message) => {
                state.auth_form_error = Some(message);
            }
        }
    }

    fn handle_deep_link_resolved(&mut self, outcome: JoinOutcome) {
        let mut state = self.state.write();
        if let Some(notice) = outcome.notice {
            state.push_notice(notice);
        }
        state.current_screen = outcome.reset.screen();
        state.active_list_id = match outcome.reset {
            NavReset::AppList { list_id } => Some(list_id),
            _ => None,
        };
    }
}
