//! # Profile Handlers
//!
//! Handlers for profile edits and password changes.

use std::sync::Arc;

use async_channel::Sender;
use parking_lot::RwLock;
use shared::dto::user::{UpdatePasswordRequest, UpdateProfileRequest};

use crate::app::events::AppEvent;
use crate::app::session::SessionManager;
use crate::app::state::AppState;
use crate::core::service::ApiService;
use crate::utils::validation;

/// Handle profile save click
///
/// Internal handler function - use [`crate::app::App::handle_profile_save_click`] instead.
pub(crate) fn handle_profile_save_click(
    state: Arc<RwLock<AppState>>,
    session: Arc<SessionManager>,
    api: Arc<dyn ApiService>,
    event_tx: Sender<AppEvent>,
    name: Option<String>,
    avatar: Option<String>,
) {
    if let Some(name) = &name {
        if name.trim().is_empty() {
            state.write().auth_form_error = Some("Name cannot be empty.".to_string());
            return;
        }
    }

    state.write().auth_form_error = None;
    let tx = event_tx.clone();
    tokio::spawn(async move {
        let update = UpdateProfileRequest { name, avatar };
        let result = match api.update_profile(update).await {
            Ok(user) => {
                // Server accepted the edit; mirror it into the session so
                // every subscriber sees the refreshed profile
                let outcome = session.update_profile(user.clone()).await;
                if outcome.success {
                    Ok(user)
                } else {
                    Err(outcome
                        .error
                        .unwrap_or_else(|| "Could not save profile changes.".to_string()))
                }
            }
            Err(e) => Err(e.user_message()),
        };
        let _ = tx.send(AppEvent::ProfileUpdateResult(result)).await;
    });
}

/// Handle password change click
///
/// Internal handler function - use [`crate::app::App::handle_password_change_click`] instead.
pub(crate) fn handle_password_change_click(
    state: Arc<RwLock<AppState>>,
    api: Arc<dyn ApiService>,
    event_tx: Sender<AppEvent>,
    current_password: String,
    new_password: String,
    confirm_password: String,
) {
    if let Some(problem) =
        validation::validate_password_change(&current_password, &new_password, &confirm_password)
    {
        state.write().auth_form_error = Some(problem);
        return;
    }

    state.write().auth_form_error = None;
    let tx = event_tx.clone();
    tokio::spawn(async move {
        let request = UpdatePasswordRequest {
            current_password,
            new_password,
        };
        let result = match api.update_password(request).await {
            Ok(_) => Ok(()),
            Err(e) => Err(e.user_message()),
        };
        let _ = tx.send(AppEvent::PasswordUpdateResult(result)).await;
    });
}
