//! # Authentication Handlers
//!
//! Handlers for login, signup, email verification, and sign-out actions.

use std::sync::Arc;

use async_channel::Sender;
use parking_lot::RwLock;
use shared::dto::auth::{LoginRequest, SignupRequest, VerifyEmailRequest};

use crate::app::events::AppEvent;
use crate::app::session::SessionManager;
use crate::app::state::AppState;
use crate::core::service::ApiService;
use crate::utils::validation;

/// Handle login button click
///
/// Internal handler function - use [`crate::app::App::handle_login_click`] instead.
pub(crate) fn handle_login_click(
    state: Arc<RwLock<AppState>>,
    session: Arc<SessionManager>,
    api: Arc<dyn ApiService>,
    event_tx: Sender<AppEvent>,
    email: String,
    password: String,
) {
    if let Some(problem) = validation::validate_login(&email, &password) {
        state.write().auth_form_error = Some(problem);
        return;
    }

    state.write().auth_form_error = None;
    let tx = event_tx.clone();
    tokio::spawn(async move {
        let request = LoginRequest { email, password };
        let result = match api.login(request).await {
            Ok(response) => {
                let outcome = session.sign_in(response.token, response.user).await;
                if outcome.success {
                    Ok(())
                } else {
                    Err(outcome
                        .error
                        .unwrap_or_else(|| "Sign-in failed, please try again.".to_string()))
                }
            }
            Err(e) => Err(e.user_message()),
        };
        let _ = tx.send(AppEvent::LoginResult(result)).await;
    });
}

/// Handle signup button click
///
/// Internal handler function - use [`crate::app::App::handle_signup_click`] instead.
pub(crate) fn handle_signup_click(
    state: Arc<RwLock<AppState>>,
    api: Arc<dyn ApiService>,
    event_tx: Sender<AppEvent>,
    name: String,
    email: String,
    password: String,
    confirm_password: String,
) {
    if let Some(problem) = validation::validate_signup(&name, &email, &password, &confirm_password)
    {
        state.write().auth_form_error = Some(problem);
        return;
    }

    state.write().auth_form_error = None;
    let tx = event_tx.clone();
    tokio::spawn(async move {
        let request = SignupRequest {
            name,
            email: email.clone(),
            password,
        };
        let result = match api.signup(request).await {
            Ok(_) => Ok(email),
            Err(e) => Err(e.user_message()),
        };
        let _ = tx.send(AppEvent::SignupResult(result)).await;
    });
}

/// Handle verification code submission
///
/// Internal handler function - use [`crate::app::App::handle_verify_email_click`] instead.
pub(crate) fn handle_verify_email_click(
    state: Arc<RwLock<AppState>>,
    session: Arc<SessionManager>,
    api: Arc<dyn ApiService>,
    event_tx: Sender<AppEvent>,
    email: String,
    code: String,
) {
    if code.trim().is_empty() {
        state.write().auth_form_error = Some("Please enter the verification code.".to_string());
        return;
    }

    state.write().auth_form_error = None;
    let tx = event_tx.clone();
    tokio::spawn(async move {
        let request = VerifyEmailRequest {
            email,
            code: code.trim().to_string(),
        };
        let result = match api.verify_email(request).await {
            Ok(response) => {
                let outcome = session.sign_in(response.token, response.user).await;
                if outcome.success {
                    Ok(())
                } else {
                    Err(outcome
                        .error
                        .unwrap_or_else(|| "Sign-in failed, please try again.".to_string()))
                }
            }
            Err(e) => Err(e.user_message()),
        };
        let _ = tx.send(AppEvent::VerifyEmailResult(result)).await;
    });
}

/// Handle "resend code" click on the verification screen
///
/// Internal handler function - use [`crate::app::App::handle_resend_code_click`] instead.
pub(crate) fn handle_resend_code_click(
    api: Arc<dyn ApiService>,
    event_tx: Sender<AppEvent>,
    email: String,
) {
    let tx = event_tx.clone();
    tokio::spawn(async move {
        let result = match api.send_verification_code(&email).await {
            Ok(_) => Ok(()),
            Err(e) => Err(e.user_message()),
        };
        let _ = tx.send(AppEvent::CodeResent(result)).await;
    });
}

/// Handle sign-out click
///
/// Internal handler function - use [`crate::app::App::handle_sign_out_click`] instead.
pub(crate) fn handle_sign_out_click(session: Arc<SessionManager>, event_tx: Sender<AppEvent>) {
    let tx = event_tx.clone();
    tokio::spawn(async move {
        let outcome = session.sign_out().await;
        let _ = tx.send(AppEvent::SignOutResult(outcome)).await;
    });
}
