//! # Application Orchestrator
//!
//! The main [`App`] struct wires the session manager, theme manager, API
//! gateway, and vault together and drives the event loop.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────┐
//! │                Main Thread (UI loop)                    │
//! │  ┌──────────────────────────────────────────────────┐   │
//! │  │  App (orchestrator)                              │   │
//! │  │  - on_tick() - drains pending events             │   │
//! │  │  - handle_*_click() - user action handlers       │   │
//! │  │  - handle_deep_link() - URL events               │   │
//! │  └────────────┬─────────────────────────────────────┘   │
//! │               │                                         │
//! │  ┌────────────▼─────────────────────────────────────┐   │
//! │  │  State: Arc<RwLock<AppState>>                    │   │
//! │  └──────────────────────────────────────────────────┘   │
//! └───────────────────────┬─────────────────────────────────┘
//!                         │ async_channel (unbounded)
//! ┌───────────────────────▼─────────────────────────────────┐
//! │              Async Tasks (Tokio)                        │
//! │  handlers spawn requests against the API gateway and    │
//! │  session manager, then send AppEvent results back       │
//! └─────────────────────────────────────────────────────────┘
//! ```
//!
//! Session change notifications arrive on a second channel (the session
//! manager's subscription) and are folded into the same `on_tick()` drain,
//! so all state mutation happens on the main thread in arrival order.

mod deeplink;
mod event_handler;
mod events;
mod handlers;
mod join;
mod navigation;
mod session;
mod state;
mod theme;

pub use deeplink::{parse_deep_link, DeepLink};
pub use events::AppEvent;
pub use join::{InviteJoinResolver, JoinOutcome};
pub use navigation::{deep_link_reset, root_screen, NavReset};
pub use session::{SessionEvent, SessionManager, SessionOutcome, SessionPhase, SessionSnapshot};
pub use state::{AppState, Notice, Screen};
pub use theme::{ThemeManager, ThemeMode};

use std::sync::Arc;

use async_channel::{unbounded, Receiver, Sender};
use parking_lot::RwLock;

use crate::core::config::ClientConfig;
use crate::core::service::{ApiService, SessionVault};
use crate::services::api::ApiClient;
use crate::services::storage::FileVault;

use event_handler::AppEventHandler;

/// Main application orchestrator.
///
/// Owns the shared state, the session and theme managers, and the event
/// channel that async tasks report back on. All dependencies are passed
/// in through construction; nothing reaches for globals.
pub struct App {
    /// Shared application state, read by the UI every frame
    pub state: Arc<RwLock<AppState>>,
    /// Session lifecycle owner
    pub session: Arc<SessionManager>,
    /// Theme selection owner
    pub theme: Arc<ThemeManager>,
    /// API gateway handed to spawned tasks
    api: Arc<dyn ApiService>,
    /// Receives async task results
    event_rx: Receiver<AppEvent>,
    /// Cloned into spawned tasks
    event_tx: Sender<AppEvent>,
    /// Session manager subscription, drained alongside task events
    session_events: Receiver<SessionEvent>,
}

impl App {
    /// Create an app wired to the real file vault and HTTP gateway.
    pub fn new(config: &ClientConfig, device_scheme: ThemeMode) -> Self {
        let vault: Arc<dyn SessionVault> = Arc::new(FileVault::new(config.vault_path()));
        let api: Arc<dyn ApiService> = Arc::new(ApiClient::new(config, vault.clone()));
        Self::with_services(vault, api, device_scheme)
    }

    /// Create an app over explicit vault and gateway implementations.
    pub fn with_services(
        vault: Arc<dyn SessionVault>,
        api: Arc<dyn ApiService>,
        device_scheme: ThemeMode,
    ) -> Self {
        let session = Arc::new(SessionManager::new(vault.clone(), api.clone()));
        let theme = Arc::new(ThemeManager::new(vault, device_scheme));
        let session_events = session.subscribe();
        let (event_tx, event_rx) = unbounded();

        Self {
            state: Arc::new(RwLock::new(AppState::new())),
            session,
            theme,
            api,
            event_rx,
            event_tx,
            session_events,
        }
    }

    /// Run the startup sequence: load the theme, then restore or discard
    /// the persisted session. Ends with the state reflecting the resolved
    /// phase - the splash is gone exactly once per launch.
    pub async fn bootstrap(&mut self) {
        let theme = self.theme.load().await;
        self.state.write().theme = theme;

        self.session.bootstrap().await;
        self.on_tick();
    }

    /// Drain pending events without blocking. Called once per UI frame.
    ///
    /// Session notifications are applied before task results so the
    /// snapshot is never behind the event that refers to it.
    pub fn on_tick(&mut self) {
        while let Ok(event) = self.session_events.try_recv() {
            self.handle_event(AppEvent::Session(event));
        }
        while let Ok(event) = self.event_rx.try_recv() {
            self.handle_event(event);
        }
    }

    /// Apply a single event to the state.
    pub fn handle_event(&mut self, event: AppEvent) {
        self.handle_event_impl(event);
    }

    /// Wait for the next task event, then apply it and everything else
    /// pending. Returns false when all senders are gone.
    pub async fn next_event(&mut self) -> bool {
        match self.event_rx.recv().await {
            Ok(event) => {
                while let Ok(session_event) = self.session_events.try_recv() {
                    self.handle_event(AppEvent::Session(session_event));
                }
                self.handle_event(event);
                true
            }
            Err(_) => false,
        }
    }

    // User action entry points. Each validates, spawns the async work,
    // and returns immediately; results land in on_tick().

    pub fn handle_login_click(&self, email: String, password: String) {
        handlers::auth::handle_login_click(
            self.state.clone(),
            self.session.clone(),
            self.api.clone(),
            self.event_tx.clone(),
            email,
            password,
        );
    }

    pub fn handle_signup_click(
        &self,
        name: String,
        email: String,
        password: String,
        confirm_password: String,
    ) {
        handlers::auth::handle_signup_click(
            self.state.clone(),
            self.api.clone(),
            self.event_tx.clone(),
            name,
            email,
            password,
            confirm_password,
        );
    }

    pub fn handle_verify_email_click(&self, code: String) {
        let Some(email) = self.state.read().pending_verification_email.clone() else {
            self.state.write().auth_form_error =
                Some("No signup in progress. Please sign up first.".to_string());
            return;
        };
        handlers::auth::handle_verify_email_click(
            self.state.clone(),
            self.session.clone(),
            self.api.clone(),
            self.event_tx.clone(),
            email,
            code,
        );
    }

    pub fn handle_resend_code_click(&self) {
        let Some(email) = self.state.read().pending_verification_email.clone() else {
            return;
        };
        handlers::auth::handle_resend_code_click(self.api.clone(), self.event_tx.clone(), email);
    }

    pub fn handle_sign_out_click(&self) {
        handlers::auth::handle_sign_out_click(self.session.clone(), self.event_tx.clone());
    }

    pub fn handle_profile_save_click(&self, name: Option<String>, avatar: Option<String>) {
        handlers::profile::handle_profile_save_click(
            self.state.clone(),
            self.session.clone(),
            self.api.clone(),
            self.event_tx.clone(),
            name,
            avatar,
        );
    }

    pub fn handle_password_change_click(
        &self,
        current_password: String,
        new_password: String,
        confirm_password: String,
    ) {
        handlers::profile::handle_password_change_click(
            self.state.clone(),
            self.api.clone(),
            self.event_tx.clone(),
            current_password,
            new_password,
            confirm_password,
        );
    }

    pub fn handle_screen_change(&self, screen: Screen) {
        handlers::navigation::handle_screen_change(self.state.clone(), &self.session, screen);
    }

    pub fn handle_list_selected(&self, list_id: String) {
        handlers::navigation::handle_list_selected(self.state.clone(), &self.session, list_id);
    }

    pub fn handle_deep_link(&self, url: String) {
        handlers::navigation::handle_deep_link(
            self.session.clone(),
            self.api.clone(),
            self.event_tx.clone(),
            url,
        );
    }

    pub fn handle_theme_selected(&self, mode: ThemeMode) {
        handlers::navigation::handle_theme_selected(self.theme.clone(), self.event_tx.clone(), mode);
    }

    pub fn handle_theme_toggle(&self) {
        let next = self.theme.mode().toggled();
        self.handle_theme_selected(next);
    }
}

#[cfg(test)]
mod tests {
    use super::session::testing::{sample_user, MockApi};
    use super::*;
    use crate::services::api::ApiError;
    use crate::services::storage::MemoryVault;
    use shared::dto::auth::AuthResponse;
    use shared::dto::list::JoinListResponse;
    use std::sync::atomic::Ordering;
    use std::sync::Arc;

    fn auth_response(token: &str) -> AuthResponse {
        AuthResponse {
            token: token.to_string(),
            user: sample_user(),
            message: None,
        }
    }

    fn app_with(vault: Arc<MemoryVault>, api: Arc<MockApi>) -> App {
        App::with_services(vault, api, ThemeMode::Light)
    }

    #[tokio::test]
    async fn test_cold_start_without_session_lands_on_login() {
        let mut app = app_with(Arc::new(MemoryVault::new()), Arc::new(MockApi::new()));

        app.bootstrap().await;

        let state = app.state.read();
        assert_eq!(state.current_screen, Screen::Login);
        assert_eq!(state.session.phase, SessionPhase::Anonymous);
    }

    #[tokio::test]
    async fn test_cold_start_with_valid_session_lands_on_home() {
        let user = sample_user();
        let vault = Arc::new(MemoryVault::with_session("tok-1", &user));
        let api = Arc::new(MockApi::with_whoami(Ok(user)));
        let mut app = app_with(vault, api);

        app.bootstrap().await;

        let state = app.state.read();
        assert_eq!(state.current_screen, Screen::Home);
        assert!(state.is_authenticated());
    }

    #[tokio::test]
    async fn test_login_flow_navigates_home() {
        let api = Arc::new(MockApi::new());
        *api.login_response.lock() = Some(Ok(auth_response("tok-1")));
        let mut app = app_with(Arc::new(MemoryVault::new()), api);
        app.bootstrap().await;

        app.handle_login_click("alice@example.com".to_string(), "password1".to_string());
        assert!(app.next_event().await);

        let state = app.state.read();
        assert_eq!(state.current_screen, Screen::Home);
        assert!(state.auth_form_error.is_none());
        assert!(state.is_authenticated());
    }

    #[tokio::test]
    async fn test_login_failure_shows_form_error_and_stays_on_login() {
        let api = Arc::new(MockApi::new());
        *api.login_response.lock() = Some(Err(ApiError::Server(
            "Incorrect email or password".to_string(),
        )));
        let mut app = app_with(Arc::new(MemoryVault::new()), api);
        app.bootstrap().await;

        app.handle_login_click("alice@example.com".to_string(), "password1".to_string());
        assert!(app.next_event().await);

        let state = app.state.read();
        assert_eq!(state.current_screen, Screen::Login);
        assert_eq!(
            state.auth_form_error.as_deref(),
            Some("Incorrect email or password")
        );
    }

    #[tokio::test]
    async fn test_login_validation_rejects_bad_input_without_request() {
        let api = Arc::new(MockApi::new());
        let mut app = app_with(Arc::new(MemoryVault::new()), api);
        app.bootstrap().await;

        app.handle_login_click("not-an-email".to_string(), "password1".to_string());

        // No task was spawned, the error is already set
        assert!(app.state.read().auth_form_error.is_some());
    }

    #[tokio::test]
    async fn test_sign_out_returns_to_login_and_clears_vault() {
        let user = sample_user();
        let vault = Arc::new(MemoryVault::with_session("tok-1", &user));
        let api = Arc::new(MockApi::with_whoami(Ok(user)));
        let mut app = app_with(vault.clone(), api);
        app.bootstrap().await;

        app.handle_sign_out_click();
        assert!(app.next_event().await);

        let state = app.state.read();
        assert_eq!(state.current_screen, Screen::Login);
        assert!(!state.is_authenticated());
        drop(state);
        assert!(vault.token().await.expect("read").is_none());
    }

    #[tokio::test]
    async fn test_join_deep_link_while_signed_out_goes_to_login() {
        let api = Arc::new(MockApi::new());
        let mut app = app_with(Arc::new(MemoryVault::new()), api.clone());
        app.bootstrap().await;

        app.handle_deep_link("cartlink://joinList/ABC123".to_string());
        assert!(app.next_event().await);

        assert_eq!(app.state.read().current_screen, Screen::Login);
        assert_eq!(api.join_calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_join_deep_link_while_signed_in_joins_and_goes_home() {
        let user = sample_user();
        let vault = Arc::new(MemoryVault::with_session("tok-1", &user));
        let api = Arc::new(MockApi::with_whoami(Ok(user)));
        *api.join_response.lock() = Some(Ok(JoinListResponse {
            list_id: "l1".to_string(),
            list_name: Some("Groceries".to_string()),
        }));
        let mut app = app_with(vault, api.clone());
        app.bootstrap().await;

        app.handle_deep_link("cartlink://joinList/ABC123".to_string());
        assert!(app.next_event().await);

        let state = app.state.read();
        assert_eq!(state.current_screen, Screen::Home);
        assert_eq!(api.join_calls.load(Ordering::SeqCst), 1);
        assert_eq!(state.notices.len(), 1);
        assert!(state.notices[0].message.contains("Groceries"));
    }

    #[tokio::test]
    async fn test_list_deep_link_opens_detail_when_signed_in() {
        let user = sample_user();
        let vault = Arc::new(MemoryVault::with_session("tok-1", &user));
        let api = Arc::new(MockApi::with_whoami(Ok(user)));
        let mut app = app_with(vault, api);
        app.bootstrap().await;

        app.handle_deep_link("cartlink://lists/l42".to_string());
        assert!(app.next_event().await);

        let state = app.state.read();
        assert_eq!(state.current_screen, Screen::ListDetail);
        assert_eq!(state.active_list_id.as_deref(), Some("l42"));
    }

    #[tokio::test]
    async fn test_signup_flow_moves_to_verification_then_home() {
        let api = Arc::new(MockApi::new());
        *api.signup_response.lock() = Some(Ok(shared::dto::auth::MessageResponse {
            message: Some("Verification code sent".to_string()),
        }));
        *api.verify_response.lock() = Some(Ok(auth_response("tok-1")));
        let mut app = app_with(Arc::new(MemoryVault::new()), api);
        app.bootstrap().await;

        app.handle_signup_click(
            "Alice".to_string(),
            "alice@example.com".to_string(),
            "password1".to_string(),
            "password1".to_string(),
        );
        assert!(app.next_event().await);

        {
            let state = app.state.read();
            assert_eq!(state.current_screen, Screen::VerifyEmail);
            assert_eq!(
                state.pending_verification_email.as_deref(),
                Some("alice@example.com")
            );
        }

        app.handle_verify_email_click("123456".to_string());
        assert!(app.next_event().await);

        let state = app.state.read();
        assert_eq!(state.current_screen, Screen::Home);
        assert!(state.is_authenticated());
        assert!(state.pending_verification_email.is_none());
    }

    #[tokio::test]
    async fn test_signup_failure_keeps_form_error() {
        let api = Arc::new(MockApi::new());
        *api.signup_response.lock() = Some(Err(ApiError::Server(
            "Email already registered".to_string(),
        )));
        let mut app = app_with(Arc::new(MemoryVault::new()), api);
        app.bootstrap().await;

        app.handle_signup_click(
            "Alice".to_string(),
            "alice@example.com".to_string(),
            "password1".to_string(),
            "password1".to_string(),
        );
        assert!(app.next_event().await);

        let state = app.state.read();
        assert_eq!(state.current_screen, Screen::Login);
        assert_eq!(
            state.auth_form_error.as_deref(),
            Some("Email already registered")
        );
    }

    #[tokio::test]
    async fn test_screen_change_guard_blocks_auth_screens_when_anonymous() {
        let mut app = app_with(Arc::new(MemoryVault::new()), Arc::new(MockApi::new()));
        app.bootstrap().await;

        app.handle_screen_change(Screen::Profile);

        assert_eq!(app.state.read().current_screen, Screen::Login);
    }

    #[tokio::test]
    async fn test_profile_deep_link_opens_profile_when_signed_in() {
        let user = sample_user();
        let vault = Arc::new(MemoryVault::with_session("tok-1", &user));
        let api = Arc::new(MockApi::with_whoami(Ok(user)));
        let mut app = app_with(vault, api);
        app.bootstrap().await;

        app.handle_deep_link("cartlink://profile".to_string());
        assert!(app.next_event().await);

        assert_eq!(app.state.read().current_screen, Screen::Profile);
    }

    #[tokio::test]
    async fn test_theme_selection_lands_via_event_and_persists() {
        let vault = Arc::new(MemoryVault::new());
        let mut app = app_with(vault.clone(), Arc::new(MockApi::new()));
        app.bootstrap().await;
        assert_eq!(app.state.read().theme, ThemeMode::Light);

        app.handle_theme_selected(ThemeMode::Dark);
        assert!(app.next_event().await);

        assert_eq!(app.state.read().theme, ThemeMode::Dark);
        assert_eq!(app.theme.mode(), ThemeMode::Dark);
        assert_eq!(vault.theme().await.expect("read"), Some(ThemeMode::Dark));
    }

    #[tokio::test]
    async fn test_list_selection_opens_detail_and_back_clears_it() {
        let user = sample_user();
        let vault = Arc::new(MemoryVault::with_session("tok-1", &user));
        let api = Arc::new(MockApi::with_whoami(Ok(user)));
        let mut app = app_with(vault, api);
        app.bootstrap().await;

        app.handle_list_selected("l7".to_string());
        {
            let state = app.state.read();
            assert_eq!(state.current_screen, Screen::ListDetail);
            assert_eq!(state.active_list_id.as_deref(), Some("l7"));
        }

        app.handle_screen_change(Screen::Home);
        let state = app.state.read();
        assert_eq!(state.current_screen, Screen::Home);
        assert!(state.active_list_id.is_none());
    }

    #[tokio::test]
    async fn test_unknown_deep_link_is_ignored() {
        let mut app = app_with(Arc::new(MemoryVault::new()), Arc::new(MockApi::new()));
        app.bootstrap().await;
        let before = app.state.read().current_screen;

        app.handle_deep_link("cartlink://nonsense".to_string());
        app.on_tick();

        assert_eq!(app.state.read().current_screen, before);
    }
}
