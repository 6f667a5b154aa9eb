//! # Navigation Handlers
//!
//! Screen changes, deep-link dispatch, and theme selection.

use std::sync::Arc;

use async_channel::Sender;
use parking_lot::RwLock;

use crate::app::deeplink::{parse_deep_link, DeepLink};
use crate::app::events::AppEvent;
use crate::app::join::{InviteJoinResolver, JoinOutcome};
use crate::app::navigation;
use crate::app::session::SessionManager;
use crate::app::state::{AppState, Screen};
use crate::app::theme::{ThemeManager, ThemeMode};
use crate::core::service::ApiService;

/// Handle in-app screen change
///
/// Internal handler function - use [`crate::app::App::handle_screen_change`] instead.
pub(crate) fn handle_screen_change(
    state: Arc<RwLock<AppState>>,
    session: &SessionManager,
    screen: Screen,
) {
    if AppState::requires_auth(screen) && !session.is_authenticated() {
        tracing::warn!(screen = screen.title(), "Blocked navigation to auth-only screen");
        let mut state = state.write();
        state.current_screen = Screen::Login;
        return;
    }

    let mut state = state.write();
    state.auth_form_error = None;
    if screen != Screen::ListDetail {
        state.active_list_id = None;
    }
    state.current_screen = screen;
}

/// Handle a list being opened from the home screen
///
/// Internal handler function - use [`crate::app::App::handle_list_selected`] instead.
pub(crate) fn handle_list_selected(
    state: Arc<RwLock<AppState>>,
    session: &SessionManager,
    list_id: String,
) {
    if !session.is_authenticated() {
        state.write().current_screen = Screen::Login;
        return;
    }

    let mut state = state.write();
    state.active_list_id = Some(list_id);
    state.current_screen = Screen::ListDetail;
}

/// Handle a deep-link URL, from cold start or a live event
///
/// Internal handler function - use [`crate::app::App::handle_deep_link`] instead.
///
/// Invite links go through the resolver, which may call the join API;
/// everything else maps straight to a navigation reset. Either way
/// exactly one [`AppEvent::DeepLinkResolved`] is emitted per recognized
/// URL; unrecognized URLs are dropped without an event.
pub(crate) fn handle_deep_link(
    session: Arc<SessionManager>,
    api: Arc<dyn ApiService>,
    event_tx: Sender<AppEvent>,
    url: String,
) {
    let Some(link) = parse_deep_link(&url) else {
        tracing::debug!(url = %url, "Dropping unrecognized deep link");
        return;
    };

    let tx = event_tx.clone();
    tokio::spawn(async move {
        let outcome = match link {
            DeepLink::JoinList { code } => {
                let resolver = InviteJoinResolver::new(api);
                resolver
                    .resolve(session.is_authenticated(), code.as_deref())
                    .await
            }
            other => JoinOutcome {
                reset: navigation::deep_link_reset(&other, session.is_authenticated()),
                notice: None,
            },
        };
        let _ = tx.send(AppEvent::DeepLinkResolved(outcome)).await;
    });
}

/// Handle theme selection
///
/// Internal handler function - use [`crate::app::App::handle_theme_selected`] instead.
///
/// The applied mode comes back as an event so the state write happens on
/// the main thread like every other mutation.
pub(crate) fn handle_theme_selected(
    theme: Arc<ThemeManager>,
    event_tx: Sender<AppEvent>,
    mode: ThemeMode,
) {
    let tx = event_tx.clone();
    tokio::spawn(async move {
        let applied = theme.set_theme(mode).await;
        let _ = tx.send(AppEvent::ThemeApplied(applied)).await;
    });
}
