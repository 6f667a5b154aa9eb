//! # Session Manager
//!
//! Single source of truth for whether the user is logged in, and broker of
//! all session mutations. Construction is explicit - the manager takes its
//! vault and API gateway as constructor arguments, and interested parties
//! register through [`SessionManager::subscribe`] instead of reaching for
//! ambient globals.
//!
//! ## State machine
//!
//! ```text
//!              ┌──────────┐
//!              │ Loading  │  (initial)
//!              └────┬─────┘
//!        no token / │ │ token validated
//!   validation fail │ │
//!          ┌────────▼ ▼──────────┐
//!          │Anonymous Authenticated│
//!          └───▲──┬───────┬───▲──┘
//!              │  └sign_in┘   │
//!              └──sign_out────┘
//! ```
//!
//! No transition re-enters Loading once it has been left. Network failure
//! during bootstrap validation is treated as an invalid token: the manager
//! fails closed to Anonymous and clears the persisted session.
//!
//! ## Ordering guarantee
//!
//! Every vault write is awaited before the in-memory state is touched, so
//! subscribers never observe `Authenticated` before the token is durable.

use std::sync::Arc;

use async_channel::{Receiver, Sender};
use parking_lot::RwLock;
use shared::dto::user::UserProfile;
use shared::utils::mask_email;

use crate::core::service::{ApiService, SessionVault};

/// Where the session currently stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionPhase {
    /// Bootstrap still in flight; gates what the navigation root renders
    Loading,
    /// No valid session
    Anonymous,
    /// Token and profile present, last validation succeeded
    Authenticated,
}

/// Cloneable view of the session for the app state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionSnapshot {
    pub phase: SessionPhase,
    pub user: Option<UserProfile>,
}

impl SessionSnapshot {
    pub fn loading() -> Self {
        Self {
            phase: SessionPhase::Loading,
            user: None,
        }
    }
}

/// Change notifications delivered to subscribers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionEvent {
    /// The phase moved (Loading resolved, sign-in, sign-out)
    PhaseChanged(SessionPhase),
    /// The profile was replaced without a phase change
    ProfileUpdated(UserProfile),
}

/// Structured result of a session mutation.
///
/// Session operations never panic and never throw; storage failures come
/// back here as recoverable, user-displayable errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionOutcome {
    pub success: bool,
    pub error: Option<String>,
}

impl SessionOutcome {
    pub fn ok() -> Self {
        Self {
            success: true,
            error: None,
        }
    }

    pub fn failed(message: impl Into<String>) -> Self {
        Self {
            success: false,
            error: Some(message.into()),
        }
    }
}

struct SessionInner {
    phase: SessionPhase,
    token: Option<String>,
    user: Option<UserProfile>,
}

/// Owns the session lifecycle: bootstrap, sign-in, sign-out, profile
/// updates, and subscriber notification.
pub struct SessionManager {
    vault: Arc<dyn SessionVault>,
    api: Arc<dyn ApiService>,
    inner: RwLock<SessionInner>,
    subscribers: parking_lot::Mutex<Vec<Sender<SessionEvent>>>,
}

impl SessionManager {
    /// Create a manager in the `Loading` phase.
    pub fn new(vault: Arc<dyn SessionVault>, api: Arc<dyn ApiService>) -> Self {
        Self {
            vault,
            api,
            inner: RwLock::new(SessionInner {
                phase: SessionPhase::Loading,
                token: None,
                user: None,
            }),
            subscribers: parking_lot::Mutex::new(Vec::new()),
        }
    }

    /// Current phase.
    pub fn phase(&self) -> SessionPhase {
        self.inner.read().phase
    }

    /// True in the `Authenticated` phase only.
    pub fn is_authenticated(&self) -> bool {
        self.phase() == SessionPhase::Authenticated
    }

    /// The in-memory copy of the bearer token.
    ///
    /// Requests never read this; the gateway sources the token from the
    /// vault. Present iff the phase is Authenticated.
    pub fn token(&self) -> Option<String> {
        self.inner.read().token.clone()
    }

    /// Cloneable view for the app state.
    pub fn snapshot(&self) -> SessionSnapshot {
        let inner = self.inner.read();
        SessionSnapshot {
            phase: inner.phase,
            user: inner.user.clone(),
        }
    }

    /// Register for change notifications.
    ///
    /// Receivers that are dropped are pruned on the next notification;
    /// a notification sent to a dropped receiver is a no-op.
    pub fn subscribe(&self) -> Receiver<SessionEvent> {
        let (tx, rx) = async_channel::unbounded();
        self.subscribers.lock().push(tx);
        rx
    }

    fn notify(&self, event: SessionEvent) {
        let mut subscribers = self.subscribers.lock();
        subscribers.retain(|tx| tx.try_send(event.clone()).is_ok());
    }

    /// Restore or discard a prior login at process start.
    ///
    /// - No persisted token: end Anonymous without any API call.
    /// - Token present: validate via `GET /user/me`. Success persists the
    ///   refreshed profile and ends Authenticated. Any failure - transport
    ///   error, server rejection, or a vault write failure while storing
    ///   the refreshed profile - ends Anonymous with the persisted session
    ///   cleared (fail closed).
    ///
    /// The Loading phase is left exactly once per call; running bootstrap
    /// again against unchanged persisted state reproduces the same final
    /// state without extra side effects.
    pub async fn bootstrap(&self) {
        let token = match self.vault.token().await {
            Ok(token) => token,
            Err(e) => {
                tracing::warn!(error = %e, "Failed to read persisted token, starting anonymous");
                None
            }
        };

        let Some(token) = token else {
            tracing::info!("No persisted session, starting anonymous");
            self.enter_anonymous();
            return;
        };

        match self.api.current_user().await {
            Ok(user) => {
                if let Err(e) = self.vault.store_user(&user).await {
                    tracing::warn!(error = %e, "Failed to persist refreshed profile, signing out");
                    self.force_sign_out().await;
                    return;
                }
                tracing::info!(email = %mask_email(&user.email), "Session restored");
                let mut inner = self.inner.write();
                inner.token = Some(token);
                inner.user = Some(user);
                let changed = inner.phase != SessionPhase::Authenticated;
                inner.phase = SessionPhase::Authenticated;
                drop(inner);
                if changed {
                    self.notify(SessionEvent::PhaseChanged(SessionPhase::Authenticated));
                }
            }
            Err(e) => {
                tracing::warn!(error = %e, "Persisted token failed validation, signing out");
                self.force_sign_out().await;
            }
        }
    }

    /// Persist a fresh token and profile, then mark the session
    /// authenticated.
    ///
    /// The vault write is one logical operation and is awaited first; if
    /// it fails the in-memory state is left untouched and the failure is
    /// reported to the caller.
    pub async fn sign_in(&self, token: String, user: UserProfile) -> SessionOutcome {
        if let Err(e) = self.vault.store_session(&token, &user).await {
            tracing::error!(error = %e, "Failed to persist session during sign-in");
            return SessionOutcome::failed("Sign-in failed, please try again.");
        }

        tracing::info!(email = %mask_email(&user.email), "Signed in");
        let mut inner = self.inner.write();
        inner.token = Some(token);
        inner.user = Some(user);
        inner.phase = SessionPhase::Authenticated;
        drop(inner);
        self.notify(SessionEvent::PhaseChanged(SessionPhase::Authenticated));
        SessionOutcome::ok()
    }

    /// Clear the persisted session and reset to Anonymous.
    ///
    /// Idempotent: signing out while already anonymous succeeds. A vault
    /// failure is reported without mutating in-memory state.
    pub async fn sign_out(&self) -> SessionOutcome {
        if let Err(e) = self.vault.clear_session().await {
            tracing::error!(error = %e, "Failed to clear persisted session during sign-out");
            return SessionOutcome::failed("Sign-out failed, please try again.");
        }

        tracing::info!("Signed out");
        self.enter_anonymous();
        SessionOutcome::ok()
    }

    /// Persist and replace the in-memory profile. Token and phase are
    /// untouched.
    pub async fn update_profile(&self, user: UserProfile) -> SessionOutcome {
        if let Err(e) = self.vault.store_user(&user).await {
            tracing::error!(error = %e, "Failed to persist profile update");
            return SessionOutcome::failed("Could not save profile changes.");
        }

        self.inner.write().user = Some(user.clone());
        self.notify(SessionEvent::ProfileUpdated(user));
        SessionOutcome::ok()
    }

    /// Sign-out that must not fail: used on the bootstrap failure path,
    /// where ending anywhere but Anonymous would leave the session
    /// ambiguous. A vault error is logged and the memory reset proceeds.
    async fn force_sign_out(&self) {
        if let Err(e) = self.vault.clear_session().await {
            tracing::error!(error = %e, "Failed to clear persisted session, resetting memory anyway");
        }
        self.enter_anonymous();
    }

    fn enter_anonymous(&self) {
        let mut inner = self.inner.write();
        inner.token = None;
        inner.user = None;
        let changed = inner.phase != SessionPhase::Anonymous;
        inner.phase = SessionPhase::Anonymous;
        drop(inner);
        if changed {
            self.notify(SessionEvent::PhaseChanged(SessionPhase::Anonymous));
        }
    }
}
