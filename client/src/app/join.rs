//! # Invite/Join Resolver
//!
//! Converts a deep-link invite code into list membership and a navigation
//! destination, under every combination of auth state and code presence.
//! Every path through [`InviteJoinResolver::resolve`] terminates in
//! exactly one navigation reset - the resolver never leaves the user
//! stranded on a dead-end screen.

use std::sync::Arc;

use parking_lot::Mutex;

use crate::app::navigation::NavReset;
use crate::app::state::Notice;
use crate::core::service::ApiService;

/// What the resolver decided: the mandatory navigation reset plus an
/// optional notice to show first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JoinOutcome {
    pub reset: NavReset,
    pub notice: Option<Notice>,
}

impl JoinOutcome {
    fn reset_only(reset: NavReset) -> Self {
        Self {
            reset,
            notice: None,
        }
    }
}

/// Resolves invite deep links. One resolver instance per deep-link event,
/// mirroring a screen mount: a code is consumed at most once per instance
/// even if the event is redelivered.
pub struct InviteJoinResolver {
    api: Arc<dyn ApiService>,
    consumed_code: Mutex<Option<String>>,
}

impl InviteJoinResolver {
    pub fn new(api: Arc<dyn ApiService>) -> Self {
        Self {
            api,
            consumed_code: Mutex::new(None),
        }
    }

    /// Decision matrix:
    ///
    /// 1. Not authenticated: reset to the auth flow. The invite is dropped,
    ///    not replayed after login.
    /// 2. Authenticated, no code: reset to home without any API call.
    /// 3. Authenticated with a code: one join call. Success and failure
    ///    both end with a reset to home; the notice carries either the
    ///    confirmation or the server's error message.
    ///
    /// A code the server has already consumed comes back as an ordinary
    /// server error ("already a member" or similar) and is surfaced like
    /// any other failure; the resolver does not second-guess it.
    pub async fn resolve(&self, is_authenticated: bool, code: Option<&str>) -> JoinOutcome {
        if !is_authenticated {
            tracing::info!("Invite link opened without a session, redirecting to login");
            return JoinOutcome::reset_only(NavReset::AuthFlow);
        }

        let Some(code) = code else {
            tracing::warn!("Invite link opened without a code");
            return JoinOutcome::reset_only(NavReset::AppHome);
        };

        {
            let mut consumed = self.consumed_code.lock();
            if consumed.as_deref() == Some(code) {
                // Redelivered event for a code this instance already spent
                return JoinOutcome::reset_only(NavReset::AppHome);
            }
            *consumed = Some(code.to_string());
        }

        match self.api.join_list(code).await {
            Ok(joined) => {
                tracing::info!(list_id = %joined.list_id, "Joined list via invite code");
                let message = match joined.list_name {
                    Some(name) => format!("You have joined \"{}\".", name),
                    None => "You have joined the list.".to_string(),
                };
                JoinOutcome {
                    reset: NavReset::AppHome,
                    notice: Some(Notice::new("Success", message)),
                }
            }
            Err(e) => {
                tracing::warn!(error = %e, "Invite join failed");
                JoinOutcome {
                    reset: NavReset::AppHome,
                    notice: Some(Notice::new("Could not join list", e.user_message())),
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::Ordering;
    use std::sync::Arc;

    use shared::dto::list::JoinListResponse;

    use super::*;
    use crate::app::session::testing::MockApi;
    use crate::services::api::ApiError;

    fn joined(list_id: &str, name: Option<&str>) -> JoinListResponse {
        JoinListResponse {
            list_id: list_id.to_string(),
            list_name: name.map(str::to_string),
        }
    }

    #[tokio::test]
    async fn test_unauthenticated_resets_to_auth_without_api_call() {
        let api = Arc::new(MockApi::new());
        let resolver = InviteJoinResolver::new(api.clone());

        let outcome = resolver.resolve(false, Some("ABC123")).await;

        assert_eq!(outcome.reset, NavReset::AuthFlow);
        assert!(outcome.notice.is_none());
        assert_eq!(api.join_calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_missing_code_resets_home_without_api_call() {
        let api = Arc::new(MockApi::new());
        let resolver = InviteJoinResolver::new(api.clone());

        let outcome = resolver.resolve(true, None).await;

        assert_eq!(outcome.reset, NavReset::AppHome);
        assert_eq!(api.join_calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_successful_join_calls_api_once_and_resets_home() {
        let api = Arc::new(MockApi::with_join(Ok(joined("l1", Some("Groceries")))));
        let resolver = InviteJoinResolver::new(api.clone());

        let outcome = resolver.resolve(true, Some("ABC123")).await;

        assert_eq!(api.join_calls.load(Ordering::SeqCst), 1);
        assert_eq!(api.last_join_code.lock().as_deref(), Some("ABC123"));
        assert_eq!(outcome.reset, NavReset::AppHome);
        let notice = outcome.notice.expect("confirmation notice");
        assert_eq!(notice.title, "Success");
        assert!(notice.message.contains("Groceries"));
    }

    #[tokio::test]
    async fn test_failed_join_surfaces_server_message_and_resets_home() {
        let api = Arc::new(MockApi::with_join(Err(ApiError::Server(
            "Invalid code".to_string(),
        ))));
        let resolver = InviteJoinResolver::new(api);

        let outcome = resolver.resolve(true, Some("BAD")).await;

        assert_eq!(outcome.reset, NavReset::AppHome);
        let notice = outcome.notice.expect("error notice");
        assert_eq!(notice.message, "Invalid code");
    }

    #[tokio::test]
    async fn test_network_failure_uses_generic_message() {
        let api = Arc::new(MockApi::with_join(Err(ApiError::Network(
            "connection refused".to_string(),
        ))));
        let resolver = InviteJoinResolver::new(api);

        let outcome = resolver.resolve(true, Some("ABC123")).await;

        assert_eq!(outcome.reset, NavReset::AppHome);
        let notice = outcome.notice.expect("error notice");
        assert_eq!(
            notice.message,
            crate::services::api::GENERIC_API_ERROR.to_string()
        );
    }

    #[tokio::test]
    async fn test_redelivered_code_is_not_joined_twice() {
        let api = Arc::new(MockApi::with_join(Ok(joined("l1", None))));
        let resolver = InviteJoinResolver::new(api.clone());

        resolver.resolve(true, Some("ABC123")).await;
        let outcome = resolver.resolve(true, Some("ABC123")).await;

        assert_eq!(api.join_calls.load(Ordering::SeqCst), 1);
        assert_eq!(outcome.reset, NavReset::AppHome);
    }

    #[tokio::test]
    async fn test_new_code_on_same_resolver_is_joined() {
        let api = Arc::new(MockApi::with_join(Ok(joined("l2", None))));
        let resolver = InviteJoinResolver::new(api.clone());

        resolver.resolve(true, Some("ABC123")).await;
        resolver.resolve(true, Some("DEF456")).await;

        assert_eq!(api.join_calls.load(Ordering::SeqCst), 2);
        assert_eq!(api.last_join_code.lock().as_deref(), Some("DEF456"));
    }
}
