//! # Navigation Root
//!
//! Pure decision logic over the session phase: which flow is mounted and
//! where a navigation reset lands. Kept free of I/O so it can be tested
//! exhaustively.

use crate::app::deeplink::DeepLink;
use crate::app::session::SessionPhase;
use crate::app::state::Screen;

/// The flow a navigation reset targets.
///
/// A reset replaces the whole navigation stack; there is no back entry
/// into the previous flow afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NavReset {
    /// Auth flow, landing on its entry screen
    AuthFlow,
    /// App flow, landing on home
    AppHome,
    /// App flow, landing on the profile screen
    AppProfile,
    /// App flow, landing on a specific list
    AppList { list_id: String },
}

impl NavReset {
    /// The concrete screen the reset lands on.
    pub fn screen(&self) -> Screen {
        match self {
            NavReset::AuthFlow => Screen::Login,
            NavReset::AppHome => Screen::Home,
            NavReset::AppProfile => Screen::Profile,
            NavReset::AppList { .. } => Screen::ListDetail,
        }
    }
}

/// The screen the root renders for a given session phase.
///
/// While Loading the root shows the splash and nothing else; once the
/// bootstrap resolves the phase picks the mounted flow.
pub fn root_screen(phase: SessionPhase) -> Screen {
    match phase {
        SessionPhase::Loading => Screen::Loading,
        SessionPhase::Anonymous => Screen::Login,
        SessionPhase::Authenticated => Screen::Home,
    }
}

/// Where a non-join deep link lands, given the current auth state.
///
/// Authenticated-only destinations fall back to the auth flow when no
/// session exists; auth-flow destinations fall back to home when one
/// does. Join links are not decided here - they go through the invite
/// resolver, which owns the auth/code decision matrix.
pub fn deep_link_reset(link: &DeepLink, is_authenticated: bool) -> NavReset {
    match link {
        DeepLink::JoinList { .. } => {
            debug_assert!(false, "join links are routed through the invite resolver");
            NavReset::AppHome
        }
        DeepLink::ListDetail { list_id } => {
            if is_authenticated {
                NavReset::AppList {
                    list_id: list_id.clone(),
                }
            } else {
                NavReset::AuthFlow
            }
        }
        DeepLink::Home => {
            if is_authenticated {
                NavReset::AppHome
            } else {
                NavReset::AuthFlow
            }
        }
        DeepLink::Profile => {
            if is_authenticated {
                NavReset::AppProfile
            } else {
                NavReset::AuthFlow
            }
        }
        DeepLink::Login | DeepLink::Signup => {
            if is_authenticated {
                NavReset::AppHome
            } else {
                NavReset::AuthFlow
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_root_screen_per_phase() {
        assert_eq!(root_screen(SessionPhase::Loading), Screen::Loading);
        assert_eq!(root_screen(SessionPhase::Anonymous), Screen::Login);
        assert_eq!(root_screen(SessionPhase::Authenticated), Screen::Home);
    }

    #[test]
    fn test_list_link_requires_auth() {
        let link = DeepLink::ListDetail {
            list_id: "l1".to_string(),
        };
        assert_eq!(
            deep_link_reset(&link, true),
            NavReset::AppList {
                list_id: "l1".to_string()
            }
        );
        assert_eq!(deep_link_reset(&link, false), NavReset::AuthFlow);
    }

    #[test]
    fn test_profile_link_opens_profile_when_signed_in() {
        assert_eq!(
            deep_link_reset(&DeepLink::Profile, true),
            NavReset::AppProfile
        );
        assert_eq!(
            deep_link_reset(&DeepLink::Profile, false),
            NavReset::AuthFlow
        );
    }

    #[test]
    fn test_auth_links_fall_back_to_home_when_signed_in() {
        assert_eq!(deep_link_reset(&DeepLink::Login, true), NavReset::AppHome);
        assert_eq!(deep_link_reset(&DeepLink::Signup, true), NavReset::AppHome);
        assert_eq!(deep_link_reset(&DeepLink::Login, false), NavReset::AuthFlow);
    }

    #[test]
    fn test_reset_screen_mapping() {
        assert_eq!(NavReset::AuthFlow.screen(), Screen::Login);
        assert_eq!(NavReset::AppHome.screen(), Screen::Home);
        assert_eq!(NavReset::AppProfile.screen(), Screen::Profile);
        assert_eq!(
            NavReset::AppList {
                list_id: "l1".to_string()
            }
            .screen(),
            Screen::ListDetail
        );
    }
}
