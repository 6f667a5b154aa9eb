//! # Deep Link Routing
//!
//! Parses external URLs (`cartlink://...` or https links to the app host)
//! into in-app destinations. One canonical routing table; both cold-start
//! initial URLs and live URL events funnel through [`parse_deep_link`].

use url::Url;

/// In-app destination a deep link resolves to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeepLink {
    /// Invite-join entry point; the code may be absent when the link is
    /// malformed or truncated
    JoinList { code: Option<String> },
    /// A specific list's detail screen
    ListDetail { list_id: String },
    Home,
    Profile,
    Login,
    Signup,
}

/// Parse a raw URL into a deep-link destination.
///
/// Accepts the custom scheme (`cartlink://joinList/CODE`) and plain https
/// links whose path carries the same segments. Unknown or unparseable
/// URLs yield `None` and the caller ignores the event.
pub fn parse_deep_link(raw: &str) -> Option<DeepLink> {
    let url = Url::parse(raw).ok()?;

    // With a custom scheme the first segment lands in the host position
    // (cartlink://joinList/CODE), with https it is the first path segment.
    let mut segments: Vec<String> = Vec::new();
    if url.scheme() == "cartlink" {
        if let Some(host) = url.host_str() {
            segments.push(host.to_string());
        }
    }
    if let Some(path) = url.path_segments() {
        segments.extend(path.filter(|s| !s.is_empty()).map(str::to_string));
    }

    let mut segments = segments.into_iter();
    let route = segments.next()?;

    match route.as_str() {
        "joinList" => {
            // Code may arrive as a path segment or a ?code= query parameter
            let code = segments.next().or_else(|| {
                url.query_pairs()
                    .find(|(key, _)| key == "code")
                    .map(|(_, value)| value.into_owned())
            });
            let code = code.filter(|c| !c.trim().is_empty());
            Some(DeepLink::JoinList { code })
        }
        "lists" => {
            let list_id = segments.next().filter(|id| !id.is_empty())?;
            Some(DeepLink::ListDetail { list_id })
        }
        "home" => Some(DeepLink::Home),
        "profile" => Some(DeepLink::Profile),
        "login" => Some(DeepLink::Login),
        "signup" => Some(DeepLink::Signup),
        _ => {
            tracing::debug!(url = raw, route = %route, "Ignoring unknown deep link route");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_join_link_with_path_code() {
        assert_eq!(
            parse_deep_link("cartlink://joinList/ABC123"),
            Some(DeepLink::JoinList {
                code: Some("ABC123".to_string())
            })
        );
    }

    #[test]
    fn test_join_link_with_query_code() {
        assert_eq!(
            parse_deep_link("cartlink://joinList?code=XYZ789"),
            Some(DeepLink::JoinList {
                code: Some("XYZ789".to_string())
            })
        );
    }

    #[test]
    fn test_join_link_without_code() {
        assert_eq!(
            parse_deep_link("cartlink://joinList"),
            Some(DeepLink::JoinList { code: None })
        );
    }

    #[test]
    fn test_https_join_link() {
        assert_eq!(
            parse_deep_link("https://cartlink.app/joinList/ABC123"),
            Some(DeepLink::JoinList {
                code: Some("ABC123".to_string())
            })
        );
    }

    #[test]
    fn test_list_detail_link() {
        assert_eq!(
            parse_deep_link("cartlink://lists/list-42"),
            Some(DeepLink::ListDetail {
                list_id: "list-42".to_string()
            })
        );
    }

    #[test]
    fn test_static_routes() {
        assert_eq!(parse_deep_link("cartlink://home"), Some(DeepLink::Home));
        assert_eq!(
            parse_deep_link("cartlink://profile"),
            Some(DeepLink::Profile)
        );
        assert_eq!(parse_deep_link("cartlink://login"), Some(DeepLink::Login));
        assert_eq!(parse_deep_link("cartlink://signup"), Some(DeepLink::Signup));
    }

    #[test]
    fn test_unknown_route_is_ignored() {
        assert_eq!(parse_deep_link("cartlink://settings/advanced"), None);
    }

    #[test]
    fn test_garbage_is_ignored() {
        assert_eq!(parse_deep_link("not a url"), None);
        assert_eq!(parse_deep_link(""), None);
    }

    #[test]
    fn test_list_link_without_id_is_ignored() {
        assert_eq!(parse_deep_link("cartlink://lists"), None);
    }

    #[test]
    fn test_blank_code_is_treated_as_absent() {
        assert_eq!(
            parse_deep_link("cartlink://joinList?code=%20%20"),
            Some(DeepLink::JoinList { code: None })
        );
    }
}
