use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// User profile as returned by the backend.
///
/// Owned wholesale by the session: profile edits replace the entire value
/// rather than patching individual fields client-side.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    pub id: String,
    pub name: String,
    pub email: String,
    /// Inline-encoded image (data URI) or a plain URL.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
    #[serde(default)]
    pub is_verified: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
}

/// Response envelope for `GET /user/me`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct UserResponse {
    pub user: UserProfile,
}

/// Request body for `PATCH /user/update-me`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct UpdateProfileRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
}

/// Request body for `PATCH /user/update-password`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct UpdatePasswordRequest {
    pub current_password: String,
    pub new_password: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_profile_wire_fields_are_camel_case() {
        let user = UserProfile {
            id: "u1".to_string(),
            name: "Alice".to_string(),
            email: "alice@example.com".to_string(),
            avatar: None,
            is_verified: true,
            created_at: Some("2024-01-01T00:00:00Z".parse().expect("timestamp")),
        };

        let json = serde_json::to_string(&user).expect("serialize");
        assert!(json.contains("\"isVerified\":true"));
        assert!(json.contains("\"createdAt\""));
        // None avatar is omitted entirely
        assert!(!json.contains("avatar"));
    }

    #[test]
    fn test_user_profile_missing_is_verified_defaults_false() {
        let json = r#"{"id":"u1","name":"Bob","email":"bob@example.com"}"#;
        let user: UserProfile = serde_json::from_str(json).expect("deserialize");
        assert!(!user.is_verified);
        assert!(user.avatar.is_none());
    }
}
