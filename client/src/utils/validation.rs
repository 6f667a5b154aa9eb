//! Form validation for the auth and profile screens.
//!
//! Validation runs client-side before any request is spawned; the server
//! re-validates everything, so these checks only exist to give immediate
//! feedback and avoid pointless round trips.

/// Minimum accepted password length, matching the backend rule.
pub const MIN_PASSWORD_LEN: usize = 8;

/// Check that an email looks structurally plausible.
///
/// Intentionally loose: one `@`, non-empty local part, and a domain with
/// at least one dot. Full RFC validation belongs to the server.
pub fn is_valid_email(email: &str) -> bool {
    let email = email.trim();
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    !local.is_empty()
        && domain.contains('.')
        && !domain.starts_with('.')
        && !domain.ends_with('.')
        && !domain.contains('@')
}

/// Validate login form fields. Returns the first problem found.
pub fn validate_login(email: &str, password: &str) -> Option<String> {
    if email.trim().is_empty() || password.is_empty() {
        return Some("Email and password are required.".to_string());
    }
    if !is_valid_email(email) {
        return Some("Please enter a valid email address.".to_string());
    }
    None
}

/// Validate signup form fields. Returns the first problem found.
pub fn validate_signup(
    name: &str,
    email: &str,
    password: &str,
    confirm_password: &str,
) -> Option<String> {
    if name.trim().is_empty() {
        return Some("Name is required.".to_string());
    }
    if !is_valid_email(email) {
        return Some("Please enter a valid email address.".to_string());
    }
    if password.len() < MIN_PASSWORD_LEN {
        return Some(format!(
            "Password must be at least {} characters.",
            MIN_PASSWORD_LEN
        ));
    }
    if password != confirm_password {
        return Some("Passwords do not match.".to_string());
    }
    None
}

/// Validate a password change form. Returns the first problem found.
pub fn validate_password_change(
    current_password: &str,
    new_password: &str,
    confirm_password: &str,
) -> Option<String> {
    if current_password.is_empty() {
        return Some("Current password is required.".to_string());
    }
    if new_password.len() < MIN_PASSWORD_LEN {
        return Some(format!(
            "New password must be at least {} characters.",
            MIN_PASSWORD_LEN
        ));
    }
    if new_password != confirm_password {
        return Some("Passwords do not match.".to_string());
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_email_validation() {
        assert!(is_valid_email("alice@example.com"));
        assert!(is_valid_email("  bob@mail.example.org  "));

        assert!(!is_valid_email("alice"));
        assert!(!is_valid_email("alice@"));
        assert!(!is_valid_email("@example.com"));
        assert!(!is_valid_email("alice@localhost"));
        assert!(!is_valid_email("alice@.com"));
        assert!(!is_valid_email(""));
    }

    #[test]
    fn test_login_validation() {
        assert!(validate_login("alice@example.com", "hunter22").is_none());
        assert!(validate_login("", "hunter22").is_some());
        assert!(validate_login("alice@example.com", "").is_some());
        assert!(validate_login("not-an-email", "hunter22").is_some());
    }

    #[test]
    fn test_signup_validation_order() {
        let err = validate_signup("", "alice@example.com", "password1", "password1");
        assert_eq!(err.as_deref(), Some("Name is required."));

        let err = validate_signup("Alice", "alice@example.com", "short", "short");
        assert!(err.expect("too short").contains("at least 8"));

        let err = validate_signup("Alice", "alice@example.com", "password1", "password2");
        assert_eq!(err.as_deref(), Some("Passwords do not match."));

        assert!(validate_signup("Alice", "alice@example.com", "password1", "password1").is_none());
    }

    #[test]
    fn test_password_change_validation() {
        assert!(validate_password_change("old-pass1", "new-pass1", "new-pass1").is_none());
        assert!(validate_password_change("", "new-pass1", "new-pass1").is_some());
        assert!(validate_password_change("old-pass1", "short", "short").is_some());
        assert!(validate_password_change("old-pass1", "new-pass1", "other").is_some());
    }
}
