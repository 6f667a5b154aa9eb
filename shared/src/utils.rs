//! # Shared Utility Functions
//!
//! Small display helpers used by the client when logging or rendering
//! account information.
//!
//! ## Email Redaction
//!
//! [`mask_email`] keeps log lines useful without writing full addresses to
//! disk: the local part is reduced to its first two characters.
//!
//! ```rust
//! use shared::utils::mask_email;
//!
//! assert_eq!(mask_email("alice@example.com"), "al***@example.com");
//! ```

/// Redact an email address for log output.
///
/// Keeps the first two characters of the local part and the full domain.
/// Strings without an `@` are masked entirely rather than guessed at.
///
/// # Examples
///
/// ```rust
/// use shared::utils::mask_email;
///
/// assert_eq!(mask_email("alice@example.com"), "al***@example.com");
/// assert_eq!(mask_email("a@example.com"), "a***@example.com");
/// assert_eq!(mask_email("not-an-email"), "***");
/// ```
pub fn mask_email(email: &str) -> String {
    match email.split_once('@') {
        Some((local, domain)) if !local.is_empty() && !domain.is_empty() => {
            let visible: String = local.chars().take(2).collect();
            format!("{}***@{}", visible, domain)
        }
        _ => "***".to_string(),
    }
}

/// Trimmed display name with a fallback for blank values.
///
/// # Examples
///
/// ```rust
/// use shared::utils::display_name;
///
/// assert_eq!(display_name("  Alice  "), "Alice");
/// assert_eq!(display_name("   "), "Unknown user");
/// ```
pub fn display_name(name: &str) -> String {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        "Unknown user".to_string()
    } else {
        trimmed.to_string()
    }
}
