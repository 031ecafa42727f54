//! Input plausibility checks for submitted contact data.

use regex::Regex;

/// Check whether an email looks real.
///
/// Checks for:
/// - Basic email format (contains @ and .)
/// - Fake/placeholder patterns (repeated digits like 9999, 1111)
/// - Minimum length requirements
/// - Valid domain structure
///
/// Presence is the only hard requirement on submission; an implausible email
/// is logged and stored anyway, so the marketing team can judge the lead.
pub fn is_plausible_email(email: &str) -> bool {
    // Basic checks
    if email.len() < 5 || !email.contains('@') || !email.contains('.') {
        return false;
    }

    // Detect fake patterns (repeated digits)
    let fake_patterns = ["999999", "111111", "000000", "123456789"];

    for pattern in &fake_patterns {
        if email.contains(pattern) {
            tracing::warn!(
                "Suspicious email (fake pattern '{}'): {}",
                pattern,
                email
            );
            return false;
        }
    }

    // RFC 5322 simplified email regex
    // Matches: local@domain.tld
    let email_regex = Regex::new(
        r"^[a-zA-Z0-9.!#$%&'*+/=?^_`{|}~-]+@[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?(?:\.[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?)*$"
    ).unwrap();

    if !email_regex.is_match(email) {
        tracing::warn!("Suspicious email format: {}", email);
        return false;
    }

    true
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plausible_emails() {
        assert!(is_plausible_email("user@example.com"));
        assert!(is_plausible_email("test.user@example.com"));
        assert!(is_plausible_email("user+tag@example.co.uk"));
        assert!(is_plausible_email("a@b.c"));
    }

    #[test]
    fn test_implausible_emails() {
        assert!(!is_plausible_email("userexample.com"));
        assert!(!is_plausible_email("user@examplecom"));
        assert!(!is_plausible_email("@example.com"));
        assert!(!is_plausible_email(""));
        assert!(!is_plausible_email("user999999@example.com"));
        assert!(!is_plausible_email("111111@example.com"));
        assert!(!is_plausible_email("user @example.com"));
    }
}
