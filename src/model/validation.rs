//! Field validation for form submissions.
//!
//! Validation runs in the shell, before the store is invoked: the
//! store's operations are total and accept any [`Entry`] they are
//! given. All rule violations are collected so the form can display
//! every problem at once rather than one per submit attempt.

use crate::model::Entry;
use thiserror::Error;

/// Maximum accepted message length, in characters.
pub const MESSAGE_MAX_LEN: usize = 250;

/// A single form validation rule violation.
///
/// One variant per rule; [`validate_entry`] returns every violation
/// found, not just the first.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// Name field is empty or whitespace-only.
    #[error("Name is required")]
    MissingName,

    /// Email field is empty or whitespace-only.
    #[error("Email is required")]
    MissingEmail,

    /// Email field is present but not structurally valid.
    #[error("Invalid email: '{raw}'")]
    InvalidEmail {
        /// The rejected email text, preserved for display.
        raw: String,
    },

    /// Message field is empty or whitespace-only.
    #[error("Message is required")]
    MissingMessage,

    /// Message exceeds [`MESSAGE_MAX_LEN`] characters.
    #[error("Message must be at most {max} characters (got {len})")]
    MessageTooLong {
        /// Actual character count of the rejected message.
        len: usize,
        /// The configured maximum ([`MESSAGE_MAX_LEN`]).
        max: usize,
    },
}

/// Validate raw form input and construct an [`Entry`] on success.
///
/// Rules:
/// - name: required (non-blank after trimming)
/// - email: required and structurally valid (see [`is_valid_email`])
/// - message: required, at most [`MESSAGE_MAX_LEN`] characters
///
/// Returns all violations found. Field text is passed through to the
/// entry unchanged (no trimming of stored values).
pub fn validate_entry(
    name: &str,
    email: &str,
    message: &str,
) -> Result<Entry, Vec<ValidationError>> {
    let mut errors = Vec::new();

    if name.trim().is_empty() {
        errors.push(ValidationError::MissingName);
    }

    if email.trim().is_empty() {
        errors.push(ValidationError::MissingEmail);
    } else if !is_valid_email(email) {
        errors.push(ValidationError::InvalidEmail {
            raw: email.to_string(),
        });
    }

    if message.trim().is_empty() {
        errors.push(ValidationError::MissingMessage);
    } else {
        let len = message.chars().count();
        if len > MESSAGE_MAX_LEN {
            errors.push(ValidationError::MessageTooLong {
                len,
                max: MESSAGE_MAX_LEN,
            });
        }
    }

    if errors.is_empty() {
        Ok(Entry::new(name, email, message))
    } else {
        Err(errors)
    }
}

/// Structural email check: exactly one `@`, non-empty local part,
/// non-empty domain containing a dot, and no whitespace anywhere.
///
/// Intentionally permissive beyond that; the address is never sent
/// anywhere, so this only guards against obvious typos.
pub fn is_valid_email(email: &str) -> bool {
    if email.chars().any(char::is_whitespace) {
        return false;
    }

    let mut parts = email.split('@');
    let (Some(local), Some(domain), None) = (parts.next(), parts.next(), parts.next()) else {
        return false;
    };

    if local.is_empty() || domain.is_empty() {
        return false;
    }

    // Domain needs an interior dot: "a.b", not ".b" or "a."
    domain
        .split('.')
        .filter(|segment| !segment.is_empty())
        .count()
        >= 2
        && !domain.starts_with('.')
        && !domain.ends_with('.')
}

// ===== Tests =====

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_input_produces_entry() {
        let entry = validate_entry("Al", "a@x.com", "hi").expect("should validate");
        assert_eq!(entry.name(), "Al");
        assert_eq!(entry.email(), "a@x.com");
        assert_eq!(entry.message(), "hi");
    }

    #[test]
    fn blank_name_is_rejected() {
        let errors = validate_entry("   ", "a@x.com", "hi").unwrap_err();
        assert_eq!(errors, vec![ValidationError::MissingName]);
    }

    #[test]
    fn blank_email_reports_missing_not_invalid() {
        let errors = validate_entry("Al", "", "hi").unwrap_err();
        assert_eq!(errors, vec![ValidationError::MissingEmail]);
    }

    #[test]
    fn malformed_email_is_rejected_with_raw_value() {
        let errors = validate_entry("Al", "not-an-email", "hi").unwrap_err();
        assert_eq!(
            errors,
            vec![ValidationError::InvalidEmail {
                raw: "not-an-email".to_string()
            }]
        );
    }

    #[test]
    fn blank_message_is_rejected() {
        let errors = validate_entry("Al", "a@x.com", "  ").unwrap_err();
        assert_eq!(errors, vec![ValidationError::MissingMessage]);
    }

    #[test]
    fn message_at_limit_is_accepted() {
        let message = "x".repeat(MESSAGE_MAX_LEN);
        assert!(validate_entry("Al", "a@x.com", &message).is_ok());
    }

    #[test]
    fn message_over_limit_is_rejected_with_counts() {
        let message = "x".repeat(MESSAGE_MAX_LEN + 1);
        let errors = validate_entry("Al", "a@x.com", &message).unwrap_err();
        assert_eq!(
            errors,
            vec![ValidationError::MessageTooLong {
                len: MESSAGE_MAX_LEN + 1,
                max: MESSAGE_MAX_LEN,
            }]
        );
    }

    #[test]
    fn message_limit_counts_characters_not_bytes() {
        // 250 multibyte characters are within the limit even though the
        // byte length is larger.
        let message = "é".repeat(MESSAGE_MAX_LEN);
        assert!(message.len() > MESSAGE_MAX_LEN);
        assert!(validate_entry("Al", "a@x.com", &message).is_ok());
    }

    #[test]
    fn all_violations_are_collected() {
        let errors = validate_entry("", "bad", "").unwrap_err();
        assert_eq!(errors.len(), 3, "expected one error per failed rule");
        assert!(errors.contains(&ValidationError::MissingName));
        assert!(errors.contains(&ValidationError::MissingMessage));
        assert!(matches!(
            errors
                .iter()
                .find(|e| matches!(e, ValidationError::InvalidEmail { .. })),
            Some(ValidationError::InvalidEmail { raw }) if raw == "bad"
        ));
    }

    // ===== is_valid_email =====

    #[test]
    fn accepts_plain_addresses() {
        assert!(is_valid_email("a@x.com"));
        assert!(is_valid_email("first.last@sub.example.org"));
        assert!(is_valid_email("user+tag@example.co"));
    }

    #[test]
    fn rejects_missing_or_repeated_at_sign() {
        assert!(!is_valid_email("ax.com"));
        assert!(!is_valid_email("a@@x.com"));
        assert!(!is_valid_email("a@b@x.com"));
    }

    #[test]
    fn rejects_empty_local_or_domain() {
        assert!(!is_valid_email("@x.com"));
        assert!(!is_valid_email("a@"));
    }

    #[test]
    fn rejects_undotted_or_edge_dotted_domains() {
        assert!(!is_valid_email("a@localhost"));
        assert!(!is_valid_email("a@.com"));
        assert!(!is_valid_email("a@com."));
    }

    #[test]
    fn rejects_whitespace() {
        assert!(!is_valid_email("a b@x.com"));
        assert!(!is_valid_email("a@x .com"));
    }
}
