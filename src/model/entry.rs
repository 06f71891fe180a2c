//! Entry record and filter field selection.

use serde::Deserialize;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

// ===== Entry =====

/// A single submitted guestbook record.
///
/// Immutable once constructed: fields are only readable. Uniqueness is
/// not enforced and there is no identifier; duplicate submissions are
/// permitted and kept in insertion order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    name: String,
    email: String,
    message: String,
}

impl Entry {
    /// Create a new entry.
    ///
    /// The store performs no validation; callers are expected to have
    /// run [`crate::model::validate_entry`] first.
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            message: message.into(),
        }
    }

    /// The submitter's name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The submitter's email address.
    pub fn email(&self) -> &str {
        &self.email
    }

    /// The submitted message.
    pub fn message(&self) -> &str {
        &self.message
    }
}

// ===== FilterField =====

/// The entry attribute a search term is matched against.
///
/// Closed enumeration: adding a field to [`Entry`] requires extending
/// this type and its accessor, so there is no dynamic field lookup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FilterField {
    /// Match against the name field.
    Name,
    /// Match against the email field. Initial selection at startup.
    #[default]
    Email,
    /// Match against the message field.
    Message,
}

impl FilterField {
    /// Pure accessor for the corresponding entry field.
    pub fn value_of<'a>(&self, entry: &'a Entry) -> &'a str {
        match self {
            FilterField::Name => entry.name(),
            FilterField::Email => entry.email(),
            FilterField::Message => entry.message(),
        }
    }

    /// Lowercase field name for display and config/CLI parsing.
    pub fn as_str(self) -> &'static str {
        match self {
            FilterField::Name => "name",
            FilterField::Email => "email",
            FilterField::Message => "message",
        }
    }

    /// Next field in the UI selector cycle: Name → Email → Message → Name.
    pub fn cycle(self) -> Self {
        match self {
            FilterField::Name => FilterField::Email,
            FilterField::Email => FilterField::Message,
            FilterField::Message => FilterField::Name,
        }
    }
}

impl fmt::Display for FilterField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when parsing an unknown filter field name.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("Unknown filter field '{0}' (expected name, email, or message)")]
pub struct InvalidFilterField(pub String);

impl FromStr for FilterField {
    type Err = InvalidFilterField;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "name" => Ok(FilterField::Name),
            "email" => Ok(FilterField::Email),
            "message" => Ok(FilterField::Message),
            _ => Err(InvalidFilterField(s.to_string())),
        }
    }
}

// ===== Tests =====

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn entry_exposes_fields_as_constructed() {
        let entry = Entry::new("Al", "a@x.com", "hi");
        assert_eq!(entry.name(), "Al");
        assert_eq!(entry.email(), "a@x.com");
        assert_eq!(entry.message(), "hi");
    }

    #[test]
    fn duplicate_entries_compare_equal() {
        let a = Entry::new("Al", "a@x.com", "hi");
        let b = Entry::new("Al", "a@x.com", "hi");
        assert_eq!(a, b, "Entries have no identity beyond their fields");
    }

    #[test]
    fn default_filter_field_is_email() {
        assert_eq!(FilterField::default(), FilterField::Email);
    }

    #[test]
    fn value_of_selects_the_matching_field() {
        let entry = Entry::new("Al", "a@x.com", "hi");
        assert_eq!(FilterField::Name.value_of(&entry), "Al");
        assert_eq!(FilterField::Email.value_of(&entry), "a@x.com");
        assert_eq!(FilterField::Message.value_of(&entry), "hi");
    }

    #[test]
    fn cycle_visits_all_fields_and_wraps() {
        let start = FilterField::Name;
        assert_eq!(start.cycle(), FilterField::Email);
        assert_eq!(start.cycle().cycle(), FilterField::Message);
        assert_eq!(start.cycle().cycle().cycle(), FilterField::Name);
    }

    #[test]
    fn from_str_accepts_known_names_case_insensitively() {
        assert_eq!("name".parse::<FilterField>().unwrap(), FilterField::Name);
        assert_eq!("Email".parse::<FilterField>().unwrap(), FilterField::Email);
        assert_eq!(
            "MESSAGE".parse::<FilterField>().unwrap(),
            FilterField::Message
        );
    }

    #[test]
    fn from_str_rejects_unknown_names() {
        let err = "subject".parse::<FilterField>().unwrap_err();
        assert!(err.to_string().contains("subject"));
    }

    #[test]
    fn display_matches_as_str() {
        assert_eq!(FilterField::Name.to_string(), "name");
        assert_eq!(FilterField::Email.to_string(), "email");
        assert_eq!(FilterField::Message.to_string(), "message");
    }
}
