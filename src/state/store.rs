//! Entry store: canonical list, filtered view, and search criteria.
//!
//! This is the core of the application. All three operations are pure
//! transitions returning a new state value; the shell owns a
//! [`FormState`] and replaces it on every mutation. No operation can
//! fail.

use crate::model::{Entry, FilterField};

// ===== FormState =====

/// Canonical entry list plus the derived filtered view.
///
/// # Invariant
///
/// `filtered_entries` always equals the subsequence of `entries`
/// (in insertion order) whose `filter_field` value contains
/// `search_term` as a case-insensitive substring. An empty term
/// matches every entry. All three operations uphold this, including
/// [`FormState::add_entry`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormState {
    entries: Vec<Entry>,
    filtered_entries: Vec<Entry>,
    search_term: String,
    filter_field: FilterField,
}

impl FormState {
    /// Empty store with the default filter field (email) and no
    /// active search term.
    pub fn new() -> Self {
        Self::default()
    }

    /// Empty store starting with the given filter field selected.
    pub fn with_filter_field(filter_field: FilterField) -> Self {
        Self {
            filter_field,
            ..Self::default()
        }
    }

    /// All entries ever added, in insertion order.
    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    /// The subsequence of entries matching the active search criteria.
    pub fn filtered_entries(&self) -> &[Entry] {
        &self.filtered_entries
    }

    /// The active search term. Empty when no search is active.
    pub fn search_term(&self) -> &str {
        &self.search_term
    }

    /// The field the search term is matched against.
    pub fn filter_field(&self) -> FilterField {
        self.filter_field
    }

    // ===== Operations =====

    /// Append an entry to the canonical list.
    ///
    /// The filtered view stays consistent: the entry is appended there
    /// only when it matches the active search criteria. With no active
    /// term every entry matches, so the common case behaves like a
    /// plain dual append.
    #[must_use]
    pub fn add_entry(&self, entry: Entry) -> Self {
        let mut next = self.clone();
        if matches(&entry, &next.search_term, next.filter_field) {
            next.filtered_entries.push(entry.clone());
        }
        next.entries.push(entry);
        next
    }

    /// Replace the search criteria and recompute the filtered view.
    ///
    /// Scans the canonical list in insertion order; an empty term
    /// matches every entry.
    #[must_use]
    pub fn filter_entries(&self, search_term: &str, filter_field: FilterField) -> Self {
        let filtered_entries = self
            .entries
            .iter()
            .filter(|entry| matches(entry, search_term, filter_field))
            .cloned()
            .collect();

        Self {
            entries: self.entries.clone(),
            filtered_entries,
            search_term: search_term.to_string(),
            filter_field,
        }
    }

    /// Reset the search term and show every entry.
    ///
    /// The filter field selection is left unchanged.
    #[must_use]
    pub fn clear_search(&self) -> Self {
        Self {
            entries: self.entries.clone(),
            filtered_entries: self.entries.clone(),
            search_term: String::new(),
            filter_field: self.filter_field,
        }
    }
}

// ===== Matching =====

/// Case-insensitive substring match of `term` against the entry's
/// `field` value. An empty term matches everything.
fn matches(entry: &Entry, term: &str, field: FilterField) -> bool {
    field
        .value_of(entry)
        .to_lowercase()
        .contains(&term.to_lowercase())
}

// ===== Tests =====

#[cfg(test)]
#[path = "store_tests.rs"]
mod tests;
