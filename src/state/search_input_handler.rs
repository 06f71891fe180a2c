//! Search bar editing (pure state transitions).
//!
//! The search term itself lives in [`FormState`]; every edit reapplies
//! the filter immediately, so the table always reflects what is in the
//! search bar (live filtering, like the original form's search box).
//! Only the byte cursor is extra UI state, threaded through alongside
//! the new store value.

use crate::model::FilterField;
use crate::state::FormState;

/// Insert a character into the search term at the cursor and re-filter.
///
/// Returns the new store state and cursor position.
pub fn insert_char(form: &FormState, cursor: usize, ch: char) -> (FormState, usize) {
    let mut term = form.search_term().to_string();
    term.insert(cursor, ch);
    let next = form.filter_entries(&term, form.filter_field());
    (next, cursor + ch.len_utf8())
}

/// Delete the character before the cursor and re-filter.
///
/// No-op at the start of the term.
pub fn backspace(form: &FormState, cursor: usize) -> (FormState, usize) {
    let term = form.search_term();
    let Some(prev) = term[..cursor].chars().next_back() else {
        return (form.clone(), cursor);
    };
    let at = cursor - prev.len_utf8();
    let mut term = term.to_string();
    term.remove(at);
    let next = form.filter_entries(&term, form.filter_field());
    (next, at)
}

/// Move the cursor one character left, saturating at the start.
pub fn cursor_left(term: &str, cursor: usize) -> usize {
    term[..cursor]
        .chars()
        .next_back()
        .map_or(cursor, |prev| cursor - prev.len_utf8())
}

/// Move the cursor one character right, saturating at the end.
pub fn cursor_right(term: &str, cursor: usize) -> usize {
    term[cursor..]
        .chars()
        .next()
        .map_or(cursor, |next| cursor + next.len_utf8())
}

/// Cycle the filter field and re-filter with the unchanged term.
pub fn cycle_filter_field(form: &FormState) -> FormState {
    let next_field: FilterField = form.filter_field().cycle();
    form.filter_entries(&form.search_term().to_string(), next_field)
}

/// Clear the search: empty term, full list, cursor back at zero.
pub fn clear(form: &FormState) -> (FormState, usize) {
    (form.clear_search(), 0)
}

// ===== Tests =====

#[cfg(test)]
#[path = "search_input_handler_tests.rs"]
mod tests;
