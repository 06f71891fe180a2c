//! Application state and transitions.
//!
//! `AppState` is the root state type containing the entry store and
//! all UI state. Transitions are pure methods following the Elm
//! architecture; the event loop in [`crate::view`] maps key events to
//! these methods and redraws.

use crate::model::{Entry, FilterField, ValidationError};
use crate::state::{search_input_handler, FormInput, FormState};

// ===== FocusPane =====

/// Which pane currently has keyboard focus.
///
/// Determines how key events are interpreted: the form and search
/// panes consume printable characters, the table pane routes keys
/// through the configurable bindings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FocusPane {
    /// The entry form (name/email/message inputs).
    #[default]
    Form,
    /// The search bar.
    Search,
    /// The entries table.
    Table,
}

// ===== AppState =====

/// Application state. Pure data, no side effects.
///
/// The entry store ([`FormState`]) is the domain model; every other
/// field is UI state. Store mutations go through the three store
/// operations only, so the store's filtered-view invariant holds for
/// any sequence of UI transitions.
#[derive(Debug, Clone, Default)]
pub struct AppState {
    /// The entry store. Private: mutated only via the methods below.
    form: FormState,

    /// Which pane has keyboard focus.
    pub focus: FocusPane,

    /// Draft text for the entry form.
    pub input: FormInput,

    /// Validation errors from the last failed submit. Cleared on the
    /// next form edit.
    pub validation_errors: Vec<ValidationError>,

    /// Byte cursor within the search term.
    pub search_cursor: usize,

    /// Selected row in the table, as an index into the filtered view.
    /// `None` when nothing is selected or the view is empty.
    pub selected: Option<usize>,

    /// Whether the help overlay is visible.
    pub help_visible: bool,

    /// Transient status message shown in the status bar until the next
    /// state-changing interaction.
    pub status: Option<String>,
}

impl AppState {
    /// Fresh state: empty store, form focused, no search active.
    pub fn new() -> Self {
        Self::default()
    }

    /// Fresh state wrapping a pre-seeded store (startup `--search` /
    /// `--filter-field` handling builds the store first).
    pub fn with_form(form: FormState) -> Self {
        Self {
            form,
            ..Self::default()
        }
    }

    /// The entry store.
    pub fn form(&self) -> &FormState {
        &self.form
    }

    // ===== Focus =====

    /// Cycle focus: Form → Search → Table → Form.
    pub fn cycle_focus(&mut self) {
        self.focus = match self.focus {
            FocusPane::Form => FocusPane::Search,
            FocusPane::Search => FocusPane::Table,
            FocusPane::Table => FocusPane::Form,
        };
    }

    /// Focus the entry form.
    pub fn focus_form(&mut self) {
        self.focus = FocusPane::Form;
    }

    /// Focus the search bar, placing the cursor at the end of the term.
    pub fn focus_search(&mut self) {
        self.focus = FocusPane::Search;
        self.search_cursor = self.form.search_term().len();
    }

    /// Focus the entries table.
    pub fn focus_table(&mut self) {
        self.focus = FocusPane::Table;
    }

    // ===== Form editing =====

    /// Type a character into the active form field.
    pub fn form_insert_char(&mut self, ch: char) {
        self.input.insert_char(ch);
        self.touch();
    }

    /// Delete the character before the form cursor.
    pub fn form_backspace(&mut self) {
        self.input.backspace();
        self.touch();
    }

    /// Move the form cursor left.
    pub fn form_cursor_left(&mut self) {
        self.input.cursor_left();
    }

    /// Move the form cursor right.
    pub fn form_cursor_right(&mut self) {
        self.input.cursor_right();
    }

    /// Move to the next form field.
    pub fn form_next_field(&mut self) {
        self.input.focus_next_field();
    }

    /// Move to the previous form field.
    pub fn form_prev_field(&mut self) {
        self.input.focus_prev_field();
    }

    /// Validate the draft and, on success, add the entry to the store.
    ///
    /// On success the draft is cleared and a status message is set; on
    /// failure the collected errors are kept for the form pane to
    /// display. Returns the added entry for the shell to log.
    pub fn submit_form(&mut self) -> Option<Entry> {
        match self.input.submit() {
            Ok(entry) => {
                self.form = self.form.add_entry(entry.clone());
                self.input.clear();
                self.validation_errors.clear();
                self.status = Some(format!("Entry from {} added", entry.name()));
                self.clamp_selection();
                Some(entry)
            }
            Err(errors) => {
                self.validation_errors = errors;
                self.status = None;
                None
            }
        }
    }

    // ===== Search editing =====

    /// Type a character into the search term (re-filters immediately).
    pub fn search_insert_char(&mut self, ch: char) {
        let (form, cursor) = search_input_handler::insert_char(&self.form, self.search_cursor, ch);
        self.form = form;
        self.search_cursor = cursor;
        self.status = None;
        self.clamp_selection();
    }

    /// Delete the character before the search cursor (re-filters).
    pub fn search_backspace(&mut self) {
        let (form, cursor) = search_input_handler::backspace(&self.form, self.search_cursor);
        self.form = form;
        self.search_cursor = cursor;
        self.clamp_selection();
    }

    /// Move the search cursor left.
    pub fn search_cursor_left(&mut self) {
        self.search_cursor = search_input_handler::cursor_left(self.form.search_term(), self.search_cursor);
    }

    /// Move the search cursor right.
    pub fn search_cursor_right(&mut self) {
        self.search_cursor =
            search_input_handler::cursor_right(self.form.search_term(), self.search_cursor);
    }

    /// Reset the search term and show every entry.
    pub fn clear_search(&mut self) {
        let (form, cursor) = search_input_handler::clear(&self.form);
        self.form = form;
        self.search_cursor = cursor;
        self.clamp_selection();
    }

    /// Cycle the filter field, keeping the current term applied.
    pub fn cycle_filter_field(&mut self) {
        self.form = search_input_handler::cycle_filter_field(&self.form);
        self.clamp_selection();
    }

    /// Apply search criteria directly (startup `--search` handling).
    pub fn apply_filter(&mut self, term: &str, field: FilterField) {
        self.form = self.form.filter_entries(term, field);
        self.search_cursor = self.form.search_term().len();
        self.clamp_selection();
    }

    // ===== Table selection =====

    /// Select the next row, starting from the top when nothing is
    /// selected. No-op when the filtered view is empty.
    pub fn select_next(&mut self) {
        let len = self.form.filtered_entries().len();
        if len == 0 {
            return;
        }
        self.selected = Some(match self.selected {
            None => 0,
            Some(i) => (i + 1).min(len - 1),
        });
    }

    /// Select the previous row, starting from the bottom when nothing
    /// is selected. No-op when the filtered view is empty.
    pub fn select_prev(&mut self) {
        let len = self.form.filtered_entries().len();
        if len == 0 {
            return;
        }
        self.selected = Some(match self.selected {
            None => len - 1,
            Some(i) => i.saturating_sub(1),
        });
    }

    /// Jump to the first row.
    pub fn select_first(&mut self) {
        if !self.form.filtered_entries().is_empty() {
            self.selected = Some(0);
        }
    }

    /// Jump to the last row.
    pub fn select_last(&mut self) {
        let len = self.form.filtered_entries().len();
        if len > 0 {
            self.selected = Some(len - 1);
        }
    }

    /// Keep the selection valid after the filtered view changed.
    fn clamp_selection(&mut self) {
        let len = self.form.filtered_entries().len();
        self.selected = match self.selected {
            Some(_) if len == 0 => None,
            Some(i) => Some(i.min(len - 1)),
            None => None,
        };
    }

    // ===== Overlays =====

    /// Toggle the help overlay.
    pub fn toggle_help(&mut self) {
        self.help_visible = !self.help_visible;
    }

    /// Clear per-edit transient state (status message, stale errors).
    fn touch(&mut self) {
        self.validation_errors.clear();
        self.status = None;
    }
}

// ===== Tests =====

#[cfg(test)]
#[path = "app_state_tests.rs"]
mod tests;
