//! Form draft state and text editing (pure transitions).
//!
//! Holds the three text buffers the user types into before an entry
//! exists. Submission validates the draft; the store only ever sees
//! entries that passed validation.

use crate::model::{validate_entry, Entry, ValidationError};

// ===== FormField =====

/// Which form field currently receives typed characters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormField {
    /// The name input.
    #[default]
    Name,
    /// The email input.
    Email,
    /// The message input.
    Message,
}

impl FormField {
    /// Field below this one, wrapping from Message back to Name.
    pub fn next(self) -> Self {
        match self {
            FormField::Name => FormField::Email,
            FormField::Email => FormField::Message,
            FormField::Message => FormField::Name,
        }
    }

    /// Field above this one, wrapping from Name back to Message.
    pub fn prev(self) -> Self {
        match self {
            FormField::Name => FormField::Message,
            FormField::Email => FormField::Name,
            FormField::Message => FormField::Email,
        }
    }

    /// Display label for the field.
    pub fn label(self) -> &'static str {
        match self {
            FormField::Name => "Name",
            FormField::Email => "Email",
            FormField::Message => "Message",
        }
    }
}

// ===== FormInput =====

/// Draft text for the three form fields plus editing position.
///
/// The cursor is a byte offset into the active field's buffer and is
/// always kept on a char boundary. Switching fields moves the cursor
/// to the end of the newly active buffer.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormInput {
    name: String,
    email: String,
    message: String,
    active: FormField,
    cursor: usize,
}

impl FormInput {
    /// Empty draft focused on the name field.
    pub fn new() -> Self {
        Self::default()
    }

    /// Current text of the name field.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Current text of the email field.
    pub fn email(&self) -> &str {
        &self.email
    }

    /// Current text of the message field.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// The field currently receiving input.
    pub fn active_field(&self) -> FormField {
        self.active
    }

    /// Byte offset of the cursor within the active field's buffer.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Text of an arbitrary field (used by the form widget).
    pub fn text_of(&self, field: FormField) -> &str {
        match field {
            FormField::Name => &self.name,
            FormField::Email => &self.email,
            FormField::Message => &self.message,
        }
    }

    fn active_buffer_mut(&mut self) -> &mut String {
        match self.active {
            FormField::Name => &mut self.name,
            FormField::Email => &mut self.email,
            FormField::Message => &mut self.message,
        }
    }

    fn active_buffer(&self) -> &str {
        self.text_of(self.active)
    }

    // ===== Editing =====

    /// Insert a character at the cursor and advance past it.
    pub fn insert_char(&mut self, ch: char) {
        let at = self.cursor;
        self.active_buffer_mut().insert(at, ch);
        self.cursor = at + ch.len_utf8();
    }

    /// Delete the character before the cursor, if any.
    pub fn backspace(&mut self) {
        let Some(prev) = self.active_buffer()[..self.cursor].chars().next_back() else {
            return;
        };
        let at = self.cursor - prev.len_utf8();
        self.active_buffer_mut().remove(at);
        self.cursor = at;
    }

    /// Move the cursor one character left, saturating at the start.
    pub fn cursor_left(&mut self) {
        if let Some(prev) = self.active_buffer()[..self.cursor].chars().next_back() {
            self.cursor -= prev.len_utf8();
        }
    }

    /// Move the cursor one character right, saturating at the end.
    pub fn cursor_right(&mut self) {
        if let Some(next) = self.active_buffer()[self.cursor..].chars().next() {
            self.cursor += next.len_utf8();
        }
    }

    // ===== Field navigation =====

    /// Move input focus to the next field (Name → Email → Message → Name).
    pub fn focus_next_field(&mut self) {
        self.active = self.active.next();
        self.cursor = self.active_buffer().len();
    }

    /// Move input focus to the previous field.
    pub fn focus_prev_field(&mut self) {
        self.active = self.active.prev();
        self.cursor = self.active_buffer().len();
    }

    // ===== Submission =====

    /// Validate the draft and build an [`Entry`].
    ///
    /// The draft is left untouched either way; on success the caller
    /// clears it with [`FormInput::clear`] once the entry is stored.
    pub fn submit(&self) -> Result<Entry, Vec<ValidationError>> {
        validate_entry(&self.name, &self.email, &self.message)
    }

    /// Reset all buffers and return focus to the name field.
    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

// ===== Tests =====

#[cfg(test)]
#[path = "form_input_tests.rs"]
mod tests;
