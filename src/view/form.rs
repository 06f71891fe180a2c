//! Entry form widget: three labeled inputs plus validation errors.

use crate::model::ValidationError;
use crate::state::{FormField, FormInput};
use crate::view::styles::{cursor_style, PaneStyles};
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget, Wrap},
};

/// Form pane widget.
///
/// Renders the name/email/message inputs with the cursor in the active
/// field (when the form has focus) and any validation errors from the
/// last submit attempt below the fields.
pub struct FormPane<'a> {
    input: &'a FormInput,
    errors: &'a [ValidationError],
    focused: bool,
    styles: &'a PaneStyles,
}

impl<'a> FormPane<'a> {
    /// Create a new FormPane widget.
    pub fn new(
        input: &'a FormInput,
        errors: &'a [ValidationError],
        focused: bool,
        styles: &'a PaneStyles,
    ) -> Self {
        Self {
            input,
            errors,
            focused,
            styles,
        }
    }

    fn field_lines(&self, field: FormField) -> [Line<'a>; 2] {
        let text = self.input.text_of(field);
        let active = self.focused && self.input.active_field() == field;

        let label = if active {
            Line::from(Span::styled(format!("▸ {}", field.label()), self.styles.label()))
        } else {
            Line::from(Span::styled(format!("  {}", field.label()), self.styles.label()))
        };

        let value = if active {
            input_line(text, self.input.cursor())
        } else {
            Line::from(format!("  {text}"))
        };

        [label, value]
    }
}

impl Widget for FormPane<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .title(" New Entry ")
            .borders(Borders::ALL)
            .border_style(self.styles.border(self.focused));
        let inner = block.inner(area);
        block.render(area, buf);

        let mut lines = Vec::new();
        for field in [FormField::Name, FormField::Email, FormField::Message] {
            lines.extend(self.field_lines(field));
            lines.push(Line::from(""));
        }

        if !self.errors.is_empty() {
            for error in self.errors {
                lines.push(Line::from(Span::styled(
                    format!("✗ {error}"),
                    self.styles.error(),
                )));
            }
        } else {
            lines.push(Line::from(Span::raw("Enter to submit")));
        }

        Paragraph::new(lines)
            .wrap(Wrap { trim: false })
            .render(inner, buf);
    }
}

/// Build the input line with an inverted cursor cell.
///
/// The cursor is a byte offset on a char boundary; the cell under it
/// is highlighted, with a trailing space standing in at end-of-text.
fn input_line(text: &str, cursor: usize) -> Line<'_> {
    let before = &text[..cursor];
    let mut rest = text[cursor..].chars();
    let (cursor_char, after) = match rest.next() {
        Some(ch) => (ch.to_string(), rest.as_str()),
        None => (" ".to_string(), ""),
    };

    Line::from(vec![
        Span::raw("  "),
        Span::raw(before),
        Span::styled(cursor_char, cursor_style()),
        Span::raw(after),
    ])
}

// ===== Tests =====

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::backend::TestBackend;
    use ratatui::Terminal;

    fn draw(input: &FormInput, errors: &[ValidationError], focused: bool) {
        let styles = PaneStyles::default();
        let mut terminal = Terminal::new(TestBackend::new(40, 16)).unwrap();
        terminal
            .draw(|frame| {
                let widget = FormPane::new(input, errors, focused, &styles);
                frame.render_widget(widget, frame.area());
            })
            .unwrap();
    }

    #[test]
    fn renders_empty_form_without_panic() {
        draw(&FormInput::new(), &[], true);
    }

    #[test]
    fn renders_filled_form_without_panic() {
        let mut input = FormInput::new();
        for ch in "Al".chars() {
            input.insert_char(ch);
        }
        input.focus_next_field();
        for ch in "a@x.com".chars() {
            input.insert_char(ch);
        }
        draw(&input, &[], true);
        draw(&input, &[], false);
    }

    #[test]
    fn renders_validation_errors_without_panic() {
        let errors = vec![
            ValidationError::MissingName,
            ValidationError::InvalidEmail {
                raw: "bad".to_string(),
            },
        ];
        draw(&FormInput::new(), &errors, true);
    }

    #[test]
    fn renders_multibyte_input_with_mid_text_cursor() {
        let mut input = FormInput::new();
        for ch in "Zoë".chars() {
            input.insert_char(ch);
        }
        input.cursor_left();
        draw(&input, &[], true);
    }
}
