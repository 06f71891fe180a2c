//! Search bar widget: term, cursor, and filter field indicator.

use crate::model::FilterField;
use crate::view::styles::{cursor_style, PaneStyles};
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

/// Search bar widget.
///
/// Shows the active search term with a cursor while the bar has
/// focus, and which field the term is matched against. An empty,
/// unfocused bar shows a key hint instead.
pub struct SearchBar<'a> {
    term: &'a str,
    cursor: usize,
    field: FilterField,
    focused: bool,
    styles: &'a PaneStyles,
}

impl<'a> SearchBar<'a> {
    /// Create a new SearchBar widget.
    pub fn new(
        term: &'a str,
        cursor: usize,
        field: FilterField,
        focused: bool,
        styles: &'a PaneStyles,
    ) -> Self {
        Self {
            term,
            cursor,
            field,
            focused,
            styles,
        }
    }
}

impl Widget for SearchBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let title = format!(" Search (filter: {}) ", self.field);
        let block = Block::default()
            .title(title)
            .borders(Borders::ALL)
            .border_style(self.styles.border(self.focused));

        let line = if self.focused {
            // Split term into before/cursor/after for the cursor cell
            let before = &self.term[..self.cursor];
            let mut rest = self.term[self.cursor..].chars();
            let (cursor_char, after) = match rest.next() {
                Some(ch) => (ch.to_string(), rest.as_str()),
                None => (" ".to_string(), ""),
            };

            Line::from(vec![
                Span::raw(before),
                Span::styled(cursor_char, cursor_style()),
                Span::raw(after),
            ])
        } else if self.term.is_empty() {
            Line::from(Span::styled(
                "press / to search",
                Style::default().add_modifier(Modifier::DIM),
            ))
        } else {
            Line::from(self.term)
        };

        Paragraph::new(line).block(block).render(area, buf);
    }
}

// ===== Tests =====

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::backend::TestBackend;
    use ratatui::Terminal;

    fn draw(term: &str, cursor: usize, focused: bool) {
        let styles = PaneStyles::default();
        let mut terminal = Terminal::new(TestBackend::new(40, 3)).unwrap();
        terminal
            .draw(|frame| {
                let widget = SearchBar::new(term, cursor, FilterField::Email, focused, &styles);
                frame.render_widget(widget, frame.area());
            })
            .unwrap();
    }

    #[test]
    fn renders_focused_with_mid_term_cursor() {
        draw("test", 2, true);
    }

    #[test]
    fn renders_focused_with_cursor_at_end() {
        draw("test", 4, true);
    }

    #[test]
    fn renders_unfocused_hint_when_empty() {
        draw("", 0, false);
    }

    #[test]
    fn renders_unfocused_active_term() {
        draw("a@x", 0, false);
    }
}
