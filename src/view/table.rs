//! Entries table widget: header, filtered rows, selection.

use crate::model::Entry;
use crate::view::styles::PaneStyles;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};
use unicode_width::UnicodeWidthChar;

/// Minimum width reserved for the message column.
const MESSAGE_MIN_WIDTH: u16 = 10;
/// Fixed width of the name column.
const NAME_WIDTH: u16 = 14;
/// Fixed width of the email column.
const EMAIL_WIDTH: u16 = 22;

/// Entries table widget.
///
/// Renders the filtered view in insertion order: a styled header row,
/// one row per entry with cells truncated to column width (by display
/// width, with an ellipsis), and the selected row highlighted. The
/// title shows how many entries are visible out of the total.
pub struct EntriesTable<'a> {
    entries: &'a [Entry],
    total: usize,
    selected: Option<usize>,
    focused: bool,
    styles: &'a PaneStyles,
}

impl<'a> EntriesTable<'a> {
    /// Create a new EntriesTable widget.
    ///
    /// `entries` is the filtered view; `total` the canonical count.
    pub fn new(
        entries: &'a [Entry],
        total: usize,
        selected: Option<usize>,
        focused: bool,
        styles: &'a PaneStyles,
    ) -> Self {
        Self {
            entries,
            total,
            selected,
            focused,
            styles,
        }
    }
}

impl Widget for EntriesTable<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let title = format!(" Entries ({}/{}) ", self.entries.len(), self.total);
        let block = Block::default()
            .title(title)
            .borders(Borders::ALL)
            .border_style(self.styles.border(self.focused));
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.width == 0 || inner.height == 0 {
            return;
        }

        let message_width = inner
            .width
            .saturating_sub(NAME_WIDTH + EMAIL_WIDTH + 2)
            .max(MESSAGE_MIN_WIDTH) as usize;
        let name_width = NAME_WIDTH as usize;
        let email_width = EMAIL_WIDTH as usize;

        let mut lines = Vec::new();

        let header = format!(
            "{} {} {}",
            fit_width("Name", name_width),
            fit_width("Email", email_width),
            fit_width("Message", message_width),
        );
        lines.push(Line::from(Span::styled(header, self.styles.header())));

        // Window the rows around the selection when they overflow.
        let visible_rows = inner.height.saturating_sub(1) as usize;
        let start = match self.selected {
            Some(selected) if visible_rows > 0 && selected + 1 > visible_rows => {
                selected + 1 - visible_rows
            }
            _ => 0,
        };

        for (index, entry) in self.entries.iter().enumerate().skip(start).take(visible_rows) {
            let row = format!(
                "{} {} {}",
                fit_width(entry.name(), name_width),
                fit_width(entry.email(), email_width),
                fit_width(entry.message(), message_width),
            );
            let line = if self.selected == Some(index) {
                Line::from(Span::styled(row, self.styles.selected_row()))
            } else {
                Line::from(row)
            };
            lines.push(line);
        }

        if self.entries.is_empty() {
            lines.push(Line::from("  no entries match"));
        }

        Paragraph::new(lines).render(inner, buf);
    }
}

/// Truncate or pad `text` to exactly `width` display columns.
///
/// Truncation is by display width (wide characters count as two
/// columns) and marked with a trailing ellipsis.
fn fit_width(text: &str, width: usize) -> String {
    if width == 0 {
        return String::new();
    }

    let mut out = String::new();
    let mut used = 0;

    for ch in text.chars() {
        let ch_width = ch.width().unwrap_or(0);
        if used + ch_width > width.saturating_sub(1) {
            // Only truncate if there really is more text than fits.
            let remaining: usize = text[out.len()..]
                .chars()
                .map(|c| c.width().unwrap_or(0))
                .sum();
            if used + remaining <= width {
                break;
            }
            out.push('…');
            used += 1;
            break;
        }
        out.push(ch);
        used += ch_width;
    }

    // Handle the exact-fit tail skipped by the lookahead above.
    if out.chars().next_back() != Some('…') {
        for ch in text[out.len()..].chars() {
            let ch_width = ch.width().unwrap_or(0);
            if used + ch_width > width {
                break;
            }
            out.push(ch);
            used += ch_width;
        }
    }

    for _ in used..width {
        out.push(' ');
    }
    out
}

// ===== Tests =====
