//! Split pane layout rendering.
//!
//! Form pane on the left; search bar, entries table, and status bar
//! stacked on the right. The help overlay draws on top of everything
//! when visible.

use crate::state::{AppState, FocusPane};
use crate::view::{
    form::FormPane, help::render_help_overlay, search_input::SearchBar, styles::PaneStyles,
    table::EntriesTable,
};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Width of the form pane in columns.
const FORM_PANE_WIDTH: u16 = 34;

/// Render the full application frame.
pub fn render_layout(frame: &mut Frame, state: &AppState, styles: &PaneStyles) {
    let horizontal_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(FORM_PANE_WIDTH), Constraint::Min(20)])
        .split(frame.area());

    let form_area = horizontal_chunks[0];
    let right_area = horizontal_chunks[1];

    let vertical_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Search bar
            Constraint::Min(0),    // Entries table
            Constraint::Length(1), // Status bar
        ])
        .split(right_area);

    let search_area = vertical_chunks[0];
    let table_area = vertical_chunks[1];
    let status_area = vertical_chunks[2];

    frame.render_widget(
        FormPane::new(
            &state.input,
            &state.validation_errors,
            state.focus == FocusPane::Form,
            styles,
        ),
        form_area,
    );

    frame.render_widget(
        SearchBar::new(
            state.form().search_term(),
            state.search_cursor,
            state.form().filter_field(),
            state.focus == FocusPane::Search,
            styles,
        ),
        search_area,
    );

    frame.render_widget(
        EntriesTable::new(
            state.form().filtered_entries(),
            state.form().entries().len(),
            state.selected,
            state.focus == FocusPane::Table,
            styles,
        ),
        table_area,
    );

    render_status_bar(frame, status_area, state, styles);

    if state.help_visible {
        render_help_overlay(frame);
    }
}

/// One-line status bar: transient status message when present,
/// focus-dependent key hints otherwise.
fn render_status_bar(frame: &mut Frame, area: Rect, state: &AppState, styles: &PaneStyles) {
    let line = if let Some(status) = &state.status {
        Line::from(Span::styled(format!(" {status}"), styles.status()))
    } else {
        let hints = match state.focus {
            FocusPane::Form => " Enter submit · Tab next field · Esc table",
            FocusPane::Search => " type to filter · F2 field · Esc clear",
            FocusPane::Table => " / search · i form · f field · c clear · ? help · q quit",
        };
        Line::from(hints)
    };

    frame.render_widget(Paragraph::new(line), area);
}

// ===== Tests =====

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::FilterField;
    use ratatui::backend::TestBackend;
    use ratatui::Terminal;

    fn sample_state() -> AppState {
        let mut app = AppState::new();
        for (name, email, message) in [("Al", "a@x.com", "hi"), ("Bo", "b@x.com", "yo")] {
            for ch in name.chars() {
                app.form_insert_char(ch);
            }
            app.form_next_field();
            for ch in email.chars() {
                app.form_insert_char(ch);
            }
            app.form_next_field();
            for ch in message.chars() {
                app.form_insert_char(ch);
            }
            app.submit_form();
        }
        app
    }

    fn draw(state: &AppState) {
        let styles = PaneStyles::default();
        let mut terminal = Terminal::new(TestBackend::new(90, 24)).unwrap();
        terminal
            .draw(|frame| render_layout(frame, state, &styles))
            .unwrap();
    }

    #[test]
    fn renders_fresh_state_without_panic() {
        draw(&AppState::new());
    }

    #[test]
    fn renders_populated_state_in_every_focus() {
        let mut state = sample_state();
        draw(&state);
        state.cycle_focus();
        draw(&state);
        state.cycle_focus();
        draw(&state);
    }

    #[test]
    fn renders_filtered_state_with_help_overlay() {
        let mut state = sample_state();
        state.apply_filter("a@x", FilterField::Email);
        state.toggle_help();
        draw(&state);
    }

    #[test]
    fn renders_in_small_terminal_without_panic() {
        let styles = PaneStyles::default();
        let state = sample_state();
        let mut terminal = Terminal::new(TestBackend::new(20, 5)).unwrap();
        terminal
            .draw(|frame| render_layout(frame, &state, &styles))
            .unwrap();
    }
}
