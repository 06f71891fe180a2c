//! Help overlay widget displaying keyboard shortcuts.
//!
//! Shows a centered modal overlay with shortcuts grouped by category.
//! Triggered by '?' from the table, dismissed by 'Esc' or '?'.

use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

/// Width of the help popup as a percentage of the screen.
const HELP_POPUP_WIDTH_PERCENT: u16 = 60;
/// Height of the help popup as a percentage of the screen.
const HELP_POPUP_HEIGHT_PERCENT: u16 = 70;

/// Render the help overlay centered on the screen.
///
/// Shortcuts are grouped by category: Form, Search, Table, and
/// Application.
pub fn render_help_overlay(frame: &mut Frame) {
    let area = frame.area();
    let popup_area = centered_rect(HELP_POPUP_WIDTH_PERCENT, HELP_POPUP_HEIGHT_PERCENT, area);

    // Clear the background for the overlay
    frame.render_widget(Clear, popup_area);

    let help_paragraph = Paragraph::new(build_help_content())
        .block(
            Block::default()
                .title(" Keyboard Shortcuts ")
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Cyan)),
        )
        .wrap(Wrap { trim: false })
        .alignment(Alignment::Left);

    frame.render_widget(help_paragraph, popup_area);

    // Dismissal hint at the bottom of the popup
    let hint_area = Rect {
        x: popup_area.x,
        y: popup_area.y + popup_area.height.saturating_sub(1),
        width: popup_area.width,
        height: 1,
    };

    let hint = Paragraph::new(Line::from(Span::styled(
        " Press Esc or ? to close ",
        Style::default().add_modifier(Modifier::DIM),
    )))
    .alignment(Alignment::Center);

    frame.render_widget(hint, hint_area);
}

/// Calculate the centered rect for the help overlay.
fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let popup_width = area.width * percent_x / 100;
    let popup_height = area.height * percent_y / 100;
    let popup_x = (area.width.saturating_sub(popup_width)) / 2;
    let popup_y = (area.height.saturating_sub(popup_height)) / 2;

    Rect {
        x: area.x + popup_x,
        y: area.y + popup_y,
        width: popup_width,
        height: popup_height,
    }
}

/// Build the help content lines grouped by category.
fn build_help_content() -> Vec<Line<'static>> {
    let category_style = Style::default()
        .fg(Color::Cyan)
        .add_modifier(Modifier::BOLD);
    let key_style = Style::default()
        .fg(Color::Yellow)
        .add_modifier(Modifier::BOLD);

    let entry = |key: &'static str, desc: &'static str| {
        Line::from(vec![
            Span::styled(format!("  {key:<12}"), key_style),
            Span::raw(desc),
        ])
    };

    vec![
        Line::from(Span::styled("Form", category_style)),
        entry("type", "edit the active field"),
        entry("Tab/↓", "next field"),
        entry("Shift+Tab/↑", "previous field"),
        entry("Enter", "submit entry"),
        entry("Esc", "back to table"),
        Line::from(""),
        Line::from(Span::styled("Search", category_style)),
        entry("type", "filter entries live"),
        entry("←/→", "move cursor"),
        entry("F2", "cycle filter field"),
        entry("Enter", "keep filter, back to table"),
        entry("Esc", "clear search, back to table"),
        Line::from(""),
        Line::from(Span::styled("Table", category_style)),
        entry("j/↓, k/↑", "select row"),
        entry("g/Home", "first row"),
        entry("G/End", "last row"),
        entry("/", "focus search"),
        entry("i", "focus form"),
        entry("f", "cycle filter field"),
        entry("c", "clear search"),
        Line::from(""),
        Line::from(Span::styled("Application", category_style)),
        entry("Tab", "cycle pane focus"),
        entry("1/2/3", "focus form/search/table"),
        entry("?", "toggle this help"),
        entry("q", "quit"),
    ]
}

// ===== Tests =====
