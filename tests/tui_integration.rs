//! Integration tests driving the TUI through key events.
//!
//! A `TuiApp` over ratatui's TestBackend exercises the full path from
//! key event to state transition to render, without a real terminal.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use guestbook::model::FilterField;
use guestbook::state::{AppState, FocusPane};
use guestbook::view::TuiApp;
use ratatui::backend::TestBackend;
use ratatui::Terminal;

fn test_app() -> TuiApp<TestBackend> {
    let terminal = Terminal::new(TestBackend::new(90, 24)).unwrap();
    TuiApp::with_terminal(terminal, AppState::new())
}

fn key(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::NONE)
}

fn type_text(app: &mut TuiApp<TestBackend>, text: &str) {
    for ch in text.chars() {
        assert!(!app.handle_key(key(KeyCode::Char(ch))));
    }
}

/// Fill the form and submit one entry. Assumes the form has focus with
/// an empty draft, which is how submit leaves it.
fn submit_entry(app: &mut TuiApp<TestBackend>, name: &str, email: &str, message: &str) {
    type_text(app, name);
    app.handle_key(key(KeyCode::Tab));
    type_text(app, email);
    app.handle_key(key(KeyCode::Tab));
    type_text(app, message);
    app.handle_key(key(KeyCode::Enter));
}

// ===== Submit flow =====

#[test]
fn typing_and_submitting_adds_an_entry() {
    let mut app = test_app();
    submit_entry(&mut app, "Al", "a@x.com", "hi");

    assert_eq!(app.state().form().entries().len(), 1);
    assert_eq!(app.state().form().entries()[0].name(), "Al");
    assert_eq!(app.state().input.name(), "", "Draft cleared after submit");
    app.draw().unwrap();
}

#[test]
fn invalid_submit_shows_errors_and_stores_nothing() {
    let mut app = test_app();
    type_text(&mut app, "Al");
    app.handle_key(key(KeyCode::Enter));

    assert!(app.state().form().entries().is_empty());
    assert!(!app.state().validation_errors.is_empty());
    app.draw().unwrap();

    // The next keystroke clears the stale errors
    type_text(&mut app, "x");
    assert!(app.state().validation_errors.is_empty());
}

// ===== Search flow =====

#[test]
fn search_filters_the_table_live() {
    let mut app = test_app();
    submit_entry(&mut app, "Al", "a@x.com", "hi");
    submit_entry(&mut app, "Bo", "b@x.com", "yo");

    // Esc to table, / to search, then type an email fragment
    app.handle_key(key(KeyCode::Esc));
    assert_eq!(app.state().focus, FocusPane::Table);
    app.handle_key(key(KeyCode::Char('/')));
    assert_eq!(app.state().focus, FocusPane::Search);

    type_text(&mut app, "a@x");
    assert_eq!(app.state().form().search_term(), "a@x");
    assert_eq!(app.state().form().filtered_entries().len(), 1);
    assert_eq!(app.state().form().filtered_entries()[0].name(), "Al");
    app.draw().unwrap();

    // Backspace widens the filter again
    app.handle_key(key(KeyCode::Backspace));
    app.handle_key(key(KeyCode::Backspace));
    app.handle_key(key(KeyCode::Backspace));
    assert_eq!(app.state().form().filtered_entries().len(), 2);
}

#[test]
fn escape_in_search_clears_and_returns_to_table() {
    let mut app = test_app();
    submit_entry(&mut app, "Al", "a@x.com", "hi");

    app.handle_key(key(KeyCode::Esc));
    app.handle_key(key(KeyCode::Char('/')));
    type_text(&mut app, "zzz");
    assert!(app.state().form().filtered_entries().is_empty());

    app.handle_key(key(KeyCode::Esc));
    assert_eq!(app.state().focus, FocusPane::Table);
    assert_eq!(app.state().form().search_term(), "");
    assert_eq!(app.state().form().filtered_entries().len(), 1);
}

#[test]
fn f2_cycles_filter_field_while_searching() {
    let mut app = test_app();
    submit_entry(&mut app, "Al", "a@x.com", "hi");
    submit_entry(&mut app, "Bo", "b@x.com", "yo");

    app.handle_key(key(KeyCode::Esc));
    app.handle_key(key(KeyCode::Char('/')));
    type_text(&mut app, "yo");
    assert!(
        app.state().form().filtered_entries().is_empty(),
        "No email contains 'yo'"
    );

    app.handle_key(key(KeyCode::F(2)));
    assert_eq!(app.state().form().filter_field(), FilterField::Message);
    assert_eq!(app.state().form().filtered_entries().len(), 1);
}

#[test]
fn submitting_while_filtered_respects_the_filter() {
    let mut app = test_app();
    submit_entry(&mut app, "Al", "a@x.com", "hi");

    app.handle_key(key(KeyCode::Esc));
    app.handle_key(key(KeyCode::Char('/')));
    type_text(&mut app, "zzz");

    // Back to the form and add a non-matching entry
    app.handle_key(key(KeyCode::Enter)); // to table
    app.handle_key(key(KeyCode::Char('i'))); // to form
    submit_entry(&mut app, "Zed", "z@x.com", "hello");

    assert_eq!(app.state().form().entries().len(), 2);
    assert!(
        app.state().form().filtered_entries().is_empty(),
        "New entry does not match the active search"
    );
    app.draw().unwrap();
}

// ===== Table keys =====

#[test]
fn table_selection_follows_j_and_k() {
    let mut app = test_app();
    submit_entry(&mut app, "Al", "a@x.com", "hi");
    submit_entry(&mut app, "Bo", "b@x.com", "yo");
    app.handle_key(key(KeyCode::Esc));

    app.handle_key(key(KeyCode::Char('j')));
    assert_eq!(app.state().selected, Some(0));
    app.handle_key(key(KeyCode::Char('j')));
    assert_eq!(app.state().selected, Some(1));
    app.handle_key(key(KeyCode::Char('k')));
    assert_eq!(app.state().selected, Some(0));
    app.draw().unwrap();
}

#[test]
fn c_clears_an_active_search_from_the_table() {
    let mut app = test_app();
    submit_entry(&mut app, "Al", "a@x.com", "hi");
    app.handle_key(key(KeyCode::Esc));
    app.handle_key(key(KeyCode::Char('/')));
    type_text(&mut app, "zzz");
    app.handle_key(key(KeyCode::Enter));

    app.handle_key(key(KeyCode::Char('c')));
    assert_eq!(app.state().form().search_term(), "");
    assert_eq!(app.state().form().filtered_entries().len(), 1);
}

// ===== Quit and focus routing =====

#[test]
fn q_quits_only_from_the_table() {
    let mut app = test_app();
    // Form focused: 'q' types into the name field
    assert!(!app.handle_key(key(KeyCode::Char('q'))));
    assert_eq!(app.state().input.name(), "q");

    app.handle_key(key(KeyCode::Esc));
    assert!(app.handle_key(key(KeyCode::Char('q'))));
}

#[test]
fn ctrl_c_quits_from_any_focus() {
    let ctrl_c = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);

    let mut app = test_app();
    assert!(app.handle_key(ctrl_c)); // Form focus

    let mut app = test_app();
    app.handle_key(key(KeyCode::Esc));
    assert!(app.handle_key(ctrl_c)); // Table focus
}

#[test]
fn tab_cycles_focus_through_all_panes() {
    let mut app = test_app();
    app.handle_key(key(KeyCode::Esc));
    assert_eq!(app.state().focus, FocusPane::Table);

    // Tab from the table wraps to the form; then the form's Tab is
    // field navigation, so use Esc + Tab to keep cycling panes.
    app.handle_key(key(KeyCode::Tab));
    assert_eq!(app.state().focus, FocusPane::Form);
}

// ===== Help overlay =====

#[test]
fn help_overlay_swallows_keys_until_dismissed() {
    let mut app = test_app();
    submit_entry(&mut app, "Al", "a@x.com", "hi");
    app.handle_key(key(KeyCode::Esc));

    app.handle_key(key(KeyCode::Char('?')));
    assert!(app.state().help_visible);
    app.draw().unwrap();

    // 'j' must not move the selection while help is open
    app.handle_key(key(KeyCode::Char('j')));
    assert_eq!(app.state().selected, None);

    // And 'q' must not quit
    assert!(!app.handle_key(key(KeyCode::Char('q'))));

    app.handle_key(key(KeyCode::Esc));
    assert!(!app.state().help_visible);
}
