//! TUI rendering and terminal management (impure shell)

mod form;
mod help;
mod layout;
mod search_input;
mod styles;
mod table;

pub use form::FormPane;
pub use help::render_help_overlay;
pub use layout::render_layout;
pub use search_input::SearchBar;
pub use styles::{ColorConfig, PaneStyles};
pub use table::EntriesTable;

use crate::config::KeyBindings;
use crate::model::KeyAction;
use crate::state::{AppState, FocusPane};
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
    ExecutableCommand,
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io::{self, Stdout};
use std::time::Duration;
use thiserror::Error;
use tracing::{debug, info};

/// Errors that can occur during TUI operations
#[derive(Debug, Error)]
pub enum TuiError {
    /// IO error during terminal operations
    #[error("Terminal IO error: {0}")]
    Io(#[from] io::Error),
}

/// Main TUI application
///
/// Generic over backend to support testing with TestBackend
pub struct TuiApp<B>
where
    B: ratatui::backend::Backend,
{
    terminal: Terminal<B>,
    app_state: AppState,
    key_bindings: KeyBindings,
    styles: PaneStyles,
}

/// Set up the terminal, run the event loop, and restore the terminal.
///
/// The terminal is restored even when the loop exits with an error, so
/// the shell is never left in raw mode.
pub fn run(app_state: AppState, no_color: bool) -> Result<(), TuiError> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    stdout.execute(EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let terminal = Terminal::new(backend)?;

    let styles = PaneStyles::with_color_config(ColorConfig::from_env_and_args(no_color));
    let mut app = TuiApp {
        terminal,
        app_state,
        key_bindings: KeyBindings::default(),
        styles,
    };

    let result = app.event_loop();

    let _ = disable_raw_mode();
    let _ = io::stdout().execute(LeaveAlternateScreen);

    result
}

impl TuiApp<CrosstermBackend<Stdout>> {
    /// Run the main event loop.
    ///
    /// Returns when the user quits. Event-driven: redraws after each
    /// handled key or resize event; idle polling consumes minimal CPU.
    fn event_loop(&mut self) -> Result<(), TuiError> {
        const POLL_INTERVAL: Duration = Duration::from_millis(250);

        // Initial render - ensures the screen has content immediately
        self.draw()?;

        loop {
            if !event::poll(POLL_INTERVAL)? {
                continue;
            }
            match event::read()? {
                Event::Key(key) => {
                    // Release events would double-apply every keypress
                    // on platforms that report them.
                    if key.kind == KeyEventKind::Release {
                        continue;
                    }
                    if self.handle_key(key) {
                        return Ok(()); // User quit
                    }
                    self.draw()?;
                }
                Event::Resize(_, _) => {
                    self.draw()?;
                }
                _ => {}
            }
        }
    }
}

impl<B> TuiApp<B>
where
    B: ratatui::backend::Backend,
{
    /// Build an app around an existing terminal (TestBackend in tests).
    pub fn with_terminal(terminal: Terminal<B>, app_state: AppState) -> Self {
        Self {
            terminal,
            app_state,
            key_bindings: KeyBindings::default(),
            styles: PaneStyles::default(),
        }
    }

    /// The current application state.
    pub fn state(&self) -> &AppState {
        &self.app_state
    }

    /// Render the current state to the terminal.
    pub fn draw(&mut self) -> Result<(), TuiError> {
        let state = &self.app_state;
        let styles = &self.styles;
        self.terminal
            .draw(|frame| render_layout(frame, state, styles))?;
        Ok(())
    }

    /// Handle a key event. Returns `true` when the user quit.
    ///
    /// Routing: Ctrl+C always quits; the help overlay swallows keys
    /// until dismissed; otherwise the focused pane decides. Text panes
    /// (form, search) consume characters directly, the table routes
    /// through the configurable bindings.
    pub fn handle_key(&mut self, key: KeyEvent) -> bool {
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            return true;
        }

        if self.app_state.help_visible {
            if matches!(key.code, KeyCode::Esc | KeyCode::Char('?')) {
                self.app_state.toggle_help();
            }
            return false;
        }

        match self.app_state.focus {
            FocusPane::Form => self.handle_form_key(key),
            FocusPane::Search => self.handle_search_key(key),
            FocusPane::Table => return self.handle_table_key(key),
        }
        false
    }

    /// Keys while the form has focus: edit the draft, move between
    /// fields, submit.
    fn handle_form_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char(ch)
                if key.modifiers.is_empty() || key.modifiers == KeyModifiers::SHIFT =>
            {
                self.app_state.form_insert_char(ch);
            }
            KeyCode::Backspace => self.app_state.form_backspace(),
            KeyCode::Left => self.app_state.form_cursor_left(),
            KeyCode::Right => self.app_state.form_cursor_right(),
            KeyCode::Tab | KeyCode::Down => self.app_state.form_next_field(),
            KeyCode::BackTab | KeyCode::Up => self.app_state.form_prev_field(),
            KeyCode::Enter => match self.app_state.submit_form() {
                Some(entry) => {
                    info!(name = entry.name(), "Entry added");
                }
                None => {
                    debug!(
                        errors = self.app_state.validation_errors.len(),
                        "Submit rejected by validation"
                    );
                }
            },
            KeyCode::Esc => self.app_state.focus_table(),
            _ => {}
        }
    }

    /// Keys while the search bar has focus: every edit re-filters.
    fn handle_search_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char(ch)
                if key.modifiers.is_empty() || key.modifiers == KeyModifiers::SHIFT =>
            {
                self.app_state.search_insert_char(ch);
                debug!(term = self.app_state.form().search_term(), "Filter applied");
            }
            KeyCode::Backspace => self.app_state.search_backspace(),
            KeyCode::Left => self.app_state.search_cursor_left(),
            KeyCode::Right => self.app_state.search_cursor_right(),
            KeyCode::F(2) => self.app_state.cycle_filter_field(),
            KeyCode::Enter => self.app_state.focus_table(),
            KeyCode::Esc => {
                self.app_state.clear_search();
                self.app_state.focus_table();
            }
            _ => {}
        }
    }

    /// Keys while the table has focus, routed through the bindings.
    /// Returns `true` when the user quit.
    fn handle_table_key(&mut self, key: KeyEvent) -> bool {
        // Normalize away kind/state so bindings match on code+modifiers
        let lookup = KeyEvent::new(key.code, key.modifiers);
        let Some(action) = self.key_bindings.get(lookup) else {
            return false;
        };

        match action {
            KeyAction::Quit => return true,
            KeyAction::Help => self.app_state.toggle_help(),
            KeyAction::CycleFocus => self.app_state.cycle_focus(),
            KeyAction::FocusForm => self.app_state.focus_form(),
            KeyAction::FocusSearch => self.app_state.focus_search(),
            KeyAction::FocusTable => self.app_state.focus_table(),
            KeyAction::SelectNext => self.app_state.select_next(),
            KeyAction::SelectPrev => self.app_state.select_prev(),
            KeyAction::SelectFirst => self.app_state.select_first(),
            KeyAction::SelectLast => self.app_state.select_last(),
            KeyAction::ClearSearch => {
                self.app_state.clear_search();
                debug!("Search cleared");
            }
            KeyAction::CycleFilterField => {
                self.app_state.cycle_filter_field();
                debug!(
                    field = %self.app_state.form().filter_field(),
                    "Filter field cycled"
                );
            }
        }
        false
    }
}
