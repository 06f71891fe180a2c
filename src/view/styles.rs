//! Pane and widget styling configuration.

use ratatui::style::{Color, Modifier, Style};

// ===== ColorConfig =====

/// Configuration for color output.
///
/// Determines whether colors should be enabled or disabled based on:
/// - `--no-color` CLI flag
/// - `NO_COLOR` environment variable
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColorConfig {
    enabled: bool,
}

impl ColorConfig {
    /// Create a ColorConfig from CLI args and environment.
    ///
    /// Priority (first match wins):
    /// 1. `--no-color` flag (disables colors)
    /// 2. `NO_COLOR` env var (any value disables colors)
    /// 3. Default: colors enabled
    pub fn from_env_and_args(no_color_flag: bool) -> Self {
        let enabled = !no_color_flag && std::env::var("NO_COLOR").is_err();
        Self { enabled }
    }

    /// Check if colors are enabled.
    pub fn colors_enabled(self) -> bool {
        self.enabled
    }
}

// ===== PaneStyles =====

/// Styling for the three panes, the table header, and messages.
///
/// All styles collapse to the terminal default when colors are
/// disabled.
pub struct PaneStyles {
    focused_border: Style,
    unfocused_border: Style,
    label: Style,
    error: Style,
    header: Style,
    selected_row: Style,
    status: Style,
}

impl PaneStyles {
    /// Create styles with the default color scheme.
    pub fn new() -> Self {
        Self::with_color_config(ColorConfig::from_env_and_args(false))
    }

    /// Create styles honoring the given color configuration.
    pub fn with_color_config(config: ColorConfig) -> Self {
        if config.colors_enabled() {
            Self {
                focused_border: Style::default().fg(Color::Cyan),
                unfocused_border: Style::default().fg(Color::DarkGray),
                label: Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
                error: Style::default().fg(Color::Red),
                header: Style::default()
                    .fg(Color::Black)
                    .bg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
                selected_row: Style::default()
                    .bg(Color::DarkGray)
                    .add_modifier(Modifier::BOLD),
                status: Style::default().fg(Color::Green),
            }
        } else {
            Self {
                focused_border: Style::default().add_modifier(Modifier::BOLD),
                unfocused_border: Style::default(),
                label: Style::default().add_modifier(Modifier::BOLD),
                error: Style::default().add_modifier(Modifier::UNDERLINED),
                header: Style::default().add_modifier(Modifier::REVERSED),
                selected_row: Style::default().add_modifier(Modifier::REVERSED),
                status: Style::default(),
            }
        }
    }

    /// Border style for a pane, depending on focus.
    pub fn border(&self, focused: bool) -> Style {
        if focused {
            self.focused_border
        } else {
            self.unfocused_border
        }
    }

    /// Style for field labels and section headers.
    pub fn label(&self) -> Style {
        self.label
    }

    /// Style for validation error lines.
    pub fn error(&self) -> Style {
        self.error
    }

    /// Style for the table header row.
    pub fn header(&self) -> Style {
        self.header
    }

    /// Style for the selected table row.
    pub fn selected_row(&self) -> Style {
        self.selected_row
    }

    /// Style for transient status messages.
    pub fn status(&self) -> Style {
        self.status
    }
}

impl Default for PaneStyles {
    fn default() -> Self {
        Self::new()
    }
}

// ===== Cursor rendering =====

/// Style for the inverted cursor cell in text inputs.
pub fn cursor_style() -> Style {
    Style::default()
        .bg(Color::White)
        .fg(Color::Black)
        .add_modifier(Modifier::BOLD)
}

// ===== Tests =====
