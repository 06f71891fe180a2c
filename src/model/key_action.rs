//! Domain-level keyboard actions independent of key bindings.

/// Domain-level actions that can be mapped to configurable key bindings.
///
/// These represent user intent, not specific keys. The mapping from
/// `crossterm::event::KeyEvent` to `KeyAction` is handled by
/// [`crate::config::KeyBindings`] and only applies while the table has
/// focus; text entry into the form and search bar is handled directly
/// so bindings cannot shadow typed characters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyAction {
    // Focus navigation
    /// Focus the entry form. Default: 1/i
    FocusForm,
    /// Focus the search bar. Default: 2, /
    FocusSearch,
    /// Focus the entries table. Default: 3
    FocusTable,
    /// Cycle focus: Form → Search → Table. Default: Tab
    CycleFocus,

    // Table selection
    /// Select the next (lower) row in the table. Default: j/↓
    SelectNext,
    /// Select the previous (higher) row in the table. Default: k/↑
    SelectPrev,
    /// Jump to the first row. Default: g/Home
    SelectFirst,
    /// Jump to the last row. Default: G/End
    SelectLast,

    // Filtering
    /// Reset the search term and show every entry. Default: c
    ClearSearch,
    /// Cycle the filter field: name → email → message. Default: f
    CycleFilterField,

    // Application
    /// Exit the application. Default: q
    Quit,
    /// Toggle the help overlay. Default: ?
    Help,
}
