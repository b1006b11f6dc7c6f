//! Command definitions for keyboard input handling.
//!
//! The [`Command`] enum decouples key bindings from their effects.

/// Every user action reachable from the keyboard.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    // =========================================================================
    // Global Commands (always active)
    // =========================================================================
    /// Quit the application (Ctrl+C)
    Quit,

    // =========================================================================
    // Setup form
    // =========================================================================
    /// Focus the next form field (Tab)
    FocusNext,
    /// Focus the previous form field (Shift+Tab)
    FocusPrev,
    /// Next option of the focused selector (Right, Down)
    SelectNext,
    /// Previous option of the focused selector (Left, Up)
    SelectPrev,

    // =========================================================================
    // Text input
    // =========================================================================
    /// Type a character into the focused text
    TypeChar(char),
    /// Insert pasted text
    Paste(String),
    /// Delete the character before the cursor
    Backspace,
    /// Line break inside an answer (Shift+Enter, Alt+Enter, Ctrl+J)
    InsertNewline,

    // =========================================================================
    // Flow actions
    // =========================================================================
    /// Submit the setup form or the current answer (Enter)
    Submit,
    /// Skip the current question (Ctrl+S)
    Skip,
    /// Start over from an empty setup form (r)
    Restart,
    /// Export the results report (p)
    Export,

    // =========================================================================
    // Scroll Commands
    // =========================================================================
    /// Scroll up by the given number of lines
    ScrollUp(u16),
    /// Scroll down by the given number of lines
    ScrollDown(u16),

    /// Consume the key without doing anything
    Noop,
}
