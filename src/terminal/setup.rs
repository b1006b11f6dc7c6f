//! Entering and leaving TUI mode.
//!
//! Leaving is infallible and idempotent so it can run from `Drop` and from
//! the panic hook alike.

use crossterm::{
    cursor::Show,
    event::{
        DisableBracketedPaste, EnableBracketedPaste, KeyboardEnhancementFlags,
        PopKeyboardEnhancementFlags, PushKeyboardEnhancementFlags,
    },
    execute,
    terminal::{disable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use std::io::{self, Write};

/// Switch to the alternate screen with bracketed paste, so multi-line
/// answers arrive as one paste event.
pub fn enter_tui_mode<W: Write>(writer: &mut W) -> io::Result<()> {
    execute!(writer, EnterAlternateScreen, EnableBracketedPaste)
}

/// Ask the terminal to report modified Enter (Kitty protocol).
///
/// Returns `false` on terminals without support; Shift+Enter then falls
/// back to Alt+Enter or Ctrl+J.
pub fn push_keyboard_enhancements<W: Write>(writer: &mut W) -> bool {
    execute!(
        writer,
        PushKeyboardEnhancementFlags(KeyboardEnhancementFlags::DISAMBIGUATE_ESCAPE_CODES)
    )
    .is_ok()
}

/// Restore the terminal. Errors are ignored.
pub fn leave_tui_mode<W: Write>(writer: &mut W) {
    let _ = execute!(writer, PopKeyboardEnhancementFlags);
    let _ = disable_raw_mode();
    let _ = execute!(writer, DisableBracketedPaste, LeaveAlternateScreen);

    // Some terminals only honour the Kitty reset after leaving the alternate screen
    let _ = write!(writer, "\x1b[=0u");
    let _ = writer.flush();

    let _ = execute!(writer, Show);
}

/// Restore stdout from any state, e.g. while panicking.
pub fn emergency_restore() {
    leave_tui_mode(&mut io::stdout());
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_leave_tui_mode_writes_reset_sequences() {
        let mut buffer = Vec::new();
        leave_tui_mode(&mut buffer);
        let written = String::from_utf8_lossy(&buffer);
        assert!(written.contains("\x1b[=0u"));
    }

    #[test]
    fn test_enter_then_leave_into_buffer() {
        let mut buffer = Vec::new();
        enter_tui_mode(&mut buffer).unwrap();
        assert!(push_keyboard_enhancements(&mut buffer));
        leave_tui_mode(&mut buffer);
        assert!(!buffer.is_empty());
    }
}
