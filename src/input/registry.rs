//! Command registry for dispatching keyboard input to commands.
//!
//! Priority order:
//! 1. Global bindings (Ctrl+C always quits)
//! 2. Screen bindings
//! 3. Character input on screens that take text

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::command::Command;
use super::keybindings::{KeyCombo, KeybindingConfig};
use crate::app::Screen;

/// Registry for dispatching key events to commands.
#[derive(Debug, Clone, Default)]
pub struct CommandRegistry {
    config: KeybindingConfig,
}

impl CommandRegistry {
    /// Creates a new command registry with default keybindings.
    pub fn new() -> Self {
        Self {
            config: KeybindingConfig::new(),
        }
    }

    /// Creates a command registry with a custom keybinding configuration.
    pub fn with_config(config: KeybindingConfig) -> Self {
        Self { config }
    }

    /// Dispatches a key event to a command for the given screen.
    ///
    /// Returns `None` if the key should be ignored.
    pub fn dispatch(&self, key: KeyEvent, screen: Screen) -> Option<Command> {
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            return Some(Command::Quit);
        }

        let combo = KeyCombo::new(key.code, key.modifiers);
        if let Some(cmd) = self.config.get_global(&combo) {
            return Some(cmd.clone());
        }
        if let Some(cmd) = self.config.get_screen(screen, &combo) {
            return Some(cmd.clone());
        }

        // Shifted characters arrive with SHIFT set; look them up bare as well
        if key.modifiers == KeyModifiers::SHIFT {
            if let Some(cmd) = self.config.get_screen(screen, &KeyCombo::plain(key.code)) {
                if !accepts_text(screen) {
                    return Some(cmd.clone());
                }
            }
        }

        match key.code {
            KeyCode::Char(c)
                if accepts_text(screen)
                    && !key
                        .modifiers
                        .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT | KeyModifiers::SUPER) =>
            {
                Some(Command::TypeChar(c))
            }
            _ => None,
        }
    }

    /// Dispatches bracketed paste content.
    pub fn dispatch_paste(&self, text: &str, screen: Screen) -> Option<Command> {
        (accepts_text(screen) && !text.is_empty()).then(|| Command::Paste(text.to_string()))
    }
}

fn accepts_text(screen: Screen) -> bool {
    matches!(screen, Screen::Setup | Screen::Interview)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode, modifiers: KeyModifiers) -> KeyEvent {
        KeyEvent::new(code, modifiers)
    }

    #[test]
    fn test_ctrl_c_quits_everywhere() {
        let registry = CommandRegistry::new();
        for screen in [Screen::Setup, Screen::Interview, Screen::Results] {
            assert_eq!(
                registry.dispatch(key(KeyCode::Char('c'), KeyModifiers::CONTROL), screen),
                Some(Command::Quit)
            );
        }
    }

    #[test]
    fn test_characters_are_text_on_input_screens() {
        let registry = CommandRegistry::new();
        assert_eq!(
            registry.dispatch(key(KeyCode::Char('r'), KeyModifiers::NONE), Screen::Interview),
            Some(Command::TypeChar('r'))
        );
        assert_eq!(
            registry.dispatch(key(KeyCode::Char('A'), KeyModifiers::SHIFT), Screen::Setup),
            Some(Command::TypeChar('A'))
        );
        assert_eq!(
            registry.dispatch(key(KeyCode::Char('r'), KeyModifiers::NONE), Screen::Results),
            Some(Command::Restart)
        );
    }

    #[test]
    fn test_interview_bindings() {
        let registry = CommandRegistry::new();
        assert_eq!(
            registry.dispatch(key(KeyCode::Enter, KeyModifiers::SHIFT), Screen::Interview),
            Some(Command::InsertNewline)
        );
        assert_eq!(
            registry.dispatch(key(KeyCode::Char('s'), KeyModifiers::CONTROL), Screen::Interview),
            Some(Command::Skip)
        );
        assert_eq!(
            registry.dispatch(key(KeyCode::Char('x'), KeyModifiers::ALT), Screen::Interview),
            None
        );
    }

    #[test]
    fn test_shifted_restart_on_results() {
        let registry = CommandRegistry::new();
        assert_eq!(
            registry.dispatch(key(KeyCode::Char('P'), KeyModifiers::SHIFT), Screen::Results),
            None
        );
        assert_eq!(
            registry.dispatch(key(KeyCode::Char('R'), KeyModifiers::SHIFT), Screen::Results),
            Some(Command::Restart)
        );
    }

    #[test]
    fn test_paste_only_where_text_is_accepted() {
        let registry = CommandRegistry::new();
        assert_eq!(
            registry.dispatch_paste("hello", Screen::Interview),
            Some(Command::Paste("hello".to_string()))
        );
        assert_eq!(registry.dispatch_paste("hello", Screen::Results), None);
        assert_eq!(registry.dispatch_paste("", Screen::Setup), None);
    }
}
