//! Default keybindings for the application.
//!
//! Maps key combinations to commands, globally and per screen.

use crossterm::event::{KeyCode, KeyModifiers};
use std::collections::HashMap;

use super::command::Command;
use crate::app::Screen;

/// Lines moved by PageUp / PageDown on the results screen.
pub const PAGE_SCROLL_LINES: u16 = 10;

/// Represents a key combination (key code + modifiers).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct KeyCombo {
    pub code: KeyCode,
    pub modifiers: KeyModifiers,
}

impl KeyCombo {
    /// Creates a new key combo with the given code and modifiers.
    pub const fn new(code: KeyCode, modifiers: KeyModifiers) -> Self {
        Self { code, modifiers }
    }

    /// Creates a key combo with no modifiers.
    pub const fn plain(code: KeyCode) -> Self {
        Self::new(code, KeyModifiers::NONE)
    }

    /// Creates a key combo with Control modifier.
    pub const fn ctrl(code: KeyCode) -> Self {
        Self::new(code, KeyModifiers::CONTROL)
    }

    /// Creates a key combo with Shift modifier.
    pub const fn shift(code: KeyCode) -> Self {
        Self::new(code, KeyModifiers::SHIFT)
    }

    /// Creates a key combo with Alt modifier.
    pub const fn alt(code: KeyCode) -> Self {
        Self::new(code, KeyModifiers::ALT)
    }
}

/// Keybinding configuration for the application.
#[derive(Debug, Clone)]
pub struct KeybindingConfig {
    /// Global keybindings (always active)
    pub global: HashMap<KeyCombo, Command>,
    /// Keybindings per screen
    pub screen: HashMap<Screen, HashMap<KeyCombo, Command>>,
}

impl Default for KeybindingConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl KeybindingConfig {
    /// Creates a new keybinding configuration with default bindings.
    pub fn new() -> Self {
        let mut config = Self {
            global: HashMap::new(),
            screen: HashMap::new(),
        };

        config.setup_global_bindings();
        config.setup_setup_bindings();
        config.setup_interview_bindings();
        config.setup_results_bindings();

        config
    }

    fn setup_global_bindings(&mut self) {
        self.global
            .insert(KeyCombo::ctrl(KeyCode::Char('c')), Command::Quit);
    }

    fn setup_setup_bindings(&mut self) {
        let bindings = self.screen.entry(Screen::Setup).or_default();
        bindings.insert(KeyCombo::plain(KeyCode::Tab), Command::FocusNext);
        bindings.insert(KeyCombo::plain(KeyCode::BackTab), Command::FocusPrev);
        bindings.insert(KeyCombo::shift(KeyCode::BackTab), Command::FocusPrev);
        bindings.insert(KeyCombo::plain(KeyCode::Right), Command::SelectNext);
        bindings.insert(KeyCombo::plain(KeyCode::Down), Command::SelectNext);
        bindings.insert(KeyCombo::plain(KeyCode::Left), Command::SelectPrev);
        bindings.insert(KeyCombo::plain(KeyCode::Up), Command::SelectPrev);
        bindings.insert(KeyCombo::plain(KeyCode::Enter), Command::Submit);
        bindings.insert(KeyCombo::plain(KeyCode::Backspace), Command::Backspace);
    }

    fn setup_interview_bindings(&mut self) {
        let bindings = self.screen.entry(Screen::Interview).or_default();
        bindings.insert(KeyCombo::plain(KeyCode::Enter), Command::Submit);
        bindings.insert(KeyCombo::shift(KeyCode::Enter), Command::InsertNewline);
        bindings.insert(KeyCombo::alt(KeyCode::Enter), Command::InsertNewline);
        // Terminals without keyboard enhancement send Ctrl+J for a bare line feed
        bindings.insert(KeyCombo::ctrl(KeyCode::Char('j')), Command::InsertNewline);
        bindings.insert(KeyCombo::ctrl(KeyCode::Char('s')), Command::Skip);
        bindings.insert(KeyCombo::plain(KeyCode::Backspace), Command::Backspace);
    }

    fn setup_results_bindings(&mut self) {
        let bindings = self.screen.entry(Screen::Results).or_default();
        for c in ['r', 'R'] {
            bindings.insert(KeyCombo::plain(KeyCode::Char(c)), Command::Restart);
        }
        bindings.insert(KeyCombo::shift(KeyCode::Char('R')), Command::Restart);
        for c in ['p', 'e'] {
            bindings.insert(KeyCombo::plain(KeyCode::Char(c)), Command::Export);
        }
        bindings.insert(KeyCombo::plain(KeyCode::Char('q')), Command::Quit);
        bindings.insert(KeyCombo::plain(KeyCode::Up), Command::ScrollUp(1));
        bindings.insert(KeyCombo::plain(KeyCode::Char('k')), Command::ScrollUp(1));
        bindings.insert(KeyCombo::plain(KeyCode::Down), Command::ScrollDown(1));
        bindings.insert(KeyCombo::plain(KeyCode::Char('j')), Command::ScrollDown(1));
        bindings.insert(
            KeyCombo::plain(KeyCode::PageUp),
            Command::ScrollUp(PAGE_SCROLL_LINES),
        );
        bindings.insert(
            KeyCombo::plain(KeyCode::PageDown),
            Command::ScrollDown(PAGE_SCROLL_LINES),
        );
    }

    /// Looks up a global binding.
    pub fn get_global(&self, combo: &KeyCombo) -> Option<&Command> {
        self.global.get(combo)
    }

    /// Looks up a binding for the given screen.
    pub fn get_screen(&self, screen: Screen, combo: &KeyCombo) -> Option<&Command> {
        self.screen.get(&screen).and_then(|bindings| bindings.get(combo))
    }
}
