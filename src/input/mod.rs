//! Input handling module for keyboard and command processing.
//!
//! All input is:
//!
//! 1. Translated to a [`Command`] by the [`CommandRegistry`]
//! 2. Applied to the [`App`](crate::app::App) by [`handlers::execute`]
//!
//! ```text
//! KeyEvent -> CommandRegistry::dispatch() -> Command -> execute -> App mutation
//! ```

pub mod command;
pub mod handlers;
pub mod keybindings;
pub mod registry;

pub use command::Command;
pub use handlers::execute;
pub use keybindings::{KeyCombo, KeybindingConfig};
pub use registry::CommandRegistry;

use crossterm::event::{Event, KeyEventKind};

use crate::app::App;

/// Route one terminal event to the app. Returns `true` if it was consumed.
pub fn handle_event(app: &mut App, registry: &CommandRegistry, event: Event) -> bool {
    let command = match event {
        Event::Key(key) if key.kind == KeyEventKind::Press => registry.dispatch(key, app.screen()),
        Event::Paste(text) => registry.dispatch_paste(&text, app.screen()),
        Event::Resize(_, _) => {
            app.mark_dirty();
            return true;
        }
        _ => None,
    };

    match command {
        Some(command) => {
            execute(app, command);
            true
        }
        None => false,
    }
}
