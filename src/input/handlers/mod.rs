//! Command handlers: apply a [`Command`] to the [`App`].

use crate::app::{App, Screen};

use super::command::Command;

/// Execute a command against the active view.
///
/// Commands that make no sense for the active view are ignored.
pub fn execute(app: &mut App, command: Command) {
    tracing::debug!("Executing {:?} on {:?}", command, app.screen());
    app.mark_dirty();

    match command {
        Command::Quit => app.quit(),
        Command::Noop => {}
        Command::Submit => match app.screen() {
            Screen::Setup => app.submit_setup(),
            Screen::Interview => app.submit_answer(),
            Screen::Results => {}
        },
        Command::Skip => app.skip_question(),
        Command::Restart => {
            if app.results().is_some() {
                app.restart();
            }
        }
        Command::Export => app.export_results(),
        Command::ScrollUp(lines) => {
            if let Some(flow) = app.results_mut() {
                flow.scroll_up(lines);
            }
        }
        Command::ScrollDown(lines) => {
            if let Some(flow) = app.results_mut() {
                flow.scroll_down(lines);
            }
        }
        Command::FocusNext | Command::FocusPrev | Command::SelectNext | Command::SelectPrev => {
            if let Some(flow) = app.setup_mut() {
                match command {
                    Command::FocusNext => flow.focus_next(),
                    Command::FocusPrev => flow.focus_prev(),
                    Command::SelectNext => flow.cycle_next(),
                    _ => flow.cycle_prev(),
                }
            }
        }
        Command::TypeChar(_) | Command::Paste(_) | Command::Backspace | Command::InsertNewline => {
            edit(app, command)
        }
    }
}

fn edit(app: &mut App, command: Command) {
    if let Some(flow) = app.setup_mut() {
        match command {
            Command::TypeChar(c) => flow.insert_char(c),
            Command::Paste(text) => flow.insert_str(&text),
            Command::Backspace => flow.backspace(),
            _ => {}
        }
    } else if let Some(flow) = app.session_mut() {
        match command {
            Command::TypeChar(c) => flow.insert_char(c),
            // Normalise CRLF from pasted text
            Command::Paste(text) => flow.insert_str(&text.replace("\r\n", "\n").replace('\r', "\n")),
            Command::Backspace => flow.backspace(),
            Command::InsertNewline => flow.insert_char('\n'),
            _ => {}
        }
    }
}
