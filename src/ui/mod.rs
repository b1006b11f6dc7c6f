//! UI rendering for the interview client
//!
//! Every screen shares a one-line header (title and connection badge) and a
//! one-line footer with key hints. The body belongs to the active flow.

mod badge;
mod helpers;
mod interview;
mod results;
mod setup;
mod theme;

pub use badge::badge_line;
pub use helpers::{estimate_wrapped_line_count, truncate_string, SPINNER_FRAMES};
pub use interview::submit_label;
pub use theme::score_color;

use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;

use crate::app::{App, Screen, View};
use theme::{COLOR_DIM, COLOR_HEADER};

// ============================================================================
// Main UI Rendering
// ============================================================================

/// Render the UI based on current screen
pub fn render(frame: &mut Frame, app: &mut App) {
    let [header, body, footer] = Layout::vertical([
        Constraint::Length(1),
        Constraint::Min(3),
        Constraint::Length(1),
    ])
    .areas(frame.area());

    render_header(frame, header, app);
    let body = helpers::inner_rect(body, 1);

    let tick = app.tick_count;
    match app.view_mut() {
        View::Setup(flow) => setup::render_setup(frame, body, flow, tick),
        View::Interview(flow) => interview::render_interview(frame, body, flow, tick),
        View::Results(flow) => results::render_results(frame, body, flow, tick),
    }

    render_footer(frame, footer, app);
}

fn render_header(frame: &mut Frame, area: Rect, app: &App) {
    let badge = badge_line(&app.monitor);
    let badge_width = badge.width() as u16;
    let [title, status] =
        Layout::horizontal([Constraint::Min(10), Constraint::Length(badge_width)]).areas(area);

    frame.render_widget(
        Paragraph::new(Line::from(vec![
            Span::styled(
                " Mock Interview",
                Style::default().fg(COLOR_HEADER).add_modifier(Modifier::BOLD),
            ),
            Span::styled(format!("  {}", app.screen().title()), Style::default().fg(COLOR_DIM)),
        ])),
        title,
    );
    frame.render_widget(Paragraph::new(badge), status);
}

/// Key hints for the footer.
pub fn keybind_hints(screen: Screen) -> &'static str {
    match screen {
        Screen::Setup => " Tab next field · ←/→ change selection · Enter start · Ctrl+C quit",
        Screen::Interview => " Enter submit · Shift+Enter new line · Ctrl+S skip · Ctrl+C quit",
        Screen::Results => " ↑/↓ scroll · p export report · r start over · q quit",
    }
}

fn render_footer(frame: &mut Frame, area: Rect, app: &App) {
    let line = match &app.notice {
        Some(notice) => Line::from(Span::styled(format!(" {notice}"), Style::default().fg(COLOR_HEADER))),
        None => Line::from(Span::styled(keybind_hints(app.screen()), Style::default().fg(COLOR_DIM))),
    };
    frame.render_widget(Paragraph::new(line), area);
}
