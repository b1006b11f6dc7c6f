//! Connection badge shown in the header of every screen.

use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};

use super::theme::{COLOR_CHECKING, COLOR_CONNECTED, COLOR_DIM, COLOR_DISCONNECTED};
use crate::monitor::{ConnectionMonitor, ConnectionStatus};

pub fn badge_line(monitor: &ConnectionMonitor) -> Line<'static> {
    let (dot, color) = match monitor.status() {
        ConnectionStatus::Checking => ("◌", COLOR_CHECKING),
        ConnectionStatus::Connected => ("●", COLOR_CONNECTED),
        ConnectionStatus::Disconnected => ("●", COLOR_DISCONNECTED),
    };

    let mut spans = vec![
        Span::styled(format!("{dot} "), Style::default().fg(color)),
        Span::styled(
            monitor.status().label(),
            Style::default().fg(color).add_modifier(Modifier::BOLD),
        ),
    ];
    if let Some(at) = monitor.last_checked_label() {
        spans.push(Span::styled(
            format!("  last check {at}"),
            Style::default().fg(COLOR_DIM),
        ));
    }
    Line::from(spans)
}
