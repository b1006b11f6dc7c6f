//! Setup screen: candidate name, role and difficulty.

use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Paragraph, Wrap};
use ratatui::Frame;

use super::helpers::{centered_rect, spinner};
use super::theme::{COLOR_ACCENT, COLOR_BORDER, COLOR_BORDER_FOCUSED, COLOR_DIM, COLOR_ERROR};
use crate::flows::{SetupField, SetupFlow};
use crate::models::Difficulty;

const FORM_WIDTH: u16 = 64;
const FORM_HEIGHT: u16 = 19;

pub fn render_setup(frame: &mut Frame, area: Rect, flow: &SetupFlow, tick: u64) {
    let form = centered_rect(area, FORM_WIDTH, FORM_HEIGHT);
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(COLOR_BORDER))
        .title(Span::styled(
            " Start Your Mock Interview ",
            Style::default().fg(COLOR_ACCENT).add_modifier(Modifier::BOLD),
        ));
    let inner = block.inner(form);
    frame.render_widget(block, form);

    let [name, role, difficulty, _, message, submit] = Layout::vertical([
        Constraint::Length(3),
        Constraint::Length(3),
        Constraint::Length(3),
        Constraint::Length(1),
        Constraint::Length(3),
        Constraint::Length(3),
    ])
    .areas(inner);

    let name_text = if flow.candidate_name().is_empty() && flow.focus() != SetupField::CandidateName {
        Span::styled("Enter your name", Style::default().fg(COLOR_DIM))
    } else {
        Span::raw(flow.candidate_name().to_string())
    };
    render_field(frame, name, "Candidate Name *", Line::from(name_text), flow.focus() == SetupField::CandidateName);
    if flow.focus() == SetupField::CandidateName && !flow.is_busy() {
        let width = unicode_width::UnicodeWidthStr::width(flow.candidate_name()) as u16;
        let x = (name.x + 1 + width).min(name.right().saturating_sub(2));
        frame.set_cursor_position((x, name.y + 1));
    }

    let role_text = match flow.job_role() {
        Some(role) => Span::raw(role.as_str()),
        None => Span::styled("Select a job role", Style::default().fg(COLOR_DIM)),
    };
    render_field(
        frame,
        role,
        "Job Role *",
        selector_line(role_text, flow.focus() == SetupField::JobRole),
        flow.focus() == SetupField::JobRole,
    );

    let difficulty_spans: Vec<Span> = Difficulty::ALL
        .iter()
        .flat_map(|level| {
            let style = if *level == flow.difficulty() {
                Style::default().fg(COLOR_ACCENT).add_modifier(Modifier::BOLD | Modifier::REVERSED)
            } else {
                Style::default().fg(COLOR_DIM)
            };
            [Span::styled(format!(" {} ", level.label()), style), Span::raw(" ")]
        })
        .collect();
    render_field(
        frame,
        difficulty,
        "Difficulty",
        Line::from(difficulty_spans),
        flow.focus() == SetupField::Difficulty,
    );

    if let Some(error) = flow.error() {
        frame.render_widget(
            Paragraph::new(error)
                .style(Style::default().fg(COLOR_ERROR))
                .wrap(Wrap { trim: true }),
            message,
        );
    }

    let button = if flow.is_busy() {
        Line::from(format!("{} Starting Interview...", spinner(tick)))
    } else {
        Line::from(Span::styled(
            "[ Enter ] Start Interview",
            Style::default().fg(COLOR_ACCENT).add_modifier(Modifier::BOLD),
        ))
    };
    frame.render_widget(Paragraph::new(button).centered(), submit);
}

fn render_field(frame: &mut Frame, area: Rect, title: &str, content: Line, focused: bool) {
    let border = if focused { COLOR_BORDER_FOCUSED } else { COLOR_BORDER };
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border))
        .title(Span::styled(format!(" {title} "), Style::default().fg(border)));
    frame.render_widget(Paragraph::new(content).block(block), area);
}

fn selector_line(value: Span<'static>, focused: bool) -> Line<'static> {
    if focused {
        Line::from(vec![
            Span::styled("◀ ", Style::default().fg(COLOR_DIM)),
            value,
            Span::styled(" ▶", Style::default().fg(COLOR_DIM)),
        ])
    } else {
        Line::from(value)
    }
}
