//! Interview screen: question, countdown, answer editor.

use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Gauge, Paragraph, Wrap};
use ratatui::Frame;

use super::helpers::{estimate_wrapped_line_count, inner_rect, spinner, truncate_string};
use super::theme::{
    COLOR_ACCENT, COLOR_BORDER, COLOR_BORDER_FOCUSED, COLOR_DIM, COLOR_ERROR, COLOR_PROGRESS,
    COLOR_TIMER_LOW,
};
use crate::flows::{format_time, SessionFlow, SessionPhase};

/// Terminal width from which the tips panel is shown beside the editor.
const TIPS_MIN_WIDTH: u16 = 100;
const TIPS_WIDTH: u16 = 34;
/// Long names are cut in the info row so the role stays visible.
const NAME_MAX_WIDTH: usize = 32;

const TIPS: [&str; 4] = [
    "Use the STAR method (Situation, Task, Action, Result) for behavioral questions",
    "Provide specific examples from your experience",
    "Think out loud to show your problem-solving process",
    "Take your time to structure your thoughts before answering",
];

pub fn submit_label(flow: &SessionFlow) -> &'static str {
    if flow.is_last_question() {
        "Finish Interview"
    } else {
        "Next Question"
    }
}

pub fn render_interview(frame: &mut Frame, area: Rect, flow: &SessionFlow, tick: u64) {
    let (main, tips) = if area.width >= TIPS_MIN_WIDTH {
        let [main, tips] =
            Layout::horizontal([Constraint::Min(40), Constraint::Length(TIPS_WIDTH)]).areas(area);
        (main, Some(tips))
    } else {
        (area, None)
    };

    let [info, progress, question, answer, notice, actions] = Layout::vertical([
        Constraint::Length(1),
        Constraint::Length(1),
        Constraint::Min(4),
        Constraint::Percentage(45),
        Constraint::Length(1),
        Constraint::Length(1),
    ])
    .areas(main);

    render_info(frame, info, flow);
    render_progress(frame, progress, flow);
    render_question(frame, question, flow);
    render_answer(frame, answer, flow);

    if let Some(message) = flow.notice() {
        frame.render_widget(
            Paragraph::new(Span::styled(message, Style::default().fg(COLOR_ERROR))),
            notice,
        );
    }

    let actions_line = match flow.phase() {
        SessionPhase::Submitting => Line::from(format!("{} Submitting answer...", spinner(tick))),
        SessionPhase::Finishing | SessionPhase::Done => {
            Line::from(format!("{} Finishing interview...", spinner(tick)))
        }
        SessionPhase::Showing => Line::from(vec![
            Span::styled("[Enter] ", Style::default().fg(COLOR_ACCENT).add_modifier(Modifier::BOLD)),
            Span::raw(submit_label(flow)),
            Span::styled("   [Ctrl+S] ", Style::default().fg(COLOR_DIM)),
            Span::styled("Skip Question", Style::default().fg(COLOR_DIM)),
            Span::styled("   [Shift+Enter] ", Style::default().fg(COLOR_DIM)),
            Span::styled("New line", Style::default().fg(COLOR_DIM)),
        ]),
    };
    frame.render_widget(Paragraph::new(actions_line), actions);

    if let Some(tips) = tips {
        render_tips(frame, tips);
    }
}

fn render_info(frame: &mut Frame, area: Rect, flow: &SessionFlow) {
    let params = flow.parameters();
    let timer_style = if flow.time_left() < 60 {
        Style::default().fg(COLOR_TIMER_LOW).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(COLOR_ACCENT).add_modifier(Modifier::BOLD)
    };
    let timer = format!("⏱ {}", format_time(flow.time_left()));

    let [left, right] =
        Layout::horizontal([Constraint::Min(10), Constraint::Length(timer.chars().count() as u16 + 1)])
            .areas(area);
    frame.render_widget(
        Paragraph::new(Line::from(vec![
            Span::styled(
                truncate_string(params.candidate_name(), NAME_MAX_WIDTH),
                Style::default().fg(COLOR_ACCENT).add_modifier(Modifier::BOLD),
            ),
            Span::styled(
                format!("  {} · {}", params.job_role(), params.difficulty().label()),
                Style::default().fg(COLOR_DIM),
            ),
        ])),
        left,
    );
    frame.render_widget(Paragraph::new(Span::styled(timer, timer_style)).right_aligned(), right);
}

fn render_progress(frame: &mut Frame, area: Rect, flow: &SessionFlow) {
    let label = format!(
        "Question {} of {}",
        (flow.current_index() + 1).min(flow.total_questions()),
        flow.total_questions()
    );
    let gauge = Gauge::default()
        .gauge_style(Style::default().fg(COLOR_PROGRESS))
        .ratio(flow.progress().clamp(0.0, 1.0))
        .label(label);
    frame.render_widget(gauge, area);
}

fn render_question(frame: &mut Frame, area: Rect, flow: &SessionFlow) {
    let text = flow
        .current_question()
        .map(|q| q.text.as_str())
        .unwrap_or_default();
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(COLOR_BORDER))
        .title(" Question ");
    frame.render_widget(
        Paragraph::new(text)
            .style(Style::default().fg(COLOR_ACCENT))
            .block(block)
            .wrap(Wrap { trim: false }),
        area,
    );
}

fn render_answer(frame: &mut Frame, area: Rect, flow: &SessionFlow) {
    let editing = flow.phase() == SessionPhase::Showing;
    let border = if editing { COLOR_BORDER_FOCUSED } else { COLOR_BORDER };
    let count = flow.draft().chars().count();

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border))
        .title(" Your Answer ")
        .title_bottom(
            Line::from(Span::styled(
                format!(" {} characters ", count),
                Style::default().fg(COLOR_DIM),
            ))
            .right_aligned(),
        );

    let mut lines: Vec<Line> = if flow.draft().is_empty() && editing {
        vec![Line::from(Span::styled(
            "Type your answer here...",
            Style::default().fg(COLOR_DIM),
        ))]
    } else {
        flow.draft().split('\n').map(|l| Line::from(l.to_string())).collect()
    };
    if editing {
        if let Some(last) = lines.last_mut() {
            if !flow.draft().is_empty() {
                last.spans.push(Span::styled("█", Style::default().fg(COLOR_ACCENT)));
            }
        }
    }

    // Keep the end of the draft in view
    let inner = inner_rect(area, 1);
    let rows = estimate_wrapped_line_count(&lines, inner.width as usize);
    let scroll = rows.saturating_sub(inner.height as usize) as u16;

    frame.render_widget(
        Paragraph::new(lines)
            .block(block)
            .wrap(Wrap { trim: false })
            .scroll((scroll, 0)),
        area,
    );
}

fn render_tips(frame: &mut Frame, area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(COLOR_BORDER))
        .title(" Interview Tips ");
    let lines: Vec<Line> = TIPS
        .iter()
        .flat_map(|tip| [Line::from(format!("• {tip}")), Line::from("")])
        .collect();
    frame.render_widget(
        Paragraph::new(lines)
            .style(Style::default().fg(COLOR_DIM))
            .block(block)
            .wrap(Wrap { trim: true }),
        area,
    );
}
