//! Results screen: score, feedback, transcript.

use chrono::Local;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Paragraph, Wrap};
use ratatui::Frame;

use super::helpers::{centered_rect, estimate_wrapped_line_count, inner_rect, spinner};
use super::theme::{score_color, COLOR_ACCENT, COLOR_BORDER, COLOR_DIM, COLOR_ERROR};
use crate::flows::results::{LOADING_MESSAGE, LOAD_FAILED_MESSAGE};
use crate::flows::{FeedbackReport, ResultsFlow, ResultsStatus};
use crate::models::Answer;

pub fn render_results(frame: &mut Frame, area: Rect, flow: &mut ResultsFlow, tick: u64) {
    match flow.status() {
        ResultsStatus::Loading => {
            let lines = vec![
                Line::from(spinner(tick)).centered(),
                Line::from(""),
                Line::from(LOADING_MESSAGE).centered(),
            ];
            frame.render_widget(Paragraph::new(lines), centered_rect(area, 50, 3));
        }
        ResultsStatus::Failed(reason) => {
            let lines = vec![
                Line::from(Span::styled(
                    LOAD_FAILED_MESSAGE,
                    Style::default().fg(COLOR_ERROR).add_modifier(Modifier::BOLD),
                ))
                .centered(),
                Line::from(Span::styled(reason.clone(), Style::default().fg(COLOR_DIM))).centered(),
                Line::from(""),
                Line::from("Press r to start over").centered(),
            ];
            frame.render_widget(
                Paragraph::new(lines).wrap(Wrap { trim: true }),
                centered_rect(area, 60, 6),
            );
        }
        ResultsStatus::Loaded(report) => {
            let lines = report_lines(flow, report);
            let block = Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(Style::default().fg(COLOR_BORDER))
                .title(Span::styled(
                    " Interview Complete ",
                    Style::default().fg(COLOR_ACCENT).add_modifier(Modifier::BOLD),
                ));

            let inner = inner_rect(area, 1);
            let rows = estimate_wrapped_line_count(&lines, inner.width as usize);
            let max_scroll = rows.saturating_sub(inner.height as usize).min(u16::MAX as usize) as u16;
            flow.clamp_scroll(max_scroll);

            frame.render_widget(
                Paragraph::new(lines)
                    .block(block)
                    .wrap(Wrap { trim: false })
                    .scroll((flow.scroll(), 0)),
                area,
            );
        }
    }
}

fn heading(text: &str) -> Line<'static> {
    Line::from(Span::styled(
        text.to_string(),
        Style::default().fg(COLOR_ACCENT).add_modifier(Modifier::BOLD | Modifier::UNDERLINED),
    ))
}

fn report_lines(flow: &ResultsFlow, report: &FeedbackReport) -> Vec<Line<'static>> {
    let params = flow.parameters();
    let mut lines = vec![
        Line::from(vec![
            Span::styled(
                params.candidate_name().to_string(),
                Style::default().fg(COLOR_ACCENT).add_modifier(Modifier::BOLD),
            ),
            Span::styled(
                format!("  {} · {}", params.job_role(), params.difficulty().label()),
                Style::default().fg(COLOR_DIM),
            ),
        ]),
        Line::from(""),
        Line::from(vec![
            Span::raw("Overall Score  "),
            Span::styled(
                format!("{}/100", report.overall_score),
                Style::default()
                    .fg(score_color(report.band()))
                    .add_modifier(Modifier::BOLD),
            ),
        ]),
        Line::from(report.overall_feedback.clone()),
        Line::from(""),
    ];

    if let Some(questions) = &report.questions {
        lines.push(heading("Question-by-Question Feedback"));
        for item in questions {
            lines.push(Line::from(vec![
                Span::styled(
                    format!("Q{}. ", item.number),
                    Style::default().fg(COLOR_DIM),
                ),
                Span::raw(item.question.clone()),
                Span::styled(
                    format!("  {}/100", item.score),
                    Style::default().fg(score_color(item.band())),
                ),
            ]));
            lines.push(Line::from(Span::styled(
                format!("    {}", item.feedback),
                Style::default().fg(COLOR_DIM),
            )));
        }
        lines.push(Line::from(""));
    }

    lines.push(heading("Strengths"));
    lines.extend(report.strengths.iter().map(|s| Line::from(format!("  ✓ {s}"))));
    lines.push(Line::from(""));
    lines.push(heading("Areas for Improvement"));
    lines.extend(report.improvements.iter().map(|s| Line::from(format!("  → {s}"))));
    lines.push(Line::from(""));

    lines.push(heading("Your Answers"));
    for (i, answer) in flow.answers().iter().enumerate() {
        lines.extend(transcript_entry(i, answer));
    }
    lines
}

fn transcript_entry(index: usize, answer: &Answer) -> Vec<Line<'static>> {
    let when = answer
        .timestamp
        .with_timezone(&Local)
        .format("%H:%M:%S")
        .to_string();
    let answer_style = if answer.is_skipped() {
        Style::default().fg(COLOR_DIM).add_modifier(Modifier::ITALIC)
    } else {
        Style::default()
    };

    let mut lines = vec![Line::from(vec![
        Span::styled(
            format!("Q{}: ", index + 1),
            Style::default().add_modifier(Modifier::BOLD),
        ),
        Span::styled(answer.question.clone(), Style::default().add_modifier(Modifier::BOLD)),
        Span::styled(format!("  {when}"), Style::default().fg(COLOR_DIM)),
    ])];
    lines.extend(
        answer
            .answer
            .split('\n')
            .map(|l| Line::from(Span::styled(format!("    {l}"), answer_style))),
    );
    lines.push(Line::from(""));
    lines
}
