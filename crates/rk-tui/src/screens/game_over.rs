//! Game-over screen: final score, name entry, and the leaderboard.

use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Paragraph, Row, Table};

use crate::app::{GameApp, Submission};

/// Entries shown in the leaderboard table.
const TOP_N: usize = 10;

/// Draw the game-over screen.
pub fn draw(frame: &mut Frame, app: &GameApp<'_>, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(area);

    draw_summary(frame, app, chunks[0]);
    draw_leaderboard(frame, app, chunks[1]);
}

fn draw_summary(frame: &mut Frame, app: &GameApp<'_>, area: Rect) {
    let snap = app.controller.snapshot();
    let block = Block::default()
        .title(" Game Over ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Red));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let mut lines: Vec<Line<'static>> = vec![
        Line::from(vec![
            Span::styled("Final score: ", Style::default().fg(Color::DarkGray)),
            Span::styled(snap.score.to_string(), Style::default().fg(Color::Yellow).bold()),
        ]),
        Line::from(vec![
            Span::styled("Rounds: ", Style::default().fg(Color::DarkGray)),
            Span::raw(snap.round_number.to_string()),
        ]),
    ];
    if let Some(last) = &app.last_event {
        lines.push(Line::from(Span::styled(
            last.clone(),
            Style::default().fg(Color::DarkGray),
        )));
    }
    lines.push(Line::from(""));

    if app.scores.is_none() {
        lines.push(Line::from("No leaderboard attached."));
    } else {
        match &app.submission {
            Some(Submission::Saved(entry)) => {
                lines.push(Line::from(Span::styled(
                    format!("Saved: {entry}"),
                    Style::default().fg(Color::Green),
                )));
            }
            other => {
                lines.push(Line::from(vec![
                    Span::styled("Name: ", Style::default().fg(Color::DarkGray)),
                    Span::styled(
                        format!("{}_", app.name_input),
                        Style::default().fg(Color::White).bold(),
                    ),
                ]));
                if let Some(Submission::Failed(reason)) = other {
                    lines.push(Line::from(Span::styled(
                        reason.clone(),
                        Style::default().fg(Color::Red),
                    )));
                }
            }
        }
        if let Some(best) = app.personal_best() {
            lines.push(Line::from(Span::styled(
                format!("Personal best: {best}"),
                Style::default().fg(Color::Cyan),
            )));
        }
    }

    frame.render_widget(Paragraph::new(lines), inner);
}

fn draw_leaderboard(frame: &mut Frame, app: &GameApp<'_>, area: Rect) {
    let rows: Vec<Row<'static>> = app
        .top_scores(TOP_N)
        .into_iter()
        .enumerate()
        .map(|(i, entry)| {
            Row::new(vec![
                format!("{}", i + 1),
                entry.name,
                entry.score.to_string(),
                entry.recorded_at.format("%Y-%m-%d").to_string(),
            ])
        })
        .collect();

    let table = Table::new(
        rows,
        [
            Constraint::Length(4),
            Constraint::Min(8),
            Constraint::Length(6),
            Constraint::Length(10),
        ],
    )
    .header(
        Row::new(vec!["#", "Name", "Score", "Date"])
            .style(Style::default().fg(Color::Yellow).bold()),
    )
    .block(
        Block::default()
            .title(" Leaderboard ")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Cyan)),
    );
    frame.render_widget(table, area);
}
