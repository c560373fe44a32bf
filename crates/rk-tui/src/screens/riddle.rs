//! Riddle screen: the question and its numbered options.

use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};

use crate::app::GameApp;

/// Draw the riddle screen.
pub fn draw(frame: &mut Frame, app: &GameApp<'_>, area: Rect) {
    let snap = app.controller.snapshot();
    let Some(set) = snap.active_riddle_set else {
        return;
    };

    let block = Block::default()
        .title(format!(" Riddle | {} ", set.theme))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Magenta));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let mut lines: Vec<Line<'static>> = vec![
        Line::from(Span::styled(
            set.question.clone(),
            Style::default().fg(Color::White).bold(),
        )),
        Line::from(""),
    ];
    for (i, option) in set.options.iter().enumerate() {
        lines.push(Line::from(vec![
            Span::styled(format!(" [{}] ", i + 1), Style::default().fg(Color::Yellow).bold()),
            Span::raw(option.clone()),
        ]));
    }
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        format!("Clock paused at {}s", snap.time_remaining),
        Style::default().fg(Color::DarkGray),
    )));

    frame.render_widget(Paragraph::new(lines).wrap(Wrap { trim: false }), inner);
}
