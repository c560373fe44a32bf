//! Start menu: pick a round length.

use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};

use rk_engine::ALLOWED_INITIAL_TIMES;

use crate::app::GameApp;
use crate::shared::centered_rect;

/// Draw the start menu.
pub fn draw(frame: &mut Frame, app: &GameApp<'_>, area: Rect) {
    let area = centered_rect(60, 80, area);
    let block = Block::default()
        .title(" New Game ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    if inner.height < 4 || inner.width < 20 {
        return;
    }

    let config = app.controller.config();
    let mut lines: Vec<Line<'static>> = vec![
        Line::from(Span::styled(
            "Type the words. Solve the riddle. Beat the clock.",
            Style::default().fg(Color::White).bold(),
        )),
        Line::from(""),
        Line::from(Span::styled(
            "Round length:",
            Style::default().fg(Color::DarkGray),
        )),
    ];

    let options: Vec<Span<'static>> = ALLOWED_INITIAL_TIMES
        .iter()
        .enumerate()
        .flat_map(|(i, secs)| {
            let style = if i == app.menu_choice {
                Style::default().fg(Color::Black).bg(Color::Yellow).bold()
            } else {
                Style::default().fg(Color::White)
            };
            vec![Span::styled(format!(" [{}] {secs}s ", i + 1), style), Span::raw(" ")]
        })
        .collect();
    lines.push(Line::from(options));
    lines.push(Line::from(""));

    lines.push(Line::from(vec![
        Span::styled("Word: ", Style::default().fg(Color::DarkGray)),
        Span::styled(
            format!("+{}", config.points_per_word),
            Style::default().fg(Color::Green),
        ),
        Span::styled("  Riddle: ", Style::default().fg(Color::DarkGray)),
        Span::styled(
            format!("+{} and +{}s", config.points_per_riddle, config.bonus_time_on_correct_riddle),
            Style::default().fg(Color::Green),
        ),
    ]));
    lines.push(Line::from(vec![
        Span::styled("Wrong key: ", Style::default().fg(Color::DarkGray)),
        Span::styled(
            format!("-{}", config.penalty_per_wrong_key),
            Style::default().fg(Color::Red),
        ),
        Span::styled("  Abandoned word: ", Style::default().fg(Color::DarkGray)),
        Span::styled(
            format!(
                "-{} after {} misses",
                config.penalty_per_wrong_word, config.max_wrong_keys_per_word
            ),
            Style::default().fg(Color::Red),
        ),
    ]));
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        format!("{} riddle sets loaded", app.controller.catalog().len()),
        Style::default().fg(Color::DarkGray),
    )));
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        "Press Enter to start!",
        Style::default().fg(Color::Cyan).bold(),
    )));

    frame.render_widget(Paragraph::new(lines).wrap(Wrap { trim: false }), inner);
}
