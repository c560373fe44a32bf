//! One drawing function per game state.

pub mod game_over;
pub mod menu;
pub mod playing;
pub mod riddle;

use std::time::Instant;

use ratatui::prelude::*;
use ratatui::widgets::Paragraph;

use rk_engine::GameState;

use crate::app::GameApp;

/// Draw the header line: title, state, and score.
pub fn draw_header(frame: &mut Frame, app: &GameApp<'_>, area: Rect) {
    let snap = app.controller.snapshot();
    let mut spans = vec![
        Span::styled(" Riddlekeys ", Style::default().fg(Color::Black).bg(Color::Cyan).bold()),
        Span::raw("  "),
        Span::styled(snap.state.to_string(), Style::default().fg(Color::DarkGray)),
    ];
    if snap.state != GameState::Menu {
        spans.push(Span::raw("  "));
        spans.push(Span::styled(
            format!("score {}", snap.score),
            Style::default().fg(Color::Yellow).bold(),
        ));
    }
    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

/// Draw the screen for the current state.
pub fn draw_content(frame: &mut Frame, app: &GameApp<'_>, area: Rect, now: Instant) {
    match app.state() {
        GameState::Menu => menu::draw(frame, app, area),
        GameState::Playing => playing::draw(frame, app, area, now),
        GameState::Riddle => riddle::draw(frame, app, area),
        GameState::GameOver => game_over::draw(frame, app, area),
    }
}
