//! Typing screen: countdown, the current word, and the word list.

use std::time::Instant;

use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Gauge, Paragraph};

use rk_engine::{CharStatus, WordProgress};

use crate::app::GameApp;

/// Color for a character by typing status.
fn char_style(status: CharStatus) -> Style {
    match status {
        CharStatus::Correct => Style::default().fg(Color::Green).bold(),
        CharStatus::Incorrect => Style::default().fg(Color::White).bg(Color::Red).bold(),
        CharStatus::Cursor => Style::default()
            .fg(Color::Black)
            .bg(Color::Yellow)
            .add_modifier(Modifier::UNDERLINED),
        CharStatus::Pending => Style::default().fg(Color::DarkGray),
    }
}

/// Spans for a word with each character colored by status.
pub fn progress_spans(progress: &WordProgress) -> Vec<Span<'static>> {
    progress
        .chars
        .iter()
        .map(|c| Span::styled(format!(" {} ", c.ch), char_style(c.status)))
        .collect()
}

/// Draw the typing screen.
pub fn draw(frame: &mut Frame, app: &GameApp<'_>, area: Rect, now: Instant) {
    let snap = app.controller.snapshot();
    let Some(set) = snap.active_riddle_set else {
        return;
    };

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Timer
            Constraint::Length(5), // Current word
            Constraint::Min(3),    // Word list
            Constraint::Length(1), // Feedback
        ])
        .split(area);

    // Timer
    let max = app.controller.config().max_time.max(1);
    let ratio = f64::from(snap.time_remaining.min(max)) / f64::from(max);
    let color = match snap.time_remaining {
        0..=5 => Color::Red,
        6..=10 => Color::Yellow,
        _ => Color::Green,
    };
    let gauge = Gauge::default()
        .block(
            Block::default()
                .title(format!(" Round {} | {} ", snap.round_number, set.theme))
                .borders(Borders::ALL),
        )
        .gauge_style(Style::default().fg(color))
        .ratio(ratio)
        .label(format!("{}s", snap.time_remaining));
    frame.render_widget(gauge, chunks[0]);

    // Current word, or the word just abandoned while it flashes
    let word_block = Block::default()
        .title(format!(
            " Word {}/{} ",
            snap.current_word_index + 1,
            set.word_count()
        ))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));
    let mut lines: Vec<Line<'static>> = vec![Line::from("")];
    if let Some(flash) = app.active_flash(now) {
        lines.push(
            Line::from(vec![
                Span::styled(flash.word.clone(), Style::default().fg(Color::Red).bold()),
                Span::styled(
                    format!("  (typed \"{}\")", flash.typed),
                    Style::default().fg(Color::DarkGray),
                ),
            ])
            .alignment(Alignment::Center),
        );
    } else if let Some(progress) = snap.word_progress() {
        lines.push(Line::from(progress_spans(&progress)).alignment(Alignment::Center));
    }
    lines.push(
        Line::from(Span::styled(
            format!(
                "wrong keys {}/{}",
                snap.wrong_key_count,
                app.controller.config().max_wrong_keys_per_word
            ),
            Style::default().fg(Color::DarkGray),
        ))
        .alignment(Alignment::Center),
    );
    frame.render_widget(Paragraph::new(lines).block(word_block), chunks[1]);

    // Word list
    let items: Vec<Line<'static>> = set
        .words
        .iter()
        .enumerate()
        .map(|(i, word)| {
            let (marker, style) = match i.cmp(&snap.current_word_index) {
                std::cmp::Ordering::Less => ("  ", Style::default().fg(Color::DarkGray)),
                std::cmp::Ordering::Equal => ("> ", Style::default().fg(Color::Yellow).bold()),
                std::cmp::Ordering::Greater => ("  ", Style::default().fg(Color::White)),
            };
            Line::from(Span::styled(format!("{marker}{word}"), style))
        })
        .collect();
    let list = Paragraph::new(items).block(
        Block::default()
            .title(" Words ")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::DarkGray)),
    );
    frame.render_widget(list, chunks[2]);

    // Feedback
    if let Some(last) = &app.last_event {
        frame.render_widget(
            Paragraph::new(format!(" {last}")).style(Style::default().fg(Color::DarkGray)),
            chunks[3],
        );
    }
}
