//! Terminal setup, teardown, and main event loop.

use std::io;
use std::time::Instant;

use crossterm::event::{self, Event, KeyEventKind};
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::prelude::*;
use ratatui::widgets::Paragraph;

use rk_scores::ScoreEntry;

use crate::app::{GameApp, Submission};
use crate::cadence::Cadence;
use crate::screens;
use crate::shared;

/// Launch the game. Returns the scores saved during the run.
pub fn run(mut app: GameApp<'_>) -> Result<Vec<ScoreEntry>, String> {
    enable_raw_mode().map_err(|e| format!("terminal error: {e}"))?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen).map_err(|e| format!("terminal error: {e}"))?;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend).map_err(|e| format!("terminal error: {e}"))?;

    let result = run_loop(&mut terminal, &mut app);

    disable_raw_mode().ok();
    execute!(terminal.backend_mut(), LeaveAlternateScreen).ok();
    terminal.show_cursor().ok();

    result
}

/// Main event loop. Ticks the countdown once per second while typing.
fn run_loop<B: Backend>(
    terminal: &mut Terminal<B>,
    app: &mut GameApp<'_>,
) -> Result<Vec<ScoreEntry>, String> {
    let mut cadence = Cadence::new(Instant::now());
    let mut saved = Vec::new();

    loop {
        let now = Instant::now();
        if cadence.poll(app.is_playing(), now) {
            app.tick(now);
        }

        terminal
            .draw(|frame| draw(frame, app, now))
            .map_err(|e| format!("draw error: {e}"))?;

        if app.should_quit {
            return Ok(saved);
        }

        if event::poll(cadence.timeout(Instant::now())).map_err(|e| format!("event error: {e}"))? {
            let event = event::read().map_err(|e| format!("event error: {e}"))?;
            if let Event::Key(key) = event
                && key.kind == KeyEventKind::Press
            {
                app.handle_key(key, Instant::now());
                if let Some(Submission::Saved(entry)) = &app.submission
                    && saved.last() != Some(entry)
                {
                    saved.push(entry.clone());
                }
            }
        }
    }
}

/// Main draw function.
pub fn draw(frame: &mut Frame, app: &GameApp<'_>, now: Instant) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Header
            Constraint::Min(0),    // Content
            Constraint::Length(1), // Status bar
        ])
        .split(frame.area());

    screens::draw_header(frame, app, chunks[0]);
    screens::draw_content(frame, app, chunks[1], now);

    let can_submit =
        app.scores.is_some() && !matches!(app.submission, Some(Submission::Saved(_)));
    let hint = shared::status_hint(app.state(), can_submit);
    let status = Paragraph::new(hint).style(Style::default().fg(Color::Black).bg(Color::White));
    frame.render_widget(status, chunks[2]);

    if app.show_help {
        shared::draw_help_popup(frame);
    }
}

#[cfg(test)]
mod tests {
    use std::time::Instant;

    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
    use ratatui::backend::TestBackend;

    use rk_core::Catalog;
    use rk_engine::{GameConfig, SessionController};
    use rk_scores::Leaderboard;

    use super::*;

    fn render(app: &GameApp<'_>) -> String {
        let mut terminal = Terminal::new(TestBackend::new(100, 30)).unwrap();
        terminal.draw(|frame| draw(frame, app, Instant::now())).unwrap();
        let buffer = terminal.backend().buffer();
        buffer
            .content
            .chunks(buffer.area.width as usize)
            .map(|row| row.iter().map(|cell| cell.symbol()).collect::<String>())
            .collect::<Vec<_>>()
            .join("\n")
    }

    fn key(app: &mut GameApp<'_>, code: KeyCode) {
        app.handle_key(KeyEvent::new(code, KeyModifiers::NONE), Instant::now());
    }

    #[test]
    fn draws_every_screen() {
        let catalog = Catalog::builtin().unwrap();
        let controller = SessionController::with_seed(&catalog, GameConfig::default(), 3).unwrap();
        let mut app = GameApp::new(controller, Some(Box::new(Leaderboard::new())));

        let menu = render(&app);
        assert!(menu.contains("New Game"));
        assert!(menu.contains("30s"));

        key(&mut app, KeyCode::Enter);
        let playing = render(&app);
        assert!(playing.contains("Round 1"));
        assert!(playing.contains("Words"));

        let words = app.controller.session().unwrap().active().words.clone();
        for word in &words {
            for c in word.chars() {
                key(&mut app, KeyCode::Char(c));
            }
        }
        let riddle = render(&app);
        assert!(riddle.contains("Riddle"));
        assert!(riddle.contains("[1]"));

        let correct = app.controller.session().unwrap().active().correct_answer;
        let wrong = (correct + 1) % app.controller.session().unwrap().active().options.len();
        let digit = char::from_digit(wrong as u32 + 1, 10).unwrap();
        key(&mut app, KeyCode::Char(digit));
        let over = render(&app);
        assert!(over.contains("Game Over"));
        assert!(over.contains("Leaderboard"));
    }

    #[test]
    fn help_popup_overlays_menu() {
        let catalog = Catalog::builtin().unwrap();
        let controller = SessionController::with_seed(&catalog, GameConfig::default(), 3).unwrap();
        let mut app = GameApp::new(controller, None);
        key(&mut app, KeyCode::Char('?'));
        assert!(render(&app).contains("How to Play"));
    }
}
