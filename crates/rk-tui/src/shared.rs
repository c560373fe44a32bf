//! Shared utilities for screens: layout helpers, status hints, and popups.

use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Clear, Paragraph};

use rk_engine::GameState;

/// Create a centered rectangle as a percentage of the given area.
pub fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}

/// Key hints for the status bar.
pub fn status_hint(state: GameState, can_submit: bool) -> &'static str {
    match state {
        GameState::Menu => " ↑/↓ choose time | Enter start | 1-3 quick start | ? help | q quit",
        GameState::Playing => " type the highlighted word | Backspace undo | Ctrl+C quit",
        GameState::Riddle => " 1-9 answer | clock paused | Ctrl+C quit",
        GameState::GameOver if can_submit => " type your name | Enter save | Esc menu",
        GameState::GameOver => " Enter/r menu | q quit",
    }
}

/// Draw the rules and controls popup.
pub fn draw_help_popup(frame: &mut Frame) {
    let area = centered_rect(60, 70, frame.area());

    let help_text = vec![
        Line::from("How to Play").style(Style::default().bold()),
        Line::from(""),
        Line::from("Type each word of the theme before the clock runs out."),
        Line::from("A finished word scores points; wrong keys cost points."),
        Line::from("Too many wrong keys abandon the word with a penalty."),
        Line::from("After the last word a riddle appears and the clock stops."),
        Line::from("Answer right for bonus points and time; wrong ends the game."),
        Line::from(""),
        Line::from("Keys:"),
        Line::from("  ↑/↓ j/k     Choose round length"),
        Line::from("  Enter       Start / submit"),
        Line::from("  Backspace   Undo a typed letter"),
        Line::from("  1-9         Answer the riddle"),
        Line::from("  Esc         Back to menu after a game"),
        Line::from("  Ctrl+C      Quit"),
        Line::from(""),
        Line::from("Press any key to close"),
    ];

    let popup = Paragraph::new(help_text)
        .block(
            Block::default()
                .title(" Help ")
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Cyan)),
        )
        .style(Style::default().fg(Color::White));

    frame.render_widget(Clear, area);
    frame.render_widget(popup, area);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn centered_rect_is_inside() {
        let outer = Rect::new(0, 0, 100, 50);
        let inner = centered_rect(50, 50, outer);
        assert_eq!(inner.width, 50);
        assert_eq!(inner.height, 25);
        assert_eq!(inner.x, 25);
    }

    #[test]
    fn game_over_hint_depends_on_submission() {
        assert_ne!(
            status_hint(GameState::GameOver, true),
            status_hint(GameState::GameOver, false)
        );
    }
}
