//! Application state: the session controller plus everything the screens
//! need that is not a game rule.

use std::time::{Duration, Instant};

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use rk_engine::{ALLOWED_INITIAL_TIMES, GameEvent, GameState, SessionController};
use rk_scores::{LeaderboardStore, MAX_NAME_LEN, ScoreEntry};

/// How long an abandoned word stays on screen.
pub const ABANDON_FLASH: Duration = Duration::from_millis(450);

/// A word that was just abandoned, shown briefly after the engine moved on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AbandonFlash {
    /// The target word.
    pub word: String,
    /// What the player had typed.
    pub typed: String,
    /// When the flash ends.
    pub until: Instant,
}

/// Outcome of submitting a score on the game-over screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Submission {
    /// The score was recorded.
    Saved(ScoreEntry),
    /// The leaderboard refused the score; the player may try again.
    Failed(String),
}

/// Main application state for the terminal game.
pub struct GameApp<'c> {
    /// The game engine.
    pub controller: SessionController<'c>,
    /// Leaderboard to submit finished games to, if any.
    pub scores: Option<Box<dyn LeaderboardStore>>,
    /// Index into [`ALLOWED_INITIAL_TIMES`] selected on the menu.
    pub menu_choice: usize,
    /// Name being typed on the game-over screen.
    pub name_input: String,
    /// Result of the last score submission for this game.
    pub submission: Option<Submission>,
    /// Abandoned word currently flashing, if any.
    pub flash: Option<AbandonFlash>,
    /// Short description of the last thing that happened.
    pub last_event: Option<String>,
    /// Whether the help popup is open.
    pub show_help: bool,
    /// Whether the app should quit.
    pub should_quit: bool,
}

impl<'c> GameApp<'c> {
    /// Create the app on the menu screen.
    pub fn new(
        controller: SessionController<'c>,
        scores: Option<Box<dyn LeaderboardStore>>,
    ) -> Self {
        let menu_choice = ALLOWED_INITIAL_TIMES
            .iter()
            .position(|t| *t == controller.config().initial_time)
            .unwrap_or(0);
        Self {
            controller,
            scores,
            menu_choice,
            name_input: String::new(),
            submission: None,
            flash: None,
            last_event: None,
            show_help: false,
            should_quit: false,
        }
    }

    /// Current game state.
    pub fn state(&self) -> GameState {
        self.controller.state()
    }

    /// Whether the countdown should be running.
    pub fn is_playing(&self) -> bool {
        self.state() == GameState::Playing
    }

    /// Round length selected on the menu.
    pub fn selected_time(&self) -> u32 {
        ALLOWED_INITIAL_TIMES[self.menu_choice.min(ALLOWED_INITIAL_TIMES.len() - 1)]
    }

    /// The abandoned word to show at `now`, if its flash has not ended.
    pub fn active_flash(&self, now: Instant) -> Option<&AbandonFlash> {
        self.flash.as_ref().filter(|f| now < f.until)
    }

    /// Advance the countdown by one second.
    pub fn tick(&mut self, now: Instant) {
        self.controller.tick();
        self.absorb_events(now);
    }

    /// Handle a key press.
    pub fn handle_key(&mut self, key: KeyEvent, now: Instant) {
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            self.should_quit = true;
            return;
        }

        if self.show_help {
            self.show_help = false;
            return;
        }

        match self.state() {
            GameState::Menu => self.handle_menu_key(key),
            GameState::Playing => self.handle_typing_key(key, now),
            GameState::Riddle => self.handle_riddle_key(key, now),
            GameState::GameOver => self.handle_game_over_key(key),
        }
        self.absorb_events(now);
    }

    fn handle_menu_key(&mut self, key: KeyEvent) {
        let last = ALLOWED_INITIAL_TIMES.len() - 1;
        match key.code {
            KeyCode::Esc | KeyCode::Char('q') => self.should_quit = true,
            KeyCode::Char('?') => self.show_help = true,
            KeyCode::Up | KeyCode::Left | KeyCode::Char('k') => {
                self.menu_choice = self.menu_choice.saturating_sub(1);
            }
            KeyCode::Down | KeyCode::Right | KeyCode::Char('j') => {
                self.menu_choice = (self.menu_choice + 1).min(last);
            }
            KeyCode::Char(c) => {
                if let Some(idx) = option_index(c).filter(|i| *i <= last) {
                    self.menu_choice = idx;
                    self.start();
                }
            }
            KeyCode::Enter => self.start(),
            _ => {}
        }
    }

    fn start(&mut self) {
        self.flash = None;
        self.controller.start(self.selected_time());
    }

    fn handle_typing_key(&mut self, key: KeyEvent, now: Instant) {
        // input waits until the abandoned word has been shown
        if self.active_flash(now).is_some() {
            return;
        }
        match key.code {
            KeyCode::Char(c) => self.controller.submit_key(c),
            KeyCode::Backspace => self.controller.submit_backspace(),
            _ => {}
        }
    }

    fn handle_riddle_key(&mut self, key: KeyEvent, now: Instant) {
        // an answer typed during the flash belongs to the abandoned word
        if self.active_flash(now).is_some() {
            return;
        }
        if let KeyCode::Char(c) = key.code
            && let Some(idx) = option_index(c)
        {
            self.controller.answer_riddle(idx);
        }
    }

    fn handle_game_over_key(&mut self, key: KeyEvent) {
        let can_submit = self.scores.is_some()
            && !matches!(self.submission, Some(Submission::Saved(_)));

        match key.code {
            KeyCode::Esc => self.reset(),
            KeyCode::Enter if can_submit => self.submit_score(),
            KeyCode::Enter => self.reset(),
            KeyCode::Backspace if can_submit => {
                self.name_input.pop();
            }
            KeyCode::Char(c) if can_submit => {
                if self.name_input.chars().count() < MAX_NAME_LEN && !c.is_control() {
                    self.name_input.push(c);
                }
            }
            KeyCode::Char('r') => self.reset(),
            KeyCode::Char('q') => self.should_quit = true,
            _ => {}
        }
    }

    /// Submit the final score under the typed name.
    pub fn submit_score(&mut self) {
        if self.state() != GameState::GameOver {
            return;
        }
        let score = self.controller.score();
        let Some(store) = self.scores.as_mut() else {
            return;
        };
        self.submission = Some(match store.submit_score(&self.name_input, score) {
            Ok(entry) => Submission::Saved(entry),
            Err(e) => {
                tracing::warn!(error = %e, "score submission failed");
                Submission::Failed(e.to_string())
            }
        });
    }

    /// Top leaderboard entries, if a leaderboard is attached.
    pub fn top_scores(&self, n: usize) -> Vec<ScoreEntry> {
        self.scores.as_ref().map(|s| s.top(n)).unwrap_or_default()
    }

    /// Best recorded score for the typed name.
    pub fn personal_best(&self) -> Option<u32> {
        let name = self.name_input.trim();
        if name.is_empty() {
            return None;
        }
        self.scores.as_ref().and_then(|s| s.best_for(name))
    }

    fn reset(&mut self) {
        self.controller.reset();
        self.name_input.clear();
        self.submission = None;
        self.flash = None;
    }

    /// Apply engine feedback to presentation state.
    fn absorb_events(&mut self, now: Instant) {
        for event in self.controller.drain_events() {
            if let GameEvent::WordAbandoned { word, typed, .. } = &event {
                self.flash = Some(AbandonFlash {
                    word: word.clone(),
                    typed: typed.clone(),
                    until: now + ABANDON_FLASH,
                });
            }
            if !matches!(event, GameEvent::KeyMatched { .. }) {
                self.last_event = Some(event.to_string());
            }
        }
    }
}

/// Zero-based index for a `1`-`9` key.
fn option_index(c: char) -> Option<usize> {
    c.to_digit(10).and_then(|d| (d as usize).checked_sub(1))
}
