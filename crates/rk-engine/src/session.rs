//! Game session state machine.
//!
//! `SessionController` owns the session and processes one event at a time:
//! keystrokes, backspaces, riddle answers, and clock ticks. Each event has
//! its own transition function; events that do not apply to the current
//! state are ignored. Feedback for sound and animation is queued as
//! [`GameEvent`]s, and [`Snapshot`]s describe the state for renderers.

use std::collections::BTreeSet;
use std::fmt;

use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, trace};

use rk_core::{Catalog, RiddleId, RiddleSet, is_typable};

use crate::clock::{RoundClock, Tick};
use crate::config::{ALLOWED_INITIAL_TIMES, GameConfig};
use crate::error::{EngineError, EngineResult};
use crate::event::GameEvent;
use crate::progress::next_target;
use crate::score::ScoreLedger;
use crate::selector::{pick_initial, pick_next};
use crate::snapshot::Snapshot;

/// Top-level state of the game.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum GameState {
    /// No session; waiting for the player to pick a round length.
    #[default]
    Menu,
    /// Typing words against the clock.
    Playing,
    /// Answering the riddle for the current set.
    Riddle,
    /// The session has ended.
    GameOver,
}

impl fmt::Display for GameState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            GameState::Menu => "menu",
            GameState::Playing => "playing",
            GameState::Riddle => "riddle",
            GameState::GameOver => "game over",
        };
        f.write_str(name)
    }
}

/// An external event fed to [`SessionController::handle`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Input {
    /// Start a session with the given countdown.
    Start(u32),
    /// A character key.
    Key(char),
    /// The backspace key.
    Backspace,
    /// A riddle option, zero-based.
    Answer(usize),
    /// One second of the countdown.
    Tick,
    /// Leave the game-over screen.
    Reset,
}

/// The mutable state of one game, from start until it is discarded.
#[derive(Debug, Clone)]
pub struct Session<'c> {
    active: &'c RiddleSet,
    used: BTreeSet<RiddleId>,
    score: ScoreLedger,
    clock: RoundClock,
    round: u32,
    word_index: usize,
    typed: String,
    wrong_keys: u32,
}

impl<'c> Session<'c> {
    fn new(first: &'c RiddleSet, clock: RoundClock) -> Self {
        Self {
            active: first,
            used: BTreeSet::from([first.id]),
            score: ScoreLedger::new(),
            clock,
            round: 1,
            word_index: 0,
            typed: String::new(),
            wrong_keys: 0,
        }
    }

    /// The riddle set being played.
    pub fn active(&self) -> &'c RiddleSet {
        self.active
    }

    /// Riddle sets presented so far, including the active one.
    pub fn used_ids(&self) -> &BTreeSet<RiddleId> {
        &self.used
    }

    /// Current score.
    pub fn score(&self) -> u32 {
        self.score.value()
    }

    /// Seconds left.
    pub fn time_remaining(&self) -> u32 {
        self.clock.remaining()
    }

    /// The countdown clock.
    pub fn clock(&self) -> &RoundClock {
        &self.clock
    }

    /// Round number, starting at 1.
    pub fn round_number(&self) -> u32 {
        self.round
    }

    /// Index of the current word in the active set.
    pub fn current_word_index(&self) -> usize {
        self.word_index
    }

    /// The word being typed.
    pub fn current_word(&self) -> &'c str {
        self.active.word(self.word_index).unwrap_or_default()
    }

    /// Characters typed for the current word, including mismatches.
    pub fn typed(&self) -> &str {
        &self.typed
    }

    /// Wrong keystrokes on the current word.
    pub fn wrong_key_count(&self) -> u32 {
        self.wrong_keys
    }

    fn begin_word(&mut self, index: usize) {
        self.word_index = index;
        self.typed.clear();
        self.wrong_keys = 0;
    }
}

/// Drives a game session from input events.
pub struct SessionController<'c, R: Rng = StdRng> {
    catalog: &'c Catalog,
    config: GameConfig,
    rng: R,
    state: GameState,
    session: Option<Session<'c>>,
    events: Vec<GameEvent>,
}

impl<'c> SessionController<'c, StdRng> {
    /// Create a controller with a seeded RNG for reproducible riddle order.
    pub fn with_seed(catalog: &'c Catalog, config: GameConfig, seed: u64) -> EngineResult<Self> {
        Self::new(catalog, config, StdRng::seed_from_u64(seed))
    }
}

impl<'c, R: Rng> SessionController<'c, R> {
    /// Create a controller in the menu state.
    pub fn new(catalog: &'c Catalog, config: GameConfig, rng: R) -> EngineResult<Self> {
        config.validate()?;
        if catalog.is_empty() {
            return Err(EngineError::EmptyCatalog);
        }
        Ok(Self {
            catalog,
            config,
            rng,
            state: GameState::Menu,
            session: None,
            events: Vec::new(),
        })
    }

    /// Current state.
    pub fn state(&self) -> GameState {
        self.state
    }

    /// The rules this controller plays by.
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// The catalog riddle sets are drawn from.
    pub fn catalog(&self) -> &'c Catalog {
        self.catalog
    }

    /// The session, if one has been started and not yet discarded.
    pub fn session(&self) -> Option<&Session<'c>> {
        self.session.as_ref()
    }

    /// Current score, or 0 without a session.
    pub fn score(&self) -> u32 {
        self.session.as_ref().map_or(0, Session::score)
    }

    /// Take the feedback events queued since the last call.
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }

    /// Describe the current state for a renderer.
    pub fn snapshot(&self) -> Snapshot<'_> {
        match &self.session {
            Some(s) => Snapshot {
                state: self.state,
                score: s.score.value(),
                time_remaining: s.clock.remaining(),
                round_number: s.round,
                current_word_index: s.word_index,
                typed_buffer: &s.typed,
                wrong_key_count: s.wrong_keys,
                active_riddle_set: Some(s.active),
            },
            None => Snapshot {
                state: self.state,
                score: 0,
                time_remaining: self.config.initial_time,
                round_number: 0,
                current_word_index: 0,
                typed_buffer: "",
                wrong_key_count: 0,
                active_riddle_set: None,
            },
        }
    }

    /// Process one input and return the resulting snapshot.
    pub fn handle(&mut self, input: Input) -> Snapshot<'_> {
        match input {
            Input::Start(duration) => self.start(duration),
            Input::Key(ch) => self.submit_key(ch),
            Input::Backspace => self.submit_backspace(),
            Input::Answer(index) => self.answer_riddle(index),
            Input::Tick => self.tick(),
            Input::Reset => self.reset(),
        }
        self.snapshot()
    }

    /// Start a session with the configured initial time.
    pub fn start_default(&mut self) {
        self.start(self.config.initial_time);
    }

    /// `Menu → Playing`: start a fresh session with a random first riddle set.
    ///
    /// `duration` must be one of [`ALLOWED_INITIAL_TIMES`]; other lengths
    /// are ignored. It is clamped to the configured ceiling.
    pub fn start(&mut self, duration: u32) {
        if self.state != GameState::Menu {
            trace!(state = %self.state, "start ignored");
            return;
        }
        if !ALLOWED_INITIAL_TIMES.contains(&duration) {
            trace!(duration, "unsupported round length ignored");
            return;
        }
        let Some(first) = pick_initial(self.catalog, &mut self.rng) else {
            return;
        };

        let mut clock = RoundClock::new(duration, self.config.max_time);
        clock.resume();
        let session = Session::new(first, clock);

        info!(time = clock.remaining(), riddle = %first.id, theme = %first.theme, "session started");
        self.events.push(GameEvent::SessionStarted {
            time: clock.remaining(),
            riddle: first.id,
        });
        self.session = Some(session);
        self.state = GameState::Playing;
    }

    /// Advance the countdown by one second. Ends the game at zero.
    pub fn tick(&mut self) {
        if self.state != GameState::Playing {
            trace!(state = %self.state, "tick ignored");
            return;
        }
        let Some(session) = self.session.as_mut() else {
            return;
        };

        let expired = match session.clock.tick() {
            Tick::Continue => session.clock.is_expired(),
            Tick::Expired => true,
            Tick::Suspended => false,
        };
        if expired {
            self.end_game(Some(GameEvent::TimeExpired));
        }
    }

    /// Type one character against the current word.
    ///
    /// Only letters and space are accepted. A mismatched character still
    /// occupies a buffer slot until it is backspaced.
    pub fn submit_key(&mut self, ch: char) {
        if self.state != GameState::Playing {
            trace!(state = %self.state, %ch, "key ignored");
            return;
        }
        if !is_typable(ch) {
            trace!(?ch, "untypable key ignored");
            return;
        }
        let Some(session) = self.session.as_mut() else {
            return;
        };

        let word = session.current_word();
        let Some(expected) = next_target(word, &session.typed) else {
            trace!(word, "word already full, key ignored");
            return;
        };
        session.typed.push(ch);

        if ch == expected {
            self.events.push(GameEvent::KeyMatched { ch });
            if session.typed.chars().count() == word.chars().count() {
                let delta = session.score.award(self.config.points_per_word);
                debug!(word, score = session.score.value(), "word completed");
                self.events.push(GameEvent::WordCompleted {
                    word: word.to_string(),
                    delta,
                });
                self.advance_word();
            }
            return;
        }

        let delta = session.score.deduct(self.config.penalty_per_wrong_key);
        session.wrong_keys += 1;
        self.events.push(GameEvent::KeyMismatched {
            ch,
            expected,
            wrong_keys: session.wrong_keys,
            delta,
        });

        if session.wrong_keys >= self.config.max_wrong_keys_per_word {
            let delta = session.score.deduct(self.config.penalty_per_wrong_word);
            debug!(word, typed = %session.typed, score = session.score.value(), "word abandoned");
            self.events.push(GameEvent::WordAbandoned {
                word: word.to_string(),
                typed: session.typed.clone(),
                delta,
            });
            self.advance_word();
        }
    }

    /// Remove the last typed character and forgive one wrong keystroke.
    pub fn submit_backspace(&mut self) {
        if self.state != GameState::Playing {
            trace!(state = %self.state, "backspace ignored");
            return;
        }
        let Some(session) = self.session.as_mut() else {
            return;
        };
        session.typed.pop();
        session.wrong_keys = session.wrong_keys.saturating_sub(1);
    }

    /// Answer the riddle with a zero-based option index.
    ///
    /// A correct answer moves on to an unused riddle set with bonus time, or
    /// ends the game when none remain. A wrong answer ends the game. An
    /// index outside the options is ignored.
    pub fn answer_riddle(&mut self, index: usize) {
        if self.state != GameState::Riddle {
            trace!(state = %self.state, index, "answer ignored");
            return;
        }
        let Some(session) = self.session.as_mut() else {
            return;
        };
        if index >= session.active.options.len() {
            trace!(index, "answer out of range ignored");
            return;
        }

        if !session.active.is_correct(index) {
            debug!(riddle = %session.active.id, index, "riddle answered wrong");
            self.events.push(GameEvent::RiddleAnswered {
                correct: false,
                delta: 0,
            });
            self.end_game(None);
            return;
        }

        let delta = session.score.award(self.config.points_per_riddle);
        debug!(riddle = %session.active.id, score = session.score.value(), "riddle answered correctly");
        self.events.push(GameEvent::RiddleAnswered {
            correct: true,
            delta,
        });

        match pick_next(self.catalog, &session.used, &mut self.rng) {
            Some(next) => {
                session.used.insert(next.id);
                session.active = next;
                session.round += 1;
                session.begin_word(0);
                let bonus = session
                    .clock
                    .add_bonus(self.config.bonus_time_on_correct_riddle, self.config.max_time);
                session.clock.resume();

                info!(round = session.round, riddle = %next.id, theme = %next.theme, bonus, "round started");
                self.events.push(GameEvent::RoundStarted {
                    round: session.round,
                    riddle: next.id,
                    bonus,
                });
                self.state = GameState::Playing;
            }
            None => self.end_game(Some(GameEvent::CatalogExhausted)),
        }
    }

    /// `GameOver → Menu`: discard the finished session.
    pub fn reset(&mut self) {
        if self.state != GameState::GameOver {
            trace!(state = %self.state, "reset ignored");
            return;
        }
        self.session = None;
        self.state = GameState::Menu;
        self.events.push(GameEvent::ReturnedToMenu);
    }

    /// Move past the current word, to the next one or to the riddle.
    fn advance_word(&mut self) {
        let Some(session) = self.session.as_mut() else {
            return;
        };
        let next = session.word_index + 1;
        if next < session.active.words.len() {
            session.begin_word(next);
            return;
        }

        session.clock.suspend();
        session.typed.clear();
        session.wrong_keys = 0;
        debug!(riddle = %session.active.id, "riddle presented");
        self.events.push(GameEvent::RiddlePresented {
            riddle: session.active.id,
        });
        self.state = GameState::Riddle;
    }

    fn end_game(&mut self, cause: Option<GameEvent>) {
        let score = match self.session.as_mut() {
            Some(session) => {
                session.clock.suspend();
                session.score.value()
            }
            None => 0,
        };
        if let Some(cause) = cause {
            self.events.push(cause);
        }
        info!(score, "game over");
        self.events.push(GameEvent::GameOver { score });
        self.state = GameState::GameOver;
    }
}
