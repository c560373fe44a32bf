//! Game session engine for Riddlekeys.
//!
//! The player types the words of a themed riddle set against a countdown,
//! then answers a multiple-choice riddle. Correct answers add points and
//! bonus time and move on to an unused set; a wrong answer, an empty clock,
//! or running out of riddle sets ends the game.
//!
//! [`SessionController`] is the single state machine driving a session. It
//! consumes keystrokes, riddle answers, and clock ticks, and exposes a
//! [`Snapshot`] for renderers plus a queue of [`GameEvent`]s for sound and
//! animation. Scoring and timing rules come from an injected [`GameConfig`],
//! and riddle selection uses an injectable random number generator.

pub mod clock;
pub mod config;
pub mod error;
pub mod event;
pub mod progress;
pub mod score;
pub mod selector;
pub mod session;
pub mod snapshot;

pub use clock::{RoundClock, Tick};
pub use config::{ALLOWED_INITIAL_TIMES, GameConfig};
pub use error::{EngineError, EngineResult};
pub use event::GameEvent;
pub use progress::{CharProgress, CharStatus, WordProgress, next_target, word_progress};
pub use score::ScoreLedger;
pub use session::{GameState, Input, Session, SessionController};
pub use snapshot::Snapshot;
