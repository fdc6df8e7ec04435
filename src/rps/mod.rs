//! Rock-paper-scissors rules, scoring and session lifecycle.
//!
//! Nothing in here touches the terminal. Adapters feed moves in and render
//! the [`Signal`]s and [`SessionView`] that come back out.

pub mod engine;
pub mod error;
pub mod moves;
pub mod round;
pub mod session;
pub mod state;

pub use engine::{MoveSource, RandomMoves, RoundEngine, RoundReport, ScriptedMoves};
pub use error::RoundError;
pub use moves::Move;
pub use round::{judge, RoundOutcome, Side, Verdict};
pub use session::{SessionController, SessionView, Signal, INITIAL_PROMPT};
pub use state::{GameEnded, GameState, Phase, DEFAULT_THRESHOLD};
