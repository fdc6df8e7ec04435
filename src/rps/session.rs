use serde::{Deserialize, Serialize};
use tracing::info;

use super::engine::{MoveSource, RandomMoves, RoundEngine, RoundReport};
use super::error::RoundError;
use super::moves::Move;
use super::round::RoundOutcome;
use super::state::{GameEnded, GameState, Phase};

/// Result text shown before the first round and after every reset.
pub const INITIAL_PROMPT: &str = "Make your move!";

/// Everything a presentation adapter gets told about.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "signal", rename_all = "snake_case")]
pub enum Signal {
    RoundResolved {
        outcome: RoundOutcome,
        message: String,
        state: GameState,
    },
    GameEnded {
        ended: GameEnded,
        message: String,
    },
    SessionReset {
        state: GameState,
    },
}

/// What the surface should currently display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionView {
    pub player_score: u32,
    pub computer_score: u32,
    pub round_message: String,
    pub winner_message: Option<String>,
    pub inputs_enabled: bool,
    pub reset_visible: bool,
}

/// Drives a [`RoundEngine`] for one or more consecutive games and keeps the
/// last round and winner messages around for redraws.
#[derive(Debug, Clone)]
pub struct SessionController<S = RandomMoves> {
    engine: RoundEngine<S>,
    round_message: String,
    winner_message: Option<String>,
}

impl<S: MoveSource> SessionController<S> {
    pub fn new(engine: RoundEngine<S>) -> Self {
        Self {
            engine,
            round_message: INITIAL_PROMPT.to_string(),
            winner_message: None,
        }
    }

    pub fn state(&self) -> &GameState {
        self.engine.state()
    }

    pub fn phase(&self) -> Phase {
        self.engine.state().phase()
    }

    /// Play a round from a raw move name. Errors leave the session untouched.
    pub fn play_raw(&mut self, player_move: &str) -> Result<Vec<Signal>, RoundError> {
        let report = self.engine.resolve_round(player_move)?;
        Ok(self.absorb(report))
    }

    pub fn play(&mut self, player: Move) -> Result<Vec<Signal>, RoundError> {
        let report = self.engine.play(player)?;
        Ok(self.absorb(report))
    }

    /// Start over: zero scores, re-arm input, back to the initial prompt.
    pub fn reset(&mut self) -> GameState {
        let state = self.engine.reset();
        self.round_message = INITIAL_PROMPT.to_string();
        self.winner_message = None;
        info!("session reset");
        state
    }

    /// Reset and report it as a signal.
    pub fn reset_signal(&mut self) -> Signal {
        Signal::SessionReset { state: self.reset() }
    }

    pub fn view(&self) -> SessionView {
        let state = self.engine.state();
        SessionView {
            player_score: state.player_score,
            computer_score: state.computer_score,
            round_message: self.round_message.clone(),
            winner_message: self.winner_message.clone(),
            inputs_enabled: state.active,
            reset_visible: !state.active,
        }
    }

    fn absorb(&mut self, report: RoundReport) -> Vec<Signal> {
        let message = report.outcome.message();
        self.round_message = message.clone();

        let mut signals = vec![Signal::RoundResolved {
            outcome: report.outcome,
            message,
            state: report.state,
        }];
        if let Some(ended) = report.ended {
            let message = ended.message();
            self.winner_message = Some(message.clone());
            signals.push(Signal::GameEnded { ended, message });
        }
        signals
    }
}
