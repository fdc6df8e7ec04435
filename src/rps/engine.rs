use rand::{rngs::StdRng, Rng, SeedableRng};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument, warn};

use super::error::RoundError;
use super::moves::Move;
use super::round::RoundOutcome;
use super::state::{GameEnded, GameState};

/// Where the computer's moves come from.
pub trait MoveSource {
    fn draw(&mut self) -> Move;
}

/// Uniform random moves from any `rand` generator.
#[derive(Debug, Clone)]
pub struct RandomMoves<R = StdRng> {
    rng: R,
}

impl RandomMoves<StdRng> {
    pub fn from_os_rng() -> Self {
        Self { rng: StdRng::from_os_rng() }
    }

    pub fn seeded(seed: u64) -> Self {
        Self { rng: StdRng::seed_from_u64(seed) }
    }
}

impl<R: Rng> RandomMoves<R> {
    pub fn with_rng(rng: R) -> Self {
        Self { rng }
    }
}

impl<R: Rng> MoveSource for RandomMoves<R> {
    fn draw(&mut self) -> Move {
        Move::random(&mut self.rng)
    }
}

/// Replays a fixed list of moves, wrapping around at the end.
#[derive(Debug, Clone)]
pub struct ScriptedMoves {
    moves: Vec<Move>,
    next: usize,
}

impl ScriptedMoves {
    /// `None` for an empty list.
    pub fn new(moves: impl Into<Vec<Move>>) -> Option<Self> {
        let moves = moves.into();
        (!moves.is_empty()).then_some(Self { moves, next: 0 })
    }
}

impl MoveSource for ScriptedMoves {
    fn draw(&mut self) -> Move {
        let m = self.moves[self.next];
        self.next = (self.next + 1) % self.moves.len();
        m
    }
}

/// What one round produced: the outcome, the state right after it, and the
/// end-of-game signal if this round finished the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundReport {
    pub outcome: RoundOutcome,
    pub state: GameState,
    pub ended: Option<GameEnded>,
}

/// Owns the game state and the computer's move source.
#[derive(Debug, Clone)]
pub struct RoundEngine<S = RandomMoves> {
    state: GameState,
    source: S,
}

impl<S: MoveSource> RoundEngine<S> {
    /// A threshold of zero is raised to one.
    pub fn new(threshold: u32, source: S) -> Self {
        Self { state: GameState::new(threshold.max(1)), source }
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn generate_computer_move(&mut self) -> Move {
        let m = self.source.draw();
        debug!(computer = %m, "computer move drawn");
        m
    }

    /// Resolve a round from a raw move name, matched case-insensitively.
    #[instrument(level = "debug", skip(self))]
    pub fn resolve_round(&mut self, player_move: &str) -> Result<RoundReport, RoundError> {
        self.ensure_active()?;
        let player = player_move.parse::<Move>().inspect_err(|e| {
            warn!(error = %e, "rejected round");
        })?;
        Ok(self.resolve(player))
    }

    /// Resolve a round from an already parsed move.
    pub fn play(&mut self, player: Move) -> Result<RoundReport, RoundError> {
        self.ensure_active()?;
        Ok(self.resolve(player))
    }

    pub(crate) fn reset(&mut self) -> GameState {
        self.state.reset();
        info!(threshold = self.state.threshold, "game state reset");
        self.state
    }

    fn ensure_active(&self) -> Result<(), RoundError> {
        if self.state.active {
            Ok(())
        } else {
            warn!("round requested while game is over");
            Err(RoundError::GameInactive)
        }
    }

    fn resolve(&mut self, player: Move) -> RoundReport {
        let computer = self.generate_computer_move();
        let outcome = RoundOutcome::new(player, computer);
        self.state.score(outcome.verdict);

        let ended = self.state.leader_at_threshold().map(|winner| {
            self.state.active = false;
            GameEnded {
                winner,
                player_score: self.state.player_score,
                computer_score: self.state.computer_score,
            }
        });

        info!(
            player = %player,
            computer = %computer,
            verdict = ?outcome.verdict,
            player_score = self.state.player_score,
            computer_score = self.state.computer_score,
            "round resolved"
        );
        if let Some(end) = &ended {
            info!(winner = ?end.winner, "game ended");
        }

        RoundReport { outcome, state: self.state, ended }
    }
}
