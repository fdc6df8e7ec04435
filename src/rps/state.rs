use serde::{Deserialize, Serialize};

use super::round::{Side, Verdict};

/// Score that ends a game unless configured otherwise.
pub const DEFAULT_THRESHOLD: u32 = 5;

/// The two states of a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Phase {
    AwaitingMove,
    GameOver,
}

/// Scores plus the flag that gates further rounds.
///
/// Once either score reaches `threshold`, `active` flips to false and stays
/// there until [`GameState::reset`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    pub player_score: u32,
    pub computer_score: u32,
    pub threshold: u32,
    pub active: bool,
}

impl Default for GameState {
    fn default() -> Self {
        Self::new(DEFAULT_THRESHOLD)
    }
}

impl GameState {
    pub fn new(threshold: u32) -> Self {
        Self { player_score: 0, computer_score: 0, threshold, active: true }
    }

    pub fn phase(&self) -> Phase {
        if self.active { Phase::AwaitingMove } else { Phase::GameOver }
    }

    pub(crate) fn score(&mut self, verdict: Verdict) {
        match verdict.winner() {
            Some(Side::Player) => self.player_score += 1,
            Some(Side::Computer) => self.computer_score += 1,
            None => {}
        }
    }

    /// Side holding a score at or above the threshold.
    pub fn leader_at_threshold(&self) -> Option<Side> {
        if self.player_score >= self.threshold {
            Some(Side::Player)
        } else if self.computer_score >= self.threshold {
            Some(Side::Computer)
        } else {
            None
        }
    }

    pub(crate) fn reset(&mut self) {
        *self = Self::new(self.threshold);
    }
}

/// Emitted once when a round pushes a score to the threshold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameEnded {
    pub winner: Side,
    pub player_score: u32,
    pub computer_score: u32,
}

impl GameEnded {
    pub fn message(&self) -> String {
        match self.winner {
            Side::Player => format!(
                "🥳 You won the game! Final Score: {} - {}",
                self.player_score, self.computer_score
            ),
            Side::Computer => format!(
                "😭 Computer won the game! Final Score: {} - {}",
                self.player_score, self.computer_score
            ),
        }
    }
}
