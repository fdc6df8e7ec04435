use serde::{Deserialize, Serialize};

use super::moves::Move;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    Player,
    Computer,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Verdict {
    PlayerWins,
    ComputerWins,
    Tie,
}

impl Verdict {
    /// The side that scores this round, if any.
    pub fn winner(self) -> Option<Side> {
        match self {
            Verdict::PlayerWins => Some(Side::Player),
            Verdict::ComputerWins => Some(Side::Computer),
            Verdict::Tie => None,
        }
    }
}

/// Compare two moves. Pure: the same pair always yields the same verdict.
pub fn judge(player: Move, computer: Move) -> Verdict {
    if player == computer {
        Verdict::Tie
    } else if player.beats(computer) {
        Verdict::PlayerWins
    } else {
        Verdict::ComputerWins
    }
}

/// A resolved round: both moves and who took it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundOutcome {
    pub player: Move,
    pub computer: Move,
    pub verdict: Verdict,
}

impl RoundOutcome {
    pub fn new(player: Move, computer: Move) -> Self {
        Self { player, computer, verdict: judge(player, computer) }
    }

    pub fn message(&self) -> String {
        match self.verdict {
            Verdict::Tie => format!("It's a tie! Both chose {}.", self.player),
            Verdict::PlayerWins => {
                format!("You win this round! {} beats {}.", self.player, self.computer)
            }
            Verdict::ComputerWins => {
                format!("You lose this round! {} beats {}.", self.computer, self.player)
            }
        }
    }
}
