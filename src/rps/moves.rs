use rand::Rng;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::error::RoundError;

/// One of the three hand signs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Move {
    Rock,
    Paper,
    Scissors,
}

impl Move {
    pub const ALL: [Move; 3] = [Move::Rock, Move::Paper, Move::Scissors];

    /// Canonical lowercase name, also used in round messages.
    pub fn name(self) -> &'static str {
        match self {
            Move::Rock => "rock",
            Move::Paper => "paper",
            Move::Scissors => "scissors",
        }
    }

    /// The move this one defeats.
    pub fn victim(self) -> Move {
        match self {
            Move::Rock => Move::Scissors,
            Move::Paper => Move::Rock,
            Move::Scissors => Move::Paper,
        }
    }

    pub fn beats(self, other: Move) -> bool {
        self.victim() == other
    }

    /// Uniform draw over the three moves.
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Move {
        Move::ALL[rng.random_range(0..Move::ALL.len())]
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Move {
    type Err = RoundError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        Move::ALL
            .into_iter()
            .find(|m| m.name().eq_ignore_ascii_case(raw))
            .ok_or_else(|| RoundError::InvalidMove(raw.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{rngs::StdRng, SeedableRng};

    #[test]
    fn parses_any_case() {
        assert_eq!("ROCK".parse::<Move>().unwrap(), Move::Rock);
        assert_eq!("Paper".parse::<Move>().unwrap(), Move::Paper);
        assert_eq!("sCiSsOrS".parse::<Move>().unwrap(), Move::Scissors);
    }

    #[test]
    fn rejects_unknown_names() {
        let err = "lizard".parse::<Move>().unwrap_err();
        assert_eq!(err, RoundError::InvalidMove("lizard".into()));
        assert!("".parse::<Move>().is_err());
        assert!("rocks".parse::<Move>().is_err());
    }

    #[test]
    fn distinct_moves_have_exactly_one_winner() {
        for a in Move::ALL {
            assert!(!a.beats(a));
            for b in Move::ALL.into_iter().filter(|b| *b != a) {
                assert!(a.beats(b) ^ b.beats(a), "{a} vs {b}");
            }
        }
    }

    #[test]
    fn random_draw_reaches_every_move() {
        let mut rng = StdRng::seed_from_u64(7);
        let mut seen = [0usize; 3];
        for _ in 0..3000 {
            let drawn = Move::random(&mut rng);
            seen[Move::ALL.iter().position(|m| *m == drawn).unwrap()] += 1;
        }
        // Loose bounds, a uniform draw lands near 1000 each.
        assert!(seen.iter().all(|n| (800..1200).contains(n)), "{seen:?}");
    }

    #[test]
    fn serializes_lowercase() {
        assert_eq!(serde_json::to_string(&Move::Scissors).unwrap(), "\"scissors\"");
    }
}
