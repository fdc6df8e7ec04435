/// Reasons a round request is rejected. State is never touched when these fire.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum RoundError {
    /// The move identifier is not rock, paper or scissors.
    #[display("'{}' is not a move (expected rock, paper or scissors)", _0)]
    InvalidMove(String),

    /// A round was requested after the game ended and before a reset.
    #[display("Game is over, reset to play again")]
    GameInactive,
}

impl std::error::Error for RoundError {}
