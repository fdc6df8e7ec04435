use crate::rps::{RandomMoves, RoundEngine, SessionController, DEFAULT_THRESHOLD};

/// Settings shared by every front end.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameConfig {
    pub threshold: u32,
    /// Fixed seed for the computer's moves; `None` seeds from the OS.
    pub seed: Option<u64>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self { threshold: DEFAULT_THRESHOLD, seed: None }
    }
}

impl GameConfig {
    pub fn move_source(&self) -> RandomMoves {
        match self.seed {
            Some(seed) => RandomMoves::seeded(seed),
            None => RandomMoves::from_os_rng(),
        }
    }

    pub fn session(&self) -> SessionController {
        SessionController::new(RoundEngine::new(self.threshold, self.move_source()))
    }
}
