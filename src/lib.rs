pub mod core {
	pub mod engine;
	pub mod game;
	pub mod terminal;
}

pub mod cli;
pub mod config;
pub mod games;
pub mod line;
pub mod logging;
pub mod rps;

// Re-export for convenience
pub use crate::config::GameConfig;
pub use crate::core::game::{Context, Game};
