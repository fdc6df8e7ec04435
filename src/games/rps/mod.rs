pub mod game;
pub mod renderer;

pub use game::RpsGame;

use crate::config::GameConfig;
use crate::core::engine::Engine;
use anyhow::Result;
use ratatui::DefaultTerminal;

/// Game runner for the full-screen front end
pub async fn run_game(config: GameConfig, mut terminal: DefaultTerminal) -> Result<()> {
    let game = RpsGame::new(config.session());
    let mut engine = Engine::new(game);
    engine.run(&mut terminal).await
}
