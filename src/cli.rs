use anyhow::Result;
use clap::{Parser, Subcommand};
use std::io;
use std::path::PathBuf;
use tracing::info;

use crate::config::GameConfig;
use crate::core::terminal::TerminalContext;
use crate::games::rps;
use crate::rps::DEFAULT_THRESHOLD;
use crate::{line, logging};

#[derive(Parser, Debug)]
#[command(name = "rockterm")]
#[command(about = "🪨📄✂️  Rock, paper, scissors against the computer in your terminal")]
#[command(version)]
pub struct Cli {
    /// Score that wins the game
    #[arg(long, global = true, env = "ROCKTERM_THRESHOLD", default_value_t = DEFAULT_THRESHOLD,
          value_parser = clap::value_parser!(u32).range(1..))]
    pub threshold: u32,

    /// Seed for the computer's moves (random when omitted)
    #[arg(long, global = true, env = "ROCKTERM_SEED")]
    pub seed: Option<u64>,

    /// Where tracing output goes
    #[arg(long, global = true, env = "ROCKTERM_LOG", default_value = "rockterm.log")]
    pub log_file: PathBuf,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Full-screen terminal game (default)
    Play,
    /// Read moves from stdin, one per line
    Script {
        /// Emit signals as JSON lines instead of text
        #[arg(long)]
        json: bool,
    },
}

impl Cli {
    pub fn config(&self) -> GameConfig {
        GameConfig { threshold: self.threshold, seed: self.seed }
    }
}

pub async fn run_cli() -> Result<()> {
    let cli = Cli::parse();
    logging::init(&cli.log_file)?;
    let config = cli.config();
    info!(?config, command = ?cli.command, "starting rockterm");

    match cli.command.unwrap_or(Commands::Play) {
        Commands::Play => {
            let terminal = ratatui::init();
            let result = rps::run_game(config, terminal).await;
            ratatui::restore();
            result
        }
        Commands::Script { json } => {
            let mut session = config.session();
            let mut out = TerminalContext::stdout();
            line::run(&mut session, io::stdin().lock(), &mut out, json)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let cli = Cli::try_parse_from(["rockterm"]).unwrap();
        assert_eq!(cli.command, None);
        assert_eq!(cli.config(), GameConfig { threshold: 5, seed: None });
    }

    #[test]
    fn global_flags_after_subcommand() {
        let cli =
            Cli::try_parse_from(["rockterm", "script", "--json", "--threshold", "3", "--seed", "9"])
                .unwrap();
        assert_eq!(cli.command, Some(Commands::Script { json: true }));
        assert_eq!(cli.config(), GameConfig { threshold: 3, seed: Some(9) });
    }

    #[test]
    fn zero_threshold_rejected() {
        assert!(Cli::try_parse_from(["rockterm", "--threshold", "0"]).is_err());
    }
}
