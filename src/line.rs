//! Line-at-a-time front end: one command per stdin line, results on stdout.

use crate::core::terminal::{TerminalColor, TerminalContext};
use crate::rps::{MoveSource, SessionController, Signal, Verdict};
use anyhow::Result;
use std::io::{BufRead, Write};
use tracing::{debug, info};

#[derive(Debug, Clone, PartialEq, Eq)]
enum Command {
    Play(String),
    Reset,
    Quit,
    Skip,
}

fn parse_command(line: &str) -> Command {
    let line = line.trim();
    match line.to_ascii_lowercase().as_str() {
        "" => Command::Skip,
        "reset" | "n" | "new" => Command::Reset,
        "quit" | "q" | "exit" => Command::Quit,
        "r" => Command::Play("rock".into()),
        "p" => Command::Play("paper".into()),
        "s" => Command::Play("scissors".into()),
        _ => Command::Play(line.to_string()),
    }
}

/// Read commands until `quit` or end of input.
///
/// With `json` set, every signal and error is written as one JSON object per line.
pub fn run<S, R, W>(
    session: &mut SessionController<S>,
    input: R,
    out: &mut TerminalContext<W>,
    json: bool,
) -> Result<()>
where
    S: MoveSource,
    R: BufRead,
    W: Write,
{
    if !json {
        out.print_colored_line("Rock, paper or scissors? (reset, quit)", TerminalColor::Cyan)?;
        out.print_line(&session.view().round_message)?;
        out.flush()?;
    }

    for line in input.lines() {
        let line = line?;
        let command = parse_command(&line);
        debug!(?command, "line command");

        let signals = match command {
            Command::Skip => continue,
            Command::Quit => break,
            Command::Reset => vec![session.reset_signal()],
            Command::Play(raw) => match session.play_raw(&raw) {
                Ok(signals) => signals,
                Err(e) => {
                    if json {
                        out.print_line(&serde_json::json!({ "error": e.to_string() }).to_string())?;
                    } else {
                        out.print_colored_line(&e.to_string(), TerminalColor::Red)?;
                    }
                    out.flush()?;
                    continue;
                }
            },
        };

        for signal in &signals {
            if json {
                out.print_line(&serde_json::to_string(signal)?)?;
            } else {
                print_signal(out, signal)?;
            }
        }
        out.flush()?;
    }

    info!("line session finished");
    Ok(())
}

fn print_signal<W: Write>(out: &mut TerminalContext<W>, signal: &Signal) -> Result<()> {
    match signal {
        Signal::RoundResolved { outcome, message, state } => {
            let color = match outcome.verdict {
                Verdict::PlayerWins => TerminalColor::Green,
                Verdict::ComputerWins => TerminalColor::Red,
                Verdict::Tie => TerminalColor::Default,
            };
            out.print_colored_line(message, color)?;
            out.print_line(&format!(
                "Score: You {} - {} Computer",
                state.player_score, state.computer_score
            ))?;
        }
        Signal::GameEnded { message, .. } => {
            out.empty_line()?;
            out.print_colored_line(message, TerminalColor::Yellow)?;
            out.print_line("Type 'reset' to play again or 'quit' to leave.")?;
        }
        Signal::SessionReset { .. } => {
            out.print_line("Scores cleared.")?;
            out.print_line(crate::rps::INITIAL_PROMPT)?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shortcuts_and_words() {
        assert_eq!(parse_command(" R \n"), Command::Play("rock".into()));
        assert_eq!(parse_command("Scissors"), Command::Play("Scissors".into()));
        assert_eq!(parse_command("RESET"), Command::Reset);
        assert_eq!(parse_command("q"), Command::Quit);
        assert_eq!(parse_command("   "), Command::Skip);
        assert_eq!(parse_command("lizard"), Command::Play("lizard".into()));
    }
}
