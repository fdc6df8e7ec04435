use crate::core::game::{Context, Game};
use anyhow::Result;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use ratatui::DefaultTerminal;
use std::time::Duration;
use tracing::{debug, info};

/// How long the loop sleeps between frames when nothing is queued
const IDLE_WAKE: Duration = Duration::from_millis(16);

pub struct Engine<G: Game> {
    game: G,
}

/// Esc, `q`/`Q`, or Ctrl+C (raw mode swallows the signal)
fn is_quit(key: &KeyEvent) -> bool {
    match key.code {
        KeyCode::Esc | KeyCode::Char('q' | 'Q') => true,
        KeyCode::Char('c') => key.modifiers.contains(KeyModifiers::CONTROL),
        _ => false,
    }
}

impl<G: Game> Engine<G> {
    pub fn new(game: G) -> Self {
        Self { game }
    }

    /// Run until the user quits. Restoring the terminal is the caller's job.
    pub async fn run(&mut self, terminal: &mut DefaultTerminal) -> Result<()> {
        let (outbox_tx, mut outbox_rx) = tokio::sync::mpsc::unbounded_channel::<G::Event>();
        let ctx = Context::new(outbox_tx);

        info!("engine loop started");
        loop {
            terminal.draw(|f| self.game.render(f))?;

            // INPUT (Non-blocking)
            if event::poll(Duration::from_millis(0))? {
                if let Event::Key(key) = event::read()? {
                    if key.kind == KeyEventKind::Press {
                        if is_quit(&key) {
                            break;
                        }
                        debug!(code = ?key.code, "key pressed");
                        self.game.handle_input(key, &ctx);
                    }
                }
            }

            tokio::select! {
                Some(signal) = outbox_rx.recv() => {
                    log_signal(&signal)?;
                    while let Ok(signal) = outbox_rx.try_recv() {
                        log_signal(&signal)?;
                    }
                }

                _ = tokio::time::sleep(IDLE_WAKE) => {}
            }
        }

        info!("engine loop finished");
        Ok(())
    }
}

fn log_signal<E: serde::Serialize>(signal: &E) -> Result<()> {
    info!(signal = %serde_json::to_string(signal)?, "signal");
    Ok(())
}
