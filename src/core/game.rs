/// Core game interface for terminal front ends
use crossterm::event::KeyEvent;
use serde::Serialize;
use tokio::sync::mpsc::UnboundedSender;

/// Handle a game uses to hand signals back to the engine loop
pub struct Context<E> {
    tx: UnboundedSender<E>,
}

impl<E> Context<E> {
    pub fn new(tx: UnboundedSender<E>) -> Self {
        Self { tx }
    }

    /// Queue a signal; the engine drains it after the current input is handled
    pub fn emit(&self, event: E) {
        // Receiver only goes away when the loop is shutting down.
        let _ = self.tx.send(event);
    }
}

/// Main game trait that every screen implements
pub trait Game {
    /// Signals the game emits for observers (logging, transcripts)
    type Event: Serialize + Send + 'static;

    fn handle_input(&mut self, event: KeyEvent, ctx: &Context<Self::Event>);

    fn render(&self, frame: &mut ratatui::Frame);
}
