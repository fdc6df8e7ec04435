use crate::core::game::{Context, Game};
use crate::rps::{Move, MoveSource, RandomMoves, SessionController, SessionView, Signal};
use crossterm::event::{KeyCode, KeyEvent};

use super::renderer;

/// Full-screen rock-paper-scissors against the computer
pub struct RpsGame<S = RandomMoves> {
    session: SessionController<S>,
    notice: Option<String>,
}

impl<S: MoveSource> RpsGame<S> {
    pub fn new(session: SessionController<S>) -> Self {
        Self { session, notice: None }
    }

    pub fn view(&self) -> SessionView {
        self.session.view()
    }

    pub fn notice(&self) -> Option<&str> {
        self.notice.as_deref()
    }

    fn key_move(code: KeyCode) -> Option<Move> {
        match code {
            KeyCode::Char('r' | 'R' | '1') => Some(Move::Rock),
            KeyCode::Char('p' | 'P' | '2') => Some(Move::Paper),
            KeyCode::Char('s' | 'S' | '3') => Some(Move::Scissors),
            _ => None,
        }
    }
}

impl<S: MoveSource> Game for RpsGame<S> {
    type Event = Signal;

    fn handle_input(&mut self, event: KeyEvent, ctx: &Context<Self::Event>) {
        if let Some(m) = Self::key_move(event.code) {
            match self.session.play(m) {
                Ok(signals) => {
                    self.notice = None;
                    signals.into_iter().for_each(|s| ctx.emit(s));
                }
                Err(e) => self.notice = Some(e.to_string()),
            }
            return;
        }

        match event.code {
            KeyCode::Enter | KeyCode::Char('n' | 'N') if self.session.view().reset_visible => {
                self.notice = None;
                ctx.emit(self.session.reset_signal());
            }
            _ => {}
        }
    }

    fn render(&self, frame: &mut ratatui::Frame) {
        renderer::render(frame, &self.session.view(), self.notice());
    }
}
