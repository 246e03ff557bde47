use super::types::{GameMode, Mark, Position, WinningLine};

/// Everything the presentation layer needs to redraw after an action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameEvent {
    CellUpdated { position: Position, mark: Mark },
    GameEnded { message: String, winning_line: Option<WinningLine> },
    ModeChanged { mode: GameMode, label: String },
    BoardCleared,
}

pub trait GameListener {
    fn on_event(&mut self, event: GameEvent);
}

impl GameListener for Vec<GameEvent> {
    fn on_event(&mut self, event: GameEvent) {
        self.push(event);
    }
}
