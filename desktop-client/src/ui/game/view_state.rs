use common::games::tictactoe::{
    GameEvent, GameListener, GameMode, Mark, Position, WinningLine, GRID_SIZE,
};

/// What the window shows, rebuilt purely from controller events.
pub struct BoardViewState {
    cells: [[Mark; GRID_SIZE]; GRID_SIZE],
    mode: GameMode,
    mode_label: String,
    ended_message: Option<String>,
    winning_line: Option<WinningLine>,
    dialog_open: bool,
}

impl BoardViewState {
    pub fn new(mode: GameMode) -> Self {
        Self {
            cells: [[Mark::Empty; GRID_SIZE]; GRID_SIZE],
            mode,
            mode_label: mode.label().to_string(),
            ended_message: None,
            winning_line: None,
            dialog_open: false,
        }
    }

    pub fn cell(&self, position: Position) -> Mark {
        self.cells
            .get(position.row)
            .and_then(|row| row.get(position.col))
            .copied()
            .unwrap_or(Mark::Empty)
    }

    pub fn mode_label(&self) -> &str {
        &self.mode_label
    }

    pub fn ended_message(&self) -> Option<&str> {
        self.ended_message.as_deref()
    }

    pub fn winning_line(&self) -> Option<&WinningLine> {
        self.winning_line.as_ref()
    }

    /// Cells stop reacting once a game has ended, until the next reset.
    pub fn is_locked(&self) -> bool {
        self.ended_message.is_some()
    }

    pub fn dialog_message(&self) -> Option<&str> {
        if self.dialog_open {
            self.ended_message()
        } else {
            None
        }
    }

    pub fn dismiss_dialog(&mut self) {
        self.dialog_open = false;
    }

    pub fn status_text(&self, current_mark: Mark) -> String {
        match self.ended_message() {
            Some(message) => message.to_string(),
            None => match self.mode {
                GameMode::HumanVsComputer => "Your turn (X)".to_string(),
                GameMode::HumanVsHuman => format!("Player {}'s turn", current_mark),
            },
        }
    }

    fn clear(&mut self) {
        self.cells = [[Mark::Empty; GRID_SIZE]; GRID_SIZE];
        self.ended_message = None;
        self.winning_line = None;
        self.dialog_open = false;
    }
}

impl GameListener for BoardViewState {
    fn on_event(&mut self, event: GameEvent) {
        match event {
            GameEvent::CellUpdated { position, mark } => {
                if let Some(cell) = self
                    .cells
                    .get_mut(position.row)
                    .and_then(|row| row.get_mut(position.col))
                {
                    *cell = mark;
                }
            }
            GameEvent::GameEnded { message, winning_line } => {
                self.ended_message = Some(message);
                self.winning_line = winning_line;
                self.dialog_open = true;
            }
            GameEvent::ModeChanged { mode, label } => {
                self.mode = mode;
                self.mode_label = label;
            }
            GameEvent::BoardCleared => self.clear(),
        }
    }
}
