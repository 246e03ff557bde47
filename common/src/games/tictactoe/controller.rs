use crate::games::SessionRng;
use crate::log;
use super::bot_controller::calculate_random_move;
use super::events::{GameEvent, GameListener};
use super::game_state::TicTacToeGameState;
use super::types::{GameMode, GameStatus, Mark, Position};

const COMPUTER_MARK: Mark = Mark::O;
const DRAW_MESSAGE: &str = "It's a draw!";
const COMPUTER_WINS_MESSAGE: &str = "Computer wins!";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TurnPhase {
    AwaitingHumanMove,
    ComputerToMove,
    GameOver,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Mover {
    Human,
    Computer,
}

/// Drives a game from UI actions. Owns the state and the random source;
/// listeners are passed per call so the UI can own both sides.
pub struct TurnController {
    state: TicTacToeGameState,
    rng: SessionRng,
    phase: TurnPhase,
}

impl TurnController {
    pub fn new(mode: GameMode, rng: SessionRng) -> Self {
        Self {
            state: TicTacToeGameState::new(mode),
            rng,
            phase: TurnPhase::AwaitingHumanMove,
        }
    }

    pub fn state(&self) -> &TicTacToeGameState {
        &self.state
    }

    pub fn phase(&self) -> TurnPhase {
        self.phase
    }

    pub fn seed(&self) -> u64 {
        self.rng.seed()
    }

    /// Human move attempt. Invalid moves are ignored. In computer mode the
    /// reply is played before this returns.
    pub fn on_cell_clicked<L>(&mut self, row: usize, col: usize, listener: &mut L)
    where
        L: GameListener + ?Sized,
    {
        let position = Position::new(row, col);

        if self.phase != TurnPhase::AwaitingHumanMove {
            log!("Ignoring click at {} while {:?}", position, self.phase);
            return;
        }

        let mark = self.state.current_mark();
        if let Err(err) = self.state.apply_move(position, mark) {
            log!("Ignoring move by {} at {}: {}", mark, position, err);
            return;
        }
        listener.on_event(GameEvent::CellUpdated { position, mark });

        if let Some(status) = self.state.outcome() {
            self.end_game(status, Mover::Human, listener);
            return;
        }

        match self.state.mode() {
            GameMode::HumanVsComputer => {
                self.phase = TurnPhase::ComputerToMove;
                self.play_computer_turn(listener);
            }
            GameMode::HumanVsHuman => self.state.switch_turn(),
        }
    }

    pub fn on_reset_requested<L>(&mut self, listener: &mut L)
    where
        L: GameListener + ?Sized,
    {
        self.reset(listener);
        log!("Game reset");
    }

    /// Switches mode. Always starts a fresh game, whatever the board holds.
    pub fn on_mode_toggle_requested<L>(&mut self, listener: &mut L)
    where
        L: GameListener + ?Sized,
    {
        let mode = self.state.mode().toggled();
        self.state.set_mode(mode);
        log!("Mode changed to {:?}", mode);
        listener.on_event(GameEvent::ModeChanged {
            mode,
            label: mode.label().to_string(),
        });
        self.reset(listener);
    }

    fn reset<L>(&mut self, listener: &mut L)
    where
        L: GameListener + ?Sized,
    {
        self.state.reset();
        self.phase = TurnPhase::AwaitingHumanMove;
        listener.on_event(GameEvent::BoardCleared);
    }

    fn play_computer_turn<L>(&mut self, listener: &mut L)
    where
        L: GameListener + ?Sized,
    {
        self.state.set_current_mark(COMPUTER_MARK);

        let Some(position) = calculate_random_move(self.state.board(), &mut self.rng) else {
            self.hand_back_to_human();
            return;
        };

        if let Err(err) = self.state.apply_move(position, COMPUTER_MARK) {
            log!("Computer move at {} rejected: {}", position, err);
            self.hand_back_to_human();
            return;
        }
        listener.on_event(GameEvent::CellUpdated {
            position,
            mark: COMPUTER_MARK,
        });

        match self.state.outcome() {
            Some(status) => self.end_game(status, Mover::Computer, listener),
            None => self.hand_back_to_human(),
        }
    }

    fn hand_back_to_human(&mut self) {
        self.state.set_current_mark(Mark::X);
        self.phase = TurnPhase::AwaitingHumanMove;
    }

    fn end_game<L>(&mut self, status: GameStatus, mover: Mover, listener: &mut L)
    where
        L: GameListener + ?Sized,
    {
        self.state.finish(status);
        self.phase = TurnPhase::GameOver;

        let message = end_message(status, mover);
        log!("{}", message);
        listener.on_event(GameEvent::GameEnded {
            message,
            winning_line: self.state.winning_line(),
        });
    }
}

fn end_message(status: GameStatus, mover: Mover) -> String {
    match (status.winner(), mover) {
        (Some(_), Mover::Computer) => COMPUTER_WINS_MESSAGE.to_string(),
        (Some(mark), Mover::Human) => format!("Player {} wins!", mark),
        (None, _) => DRAW_MESSAGE.to_string(),
    }
}
