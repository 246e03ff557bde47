use thiserror::Error;

use super::board::Board;
use super::types::{GameMode, GameStatus, Mark, Position, WinningLine};
use super::win_detector;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum InvalidMove {
    #[error("game is already over")]
    GameOver,
    #[error("cell {0} is already marked")]
    CellOccupied(Position),
    #[error("position {0} is outside the board")]
    OutOfBounds(Position),
    #[error("cannot place an empty mark")]
    EmptyMark,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TicTacToeGameState {
    board: Board,
    current_mark: Mark,
    mode: GameMode,
    status: GameStatus,
}

impl TicTacToeGameState {
    pub fn new(mode: GameMode) -> Self {
        Self {
            board: Board::new(),
            current_mark: Mark::X,
            mode,
            status: GameStatus::InProgress,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn current_mark(&self) -> Mark {
        self.current_mark
    }

    pub fn mode(&self) -> GameMode {
        self.mode
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn is_terminal(&self) -> bool {
        self.status.is_terminal()
    }

    /// Places `mark` without touching the turn or the status; the caller
    /// decides what happens next. On error the state is left as it was.
    pub fn apply_move(&mut self, position: Position, mark: Mark) -> Result<(), InvalidMove> {
        if self.is_terminal() {
            return Err(InvalidMove::GameOver);
        }
        if mark == Mark::Empty {
            return Err(InvalidMove::EmptyMark);
        }
        if !Board::contains(position) {
            return Err(InvalidMove::OutOfBounds(position));
        }
        if self.board.get(position) != Mark::Empty {
            return Err(InvalidMove::CellOccupied(position));
        }

        self.board.set(position, mark);
        Ok(())
    }

    pub fn has_won(&self, mark: Mark) -> bool {
        win_detector::has_won(&self.board, mark)
    }

    /// True when no cell is empty. A full board can still hold a winning
    /// line; use [`Self::outcome`] to decide how a game ended.
    pub fn is_draw(&self) -> bool {
        self.board.is_full()
    }

    /// Win checks always run before the fullness check, so a move that
    /// completes a line on the last empty cell is reported as a win.
    pub fn outcome(&self) -> Option<GameStatus> {
        for mark in [Mark::X, Mark::O] {
            if self.has_won(mark) {
                return GameStatus::won_by(mark);
            }
        }
        if self.is_draw() {
            return Some(GameStatus::Draw);
        }
        None
    }

    pub fn winning_line(&self) -> Option<WinningLine> {
        self.status
            .winner()
            .and_then(|mark| win_detector::winning_line(&self.board, mark))
    }

    pub(crate) fn finish(&mut self, status: GameStatus) {
        self.status = status;
    }

    pub(crate) fn set_current_mark(&mut self, mark: Mark) {
        self.current_mark = mark;
    }

    pub(crate) fn switch_turn(&mut self) {
        if let Some(next) = self.current_mark.opponent() {
            self.current_mark = next;
        }
    }

    pub fn reset(&mut self) {
        self.board.clear();
        self.current_mark = Mark::X;
        self.status = GameStatus::InProgress;
    }

    pub fn set_mode(&mut self, mode: GameMode) {
        self.mode = mode;
        self.reset();
    }
}

impl Default for TicTacToeGameState {
    fn default() -> Self {
        Self::new(GameMode::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn play(state: &mut TicTacToeGameState, moves: &[(usize, usize, Mark)]) {
        for &(row, col, mark) in moves {
            state.apply_move(Position::new(row, col), mark).unwrap();
        }
    }

    #[test]
    fn test_new_state() {
        let state = TicTacToeGameState::new(GameMode::HumanVsComputer);
        assert_eq!(state.current_mark(), Mark::X);
        assert_eq!(state.mode(), GameMode::HumanVsComputer);
        assert!(!state.is_terminal());
        assert_eq!(state.board().empty_cells().len(), 9);
    }

    #[test]
    fn test_apply_move_sets_cell_only() {
        let mut state = TicTacToeGameState::default();
        state.apply_move(Position::new(2, 1), Mark::X).unwrap();
        assert_eq!(state.board().get(Position::new(2, 1)), Mark::X);
        assert_eq!(state.current_mark(), Mark::X);
        assert_eq!(state.board().count(Mark::X), 1);
    }

    #[test]
    fn test_occupied_cell_rejected_and_state_unchanged() {
        let mut state = TicTacToeGameState::default();
        state.apply_move(Position::new(0, 0), Mark::X).unwrap();
        let before = state.clone();
        let result = state.apply_move(Position::new(0, 0), Mark::O);
        assert_eq!(result, Err(InvalidMove::CellOccupied(Position::new(0, 0))));
        assert_eq!(state, before);
    }

    #[test]
    fn test_terminal_state_rejects_moves() {
        let mut state = TicTacToeGameState::default();
        state.finish(GameStatus::Draw);
        let before = state.clone();
        assert_eq!(
            state.apply_move(Position::new(1, 1), Mark::X),
            Err(InvalidMove::GameOver)
        );
        assert_eq!(state, before);
    }

    #[test]
    fn test_out_of_bounds_and_empty_mark_rejected() {
        let mut state = TicTacToeGameState::default();
        assert_eq!(
            state.apply_move(Position::new(3, 1), Mark::X),
            Err(InvalidMove::OutOfBounds(Position::new(3, 1)))
        );
        assert_eq!(
            state.apply_move(Position::new(1, 1), Mark::Empty),
            Err(InvalidMove::EmptyMark)
        );
        assert_eq!(state, TicTacToeGameState::default());
    }

    #[test]
    fn test_horizontal_win() {
        let mut state = TicTacToeGameState::default();
        play(
            &mut state,
            &[
                (0, 0, Mark::X),
                (1, 0, Mark::O),
                (0, 1, Mark::X),
                (1, 1, Mark::O),
            ],
        );
        assert!(!state.has_won(Mark::X));
        play(&mut state, &[(0, 2, Mark::X)]);
        assert!(state.has_won(Mark::X));
        assert!(!state.has_won(Mark::O));
        assert_eq!(state.outcome(), Some(GameStatus::XWon));
    }

    #[test]
    fn test_draw() {
        // X O X
        // X O O
        // O X X
        let mut state = TicTacToeGameState::default();
        play(
            &mut state,
            &[
                (0, 0, Mark::X),
                (0, 1, Mark::O),
                (0, 2, Mark::X),
                (1, 1, Mark::O),
                (1, 0, Mark::X),
                (2, 0, Mark::O),
                (2, 1, Mark::X),
                (1, 2, Mark::O),
                (2, 2, Mark::X),
            ],
        );
        assert!(state.is_draw());
        assert!(!state.has_won(Mark::X));
        assert!(!state.has_won(Mark::O));
        assert_eq!(state.outcome(), Some(GameStatus::Draw));
    }

    #[test]
    fn test_win_on_last_cell_is_not_a_draw() {
        // X O X
        // O X O
        // O X X   <- last X at (2,2) completes the diagonal
        let mut state = TicTacToeGameState::default();
        play(
            &mut state,
            &[
                (0, 0, Mark::X),
                (0, 1, Mark::O),
                (0, 2, Mark::X),
                (1, 0, Mark::O),
                (1, 1, Mark::X),
                (1, 2, Mark::O),
                (2, 1, Mark::X),
                (2, 0, Mark::O),
                (2, 2, Mark::X),
            ],
        );
        assert!(state.is_draw());
        assert_eq!(state.outcome(), Some(GameStatus::XWon));
    }

    #[test]
    fn test_outcome_none_while_playing() {
        let mut state = TicTacToeGameState::default();
        play(&mut state, &[(1, 1, Mark::X), (0, 0, Mark::O)]);
        assert_eq!(state.outcome(), None);
    }

    #[test]
    fn test_reset_clears_everything_but_mode() {
        let mut state = TicTacToeGameState::new(GameMode::HumanVsComputer);
        play(&mut state, &[(0, 0, Mark::X), (2, 2, Mark::O)]);
        state.switch_turn();
        state.finish(GameStatus::OWon);

        state.reset();
        assert_eq!(state.board().empty_cells().len(), 9);
        assert_eq!(state.current_mark(), Mark::X);
        assert!(!state.is_terminal());
        assert_eq!(state.mode(), GameMode::HumanVsComputer);
    }

    #[test]
    fn test_reset_is_idempotent() {
        let mut state = TicTacToeGameState::default();
        play(&mut state, &[(0, 1, Mark::X)]);
        state.reset();
        let once = state.clone();
        state.reset();
        assert_eq!(state, once);
    }

    #[test]
    fn test_set_mode_resets() {
        let mut state = TicTacToeGameState::default();
        play(&mut state, &[(0, 1, Mark::X), (1, 1, Mark::O)]);
        state.set_mode(GameMode::HumanVsComputer);
        assert_eq!(state.mode(), GameMode::HumanVsComputer);
        assert_eq!(state.board().empty_cells().len(), 9);
    }

    #[test]
    fn test_winning_line_only_after_finish() {
        let mut state = TicTacToeGameState::default();
        play(&mut state, &[(0, 0, Mark::O), (1, 1, Mark::O), (2, 2, Mark::O)]);
        assert_eq!(state.winning_line(), None);
        state.finish(GameStatus::OWon);
        let line = state.winning_line().unwrap();
        assert_eq!(line.mark, Mark::O);
        assert!(line.contains(Position::new(1, 1)));
    }
}
