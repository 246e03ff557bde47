mod board;
mod bot_controller;
mod controller;
mod events;
mod game_state;
mod types;
mod win_detector;

pub use board::{Board, GRID_SIZE};
pub use bot_controller::calculate_random_move;
pub use controller::{TurnController, TurnPhase};
pub use events::{GameEvent, GameListener};
pub use game_state::{InvalidMove, TicTacToeGameState};
pub use types::{GameMode, GameStatus, Mark, Position, WinningLine};
pub use win_detector::{has_won, winning_line};
