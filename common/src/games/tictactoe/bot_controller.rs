use crate::games::SessionRng;
use super::board::Board;
use super::types::Position;

/// Uniformly random empty cell. Samples an index into the list of empty
/// cells, so it terminates in one draw regardless of occupancy.
pub fn calculate_random_move(board: &Board, rng: &mut SessionRng) -> Option<Position> {
    let available_moves = board.empty_cells();
    let idx = rng.pick_index(available_moves.len())?;
    Some(available_moves[idx])
}
