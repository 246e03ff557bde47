use super::types::{Mark, Position};

pub const GRID_SIZE: usize = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Board {
    cells: [[Mark; GRID_SIZE]; GRID_SIZE],
}

impl Board {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(position: Position) -> bool {
        position.row < GRID_SIZE && position.col < GRID_SIZE
    }

    /// `Mark::Empty` for positions off the board.
    pub fn get(&self, position: Position) -> Mark {
        if !Self::contains(position) {
            return Mark::Empty;
        }
        self.cells[position.row][position.col]
    }

    pub(crate) fn set(&mut self, position: Position, mark: Mark) {
        self.cells[position.row][position.col] = mark;
    }

    pub fn clear(&mut self) {
        self.cells = [[Mark::Empty; GRID_SIZE]; GRID_SIZE];
    }

    pub fn positions() -> impl Iterator<Item = Position> {
        (0..GRID_SIZE).flat_map(|row| (0..GRID_SIZE).map(move |col| Position::new(row, col)))
    }

    pub fn empty_cells(&self) -> Vec<Position> {
        Self::positions()
            .filter(|&position| self.get(position) == Mark::Empty)
            .collect()
    }

    pub fn is_full(&self) -> bool {
        self.cells
            .iter()
            .all(|row| row.iter().all(|&cell| cell != Mark::Empty))
    }

    pub fn count(&self, mark: Mark) -> usize {
        self.cells
            .iter()
            .flatten()
            .filter(|&&cell| cell == mark)
            .count()
    }
}
