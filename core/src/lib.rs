#![no_std]

extern crate alloc;

use alloc::vec::Vec;
use core::ops::{Index, IndexMut};
use ndarray::Array2;
use serde::{Deserialize, Serialize};

pub use cell::*;
pub use direction::*;
pub use engine::*;
pub use error::*;
pub use message_log::*;
pub use types::*;

mod cell;
mod direction;
mod engine;
mod error;
mod message_log;
mod types;

/// The 6×6 field, indexed by `(x, y)`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    cells: Array2<Cell>,
}

impl Board {
    pub fn new() -> Self {
        Self {
            cells: Array2::default((BOARD_SIZE, BOARD_SIZE).to_nd_index()),
        }
    }

    pub fn validate_coords(&self, coords: Coord2) -> Result<Coord2> {
        if in_bounds(coords) {
            Ok(coords)
        } else {
            Err(GameError::InvalidCoords)
        }
    }

    pub fn cell_at(&self, coords: Coord2) -> Cell {
        self[coords]
    }

    pub fn empty_count(&self) -> CellCount {
        self.cells
            .iter()
            .filter(|cell| cell.is_empty())
            .count()
            .try_into()
            .unwrap_or(CellCount::MAX)
    }

    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|cell| !cell.is_empty())
    }

    /// Every cell with its coordinates, x-major.
    pub fn iter(&self) -> impl Iterator<Item = (Coord2, Cell)> + '_ {
        iter_coords().map(move |coords| (coords, self[coords]))
    }

    pub fn dandelions(&self) -> impl Iterator<Item = Coord2> + '_ {
        self.iter()
            .filter(|(_, cell)| cell.is_dandelion())
            .map(|(coords, _)| coords)
    }

    /// Blows seeds from every dandelion along `delta` to the edge of the board, filling each
    /// empty cell on the way. Returns how many cells were filled.
    pub fn blow(&mut self, delta: Delta) -> CellCount {
        let sources: Vec<Coord2> = self.dandelions().collect();
        let mut filled: CellCount = 0;

        for source in sources {
            for coords in RayIter::new(source, delta) {
                if self[coords].is_empty() {
                    log::trace!("{:?} filled from {:?}", coords, source);
                    self[coords] = Cell::Filled;
                    filled += 1;
                }
            }
        }

        filled
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl Index<Coord2> for Board {
    type Output = Cell;

    fn index(&self, coords: Coord2) -> &Self::Output {
        &self.cells[coords.to_nd_index()]
    }
}

impl IndexMut<Coord2> for Board {
    fn index_mut(&mut self, coords: Coord2) -> &mut Self::Output {
        &mut self.cells[coords.to_nd_index()]
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct PlaceOutcome {
    pub coords: Coord2,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct WindOutcome {
    pub direction: Direction,
    /// Cells filled by this wind alone.
    pub filled: CellCount,
    pub empty_left: CellCount,
    /// Set when this was the last wind.
    pub winner: Option<Winner>,
}

impl WindOutcome {
    pub const fn ended_game(&self) -> bool {
        self.winner.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fresh_board_is_all_empty() {
        let board = Board::new();
        assert_eq!(board.empty_count(), TOTAL_CELLS);
        assert!(!board.is_full());
        assert_eq!(board.dandelions().count(), 0);
    }

    #[test]
    fn validate_coords_rejects_out_of_bounds() {
        let board = Board::new();
        assert_eq!(board.validate_coords((5, 5)), Ok((5, 5)));
        assert_eq!(board.validate_coords((6, 0)), Err(GameError::InvalidCoords));
        assert_eq!(board.validate_coords((0, 6)), Err(GameError::InvalidCoords));
    }

    #[test]
    fn blow_fills_whole_ray_and_skips_occupied_cells() {
        let mut board = Board::new();
        board[(0, 2)] = Cell::Dandelion;
        board[(2, 2)] = Cell::Filled;
        board[(4, 2)] = Cell::Dandelion;

        let filled = board.blow(Direction::E.delta());

        assert_eq!(filled, 3);
        assert_eq!(board[(1, 2)], Cell::Filled);
        assert_eq!(board[(2, 2)], Cell::Filled);
        assert_eq!(board[(3, 2)], Cell::Filled);
        assert_eq!(board[(4, 2)], Cell::Dandelion);
        assert_eq!(board[(5, 2)], Cell::Filled);
    }

    #[test]
    fn blow_uses_every_dandelion_not_just_one() {
        let mut board = Board::new();
        board[(0, 0)] = Cell::Dandelion;
        board[(0, 5)] = Cell::Dandelion;

        let filled = board.blow(Direction::E.delta());

        assert_eq!(filled, 10);
        assert!(board.iter().filter(|&((_, y), _)| y == 0 || y == 5).all(|(_, c)| !c.is_empty()));
    }

    #[test]
    fn blow_without_dandelions_changes_nothing() {
        let mut board = Board::new();
        assert_eq!(board.blow(Direction::S.delta()), 0);
        assert_eq!(board, Board::new());
    }
}
