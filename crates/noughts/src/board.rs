//! The nine-cell board.

use super::action::InvalidMove;
use super::{Cell, Marker};
use serde::{Deserialize, Serialize};
use tracing::{instrument, trace};

/// Number of cells on the board.
pub const CELL_COUNT: usize = 9;

/// 3x3 tic-tac-toe board.
///
/// Cells only go from empty to occupied; [`Board::reset`] is the single way
/// back to empty.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Board {
    /// Cells in row-major order (0-8).
    cells: [Cell; CELL_COUNT],
}

impl Board {
    /// Creates a new empty board.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns an independent copy of all nine cells.
    pub fn snapshot(&self) -> [Cell; CELL_COUNT] {
        self.cells
    }

    /// Gets the cell at the given index (0-8).
    pub fn get(&self, index: usize) -> Option<Cell> {
        self.cells.get(index).copied()
    }

    /// Writes `marker` into an empty cell.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidMove::OutOfRange`] for an index past 8 and
    /// [`InvalidMove::Occupied`] for a filled cell. The board is unchanged
    /// in both cases.
    #[instrument(skip(self))]
    pub fn set_marker(&mut self, index: usize, marker: Marker) -> Result<(), InvalidMove> {
        let cell = self
            .cells
            .get_mut(index)
            .ok_or(InvalidMove::OutOfRange(index))?;

        if !cell.is_empty() {
            return Err(InvalidMove::Occupied(index));
        }

        *cell = Cell::Occupied(marker);
        trace!("Marker placed");
        Ok(())
    }

    /// Clears every cell.
    #[instrument(skip(self))]
    pub fn reset(&mut self) {
        self.cells = [Cell::Empty; CELL_COUNT];
    }

    /// Checks if no cell is empty.
    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|c| !c.is_empty())
    }

    /// Number of occupied cells.
    pub fn occupied_count(&self) -> usize {
        self.cells.iter().filter(|c| !c.is_empty()).count()
    }
}
