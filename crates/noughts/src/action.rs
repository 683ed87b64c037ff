//! Accepted moves and the reasons a move is rejected.

use super::{Marker, Position};
use derive_new::new;
use serde::{Deserialize, Serialize};

/// A move in tic-tac-toe: a marker placed at a position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, new)]
pub struct Move {
    /// The marker placed.
    pub marker: Marker,
    /// Where it was placed.
    pub position: Position,
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} -> {}", self.marker, self.position.label())
    }
}

/// Why a cell selection was not applied.
///
/// None of these are fatal: the board is left untouched and the caller
/// is free to ignore the rejection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum InvalidMove {
    /// The index does not name a cell on the board.
    #[display("Cell index {} is outside the board (0-8)", _0)]
    OutOfRange(usize),

    /// The cell already holds a marker.
    #[display("Cell {} is already occupied", _0)]
    Occupied(usize),

    /// The game has already been won or drawn.
    #[display("Game is already over")]
    GameOver,
}

impl std::error::Error for InvalidMove {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_move_display() {
        let mov = Move::new(Marker::X, Position::Center);
        assert_eq!(mov.to_string(), "X -> Center");
    }
}
