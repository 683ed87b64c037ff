//! Monotonic board invariant: cells never change once set.

use super::Invariant;
use crate::{Board, GameController, Surface};

/// Replaying the move history onto an empty board reproduces the board.
///
/// Any overwrite, or any cell filled outside a recorded move, breaks the
/// replay.
pub struct MonotonicBoardInvariant;

impl<S: Surface> Invariant<GameController<S>> for MonotonicBoardInvariant {
    fn holds(game: &GameController<S>) -> bool {
        let mut replayed = Board::new();

        for mov in game.history() {
            if replayed.set_marker(mov.position.to_index(), mov.marker).is_err() {
                return false;
            }
        }

        replayed == *game.board()
    }

    fn description() -> &'static str {
        "Board cells are monotonic (never overwritten)"
    }
}
