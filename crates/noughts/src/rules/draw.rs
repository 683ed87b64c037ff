//! Draw detection logic for tic-tac-toe.

use super::win::winning_combo;
use crate::Board;
use tracing::instrument;

/// A full board with no winning line.
///
/// A board that is full and also holds a line is a win, never a draw.
#[instrument(skip(board))]
pub fn is_draw(board: &Board) -> bool {
    board.is_full() && winning_combo(&board.snapshot()).is_none()
}
