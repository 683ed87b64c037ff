//! Win detection logic for tic-tac-toe.

use crate::board::CELL_COUNT;
use crate::position::{WINNING_COMBOS, WinningCombo};
use crate::{Cell, Marker};
use tracing::instrument;

/// Returns the first line, in declaration order, whose three cells hold the
/// same marker.
#[instrument(skip(cells))]
pub fn winning_combo(cells: &[Cell; CELL_COUNT]) -> Option<WinningCombo> {
    WINNING_COMBOS.into_iter().find(|combo| {
        let [a, b, c] = combo.indices();
        !cells[a].is_empty() && cells[a] == cells[b] && cells[a] == cells[c]
    })
}

/// Returns the winning marker and its line, if any.
#[instrument(skip(cells))]
pub fn check_winner(cells: &[Cell; CELL_COUNT]) -> Option<(Marker, WinningCombo)> {
    let combo = winning_combo(cells)?;
    let [a, _, _] = combo.indices();
    cells[a].marker().map(|marker| (marker, combo))
}
