//! History consistency invariant: one recorded move per occupied cell.

use super::Invariant;
use crate::{GameController, Surface};

/// History length equals the number of occupied cells.
pub struct HistoryConsistentInvariant;

impl<S: Surface> Invariant<GameController<S>> for HistoryConsistentInvariant {
    fn holds(game: &GameController<S>) -> bool {
        game.history().len() == game.board().occupied_count()
    }

    fn description() -> &'static str {
        "History length matches number of occupied cells"
    }
}
