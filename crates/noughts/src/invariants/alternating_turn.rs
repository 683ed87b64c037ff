//! Alternating turn invariant: X, O, X, O, ...

use super::Invariant;
use crate::{GameController, GameState, Marker, Surface};

/// Players alternate, X first.
///
/// While the game is in progress the active marker is the one due next;
/// once it ends the active marker is frozen on whoever moved last.
pub struct AlternatingTurnInvariant;

impl<S: Surface> Invariant<GameController<S>> for AlternatingTurnInvariant {
    fn holds(game: &GameController<S>) -> bool {
        let history = game.history();

        let starts_with_x = history.first().is_none_or(|m| m.marker == Marker::X);
        let alternates = history.windows(2).all(|w| w[0].marker != w[1].marker);

        let expected_active = match (game.state(), history.last()) {
            (GameState::InProgress, Some(last)) => last.marker.opponent(),
            (GameState::InProgress, None) => Marker::X,
            (_, Some(last)) => last.marker,
            (_, None) => return false,
        };

        starts_with_x && alternates && *game.active_player().marker() == expected_active
    }

    fn description() -> &'static str {
        "Players alternate turns (X, O, X, O, ...)"
    }
}
