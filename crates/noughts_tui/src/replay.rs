//! Headless play: feed a list of cell selections through the controller and
//! report where the game ended up.

use crate::config::AppConfig;
use noughts::{FrameSurface, GameController, GameState, TurnOutcome};
use serde::Serialize;
use tracing::{info, instrument, warn};

/// A selection the controller did not apply.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RejectedSelection {
    /// The selected index.
    pub index: usize,
    /// Why it was not applied.
    pub reason: String,
}

/// Final state after a replay.
#[derive(Debug, Clone, Serialize)]
pub struct ReplayReport {
    /// Phase the game ended in.
    pub state: GameState,
    /// Name of the winner, if any.
    pub winner: Option<String>,
    /// Indices of the winning line, if any.
    pub winning_combo: Option<[usize; 3]>,
    /// Selections that were ignored.
    pub rejected: Vec<RejectedSelection>,
    /// What the display shows.
    pub frame: FrameSurface,
}

/// Plays `cells` in order on a fresh game.
#[instrument(skip(config))]
pub fn replay(config: &AppConfig, cells: &[usize]) -> ReplayReport {
    let (player_x, player_o) = config.players();
    let mut game = GameController::with_players(player_x, player_o, FrameSurface::new());
    let mut rejected = Vec::new();

    for &index in cells {
        if let TurnOutcome::Rejected(e) = game.play_turn(index) {
            warn!(index, error = %e, "Selection rejected");
            rejected.push(RejectedSelection {
                index,
                reason: e.to_string(),
            });
        }
    }

    info!(state = %game.state(), moves = game.history().len(), "Replay finished");

    ReplayReport {
        state: game.state(),
        winner: game.winner().map(|p| p.name().clone()),
        winning_combo: game.winning_combo().map(|c| c.indices()),
        rejected,
        frame: game.surface().clone(),
    }
}

impl std::fmt::Display for ReplayReport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "{}", self.frame)?;
        for r in &self.rejected {
            writeln!(f, "ignored {}: {}", r.index, r.reason)?;
        }
        Ok(())
    }
}
