//! Core domain types for tic-tac-toe.

use derive_getters::Getters;
use derive_new::new;
use serde::{Deserialize, Serialize};

/// Marker placed on the board by a player.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display)]
pub enum Marker {
    /// Marker X (moves first).
    #[display("X")]
    X,
    /// Marker O (moves second).
    #[display("O")]
    O,
}

impl Marker {
    /// Returns the opposing marker.
    pub fn opponent(self) -> Self {
        match self {
            Marker::X => Marker::O,
            Marker::O => Marker::X,
        }
    }
}

/// A cell on the tic-tac-toe board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Cell {
    /// Empty cell.
    #[default]
    Empty,
    /// Cell occupied by a marker.
    Occupied(Marker),
}

impl Cell {
    /// Checks if the cell is empty.
    pub fn is_empty(self) -> bool {
        matches!(self, Cell::Empty)
    }

    /// Returns the marker in this cell, if any.
    pub fn marker(self) -> Option<Marker> {
        match self {
            Cell::Empty => None,
            Cell::Occupied(marker) => Some(marker),
        }
    }
}

impl std::fmt::Display for Cell {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Cell::Empty => Ok(()),
            Cell::Occupied(marker) => write!(f, "{}", marker),
        }
    }
}

/// A participant in a game session.
///
/// Two players exist per session and neither changes after creation.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize, new)]
pub struct Player {
    /// Display name (e.g. "Player X").
    name: String,
    /// Marker this player places.
    marker: Marker,
}

impl Player {
    /// Creates the default player for a marker, named "Player X" or "Player O".
    pub fn default_for(marker: Marker) -> Self {
        Self::new(format!("Player {}", marker), marker)
    }
}
