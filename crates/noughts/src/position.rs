//! Named board positions and the fixed winning lines.

use serde::{Deserialize, Serialize};
use strum::IntoEnumIterator;

/// A position on the tic-tac-toe board, row-major (0-8).
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::EnumIter,
)]
pub enum Position {
    /// Top-left (index 0)
    TopLeft,
    /// Top-center (index 1)
    TopCenter,
    /// Top-right (index 2)
    TopRight,
    /// Middle-left (index 3)
    MiddleLeft,
    /// Center (index 4)
    Center,
    /// Middle-right (index 5)
    MiddleRight,
    /// Bottom-left (index 6)
    BottomLeft,
    /// Bottom-center (index 7)
    BottomCenter,
    /// Bottom-right (index 8)
    BottomRight,
}

impl Position {
    /// Label for display.
    pub fn label(&self) -> &'static str {
        match self {
            Position::TopLeft => "Top-left",
            Position::TopCenter => "Top-center",
            Position::TopRight => "Top-right",
            Position::MiddleLeft => "Middle-left",
            Position::Center => "Center",
            Position::MiddleRight => "Middle-right",
            Position::BottomLeft => "Bottom-left",
            Position::BottomCenter => "Bottom-center",
            Position::BottomRight => "Bottom-right",
        }
    }

    /// Converts position to board index (0-8).
    pub fn to_index(self) -> usize {
        self as usize
    }

    /// Creates position from board index.
    pub fn from_index(index: usize) -> Option<Self> {
        Self::iter().nth(index)
    }

    /// Row of this position (0-2).
    pub fn row(self) -> usize {
        self.to_index() / 3
    }

    /// Column of this position (0-2).
    pub fn col(self) -> usize {
        self.to_index() % 3
    }

    /// Position at the given row and column, if both are in range.
    pub fn from_row_col(row: usize, col: usize) -> Option<Self> {
        if row < 3 && col < 3 {
            Self::from_index(row * 3 + col)
        } else {
            None
        }
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Three positions that end the game when all hold the same marker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct WinningCombo([Position; 3]);

impl WinningCombo {
    /// The three board indices of this line.
    pub fn indices(&self) -> [usize; 3] {
        self.0.map(Position::to_index)
    }

    /// Checks whether the line passes through `index`.
    pub fn contains(&self, index: usize) -> bool {
        self.indices().contains(&index)
    }
}

/// All eight lines in evaluation order: rows, then columns, then diagonals.
pub const WINNING_COMBOS: [WinningCombo; 8] = {
    use Position::*;
    [
        // Rows
        WinningCombo([TopLeft, TopCenter, TopRight]),
        WinningCombo([MiddleLeft, Center, MiddleRight]),
        WinningCombo([BottomLeft, BottomCenter, BottomRight]),
        // Columns
        WinningCombo([TopLeft, MiddleLeft, BottomLeft]),
        WinningCombo([TopCenter, Center, BottomCenter]),
        WinningCombo([TopRight, MiddleRight, BottomRight]),
        // Diagonals
        WinningCombo([TopLeft, Center, BottomRight]),
        WinningCombo([TopRight, Center, BottomLeft]),
    ]
};
