//! Noughts - tic-tac-toe game logic.
//!
//! A board that only accepts writes to empty cells, a controller that
//! alternates two players and detects wins and draws, and a render layer
//! that projects the result onto any [`Surface`].
//!
//! # Architecture
//!
//! - **Board**: owns the nine cells and validates moves
//! - **Render**: paints board snapshots and status text onto a surface
//! - **Controller**: turn sequencing, win/draw detection, restart
//!
//! # Example
//!
//! ```
//! use noughts::{FrameSurface, GameController, GameState};
//!
//! let mut game = GameController::new(FrameSurface::new());
//! for index in [0, 4, 1, 5, 2] {
//!     game.play_turn(index);
//! }
//!
//! assert_eq!(game.state(), GameState::Won);
//! assert_eq!(game.surface().highlighted(), vec![0, 1, 2]);
//! assert_eq!(game.surface().status(), "Player X wins!");
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
mod board;
mod controller;
pub mod invariants;
mod position;
mod render;
pub mod rules;
mod types;

pub use action::{InvalidMove, Move};
pub use board::{Board, CELL_COUNT};
pub use controller::{GameController, GameState, TurnOutcome};
pub use position::{Position, WINNING_COMBOS, WinningCombo};
pub use render::{CellView, FrameSurface, Renderer, Surface};
pub use types::{Cell, Marker, Player};
