//! Game rules for tic-tac-toe.
//!
//! Pure functions over the board, kept apart from board storage. The
//! controller decides every win and draw through these.

pub mod draw;
pub mod win;

pub use draw::is_draw;
pub use win::{check_winner, winning_combo};
