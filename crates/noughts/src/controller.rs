//! Turn sequencing, win/draw detection, and restart.
//!
//! The [`GameController`] owns the board, both players and the renderer.
//! Each cell selection is handled to completion: the board validates the
//! move, the controller checks the eight lines, then the renderer is told
//! what changed.

use crate::action::{InvalidMove, Move};
use crate::board::Board;
use crate::invariants::{InvariantSet, TurnInvariants};
use crate::position::{Position, WinningCombo};
use crate::render::{Renderer, Surface};
use crate::rules;
use crate::{Marker, Player};
use serde::{Deserialize, Serialize};
use tracing::{debug, error, info, instrument};

/// Phase of the current game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display)]
pub enum GameState {
    /// Moves are accepted.
    InProgress,
    /// The active player completed a line.
    Won,
    /// The board filled with no line.
    Draw,
}

/// What a call to [`GameController::play_turn`] did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TurnOutcome {
    /// Nothing changed: not rendered, turn not passed.
    Rejected(InvalidMove),
    /// Move placed; `next` is now to move.
    Continued {
        /// Marker of the player now to move.
        next: Marker,
    },
    /// Move placed and completed a line.
    Won {
        /// Marker of the winning player.
        winner: Marker,
        /// The completed line.
        combo: WinningCombo,
    },
    /// Move placed and filled the board with no line.
    Draw,
}

/// Drives one tic-tac-toe session over a display surface.
#[derive(Debug, Clone)]
pub struct GameController<S> {
    board: Board,
    renderer: Renderer<S>,
    player_x: Player,
    player_o: Player,
    active: Marker,
    state: GameState,
    winning_combo: Option<WinningCombo>,
    history: Vec<Move>,
}

impl<S: Surface> GameController<S> {
    /// Creates a controller with "Player X" and "Player O" and starts a game.
    pub fn new(surface: S) -> Self {
        Self::with_players(
            Player::default_for(Marker::X),
            Player::default_for(Marker::O),
            surface,
        )
    }

    /// Creates a controller with the given players and starts a game.
    ///
    /// Markers are fixed: `player_x` always places X and moves first.
    #[instrument(skip(surface), fields(x = %player_x.name(), o = %player_o.name()))]
    pub fn with_players(player_x: Player, player_o: Player, surface: S) -> Self {
        let player_x = Player::new(player_x.name().clone(), Marker::X);
        let player_o = Player::new(player_o.name().clone(), Marker::O);

        let mut controller = Self {
            board: Board::new(),
            renderer: Renderer::new(surface),
            player_x,
            player_o,
            active: Marker::X,
            state: GameState::InProgress,
            winning_combo: None,
            history: Vec::new(),
        };
        controller.start_new_game();
        controller
    }

    /// Clears the board and history, hands the turn to X, and prompts.
    #[instrument(skip(self))]
    pub fn start_new_game(&mut self) {
        self.board.reset();
        self.active = Marker::X;
        self.state = GameState::InProgress;
        self.winning_combo = None;
        self.history.clear();

        self.renderer.render(&self.board.snapshot());
        let prompt = format!("{} starts - select a cell!", self.player_x.name());
        self.renderer.set_message(&prompt);
        info!("New game started");
    }

    /// Handles selection of the cell at `index`.
    ///
    /// Rejected selections (game over, index past 8, occupied cell) change
    /// nothing and are not rendered.
    #[instrument(skip(self), fields(active = %self.active, state = %self.state))]
    pub fn play_turn(&mut self, index: usize) -> TurnOutcome {
        if self.state != GameState::InProgress {
            debug!("Selection ignored, game is over");
            return TurnOutcome::Rejected(InvalidMove::GameOver);
        }

        if let Err(e) = self.board.set_marker(index, self.active) {
            debug!(error = %e, "Selection ignored");
            return TurnOutcome::Rejected(e);
        }

        if let Some(position) = Position::from_index(index) {
            let mov = Move::new(self.active, position);
            debug!(%mov, "Move accepted");
            self.history.push(mov);
        }

        self.renderer.render(&self.board.snapshot());

        let outcome = if let Some((winner, combo)) = rules::check_winner(&self.board.snapshot()) {
            self.state = GameState::Won;
            self.winning_combo = Some(combo);
            let message = format!("{} wins!", self.player(winner).name());
            self.renderer.set_message(&message);
            self.renderer.highlight_win(&combo);
            info!(%winner, combo = ?combo.indices(), "Game won");
            TurnOutcome::Won { winner, combo }
        } else if rules::is_draw(&self.board) {
            self.state = GameState::Draw;
            self.renderer.set_message("It's a draw!");
            info!("Game drawn");
            TurnOutcome::Draw
        } else {
            self.active = self.active.opponent();
            let message = format!("{}'s turn", self.active_player().name());
            self.renderer.set_message(&message);
            TurnOutcome::Continued { next: self.active }
        };

        if cfg!(debug_assertions) {
            self.verify_invariants();
        }
        outcome
    }

    /// Returns the first completed line on the board, in declaration order.
    pub fn check_winner(&self) -> Option<WinningCombo> {
        rules::winning_combo(&self.board.snapshot())
    }

    /// Checks turn invariants after a move. Debug builds only; a violation
    /// panics.
    fn verify_invariants(&self) {
        if let Err(violations) = TurnInvariants::check_all(self) {
            let descriptions = violations
                .iter()
                .map(|v| v.description.as_str())
                .collect::<Vec<_>>()
                .join("; ");
            error!(%descriptions, "Turn invariant violated");
            panic!("Turn invariant violated: {}", descriptions);
        }
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the game phase.
    pub fn state(&self) -> GameState {
        self.state
    }

    /// Checks if the game has been won or drawn.
    pub fn is_game_over(&self) -> bool {
        self.state != GameState::InProgress
    }

    /// Player whose turn it is; after a win, the winner.
    pub fn active_player(&self) -> &Player {
        self.player(self.active)
    }

    /// The player placing `marker`.
    pub fn player(&self, marker: Marker) -> &Player {
        match marker {
            Marker::X => &self.player_x,
            Marker::O => &self.player_o,
        }
    }

    /// The winner, once the game is won.
    pub fn winner(&self) -> Option<&Player> {
        (self.state == GameState::Won).then(|| self.active_player())
    }

    /// The completed line, once the game is won.
    pub fn winning_combo(&self) -> Option<WinningCombo> {
        self.winning_combo
    }

    /// Accepted moves of the current game, in order.
    pub fn history(&self) -> &[Move] {
        &self.history
    }

    /// Returns the display surface.
    pub fn surface(&self) -> &S {
        self.renderer.surface()
    }

    #[cfg(test)]
    pub(crate) fn board_mut(&mut self) -> &mut Board {
        &mut self.board
    }
}
