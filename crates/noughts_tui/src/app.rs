//! Application state and logic.

use crate::config::AppConfig;
use crate::input::{self, Action};
use crossterm::event::KeyCode;
use noughts::{FrameSurface, GameController, Position, TurnOutcome};
use tracing::{debug, info, instrument};

/// Main application state.
pub struct App {
    game: GameController<FrameSurface>,
    cursor: Position,
    should_quit: bool,
}

impl App {
    /// Creates a new application and starts the first game.
    pub fn new(config: &AppConfig) -> Self {
        let (player_x, player_o) = config.players();
        Self {
            game: GameController::with_players(player_x, player_o, FrameSurface::new()),
            cursor: Position::Center,
            should_quit: false,
        }
    }

    /// Gets the current game.
    pub fn game(&self) -> &GameController<FrameSurface> {
        &self.game
    }

    /// Cell under the keyboard cursor.
    pub fn cursor(&self) -> Position {
        self.cursor
    }

    /// Whether the user asked to leave.
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Handles one key press.
    #[instrument(skip(self))]
    pub fn handle_key(&mut self, key: KeyCode) {
        let Some(action) = input::action_for_key(key) else {
            return;
        };

        match action {
            Action::Quit => {
                info!("User quit");
                self.should_quit = true;
            }
            Action::Restart => {
                debug!("Restarting game");
                self.game.start_new_game();
            }
            Action::MoveCursor(direction) => {
                self.cursor = input::move_cursor(self.cursor, direction);
            }
            Action::SelectCursor => self.select(self.cursor.to_index()),
            Action::Select(index) => {
                if let Some(position) = Position::from_index(index) {
                    self.cursor = position;
                }
                self.select(index);
            }
        }
    }

    fn select(&mut self, index: usize) {
        match self.game.play_turn(index) {
            TurnOutcome::Rejected(e) => debug!(index, error = %e, "Selection had no effect"),
            outcome => debug!(index, ?outcome, "Turn played"),
        }
    }
}
