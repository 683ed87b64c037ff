//! Keyboard input: cursor movement and key bindings.

use crossterm::event::KeyCode;
use noughts::Position;

/// What a key press asks the game to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Select the cell at this index.
    Select(usize),
    /// Select the cell under the cursor.
    SelectCursor,
    /// Move the cursor.
    MoveCursor(KeyCode),
    /// Start a new game.
    Restart,
    /// Leave the program.
    Quit,
}

/// Maps a key to an action; unbound keys give `None`.
///
/// Digits 1-9 select cells 0-8 directly, numbered like a phone keypad read
/// left to right, top to bottom.
pub fn action_for_key(key: KeyCode) -> Option<Action> {
    match key {
        KeyCode::Char('q') | KeyCode::Esc => Some(Action::Quit),
        KeyCode::Char('r') => Some(Action::Restart),
        KeyCode::Enter | KeyCode::Char(' ') => Some(Action::SelectCursor),
        KeyCode::Up | KeyCode::Down | KeyCode::Left | KeyCode::Right => {
            Some(Action::MoveCursor(key))
        }
        KeyCode::Char(c) => match c.to_digit(10) {
            Some(digit @ 1..=9) => Some(Action::Select(digit as usize - 1)),
            _ => None,
        },
        _ => None,
    }
}

/// Moves cursor based on arrow keys, stopping at the board edge.
pub fn move_cursor(cursor: Position, key: KeyCode) -> Position {
    let (row, col) = (cursor.row(), cursor.col());

    let target = match key {
        KeyCode::Up => row.checked_sub(1).map(|r| (r, col)),
        KeyCode::Down => Some((row + 1, col)),
        KeyCode::Left => col.checked_sub(1).map(|c| (row, c)),
        KeyCode::Right => Some((row, col + 1)),
        _ => None,
    };

    target
        .and_then(|(r, c)| Position::from_row_col(r, c))
        .unwrap_or(cursor)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_digit_keys_select_cells() {
        assert_eq!(action_for_key(KeyCode::Char('1')), Some(Action::Select(0)));
        assert_eq!(action_for_key(KeyCode::Char('9')), Some(Action::Select(8)));
        assert_eq!(action_for_key(KeyCode::Char('0')), None);
        assert_eq!(action_for_key(KeyCode::Char('x')), None);
    }

    #[test]
    fn test_control_keys() {
        assert_eq!(action_for_key(KeyCode::Char('q')), Some(Action::Quit));
        assert_eq!(action_for_key(KeyCode::Esc), Some(Action::Quit));
        assert_eq!(action_for_key(KeyCode::Char('r')), Some(Action::Restart));
        assert_eq!(action_for_key(KeyCode::Enter), Some(Action::SelectCursor));
        assert_eq!(
            action_for_key(KeyCode::Left),
            Some(Action::MoveCursor(KeyCode::Left))
        );
    }

    #[test]
    fn test_cursor_moves_within_board() {
        assert_eq!(move_cursor(Position::Center, KeyCode::Up), Position::TopCenter);
        assert_eq!(move_cursor(Position::Center, KeyCode::Down), Position::BottomCenter);
        assert_eq!(move_cursor(Position::Center, KeyCode::Left), Position::MiddleLeft);
        assert_eq!(move_cursor(Position::Center, KeyCode::Right), Position::MiddleRight);
    }

    #[test]
    fn test_cursor_stops_at_edges() {
        assert_eq!(move_cursor(Position::TopLeft, KeyCode::Up), Position::TopLeft);
        assert_eq!(move_cursor(Position::TopLeft, KeyCode::Left), Position::TopLeft);
        assert_eq!(move_cursor(Position::BottomRight, KeyCode::Down), Position::BottomRight);
        assert_eq!(move_cursor(Position::BottomRight, KeyCode::Right), Position::BottomRight);
        assert_eq!(move_cursor(Position::TopRight, KeyCode::Right), Position::TopRight);
        assert_eq!(move_cursor(Position::Center, KeyCode::Tab), Position::Center);
    }
}
