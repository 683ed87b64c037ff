//! Tests for turn sequencing, win/draw detection, and restart.

use noughts::{
    Cell, FrameSurface, GameController, GameState, InvalidMove, Marker, Player, Position,
    TurnOutcome, CELL_COUNT,
};

fn new_game() -> GameController<FrameSurface> {
    GameController::new(FrameSurface::new())
}

#[test]
fn test_top_row_win_scenario() {
    let mut game = new_game();

    assert_eq!(game.play_turn(0), TurnOutcome::Continued { next: Marker::O });
    assert_eq!(game.play_turn(4), TurnOutcome::Continued { next: Marker::X });
    assert_eq!(game.play_turn(1), TurnOutcome::Continued { next: Marker::O });
    assert_eq!(game.play_turn(5), TurnOutcome::Continued { next: Marker::X });

    let outcome = game.play_turn(2);
    let TurnOutcome::Won { winner, combo } = outcome else {
        panic!("Expected a win, got {:?}", outcome);
    };

    assert_eq!(winner, Marker::X);
    assert_eq!(combo.indices(), [0, 1, 2]);
    assert_eq!(game.state(), GameState::Won);
    assert_eq!(game.winner().map(|p| p.name().as_str()), Some("Player X"));
    assert_eq!(game.winning_combo(), Some(combo));
    assert_eq!(game.surface().highlighted(), vec![0, 1, 2]);
    assert_eq!(game.surface().status(), "Player X wins!");
}

#[test]
fn test_occupied_cell_changes_nothing() {
    let mut game = new_game();
    game.play_turn(4);

    let board = game.board().snapshot();
    let frame = game.surface().clone();
    let history = game.history().to_vec();

    assert_eq!(
        game.play_turn(4),
        TurnOutcome::Rejected(InvalidMove::Occupied(4))
    );

    assert_eq!(game.board().snapshot(), board);
    assert_eq!(game.surface(), &frame);
    assert_eq!(game.history(), history.as_slice());
    assert_eq!(*game.active_player().marker(), Marker::O);
    assert_eq!(game.surface().status(), "Player O's turn");
}

#[test]
fn test_out_of_range_changes_nothing() {
    let mut game = new_game();
    let frame = game.surface().clone();

    assert_eq!(
        game.play_turn(9),
        TurnOutcome::Rejected(InvalidMove::OutOfRange(9))
    );
    assert_eq!(game.surface(), &frame);
    assert_eq!(game.board().occupied_count(), 0);
    assert_eq!(*game.active_player().marker(), Marker::X);
}

/// Plays every legal continuation of `game` to its end, checking that each
/// accepted move fills exactly the selected cell. Returns the number of
/// finished games reached.
fn explore(game: &GameController<FrameSurface>) -> usize {
    if game.is_game_over() {
        return 1;
    }

    let before = game.board().snapshot();
    let mut finished = 0;
    for index in (0..CELL_COUNT).filter(|&i| before[i].is_empty()) {
        let mut next = game.clone();
        let outcome = next.play_turn(index);
        assert!(!matches!(outcome, TurnOutcome::Rejected(_)));

        let after = next.board().snapshot();
        let changed: Vec<usize> = (0..CELL_COUNT).filter(|&i| before[i] != after[i]).collect();
        assert_eq!(changed, vec![index]);
        assert_eq!(after[index], Cell::Occupied(*game.active_player().marker()));
        assert_eq!(next.history().len(), game.history().len() + 1);

        finished += explore(&next);
    }
    finished
}

#[test]
fn test_each_accepted_move_fills_exactly_one_cell() {
    // Every ordering of 0..9, cut short where the game ends
    assert_eq!(explore(&new_game()), 255_168);
}

#[test]
fn test_draw_scenario() {
    let mut game = new_game();
    // X O X / X O O / O X X
    let moves = [0, 1, 2, 4, 3, 5, 7, 6, 8];

    let outcomes: Vec<TurnOutcome> = moves.iter().map(|&i| game.play_turn(i)).collect();

    assert_eq!(outcomes.last(), Some(&TurnOutcome::Draw));
    assert_eq!(game.state(), GameState::Draw);
    assert!(game.board().is_full());
    assert_eq!(game.check_winner(), None);
    assert_eq!(game.winner(), None);
    assert_eq!(game.surface().status(), "It's a draw!");
    assert!(game.surface().highlighted().is_empty());
}

#[test]
fn test_draw_absorbs_further_selections() {
    let mut game = new_game();
    for index in [0, 1, 2, 4, 3, 5, 7, 6, 8] {
        game.play_turn(index);
    }
    assert_eq!(game.state(), GameState::Draw);

    let board = game.board().snapshot();
    let frame = game.surface().clone();
    let history = game.history().to_vec();

    assert_eq!(game.play_turn(4), TurnOutcome::Rejected(InvalidMove::GameOver));
    assert_eq!(game.play_turn(9), TurnOutcome::Rejected(InvalidMove::GameOver));

    assert_eq!(game.state(), GameState::Draw);
    assert_eq!(game.board().snapshot(), board);
    assert_eq!(game.surface(), &frame);
    assert_eq!(game.surface().status(), "It's a draw!");
    assert_eq!(game.history(), history.as_slice());
}

#[test]
fn test_win_on_full_board_is_a_win() {
    let mut game = new_game();
    // Final X move at 8 fills the board and completes the diagonal 0-4-8.
    // X O X / O X O / O X X
    for index in [0, 1, 2, 3, 4, 5, 7, 6] {
        assert!(matches!(game.play_turn(index), TurnOutcome::Continued { .. }));
    }

    let outcome = game.play_turn(8);
    assert!(game.board().is_full());
    assert!(matches!(outcome, TurnOutcome::Won { winner: Marker::X, .. }));
    assert_eq!(game.state(), GameState::Won);
    assert_eq!(game.surface().highlighted(), vec![0, 4, 8]);
}

#[test]
fn test_restart_after_win() {
    let mut game = new_game();
    for index in [0, 4, 1, 5, 2] {
        game.play_turn(index);
    }
    assert_eq!(game.play_turn(8), TurnOutcome::Rejected(InvalidMove::GameOver));

    game.start_new_game();

    assert_eq!(game.state(), GameState::InProgress);
    assert_eq!(game.board().snapshot(), [Cell::Empty; CELL_COUNT]);
    assert!(game.history().is_empty());
    assert_eq!(game.winning_combo(), None);
    assert_eq!(*game.active_player().marker(), Marker::X);
    assert!(game.surface().highlighted().is_empty());
    assert!(game.surface().cells().iter().all(|view| view.text.is_empty()));
    assert_eq!(game.surface().status(), "Player X starts - select a cell!");

    assert_eq!(game.play_turn(8), TurnOutcome::Continued { next: Marker::O });
}

#[test]
fn test_custom_player_names_in_messages() {
    let mut game = GameController::with_players(
        Player::new("Ada".to_string(), Marker::X),
        Player::new("Grace".to_string(), Marker::O),
        FrameSurface::new(),
    );
    assert_eq!(game.surface().status(), "Ada starts - select a cell!");

    game.play_turn(0);
    assert_eq!(game.surface().status(), "Grace's turn");
}

#[test]
fn test_markers_fixed_by_seat() {
    // Markers passed in are ignored: the first player always places X.
    let game = GameController::with_players(
        Player::new("First".to_string(), Marker::O),
        Player::new("Second".to_string(), Marker::O),
        FrameSurface::new(),
    );
    assert_eq!(*game.player(Marker::X).marker(), Marker::X);
    assert_eq!(game.player(Marker::O).name(), "Second");
}

#[test]
fn test_history_records_positions() {
    let mut game = new_game();
    game.play_turn(4);
    game.play_turn(0);

    let positions: Vec<(Marker, Position)> =
        game.history().iter().map(|m| (m.marker, m.position)).collect();
    assert_eq!(
        positions,
        vec![(Marker::X, Position::Center), (Marker::O, Position::TopLeft)]
    );
}

#[test]
fn test_frame_serializes() {
    let mut game = new_game();
    game.play_turn(0);

    let json = serde_json::to_value(game.surface()).unwrap();
    assert_eq!(json["cells"][0]["text"], "X");
    assert_eq!(json["status"], "Player O's turn");
}
