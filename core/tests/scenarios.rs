use sweeper_core::*;

fn game(size: Coord2, bombs: &[Coord2]) -> Game<Vec<Notification>> {
    Game::with_observer(Board::from_bomb_coords(size, bombs).unwrap(), Vec::new())
}

#[test]
fn corner_bomb_board_is_won_by_one_cascade() {
    let mut game = game((3, 3), &[(0, 0)]);

    assert_eq!(game.reveal((2, 2)), Ok(RevealOutcome::Won));

    for pos in [(1, 1), (1, 2), (2, 1), (2, 2), (0, 2), (2, 0)] {
        assert!(game.board()[pos].is_exposed(), "{pos:?} should be exposed");
    }
    assert_eq!(game.board()[(0, 1)].adjacent_bombs(), Some(1));
    assert_eq!(game.board()[(1, 0)].adjacent_bombs(), Some(1));
    assert_eq!(game.display_at((0, 0)), Ok(DisplayState::Hidden));
    assert_eq!(game.remaining_to_expose(), 0);
    assert_eq!(
        game.observer().last(),
        Some(&Notification::GameEnded { won: true })
    );
    assert_eq!(game.board().to_string(), ".1 \n11 \n   \n");
}

#[test]
fn diagonal_bombs_expose_single_cell() {
    let mut game = game((2, 2), &[(0, 0), (1, 1)]);

    assert_eq!(game.reveal((0, 1)), Ok(RevealOutcome::Revealed));

    assert_eq!(game.board()[(0, 1)].adjacent_bombs(), Some(2));
    assert_eq!(game.remaining_to_expose(), 1);
    assert!(!game.board()[(1, 0)].is_exposed());
    assert!(!game.is_ended());
}

#[test]
fn flagged_cell_is_not_revealed() {
    let mut game = game((3, 3), &[(2, 2)]);

    game.toggle_flag((0, 0)).unwrap();
    assert_eq!(game.reveal((0, 0)), Ok(RevealOutcome::NoChange));

    assert!(!game.board()[(0, 0)].is_exposed());
}

#[test]
fn loss_notifications_end_with_single_game_ended() {
    let mut game = game((2, 3), &[(0, 0), (1, 2)]);

    game.reveal((1, 2)).unwrap();

    let events = game.observer();
    assert_eq!(
        events.first(),
        Some(&Notification::CellChanged {
            row: 1,
            col: 2,
            state: DisplayState::ExposedBomb
        })
    );
    assert!(events.contains(&Notification::CellChanged {
        row: 0,
        col: 0,
        state: DisplayState::ExposedBomb
    }));
    assert_eq!(
        events
            .iter()
            .filter(|event| matches!(event, Notification::GameEnded { .. }))
            .count(),
        1
    );
    assert_eq!(events.last(), Some(&Notification::GameEnded { won: false }));
}

#[test]
fn notifications_serialize_as_tagged_json() {
    let event = Notification::CellChanged {
        row: 1,
        col: 2,
        state: DisplayState::ExposedNumber(3),
    };

    let json = serde_json::to_string(&event).unwrap();

    assert_eq!(
        json,
        r#"{"event":"cell_changed","row":1,"col":2,"state":{"ExposedNumber":3}}"#
    );
    assert_eq!(serde_json::from_str::<Notification>(&json).unwrap(), event);
}
