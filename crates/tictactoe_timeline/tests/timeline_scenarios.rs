//! End-to-end game scenarios for the timeline.

use tictactoe_timeline::{
    Action, ActionError, CellCoord, GameStatus, MoveError, OutOfRangeError, Player, Position,
    SortOrder, Square, Timeline, WinResult,
};

#[test]
fn test_straight_line_win() {
    let timeline = Timeline::replay(&[0, 3, 1, 4, 2]).expect("Valid replay");

    assert_eq!(
        timeline.game_status(),
        GameStatus::Won(WinResult {
            line: [Position::TopLeft, Position::TopCenter, Position::TopRight],
            mark: Player::X,
        })
    );
}

#[test]
fn test_draw() {
    // X: 0, 1, 5, 6, 8 / O: 2, 3, 4, 7
    let timeline = Timeline::replay(&[0, 2, 1, 3, 5, 4, 6, 7, 8]).expect("Valid replay");

    assert_eq!(timeline.view_pointer(), 9);
    assert_eq!(timeline.game_status(), GameStatus::Draw);
}

#[test]
fn test_draw_view_is_not_terminal_one_step_back() {
    let mut timeline = Timeline::replay(&[0, 2, 1, 3, 5, 4, 6, 7, 8]).expect("Valid replay");
    timeline.jump_to(8).unwrap();

    assert_eq!(timeline.game_status(), GameStatus::InProgress { next: Player::X });
}

#[test]
fn test_illegal_move_twice_on_same_cell() {
    let mut timeline = Timeline::new();
    timeline.apply_move(0).expect("First move is legal");

    let result = timeline.apply_move(0);
    assert_eq!(result, Err(MoveError::SquareOccupied(Position::TopLeft)));
    assert_eq!(timeline.len(), 2);
    assert_eq!(timeline.view_pointer(), 1);
}

#[test]
fn test_rewind_and_branch() {
    let mut timeline = Timeline::replay(&[0, 1, 2, 3]).expect("Valid replay");
    assert_eq!(timeline.len(), 5);

    timeline.jump_to(1).unwrap();
    timeline.apply_move(5).unwrap();

    assert_eq!(timeline.len(), 3);
    assert_eq!(*timeline.snapshots()[2].last_move(), Some(Position::MiddleRight));
    assert_eq!(timeline.view_pointer(), 2);
}

#[test]
fn test_no_move_after_win() {
    let mut timeline = Timeline::replay(&[0, 3, 1, 4, 2]).expect("Valid replay");
    let before = timeline.clone();

    for cell in 0..9 {
        assert!(timeline.apply_move(cell).is_err());
    }
    assert_eq!(timeline, before);
}

#[test]
fn test_replay_stops_at_first_illegal_move() {
    let result = Timeline::replay(&[4, 4]);
    assert_eq!(result, Err(MoveError::SquareOccupied(Position::Center)));

    let result = Timeline::replay(&[0, 3, 1, 4, 2, 5]);
    assert_eq!(result, Err(MoveError::GameOver));
}

#[test]
fn test_jump_out_of_range() {
    let mut timeline = Timeline::replay(&[4]).expect("Valid replay");
    assert_eq!(
        timeline.jump_to(2),
        Err(OutOfRangeError { index: 2, len: 2 })
    );
    assert_eq!(timeline.view_pointer(), 1);
}

#[test]
fn test_move_list_for_rendering() {
    let mut timeline = Timeline::replay(&[4, 0, 8]).expect("Valid replay");
    timeline.jump_to(2).unwrap();

    let list = timeline.move_list();
    assert_eq!(list.len(), 4);
    assert!(*list[0].is_initial());
    assert_eq!(*list[1].last_cell(), Some(CellCoord::new(2, 2)));
    assert_eq!(*list[2].last_cell(), Some(CellCoord::new(1, 1)));
    assert_eq!(*list[3].last_cell(), Some(CellCoord::new(3, 3)));
    let current: Vec<_> = list.iter().filter(|d| *d.is_current()).collect();
    assert_eq!(current.len(), 1);
    assert_eq!(*current[0].move_number(), 2);

    timeline.dispatch(Action::ToggleSort).unwrap();
    let list = timeline.move_list();
    assert_eq!(timeline.sort_order(), SortOrder::Descending);
    assert_eq!(*list[0].move_number(), 3);
    assert!(*list[3].is_initial());
}

#[test]
fn test_reducer_leaves_input_untouched() {
    let start = Timeline::new();
    let after_x = start.reduce(Action::Place(4)).unwrap();
    let after_o = after_x.reduce(Action::Place(0)).unwrap();

    assert_eq!(start.len(), 1);
    assert_eq!(after_x.len(), 2);
    assert_eq!(after_o.len(), 3);
    assert_eq!(
        after_o.current_snapshot().board().get(Position::TopLeft),
        Square::Occupied(Player::O)
    );

    let rewound = after_o.reduce(Action::JumpTo(0)).unwrap();
    assert_eq!(rewound.len(), 3);
    assert!(rewound.current_snapshot().is_initial());

    assert!(matches!(
        rewound.reduce(Action::JumpTo(3)),
        Err(ActionError::OutOfRange(_))
    ));
}

#[test]
fn test_status_serializes_structurally() {
    let timeline = Timeline::replay(&[0, 3, 1, 4, 2]).expect("Valid replay");
    let json = serde_json::to_value(timeline.game_status()).unwrap();

    assert_eq!(
        json,
        serde_json::json!({
            "Won": { "line": ["TopLeft", "TopCenter", "TopRight"], "mark": "X" }
        })
    );

    let json = serde_json::to_value(Timeline::new().game_status()).unwrap();
    assert_eq!(json, serde_json::json!({ "InProgress": { "next": "X" } }));
}
