//! Property-based tests for the timeline.
//!
//! Games are generated by picking cells at random from whatever is legal,
//! with random rewinds mixed in, so only reachable states are exercised.

use proptest::prelude::*;
use tictactoe_timeline::invariants::{InvariantSet, TimelineInvariants};
use tictactoe_timeline::rules::{evaluate_winner, is_move_legal};
use tictactoe_timeline::{Board, MoveError, Player, Position, Square, Timeline};

/// One step of a generated session.
#[derive(Debug, Clone, Copy)]
enum Step {
    /// Play the n-th legal cell (modulo the number available).
    Play(usize),
    /// Jump to the n-th history entry (modulo history length).
    Jump(usize),
}

fn arb_step() -> impl Strategy<Value = Step> {
    prop_oneof![
        3 => (0usize..9).prop_map(Step::Play),
        1 => (0usize..10).prop_map(Step::Jump),
    ]
}

fn run(steps: &[Step]) -> Timeline {
    let mut timeline = Timeline::new();
    for step in steps {
        match *step {
            Step::Play(n) => {
                let board = *timeline.current_snapshot().board();
                let legal: Vec<usize> = (0..9).filter(|&i| is_move_legal(&board, i)).collect();
                if !legal.is_empty() {
                    timeline.apply_move(legal[n % legal.len()]).unwrap();
                }
            }
            Step::Jump(n) => {
                let index = n % timeline.len();
                timeline.jump_to(index).unwrap();
            }
        }
    }
    timeline
}

fn arb_timeline() -> impl Strategy<Value = Timeline> {
    proptest::collection::vec(arb_step(), 0..30).prop_map(|steps| run(&steps))
}

fn arb_board() -> impl Strategy<Value = Board> {
    let square = prop_oneof![
        Just(Square::Empty),
        Just(Square::Occupied(Player::X)),
        Just(Square::Occupied(Player::O)),
    ];
    proptest::array::uniform9(square).prop_map(Board::from_squares)
}

proptest! {
    #[test]
    fn prop_invariants_hold_for_reachable_timelines(timeline in arb_timeline()) {
        prop_assert!(TimelineInvariants::check_all(&timeline).is_ok());
    }

    #[test]
    fn prop_evaluate_winner_depends_only_on_values(board in arb_board()) {
        let copy = Board::from_squares(*board.squares());
        prop_assert_eq!(evaluate_winner(&board), evaluate_winner(&copy));
    }

    #[test]
    fn prop_occupied_cell_is_rejected_without_change(timeline in arb_timeline(), pick in 0usize..9) {
        let board = *timeline.current_snapshot().board();
        let occupied: Vec<Position> = Position::ALL
            .iter()
            .copied()
            .filter(|pos| !board.is_empty(*pos))
            .collect();
        prop_assume!(!occupied.is_empty());
        let target = occupied[pick % occupied.len()];

        let mut after = timeline.clone();
        let result = after.apply_move(target.to_index());
        prop_assert!(matches!(
            result,
            Err(MoveError::SquareOccupied(_)) | Err(MoveError::GameOver)
        ));
        prop_assert_eq!(after, timeline);
    }

    #[test]
    fn prop_jump_then_move_branches(timeline in arb_timeline(), k in 0usize..10, pick in 0usize..9) {
        let mut timeline = timeline;
        let k = k % timeline.len();
        timeline.jump_to(k).unwrap();

        let board = *timeline.current_snapshot().board();
        let legal: Vec<usize> = (0..9).filter(|&i| is_move_legal(&board, i)).collect();
        prop_assume!(!legal.is_empty());
        let cell = legal[pick % legal.len()];

        let kept = timeline.snapshots()[..=k].to_vec();
        timeline.apply_move(cell).unwrap();

        prop_assert_eq!(timeline.len(), k + 2);
        prop_assert_eq!(&timeline.snapshots()[..=k], kept.as_slice());
        prop_assert_eq!(*timeline.snapshots()[k + 1].last_move(), Position::from_index(cell));
        prop_assert_eq!(timeline.view_pointer(), k + 1);
    }

    #[test]
    fn prop_jump_round_trip(timeline in arb_timeline(), i in 0usize..10) {
        let mut timeline = timeline;
        let i = i % timeline.len();
        let expected = timeline.snapshots()[i];
        timeline.jump_to(i).unwrap();
        prop_assert_eq!(*timeline.current_snapshot(), expected);
    }

    #[test]
    fn prop_turn_follows_view_parity(timeline in arb_timeline()) {
        let mut timeline = timeline;
        for n in 0..timeline.len() {
            timeline.jump_to(n).unwrap();
            let expected = if n % 2 == 0 { Player::X } else { Player::O };
            prop_assert_eq!(timeline.current_turn_mark(), expected);
        }
    }

    #[test]
    fn prop_move_list_is_a_permutation_of_history(timeline in arb_timeline(), descending in any::<bool>()) {
        let mut timeline = timeline;
        if descending {
            timeline.toggle_sort();
        }
        let mut numbers: Vec<usize> = timeline.move_list().iter().map(|d| *d.move_number()).collect();
        if descending {
            numbers.reverse();
        }
        prop_assert_eq!(numbers, (0..timeline.len()).collect::<Vec<_>>());
    }
}
