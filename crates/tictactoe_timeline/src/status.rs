//! Game status derived from a viewed board.

use super::rules::{self, WinResult};
use super::{Board, Player, Position};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Status of the game at the viewed snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameStatus {
    /// Game is ongoing; `next` moves.
    InProgress {
        /// Player to move.
        next: Player,
    },
    /// A line was completed.
    Won(WinResult),
    /// Board full with no line.
    Draw,
}

impl GameStatus {
    /// Evaluates a board, given whose turn it would be.
    #[instrument(skip(board))]
    pub fn evaluate(board: &Board, next: Player) -> Self {
        if let Some(win) = rules::evaluate_winner(board) {
            GameStatus::Won(win)
        } else if rules::is_draw(board) {
            GameStatus::Draw
        } else {
            GameStatus::InProgress { next }
        }
    }

    /// True once the game has been won or drawn.
    pub fn is_over(&self) -> bool {
        !matches!(self, GameStatus::InProgress { .. })
    }

    /// Returns the winner if there is one.
    pub fn winner(&self) -> Option<Player> {
        match self {
            GameStatus::Won(win) => Some(win.mark),
            _ => None,
        }
    }

    /// Returns the completed line if the game was won.
    pub fn win(&self) -> Option<&WinResult> {
        match self {
            GameStatus::Won(win) => Some(win),
            _ => None,
        }
    }

    /// True if `pos` is on the winning line.
    pub fn on_winning_line(&self, pos: Position) -> bool {
        self.win().is_some_and(|win| win.contains(pos))
    }

    /// Returns the player to move while the game is in progress.
    pub fn next_player(&self) -> Option<Player> {
        match self {
            GameStatus::InProgress { next } => Some(*next),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_board_in_progress() {
        let status = GameStatus::evaluate(&Board::new(), Player::X);
        assert_eq!(status, GameStatus::InProgress { next: Player::X });
        assert!(!status.is_over());
        assert_eq!(status.next_player(), Some(Player::X));
        assert_eq!(status.winner(), None);
    }

    #[test]
    fn test_won_board() {
        let board = Board::new()
            .with_mark(Position::TopLeft, Player::O)
            .with_mark(Position::Center, Player::O)
            .with_mark(Position::BottomRight, Player::O);
        let status = GameStatus::evaluate(&board, Player::X);
        assert!(status.is_over());
        assert_eq!(status.winner(), Some(Player::O));
        assert_eq!(
            status.win().map(|win| win.line),
            Some([Position::TopLeft, Position::Center, Position::BottomRight])
        );
        assert!(status.on_winning_line(Position::Center));
        assert!(!status.on_winning_line(Position::TopRight));
        assert_eq!(status.next_player(), None);
    }

    #[test]
    fn test_full_board_without_line_is_draw() {
        // X X O / O O X / X O X
        let marks = [
            Player::X, Player::X, Player::O,
            Player::O, Player::O, Player::X,
            Player::X, Player::O, Player::X,
        ];
        let board = Position::ALL
            .iter()
            .zip(marks)
            .fold(Board::new(), |board, (&pos, mark)| board.with_mark(pos, mark));

        let status = GameStatus::evaluate(&board, Player::O);
        assert_eq!(status, GameStatus::Draw);
        assert!(status.is_over());
        assert_eq!(status.winner(), None);
        assert_eq!(status.next_player(), None);
    }

    #[test]
    fn test_full_board_with_line_is_won() {
        // X X X / O O X / O X O
        let marks = [
            Player::X, Player::X, Player::X,
            Player::O, Player::O, Player::X,
            Player::O, Player::X, Player::O,
        ];
        let board = Position::ALL
            .iter()
            .zip(marks)
            .fold(Board::new(), |board, (&pos, mark)| board.with_mark(pos, mark));

        let status = GameStatus::evaluate(&board, Player::O);
        assert_eq!(status.winner(), Some(Player::X));
        assert!(status.on_winning_line(Position::TopRight));
    }
}
