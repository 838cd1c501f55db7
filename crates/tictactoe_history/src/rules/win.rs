//! Win detection logic for tic-tac-toe.

use super::super::{Board, Player, Position, Square};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// The eight winning lines, in the order they are checked.
///
/// Rows top to bottom, then columns left to right, then the two diagonals.
/// When a board holds more than one complete line the first one here wins.
pub const LINES: [[Position; 3]; 8] = [
    // Rows
    [Position::TopLeft, Position::TopCenter, Position::TopRight],
    [Position::MiddleLeft, Position::Center, Position::MiddleRight],
    [Position::BottomLeft, Position::BottomCenter, Position::BottomRight],
    // Columns
    [Position::TopLeft, Position::MiddleLeft, Position::BottomLeft],
    [Position::TopCenter, Position::Center, Position::BottomCenter],
    [Position::TopRight, Position::MiddleRight, Position::BottomRight],
    // Diagonals
    [Position::TopLeft, Position::Center, Position::BottomRight],
    [Position::TopRight, Position::Center, Position::BottomLeft],
];

/// A completed line and the player who owns it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct WinResult {
    winner: Player,
    line: [Position; 3],
}

impl WinResult {
    /// The player with three in a row.
    pub fn winner(&self) -> Player {
        self.winner
    }

    /// The three positions that make up the line.
    pub fn line(&self) -> [Position; 3] {
        self.line
    }

    /// Returns true if `pos` is part of the winning line.
    pub fn contains(&self, pos: Position) -> bool {
        self.line.contains(&pos)
    }
}

/// Evaluates the board for a completed line.
///
/// Returns the first line in [`LINES`] whose three squares hold the same
/// mark, or `None` if there is no such line.
#[instrument(skip(board), fields(occupied = board.occupied_count()))]
pub fn evaluate(board: &Board) -> Option<WinResult> {
    LINES.into_iter().find_map(|line| {
        let [a, b, c] = line;
        let square = board.get(a);
        match square {
            Square::Occupied(winner) if square == board.get(b) && square == board.get(c) => {
                Some(WinResult { winner, line })
            }
            _ => None,
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_winner_empty_board() {
        let board = Board::new();
        assert_eq!(evaluate(&board), None);
    }

    #[test]
    fn test_winner_top_row() {
        let board: Board = "XXX/OO./...".parse().unwrap();
        let result = evaluate(&board).unwrap();
        assert_eq!(result.winner(), Player::X);
        assert_eq!(
            result.line(),
            [Position::TopLeft, Position::TopCenter, Position::TopRight]
        );
    }

    #[test]
    fn test_winner_anti_diagonal() {
        let board: Board = "XXO/XO./O..".parse().unwrap();
        let result = evaluate(&board).unwrap();
        assert_eq!(result.winner(), Player::O);
        assert_eq!(
            result.line(),
            [Position::TopRight, Position::Center, Position::BottomLeft]
        );
        assert!(result.contains(Position::Center));
        assert!(!result.contains(Position::TopLeft));
    }

    #[test]
    fn test_no_winner_incomplete() {
        let board: Board = "XX./.O./...".parse().unwrap();
        assert_eq!(evaluate(&board), None);
    }

    #[test]
    fn test_mixed_line_is_not_a_win() {
        let board: Board = "XOX/.../...".parse().unwrap();
        assert_eq!(evaluate(&board), None);
    }

    #[test]
    fn test_first_line_in_order_wins_ties() {
        // Top row and left column are both X; rows are checked first.
        let board: Board = "XXX/X../X..".parse().unwrap();
        assert_eq!(evaluate(&board).unwrap().line(), LINES[0]);

        // Column beats diagonal.
        let board: Board = "O.X/O.X/O.X".parse().unwrap();
        assert_eq!(evaluate(&board).unwrap().line(), LINES[3]);
        assert_eq!(evaluate(&board).unwrap().winner(), Player::O);
    }
}
