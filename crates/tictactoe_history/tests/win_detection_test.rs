//! Exhaustive checks of win and draw detection over every 3x3 board.

use tictactoe_history::rules::{self, LINES};
use tictactoe_history::{Board, GameStatus, Player, Square};

/// Every assignment of Empty/X/O to the nine squares.
fn all_boards() -> impl Iterator<Item = Board> {
    (0..3usize.pow(9)).map(|mut n| {
        let mut squares = [Square::Empty; 9];
        for square in &mut squares {
            *square = match n % 3 {
                0 => Square::Empty,
                1 => Square::Occupied(Player::X),
                _ => Square::Occupied(Player::O),
            };
            n /= 3;
        }
        Board::from_squares(squares)
    })
}

#[test]
fn test_evaluate_finds_first_complete_line() {
    for board in all_boards() {
        let expected = LINES.iter().find(|line| {
            let [a, b, c] = **line;
            board.get(a) != Square::Empty
                && board.get(a) == board.get(b)
                && board.get(a) == board.get(c)
        });

        match (rules::evaluate(&board), expected) {
            (Some(result), Some(line)) => {
                assert_eq!(result.line(), *line, "board:\n{}", board);
                assert_eq!(
                    Square::Occupied(result.winner()),
                    board.get(line[0]),
                    "board:\n{}",
                    board
                );
            }
            (None, None) => {}
            (got, want) => panic!("board:\n{}\ngot {:?}, want {:?}", board, got, want),
        }
    }
}

#[test]
fn test_full_boards_without_line_are_draws() {
    let mut draws = 0;
    for board in all_boards() {
        let full = board.occupied_count() == 9;
        let won = rules::evaluate(&board).is_some();

        assert_eq!(rules::is_full(&board), full);
        assert_eq!(rules::is_draw(&board), full && !won);
        if full && !won {
            draws += 1;
            let status = rules::status(&board, Player::O);
            assert_eq!(status, GameStatus::Draw);
            assert_eq!(status.to_string(), "It's a draw!");
        }
    }
    assert!(draws > 0);
}

#[test]
fn test_boards_with_empty_squares_and_no_line_are_in_progress() {
    for board in all_boards() {
        if board.occupied_count() < 9 && rules::evaluate(&board).is_none() {
            assert_eq!(
                rules::status(&board, Player::X),
                GameStatus::InProgress { next: Player::X }
            );
        }
    }
}
