//! Ply invariant: history index equals the number of marks on the board.

use super::super::GameEngine;
use super::Invariant;

/// Invariant: record `i` holds exactly `i` marks.
///
/// Record 0 is the empty board with no move; every later record names the
/// cell it played. Because of this, the player to move can be derived from
/// the current move index alone.
pub struct PlyCountInvariant;

impl Invariant<GameEngine> for PlyCountInvariant {
    fn holds(engine: &GameEngine) -> bool {
        engine.history().iter().enumerate().all(|(i, record)| {
            record.board().occupied_count() == i && record.position().is_some() == (i > 0)
        })
    }

    fn description() -> &'static str {
        "Each history index equals the number of marks on its board"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Player, Position};

    #[test]
    fn test_holds_through_a_game() {
        let mut engine = GameEngine::new();
        for cell in [4, 0, 8, 2] {
            engine.apply_move(cell).unwrap();
            assert!(PlyCountInvariant::holds(&engine));
        }
    }

    #[test]
    fn test_extra_mark_violates() {
        let mut engine = GameEngine::replay(&[Position::Center]).unwrap();
        engine.history.records[1].board = engine.history[1]
            .board()
            .with_mark(Position::BottomLeft, Player::O);
        assert!(!PlyCountInvariant::holds(&engine));
    }

    #[test]
    fn test_start_with_position_violates() {
        let mut engine = GameEngine::new();
        engine.history.records[0].position = Some(Position::Center);
        assert!(!PlyCountInvariant::holds(&engine));
    }
}
