//! Cursor invariant: the current move points into the history.

use super::super::GameEngine;
use super::Invariant;

/// Invariant: `0 <= current_move < history.len()`.
pub struct CursorInBoundsInvariant;

impl Invariant<GameEngine> for CursorInBoundsInvariant {
    fn holds(engine: &GameEngine) -> bool {
        engine.current_move() < engine.history().len()
    }

    fn description() -> &'static str {
        "Current move points into the history"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_engine_holds() {
        assert!(CursorInBoundsInvariant::holds(&GameEngine::new()));
    }

    #[test]
    fn test_rejected_jump_keeps_cursor_in_bounds() {
        let mut engine = GameEngine::new();
        assert!(engine.jump_to(3).is_err());
        assert!(CursorInBoundsInvariant::holds(&engine));
    }

    #[test]
    fn test_cursor_past_end_violates() {
        let mut engine = GameEngine::new();
        engine.current_move = 1;
        assert!(!CursorInBoundsInvariant::holds(&engine));
    }
}
