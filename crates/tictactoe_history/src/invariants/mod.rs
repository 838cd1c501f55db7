//! First-class invariants for the game engine.
//!
//! Invariants are logical properties that must hold after every operation.
//! A violation means a bug in the engine, never a user mistake, so the engine
//! asserts them in debug builds. They are testable independently and serve as
//! documentation of what the history model guarantees.

use super::{GameEngine, MoveError};
use tracing::{instrument, warn};

/// A logical property that must hold for a given state.
pub trait Invariant<S> {
    /// Checks if the invariant holds for the given state.
    fn holds(state: &S) -> bool;

    /// Human-readable description of the invariant.
    fn description() -> &'static str;
}

/// Violation of an invariant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvariantViolation {
    /// Description of the violated invariant.
    pub description: String,
}

impl InvariantViolation {
    /// Creates a new invariant violation.
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
        }
    }
}

/// A set of invariants that can be checked together.
///
/// Implementations are provided for tuples.
pub trait InvariantSet<S> {
    /// Checks all invariants in the set.
    ///
    /// Returns Ok(()) if all invariants hold, or Err with a list of
    /// violations if any invariant fails.
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>>;
}

fn collect<S, I: Invariant<S>>(state: &S, violations: &mut Vec<InvariantViolation>) {
    if !I::holds(state) {
        violations.push(InvariantViolation::new(I::description()));
    }
}

impl<S, I1, I2> InvariantSet<S> for (I1, I2)
where
    I1: Invariant<S>,
    I2: Invariant<S>,
{
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
        let mut violations = Vec::new();
        collect::<S, I1>(state, &mut violations);
        collect::<S, I2>(state, &mut violations);
        if violations.is_empty() { Ok(()) } else { Err(violations) }
    }
}

impl<S, I1, I2, I3> InvariantSet<S> for (I1, I2, I3)
where
    I1: Invariant<S>,
    I2: Invariant<S>,
    I3: Invariant<S>,
{
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
        let mut violations = Vec::new();
        collect::<S, I1>(state, &mut violations);
        collect::<S, I2>(state, &mut violations);
        collect::<S, I3>(state, &mut violations);
        if violations.is_empty() { Ok(()) } else { Err(violations) }
    }
}

pub mod cursor_in_bounds;
pub mod ply_count;
pub mod single_mark;

pub use cursor_in_bounds::CursorInBoundsInvariant;
pub use ply_count::PlyCountInvariant;
pub use single_mark::SingleMarkInvariant;

/// All engine invariants as a composable set.
pub type EngineInvariants = (
    CursorInBoundsInvariant,
    PlyCountInvariant,
    SingleMarkInvariant,
);

/// Checks every engine invariant, folding violations into a [`MoveError`].
#[instrument(skip(engine))]
pub fn verify(engine: &GameEngine) -> Result<(), MoveError> {
    EngineInvariants::check_all(engine).map_err(|violations| {
        let descriptions = violations
            .iter()
            .map(|v| v.description.as_str())
            .collect::<Vec<_>>()
            .join("; ");
        warn!(%descriptions, "Engine invariants violated");
        MoveError::InvariantViolation(descriptions)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Player, Position};

    #[test]
    fn test_invariant_set_holds_for_new_game() {
        let engine = GameEngine::new();
        assert!(EngineInvariants::check_all(&engine).is_ok());
        assert!(verify(&engine).is_ok());
    }

    #[test]
    fn test_invariant_set_holds_after_branching() {
        let mut engine = GameEngine::replay(&[
            Position::TopLeft,
            Position::Center,
            Position::TopRight,
        ])
        .unwrap();
        engine.jump_to(1).unwrap();
        engine.apply_move(8).unwrap();
        assert!(verify(&engine).is_ok());
    }

    #[test]
    fn test_verify_reports_every_violation() {
        let mut engine = GameEngine::replay(&[Position::Center]).unwrap();
        // An extra O mark that no history record accounts for.
        engine.history.records[1].board = engine.history[1]
            .board()
            .with_mark(Position::TopLeft, Player::O);
        engine.current_move = 7;

        let violations = EngineInvariants::check_all(&engine).unwrap_err();
        assert_eq!(violations.len(), 3);
        assert!(matches!(
            verify(&engine),
            Err(MoveError::InvariantViolation(_))
        ));
    }

    #[test]
    fn test_two_invariants_as_set() {
        let engine = GameEngine::new();
        type TwoInvariants = (CursorInBoundsInvariant, PlyCountInvariant);
        assert!(TwoInvariants::check_all(&engine).is_ok());
    }
}
