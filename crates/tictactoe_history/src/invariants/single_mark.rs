//! Single-mark invariant: consecutive records differ by one correct mark.

use super::super::{GameEngine, Player, Square};
use super::Invariant;

/// Invariant: record `i` equals record `i - 1` plus one mark.
///
/// The only changed square is the record's own position, and it holds the
/// mark of the player whose turn it was (X on odd moves, O on even ones).
/// Boards are never edited after they enter the history, so this holds for
/// every pair, not just the latest.
pub struct SingleMarkInvariant;

impl Invariant<GameEngine> for SingleMarkInvariant {
    fn holds(engine: &GameEngine) -> bool {
        engine
            .history()
            .records()
            .windows(2)
            .enumerate()
            .all(|(ply, pair)| {
                let (before, after) = (&pair[0], &pair[1]);
                match *after.position() {
                    Some(pos) => {
                        before.board().diff(after.board()) == [pos]
                            && after.board().get(pos) == Square::Occupied(Player::for_ply(ply))
                    }
                    None => false,
                }
            })
    }

    fn description() -> &'static str {
        "Consecutive history records differ by exactly one mark of the player to move"
    }
}
