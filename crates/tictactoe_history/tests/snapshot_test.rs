//! Snapshot behaviour as seen by a renderer.

use tictactoe_history::{GameEngine, Snapshot, SortOrder};

#[test]
fn test_snapshot_is_idempotent() {
    let mut engine = GameEngine::new();
    engine.apply_move(4).unwrap();
    engine.apply_move(0).unwrap();
    engine.jump_to(1).unwrap();

    assert_eq!(engine.snapshot(), engine.snapshot());
}

#[test]
fn test_current_entry_follows_jumps_in_either_order() {
    let mut engine = GameEngine::with_sort_order(SortOrder::Descending);
    for cell in [4, 0, 8] {
        engine.apply_move(cell).unwrap();
    }
    engine.jump_to(1).unwrap();

    let snapshot = engine.snapshot();
    let current: Vec<usize> = snapshot
        .moves()
        .iter()
        .filter(|m| *m.is_current())
        .map(|m| *m.target())
        .collect();
    assert_eq!(current, vec![1]);
    assert_eq!(snapshot.current_move_text(), "You are at the move # 1");
    assert_eq!(snapshot.sort_toggle_label(), "Sort by: Ascending");

    // Later moves remain listed until a new move is played.
    assert_eq!(snapshot.moves().len(), 4);
}

#[test]
fn test_toggle_twice_restores_snapshot() {
    let mut engine = GameEngine::new();
    engine.apply_move(2).unwrap();
    let before = engine.snapshot();

    engine.toggle_sort_order();
    assert_ne!(engine.snapshot(), before);
    engine.toggle_sort_order();
    assert_eq!(engine.snapshot(), before);
}

#[test]
fn test_snapshot_serializes_for_renderers() {
    let mut engine = GameEngine::new();
    for cell in [0, 1, 4, 2, 8] {
        engine.apply_move(cell).unwrap();
    }
    let snapshot = engine.snapshot();

    let json = serde_json::to_value(&snapshot).unwrap();
    assert_eq!(json["status_text"], "Winner: X");
    assert_eq!(json["sort_order"], "ascending");
    assert_eq!(json["moves"][0]["label"], "Go to game start");
    assert_eq!(json["winning_line"][1], "Center");

    let back: Snapshot = serde_json::from_value(json).unwrap();
    assert_eq!(back, snapshot);
}
