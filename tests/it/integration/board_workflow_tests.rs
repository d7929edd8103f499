//! Board command workflow tests.

use handboard::board::{Board, Command};
use handboard::types::ObjectKind;

use crate::helpers::{TestBoardBuilder, assert_object_count, board_with_boxes};

#[test]
fn test_create_grid_snaps_and_selects() {
    let mut board = Board::new();
    assert!(board.apply(Command::Create {
        kind: ObjectKind::Sticky,
        x: 103.0,
        y: 207.0,
    }));

    assert_object_count(&board, 1);
    let object = &board.objects()[0];
    assert_eq!((object.x, object.y), (100.0, 210.0));
    assert_eq!(object.width, 140.0);
    assert_eq!(object.color, "#f5d76e");
    assert_eq!(board.selected(), Some(object.id));
}

#[test]
fn test_ids_are_unique_and_monotonic() {
    let mut board = Board::new();
    let a = board.create_object(ObjectKind::Box, 0.0, 0.0);
    let b = board.create_object(ObjectKind::Circle, 100.0, 0.0);
    board.delete_object(a);
    let c = board.create_object(ObjectKind::Box, 200.0, 0.0);

    assert!(b > a);
    assert!(c > b);
}

#[test]
fn test_move_commits_snapped_position_and_guides() {
    let mut board = TestBoardBuilder::new()
        .with_object(ObjectKind::Box, 0.0, 0.0)
        .with_object(ObjectKind::Box, 400.0, 400.0)
        .build();
    let moved = board.objects()[1].id;

    // Box is 160x100; propose its left edge within threshold of the first
    // box's right edge at x=160.
    assert!(board.apply(Command::Move {
        id: moved,
        x: 168.0,
        y: 5.0,
    }));

    let object = board.get_object(moved).unwrap();
    assert_eq!(object.x, 160.0);
    assert_eq!(object.y, 0.0);
    assert!(!board.snap_guides().is_empty());
}

#[test]
fn test_move_missing_object_is_noop() {
    let mut board = board_with_boxes(1);
    let before = board.objects().to_vec();

    assert!(!board.apply(Command::Move {
        id: 999,
        x: 50.0,
        y: 50.0,
    }));
    assert_eq!(board.objects(), &before[..]);
}

#[test]
fn test_move_locked_object_is_noop() {
    let mut board = board_with_boxes(1);
    let id = board.objects()[0].id;
    assert!(board.apply(Command::Lock { id }));

    let before = board.objects().to_vec();
    assert!(!board.apply(Command::Move {
        id,
        x: 500.0,
        y: 500.0,
    }));
    assert_eq!(board.objects(), &before[..]);

    assert!(board.apply(Command::Unlock { id }));
    assert!(board.apply(Command::Move {
        id,
        x: 500.0,
        y: 500.0,
    }));
}

#[test]
fn test_delete_clears_selection_and_guides() {
    let mut board = board_with_boxes(2);
    let (a, b) = (board.objects()[0].id, board.objects()[1].id);

    // Drag b next to a so guides reference both.
    board.apply(Command::Move { id: b, x: 168.0, y: 4.0 });
    board.apply(Command::Select { id: Some(b) });
    board.apply(Command::Move { id: b, x: 168.0, y: 4.0 });
    assert!(!board.snap_guides().is_empty());

    assert!(board.apply(Command::Delete { id: a }));
    assert!(board.snap_guides().is_empty());
    assert_eq!(board.selected(), Some(b));

    assert!(board.apply(Command::Delete { id: b }));
    assert_eq!(board.selected(), None);
    assert_object_count(&board, 0);
}

#[test]
fn test_duplicate_copies_fields_and_offsets() {
    let mut board = Board::new();
    let id = board.create_object(ObjectKind::Circle, 100.0, 100.0);
    board.apply(Command::Recolor {
        id,
        color: "#ff0000".to_string(),
    });
    board.apply(Command::Retext {
        id,
        text: "origin".to_string(),
    });

    assert!(board.apply(Command::Duplicate { id }));
    assert_object_count(&board, 2);

    let copy = &board.objects()[1];
    assert_ne!(copy.id, id);
    assert_eq!((copy.x, copy.y), (120.0, 120.0));
    assert_eq!(copy.color, "#ff0000");
    assert_eq!(copy.text.as_deref(), Some("origin"));
    assert_eq!(board.selected(), Some(copy.id));
}

#[test]
fn test_duplicate_clears_stale_guides() {
    let mut board = board_with_boxes(2);
    let b = board.objects()[1].id;
    board.apply(Command::Move { id: b, x: 168.0, y: 4.0 });
    assert!(!board.snap_guides().is_empty());

    // Duplication changes the selection, so drag guides must not survive it.
    assert!(board.apply(Command::Duplicate { id: b }));
    assert!(board.snap_guides().is_empty());
}

#[test]
fn test_select_missing_object_is_rejected() {
    let mut board = board_with_boxes(1);
    assert!(!board.apply(Command::Select { id: Some(42) }));
    assert!(board.apply(Command::Select { id: None }));
    assert_eq!(board.selected(), None);
}

#[test]
fn test_pan_accumulates_and_clears_guides() {
    let mut board = board_with_boxes(2);
    let b = board.objects()[1].id;
    board.apply(Command::Move { id: b, x: 168.0, y: 4.0 });
    assert!(!board.snap_guides().is_empty());

    board.apply(Command::Pan { dx: 30.0, dy: -10.0 });
    board.apply(Command::Pan { dx: 5.0, dy: 5.0 });

    let view = board.view();
    assert_eq!((view.pan_x, view.pan_y), (35.0, -5.0));
    assert!(board.snap_guides().is_empty());
}

#[test]
fn test_zoom_clamps_to_bounds() {
    let mut board = Board::new();

    board.apply(Command::Zoom { delta: 10.0 });
    assert_eq!(board.view().zoom, 3.0);

    board.apply(Command::Zoom { delta: -10.0 });
    assert_eq!(board.view().zoom, 0.1);

    board.apply(Command::Zoom { delta: 0.4 });
    assert!((board.view().zoom - 0.5).abs() < 1e-9);
}

#[test]
fn test_reset_view() {
    let mut board = Board::new();
    board.apply(Command::Pan { dx: 120.0, dy: 80.0 });
    board.apply(Command::Zoom { delta: 1.0 });

    board.apply(Command::ResetView);
    let view = board.view();
    assert_eq!((view.pan_x, view.pan_y, view.zoom), (0.0, 0.0, 1.0));
}

#[test]
fn test_object_at_respects_z_order() {
    let mut board = Board::new();
    let bottom = board.create_object(ObjectKind::Box, 0.0, 0.0);
    let top = board.create_object(ObjectKind::Box, 50.0, 50.0);

    // Overlap region: the later insertion wins.
    assert_eq!(board.object_at(80.0, 60.0), Some(top));
    assert_eq!(board.object_at(10.0, 10.0), Some(bottom));
    assert_eq!(board.object_at(1000.0, 1000.0), None);
}

#[test]
fn test_nearest_object_search() {
    let mut board = Board::new();
    let id = board.create_object(ObjectKind::Box, 0.0, 0.0);

    assert_eq!(board.nearest_object(200.0, 50.0, 100.0), Some(id));
    assert_eq!(board.nearest_object(2000.0, 50.0, 100.0), None);
}
