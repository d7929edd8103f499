//! Frame scheduler tests.

use handboard::gesture::FrameScheduler;

#[test]
fn test_single_frame_lifecycle() {
    let mut scheduler = FrameScheduler::new();
    assert!(scheduler.begin_frame());
    scheduler.end_frame();

    assert_eq!(scheduler.processed(), 1);
    assert_eq!(scheduler.dropped(), 0);
}

#[test]
fn test_overlapping_frame_is_dropped() {
    let mut scheduler = FrameScheduler::new();
    assert!(scheduler.begin_frame());

    // A frame arriving while one is in flight is dropped, not queued.
    assert!(!scheduler.begin_frame());
    assert!(!scheduler.begin_frame());
    assert_eq!(scheduler.dropped(), 2);

    scheduler.end_frame();
    assert!(scheduler.begin_frame());
}

#[test]
fn test_stop_discards_in_flight_and_blocks() {
    let mut scheduler = FrameScheduler::new();
    assert!(scheduler.begin_frame());

    scheduler.stop();
    assert!(!scheduler.is_active());
    // The discarded frame never counts as processed.
    assert_eq!(scheduler.processed(), 0);
    assert!(!scheduler.begin_frame());

    scheduler.start();
    assert!(scheduler.begin_frame());
    scheduler.end_frame();
    assert_eq!(scheduler.processed(), 1);
}

#[test]
fn test_default_scheduler_accepts_frames() {
    let mut scheduler = FrameScheduler::default();
    assert!(scheduler.is_active());
    assert!(scheduler.begin_frame());
}

#[test]
fn test_end_without_begin_is_harmless() {
    let mut scheduler = FrameScheduler::new();
    scheduler.end_frame();
    assert_eq!(scheduler.processed(), 0);
}
