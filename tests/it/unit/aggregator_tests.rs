//! Gesture aggregator tests.

use handboard::gesture::{GestureAggregator, GestureSignal, resolve_gesture};

use crate::helpers::{fist_sample, open_sample, pinch_sample, pointing_sample, sample_at};

#[test]
fn test_both_pinching_resolves_pan() {
    let mut agg = GestureAggregator::new();
    let left = pinch_sample(0.2, 0.4);
    let right = pinch_sample(0.6, 0.8);

    assert_eq!(agg.resolve(Some(&left), Some(&right)), GestureSignal::Pan);
    let mid = agg.midpoint().unwrap();
    assert!((mid.0 - 0.4).abs() < 1e-9);
    assert!((mid.1 - 0.6).abs() < 1e-9);
}

#[test]
fn test_pan_beats_pointing() {
    // Both hands pinching while one also points: pan wins, never pointing.
    let mut left = pinch_sample(0.2, 0.2);
    left.is_pointing = true;
    let right = pinch_sample(0.8, 0.2);

    let mut agg = GestureAggregator::new();
    assert_eq!(agg.resolve(Some(&left), Some(&right)), GestureSignal::Pan);
}

#[test]
fn test_single_pinch_resolves_grab() {
    let mut agg = GestureAggregator::new();
    let left = pinch_sample(0.5, 0.5);

    assert_eq!(agg.resolve(Some(&left), None), GestureSignal::Grab);
    assert_eq!(agg.midpoint(), None);

    // The other hand present but not pinching still reads as grab.
    let right = open_sample(0.7, 0.5);
    assert_eq!(agg.resolve(Some(&left), Some(&right)), GestureSignal::Grab);
}

#[test]
fn test_grab_beats_pointing() {
    let left = pinch_sample(0.5, 0.5);
    let right = pointing_sample(0.7, 0.5);

    let mut agg = GestureAggregator::new();
    assert_eq!(agg.resolve(Some(&left), Some(&right)), GestureSignal::Grab);
}

#[test]
fn test_either_hand_pointing() {
    let mut agg = GestureAggregator::new();
    let pointing = pointing_sample(0.5, 0.5);
    let idle = sample_at(0.2, 0.2);

    assert_eq!(agg.resolve(Some(&pointing), None), GestureSignal::Pointing);
    assert_eq!(
        agg.resolve(Some(&idle), Some(&pointing)),
        GestureSignal::Pointing
    );
}

#[test]
fn test_release_hysteresis_on_lost_hands() {
    let mut agg = GestureAggregator::new();
    let pinch = pinch_sample(0.5, 0.5);

    assert_eq!(agg.resolve(Some(&pinch), None), GestureSignal::Grab);
    // Both hands vanish: the grab must resolve to an explicit release.
    assert_eq!(agg.resolve(None, None), GestureSignal::Release);
    // A further empty frame is plain none; the hysteresis is one frame deep.
    assert_eq!(agg.resolve(None, None), GestureSignal::None);
}

#[test]
fn test_release_hysteresis_on_open_hand() {
    let mut agg = GestureAggregator::new();
    let pinch = pinch_sample(0.5, 0.5);
    let open = open_sample(0.5, 0.5);

    assert_eq!(agg.resolve(None, Some(&pinch)), GestureSignal::Grab);
    assert_eq!(agg.resolve(None, Some(&open)), GestureSignal::Release);
}

#[test]
fn test_single_open_hand_is_release() {
    let mut agg = GestureAggregator::new();
    let open = open_sample(0.5, 0.5);

    assert_eq!(agg.resolve(Some(&open), None), GestureSignal::Release);
}

#[test]
fn test_two_open_hands_without_grab_history_is_none() {
    // Rule 5 needs exactly one hand present; rule 4 needs a prior grab.
    let mut agg = GestureAggregator::new();
    let open = open_sample(0.5, 0.5);

    assert_eq!(agg.resolve(Some(&open), Some(&open)), GestureSignal::None);
}

#[test]
fn test_fists_resolve_none() {
    let mut agg = GestureAggregator::new();
    let fist = fist_sample(0.5, 0.5);

    assert_eq!(agg.resolve(Some(&fist), Some(&fist)), GestureSignal::None);
}

#[test]
fn test_midpoint_resets_when_pan_ends() {
    let mut agg = GestureAggregator::new();
    let left = pinch_sample(0.2, 0.4);
    let right = pinch_sample(0.6, 0.8);

    agg.resolve(Some(&left), Some(&right));
    assert!(agg.midpoint().is_some());

    agg.resolve(Some(&left), None);
    assert_eq!(agg.midpoint(), None);
}

#[test]
fn test_decision_table_is_deterministic() {
    let samples: [Option<handboard::types::HandSample>; 5] = [
        None,
        Some(sample_at(0.5, 0.5)),
        Some(pinch_sample(0.5, 0.5)),
        Some(open_sample(0.5, 0.5)),
        Some(pointing_sample(0.5, 0.5)),
    ];
    let previous = [
        GestureSignal::Grab,
        GestureSignal::Pan,
        GestureSignal::Pointing,
        GestureSignal::Release,
        GestureSignal::None,
    ];

    for left in &samples {
        for right in &samples {
            for prev in previous {
                let first = resolve_gesture(left.as_ref(), right.as_ref(), prev);
                let second = resolve_gesture(left.as_ref(), right.as_ref(), prev);
                assert_eq!(first, second);
            }
        }
    }
}

#[test]
fn test_reset_clears_hysteresis() {
    let mut agg = GestureAggregator::new();
    let pinch = pinch_sample(0.5, 0.5);

    agg.resolve(Some(&pinch), None);
    agg.reset();
    // No grab in memory, so an empty frame is none, not release.
    assert_eq!(agg.resolve(None, None), GestureSignal::None);
}
