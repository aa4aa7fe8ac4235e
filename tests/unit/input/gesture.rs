use super::*;

#[test]
fn threshold_is_exclusive() {
    assert_eq!(classify_gesture(-49.0, 0.0, 50.0), Gesture::None);
    assert_eq!(classify_gesture(-50.0, 0.0, 50.0), Gesture::None);
    assert_eq!(classify_gesture(-51.0, 0.0, 50.0), Gesture::Next);
    assert_eq!(classify_gesture(51.0, 0.0, 50.0), Gesture::Prev);
    assert_eq!(classify_gesture(49.0, 3.0, 50.0), Gesture::None);
}

#[test]
fn vertical_drags_never_navigate() {
    assert_eq!(classify_gesture(-80.0, 120.0, 50.0), Gesture::None);
    assert_eq!(classify_gesture(80.0, -80.0, 50.0), Gesture::None);
    assert_eq!(classify_gesture(80.0, -79.0, 50.0), Gesture::Prev);
}

#[test]
fn non_finite_input_is_ignored() {
    assert_eq!(classify_gesture(f64::NAN, 0.0, 50.0), Gesture::None);
    assert_eq!(classify_gesture(f64::NEG_INFINITY, 0.0, 50.0), Gesture::None);
}

#[test]
fn horizontal_drag_captures_scroll_and_navigates() {
    let mut t = SwipeTracker::new(50.0, 10.0);
    t.start(200.0, 100.0);
    assert_eq!(t.move_to(195.0, 101.0), ScrollIntent::PassThrough);
    assert_eq!(t.move_to(170.0, 102.0), ScrollIntent::Capture);
    assert_eq!(t.end(149.0, 103.0), Gesture::Next);
    assert!(!t.is_tracking());
}

#[test]
fn short_drag_does_not_navigate() {
    let mut t = SwipeTracker::new(50.0, 10.0);
    t.start(100.0, 0.0);
    assert_eq!(t.move_to(140.0, 0.0), ScrollIntent::Capture);
    assert_eq!(t.end(149.0, 0.0), Gesture::None);
}

#[test]
fn vertical_scroll_passes_through() {
    let mut t = SwipeTracker::new(50.0, 10.0);
    t.start(100.0, 100.0);
    assert_eq!(t.move_to(130.0, 300.0), ScrollIntent::PassThrough);
    assert_eq!(t.end(20.0, 400.0), Gesture::None);
}

#[test]
fn touch_without_moves_is_not_a_swipe() {
    let mut t = SwipeTracker::new(50.0, 10.0);
    t.start(0.0, 0.0);
    assert_eq!(t.end(200.0, 0.0), Gesture::None);
}

#[test]
fn end_or_move_without_start_is_ignored() {
    let mut t = SwipeTracker::new(50.0, 10.0);
    assert_eq!(t.move_to(100.0, 0.0), ScrollIntent::PassThrough);
    assert_eq!(t.end(100.0, 0.0), Gesture::None);
    t.start(0.0, 0.0);
    t.cancel();
    assert_eq!(t.end(-100.0, 0.0), Gesture::None);
}
