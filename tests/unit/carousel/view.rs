use super::*;

#[test]
fn exactly_one_active_slide_and_indicator() {
    let vm = ViewModel::build(2, 5, true);
    assert_eq!(vm.current, 2);
    assert_eq!(vm.track_offset_percent, -200);
    assert_eq!(vm.active_indicator_count(), 1);
    assert!(vm.indicators[2].active);
    for slide in &vm.slides {
        assert_eq!(slide.active, slide.index == 2);
        assert_eq!(slide.aria_hidden, slide.index != 2);
    }
}

#[test]
fn first_slide_has_zero_offset() {
    let vm = ViewModel::build(0, 1, false);
    assert_eq!(vm.track_offset_percent, 0);
    assert!(!vm.autoplay_playing);
    assert!(!vm.slides[0].aria_hidden);
}

#[test]
fn recording_view_keeps_frames_and_release_flag() {
    let mut v = RecordingView::new();
    v.render(&ViewModel::build(0, 3, true));
    v.render(&ViewModel::build(1, 3, true));
    assert_eq!(v.render_count(), 2);
    assert_eq!(v.last().unwrap().current, 1);
    assert!(!v.is_released());
    v.release();
    assert!(v.is_released());
}
