use super::*;
use crate::content::testimonial::default_records;

fn step(at_ms: u64, event: InputEvent) -> ScenarioStep {
    ScenarioStep { at_ms, event }
}

#[test]
fn prev_click_at_first_tick_resets_phase() {
    let scenario = Scenario {
        steps: vec![step(5_000, InputEvent::PrevClicked)],
        until_ms: Some(10_000),
    };
    let trace = replay(
        default_records().unwrap(),
        &CarouselConfig::default(),
        &scenario,
    )
    .unwrap();

    let summary: Vec<(u64, usize)> = trace.iter().map(|e| (e.at_ms, e.current)).collect();
    let expected: [(u64, usize); 4] = [(0, 0), (5_000, 1), (5_000, 0), (10_000, 1)];
    assert_eq!(summary, expected);
    assert_eq!(trace[0].cause, TraceCause::Mount);
    assert_eq!(trace[1].cause, TraceCause::Autoplay);
    assert!(matches!(trace[2].cause, TraceCause::Input { .. }));
    assert!(trace.iter().all(|e| e.rendered));
}

#[test]
fn hover_suspends_autoplay_in_trace() {
    let scenario = Scenario {
        steps: vec![
            step(1_000, InputEvent::PointerEntered),
            step(12_000, InputEvent::PointerLeft),
        ],
        until_ms: Some(17_000),
    };
    let trace = replay(
        default_records().unwrap(),
        &CarouselConfig::default(),
        &scenario,
    )
    .unwrap();

    assert_eq!(trace.len(), 4);
    assert!(!trace[1].autoplay_active);
    assert!(!trace[1].rendered);
    assert!(trace[2].autoplay_active);
    assert_eq!((trace[3].at_ms, trace[3].current), (17_000, 1));
}

#[test]
fn unordered_steps_are_rejected() {
    let scenario = Scenario {
        steps: vec![
            step(2_000, InputEvent::NextClicked),
            step(1_000, InputEvent::NextClicked),
        ],
        until_ms: None,
    };
    let err = replay(
        default_records().unwrap(),
        &CarouselConfig::default(),
        &scenario,
    )
    .unwrap_err();
    assert!(matches!(err, VitrineError::Validation(_)));
}

#[test]
fn until_before_last_step_is_rejected() {
    let scenario = Scenario {
        steps: vec![step(2_000, InputEvent::NextClicked)],
        until_ms: Some(1_000),
    };
    assert!(scenario.validate().is_err());
}

#[test]
fn overlong_sessions_are_rejected() {
    for (steps, until_ms) in [
        (vec![], Some(50_000_000_000)),
        (vec![step(u64::MAX, InputEvent::NextClicked)], None),
        (vec![step(1_000, InputEvent::NextClicked)], Some(MAX_SCENARIO_MS + 1)),
    ] {
        let scenario = Scenario { steps, until_ms };
        let err = replay(
            default_records().unwrap(),
            &CarouselConfig::default(),
            &scenario,
        )
        .unwrap_err();
        assert!(matches!(err, VitrineError::Validation(_)));
    }

    let full_day = Scenario {
        steps: vec![],
        until_ms: Some(MAX_SCENARIO_MS),
    };
    assert!(full_day.validate().is_ok());
}

#[test]
fn firing_budget_depends_on_interval() {
    let scenario = Scenario {
        steps: vec![],
        until_ms: Some(1_000_000),
    };
    let fast = CarouselConfig {
        autoplay_interval_ms: 1,
        ..CarouselConfig::default()
    };
    let err = replay(default_records().unwrap(), &fast, &scenario).unwrap_err();
    assert!(err.to_string().contains("autoplay firings"));

    let trace = replay(
        default_records().unwrap(),
        &CarouselConfig::default(),
        &scenario,
    )
    .unwrap();
    assert_eq!(trace.len(), 1 + 200);
}

#[test]
fn empty_records_are_an_error() {
    let err = replay(vec![], &CarouselConfig::default(), &Scenario::default()).unwrap_err();
    assert!(err.to_string().contains("at least one testimonial"));
}

#[test]
fn end_defaults_to_last_step() {
    let scenario = Scenario {
        steps: vec![step(7_000, InputEvent::AutoplayToggled)],
        until_ms: None,
    };
    assert_eq!(scenario.end_ms(), 7_000);
    assert_eq!(Scenario::default().end_ms(), 0);
}
