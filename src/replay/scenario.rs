use crate::{
    carousel::config::CarouselConfig,
    carousel::controller::Carousel,
    carousel::view::RecordingView,
    content::testimonial::{TestimonialRecord, validate_records},
    foundation::core::Millis,
    foundation::error::{VitrineError, VitrineResult},
    input::router::{InputEvent, InputRouter},
    timing::scheduler::{ManualScheduler, Scheduler},
};

/// Longest session a scenario may script: one day of virtual time.
pub const MAX_SCENARIO_MS: u64 = 24 * 60 * 60 * 1_000;

/// Most autoplay firings a single replay may have to deliver.
pub const MAX_REPLAY_FIRINGS: u64 = 100_000;

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
/// One timed UI event.
pub struct ScenarioStep {
    /// When the event happens, in milliseconds since mount.
    pub at_ms: u64,
    /// The event.
    pub event: InputEvent,
}

#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
/// A scripted session against a freshly mounted carousel.
pub struct Scenario {
    /// Events in non-decreasing time order.
    #[serde(default)]
    pub steps: Vec<ScenarioStep>,
    /// Keep the clock running until this time after the last step. Defaults to the last step.
    #[serde(default)]
    pub until_ms: Option<u64>,
}

impl Scenario {
    /// Steps must be time-ordered, `until_ms` must not precede the last step, and the whole
    /// session must end within [`MAX_SCENARIO_MS`].
    pub fn validate(&self) -> VitrineResult<()> {
        for pair in self.steps.windows(2) {
            if pair[1].at_ms < pair[0].at_ms {
                return Err(VitrineError::validation(format!(
                    "scenario step at {}ms comes after a step at {}ms",
                    pair[1].at_ms, pair[0].at_ms
                )));
            }
        }
        if let (Some(until), Some(last)) = (self.until_ms, self.steps.last())
            && until < last.at_ms
        {
            return Err(VitrineError::validation(format!(
                "until_ms ({until}) is before the last step ({}ms)",
                last.at_ms
            )));
        }
        if self.end_ms() > MAX_SCENARIO_MS {
            return Err(VitrineError::validation(format!(
                "scenario ends at {}ms, past the {MAX_SCENARIO_MS}ms limit",
                self.end_ms()
            )));
        }
        Ok(())
    }

    /// Time the replay stops at.
    pub fn end_ms(&self) -> u64 {
        let last = self.steps.last().map_or(0, |s| s.at_ms);
        self.until_ms.unwrap_or(last).max(last)
    }
}

#[derive(Clone, Debug, PartialEq, serde::Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
/// What produced a trace entry.
pub enum TraceCause {
    /// Initial render.
    Mount,
    /// An autoplay firing.
    Autoplay,
    /// A scripted event.
    Input {
        /// The event.
        event: InputEvent,
    },
}

#[derive(Clone, Debug, PartialEq, serde::Serialize)]
/// Carousel state right after one cause was handled.
pub struct TraceEntry {
    /// Virtual time.
    pub at_ms: u64,
    /// What happened.
    pub cause: TraceCause,
    /// Visible slide afterwards.
    pub current: usize,
    /// Whether an autoplay timer was scheduled afterwards.
    pub autoplay_active: bool,
    /// Whether the view was re-rendered.
    pub rendered: bool,
}

struct Recorder {
    entries: Vec<TraceEntry>,
    seen_renders: usize,
}

impl Recorder {
    fn record(&mut self, carousel: &Carousel<ManualScheduler, RecordingView>, cause: TraceCause) {
        let renders = carousel.view().map_or(0, RecordingView::render_count);
        self.entries.push(TraceEntry {
            at_ms: carousel.scheduler().now().as_u64(),
            cause,
            current: carousel.current_index(),
            autoplay_active: carousel.autoplay_active(),
            rendered: renders > self.seen_renders,
        });
        self.seen_renders = renders;
    }

    fn pump(&mut self, carousel: &mut Carousel<ManualScheduler, RecordingView>, until: Millis) {
        while carousel.fire_next(until).is_some() {
            self.record(carousel, TraceCause::Autoplay);
        }
    }
}

/// Run `scenario` against a carousel over `records` on a virtual clock.
///
/// Unlike [`Carousel::mount`], which degrades to an inert carousel, replay reports bad input
/// as errors: an empty or invalid record list, an invalid config, an unordered or overlong
/// scenario, or one whose span would need more than [`MAX_REPLAY_FIRINGS`] autoplay firings.
#[tracing::instrument(skip_all, fields(records = records.len(), steps = scenario.steps.len()))]
pub fn replay(
    records: Vec<TestimonialRecord>,
    config: &CarouselConfig,
    scenario: &Scenario,
) -> VitrineResult<Vec<TraceEntry>> {
    config.validate()?;
    scenario.validate()?;
    let firings = scenario.end_ms() / config.autoplay_interval_ms;
    if firings > MAX_REPLAY_FIRINGS {
        return Err(VitrineError::validation(format!(
            "scenario spans up to {firings} autoplay firings (limit {MAX_REPLAY_FIRINGS})"
        )));
    }
    validate_records(&records)?;
    if records.is_empty() {
        return Err(VitrineError::validation("replay needs at least one testimonial"));
    }

    let mut carousel = Carousel::mount(
        records,
        Some(RecordingView::new()),
        ManualScheduler::new(),
        config.clone(),
    );
    let mut router = InputRouter::new(config);
    let mut recorder = Recorder {
        entries: Vec::new(),
        seen_renders: 0,
    };
    recorder.record(&carousel, TraceCause::Mount);

    for step in &scenario.steps {
        let at = Millis(step.at_ms);
        recorder.pump(&mut carousel, at);
        carousel.advance_to(at);
        router.dispatch(&step.event, &mut carousel);
        recorder.record(
            &carousel,
            TraceCause::Input {
                event: step.event.clone(),
            },
        );
    }

    let end = Millis(scenario.end_ms());
    recorder.pump(&mut carousel, end);
    carousel.advance_to(end);
    carousel.destroy();

    tracing::debug!(entries = recorder.entries.len(), "replay finished");
    Ok(recorder.entries)
}

#[cfg(test)]
#[path = "../../tests/unit/replay/scenario.rs"]
mod tests;
