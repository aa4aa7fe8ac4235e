use tracing::{debug, warn};

use crate::{
    carousel::config::{AutoplayPhase, CarouselConfig},
    carousel::state::CarouselState,
    carousel::view::{CarouselView, ViewModel},
    content::testimonial::{TestimonialRecord, validate_records},
    foundation::core::Millis,
    timing::scheduler::{ManualScheduler, Scheduler, TimerId},
};

/// Lifecycle of a [`Carousel`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CarouselStatus {
    /// Mounting failed; the carousel never renders and never schedules.
    Inert,
    /// Mounted and accepting commands.
    Running,
    /// [`Carousel::destroy`] was called; every operation is a no-op.
    Destroyed,
}

/// The command surface UI event sources drive a carousel through.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(tag = "command", content = "index", rename_all = "snake_case")]
pub enum Command {
    /// Show the next slide, wrapping to the first.
    Next,
    /// Show the previous slide, wrapping to the last.
    Prev,
    /// Jump to a slide; out-of-range indices are ignored.
    GoTo(usize),
    /// Flip the user's autoplay preference.
    ToggleAutoplay,
    /// Transiently suspend autoplay (hover, touch drag).
    PauseAutoplay,
    /// End a transient suspension.
    ResumeAutoplay,
}

#[derive(Clone, Copy, Debug)]
struct Autoplay {
    /// The single live timer. Cleared and cancelled before any new one is scheduled.
    timer: Option<TimerId>,
    /// The user's preference, flipped only by the play/pause control.
    enabled: bool,
}

/// Testimonials carousel controller.
///
/// Owns the slide state, the autoplay timer handle and the view bound to its container.
/// All operations run to completion synchronously; the only asynchronous input is the
/// recurring autoplay timer, whose firings the host delivers through [`Carousel::on_timer`].
///
/// Guarantees:
/// - the current index is always in `0..len`;
/// - at most one autoplay timer is live on the scheduler at any moment;
/// - a firing for any timer other than the live one never changes state;
/// - after [`Carousel::destroy`] nothing renders or schedules again.
#[derive(Debug)]
pub struct Carousel<S: Scheduler, V: CarouselView> {
    scheduler: S,
    view: Option<V>,
    state: Option<CarouselState>,
    config: CarouselConfig,
    autoplay: Autoplay,
    status: CarouselStatus,
}

impl<S: Scheduler, V: CarouselView> Carousel<S, V> {
    /// Bind a carousel to its container and start it.
    ///
    /// A missing container, an empty or invalid record list, or an invalid config logs a
    /// warning and yields an [`CarouselStatus::Inert`] carousel: no timer, no render.
    /// Otherwise slide 0 is rendered and, when `autoplay_on_start` is set, the autoplay timer
    /// is started.
    pub fn mount(
        records: Vec<TestimonialRecord>,
        container: Option<V>,
        scheduler: S,
        config: CarouselConfig,
    ) -> Self {
        let mut carousel = Self {
            scheduler,
            view: container,
            state: None,
            config,
            autoplay: Autoplay {
                timer: None,
                enabled: false,
            },
            status: CarouselStatus::Inert,
        };

        if let Err(err) = carousel.config.validate() {
            warn!(%err, "testimonials carousel not started: invalid config");
            return carousel;
        }
        if carousel.view.is_none() {
            warn!("testimonials carousel container not found");
            return carousel;
        }
        if let Err(err) = validate_records(&records) {
            warn!(%err, "testimonials carousel not started: invalid records");
            return carousel;
        }
        let Some(state) = CarouselState::new(records) else {
            warn!("testimonials carousel not started: no testimonials to show");
            return carousel;
        };

        carousel.state = Some(state);
        carousel.status = CarouselStatus::Running;
        carousel.autoplay.enabled = carousel.config.autoplay_on_start;
        if carousel.autoplay.enabled {
            carousel.start_timer();
        }
        carousel.render();
        carousel
    }

    /// Current lifecycle status.
    pub fn status(&self) -> CarouselStatus {
        self.status
    }

    /// Whether the carousel accepts commands.
    pub fn is_running(&self) -> bool {
        self.status == CarouselStatus::Running
    }

    /// Visible slide; `0` for an inert carousel.
    pub fn current_index(&self) -> usize {
        self.state.as_ref().map_or(0, CarouselState::current)
    }

    /// Number of slides; `0` for an inert carousel.
    pub fn len(&self) -> usize {
        self.state.as_ref().map_or(0, CarouselState::len)
    }

    /// Whether the carousel has no slides (inert).
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// The visible record.
    pub fn current_record(&self) -> Option<&TestimonialRecord> {
        self.state.as_ref().map(CarouselState::current_item)
    }

    /// All records, in slide order.
    pub fn records(&self) -> &[TestimonialRecord] {
        self.state
            .as_ref()
            .map(CarouselState::items)
            .unwrap_or_default()
    }

    /// True iff an autoplay timer is currently scheduled.
    pub fn autoplay_active(&self) -> bool {
        self.autoplay.timer.is_some()
    }

    /// The user's autoplay preference, as set at mount and by [`Carousel::toggle_autoplay`].
    pub fn autoplay_enabled(&self) -> bool {
        self.autoplay.enabled
    }

    /// Handle of the live autoplay timer.
    pub fn autoplay_timer(&self) -> Option<TimerId> {
        self.autoplay.timer
    }

    /// Fixed autoplay period.
    pub fn autoplay_interval(&self) -> Millis {
        self.config.autoplay_interval()
    }

    /// Active configuration.
    pub fn config(&self) -> &CarouselConfig {
        &self.config
    }

    /// The view bound at mount, if any.
    pub fn view(&self) -> Option<&V> {
        self.view.as_ref()
    }

    /// The scheduler the autoplay timer runs on.
    pub fn scheduler(&self) -> &S {
        &self.scheduler
    }

    /// View model for the current state, while running.
    pub fn view_model(&self) -> Option<ViewModel> {
        if !self.is_running() {
            return None;
        }
        let state = self.state.as_ref()?;
        Some(ViewModel::build(
            state.current(),
            state.len(),
            self.autoplay.enabled,
        ))
    }

    /// Show the next slide, wrapping to the first.
    pub fn next_slide(&mut self) {
        if let Some(state) = self.live_state("next_slide") {
            state.next();
            self.after_manual_navigation();
        }
    }

    /// Show the previous slide, wrapping to the last.
    pub fn prev_slide(&mut self) {
        if let Some(state) = self.live_state("prev_slide") {
            state.prev();
            self.after_manual_navigation();
        }
    }

    /// Jump to `index`. Indices outside `0..len` are ignored.
    pub fn go_to_slide(&mut self, index: usize) {
        let Some(state) = self.live_state("go_to_slide") else {
            return;
        };
        if !state.go_to(index) {
            debug!(index, len = state.len(), "ignoring out-of-range slide index");
            return;
        }
        self.after_manual_navigation();
    }

    /// Flip the user's autoplay preference.
    ///
    /// Turning it off cancels the timer. Turning it on schedules a fresh timer right away,
    /// even during a transient pause.
    pub fn toggle_autoplay(&mut self) {
        if !self.is_running() {
            debug!(status = ?self.status, "ignoring toggle_autoplay");
            return;
        }
        if self.autoplay.enabled {
            self.autoplay.enabled = false;
            self.stop_timer();
        } else {
            self.autoplay.enabled = true;
            self.start_timer();
        }
        self.render();
    }

    /// Suspend autoplay without touching the user's preference. Idempotent.
    pub fn pause_autoplay(&mut self) {
        if !self.is_running() {
            return;
        }
        self.stop_timer();
    }

    /// End a transient suspension: restart the timer if the preference is on and no timer is
    /// pending. Never creates a second timer.
    pub fn resume_autoplay(&mut self) {
        if !self.is_running() {
            return;
        }
        if self.autoplay.enabled && self.autoplay.timer.is_none() {
            self.start_timer();
        }
    }

    /// Apply one [`Command`].
    pub fn apply(&mut self, command: Command) {
        match command {
            Command::Next => self.next_slide(),
            Command::Prev => self.prev_slide(),
            Command::GoTo(index) => self.go_to_slide(index),
            Command::ToggleAutoplay => self.toggle_autoplay(),
            Command::PauseAutoplay => self.pause_autoplay(),
            Command::ResumeAutoplay => self.resume_autoplay(),
        }
    }

    /// Deliver a timer firing.
    ///
    /// Advances one slide when `id` is the live autoplay timer. Firings for cancelled or
    /// foreign timers are dropped (and the id cancelled, in case the host still holds it).
    /// Returns whether the carousel advanced.
    pub fn on_timer(&mut self, id: TimerId) -> bool {
        if !self.is_running() || self.autoplay.timer != Some(id) {
            debug!(?id, status = ?self.status, "dropping stale autoplay firing");
            self.scheduler.cancel(id);
            return false;
        }
        let Some(state) = self.state.as_mut() else {
            return false;
        };
        state.next();
        self.render();
        true
    }

    /// Stop the carousel for good: cancel the timer and release the view.
    ///
    /// Calling it again, or calling any other operation afterwards, does nothing.
    pub fn destroy(&mut self) {
        if self.status == CarouselStatus::Destroyed {
            return;
        }
        self.stop_timer();
        if self.status == CarouselStatus::Running
            && let Some(view) = self.view.as_mut()
        {
            view.release();
        }
        self.status = CarouselStatus::Destroyed;
    }

    fn live_state(&mut self, op: &'static str) -> Option<&mut CarouselState> {
        if self.status != CarouselStatus::Running {
            debug!(op, status = ?self.status, "ignoring carousel command");
            return None;
        }
        self.state.as_mut()
    }

    fn after_manual_navigation(&mut self) {
        if self.config.autoplay_phase == AutoplayPhase::RestartOnInteraction
            && self.autoplay.timer.is_some()
        {
            self.start_timer();
        }
        self.render();
    }

    fn start_timer(&mut self) {
        self.stop_timer();
        let id = self
            .scheduler
            .schedule_repeating(self.config.autoplay_interval());
        self.autoplay.timer = Some(id);
    }

    fn stop_timer(&mut self) {
        if let Some(id) = self.autoplay.timer.take() {
            self.scheduler.cancel(id);
        }
    }

    fn render(&mut self) {
        let Some(frame) = self.view_model() else {
            return;
        };
        if let Some(view) = self.view.as_mut() {
            view.render(&frame);
        }
    }
}

impl<V: CarouselView> Carousel<ManualScheduler, V> {
    /// Move the virtual clock forward by `by`, delivering every autoplay firing on the way.
    /// Returns the number of firings delivered.
    pub fn advance(&mut self, by: Millis) -> usize {
        let until = self.scheduler.now() + by;
        self.advance_to(until)
    }

    /// Move the virtual clock to `until`, delivering every autoplay firing on the way.
    pub fn advance_to(&mut self, until: Millis) -> usize {
        let mut fired = 0;
        while self.fire_next(until).is_some() {
            fired += 1;
        }
        self.scheduler.settle(until);
        fired
    }

    /// Deliver the earliest firing due at or before `until`, if any.
    ///
    /// Returns `Some(advanced)` when a firing was delivered, `None` when nothing is due. The
    /// clock is left at the firing's due time.
    pub fn fire_next(&mut self, until: Millis) -> Option<bool> {
        let id = self.scheduler.pop_due(until)?;
        let advanced = self.on_timer(id);
        if self.autoplay.timer == Some(id) && !self.scheduler.is_live(id) {
            // Ran off the end of the timeline.
            self.autoplay.timer = None;
        }
        Some(advanced)
    }
}

impl<S: Scheduler, V: CarouselView> Drop for Carousel<S, V> {
    fn drop(&mut self) {
        self.stop_timer();
    }
}

#[cfg(test)]
#[path = "../../tests/unit/carousel/controller.rs"]
mod tests;
