use crate::{
    carousel::config::CarouselConfig,
    carousel::controller::{Carousel, Command},
    carousel::view::CarouselView,
    input::gesture::{Gesture, ScrollIntent, SwipeTracker},
    timing::scheduler::Scheduler,
};

/// A UI event aimed at the carousel's container.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum InputEvent {
    /// The "previous" arrow (desktop or mobile) was activated.
    PrevClicked,
    /// The "next" arrow (desktop or mobile) was activated.
    NextClicked,
    /// An indicator dot was activated.
    IndicatorClicked {
        /// Slide the indicator stands for.
        index: usize,
    },
    /// A key was pressed while the carousel had focus.
    KeyDown {
        /// DOM-style key name, e.g. `ArrowLeft`.
        key: String,
    },
    /// The play/pause control was activated.
    AutoplayToggled,
    /// The pointer entered the carousel.
    PointerEntered,
    /// The pointer left the carousel.
    PointerLeft,
    /// A touch began.
    TouchStarted {
        /// Touch x.
        x: f64,
        /// Touch y.
        y: f64,
    },
    /// A touch moved.
    TouchMoved {
        /// Touch x.
        x: f64,
        /// Touch y.
        y: f64,
    },
    /// A touch ended.
    TouchEnded {
        /// Touch x.
        x: f64,
        /// Touch y.
        y: f64,
    },
    /// The platform cancelled the touch.
    TouchCancelled,
}

/// Result of routing one event.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Routed {
    /// Commands to apply, in order.
    pub commands: Vec<Command>,
    /// The host should suppress default scrolling for this event.
    pub capture_scroll: bool,
}

impl Routed {
    fn commands(commands: impl IntoIterator<Item = Command>) -> Self {
        Self {
            commands: commands.into_iter().collect(),
            capture_scroll: false,
        }
    }
}

/// Maps raw UI events onto carousel commands.
///
/// Holds the only input-side state: the touch being tracked. A touch drag suspends autoplay
/// for its duration the same way hovering does.
#[derive(Clone, Debug)]
pub struct InputRouter {
    swipe: SwipeTracker,
}

impl InputRouter {
    /// A router using the swipe thresholds from `config`.
    pub fn new(config: &CarouselConfig) -> Self {
        Self {
            swipe: SwipeTracker::new(config.swipe_threshold, config.swipe_lock_threshold),
        }
    }

    /// Translate one event into commands.
    pub fn route(&mut self, event: &InputEvent) -> Routed {
        match event {
            InputEvent::PrevClicked => Routed::commands([Command::Prev]),
            InputEvent::NextClicked => Routed::commands([Command::Next]),
            InputEvent::IndicatorClicked { index } => Routed::commands([Command::GoTo(*index)]),
            InputEvent::KeyDown { key } => match key.as_str() {
                "ArrowLeft" => Routed::commands([Command::Prev]),
                "ArrowRight" => Routed::commands([Command::Next]),
                _ => Routed::default(),
            },
            InputEvent::AutoplayToggled => Routed::commands([Command::ToggleAutoplay]),
            InputEvent::PointerEntered => Routed::commands([Command::PauseAutoplay]),
            InputEvent::PointerLeft => Routed::commands([Command::ResumeAutoplay]),
            InputEvent::TouchStarted { x, y } => {
                self.swipe.start(*x, *y);
                Routed::commands([Command::PauseAutoplay])
            }
            InputEvent::TouchMoved { x, y } => Routed {
                commands: Vec::new(),
                capture_scroll: self.swipe.move_to(*x, *y) == ScrollIntent::Capture,
            },
            InputEvent::TouchEnded { x, y } => {
                let was_tracking = self.swipe.is_tracking();
                let nav = match self.swipe.end(*x, *y) {
                    Gesture::Next => Some(Command::Next),
                    Gesture::Prev => Some(Command::Prev),
                    Gesture::None => None,
                };
                let resume = was_tracking.then_some(Command::ResumeAutoplay);
                Routed::commands(nav.into_iter().chain(resume))
            }
            InputEvent::TouchCancelled => {
                let was_tracking = self.swipe.is_tracking();
                self.swipe.cancel();
                Routed::commands(was_tracking.then_some(Command::ResumeAutoplay))
            }
        }
    }

    /// Route `event` and apply the resulting commands to `carousel`.
    pub fn dispatch<S: Scheduler, V: CarouselView>(
        &mut self,
        event: &InputEvent,
        carousel: &mut Carousel<S, V>,
    ) -> Routed {
        let routed = self.route(event);
        for &command in &routed.commands {
            carousel.apply(command);
        }
        routed
    }
}

#[cfg(test)]
#[path = "../../tests/unit/input/router.rs"]
mod tests;
