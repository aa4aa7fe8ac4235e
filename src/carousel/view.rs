/// Render state of one slide.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize)]
pub struct SlideView {
    /// Slide position.
    pub index: usize,
    /// The slide is the visible one.
    pub active: bool,
    /// The slide is hidden from assistive technology (every slide except the active one).
    pub aria_hidden: bool,
}

/// Render state of one indicator dot.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize)]
pub struct IndicatorView {
    /// Slide the indicator jumps to.
    pub index: usize,
    /// The indicator matches the visible slide.
    pub active: bool,
}

/// Everything a presentation layer needs to draw the carousel.
///
/// Produced by the controller after every state change; views hold no state of their own.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct ViewModel {
    /// Visible slide.
    pub current: usize,
    /// Horizontal offset of the slide strip, in percent of one slide (`-current * 100`).
    pub track_offset_percent: i64,
    /// One entry per slide.
    pub slides: Vec<SlideView>,
    /// One entry per indicator, same order as `slides`.
    pub indicators: Vec<IndicatorView>,
    /// Whether the play/pause control shows the "playing" state.
    pub autoplay_playing: bool,
}

impl ViewModel {
    /// Build the view model for `len` slides with `current` visible.
    pub fn build(current: usize, len: usize, autoplay_playing: bool) -> Self {
        let slides = (0..len)
            .map(|index| SlideView {
                index,
                active: index == current,
                aria_hidden: index != current,
            })
            .collect();
        let indicators = (0..len)
            .map(|index| IndicatorView {
                index,
                active: index == current,
            })
            .collect();
        Self {
            current,
            track_offset_percent: -(current as i64) * 100,
            slides,
            indicators,
            autoplay_playing,
        }
    }

    /// Number of active indicators; exactly one for any view model built by a carousel.
    pub fn active_indicator_count(&self) -> usize {
        self.indicators.iter().filter(|i| i.active).count()
    }
}

/// Presentation adapter bound to the carousel's container.
///
/// The carousel owns its view for its whole lifetime and is the only caller.
pub trait CarouselView {
    /// Bring the display in line with `frame`.
    fn render(&mut self, frame: &ViewModel);

    /// Tear down whatever the view put in its container. Called once, from
    /// [`crate::Carousel::destroy`].
    fn release(&mut self) {}
}

/// A view that keeps every frame it was asked to render.
#[derive(Clone, Debug, Default)]
pub struct RecordingView {
    frames: Vec<ViewModel>,
    released: bool,
}

impl RecordingView {
    /// An empty recording.
    pub fn new() -> Self {
        Self::default()
    }

    /// Rendered frames, oldest first.
    pub fn frames(&self) -> &[ViewModel] {
        &self.frames
    }

    /// Most recent frame.
    pub fn last(&self) -> Option<&ViewModel> {
        self.frames.last()
    }

    /// Number of render calls.
    pub fn render_count(&self) -> usize {
        self.frames.len()
    }

    /// Whether [`CarouselView::release`] was called.
    pub fn is_released(&self) -> bool {
        self.released
    }
}

impl CarouselView for RecordingView {
    fn render(&mut self, frame: &ViewModel) {
        self.frames.push(frame.clone());
    }

    fn release(&mut self) {
        self.released = true;
    }
}

#[cfg(test)]
#[path = "../../tests/unit/carousel/view.rs"]
mod tests;
