/// Outcome of a finished drag.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Gesture {
    /// Not a navigation swipe.
    None,
    /// Swiped toward negative x: show the next slide.
    Next,
    /// Swiped toward positive x: show the previous slide.
    Prev,
}

/// Classify a drag by its displacement `(dx, dy)` (end minus start).
///
/// A drag navigates only when its horizontal travel is strictly greater than `threshold` and
/// dominates the vertical travel, so vertical scrolling never turns slides.
pub fn classify_gesture(dx: f64, dy: f64, threshold: f64) -> Gesture {
    if !dx.is_finite() || !dy.is_finite() {
        return Gesture::None;
    }
    let (ax, ay) = (dx.abs(), dy.abs());
    if ax <= threshold || ax <= ay {
        return Gesture::None;
    }
    if dx < 0.0 { Gesture::Next } else { Gesture::Prev }
}

/// What the host should do with the platform's default touch-move handling.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ScrollIntent {
    /// Let the page scroll.
    PassThrough,
    /// The drag is horizontal; suppress page scrolling.
    Capture,
}

#[derive(Clone, Copy, Debug)]
struct Touch {
    start_x: f64,
    start_y: f64,
    horizontal: bool,
}

/// Tracks one touch from start to end.
///
/// A touch becomes a horizontal drag once its horizontal travel exceeds `lock_threshold` and
/// dominates vertical travel. Only horizontal drags capture scrolling, and only they can
/// navigate when they end.
#[derive(Clone, Debug)]
pub struct SwipeTracker {
    threshold: f64,
    lock_threshold: f64,
    touch: Option<Touch>,
}

impl SwipeTracker {
    /// A tracker navigating past `threshold` and locking past `lock_threshold`.
    pub fn new(threshold: f64, lock_threshold: f64) -> Self {
        Self {
            threshold,
            lock_threshold,
            touch: None,
        }
    }

    /// Whether a touch is in progress.
    pub fn is_tracking(&self) -> bool {
        self.touch.is_some()
    }

    /// Begin tracking at `(x, y)`, dropping any unfinished touch.
    pub fn start(&mut self, x: f64, y: f64) {
        self.touch = Some(Touch {
            start_x: x,
            start_y: y,
            horizontal: false,
        });
    }

    /// Feed a move; tells the host whether to keep the page from scrolling.
    pub fn move_to(&mut self, x: f64, y: f64) -> ScrollIntent {
        let Some(touch) = self.touch.as_mut() else {
            return ScrollIntent::PassThrough;
        };
        let dx = (x - touch.start_x).abs();
        let dy = (y - touch.start_y).abs();
        if dx > dy && dx > self.lock_threshold {
            touch.horizontal = true;
        }
        if touch.horizontal {
            ScrollIntent::Capture
        } else {
            ScrollIntent::PassThrough
        }
    }

    /// Finish the touch at `(x, y)` and classify it.
    pub fn end(&mut self, x: f64, y: f64) -> Gesture {
        let Some(touch) = self.touch.take() else {
            return Gesture::None;
        };
        if !touch.horizontal {
            return Gesture::None;
        }
        classify_gesture(x - touch.start_x, y - touch.start_y, self.threshold)
    }

    /// Abandon the touch in progress.
    pub fn cancel(&mut self) {
        self.touch = None;
    }
}

#[cfg(test)]
#[path = "../../tests/unit/input/gesture.rs"]
mod tests;
