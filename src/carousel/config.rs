use crate::foundation::core::Millis;
use crate::foundation::error::{VitrineError, VitrineResult};

/// What happens to the autoplay phase when the user navigates by hand.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AutoplayPhase {
    /// A manual navigation restarts the running timer, so the next automatic advance is one
    /// full interval after the interaction.
    #[default]
    RestartOnInteraction,
    /// The timer keeps its own phase; a manual navigation can be followed by an automatic
    /// advance at any point of the interval.
    Independent,
}

#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
/// Tunables for a [`crate::Carousel`] and its input routing.
pub struct CarouselConfig {
    /// Autoplay period in milliseconds. Must be positive.
    pub autoplay_interval_ms: u64,
    /// Start the autoplay timer when the carousel mounts.
    pub autoplay_on_start: bool,
    /// Autoplay phase policy for manual navigation.
    pub autoplay_phase: AutoplayPhase,
    /// Minimum horizontal travel for a swipe to navigate (exclusive).
    pub swipe_threshold: f64,
    /// Horizontal travel after which a touch is treated as a horizontal drag and stops
    /// scrolling the page.
    pub swipe_lock_threshold: f64,
}

impl Default for CarouselConfig {
    fn default() -> Self {
        Self {
            autoplay_interval_ms: 5_000,
            autoplay_on_start: true,
            autoplay_phase: AutoplayPhase::default(),
            swipe_threshold: 50.0,
            swipe_lock_threshold: 10.0,
        }
    }
}

impl CarouselConfig {
    /// Autoplay period.
    pub fn autoplay_interval(&self) -> Millis {
        Millis(self.autoplay_interval_ms)
    }

    /// Reject values the carousel cannot run with.
    pub fn validate(&self) -> VitrineResult<()> {
        if self.autoplay_interval_ms == 0 {
            return Err(VitrineError::config("autoplay_interval_ms must be > 0"));
        }
        if !self.swipe_threshold.is_finite() || self.swipe_threshold <= 0.0 {
            return Err(VitrineError::config(
                "swipe_threshold must be finite and > 0",
            ));
        }
        if !self.swipe_lock_threshold.is_finite() || self.swipe_lock_threshold < 0.0 {
            return Err(VitrineError::config(
                "swipe_lock_threshold must be finite and >= 0",
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/carousel/config.rs"]
mod tests;
