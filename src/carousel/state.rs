use crate::content::testimonial::TestimonialRecord;

/// Slide list plus the current position.
///
/// The record list is fixed at construction and never empty, so `current` is always a valid
/// index: every transition is taken modulo the slide count.
#[derive(Clone, Debug)]
pub struct CarouselState {
    items: Vec<TestimonialRecord>,
    current: usize,
}

impl CarouselState {
    /// `None` when `items` is empty.
    pub fn new(items: Vec<TestimonialRecord>) -> Option<Self> {
        if items.is_empty() {
            return None;
        }
        Some(Self { items, current: 0 })
    }

    pub fn items(&self) -> &[TestimonialRecord] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn current(&self) -> usize {
        self.current
    }

    pub fn current_item(&self) -> &TestimonialRecord {
        &self.items[self.current]
    }

    pub fn next(&mut self) -> usize {
        self.current = (self.current + 1) % self.items.len();
        self.current
    }

    pub fn prev(&mut self) -> usize {
        let n = self.items.len();
        self.current = (self.current + n - 1) % n;
        self.current
    }

    /// Jump to `index`. Out-of-range requests leave the state untouched and return `false`.
    pub fn go_to(&mut self, index: usize) -> bool {
        if index >= self.items.len() {
            return false;
        }
        self.current = index;
        true
    }
}

#[cfg(test)]
#[path = "../../tests/unit/carousel/state.rs"]
mod tests;
