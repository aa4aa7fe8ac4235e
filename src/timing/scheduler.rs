use std::collections::BTreeMap;

use crate::foundation::core::Millis;

/// Handle to one scheduled timer.
///
/// Ids are never reused by a scheduler, so a firing carrying an old id can always be told
/// apart from the live timer.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
pub struct TimerId(pub u64);

/// The timer facility a carousel runs on.
///
/// Hosts implement this over their native interval primitive and deliver each firing back to
/// the carousel through [`crate::Carousel::on_timer`]. [`ManualScheduler`] is the in-crate
/// implementation with an explicitly pumped clock.
pub trait Scheduler {
    /// Current time on this scheduler's timeline.
    fn now(&self) -> Millis;

    /// Start a recurring timer that first fires `every` from now, then every `every` after.
    fn schedule_repeating(&mut self, every: Millis) -> TimerId;

    /// Cancel a timer. Returns `false` if it was not live. A cancelled timer never fires.
    fn cancel(&mut self, id: TimerId) -> bool;
}

#[derive(Clone, Copy, Debug)]
struct Entry {
    due: Millis,
    every: Millis,
}

/// Virtual-clock scheduler.
///
/// Time only moves when the owner pumps it with [`ManualScheduler::pop_due`] and
/// [`ManualScheduler::settle`], which makes autoplay fully deterministic under test and in
/// scripted replays.
#[derive(Clone, Debug, Default)]
pub struct ManualScheduler {
    now: Millis,
    next_id: u64,
    timers: BTreeMap<TimerId, Entry>,
}

impl ManualScheduler {
    /// A scheduler at `Millis(0)` with no timers.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of live timers.
    pub fn pending(&self) -> usize {
        self.timers.len()
    }

    /// Whether `id` is live.
    pub fn is_live(&self, id: TimerId) -> bool {
        self.timers.contains_key(&id)
    }

    /// Due time of a live timer.
    pub fn due(&self, id: TimerId) -> Option<Millis> {
        self.timers.get(&id).map(|e| e.due)
    }

    /// Take the earliest firing due at or before `until`.
    ///
    /// The clock moves to that firing's due time and the timer is re-armed one period later
    /// before the id is returned. A timer whose next period would run past `u64::MAX` is
    /// removed instead, so it fires at most once more. Ties fire in id order. Returns `None`
    /// once nothing is due.
    pub fn pop_due(&mut self, until: Millis) -> Option<TimerId> {
        let (id, entry) = self
            .timers
            .iter()
            .filter(|(_, e)| e.due <= until)
            .min_by_key(|(id, e)| (e.due, **id))
            .map(|(id, e)| (*id, *e))?;

        self.now = self.now.max(entry.due);
        match entry.due.checked_add(entry.every) {
            Some(next) => {
                if let Some(e) = self.timers.get_mut(&id) {
                    e.due = next;
                }
            }
            None => {
                self.timers.remove(&id);
            }
        }
        Some(id)
    }

    /// Move the clock forward to `until` (never backwards).
    pub fn settle(&mut self, until: Millis) {
        self.now = self.now.max(until);
    }
}

impl Scheduler for ManualScheduler {
    fn now(&self) -> Millis {
        self.now
    }

    fn schedule_repeating(&mut self, every: Millis) -> TimerId {
        self.next_id += 1;
        let id = TimerId(self.next_id);
        // A zero period would fire forever within one pump.
        let every = every.max(Millis(1));
        self.timers.insert(
            id,
            Entry {
                due: self.now + every,
                every,
            },
        );
        id
    }

    fn cancel(&mut self, id: TimerId) -> bool {
        self.timers.remove(&id).is_some()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/timing/scheduler.rs"]
mod tests;
