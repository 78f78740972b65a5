//! Bounded mean-happiness history, for trend displays.

use std::collections::VecDeque;

use ec_core::Tick;

use crate::engine::TickSummary;
use crate::observer::EngineObserver;

/// Default window size — what a happiness trend chart keeps on screen.
pub const DEFAULT_HISTORY_CAPACITY: usize = 50;

/// An [`EngineObserver`] that records `(tick, mean happiness)` for the
/// most recent ticks, evicting the oldest entry once the window is full.
#[derive(Clone, Debug)]
pub struct MoodHistory {
    entries: VecDeque<(Tick, f64)>,
    capacity: usize,
}

impl MoodHistory {
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_HISTORY_CAPACITY)
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    /// Recorded entries, oldest first.
    pub fn entries(&self) -> impl Iterator<Item = (Tick, f64)> + '_ {
        self.entries.iter().copied()
    }

    /// The most recent entry, if any tick has been recorded.
    pub fn latest(&self) -> Option<(Tick, f64)> {
        self.entries.back().copied()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for MoodHistory {
    fn default() -> Self {
        Self::new()
    }
}

impl EngineObserver for MoodHistory {
    fn on_tick_end(&mut self, summary: &TickSummary) {
        self.entries.push_back((summary.tick, summary.average_happiness));
        while self.entries.len() > self.capacity {
            self.entries.pop_front();
        }
    }
}
