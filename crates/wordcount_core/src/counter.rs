use std::collections::{HashMap, VecDeque};

use chrono::TimeDelta;

use crate::{format_counts, Timestamp};

/// Default length of the trailing window, in seconds.
pub const DEFAULT_WINDOW_SECS: u64 = 60;

/// How long an observation keeps counting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Window {
    /// Observations expire once they are this old.
    Sliding(TimeDelta),
    /// Observations never expire; only a reset clears them.
    Unbounded,
}

impl Default for Window {
    fn default() -> Self {
        Self::from_secs(DEFAULT_WINDOW_SECS)
    }
}

impl Window {
    /// `0` (or a value too large to represent) selects [`Window::Unbounded`].
    pub fn from_secs(secs: u64) -> Self {
        if secs == 0 {
            return Window::Unbounded;
        }
        i64::try_from(secs)
            .ok()
            .and_then(TimeDelta::try_seconds)
            .map_or(Window::Unbounded, Window::Sliding)
    }

    /// Window length in whole seconds, `None` when unbounded.
    pub fn as_secs(&self) -> Option<i64> {
        match self {
            Window::Sliding(length) => Some(length.num_seconds()),
            Window::Unbounded => None,
        }
    }

    /// Observations at or before the cutoff are expired.
    fn cutoff(&self, now: Timestamp) -> Option<Timestamp> {
        match self {
            Window::Sliding(length) => now.checked_sub_signed(*length),
            Window::Unbounded => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct Entry {
    word: String,
    observed_at: Timestamp,
}

/// Word frequencies over a trailing time window.
///
/// `add` never evicts. Expired observations are dropped lazily by the next
/// [`snapshot`](Self::snapshot), which scans from the oldest entry and stops
/// at the first one still inside the window. Entries are assumed to arrive in
/// non-decreasing time order.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct WindowedCounter {
    entries: VecDeque<Entry>,
    counts: HashMap<String, usize>,
    window: Window,
}

impl WindowedCounter {
    pub fn new(window: Window) -> Self {
        Self {
            entries: VecDeque::new(),
            counts: HashMap::new(),
            window,
        }
    }

    pub fn window(&self) -> Window {
        self.window
    }

    /// Records one observation of `word` at `at`.
    pub fn add(&mut self, word: impl Into<String>, at: Timestamp) {
        let word = word.into();
        *self.counts.entry(word.clone()).or_insert(0) += 1;
        self.entries.push_back(Entry {
            word,
            observed_at: at,
        });
    }

    /// Evicts everything observed at or before `now - window` and returns the
    /// remaining counts.
    pub fn snapshot(&mut self, now: Timestamp) -> &HashMap<String, usize> {
        self.evict(now);
        &self.counts
    }

    /// Formatted report of [`snapshot`](Self::snapshot).
    pub fn render(&mut self, now: Timestamp) -> String {
        format_counts(self.snapshot(now))
    }

    /// Counts as of the latest eviction pass.
    pub fn counts(&self) -> &HashMap<String, usize> {
        &self.counts
    }

    /// Observations not yet evicted.
    pub fn len_entries(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Discards every observation, keeping the window.
    pub fn reset(&mut self) {
        *self = Self::new(self.window);
    }

    fn evict(&mut self, now: Timestamp) {
        let Some(cutoff) = self.window.cutoff(now) else {
            return;
        };
        while self
            .entries
            .front()
            .is_some_and(|entry| entry.observed_at <= cutoff)
        {
            if let Some(expired) = self.entries.pop_front() {
                self.forget(&expired.word);
            }
        }
    }

    fn forget(&mut self, word: &str) {
        if let Some(count) = self.counts.get_mut(word) {
            *count -= 1;
            if *count == 0 {
                self.counts.remove(word);
            }
        }
    }
}
