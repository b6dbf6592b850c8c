use crate::view_model::SessionView;
use crate::{ControlSyntax, Timestamp, Window, WindowedCounter};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StopReason {
    /// The terminate token was read.
    Terminated,
    /// The input ran out.
    EndOfStream,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phase {
    #[default]
    Running,
    Stopped(StopReason),
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SessionState {
    counter: WindowedCounter,
    syntax: ControlSyntax,
    phase: Phase,
    words_counted: u64,
}

impl SessionState {
    pub fn new(syntax: ControlSyntax, window: Window) -> Self {
        Self {
            counter: WindowedCounter::new(window),
            syntax,
            ..Self::default()
        }
    }

    pub fn view(&self) -> SessionView {
        SessionView {
            phase: self.phase,
            words_counted: self.words_counted,
            distinct_words: self.counter.counts().len(),
            retained_entries: self.counter.len_entries(),
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn is_stopped(&self) -> bool {
        matches!(self.phase, Phase::Stopped(_))
    }

    pub fn syntax(&self) -> ControlSyntax {
        self.syntax
    }

    pub fn counter(&self) -> &WindowedCounter {
        &self.counter
    }

    pub(crate) fn counter_mut(&mut self) -> &mut WindowedCounter {
        &mut self.counter
    }

    pub(crate) fn record_word(&mut self, word: String, at: Timestamp) {
        self.counter.add(word, at);
        self.words_counted += 1;
    }

    pub(crate) fn stop(&mut self, reason: StopReason) {
        self.phase = Phase::Stopped(reason);
    }
}
