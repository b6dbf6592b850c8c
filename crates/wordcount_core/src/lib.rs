//! Wordcount core: word classification, the windowed counter, report
//! formatting and the pure session state machine.
mod classify;
mod command;
mod counter;
mod effect;
mod format;
mod msg;
mod state;
mod update;
mod view_model;

/// Point in time at which a word was observed.
pub type Timestamp = chrono::DateTime<chrono::Utc>;

pub use classify::{is_word_char, push_lowercase};
pub use command::{Command, ControlSyntax, DEFAULT_MARKER};
pub use counter::{Window, WindowedCounter, DEFAULT_WINDOW_SECS};
pub use effect::Effect;
pub use format::{format_counts, NO_ENTRIES};
pub use msg::Msg;
pub use state::{Phase, SessionState, StopReason};
pub use update::update;
pub use view_model::SessionView;
