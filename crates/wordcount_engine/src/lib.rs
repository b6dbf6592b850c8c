//! Wordcount engine: stream decoding, tokenization and the session loop.
mod clock;
mod decode;
mod help;
mod session;
mod tokenizer;
mod types;

pub use clock::{Clock, SystemClock};
pub use decode::{encoding_for_label, CharDecoder};
pub use help::{help_text, PROMPT};
pub use session::Session;
pub use tokenizer::{IgnoreLineBreaks, LineBreakSink, RawToken, Tokenizer};
pub use types::{EngineError, SessionConfig, SessionReport};
