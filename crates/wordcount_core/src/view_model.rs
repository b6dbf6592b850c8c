use crate::Phase;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SessionView {
    pub phase: Phase,
    /// Words counted since the session started, across resets.
    pub words_counted: u64,
    /// Distinct words as of the latest eviction pass.
    pub distinct_words: usize,
    /// Observations still held by the counter.
    pub retained_entries: usize,
}
