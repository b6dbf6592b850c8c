use crate::Timestamp;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Msg {
    /// A non-empty token read from the input, stamped with the time it was read.
    TokenRead { token: String, at: Timestamp },
    /// The input is exhausted.
    EndOfStream { at: Timestamp },
}
