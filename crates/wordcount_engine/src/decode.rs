use std::io::{self, BufRead};

use encoding_rs::{Decoder, Encoding, UTF_8};

/// Looks up an encoding by its WHATWG label (`utf-8`, `latin1`, `utf-16le`...).
pub fn encoding_for_label(label: &str) -> Option<&'static Encoding> {
    Encoding::for_label(label.trim().as_bytes())
}

/// Incremental decoder yielding one `char` at a time from a byte stream.
///
/// A byte order mark overrides the configured encoding and is stripped.
/// Malformed input decodes to U+FFFD instead of failing.
pub struct CharDecoder<R> {
    inner: R,
    decoder: Decoder,
    pending: String,
    pos: usize,
    finished: bool,
}

impl<R: BufRead> CharDecoder<R> {
    pub fn new(inner: R) -> Self {
        Self::with_encoding(inner, UTF_8)
    }

    pub fn with_encoding(inner: R, encoding: &'static Encoding) -> Self {
        Self {
            inner,
            decoder: encoding.new_decoder(),
            pending: String::new(),
            pos: 0,
            finished: false,
        }
    }

    /// Next decoded character, or `None` at end of stream.
    pub fn next_char(&mut self) -> io::Result<Option<char>> {
        loop {
            if let Some(ch) = self.pending[self.pos..].chars().next() {
                self.pos += ch.len_utf8();
                return Ok(Some(ch));
            }
            if self.finished {
                return Ok(None);
            }
            self.refill()?;
        }
    }

    fn refill(&mut self) -> io::Result<()> {
        self.pending.clear();
        self.pos = 0;

        let bytes = match self.inner.fill_buf() {
            Ok(bytes) => bytes,
            Err(err) if err.kind() == io::ErrorKind::Interrupted => return Ok(()),
            Err(err) => return Err(err),
        };
        // An empty buffer means end of stream; flush any incomplete sequence.
        let last = bytes.is_empty();
        let capacity = self
            .decoder
            .max_utf8_buffer_length(bytes.len())
            .unwrap_or_else(|| bytes.len().saturating_mul(3).saturating_add(16));
        self.pending.reserve(capacity);

        let (_, read, _) = self.decoder.decode_to_string(bytes, &mut self.pending, last);
        self.inner.consume(read);
        self.finished = last;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use super::{encoding_for_label, CharDecoder};

    fn decode_all(bytes: &[u8]) -> String {
        let mut decoder = CharDecoder::new(Cursor::new(bytes.to_vec()));
        let mut text = String::new();
        while let Some(ch) = decoder.next_char().unwrap() {
            text.push(ch);
        }
        text
    }

    #[test]
    fn decodes_utf8() {
        assert_eq!(decode_all("héllo wörld".as_bytes()), "héllo wörld");
    }

    #[test]
    fn strips_utf8_bom() {
        assert_eq!(decode_all(b"\xEF\xBB\xBFhello"), "hello");
    }

    #[test]
    fn malformed_bytes_become_replacement() {
        assert_eq!(decode_all(b"caf\xe9 ok"), "caf\u{FFFD} ok");
    }

    #[test]
    fn truncated_sequence_at_end_is_replaced() {
        assert_eq!(decode_all(b"ab\xC3"), "ab\u{FFFD}");
    }

    #[test]
    fn latin1_label() {
        let encoding = encoding_for_label(" latin1 ").unwrap();
        let mut decoder = CharDecoder::with_encoding(Cursor::new(b"caf\xe9".to_vec()), encoding);
        let mut text = String::new();
        while let Some(ch) = decoder.next_char().unwrap() {
            text.push(ch);
        }
        assert_eq!(text, "café");
    }

    #[test]
    fn unknown_label() {
        assert!(encoding_for_label("no-such-encoding").is_none());
    }
}
