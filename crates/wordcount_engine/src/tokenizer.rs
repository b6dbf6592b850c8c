use std::io::{self, BufRead};

use encoding_rs::Encoding;
use wordcount_core::{is_word_char, push_lowercase};

use crate::CharDecoder;

/// Notified for every line break skipped between words.
pub trait LineBreakSink {
    fn line_break(&mut self);
}

/// Sink for callers that do not prompt.
#[derive(Debug, Default, Clone, Copy)]
pub struct IgnoreLineBreaks;

impl LineBreakSink for IgnoreLineBreaks {
    fn line_break(&mut self) {}
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RawToken {
    /// Lower-cased word; empty only when the stream ended between words.
    pub text: String,
    /// Set once the underlying stream is exhausted.
    pub end_of_stream: bool,
}

/// Splits a character stream into lower-cased words.
///
/// The separator that ends a word is held back and skipped by the next call,
/// so a line break right after a word is signalled when the following word
/// is requested.
pub struct Tokenizer<R> {
    source: CharDecoder<R>,
    held: Option<char>,
    exhausted: bool,
}

impl<R: BufRead> Tokenizer<R> {
    pub fn new(reader: R) -> Self {
        Self::from_decoder(CharDecoder::new(reader))
    }

    pub fn with_encoding(reader: R, encoding: &'static Encoding) -> Self {
        Self::from_decoder(CharDecoder::with_encoding(reader, encoding))
    }

    fn from_decoder(source: CharDecoder<R>) -> Self {
        Self {
            source,
            held: None,
            exhausted: false,
        }
    }

    /// Skips separators, then reads one word.
    ///
    /// Read errors abort the current word and are returned as-is.
    pub fn next_token(&mut self, sink: &mut dyn LineBreakSink) -> io::Result<RawToken> {
        let mut text = String::new();
        if self.exhausted {
            return Ok(RawToken {
                text,
                end_of_stream: true,
            });
        }

        loop {
            match self.read_char()? {
                None => {
                    self.exhausted = true;
                    return Ok(RawToken {
                        text,
                        end_of_stream: true,
                    });
                }
                Some(ch) if is_word_char(ch) => push_lowercase(&mut text, ch),
                Some(ch) if text.is_empty() => {
                    if ch == '\n' {
                        sink.line_break();
                    }
                }
                Some(ch) => {
                    self.held = Some(ch);
                    return Ok(RawToken {
                        text,
                        end_of_stream: false,
                    });
                }
            }
        }
    }

    fn read_char(&mut self) -> io::Result<Option<char>> {
        match self.held.take() {
            Some(ch) => Ok(Some(ch)),
            None => self.source.next_char(),
        }
    }
}

/// Yields the non-empty words, ignoring line breaks. Stops after the first
/// error.
impl<R: BufRead> Iterator for Tokenizer<R> {
    type Item = io::Result<String>;

    fn next(&mut self) -> Option<Self::Item> {
        while !self.exhausted {
            match self.next_token(&mut IgnoreLineBreaks) {
                Ok(token) if !token.text.is_empty() => return Some(Ok(token.text)),
                Ok(_) => {}
                Err(err) => {
                    self.exhausted = true;
                    return Some(Err(err));
                }
            }
        }
        None
    }
}
