use std::io::{BufRead, Write};

use wordcount_core::{update, Effect, Msg, Phase, SessionState};
use wordcount_logging::{wc_debug, wc_info, wc_trace, wc_warn};

use crate::clock::{Clock, SystemClock};
use crate::help::{help_text, PROMPT};
use crate::tokenizer::{LineBreakSink, Tokenizer};
use crate::{EngineError, SessionConfig, SessionReport};

/// Drives one input stream through the tokenizer and the session state
/// machine, executing the resulting effects against an output.
pub struct Session<C = SystemClock> {
    config: SessionConfig,
    clock: C,
}

impl Session<SystemClock> {
    pub fn new(config: SessionConfig) -> Self {
        Self::with_clock(config, SystemClock)
    }
}

impl<C: Clock> Session<C> {
    pub fn with_clock(config: SessionConfig, clock: C) -> Self {
        Self { config, clock }
    }

    /// Reads `input` until the terminate token or end of stream, then prints
    /// the final report. A read error aborts without a final report.
    pub fn run<R: BufRead, W: Write>(
        &self,
        input: R,
        output: &mut W,
    ) -> Result<SessionReport, EngineError> {
        wc_info!(
            "Session started quiet={} window_secs={:?} encoding={}",
            self.config.quiet,
            self.config.window.as_secs(),
            self.config.encoding.name()
        );

        let mut tokenizer = Tokenizer::with_encoding(input, self.config.encoding);
        let mut state = SessionState::new(self.config.syntax, self.config.window);
        let mut tokens_read = 0u64;

        if !self.config.quiet {
            self.write_help(output)?;
            write!(output, "{PROMPT}").map_err(EngineError::Write)?;
            output.flush().map_err(EngineError::Write)?;
        }

        loop {
            let token = {
                let mut prompt = Prompt {
                    output: &mut *output,
                    enabled: !self.config.quiet,
                };
                tokenizer
                    .next_token(&mut prompt)
                    .map_err(EngineError::Read)?
            };

            let mut inbox = Vec::with_capacity(2);
            if !token.text.is_empty() {
                tokens_read += 1;
                wc_trace!("Token #{} {:?}", tokens_read, token.text);
                inbox.push(Msg::TokenRead {
                    token: token.text,
                    at: self.clock.now(),
                });
            }
            if token.end_of_stream {
                wc_debug!("End of stream after {} tokens", tokens_read);
                inbox.push(Msg::EndOfStream {
                    at: self.clock.now(),
                });
            }

            for msg in inbox {
                let (next, effects) = update(state, msg);
                state = next;
                self.apply(effects, output)?;
            }

            if let Phase::Stopped(reason) = state.phase() {
                let view = state.view();
                wc_info!(
                    "Session stopped reason={:?} tokens={} words={}",
                    reason,
                    tokens_read,
                    view.words_counted
                );
                return Ok(SessionReport {
                    reason,
                    tokens_read,
                    words_counted: view.words_counted,
                });
            }
        }
    }

    fn apply<W: Write>(&self, effects: Vec<Effect>, output: &mut W) -> Result<(), EngineError> {
        for effect in effects {
            match effect {
                Effect::Report(report) => {
                    writeln!(output, "{report}").map_err(EngineError::Write)?;
                }
                Effect::ShowHelp => {
                    if self.config.quiet {
                        continue;
                    }
                    self.write_help(output)?;
                }
            }
            output.flush().map_err(EngineError::Write)?;
        }
        Ok(())
    }

    fn write_help<W: Write>(&self, output: &mut W) -> Result<(), EngineError> {
        output
            .write_all(help_text(self.config.syntax, self.config.window).as_bytes())
            .map_err(EngineError::Write)
    }
}

struct Prompt<'a, W: Write> {
    output: &'a mut W,
    enabled: bool,
}

impl<W: Write> LineBreakSink for Prompt<'_, W> {
    fn line_break(&mut self) {
        if !self.enabled {
            return;
        }
        let written = self
            .output
            .write_all(PROMPT.as_bytes())
            .and_then(|()| self.output.flush());
        if let Err(err) = written {
            wc_warn!("Failed to write prompt: {}", err);
        }
    }
}
