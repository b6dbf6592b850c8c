use std::io;

use encoding_rs::{Encoding, UTF_8};
use thiserror::Error;
use wordcount_core::{ControlSyntax, StopReason, Window};

use crate::encoding_for_label;

#[derive(Debug, Error)]
pub enum EngineError {
    #[error("failed to read input: {0}")]
    Read(#[source] io::Error),
    #[error("failed to write output: {0}")]
    Write(#[source] io::Error),
    #[error("unknown text encoding {0:?}")]
    UnknownEncoding(String),
}

/// Everything a session needs to know up front.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionConfig {
    /// Suppresses help text and prompts; reports are always printed.
    pub quiet: bool,
    pub syntax: ControlSyntax,
    pub window: Window,
    pub encoding: &'static Encoding,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            quiet: false,
            syntax: ControlSyntax::default(),
            window: Window::default(),
            encoding: UTF_8,
        }
    }
}

impl SessionConfig {
    /// Default configuration without help or prompts.
    pub fn quiet() -> Self {
        Self {
            quiet: true,
            ..Self::default()
        }
    }

    pub fn with_encoding_label(mut self, label: &str) -> Result<Self, EngineError> {
        self.encoding = encoding_for_label(label)
            .ok_or_else(|| EngineError::UnknownEncoding(label.to_string()))?;
        Ok(self)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionReport {
    pub reason: StopReason,
    /// Non-empty tokens read, reserved ones included.
    pub tokens_read: u64,
    pub words_counted: u64,
}
