/// Prefix that marks reserved tokens unless bare commands are selected.
pub const DEFAULT_MARKER: char = '-';

/// Classification of a normalized token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Print the current report.
    Snapshot,
    /// Print the help text.
    Help,
    /// Drop every count collected so far.
    Reset,
    /// Stop reading and print the final report.
    Terminate,
    /// An ordinary word to be counted.
    Word(String),
}

impl Command {
    /// Keyword spelling of a control command, without any marker.
    pub fn keyword(&self) -> Option<&'static str> {
        match self {
            Command::Snapshot => Some("stats"),
            Command::Help => Some("help"),
            Command::Reset => Some("reset"),
            Command::Terminate => Some("exit"),
            Command::Word(_) => None,
        }
    }
}

/// How reserved tokens are spelled in the input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ControlSyntax {
    marker: Option<char>,
}

impl Default for ControlSyntax {
    fn default() -> Self {
        Self::marked(DEFAULT_MARKER)
    }
}

impl ControlSyntax {
    /// Reserved tokens start with `marker`, e.g. `-stats`.
    pub const fn marked(marker: char) -> Self {
        Self {
            marker: Some(marker),
        }
    }

    /// Reserved tokens are the bare keywords, e.g. `stats`.
    pub const fn bare() -> Self {
        Self { marker: None }
    }

    pub fn marker(&self) -> Option<char> {
        self.marker
    }

    /// Full spelling of a control command in this syntax.
    pub fn spell(&self, command: &Command) -> Option<String> {
        let keyword = command.keyword()?;
        Some(match self.marker {
            Some(marker) => format!("{marker}{keyword}"),
            None => keyword.to_string(),
        })
    }

    /// Classifies an already lower-cased token. Only exact matches dispatch;
    /// `stats2` or `word-stats` are words.
    pub fn classify(&self, token: String) -> Command {
        let keyword = match self.marker {
            Some(marker) => token.strip_prefix(marker),
            None => Some(token.as_str()),
        };
        let control = match keyword {
            Some("stats") => Some(Command::Snapshot),
            Some("help") => Some(Command::Help),
            Some("reset") => Some(Command::Reset),
            Some("exit") => Some(Command::Terminate),
            _ => None,
        };
        control.unwrap_or(Command::Word(token))
    }
}
