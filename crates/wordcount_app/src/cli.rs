use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use log::LevelFilter;
use wordcount_core::{ControlSyntax, Window, DEFAULT_WINDOW_SECS};
use wordcount_engine::{EngineError, SessionConfig};
use wordcount_logging::LogDestination;

const EXAMPLES: &str = "\
Examples:
  interactive mode: wordcount
  read from file:   wordcount test.txt
  read from pipe:   echo lorem ipsum lorem | wordcount

Output:
  hello: 500
  world:  50
  how:    10
  are:     5
  you:     5";

#[derive(Parser, Debug)]
#[command(
    name = "wordcount",
    version,
    about = "wordcount - print the number of unique words in a stream",
    after_help = EXAMPLES
)]
pub struct Cli {
    /// Read from FILE instead of standard input (implies --quiet)
    pub file: Option<PathBuf>,

    /// Seconds a word keeps counting; 0 keeps words until reset
    #[arg(long, value_name = "SECS", default_value_t = DEFAULT_WINDOW_SECS)]
    pub window: u64,

    /// Recognize stats/help/reset/exit without the leading '-'
    #[arg(long)]
    pub bare_commands: bool,

    /// Text encoding of the input, as a WHATWG label
    #[arg(long, value_name = "LABEL", default_value = "utf-8")]
    pub encoding: String,

    /// Never print help text or prompts
    #[arg(long, short)]
    pub quiet: bool,

    /// Diagnostic log level
    #[arg(
        long,
        value_name = "LEVEL",
        env = "WORDCOUNT_LOG",
        value_enum,
        default_value_t = LogLevel::Off
    )]
    pub log_level: LogLevel,

    /// Write diagnostics to PATH instead of stderr
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogLevel {
    Off,
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<LogLevel> for LevelFilter {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Off => LevelFilter::Off,
            LogLevel::Error => LevelFilter::Error,
            LogLevel::Warn => LevelFilter::Warn,
            LogLevel::Info => LevelFilter::Info,
            LogLevel::Debug => LevelFilter::Debug,
            LogLevel::Trace => LevelFilter::Trace,
        }
    }
}

impl Cli {
    /// Help and prompts only make sense when a person is typing.
    pub fn session_config(&self, stdin_is_terminal: bool) -> Result<SessionConfig, EngineError> {
        let syntax = if self.bare_commands {
            ControlSyntax::bare()
        } else {
            ControlSyntax::default()
        };
        SessionConfig {
            quiet: self.quiet || self.file.is_some() || !stdin_is_terminal,
            syntax,
            window: Window::from_secs(self.window),
            ..SessionConfig::default()
        }
        .with_encoding_label(&self.encoding)
    }

    pub fn log_destination(&self) -> LogDestination {
        match &self.log_file {
            Some(path) => LogDestination::File(path.clone()),
            None => LogDestination::Stderr,
        }
    }
}

#[cfg(test)]
mod tests {
    use clap::Parser;
    use log::LevelFilter;
    use pretty_assertions::assert_eq;
    use wordcount_core::{ControlSyntax, Window};

    use wordcount_logging::LogDestination;

    use super::{Cli, LogLevel};

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("wordcount").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn defaults_on_a_terminal_are_interactive() {
        let cli = parse(&[]);
        let config = cli.session_config(true).unwrap();

        assert!(!config.quiet);
        assert_eq!(config.syntax, ControlSyntax::default());
        assert_eq!(config.window, Window::default());
        assert_eq!(config.encoding.name(), "UTF-8");
        assert_eq!(cli.log_destination(), LogDestination::Stderr);
    }

    #[test]
    fn redirected_stdin_is_quiet() {
        assert!(parse(&[]).session_config(false).unwrap().quiet);
    }

    #[test]
    fn file_argument_is_quiet() {
        let cli = parse(&["input.txt"]);
        assert_eq!(cli.file.as_deref(), Some(std::path::Path::new("input.txt")));
        assert!(cli.session_config(true).unwrap().quiet);
    }

    #[test]
    fn options_shape_the_session() {
        let cli = parse(&[
            "--window",
            "0",
            "--bare-commands",
            "--encoding",
            "latin1",
            "-q",
        ]);
        let config = cli.session_config(true).unwrap();

        assert!(config.quiet);
        assert_eq!(config.syntax, ControlSyntax::bare());
        assert_eq!(config.window, Window::Unbounded);
        assert_eq!(config.encoding.name(), "windows-1252");
    }

    #[test]
    fn unknown_encoding_fails() {
        assert!(parse(&["--encoding", "bogus"]).session_config(true).is_err());
    }

    #[test]
    fn too_many_files_is_a_usage_error() {
        assert!(Cli::try_parse_from(["wordcount", "a.txt", "b.txt"]).is_err());
    }

    #[test]
    fn log_options() {
        let cli = parse(&["--log-level", "debug", "--log-file", "wc.log"]);
        assert_eq!(cli.log_level, LogLevel::Debug);
        assert_eq!(LevelFilter::from(cli.log_level), LevelFilter::Debug);
        assert_eq!(cli.log_destination(), LogDestination::File("wc.log".into()));
    }
}
