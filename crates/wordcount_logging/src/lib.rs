#![deny(missing_docs)]
//! Shared logging for the wordcount workspace.
//!
//! Every record goes out under the [`TARGET`] target through the `wc_*`
//! macros, so callers need no direct `log` dependency. Stdout carries the
//! reports, so [`initialize`] only ever logs to stderr or a file.

use std::fs::File;
use std::path::{Path, PathBuf};

#[doc(hidden)]
pub use log;
use log::LevelFilter;
use simplelog::{
    ColorChoice, CombinedLogger, Config, ConfigBuilder, SharedLogger, TermLogger, TerminalMode,
    WriteLogger,
};

/// Target attached to every record logged through the `wc_*` macros.
pub const TARGET: &str = "wordcount";

#[doc(hidden)]
#[macro_export]
macro_rules! wc_log {
    ($level:ident, $($arg:tt)+) => {
        $crate::log::log!(target: $crate::TARGET, $crate::log::Level::$level, $($arg)+)
    };
}

/// Logs a trace-level record. Used per token, so keep it cheap.
#[macro_export]
macro_rules! wc_trace {
    ($($arg:tt)+) => { $crate::wc_log!(Trace, $($arg)+) };
}

/// Logs a debug-level record.
#[macro_export]
macro_rules! wc_debug {
    ($($arg:tt)+) => { $crate::wc_log!(Debug, $($arg)+) };
}

/// Logs an info-level record: session start, stop and summary.
#[macro_export]
macro_rules! wc_info {
    ($($arg:tt)+) => { $crate::wc_log!(Info, $($arg)+) };
}

/// Logs a warn-level record for failures the session survives.
#[macro_export]
macro_rules! wc_warn {
    ($($arg:tt)+) => { $crate::wc_log!(Warn, $($arg)+) };
}

/// Logs an error-level record for failures that end the session.
#[macro_export]
macro_rules! wc_error {
    ($($arg:tt)+) => { $crate::wc_log!(Error, $($arg)+) };
}

/// Destination for log output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LogDestination {
    /// Write to the terminal's stderr.
    Stderr,
    /// Write to the given file, truncating it.
    File(PathBuf),
}

/// Installs the global logger. `LevelFilter::Off` installs nothing and
/// leaves any log file untouched.
pub fn initialize(destination: LogDestination, level: LevelFilter) {
    if level == LevelFilter::Off {
        return;
    }

    let config = build_config();

    let loggers: Vec<Box<dyn SharedLogger>> = match destination {
        LogDestination::Stderr => {
            vec![TermLogger::new(
                level,
                config,
                TerminalMode::Stderr,
                ColorChoice::Auto,
            )]
        }
        LogDestination::File(path) => match create_file_logger(level, config, &path) {
            Some(file_logger) => vec![file_logger],
            None => return,
        },
    };

    // A logger installed earlier in the process wins.
    let _ = CombinedLogger::init(loggers);
}

/// Initializes a stderr logger for unit and integration tests.
///
/// Debug level in debug builds, info otherwise. No-ops if another test
/// already installed a logger.
pub fn initialize_for_tests() {
    let level = if cfg!(debug_assertions) {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };
    initialize(LogDestination::Stderr, level);
}

fn build_config() -> Config {
    ConfigBuilder::new()
        .set_time_format_rfc3339()
        .set_target_level(LevelFilter::Error)
        .build()
}

fn create_file_logger(
    level: LevelFilter,
    config: Config,
    path: &Path,
) -> Option<Box<WriteLogger<File>>> {
    match File::create(path) {
        Ok(file) => Some(WriteLogger::new(level, config, file)),
        Err(err) => {
            eprintln!("Warning: Could not create log file at {:?}: {}", path, err);
            None
        }
    }
}
