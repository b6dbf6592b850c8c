mod cli;
mod input;

use std::io;
use std::process::ExitCode;

use clap::Parser;
use wordcount_engine::{Session, SessionReport};
use wordcount_logging::{wc_error, wc_info};

use crate::cli::Cli;

fn main() -> ExitCode {
    let cli = Cli::parse();
    wordcount_logging::initialize(cli.log_destination(), cli.log_level.into());

    match run(&cli) {
        Ok(report) => {
            wc_info!(
                "Finished reason={:?} tokens={} words={}",
                report.reason,
                report.tokens_read,
                report.words_counted
            );
            ExitCode::SUCCESS
        }
        Err(err) => {
            wc_error!("{:#}", err);
            eprintln!("wordcount: {err:#}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> anyhow::Result<SessionReport> {
    let config = cli.session_config(input::stdin_is_terminal())?;
    let input = input::open(cli.file.as_deref())?;

    let stdout = io::stdout();
    let mut output = stdout.lock();
    let report = Session::new(config).run(input, &mut output)?;
    Ok(report)
}
