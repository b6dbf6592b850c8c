use std::fs::File;
use std::io::{self, BufRead, BufReader, IsTerminal};
use std::path::Path;

use anyhow::Context;
use wordcount_logging::wc_debug;

pub fn stdin_is_terminal() -> bool {
    io::stdin().is_terminal()
}

/// Opens `path`, or locks stdin when no path is given.
pub fn open(path: Option<&Path>) -> anyhow::Result<Box<dyn BufRead>> {
    match path {
        Some(path) => {
            let file = File::open(path)
                .with_context(|| format!("failed to open {}", path.display()))?;
            wc_debug!("Reading from {:?}", path);
            Ok(Box::new(BufReader::new(file)))
        }
        None => {
            wc_debug!("Reading from stdin");
            Ok(Box::new(io::stdin().lock()))
        }
    }
}
