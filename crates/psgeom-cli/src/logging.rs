use crate::error::{CliError, Result};
use std::fs::File;
use std::path::PathBuf;
use tracing::Subscriber;
use tracing_subscriber::{filter::LevelFilter, fmt, prelude::*};

/// `-q` silences everything; each `-v` opens one more level above WARN.
pub fn level_for(verbosity: u8, quiet: bool) -> LevelFilter {
    if quiet {
        return LevelFilter::OFF;
    }
    match verbosity {
        0 => LevelFilter::WARN,
        1 => LevelFilter::INFO,
        2 => LevelFilter::DEBUG,
        _ => LevelFilter::TRACE,
    }
}

pub fn setup_logging(verbosity: u8, quiet: bool, log_file: Option<PathBuf>) -> Result<()> {
    let file = log_file
        .map(|path| File::create(path).map_err(CliError::Io))
        .transpose()?;
    subscriber(level_for(verbosity, quiet), file).init();
    Ok(())
}

/// Compact stderr output plus, when given, a plain-text copy in `file` that
/// also records event targets and span fields.
fn subscriber(level: LevelFilter, file: Option<File>) -> impl Subscriber + Send + Sync {
    let stderr_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_ansi(true)
        .with_target(false)
        .compact();
    let file_layer = file.map(|file| {
        fmt::layer()
            .with_writer(file)
            .with_ansi(false)
            .with_target(true)
    });

    tracing_subscriber::registry()
        .with(level)
        .with(stderr_layer)
        .with(file_layer)
}
