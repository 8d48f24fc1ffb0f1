//! Tracing subscriber setup
//!
//! Console logs go to stderr so that `list --output json` stays clean on
//! stdout. The interactive browser owns the terminal, so it only ever logs
//! to the rolling file (or nowhere).

use std::path::Path;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

const LOG_FILE_PREFIX: &str = "advocate-directory.log";

/// Filter directive for a `-v` count
pub fn verbosity_directive(verbose: u8) -> &'static str {
    match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace", // -vvv or more
    }
}

/// Install the global subscriber.
///
/// Returns the file writer guard when a log directory is configured; it must
/// be held until the program exits or buffered lines are lost.
pub fn init_logging(
    verbose: u8,
    directory: Option<&Path>,
    console: bool,
) -> std::io::Result<Option<WorkerGuard>> {
    let filter = EnvFilter::new(verbosity_directive(verbose));

    let (file_layer, guard) = match directory {
        Some(dir) => {
            std::fs::create_dir_all(dir)?;
            let file_appender = tracing_appender::rolling::daily(dir, LOG_FILE_PREFIX);
            let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);
            let layer = fmt::layer()
                .with_writer(non_blocking)
                .with_ansi(false)
                .with_target(true);
            (Some(layer), Some(guard))
        }
        None => (None, None),
    };

    let console_layer = console.then(|| {
        fmt::layer()
            .with_writer(std::io::stderr)
            .with_target(false)
    });

    tracing_subscriber::registry()
        .with(filter)
        .with(console_layer)
        .with(file_layer)
        .init();

    Ok(guard)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_verbosity_directive() {
        assert_eq!(verbosity_directive(0), "warn");
        assert_eq!(verbosity_directive(1), "info");
        assert_eq!(verbosity_directive(2), "debug");
        assert_eq!(verbosity_directive(3), "trace");
        assert_eq!(verbosity_directive(9), "trace");
    }

    #[test]
    fn test_file_logging_creates_directory() {
        let dir = tempfile::tempdir().unwrap();
        let log_dir = dir.path().join("logs");

        let guard = init_logging(1, Some(&log_dir), false).unwrap();
        tracing::info!("hello from the test");
        drop(guard);

        assert!(log_dir.is_dir());
        let written = std::fs::read_dir(&log_dir)
            .unwrap()
            .filter_map(|e| e.ok())
            .any(|e| e.file_name().to_string_lossy().starts_with(LOG_FILE_PREFIX));
        assert!(written);
    }
}
