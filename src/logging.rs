//! Logging initialisation via tracing-subscriber.

use std::path::Path;

use anyhow::{Context, Result, anyhow};
use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt::writer::BoxMakeWriter;

/// Installs the global subscriber. `RUST_LOG` takes precedence over the
/// level derived from `verbose`. With `log_file`, lines are appended to that
/// file instead of stderr.
pub fn init(verbose: bool, log_file: Option<&Path>) -> Result<()> {
    let level = if verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(level))
        .with_context(|| format!("invalid log level '{level}'"))?;

    let writer = match log_file {
        Some(path) => {
            let file = std::fs::OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)
                .with_context(|| format!("failed to open log file {}", path.display()))?;
            BoxMakeWriter::new(file)
        }
        None => BoxMakeWriter::new(std::io::stderr),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(writer)
        .with_ansi(log_file.is_none())
        .try_init()
        .map_err(|err| anyhow!("failed to set subscriber: {err}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn init_writes_to_file_or_reports_existing_subscriber() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("javsp.log");
        match init(false, Some(&path)) {
            Ok(()) => assert!(path.exists()),
            Err(err) => assert!(err.to_string().contains("set subscriber")),
        }
    }

    #[test]
    fn unwritable_log_file_is_reported() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("missing-dir").join("javsp.log");
        let err = init(false, Some(&path)).unwrap_err();
        assert!(err.to_string().contains("failed to open log file"));
    }
}
