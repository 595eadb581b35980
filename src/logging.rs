//! Tracing setup
//!
//! The CLI logs to stderr. The TUI owns the terminal, so it logs to a file
//! in the config directory instead.

use std::fs::OpenOptions;
use std::path::Path;
use std::sync::{Mutex, Once};

use tracing_subscriber::{fmt, EnvFilter};

use crate::error::{LedgerError, LedgerResult};

static INIT_TRACING: Once = Once::new();

/// Filter used when neither `RUST_LOG` nor the settings give a valid one
pub const DEFAULT_FILTER: &str = "moonlight_ledger=info";

/// Where log lines go
#[derive(Debug, Clone, Copy)]
pub enum LogTarget<'a> {
    Stderr,
    File(&'a Path),
}

/// Build the filter: `RUST_LOG` wins, then the configured directive.
pub fn build_filter(configured: &str) -> EnvFilter {
    if std::env::var_os(EnvFilter::DEFAULT_ENV).is_some() {
        if let Ok(filter) = EnvFilter::try_from_default_env() {
            return filter;
        }
    }

    EnvFilter::try_new(configured).unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
}

/// Install the global subscriber. Later calls are no-ops.
pub fn init(target: LogTarget<'_>, configured: &str) -> LedgerResult<()> {
    let writer = match target {
        LogTarget::Stderr => None,
        LogTarget::File(path) => {
            if let Some(parent) = path.parent() {
                std::fs::create_dir_all(parent)?;
            }
            let file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)
                .map_err(|e| LedgerError::Io(format!("Failed to open log file: {}", e)))?;
            Some(file)
        }
    };

    INIT_TRACING.call_once(|| {
        let filter = build_filter(configured);

        // A subscriber may already be installed by a test harness
        let _ = match writer {
            Some(file) => fmt()
                .with_env_filter(filter)
                .with_ansi(false)
                .with_writer(Mutex::new(file))
                .try_init(),
            None => fmt()
                .with_env_filter(filter)
                .with_writer(std::io::stderr)
                .try_init(),
        };

        tracing::debug!("tracing initialized");
    });

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_init_is_idempotent() {
        let temp_dir = TempDir::new().unwrap();
        let log = temp_dir.path().join("logs").join("moonlight.log");

        init(LogTarget::File(&log), DEFAULT_FILTER).unwrap();
        init(LogTarget::Stderr, DEFAULT_FILTER).unwrap();
        assert!(log.exists());
    }
}
