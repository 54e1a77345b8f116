//! Logging initialization for the Midshift dashboard.
//!
//! Configures the `tracing` subscriber with level filtering via the
//! `MIDSHIFT_LOG` environment variable, falling back to the configured level.
//!
//! The TUI only logs when `logging.file` is set; other commands fall back
//! to stderr.
//!
//! ```bash
//! MIDSHIFT_LOG=debug midshift summary --view rhay
//! ```

use std::fs::OpenOptions;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tracing_subscriber::{fmt, EnvFilter};

/// Environment variable holding filter directives.
pub const LOG_ENV_VAR: &str = "MIDSHIFT_LOG";

/// Builds the filter from `MIDSHIFT_LOG`, else `default_level`, else `warn`.
pub fn build_filter(default_level: &str) -> EnvFilter {
    EnvFilter::try_from_env(LOG_ENV_VAR)
        .or_else(|_| EnvFilter::try_new(default_level))
        .unwrap_or_else(|_| EnvFilter::new("warn"))
}

/// Where log lines are written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LogTarget {
    /// Append to a file.
    File(PathBuf),
    /// Write to stderr.
    Stderr,
    /// Drop every line.
    Discard,
}

impl LogTarget {
    /// Picks the target for a configured log file.
    ///
    /// Without a file, commands that own the terminal discard logs since
    /// stderr shares the screen being drawn.
    pub fn select(file: Option<&Path>, owns_terminal: bool) -> Self {
        match file {
            Some(path) => Self::File(path.to_path_buf()),
            None if owns_terminal => Self::Discard,
            None => Self::Stderr,
        }
    }
}

/// Initialize the tracing subscriber.
///
/// Does nothing if a global subscriber is already installed.
pub fn init(default_level: &str, target: &LogTarget) -> std::io::Result<()> {
    let filter = build_filter(default_level);
    let builder = fmt().with_env_filter(filter).with_target(false);

    let result = match target {
        LogTarget::File(path) => {
            let log_file = OpenOptions::new().create(true).append(true).open(path)?;
            builder
                .with_ansi(false)
                .with_writer(Mutex::new(log_file))
                .try_init()
        }
        LogTarget::Stderr => builder.with_writer(std::io::stderr).try_init(),
        LogTarget::Discard => builder.with_writer(std::io::sink).try_init(),
    };

    if result.is_err() {
        tracing::debug!("tracing subscriber already installed");
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    #[test]
    fn env_filter_parses_valid_directives() {
        let directives = ["info", "debug", "warn", "error", "trace"];
        for d in directives {
            let filter = EnvFilter::try_new(d);
            assert!(filter.is_ok(), "failed to parse directive: {}", d);
        }
    }

    #[test]
    fn env_filter_parses_module_directive() {
        let filter = EnvFilter::try_new("midshift_dashboard=debug,warn");
        assert!(filter.is_ok());
    }

    #[test]
    #[serial]
    fn build_filter_prefers_env_var() {
        std::env::set_var(LOG_ENV_VAR, "trace");
        let filter = build_filter("error");
        std::env::remove_var(LOG_ENV_VAR);
        assert_eq!(filter.to_string(), "trace");
    }

    #[test]
    #[serial]
    fn build_filter_uses_configured_level() {
        std::env::remove_var(LOG_ENV_VAR);
        assert_eq!(build_filter("info").to_string(), "info");
    }

    #[test]
    fn init_with_unwritable_file_fails() {
        let target = LogTarget::File(PathBuf::from("/nonexistent/dir/midshift.log"));
        assert!(init("info", &target).is_err());
    }

    #[test]
    fn terminal_owner_without_file_never_logs_to_stderr() {
        assert_eq!(LogTarget::select(None, true), LogTarget::Discard);
    }

    #[test]
    fn plain_command_without_file_logs_to_stderr() {
        assert_eq!(LogTarget::select(None, false), LogTarget::Stderr);
    }

    #[test]
    fn configured_file_wins_for_every_command() {
        let path = Path::new("/tmp/midshift.log");
        for owns_terminal in [true, false] {
            assert_eq!(
                LogTarget::select(Some(path), owns_terminal),
                LogTarget::File(path.to_path_buf())
            );
        }
    }
}
