//! TOML configuration schema types for the Midshift dashboard.
//!
//! All structs derive `Deserialize` and `Serialize` with defaults via
//! `#[serde(default)]`, so an empty file is a valid configuration.
//!
//! Duration fields use human-readable strings (e.g. `"250ms"`, `"1s"`)
//! parsed by the `humantime` crate at the call site.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;

use crate::config::error::ConfigError;
use crate::config::xdg;

/// Default chart and card colors, one per roster position.
pub const DEFAULT_PALETTE: [&str; 5] = ["#FDA4AF", "#A5B4FC", "#6EE7B7", "#FBCFE8", "#FDE68A"];

// ---------------------------------------------------------------------------
// Top-level Config
// ---------------------------------------------------------------------------

/// Root configuration encompassing all sections.
///
/// ```toml
/// [tui]
/// [data]
/// [logging]
/// ```
#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct Config {
    /// TUI appearance and behavior settings.
    pub tui: TuiConfig,
    /// Dataset source.
    pub data: DataConfig,
    /// Log output settings.
    pub logging: LoggingConfig,
}

// ---------------------------------------------------------------------------
// TUI
// ---------------------------------------------------------------------------

/// TUI timing and color configuration.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct TuiConfig {
    /// Render tick rate as a human-readable duration (e.g. `"250ms"`).
    pub tick_rate: String,
    /// `#RRGGBB` colors assigned to people by roster position, wrapping
    /// around when the roster is longer than the palette.
    pub palette: Vec<String>,
}

impl Default for TuiConfig {
    fn default() -> Self {
        Self {
            tick_rate: "250ms".to_string(),
            palette: DEFAULT_PALETTE.iter().map(|c| c.to_string()).collect(),
        }
    }
}

impl TuiConfig {
    /// Parses `tick_rate` into a non-zero [`Duration`].
    pub fn tick_rate(&self) -> Result<Duration, ConfigError> {
        let invalid = |message: String| ConfigError::InvalidValue {
            key: "tui.tick_rate".to_string(),
            value: self.tick_rate.clone(),
            message,
        };
        let rate = humantime::parse_duration(&self.tick_rate).map_err(|e| invalid(e.to_string()))?;
        if rate.is_zero() {
            return Err(invalid("must be greater than zero".to_string()));
        }
        Ok(rate)
    }
}

// ---------------------------------------------------------------------------
// Data
// ---------------------------------------------------------------------------

/// Where the dataset comes from.
#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct DataConfig {
    /// Path to a TOML dataset file. Empty means the built-in dataset.
    /// Tilde (`~`) is expanded to the user's home directory.
    pub path: String,
}

impl DataConfig {
    /// Resolved dataset path, or `None` for the built-in dataset.
    pub fn path(&self) -> Option<PathBuf> {
        non_empty_path(&self.path)
    }
}

// ---------------------------------------------------------------------------
// Logging
// ---------------------------------------------------------------------------

/// Log level and destination.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct LoggingConfig {
    /// Default filter directive when `MIDSHIFT_LOG` is unset.
    pub level: String,
    /// Log file path. Empty means stderr.
    pub file: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "warn".to_string(),
            file: String::new(),
        }
    }
}

impl LoggingConfig {
    /// Resolved log file path, or `None` for stderr.
    pub fn file(&self) -> Option<PathBuf> {
        non_empty_path(&self.file)
    }
}

fn non_empty_path(raw: &str) -> Option<PathBuf> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(xdg::expand_tilde(trimmed))
    }
}
