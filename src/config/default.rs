//! Default configuration template and file creation utilities.
//!
//! Provides a commented TOML template that matches `Config::default()` and
//! functions to write it to the XDG config path.

use std::fs;
use std::path::{Path, PathBuf};

use crate::config::error::ConfigError;
use crate::config::xdg;

// ---------------------------------------------------------------------------
// Default TOML template
// ---------------------------------------------------------------------------

/// A commented TOML template with all default values.
///
/// Every value here must match `Config::default()` from `schema.rs`.
pub const DEFAULT_CONFIG_TEMPLATE: &str = r##"# Midshift MPL Dashboard Configuration
#
# This file was auto-generated with default values.
# All values shown below are the built-in defaults.
#
# Location: $XDG_CONFIG_HOME/midshift-dashboard/config.toml

# ==============================================================================
# TUI Configuration
# ==============================================================================

[tui]

# Render tick rate as a human-readable duration.
# Examples: "250ms", "500ms", "1s"
tick_rate = "250ms"

# Colors assigned to people by roster position ("#RRGGBB").
# When the roster is longer than the palette, colors wrap around.
# The special series takes the position right after the last roster member.
palette = ["#FDA4AF", "#A5B4FC", "#6EE7B7", "#FBCFE8", "#FDE68A"]

# ==============================================================================
# Data Configuration
# ==============================================================================

[data]

# Path to a TOML dataset file. Empty uses the built-in roster.
# Tilde (~) is expanded to the user's home directory.
# The --data command-line flag takes precedence over this value.
path = ""

# ==============================================================================
# Logging Configuration
# ==============================================================================

[logging]

# Log filter used when MIDSHIFT_LOG is not set.
# Options: "error", "warn", "info", "debug", "trace"
level = "warn"

# Path to log file. Empty string means log to stderr.
# Set this when running the TUI so log lines do not draw over the screen.
file = ""
"##;

// ---------------------------------------------------------------------------
// File creation functions
// ---------------------------------------------------------------------------

/// Creates (or force-overwrites) the default config file at the XDG location.
pub fn create_default_config(force: bool) -> Result<PathBuf, ConfigError> {
    let path = xdg::config_path();
    create_default_config_at(&path, force)?;
    Ok(path)
}

/// Writes the default template to `path`.
///
/// - If the file exists and `force` is `false`, returns `ConfigError::AlreadyExists`.
/// - If the file exists and `force` is `true`, backs it up to `.toml.backup` first.
pub fn create_default_config_at(path: &Path, force: bool) -> Result<(), ConfigError> {
    if path.exists() {
        if !force {
            return Err(ConfigError::AlreadyExists {
                path: path.to_path_buf(),
            });
        }
        let backup_path = path.with_extension("toml.backup");
        fs::rename(path, &backup_path).map_err(|e| ConfigError::WriteError {
            path: backup_path.clone(),
            source: e,
        })?;
        tracing::info!("Backed up existing config to {}", backup_path.display());
    }

    write_default_config(path)?;
    tracing::info!("Created default configuration at {}", path.display());
    Ok(())
}

/// Writes the default template to `path`, creating parent dirs and setting 0600 permissions.
fn write_default_config(path: &Path) -> Result<(), ConfigError> {
    let write_error = |source| ConfigError::WriteError {
        path: path.to_path_buf(),
        source,
    };

    if let Some(parent) = path.parent() {
        xdg::ensure_dir(parent).map_err(write_error)?;
    }
    fs::write(path, DEFAULT_CONFIG_TEMPLATE).map_err(write_error)?;

    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        fs::set_permissions(path, fs::Permissions::from_mode(0o600)).map_err(write_error)?;
    }

    Ok(())
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
