//! Platform-aware path resolution for midshift-dashboard.
//!
//! On **Linux**, follows the XDG Base Directory Specification:
//! `$XDG_CONFIG_HOME/midshift-dashboard` or `~/.config/midshift-dashboard`.
//!
//! On **macOS**, uses `~/Library/Application Support/midshift-dashboard`
//! unless `$XDG_CONFIG_HOME` is set.

use std::fs;
use std::path::{Path, PathBuf};

const APP_NAME: &str = "midshift-dashboard";

/// Returns the configuration directory for midshift-dashboard.
///
/// Resolution order:
/// 1. `$XDG_CONFIG_HOME/midshift-dashboard` (if env var set, any platform)
/// 2. Platform default:
///    - Linux: `~/.config/midshift-dashboard`
///    - macOS: `~/Library/Application Support/midshift-dashboard`
pub fn config_dir() -> PathBuf {
    if let Ok(xdg) = std::env::var("XDG_CONFIG_HOME") {
        if !xdg.is_empty() {
            return PathBuf::from(xdg).join(APP_NAME);
        }
    }
    platform_config_dir().join(APP_NAME)
}

/// Platform-native config base directory (without XDG override).
fn platform_config_dir() -> PathBuf {
    #[cfg(target_os = "macos")]
    {
        dirs::config_dir().unwrap_or_else(|| PathBuf::from("."))
    }
    #[cfg(not(target_os = "macos"))]
    {
        home_dir().join(".config")
    }
}

fn home_dir() -> PathBuf {
    dirs::home_dir().unwrap_or_else(|| PathBuf::from("."))
}

/// Returns the path to the main configuration file.
pub fn config_path() -> PathBuf {
    config_dir().join("config.toml")
}

/// Expands a leading `~` in a path string to the user's home directory.
///
/// If the path does not start with `~`, it is returned as-is.
pub fn expand_tilde(path: &str) -> PathBuf {
    if let Some(rest) = path.strip_prefix("~/") {
        home_dir().join(rest)
    } else if path == "~" {
        home_dir()
    } else {
        PathBuf::from(path)
    }
}

/// Creates a directory and all parent directories with mode 0700.
pub fn ensure_dir(path: &Path) -> std::io::Result<()> {
    fs::create_dir_all(path)?;
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        fs::set_permissions(path, fs::Permissions::from_mode(0o700))?;
    }
    Ok(())
}
