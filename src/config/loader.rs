//! Configuration file loader with position-aware error reporting.
//!
//! Loads TOML configuration from a specific path or the default XDG location.
//! When the default location has no file, returns `Config::default()`.

use std::fs;
use std::path::Path;

use crate::config::error::ConfigError;
use crate::config::schema::Config;
use crate::config::xdg;

/// Stateless configuration loader.
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load configuration from a specific path.
    ///
    /// Returns `ConfigError::NotFound` if the file does not exist, or
    /// `ConfigError::ReadError` for other I/O failures.
    pub fn load_from_path(path: &Path) -> Result<Config, ConfigError> {
        let content = fs::read_to_string(path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                ConfigError::NotFound {
                    path: path.to_path_buf(),
                }
            } else {
                ConfigError::ReadError {
                    path: path.to_path_buf(),
                    source: e,
                }
            }
        })?;
        Self::parse_toml(&content, path)
    }

    /// Load configuration from the default XDG location.
    ///
    /// If no file exists at the default path, returns `Config::default()`
    /// instead of an error.
    pub fn load_default() -> Result<Config, ConfigError> {
        let path = xdg::config_path();
        if path.exists() {
            Self::load_from_path(&path)
        } else {
            tracing::debug!("No config file at {:?}, using defaults", path);
            Ok(Config::default())
        }
    }

    /// Load from `path` when given (must exist), otherwise from the default location.
    pub fn load(path: Option<&Path>) -> Result<Config, ConfigError> {
        match path {
            Some(path) => Self::load_from_path(path),
            None => Self::load_default(),
        }
    }

    /// Parse a TOML string into `Config` with position-aware error reporting.
    fn parse_toml(content: &str, path: &Path) -> Result<Config, ConfigError> {
        toml::from_str(content).map_err(|e| {
            let (line, column) = toml_error_position(content, &e);
            ConfigError::ParseError {
                path: path.to_path_buf(),
                line,
                column,
                message: e.message().to_string(),
            }
        })
    }
}

/// One-based `(line, column)` of a TOML error, or `(0, 0)` when unknown.
pub(crate) fn toml_error_position(content: &str, err: &toml::de::Error) -> (usize, usize) {
    err.span()
        .map(|span| {
            let start = span.start.min(content.len());
            let line = content[..start].matches('\n').count() + 1;
            let last_newline = content[..start].rfind('\n').map(|p| p + 1).unwrap_or(0);
            let column = start - last_newline + 1;
            (line, column)
        })
        .unwrap_or((0, 0))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;
    use std::io::Write;
    use std::path::PathBuf;

    /// Run a closure with `XDG_CONFIG_HOME` temporarily set, then restore.
    fn with_xdg_config<F: FnOnce()>(value: Option<&str>, f: F) {
        let original = std::env::var("XDG_CONFIG_HOME").ok();
        match value {
            Some(v) => std::env::set_var("XDG_CONFIG_HOME", v),
            None => std::env::remove_var("XDG_CONFIG_HOME"),
        }
        f();
        match original {
            Some(v) => std::env::set_var("XDG_CONFIG_HOME", v),
            None => std::env::remove_var("XDG_CONFIG_HOME"),
        }
    }

    // -----------------------------------------------------------------------
    // parse_toml
    // -----------------------------------------------------------------------

    #[test]
    fn parse_valid_full_config() {
        let toml_str = r##"
[tui]
tick_rate = "100ms"
palette = ["#112233", "#445566"]

[data]
path = "/srv/midshift/data.toml"

[logging]
level = "debug"
file = "/var/log/midshift.log"
"##;
        let path = PathBuf::from("test.toml");
        let config = ConfigLoader::parse_toml(toml_str, &path).expect("valid TOML should parse");
        assert_eq!(config.tui.tick_rate, "100ms");
        assert_eq!(config.tui.palette, vec!["#112233", "#445566"]);
        assert_eq!(config.data.path(), Some(PathBuf::from("/srv/midshift/data.toml")));
        assert_eq!(config.logging.level, "debug");
    }

    #[test]
    fn parse_empty_string_returns_defaults() {
        let path = PathBuf::from("empty.toml");
        let config =
            ConfigLoader::parse_toml("", &path).expect("empty string should parse to defaults");
        assert_eq!(config, Config::default());
    }

    #[test]
    fn parse_error_reports_position() {
        let content = "[tui]\ntick_rate = \n";
        let path = PathBuf::from("bad.toml");
        let err = ConfigLoader::parse_toml(content, &path).expect_err("invalid TOML");
        match err {
            ConfigError::ParseError {
                path: p,
                line,
                column,
                ..
            } => {
                assert_eq!(p, path);
                assert!(line >= 2, "expected error on line 2 or later, got {line}");
                assert!(column >= 1);
            }
            other => panic!("expected ParseError, got {other:?}"),
        }
    }

    #[test]
    fn parse_wrong_type_is_parse_error() {
        let content = "[tui]\ntick_rate = 5\n";
        let err = ConfigLoader::parse_toml(content, Path::new("t.toml")).expect_err("bad type");
        assert!(matches!(err, ConfigError::ParseError { .. }));
    }

    #[test]
    fn toml_error_position_first_line() {
        let content = "= oops";
        let err = toml::from_str::<Config>(content).expect_err("invalid");
        let (line, column) = toml_error_position(content, &err);
        assert_eq!(line, 1);
        assert!(column >= 1);
    }

    // -----------------------------------------------------------------------
    // load_from_path / load_default
    // -----------------------------------------------------------------------

    #[test]
    fn load_from_missing_path_is_not_found() {
        let err = ConfigLoader::load_from_path(Path::new("/nonexistent/midshift/config.toml"))
            .expect_err("missing");
        assert!(matches!(err, ConfigError::NotFound { .. }));
    }

    #[test]
    fn load_from_existing_file() {
        let mut file = tempfile::NamedTempFile::new().expect("temp file");
        writeln!(file, "[logging]\nlevel = \"trace\"").expect("write");
        let config = ConfigLoader::load(Some(file.path())).expect("valid file");
        assert_eq!(config.logging.level, "trace");
    }

    #[test]
    #[serial]
    fn load_default_without_file_returns_defaults() {
        let temp = tempfile::tempdir().expect("temp dir");
        let dir = temp.path().to_str().expect("utf8 path").to_string();
        with_xdg_config(Some(&dir), || {
            let config = ConfigLoader::load_default().expect("defaults");
            assert_eq!(config, Config::default());
        });
    }

    #[test]
    #[serial]
    fn load_default_reads_xdg_file() {
        let temp = tempfile::tempdir().expect("temp dir");
        let app_dir = temp.path().join("midshift-dashboard");
        std::fs::create_dir_all(&app_dir).expect("mkdir");
        std::fs::write(app_dir.join("config.toml"), "[tui]\ntick_rate = \"1s\"\n")
            .expect("write");
        let dir = temp.path().to_str().expect("utf8 path").to_string();
        with_xdg_config(Some(&dir), || {
            let config = ConfigLoader::load(None).expect("valid config");
            assert_eq!(config.tui.tick_rate, "1s");
        });
    }
}
