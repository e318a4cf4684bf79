//! # Configuration
//!
//! Centralizes all settings with a clear override hierarchy:
//! defaults → config file → env vars → CLI flags.
//!
//! Config lives at `~/.mlcourse/config.toml`. If missing on first run, a
//! commented-out default is generated so users can discover all options.

use log::{debug, info, warn};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

// ============================================================================
// Config Structs (all fields Option<T> for sparse TOML)
// ============================================================================

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct CourseConfig {
    #[serde(default)]
    pub general: GeneralConfig,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct GeneralConfig {
    /// Course TOML to load instead of the built-in one.
    pub course_file: Option<String>,
    /// Where the language preference is kept.
    pub preferences_file: Option<String>,
}

// ============================================================================
// Defaults
// ============================================================================

const CONFIG_DIR: &str = ".mlcourse";
const PREFERENCES_FILE: &str = "preferences.json";

// ============================================================================
// Resolved Config (concrete values, no Options)
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedConfig {
    /// `None` = built-in course.
    pub course_file: Option<PathBuf>,
    pub preferences_path: PathBuf,
}

/// Values taken from the command line (None = not specified).
#[derive(Debug, Default, Clone)]
pub struct CliOverrides {
    pub course_file: Option<PathBuf>,
    pub preferences_file: Option<PathBuf>,
}

// ============================================================================
// Error Type
// ============================================================================

#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Parse(toml::de::Error),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "config I/O error: {e}"),
            ConfigError::Parse(e) => write!(f, "config parse error: {e}"),
        }
    }
}

impl std::error::Error for ConfigError {}

// ============================================================================
// Loading
// ============================================================================

/// Returns `~/.mlcourse`.
pub fn config_dir() -> Option<PathBuf> {
    dirs::home_dir().map(|h| h.join(CONFIG_DIR))
}

/// Returns the path to `~/.mlcourse/config.toml`.
pub fn config_path() -> Option<PathBuf> {
    config_dir().map(|d| d.join("config.toml"))
}

/// Load config from `~/.mlcourse/config.toml`.
///
/// If the file doesn't exist, generates a commented-out default and
/// returns `CourseConfig::default()`. If it exists but is malformed,
/// returns `ConfigError::Parse`.
pub fn load_config() -> Result<CourseConfig, ConfigError> {
    let path = match config_path() {
        Some(p) => p,
        None => {
            warn!("Could not determine home directory, using default config");
            return Ok(CourseConfig::default());
        }
    };

    if !path.exists() {
        info!("No config file found, generating default at {}", path.display());
        generate_default_config(&path);
        return Ok(CourseConfig::default());
    }

    load_config_from(&path)
}

pub fn load_config_from(path: &Path) -> Result<CourseConfig, ConfigError> {
    let contents = fs::read_to_string(path).map_err(ConfigError::Io)?;
    let config: CourseConfig = toml::from_str(&contents).map_err(ConfigError::Parse)?;
    info!("Loaded config from {}", path.display());
    debug!("Config: {:?}", config);
    Ok(config)
}

/// Generates a commented-out default config file at the given path.
fn generate_default_config(path: &Path) {
    let default_content = r#"# mlcourse configuration
# All settings are optional. Defaults are used for anything not specified.
# Override hierarchy: defaults → this file → env vars → CLI flags.

# [general]
# course_file = "my-course.toml"         # Relative to ~/.mlcourse/ (or MLCOURSE_COURSE_FILE)
# preferences_file = "preferences.json"  # Relative to ~/.mlcourse/ (or MLCOURSE_PREFERENCES_FILE)
"#;

    if let Some(parent) = path.parent() {
        if let Err(e) = fs::create_dir_all(parent) {
            warn!("Failed to create config directory: {}", e);
            return;
        }
    }
    if let Err(e) = fs::write(path, default_content) {
        warn!("Failed to write default config: {}", e);
    }
}

// ============================================================================
// Resolution
// ============================================================================

/// Resolve the final config by collapsing: defaults → config file → env vars → CLI.
pub fn resolve(config: &CourseConfig, cli: &CliOverrides) -> ResolvedConfig {
    resolve_with_env(config, cli, |name| std::env::var(name).ok())
}

fn resolve_with_env(
    config: &CourseConfig,
    cli: &CliOverrides,
    env: impl Fn(&str) -> Option<String>,
) -> ResolvedConfig {
    let base = config_dir().unwrap_or_else(|| PathBuf::from("."));

    // Course: CLI → env → config → built-in
    let course_file = cli
        .course_file
        .clone()
        .or_else(|| env("MLCOURSE_COURSE_FILE").map(PathBuf::from))
        .or_else(|| config.general.course_file.as_ref().map(|f| base.join(f)));

    // Preferences: CLI → env → config → default
    let preferences_path = cli
        .preferences_file
        .clone()
        .or_else(|| env("MLCOURSE_PREFERENCES_FILE").map(PathBuf::from))
        .or_else(|| config.general.preferences_file.as_ref().map(|f| base.join(f)))
        .unwrap_or_else(|| base.join(PREFERENCES_FILE));

    ResolvedConfig {
        course_file,
        preferences_path,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn no_env(_: &str) -> Option<String> {
        None
    }

    #[test]
    fn test_default_config_parses() {
        let config = CourseConfig::default();
        assert!(config.general.course_file.is_none());
        assert!(config.general.preferences_file.is_none());
    }

    #[test]
    fn test_resolve_uses_defaults_when_empty() {
        let resolved = resolve_with_env(&CourseConfig::default(), &CliOverrides::default(), no_env);
        assert_eq!(resolved.course_file, None);
        assert!(resolved.preferences_path.ends_with(PREFERENCES_FILE));
    }

    #[test]
    fn test_config_values_are_relative_to_config_dir() {
        let config = CourseConfig {
            general: GeneralConfig {
                course_file: Some("custom.toml".to_string()),
                preferences_file: Some("prefs.json".to_string()),
            },
        };
        let resolved = resolve_with_env(&config, &CliOverrides::default(), no_env);
        let course = resolved.course_file.unwrap();
        assert!(course.ends_with("custom.toml"));
        assert!(resolved.preferences_path.ends_with("prefs.json"));
        assert_eq!(course.parent(), resolved.preferences_path.parent());
    }

    #[test]
    fn test_env_overrides_config() {
        let config = CourseConfig {
            general: GeneralConfig {
                course_file: Some("custom.toml".to_string()),
                ..Default::default()
            },
        };
        let env = |name: &str| match name {
            "MLCOURSE_COURSE_FILE" => Some("/tmp/env-course.toml".to_string()),
            _ => None,
        };
        let resolved = resolve_with_env(&config, &CliOverrides::default(), env);
        assert_eq!(resolved.course_file, Some(PathBuf::from("/tmp/env-course.toml")));
    }

    #[test]
    fn test_cli_wins() {
        let cli = CliOverrides {
            course_file: Some(PathBuf::from("cli.toml")),
            preferences_file: Some(PathBuf::from("cli.json")),
        };
        let env = |_: &str| Some("/tmp/from-env".to_string());
        let resolved = resolve_with_env(&CourseConfig::default(), &cli, env);
        assert_eq!(resolved.course_file, Some(PathBuf::from("cli.toml")));
        assert_eq!(resolved.preferences_path, PathBuf::from("cli.json"));
    }

    #[test]
    fn test_sparse_toml_parses() {
        let toml_str = r#"
[general]
course_file = "advanced.toml"
"#;
        let config: CourseConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.general.course_file.as_deref(), Some("advanced.toml"));
        assert!(config.general.preferences_file.is_none());
    }

    #[test]
    fn test_load_config_from_reports_parse_errors() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "[general\ncourse_file = 1").unwrap();
        assert!(matches!(load_config_from(&path), Err(ConfigError::Parse(_))));
    }

    #[test]
    fn test_empty_file_is_default() {
        let config: CourseConfig = toml::from_str("").unwrap();
        assert!(config.general.course_file.is_none());
    }
}
