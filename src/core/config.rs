//! # Configuration
//!
//! Centralizes all settings with a clear override hierarchy:
//! defaults → config file → env vars → CLI flags.
//!
//! Config lives at `~/.atlas/config.toml`. If missing on first run, a
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
pub struct AtlasConfig {
    #[serde(default)]
    pub source: SourceConfig,
    #[serde(default)]
    pub ui: UiConfig,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct SourceConfig {
    pub url: Option<String>,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct UiConfig {
    /// Theme used when no preference has been saved yet.
    pub dark_mode: Option<bool>,
    pub start_path: Option<String>,
}

// ============================================================================
// Defaults
// ============================================================================

pub const DEFAULT_COUNTRIES_URL: &str = "http://localhost:9000/countries";
pub const DEFAULT_START_PATH: &str = "/";
pub const DEFAULT_DARK_MODE: bool = true;

// ============================================================================
// Resolved Config (concrete values, no Options)
// ============================================================================

#[derive(Debug, Clone)]
pub struct ResolvedConfig {
    pub countries_url: String,
    pub start_path: String,
    /// Fallback theme; a persisted preference wins over this.
    pub dark_mode: bool,
}

/// Values taken from command-line flags. `None` = not specified.
#[derive(Debug, Default, Clone)]
pub struct CliOverrides {
    pub url: Option<String>,
    pub open: Option<String>,
    pub dark_mode: Option<bool>,
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

/// Returns `~/.atlas`.
pub fn atlas_dir() -> Option<PathBuf> {
    dirs::home_dir().map(|h| h.join(".atlas"))
}

/// Returns the path to `~/.atlas/config.toml`.
pub fn config_path() -> Option<PathBuf> {
    atlas_dir().map(|d| d.join("config.toml"))
}

/// Load config from `~/.atlas/config.toml`.
///
/// If the file doesn't exist, generates a commented-out default and
/// returns `AtlasConfig::default()`. If it exists but is malformed,
/// returns `ConfigError::Parse`.
pub fn load_config() -> Result<AtlasConfig, ConfigError> {
    let path = match config_path() {
        Some(p) => p,
        None => {
            warn!("Could not determine home directory, using default config");
            return Ok(AtlasConfig::default());
        }
    };
    load_config_from(&path)
}

pub fn load_config_from(path: &Path) -> Result<AtlasConfig, ConfigError> {
    if !path.exists() {
        info!("No config file found, generating default at {}", path.display());
        generate_default_config(path);
        return Ok(AtlasConfig::default());
    }

    let contents = fs::read_to_string(path).map_err(ConfigError::Io)?;
    let config: AtlasConfig = toml::from_str(&contents).map_err(ConfigError::Parse)?;
    info!("Loaded config from {}", path.display());
    debug!("Config: {:?}", config);
    Ok(config)
}

/// Generates a commented-out default config file at the given path.
fn generate_default_config(path: &Path) {
    let default_content = r#"# Atlas Configuration
# All settings are optional. Defaults are used for anything not specified.
# Override hierarchy: defaults → this file → env vars → CLI flags.

# [source]
# url = "http://localhost:9000/countries"   # Or set ATLAS_COUNTRIES_URL, or pass --url

# [ui]
# dark_mode = true          # Used until the theme is toggled once (Ctrl+T)
# start_path = "/"          # "/countries", "/BEL", ... Or pass --open
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
pub fn resolve(config: &AtlasConfig, cli: &CliOverrides) -> ResolvedConfig {
    // URL: CLI → env → config → default
    let countries_url = cli
        .url
        .clone()
        .or_else(|| std::env::var("ATLAS_COUNTRIES_URL").ok())
        .or_else(|| config.source.url.clone())
        .unwrap_or_else(|| DEFAULT_COUNTRIES_URL.to_string());

    // Start path: CLI → config → default
    let start_path = cli
        .open
        .clone()
        .or_else(|| config.ui.start_path.clone())
        .unwrap_or_else(|| DEFAULT_START_PATH.to_string());

    let dark_mode = cli
        .dark_mode
        .or(config.ui.dark_mode)
        .unwrap_or(DEFAULT_DARK_MODE);

    ResolvedConfig {
        countries_url,
        start_path,
        dark_mode,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_parses() {
        let config = AtlasConfig::default();
        assert!(config.source.url.is_none());
        assert!(config.ui.dark_mode.is_none());
    }

    #[test]
    fn test_resolve_uses_defaults_when_empty() {
        let config = AtlasConfig::default();
        let resolved = resolve(&config, &CliOverrides::default());
        if std::env::var("ATLAS_COUNTRIES_URL").is_err() {
            assert_eq!(resolved.countries_url, DEFAULT_COUNTRIES_URL);
        }
        assert_eq!(resolved.start_path, DEFAULT_START_PATH);
        assert_eq!(resolved.dark_mode, DEFAULT_DARK_MODE);
    }

    #[test]
    fn test_resolve_cli_wins() {
        let config = AtlasConfig {
            source: SourceConfig {
                url: Some("http://from-config/countries".to_string()),
            },
            ui: UiConfig {
                dark_mode: Some(true),
                start_path: Some("/countries".to_string()),
            },
        };
        let cli = CliOverrides {
            url: Some("http://from-cli/countries".to_string()),
            open: Some("/JPN".to_string()),
            dark_mode: Some(false),
        };
        let resolved = resolve(&config, &cli);
        assert_eq!(resolved.countries_url, "http://from-cli/countries");
        assert_eq!(resolved.start_path, "/JPN");
        assert!(!resolved.dark_mode);
    }

    #[test]
    fn test_config_values_override_defaults() {
        let config = AtlasConfig {
            ui: UiConfig {
                dark_mode: Some(false),
                start_path: Some("/BEL".to_string()),
            },
            ..Default::default()
        };
        let resolved = resolve(&config, &CliOverrides::default());
        assert_eq!(resolved.start_path, "/BEL");
        assert!(!resolved.dark_mode);
    }

    #[test]
    fn test_toml_round_trip() {
        let toml_str = r#"
[source]
url = "https://restcountries.example/v2/all"

[ui]
dark_mode = false
start_path = "/countries"
"#;
        let config: AtlasConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(
            config.source.url.as_deref(),
            Some("https://restcountries.example/v2/all")
        );
        assert_eq!(config.ui.dark_mode, Some(false));
        assert_eq!(config.ui.start_path.as_deref(), Some("/countries"));
    }

    #[test]
    fn test_sparse_toml_parses() {
        let toml_str = r#"
[ui]
dark_mode = true
"#;
        let config: AtlasConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.ui.dark_mode, Some(true));
        assert!(config.source.url.is_none());
        assert!(config.ui.start_path.is_none());
    }

    #[test]
    fn test_malformed_toml_is_parse_error() {
        let path = std::env::temp_dir().join(format!(
            "atlas-config-test-{}-malformed.toml",
            std::process::id()
        ));
        fs::write(&path, "[ui\ndark_mode = ").unwrap();
        let result = load_config_from(&path);
        let _ = fs::remove_file(&path);
        assert!(matches!(result, Err(ConfigError::Parse(_))));
    }

    #[test]
    fn test_missing_file_generates_default() {
        let dir = std::env::temp_dir().join(format!("atlas-config-test-{}", std::process::id()));
        let path = dir.join("config.toml");
        let _ = fs::remove_file(&path);

        let config = load_config_from(&path).unwrap();
        assert!(config.source.url.is_none());
        let generated = fs::read_to_string(&path).unwrap();
        assert!(generated.starts_with("# Atlas Configuration"));
        // The generated file is fully commented out, so it parses to defaults
        let reparsed = load_config_from(&path).unwrap();
        assert!(reparsed.ui.dark_mode.is_none());

        let _ = fs::remove_dir_all(&dir);
    }
}
