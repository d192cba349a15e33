use std::path::Path;

use crate::error::ConfigError;

/// Top-level application configuration, loadable from TOML.
#[derive(Debug, Clone, Default, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub display: DisplayConfig,
}

/// Glyphs used to render the board and name the players in prompts.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    /// Glyph for the first seat's discs.
    pub red_symbol: char,
    /// Glyph for the second seat's discs.
    pub yellow_symbol: char,
    /// Glyph for an empty cell.
    pub empty_symbol: char,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        DisplayConfig {
            red_symbol: 'X',
            yellow_symbol: 'O',
            empty_symbol: '.',
        }
    }
}

impl AppConfig {
    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::FileRead {
            path: path.to_path_buf(),
            source: e,
        })?;
        let config: AppConfig = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file, falling back to defaults if the
    /// file does not exist.
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            Self::load(path)
        } else {
            tracing::debug!(path = %path.display(), "config file not found, using defaults");
            Ok(Self::default())
        }
    }

    /// Validate configuration values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let d = &self.display;
        if d.red_symbol == d.yellow_symbol
            || d.red_symbol == d.empty_symbol
            || d.yellow_symbol == d.empty_symbol
        {
            return Err(ConfigError::Validation(
                "display symbols must be distinct".into(),
            ));
        }
        for symbol in [d.red_symbol, d.yellow_symbol, d.empty_symbol] {
            if symbol.is_whitespace() {
                return Err(ConfigError::Validation(
                    "display symbols must not be whitespace".into(),
                ));
            }
        }
        Ok(())
    }

    /// Generate a TOML string with all default values (useful for creating
    /// example config files).
    pub fn default_toml() -> String {
        toml::to_string_pretty(&AppConfig::default()).expect("default config serializes")
    }
}
