use std::path::Path;

use crate::error::ConfigError;
use crate::game::{Cell, Mark};

/// Top-level application configuration, loadable from TOML.
#[derive(Debug, Clone, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub players: PlayersConfig,
    pub display: DisplayConfig,
}

/// Player names, in turn order.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct PlayersConfig {
    pub first: String,
    pub second: String,
}

impl Default for PlayersConfig {
    fn default() -> Self {
        PlayersConfig {
            first: "player 1".to_string(),
            second: "player 2".to_string(),
        }
    }
}

/// Characters used by the console board.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    pub empty: char,
    pub first: char,
    pub second: char,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        DisplayConfig {
            empty: 'O',
            first: '#',
            second: '@',
        }
    }
}

impl DisplayConfig {
    /// Glyph for one cell
    pub fn glyph(&self, cell: Cell) -> char {
        match cell.mark() {
            None => self.empty,
            Some(Mark::A) => self.first,
            Some(Mark::B) => self.second,
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

    /// Load configuration from a TOML file, falling back to defaults if the file
    /// does not exist.
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            Self::load(path)
        } else {
            log::warn!("config file '{}' not found, using defaults", path.display());
            Ok(Self::default())
        }
    }

    /// Validate configuration values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.players.first.trim().is_empty() {
            return Err(ConfigError::Validation(
                "players.first must not be empty".into(),
            ));
        }
        if self.players.second.trim().is_empty() {
            return Err(ConfigError::Validation(
                "players.second must not be empty".into(),
            ));
        }

        let glyphs = [
            ("display.empty", self.display.empty),
            ("display.first", self.display.first),
            ("display.second", self.display.second),
        ];
        for (key, glyph) in glyphs {
            if glyph.is_whitespace() || glyph.is_control() {
                return Err(ConfigError::Validation(format!(
                    "{key} must be a visible character"
                )));
            }
        }
        if self.display.first == self.display.second
            || self.display.first == self.display.empty
            || self.display.second == self.display.empty
        {
            return Err(ConfigError::Validation(
                "display.empty, display.first and display.second must all differ".into(),
            ));
        }

        Ok(())
    }

    /// Generate a TOML string with all default values (useful for creating
    /// example config files).
    pub fn default_toml() -> String {
        toml::to_string_pretty(&AppConfig::default()).expect("default config serializes")
    }
}
