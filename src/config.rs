//! Game configuration.

use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, info, instrument};

/// Smallest supported board side length.
pub const MIN_FIELD_SIZE: usize = 3;
/// Largest supported board side length.
pub const MAX_FIELD_SIZE: usize = 100;
/// Smallest supported winning run length.
pub const MIN_WIN_COMBO_LENGTH: usize = 3;

/// Configuration for a game: board size, winning run length, and player
/// symbols.
#[derive(Debug, Clone, Getters, Serialize, Deserialize)]
pub struct GameConfig {
    /// Board side length (3-100).
    #[serde(default = "default_field_size")]
    field_size: usize,

    /// Winning run length (3 to the field size). Defaults to the field
    /// size, i.e. full-line wins.
    #[serde(default)]
    win_combo_length: Option<usize>,

    /// Symbol of the player who moves first.
    #[serde(default = "default_first_symbol")]
    first_symbol: String,

    /// Symbol of the player who moves second.
    #[serde(default = "default_second_symbol")]
    second_symbol: String,
}

fn default_field_size() -> usize {
    MIN_FIELD_SIZE
}

fn default_first_symbol() -> String {
    "x".to_string()
}

fn default_second_symbol() -> String {
    "o".to_string()
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new(default_field_size())
    }
}

impl GameConfig {
    /// Creates a configuration with the given field size, full-line wins,
    /// and the default `x`/`o` symbols.
    pub fn new(field_size: usize) -> Self {
        Self {
            field_size,
            win_combo_length: None,
            first_symbol: default_first_symbol(),
            second_symbol: default_second_symbol(),
        }
    }

    /// Sets an explicit winning run length.
    pub fn with_win_combo_length(mut self, length: usize) -> Self {
        self.win_combo_length = Some(length);
        self
    }

    /// Loads configuration from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading game config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config: Self = toml::from_str(&content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;

        info!(field_size = config.field_size, "Game config loaded");
        Ok(config)
    }

    /// The winning run length with the full-line default applied.
    pub fn resolved_win_combo_length(&self) -> usize {
        self.win_combo_length.unwrap_or(self.field_size)
    }

    /// Checks the configured ranges: field size in 3-100, winning run
    /// length in 3 to the field size.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] naming the out-of-range value.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(MIN_FIELD_SIZE..=MAX_FIELD_SIZE).contains(&self.field_size) {
            return Err(ConfigError::new(format!(
                "Field size {} out of range ({}-{})",
                self.field_size, MIN_FIELD_SIZE, MAX_FIELD_SIZE
            )));
        }

        let win_length = self.resolved_win_combo_length();
        if win_length < MIN_WIN_COMBO_LENGTH || win_length > self.field_size {
            return Err(ConfigError::new(format!(
                "Win combo length {} out of range ({}-{})",
                win_length, MIN_WIN_COMBO_LENGTH, self.field_size
            )));
        }

        Ok(())
    }
}

/// Configuration error with location tracking.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where the error occurred.
    pub line: u32,
    /// Source file where the error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new configuration error with caller location tracking.
    #[track_caller]
    pub fn new(message: impl Into<String>) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message: message.into(),
            line: loc.line(),
            file: loc.file(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        assert!(GameConfig::default().validate().is_ok());
    }

    #[test]
    fn test_field_size_bounds() {
        assert!(GameConfig::new(2).validate().is_err());
        assert!(GameConfig::new(3).validate().is_ok());
        assert!(GameConfig::new(100).validate().is_ok());
        assert!(GameConfig::new(101).validate().is_err());
    }

    #[test]
    fn test_win_combo_length_bounds() {
        assert!(GameConfig::new(5).with_win_combo_length(2).validate().is_err());
        assert!(GameConfig::new(5).with_win_combo_length(3).validate().is_ok());
        assert!(GameConfig::new(5).with_win_combo_length(5).validate().is_ok());
        assert!(GameConfig::new(5).with_win_combo_length(6).validate().is_err());
    }

    #[test]
    fn test_win_combo_length_defaults_to_field_size() {
        assert_eq!(GameConfig::new(7).resolved_win_combo_length(), 7);
        assert_eq!(
            GameConfig::new(7).with_win_combo_length(4).resolved_win_combo_length(),
            4
        );
    }

    #[test]
    fn test_toml_defaults() {
        let config: GameConfig = toml::from_str("field_size = 10\nwin_combo_length = 4").unwrap();
        assert_eq!(*config.field_size(), 10);
        assert_eq!(config.resolved_win_combo_length(), 4);
        assert_eq!(config.first_symbol(), "x");
        assert_eq!(config.second_symbol(), "o");

        let config: GameConfig = toml::from_str("").unwrap();
        assert_eq!(*config.field_size(), 3);
        assert_eq!(config.resolved_win_combo_length(), 3);
    }
}
