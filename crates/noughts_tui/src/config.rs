//! Frontend configuration loaded from TOML.

use derive_getters::Getters;
use derive_more::{Display, Error};
use noughts::{Marker, Player};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{debug, info, instrument};

/// Configuration for the terminal frontend.
///
/// Every key is optional; a missing file means defaults.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct AppConfig {
    /// Display name of the player placing X.
    #[serde(default = "default_player_x")]
    player_x: String,

    /// Display name of the player placing O.
    #[serde(default = "default_player_o")]
    player_o: String,

    /// How long to wait for a key before redrawing, in milliseconds.
    #[serde(default = "default_poll_interval_ms")]
    poll_interval_ms: u64,

    /// File the terminal game logs to.
    #[serde(default = "default_log_file")]
    log_file: PathBuf,

    /// Tracing filter used when `RUST_LOG` is unset.
    #[serde(default = "default_log_filter")]
    log_filter: String,
}

fn default_player_x() -> String {
    Player::default_for(Marker::X).name().clone()
}

fn default_player_o() -> String {
    Player::default_for(Marker::O).name().clone()
}

fn default_poll_interval_ms() -> u64 {
    100
}

fn default_log_file() -> PathBuf {
    PathBuf::from("noughts_tui.log")
}

fn default_log_filter() -> String {
    "info,noughts=debug".to_string()
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            player_x: default_player_x(),
            player_o: default_player_o(),
            poll_interval_ms: default_poll_interval_ms(),
            log_file: default_log_file(),
            log_filter: default_log_filter(),
        }
    }
}

impl AppConfig {
    /// Loads configuration from TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        Self::from_toml(&content)
    }

    /// Parses configuration from TOML text.
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;

        if config.poll_interval_ms == 0 {
            return Err(ConfigError::new(
                "poll_interval_ms must be greater than zero".to_string(),
            ));
        }

        Ok(config)
    }

    /// Loads `path` if it exists, otherwise returns defaults.
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            Self::from_file(path)
        } else {
            info!(path = %path.display(), "Config file not found, using defaults");
            Ok(Self::default())
        }
    }

    /// The two players named by this configuration.
    pub fn players(&self) -> (Player, Player) {
        (
            Player::new(self.player_x.clone(), Marker::X),
            Player::new(self.player_o.clone(), Marker::O),
        )
    }
}

/// Configuration error.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new configuration error.
    #[track_caller]
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}
