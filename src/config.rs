//! Application settings, loadable from TOML

use std::path::Path;
use std::time::Duration;

use tracing::warn;

use crate::board::{self, Player, DEFAULT_BOARD_SIZE};
use crate::error::ConfigError;
use crate::session::Mode;

/// Bounds for the UI polling cadence, in milliseconds
pub const POLL_INTERVAL_RANGE: std::ops::RangeInclusive<u64> = 10..=1000;

/// Default search depth; the classic setting for this game
pub const DEFAULT_DIFFICULTY: u32 = 3;

/// Which kind of match to set up
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, serde::Serialize, serde::Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "kebab-case")]
pub enum ModeKind {
    #[default]
    HumanVsComputer,
    HumanVsHuman,
}

/// `[game]` section
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Board side, even
    pub board_size: usize,
    pub mode: ModeKind,
    /// Colour the human plays against the computer
    pub human: Player,
    /// Search depth for the computer
    pub difficulty: u32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            board_size: DEFAULT_BOARD_SIZE,
            mode: ModeKind::default(),
            human: Player::Red,
            difficulty: DEFAULT_DIFFICULTY,
        }
    }
}

/// `[search]` section
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct SearchConfig {
    /// How often the UI polls a running search
    pub poll_interval_ms: u64,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            poll_interval_ms: 100,
        }
    }
}

/// Top-level application configuration, loadable from TOML.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// `tracing` filter used when `RUST_LOG` is unset
    pub log_filter: String,
    pub game: GameConfig,
    pub search: SearchConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        AppConfig {
            log_filter: "info".to_string(),
            game: GameConfig::default(),
            search: SearchConfig::default(),
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
            warn!(path = %path.display(), "config file not found, using defaults");
            Ok(Self::default())
        }
    }

    /// Validate configuration values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !board::is_valid_size(self.game.board_size) {
            return Err(ConfigError::Validation(format!(
                "game.board_size must be even and in 2..={}",
                board::MAX_BOARD_SIZE
            )));
        }
        if self.game.difficulty == 0 {
            return Err(ConfigError::Validation(
                "game.difficulty must be >= 1".into(),
            ));
        }
        if !POLL_INTERVAL_RANGE.contains(&self.search.poll_interval_ms) {
            return Err(ConfigError::Validation(format!(
                "search.poll_interval_ms must be in {}..={}",
                POLL_INTERVAL_RANGE.start(),
                POLL_INTERVAL_RANGE.end()
            )));
        }
        if self.log_filter.trim().is_empty() {
            return Err(ConfigError::Validation(
                "log_filter must not be empty".into(),
            ));
        }
        Ok(())
    }

    /// Match mode described by the `[game]` section
    pub fn mode(&self) -> Mode {
        match self.game.mode {
            ModeKind::HumanVsHuman => Mode::HumanVsHuman,
            ModeKind::HumanVsComputer => Mode::HumanVsComputer {
                human: self.game.human,
                depth: self.game.difficulty,
            },
        }
    }

    pub fn poll_interval(&self) -> Duration {
        Duration::from_millis(self.search.poll_interval_ms)
    }

    /// Generate a TOML string with all default values (useful for creating
    /// example config files).
    pub fn default_toml() -> Result<String, ConfigError> {
        Ok(toml::to_string_pretty(&AppConfig::default())?)
    }
}

/// Install the global `tracing` subscriber.
///
/// `RUST_LOG` wins when set; otherwise `fallback` is used as the filter.
pub fn init_tracing(fallback: &str) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(fallback));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}
