use std::path::{Path, PathBuf};

use tracing_subscriber::EnvFilter;

use crate::error::ConfigError;
use crate::game::COLS;

/// Terminal front-end settings.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct UiConfig {
    /// Column the selector starts on after launch and after a reset
    pub start_column: usize,
    /// How long to wait for an input event before redrawing
    pub poll_interval_ms: u64,
    pub highlight_winning_line: bool,
    /// Accept mouse clicks on the board
    pub mouse: bool,
}

impl Default for UiConfig {
    fn default() -> Self {
        UiConfig {
            start_column: 3,
            poll_interval_ms: 100,
            highlight_winning_line: true,
            mouse: true,
        }
    }
}

#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// `EnvFilter` directive; `RUST_LOG` takes precedence when set
    pub level: String,
    pub file: PathBuf,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        LoggingConfig {
            level: "info".to_string(),
            file: PathBuf::from("connect_four.log"),
        }
    }
}

/// Top-level application configuration, loadable from TOML.
#[derive(Debug, Clone, Default, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub ui: UiConfig,
    pub logging: LoggingConfig,
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
            Ok(Self::default())
        }
    }

    /// Validate configuration values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.ui.start_column >= COLS {
            return Err(ConfigError::Validation(format!(
                "ui.start_column must be < {COLS}"
            )));
        }
        if self.ui.poll_interval_ms == 0 {
            return Err(ConfigError::Validation(
                "ui.poll_interval_ms must be > 0".into(),
            ));
        }
        if let Err(e) = EnvFilter::try_new(&self.logging.level) {
            return Err(ConfigError::Validation(format!(
                "logging.level is not a valid filter: {e}"
            )));
        }
        if self.logging.file.as_os_str().is_empty() {
            return Err(ConfigError::Validation(
                "logging.file must not be empty".into(),
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
