//! Configuration loading, validation, and management for Wise.
//!
//! Loads configuration from `~/.wise/config.toml` with environment
//! variable overrides. Validates all settings at startup.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use wise_core::UserProfile;
use wise_core::message::{DEFAULT_HISTORY_LIMIT, DEFAULT_TITLE_MAX_CHARS};

/// The root configuration structure.
///
/// Maps directly to `~/.wise/config.toml`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// Advisor behavior
    #[serde(default)]
    pub advisor: AdvisorConfig,

    /// Where chat sessions are kept
    #[serde(default)]
    pub storage: StorageConfig,

    /// Logging output
    #[serde(default)]
    pub logging: LoggingConfig,

    /// Default profile used when the CLI gets no `--income`/`--balance`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub profile: Option<UserProfile>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AdvisorConfig {
    /// First assistant line of a new chat
    #[serde(default = "default_greeting")]
    pub greeting: String,

    /// Turns kept per session
    #[serde(default = "default_history_limit")]
    pub history_limit: usize,

    /// Session titles derived from the first question are cut at this length
    #[serde(default = "default_title_max_chars")]
    pub title_max_chars: usize,
}

fn default_greeting() -> String {
    "Hello! I'm Wise, your AI Financial Advisor. I can help with budgeting, taxes, \
     investments, savings strategies, and more. What would you like to know today?"
        .into()
}
fn default_history_limit() -> usize {
    DEFAULT_HISTORY_LIMIT
}
fn default_title_max_chars() -> usize {
    DEFAULT_TITLE_MAX_CHARS
}

impl Default for AdvisorConfig {
    fn default() -> Self {
        Self {
            greeting: default_greeting(),
            history_limit: default_history_limit(),
            title_max_chars: default_title_max_chars(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StorageConfig {
    /// "file" or "memory"
    #[serde(default = "default_storage_backend")]
    pub backend: String,

    /// Override for the sessions file (default `~/.wise/sessions.jsonl`)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
}

fn default_storage_backend() -> String {
    "file".into()
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            backend: default_storage_backend(),
            path: None,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Default filter when `RUST_LOG` is unset
    #[serde(default = "default_log_level")]
    pub level: String,

    /// Emit JSON lines instead of human-readable output
    #[serde(default)]
    pub json: bool,
}

fn default_log_level() -> String {
    "info".into()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            json: false,
        }
    }
}

impl AppConfig {
    /// Load configuration from the default path (~/.wise/config.toml).
    ///
    /// Environment overrides (highest priority):
    /// - `WISE_LOG` — logging level
    /// - `WISE_HISTORY_LIMIT` — turns kept per session
    /// - `WISE_SESSIONS_PATH` — sessions file
    pub fn load() -> Result<Self, ConfigError> {
        let config_path = Self::config_dir().join("config.toml");
        let mut config = Self::load_from(&config_path)?;
        config.apply_env_overrides(|key| std::env::var(key).ok())?;
        Ok(config)
    }

    /// Load configuration from a specific file path.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            tracing::info!("No config file found at {}, using defaults", path.display());
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::ReadError {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;

        let config: Self = toml::from_str(&content).map_err(|e| ConfigError::ParseError {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;

        config.validate()?;
        Ok(config)
    }

    /// Apply overrides from an environment lookup, then re-validate.
    pub fn apply_env_overrides<F>(&mut self, lookup: F) -> Result<(), ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(level) = lookup("WISE_LOG") {
            self.logging.level = level;
        }

        if let Some(limit) = lookup("WISE_HISTORY_LIMIT") {
            self.advisor.history_limit = limit.trim().parse().map_err(|_| {
                ConfigError::ValidationError(format!(
                    "WISE_HISTORY_LIMIT must be a positive integer, got '{limit}'"
                ))
            })?;
        }

        if let Some(path) = lookup("WISE_SESSIONS_PATH") {
            self.storage.path = Some(path);
        }

        self.validate()
    }

    /// Get the configuration directory path.
    pub fn config_dir() -> PathBuf {
        dirs_home().join(".wise")
    }

    /// Path of the sessions file for the file backend.
    pub fn sessions_path(&self) -> PathBuf {
        self.storage
            .path
            .as_ref()
            .map(PathBuf::from)
            .unwrap_or_else(|| Self::config_dir().join("sessions.jsonl"))
    }

    /// Validate the configuration.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.advisor.history_limit == 0 {
            return Err(ConfigError::ValidationError(
                "advisor.history_limit must be > 0".into(),
            ));
        }

        if self.advisor.title_max_chars == 0 {
            return Err(ConfigError::ValidationError(
                "advisor.title_max_chars must be > 0".into(),
            ));
        }

        if !matches!(self.storage.backend.as_str(), "file" | "memory") {
            return Err(ConfigError::ValidationError(format!(
                "storage.backend must be \"file\" or \"memory\", got \"{}\"",
                self.storage.backend
            )));
        }

        if let Some(income) = self.profile.and_then(|p| p.annual_income) {
            if income < 0.0 {
                return Err(ConfigError::ValidationError(
                    "profile.annualIncome must be >= 0".into(),
                ));
            }
        }

        Ok(())
    }

    /// Generate a default config TOML string (for `onboard` command).
    pub fn default_toml() -> String {
        let config = Self::default();
        toml::to_string_pretty(&config).unwrap_or_default()
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            advisor: AdvisorConfig::default(),
            storage: StorageConfig::default(),
            logging: LoggingConfig::default(),
            profile: None,
        }
    }
}

/// Get the user's home directory.
fn dirs_home() -> PathBuf {
    #[cfg(target_os = "windows")]
    {
        std::env::var("USERPROFILE")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from("C:\\Users\\Default"))
    }
    #[cfg(not(target_os = "windows"))]
    {
        std::env::var("HOME")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from("/tmp"))
    }
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file at {path}: {reason}")]
    ReadError { path: PathBuf, reason: String },

    #[error("Failed to parse config file at {path}: {reason}")]
    ParseError { path: PathBuf, reason: String },

    #[error("Configuration validation failed: {0}")]
    ValidationError(String),
}
