//! Global configuration parsing, validation, and credential loading.

use std::env;
use std::fs;
use std::path::Path;

use serde::Deserialize;
use tracing::warn;

use crate::{AppError, Result};

/// Nested bot configuration.
///
/// The API key is a vestige of connecting to a real external answering
/// service; the mock bot never calls it, but the credential is still loaded
/// at runtime from the environment rather than from the TOML file.
#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub struct BotConfig {
    /// Opaque credential for the (unused) external answering service.
    #[serde(skip)]
    pub api_key: String,
}

/// Top-level application configuration.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case", default)]
pub struct GlobalConfig {
    /// HTTP port the arena server listens on.
    pub http_port: u16,
    /// Bot credential configuration.
    pub bot: BotConfig,
}

impl Default for GlobalConfig {
    fn default() -> Self {
        Self {
            http_port: default_http_port(),
            bot: BotConfig::default(),
        }
    }
}

fn default_http_port() -> u16 {
    8000
}

impl GlobalConfig {
    /// Load configuration from a TOML file path.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Config` if the file cannot be read or contains
    /// invalid TOML.
    pub fn load_from_path(path: impl AsRef<Path>) -> Result<Self> {
        let raw = fs::read_to_string(path)
            .map_err(|err| AppError::Config(format!("failed to read config: {err}")))?;
        Self::from_toml_str(&raw)
    }

    /// Parse configuration from a TOML string.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Config` if parsing fails.
    pub fn from_toml_str(raw: &str) -> Result<Self> {
        toml::from_str(raw).map_err(|err| AppError::Config(format!("invalid config: {err}")))
    }

    /// Apply environment overrides and load the bot credential.
    ///
    /// `PORT` overrides `http_port` when set (deployment platforms inject
    /// it); `ARENA_API_KEY` populates the bot credential.  A missing
    /// credential is tolerated with a warning since the mock bot never
    /// contacts the external service.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Config` if `PORT` is set but is not a valid port
    /// number.
    pub fn load_environment(&mut self) -> Result<()> {
        if let Ok(port) = env::var("PORT") {
            self.http_port = port
                .parse()
                .map_err(|err| AppError::Config(format!("invalid PORT value: {err}")))?;
        }

        match env::var("ARENA_API_KEY") {
            Ok(key) if !key.is_empty() => self.bot.api_key = key,
            _ => warn!("ARENA_API_KEY not set; running with an empty credential"),
        }

        Ok(())
    }
}
