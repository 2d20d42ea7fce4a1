//! Server configuration loaded from the environment.

use std::net::SocketAddr;
use std::path::PathBuf;
use std::time::Duration;

use roleplay_openai::DEFAULT_BASE_URL;
use roleplay_openai::chat::{CHAT_REQUEST_TIMEOUT, DEFAULT_CHAT_MODEL};
use roleplay_openai::realtime::DEFAULT_REALTIME_MODEL;
use roleplay_scenario::domain::templates::{FallbackTemplates, TemplateError};
use secrecy::SecretString;
use thiserror::Error;

/// Configuration loading failures. All of them abort startup.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// A required variable is unset or blank.
    #[error("{0} environment variable must be set")]
    MissingVar(&'static str),

    /// A variable is set to something unusable.
    #[error("invalid value for {name}: {reason}")]
    InvalidValue {
        /// Variable name.
        name: &'static str,
        /// What was wrong with it.
        reason: String,
    },

    /// The templates file could not be read.
    #[error("cannot read templates file {path}: {source}")]
    TemplatesUnreadable {
        /// Path that was configured.
        path: PathBuf,
        /// Underlying I/O error.
        source: std::io::Error,
    },

    /// The templates file could not be used.
    #[error("invalid templates file {path}: {source}")]
    TemplatesInvalid {
        /// Path that was configured.
        path: PathBuf,
        /// What was wrong with it.
        source: TemplateError,
    },
}

/// Settings for the API server.
#[derive(Debug, Clone)]
pub struct Config {
    /// Address to listen on.
    pub bind_address: SocketAddr,
    /// Secret for both upstream services.
    pub api_key: SecretString,
    /// Base URL for both upstream services.
    pub base_url: String,
    /// Chat model used for scenario generation.
    pub scenario_model: String,
    /// Upper bound on one scenario generation call.
    pub scenario_timeout: Duration,
    /// Realtime model used when a request names none.
    pub realtime_model: String,
    /// Optional YAML file replacing the built-in fallback templates.
    pub templates_path: Option<PathBuf>,
}

impl Config {
    /// Loads configuration from the process environment, reading a `.env`
    /// file first if one exists.
    ///
    /// *   `OPENAI_API_KEY`: required.
    /// *   `HOST` / `PORT`: bind address, default `0.0.0.0:3000`.
    /// *   `OPENAI_BASE_URL`: default `https://api.openai.com/v1`.
    /// *   `SCENARIO_MODEL`: default `gpt-4o`.
    /// *   `SCENARIO_TIMEOUT_SECS`: default `30`.
    /// *   `REALTIME_MODEL`: default `gpt-4o-realtime-preview-2024-12-17`.
    /// *   `SCENARIO_TEMPLATES_PATH`: optional.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the API key is missing or the bind address
    /// does not parse.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Loads configuration through `lookup`, treating blank values as unset.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the API key is missing or the bind address
    /// does not parse.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let var = |name: &str| lookup(name).filter(|v| !v.trim().is_empty());

        let api_key = var("OPENAI_API_KEY")
            .map(SecretString::from)
            .ok_or(ConfigError::MissingVar("OPENAI_API_KEY"))?;

        let host = var("HOST").unwrap_or_else(|| "0.0.0.0".to_owned());
        let port: u16 = var("PORT")
            .unwrap_or_else(|| "3000".to_owned())
            .parse()
            .map_err(|e| ConfigError::InvalidValue {
                name: "PORT",
                reason: format!("must be a valid u16: {e}"),
            })?;
        let bind_address: SocketAddr =
            format!("{host}:{port}")
                .parse()
                .map_err(|e| ConfigError::InvalidValue {
                    name: "HOST",
                    reason: format!("invalid HOST:PORT combination: {e}"),
                })?;

        let scenario_timeout = match var("SCENARIO_TIMEOUT_SECS") {
            None => CHAT_REQUEST_TIMEOUT,
            Some(raw) => match raw.trim().parse::<u64>() {
                Ok(secs) if secs > 0 => Duration::from_secs(secs),
                _ => {
                    return Err(ConfigError::InvalidValue {
                        name: "SCENARIO_TIMEOUT_SECS",
                        reason: format!("must be a positive number of seconds, got {raw:?}"),
                    });
                }
            },
        };

        Ok(Self {
            bind_address,
            api_key,
            base_url: var("OPENAI_BASE_URL").unwrap_or_else(|| DEFAULT_BASE_URL.to_owned()),
            scenario_model: var("SCENARIO_MODEL").unwrap_or_else(|| DEFAULT_CHAT_MODEL.to_owned()),
            scenario_timeout,
            realtime_model: var("REALTIME_MODEL")
                .unwrap_or_else(|| DEFAULT_REALTIME_MODEL.to_owned()),
            templates_path: var("SCENARIO_TEMPLATES_PATH").map(PathBuf::from),
        })
    }

    /// Returns the fallback templates, read from `templates_path` when set.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the file cannot be read or is not a valid
    /// template document.
    pub fn load_templates(&self) -> Result<FallbackTemplates, ConfigError> {
        let Some(path) = &self.templates_path else {
            return Ok(FallbackTemplates::default());
        };
        let document =
            std::fs::read_to_string(path).map_err(|source| ConfigError::TemplatesUnreadable {
                path: path.clone(),
                source,
            })?;
        FallbackTemplates::from_yaml_str(&document).map_err(|source| {
            ConfigError::TemplatesInvalid {
                path: path.clone(),
                source,
            }
        })
    }
}
