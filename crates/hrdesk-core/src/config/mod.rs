//! Environment-backed configuration.
//!
//! Most settings have defaults. Override with `HRDESK_*` environment
//! variables.

pub mod error;


pub use error::ConfigError;

use std::env;
use std::net::IpAddr;
use std::path::PathBuf;

use crate::constants::DEFAULT_COMPLETION_MODEL;

/// Host configuration loaded from environment variables.
///
/// Use [`Config::from_env`] to read `HRDESK_*` overrides on top of defaults.
#[derive(Debug, Clone)]
pub struct Config {
    /// HTTP server port. Default: `8080`.
    pub port: u16,

    /// IP address to bind to. Default: `127.0.0.1`.
    pub bind_addr: IpAddr,

    /// Path to the FAQ document. Default: `./data/hr_faq.json`.
    pub faq_path: PathBuf,

    /// Directory holding the sentence-encoder model files. When unset the
    /// embedder runs in stub mode.
    pub model_path: Option<PathBuf>,

    /// API key expected in the `X-API-Key` header.
    pub api_key: String,

    /// Model requested from the completion provider.
    pub completion_model: String,
}

/// API key used when `HRDESK_API_KEY` is not set. Suitable for local
/// development only.
pub const DEFAULT_API_KEY: &str = "dev-local-key";

impl Default for Config {
    fn default() -> Self {
        Self {
            port: 8080,
            bind_addr: IpAddr::V4(std::net::Ipv4Addr::new(127, 0, 0, 1)),
            faq_path: PathBuf::from("./data/hr_faq.json"),
            model_path: None,
            api_key: DEFAULT_API_KEY.to_string(),
            completion_model: DEFAULT_COMPLETION_MODEL.to_string(),
        }
    }
}

impl Config {
    const ENV_PORT: &'static str = "HRDESK_PORT";
    const ENV_BIND_ADDR: &'static str = "HRDESK_BIND_ADDR";
    const ENV_FAQ_PATH: &'static str = "HRDESK_FAQ_PATH";
    const ENV_MODEL_PATH: &'static str = "HRDESK_MODEL_PATH";
    const ENV_API_KEY: &'static str = "HRDESK_API_KEY";
    const ENV_COMPLETION_MODEL: &'static str = "HRDESK_COMPLETION_MODEL";

    /// Loads configuration from environment variables (falling back to
    /// defaults).
    pub fn from_env() -> Result<Self, ConfigError> {
        let defaults = Self::default();

        let port = Self::parse_port_from_env(defaults.port)?;
        let bind_addr = Self::parse_bind_addr_from_env(defaults.bind_addr)?;
        let faq_path = Self::parse_path_from_env(Self::ENV_FAQ_PATH, defaults.faq_path);
        let model_path = Self::parse_optional_path_from_env(Self::ENV_MODEL_PATH);
        let api_key = Self::parse_string_from_env(Self::ENV_API_KEY, defaults.api_key);
        let completion_model =
            Self::parse_string_from_env(Self::ENV_COMPLETION_MODEL, defaults.completion_model);

        Ok(Self {
            port,
            bind_addr,
            faq_path,
            model_path,
            api_key,
            completion_model,
        })
    }

    /// Validates paths and basic invariants.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.faq_path.exists() {
            return Err(ConfigError::PathNotFound {
                path: self.faq_path.clone(),
            });
        }
        if !self.faq_path.is_file() {
            return Err(ConfigError::NotAFile {
                path: self.faq_path.clone(),
            });
        }

        if let Some(ref path) = self.model_path {
            if !path.exists() {
                return Err(ConfigError::PathNotFound { path: path.clone() });
            }
            if !path.is_dir() {
                return Err(ConfigError::NotADirectory { path: path.clone() });
            }
        }

        Ok(())
    }

    /// Returns `"{bind_addr}:{port}"` (useful for logging/binding).
    pub fn socket_addr(&self) -> String {
        format!("{}:{}", self.bind_addr, self.port)
    }

    fn parse_port_from_env(default: u16) -> Result<u16, ConfigError> {
        match env::var(Self::ENV_PORT) {
            Ok(value) => {
                let port: u16 = value.parse().map_err(|e| ConfigError::PortParseError {
                    value: value.clone(),
                    source: e,
                })?;

                if port == 0 {
                    return Err(ConfigError::InvalidPort { value });
                }

                Ok(port)
            }
            Err(_) => Ok(default),
        }
    }

    fn parse_bind_addr_from_env(default: IpAddr) -> Result<IpAddr, ConfigError> {
        match env::var(Self::ENV_BIND_ADDR) {
            Ok(value) => value
                .parse()
                .map_err(|e| ConfigError::InvalidBindAddr { value, source: e }),
            Err(_) => Ok(default),
        }
    }

    fn parse_path_from_env(var_name: &str, default: PathBuf) -> PathBuf {
        env::var(var_name).map(PathBuf::from).unwrap_or(default)
    }

    fn parse_optional_path_from_env(var_name: &str) -> Option<PathBuf> {
        env::var(var_name)
            .ok()
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
            .map(PathBuf::from)
    }

    fn parse_string_from_env(var_name: &str, default: String) -> String {
        env::var(var_name).unwrap_or(default)
    }
}
