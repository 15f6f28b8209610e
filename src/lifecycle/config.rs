//! # Application Configuration
//!
//! [`AppConfig`] collects every tunable of the app with the defaults the
//! patient screen ships with. [`AppConfig::from_env`] applies overrides:
//!
//! | Variable            | Field      | Values                         |
//! |---------------------|------------|--------------------------------|
//! | `PATIENTS_API_URL`  | `api_url`  | absolute URL of the collection |
//! | `PATIENTS_BACKEND`  | `backend`  | `http`, `memory`               |
//! | `PATIENTS_LANG`     | `language` | `en`, `es`                     |
//!
//! Unset or empty variables keep the default. Anything else that does not
//! parse is a [`ConfigError`].

use crate::i18n::{Language, UnknownLanguage};
use crate::manager::ManagerConfig;
use crate::store::{ClientSetupError, DEFAULT_TIMEOUT};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use std::time::Duration;
use thiserror::Error;

pub const DEFAULT_API_URL: &str = "https://63bedcf7f5cfc0949b634fc8.mockapi.io/users";

pub const ENV_API_URL: &str = "PATIENTS_API_URL";
pub const ENV_BACKEND: &str = "PATIENTS_BACKEND";
pub const ENV_LANG: &str = "PATIENTS_LANG";

/// Where the records live.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Backend {
    /// The remote REST collection at `api_url`.
    Http,
    /// An in-process store; starts empty and is lost on shutdown.
    #[default]
    Memory,
}

impl fmt::Display for Backend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Backend::Http => "http",
            Backend::Memory => "memory",
        })
    }
}

impl FromStr for Backend {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "http" => Ok(Backend::Http),
            "memory" => Ok(Backend::Memory),
            _ => Err(ConfigError::UnknownBackend(s.to_string())),
        }
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("unknown backend {0:?}, expected \"http\" or \"memory\"")]
    UnknownBackend(String),

    #[error(transparent)]
    Language(#[from] UnknownLanguage),

    #[error("cannot build record client: {0}")]
    Client(#[from] ClientSetupError),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub api_url: String,
    pub request_timeout: Duration,
    pub search_delay: Duration,
    pub notification_duration: Duration,
    pub language: Language,
    pub backend: Backend,
}

impl Default for AppConfig {
    fn default() -> Self {
        let manager = ManagerConfig::default();
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            request_timeout: DEFAULT_TIMEOUT,
            search_delay: manager.search_delay,
            notification_duration: manager.notification_duration,
            language: Language::default(),
            backend: Backend::default(),
        }
    }
}

impl AppConfig {
    /// Defaults overridden from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Defaults overridden from `lookup`, which maps a variable name to its value.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let var = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());
        let mut config = Self::default();

        if let Some(url) = var(ENV_API_URL) {
            config.api_url = url.trim().to_string();
        }
        if let Some(backend) = var(ENV_BACKEND) {
            config.backend = backend.parse()?;
        }
        if let Some(language) = var(ENV_LANG) {
            config.language = language.parse()?;
        }
        Ok(config)
    }

    pub fn manager_config(&self) -> ManagerConfig {
        ManagerConfig {
            search_delay: self.search_delay,
            notification_duration: self.notification_duration,
            ..ManagerConfig::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = AppConfig::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config.api_url, DEFAULT_API_URL);
        assert_eq!(config.request_timeout, Duration::from_secs(10));
        assert_eq!(config.search_delay, Duration::from_millis(300));
        assert_eq!(config.notification_duration, Duration::from_secs(4));
        assert_eq!(config.language, Language::En);
        assert_eq!(config.backend, Backend::Memory);
    }

    #[test]
    fn test_overrides() {
        let config = AppConfig::from_lookup(lookup(&[
            (ENV_API_URL, " http://localhost:3000/users "),
            (ENV_BACKEND, "HTTP"),
            (ENV_LANG, "es"),
        ]))
        .unwrap();
        assert_eq!(config.api_url, "http://localhost:3000/users");
        assert_eq!(config.backend, Backend::Http);
        assert_eq!(config.language, Language::Es);
    }

    #[test]
    fn test_empty_values_keep_defaults() {
        let config = AppConfig::from_lookup(lookup(&[(ENV_BACKEND, ""), (ENV_LANG, "  ")])).unwrap();
        assert_eq!(config, AppConfig::default());
    }

    #[test]
    fn test_invalid_values_rejected() {
        let err = AppConfig::from_lookup(lookup(&[(ENV_BACKEND, "sqlite")])).unwrap_err();
        assert!(matches!(err, ConfigError::UnknownBackend(ref b) if b == "sqlite"));

        let err = AppConfig::from_lookup(lookup(&[(ENV_LANG, "fr")])).unwrap_err();
        assert!(matches!(err, ConfigError::Language(_)));
    }

    #[test]
    fn test_deserialize_partial() {
        let config: AppConfig = serde_json::from_str(r#"{"backend":"http","language":"es"}"#).unwrap();
        assert_eq!(config.backend, Backend::Http);
        assert_eq!(config.api_url, DEFAULT_API_URL);
    }
}
