//! Service configuration parsed from environment variables.

use crate::neis::codes::{DEFAULT_OFFICE_CODE, office_by_code};
use crate::neis::config::{DEFAULT_NEIS_BASE_URL, NeisConfig, NeisTimeouts};

pub const DEFAULT_PORT: u16 = 3000;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("missing required env var {0}")]
    Missing(&'static str),
    #[error("invalid value for {var}: {value}")]
    Invalid { var: &'static str, value: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub port: u16,
    /// Education office preselected on the search form.
    pub default_office: String,
    pub neis: NeisConfig,
}

impl AppConfig {
    /// Build typed config from the process environment.
    ///
    /// Required:
    /// - `NEIS_API_KEY`
    ///
    /// Optional:
    /// - `PORT`: default 3000
    /// - `DEFAULT_OFFICE`: office code, default `K10`
    /// - `NEIS_BASE_URL`: default `https://open.neis.go.kr/hub`
    /// - `NEIS_CONNECT_TIMEOUT_SECS`: default 10
    /// - `NEIS_SEARCH_TIMEOUT_SECS`: default 10
    /// - `NEIS_MONTHLY_TIMEOUT_SECS`: default 15
    /// - `NEIS_ACCEPT_INVALID_CERTS`: default false
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if the API key is missing or a value does not parse.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`AppConfig::from_env`] with an injectable variable source.
    ///
    /// # Errors
    ///
    /// See [`AppConfig::from_env`].
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let api_key = lookup("NEIS_API_KEY")
            .filter(|k| !k.trim().is_empty())
            .ok_or(ConfigError::Missing("NEIS_API_KEY"))?;

        let default_office = lookup("DEFAULT_OFFICE").unwrap_or_else(|| DEFAULT_OFFICE_CODE.to_owned());
        if office_by_code(&default_office).is_none() {
            return Err(ConfigError::Invalid { var: "DEFAULT_OFFICE", value: default_office });
        }

        let defaults = NeisTimeouts::default();
        let timeouts = NeisTimeouts {
            connect_secs: parse_or(&lookup, "NEIS_CONNECT_TIMEOUT_SECS", defaults.connect_secs)?,
            search_secs: parse_or(&lookup, "NEIS_SEARCH_TIMEOUT_SECS", defaults.search_secs)?,
            monthly_secs: parse_or(&lookup, "NEIS_MONTHLY_TIMEOUT_SECS", defaults.monthly_secs)?,
        };

        let accept_invalid_certs = match lookup("NEIS_ACCEPT_INVALID_CERTS") {
            None => false,
            Some(raw) => {
                parse_bool(&raw).ok_or(ConfigError::Invalid { var: "NEIS_ACCEPT_INVALID_CERTS", value: raw })?
            }
        };

        let base_url = lookup("NEIS_BASE_URL")
            .unwrap_or_else(|| DEFAULT_NEIS_BASE_URL.to_owned())
            .trim_end_matches('/')
            .to_owned();

        Ok(Self {
            port: parse_or(&lookup, "PORT", DEFAULT_PORT)?,
            default_office,
            neis: NeisConfig { base_url, timeouts, accept_invalid_certs, ..NeisConfig::new(api_key) },
        })
    }
}

fn parse_or<T>(lookup: &impl Fn(&str) -> Option<String>, var: &'static str, default: T) -> Result<T, ConfigError>
where
    T: std::str::FromStr,
{
    match lookup(var) {
        None => Ok(default),
        Some(raw) => raw
            .trim()
            .parse::<T>()
            .map_err(|_| ConfigError::Invalid { var, value: raw }),
    }
}

pub(crate) fn parse_bool(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
