use std::env;
use std::str::FromStr;
use std::time::Duration;

use seyeon_coingecko::DEFAULT_BASE_URL;
use thiserror::Error;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{name} has an invalid value: {value:?}")]
    Invalid { name: &'static str, value: String },
}

/// Settings read from the environment (and `.env`).
#[derive(Debug, Clone)]
pub struct Config {
    pub api_url: String,
    /// Sent as the demo API key header when present.
    pub api_key: Option<String>,
    pub vs_currency: String,
    pub history_days: u32,
    pub timeout: Duration,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |name: &str| {
            lookup(name)
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty())
        };

        Ok(Self {
            api_url: var("COINGECKO_API_URL").unwrap_or_else(|| DEFAULT_BASE_URL.to_string()),
            api_key: var("COINGECKO_API_KEY"),
            vs_currency: var("FORESIGHT_VS_CURRENCY")
                .unwrap_or_else(|| "usd".to_string())
                .to_lowercase(),
            history_days: parse("FORESIGHT_HISTORY_DAYS", var("FORESIGHT_HISTORY_DAYS"), 15)?,
            timeout: Duration::from_secs(parse(
                "FORESIGHT_TIMEOUT_SECS",
                var("FORESIGHT_TIMEOUT_SECS"),
                30,
            )?),
        })
    }
}

fn parse<T: FromStr>(name: &'static str, value: Option<String>, default: T) -> Result<T, ConfigError> {
    match value {
        None => Ok(default),
        Some(value) => value
            .parse()
            .map_err(|_| ConfigError::Invalid { name, value }),
    }
}
