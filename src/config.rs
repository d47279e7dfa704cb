//! Runtime configuration for the SGS client.
//!
//! Values come from the environment (optionally via a `.env` file) and can be
//! overridden from the command line.

use std::time::Duration;

use crate::error::AppError;

pub const DEFAULT_BASE_URL: &str = "https://api.bcb.gov.br/dados/serie";
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

const ENV_BASE_URL: &str = "SGS_BASE_URL";
const ENV_TIMEOUT_SECS: &str = "SGS_TIMEOUT_SECS";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SgsConfig {
    /// Service root; series paths are appended as `/bcdata.sgs.{code}/dados`.
    pub base_url: String,
    pub timeout: Duration,
}

impl Default for SgsConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }
}

impl SgsConfig {
    pub fn from_env() -> Result<Self, AppError> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build a config from an arbitrary key lookup (the environment in production).
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, AppError> {
        let mut config = Self::default();
        if let Some(url) = lookup(ENV_BASE_URL) {
            config = config.with_base_url(url)?;
        }
        if let Some(raw) = lookup(ENV_TIMEOUT_SECS) {
            config.timeout = parse_timeout(&raw)
                .ok_or_else(|| AppError::invalid_arg(format!("{ENV_TIMEOUT_SECS} must be a positive integer, got '{raw}'")))?;
        }
        Ok(config)
    }

    pub fn with_base_url(mut self, url: impl Into<String>) -> Result<Self, AppError> {
        let url = url.into();
        let trimmed = url.trim().trim_end_matches('/');
        if trimmed.is_empty() {
            return Err(AppError::invalid_arg("base URL must not be empty"));
        }
        self.base_url = trimmed.to_string();
        Ok(self)
    }

    pub fn with_timeout_secs(mut self, secs: u64) -> Result<Self, AppError> {
        if secs == 0 {
            return Err(AppError::invalid_arg("timeout must be at least one second"));
        }
        self.timeout = Duration::from_secs(secs);
        Ok(self)
    }
}

fn parse_timeout(raw: &str) -> Option<Duration> {
    match raw.trim().parse::<u64>() {
        Ok(0) | Err(_) => None,
        Ok(secs) => Some(Duration::from_secs(secs)),
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn defaults_when_nothing_is_set() {
        let config = SgsConfig::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config, SgsConfig::default());
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
    }

    #[test]
    fn environment_overrides_are_applied() {
        let config = SgsConfig::from_lookup(lookup(&[
            ("SGS_BASE_URL", "http://localhost:8080/"),
            ("SGS_TIMEOUT_SECS", "5"),
        ]))
        .unwrap();
        assert_eq!(config.base_url, "http://localhost:8080");
        assert_eq!(config.timeout, Duration::from_secs(5));
    }

    #[test]
    fn bad_timeout_is_rejected() {
        for raw in ["0", "-1", "soon"] {
            let err = SgsConfig::from_lookup(lookup(&[("SGS_TIMEOUT_SECS", raw)])).unwrap_err();
            assert_eq!(err.exit_code(), 2);
        }
    }

    #[test]
    fn empty_base_url_is_rejected() {
        assert!(SgsConfig::default().with_base_url("  ").is_err());
    }
}
