use std::time::Duration;

use thiserror::Error;

pub const DEFAULT_RELAY_ENDPOINT: &str = "https://api.web3forms.com/submit";

pub const ACCESS_KEY_VAR: &str = "PORTFOLIO_RELAY_ACCESS_KEY";
pub const ENDPOINT_VAR: &str = "PORTFOLIO_RELAY_ENDPOINT";
pub const TIMEOUT_VAR: &str = "PORTFOLIO_RELAY_TIMEOUT_SECS";

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{0} is not set")]
    Missing(&'static str),
    #[error("{var} must be a positive number of seconds, got {value:?}")]
    InvalidTimeout { var: &'static str, value: String },
}

/// Settings for the contact form relay.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RelayConfig {
    pub endpoint: String,
    pub access_key: String,
    pub timeout: Option<Duration>,
}

impl RelayConfig {
    pub fn new(endpoint: impl Into<String>, access_key: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
            access_key: access_key.into(),
            timeout: None,
        }
    }

    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Build the config from any variable source. Blank values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |var: &str| {
            lookup(var)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };

        let access_key = get(ACCESS_KEY_VAR).ok_or(ConfigError::Missing(ACCESS_KEY_VAR))?;
        let endpoint = get(ENDPOINT_VAR).unwrap_or_else(|| DEFAULT_RELAY_ENDPOINT.to_string());
        let timeout = match get(TIMEOUT_VAR) {
            None => None,
            Some(value) => match value.parse::<u64>() {
                Ok(secs) if secs > 0 => Some(Duration::from_secs(secs)),
                _ => {
                    return Err(ConfigError::InvalidTimeout {
                        var: TIMEOUT_VAR,
                        value,
                    })
                }
            },
        };

        Ok(Self {
            endpoint,
            access_key,
            timeout,
        })
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect::<HashMap<_, _>>();
        move |k: &str| vars.get(k).cloned()
    }

    #[test]
    fn test_defaults_endpoint_when_only_key_given() {
        let config = RelayConfig::from_lookup(lookup(&[(ACCESS_KEY_VAR, "abc")])).unwrap();
        assert_eq!(config, RelayConfig::new(DEFAULT_RELAY_ENDPOINT, "abc"));
    }

    #[test]
    fn test_missing_or_blank_key_is_an_error() {
        assert_eq!(
            RelayConfig::from_lookup(lookup(&[])),
            Err(ConfigError::Missing(ACCESS_KEY_VAR))
        );
        assert_eq!(
            RelayConfig::from_lookup(lookup(&[(ACCESS_KEY_VAR, "   ")])),
            Err(ConfigError::Missing(ACCESS_KEY_VAR))
        );
    }

    #[test]
    fn test_endpoint_and_timeout_overrides() {
        let config = RelayConfig::from_lookup(lookup(&[
            (ACCESS_KEY_VAR, "abc"),
            (ENDPOINT_VAR, "http://localhost:9000/submit"),
            (TIMEOUT_VAR, "15"),
        ]))
        .unwrap();
        assert_eq!(config.endpoint, "http://localhost:9000/submit");
        assert_eq!(config.timeout, Some(Duration::from_secs(15)));
    }

    #[test]
    fn test_invalid_timeout_is_rejected() {
        for bad in ["0", "soon", "-3"] {
            let err = RelayConfig::from_lookup(lookup(&[(ACCESS_KEY_VAR, "abc"), (TIMEOUT_VAR, bad)]))
                .unwrap_err();
            assert_eq!(
                err,
                ConfigError::InvalidTimeout {
                    var: TIMEOUT_VAR,
                    value: bad.to_string()
                }
            );
        }
    }
}
