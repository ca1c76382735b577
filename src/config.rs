use crate::coord::Coord;
use crate::source::DEFAULT_ADDRESS_API_URL;
use thiserror::Error;
use url::Url;

pub const API_URL_VAR: &str = "NEARADDR_API_URL";
pub const TIMEOUT_SECS_VAR: &str = "NEARADDR_TIMEOUT_SECS";
pub const LATITUDE_VAR: &str = "NEARADDR_LATITUDE";
pub const LONGITUDE_VAR: &str = "NEARADDR_LONGITUDE";
pub const EMPTY_ON_FETCH_ERROR_VAR: &str = "NEARADDR_EMPTY_ON_FETCH_ERROR";

/// Request timeout used when none is configured.
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Settings for a nearest address lookup, usually read from the
/// environment.
#[derive(Clone, Debug, PartialEq)]
pub struct Config {
    api_url: Url,
    timeout_in_seconds: u64,
    location: Option<Coord>,
    empty_on_fetch_error: bool,
}

impl Config {
    /// Read the configuration from the process environment.
    ///
    /// | Variable | Default |
    /// |---|---|
    /// | `NEARADDR_API_URL` | the mock address API |
    /// | `NEARADDR_TIMEOUT_SECS` | 30 |
    /// | `NEARADDR_LATITUDE`, `NEARADDR_LONGITUDE` | unset |
    /// | `NEARADDR_EMPTY_ON_FETCH_ERROR` | `false` |
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_vars(|name| std::env::var(name).ok())
    }

    /// Build the configuration from a variable lookup function, which
    /// returns `None` for unset variables.
    pub fn from_vars<F>(var: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |name: &str| {
            var(name)
                .map(|value| value.trim().to_owned())
                .filter(|value| !value.is_empty())
        };

        let api_url = match var(API_URL_VAR) {
            Some(url) => Url::parse(&url)?,
            None => Url::parse(DEFAULT_ADDRESS_API_URL)
                .expect("default address API URL is valid"),
        };

        let timeout_in_seconds = match var(TIMEOUT_SECS_VAR) {
            Some(value) => parse_var(TIMEOUT_SECS_VAR, value)?,
            None => DEFAULT_TIMEOUT_SECS,
        };

        let location = match (var(LATITUDE_VAR), var(LONGITUDE_VAR)) {
            (Some(lat), Some(lng)) => {
                let lat: f64 = parse_var(LATITUDE_VAR, lat)?;
                let lng: f64 = parse_var(LONGITUDE_VAR, lng)?;
                let coord = Coord::new(lat, lng);
                if !coord.is_valid() {
                    return Err(ConfigError::InvalidLocation { coord });
                }
                Some(coord)
            }
            (None, None) => None,
            _ => return Err(ConfigError::IncompleteLocation),
        };

        let empty_on_fetch_error = match var(EMPTY_ON_FETCH_ERROR_VAR) {
            Some(value) => parse_var(EMPTY_ON_FETCH_ERROR_VAR, value)?,
            None => false,
        };

        Ok(Self {
            api_url,
            timeout_in_seconds,
            location,
            empty_on_fetch_error,
        })
    }

    /// Return the URL of the address API.
    pub fn api_url(&self) -> &Url {
        &self.api_url
    }

    pub fn timeout_in_seconds(&self) -> u64 {
        self.timeout_in_seconds
    }

    /// Return the configured current location, if one was given.
    pub fn location(&self) -> Option<Coord> {
        self.location
    }

    pub fn empty_on_fetch_error(&self) -> bool {
        self.empty_on_fetch_error
    }
}

fn parse_var<T: std::str::FromStr>(
    name: &'static str,
    value: String,
) -> Result<T, ConfigError> {
    value
        .parse()
        .map_err(|_| ConfigError::InvalidValue { var: name, value })
}

/// Errors that can occur when reading the configuration.
#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("Could not parse the address API URL: {0}")]
    UrlParse(#[from] url::ParseError),
    #[error("Invalid value {value:?} for {var}")]
    InvalidValue { var: &'static str, value: String },
    #[error("Both NEARADDR_LATITUDE and NEARADDR_LONGITUDE must be set, or neither")]
    IncompleteLocation,
    #[error("The location {coord} is out of range")]
    InvalidLocation { coord: Coord },
}

#[cfg(test)]
mod test {
    use super::{Config, ConfigError};
    use crate::coord::Coord;
    use std::collections::HashMap;

    fn config(vars: &[(&str, &str)]) -> Result<Config, ConfigError> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_vars(|name| vars.get(name).cloned())
    }

    #[test]
    fn defaults() {
        let config = config(&[]).unwrap();
        assert_eq!(
            config.api_url().as_str(),
            "https://66526a0f813d78e6d6d57914.mockapi.io/api/v1/address"
        );
        assert_eq!(config.timeout_in_seconds(), 30);
        assert_eq!(config.location(), None);
        assert!(!config.empty_on_fetch_error());
    }

    #[test]
    fn every_variable_set() {
        let config = config(&[
            ("NEARADDR_API_URL", "http://localhost:8080/addresses"),
            ("NEARADDR_TIMEOUT_SECS", "5"),
            ("NEARADDR_LATITUDE", "-19.9167"),
            ("NEARADDR_LONGITUDE", " -43.9345 "),
            ("NEARADDR_EMPTY_ON_FETCH_ERROR", "true"),
        ])
        .unwrap();
        assert_eq!(config.api_url().as_str(), "http://localhost:8080/addresses");
        assert_eq!(config.timeout_in_seconds(), 5);
        assert_eq!(config.location(), Some(Coord::new(-19.9167, -43.9345)));
        assert!(config.empty_on_fetch_error());
    }

    #[test]
    fn blank_variables_are_unset() {
        let config =
            config(&[("NEARADDR_API_URL", "  "), ("NEARADDR_TIMEOUT_SECS", "")])
                .unwrap();
        assert_eq!(config.timeout_in_seconds(), 30);
    }

    #[test]
    fn bad_url() {
        let err = config(&[("NEARADDR_API_URL", "not a url")]).unwrap_err();
        assert!(matches!(err, ConfigError::UrlParse(_)));
    }

    #[test]
    fn bad_timeout() {
        let err = config(&[("NEARADDR_TIMEOUT_SECS", "-1")]).unwrap_err();
        assert_eq!(
            err,
            ConfigError::InvalidValue {
                var: "NEARADDR_TIMEOUT_SECS",
                value: "-1".to_owned()
            }
        );
    }

    #[test]
    fn half_a_location() {
        let err = config(&[("NEARADDR_LATITUDE", "1.0")]).unwrap_err();
        assert_eq!(err, ConfigError::IncompleteLocation);
    }

    #[test]
    fn out_of_range_location() {
        let err = config(&[
            ("NEARADDR_LATITUDE", "91"),
            ("NEARADDR_LONGITUDE", "0"),
        ])
        .unwrap_err();
        assert!(matches!(err, ConfigError::InvalidLocation { .. }));
    }

    #[test]
    fn bad_flag() {
        let err = config(&[("NEARADDR_EMPTY_ON_FETCH_ERROR", "yes")]).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidValue { .. }));
    }
}
