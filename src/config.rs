//! # Configuration
//!
//! Provider settings read from named parameters, by default from the environment.
use crate::config::ConfigError::InvalidParameter;
use crate::source::retry::RetryPolicy;
use std::path::PathBuf;
use std::time::Duration;
use thiserror::Error;

/// Errors in provider configuration.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum ConfigError {
    /// Required parameter not set
    #[error("Missing parameter '{0}'")]
    MissingParameter(String),

    /// Parameter set to a value that cannot be used
    #[error("Invalid parameter '{name}': {message}")]
    InvalidParameter { name: String, message: String },
}

/// Trait for reading one named configuration parameter.
///
/// # Type Parameters
///
/// * `T` - The type of the parameter value
pub trait NamedParam<T> {
    /// Returns the parameter name
    fn name() -> &'static str;

    /// Parses the raw parameter value
    fn parse(value: &str) -> Result<T, ConfigError>;

    /// Reads the parameter through `lookup`, None if it is not set
    fn read(lookup: &dyn Fn(&str) -> Option<String>) -> Result<Option<T>, ConfigError> {
        lookup(Self::name())
            .map(|value| Self::parse(value.trim()))
            .transpose()
    }
}

/// Id of the data set holding the general defaults
struct GeneralFileParam;

/// Root directory of nested table files
struct ResourcesDirParam;

/// Total attempts when loading a data set
struct RetryAttemptsParam;

/// Comma separated seconds to wait between attempts
struct RetryBackoffParam;

impl NamedParam<String> for GeneralFileParam {
    fn name() -> &'static str {
        "QAA_GENERAL_FILE"
    }

    fn parse(value: &str) -> Result<String, ConfigError> {
        if value.is_empty() {
            Err(InvalidParameter {
                name: Self::name().to_owned(),
                message: "data set id is empty".to_owned(),
            })
        } else {
            Ok(value.to_owned())
        }
    }
}

impl NamedParam<PathBuf> for ResourcesDirParam {
    fn name() -> &'static str {
        "QAA_RESOURCES_DIR"
    }

    fn parse(value: &str) -> Result<PathBuf, ConfigError> {
        Ok(PathBuf::from(value))
    }
}

impl NamedParam<usize> for RetryAttemptsParam {
    fn name() -> &'static str {
        "QAA_RETRY_ATTEMPTS"
    }

    fn parse(value: &str) -> Result<usize, ConfigError> {
        value
            .parse::<usize>()
            .ok()
            .filter(|attempts| *attempts > 0)
            .ok_or_else(|| InvalidParameter {
                name: Self::name().to_owned(),
                message: format!("'{value}' is not a positive number"),
            })
    }
}

impl NamedParam<Vec<Duration>> for RetryBackoffParam {
    fn name() -> &'static str {
        "QAA_RETRY_BACKOFF"
    }

    fn parse(value: &str) -> Result<Vec<Duration>, ConfigError> {
        value
            .split(',')
            .map(str::trim)
            .filter(|seconds| !seconds.is_empty())
            .map(|seconds| {
                seconds
                    .parse()
                    .map(Duration::from_secs)
                    .map_err(|_| InvalidParameter {
                        name: Self::name().to_owned(),
                        message: format!("'{seconds}' is not a number of seconds"),
                    })
            })
            .collect()
    }
}

/// Settings of an examples provider.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ProviderConfig {
    /// Data set whose first run supplies default values for every run
    pub general_dataset_id: String,
    /// Root below which nested tables are written to `data/tables`
    pub resources_dir: PathBuf,
    /// Retry policy at the data source boundary
    pub retry: RetryPolicy,
}

impl ProviderConfig {
    /// Creates a configuration with default resources directory and retry policy.
    pub fn new(general_dataset_id: &str) -> Self {
        Self {
            general_dataset_id: general_dataset_id.to_owned(),
            resources_dir: PathBuf::from("."),
            retry: RetryPolicy::default(),
        }
    }

    /// Reads the configuration from environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(&|name: &str| std::env::var(name).ok())
    }

    /// Reads the configuration through a parameter lookup function.
    pub fn from_lookup(lookup: &dyn Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let general_dataset_id = GeneralFileParam::read(lookup)?
            .ok_or_else(|| ConfigError::MissingParameter(GeneralFileParam::name().to_owned()))?;
        let mut config = Self::new(&general_dataset_id);
        if let Some(resources_dir) = ResourcesDirParam::read(lookup)? {
            config.resources_dir = resources_dir;
        }
        if let Some(max_attempts) = RetryAttemptsParam::read(lookup)? {
            config.retry.max_attempts = max_attempts;
        }
        if let Some(backoff) = RetryBackoffParam::read(lookup)? {
            config.retry.backoff = backoff;
        }
        Ok(config)
    }
}
