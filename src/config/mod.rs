#[cfg(feature = "cli")]
pub mod cli;
pub mod toml_config;

use crate::core::ConfigProvider;
use crate::domain::ports::{DEFAULT_CSRF_HEADER, DEFAULT_DEBOUNCE_MS, DEFAULT_MIN_USERNAME_LEN};
use crate::utils::error::Result;
use crate::utils::validation::{
    validate_non_empty_string, validate_positive_number, validate_range, validate_url, Validate,
};
use std::time::Duration;
use toml_config::{TomlConfig, MAX_DEBOUNCE_MS};

#[cfg(feature = "cli")]
pub use cli::CliConfig;

pub const DEFAULT_CHECK_ENDPOINT: &str = "http://localhost:5000/auth/check-username";

/// Effective settings after file and flag sources are merged.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidatorConfig {
    pub check_endpoint: String,
    pub csrf_header: String,
    pub debounce_ms: u64,
    pub min_username_len: usize,
}

impl Default for ValidatorConfig {
    fn default() -> Self {
        Self {
            check_endpoint: DEFAULT_CHECK_ENDPOINT.to_string(),
            csrf_header: DEFAULT_CSRF_HEADER.to_string(),
            debounce_ms: DEFAULT_DEBOUNCE_MS,
            min_username_len: DEFAULT_MIN_USERNAME_LEN,
        }
    }
}

impl From<TomlConfig> for ValidatorConfig {
    fn from(config: TomlConfig) -> Self {
        Self {
            check_endpoint: config.check_endpoint().to_string(),
            csrf_header: config.csrf_header().to_string(),
            debounce_ms: config.debounce_ms(),
            min_username_len: config.min_length(),
        }
    }
}

impl ConfigProvider for ValidatorConfig {
    fn check_endpoint(&self) -> &str {
        &self.check_endpoint
    }

    fn csrf_header(&self) -> &str {
        &self.csrf_header
    }

    fn debounce(&self) -> Duration {
        Duration::from_millis(self.debounce_ms)
    }

    fn min_username_len(&self) -> usize {
        self.min_username_len
    }
}

impl Validate for ValidatorConfig {
    fn validate(&self) -> Result<()> {
        validate_url("check_endpoint", &self.check_endpoint)?;
        validate_non_empty_string("csrf_header", &self.csrf_header)?;
        validate_range("debounce_ms", self.debounce_ms, 1, MAX_DEBOUNCE_MS)?;
        validate_positive_number("min_username_len", self.min_username_len, 1)?;
        Ok(())
    }
}
