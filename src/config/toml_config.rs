use crate::core::ConfigProvider;
use crate::domain::ports::{DEFAULT_CSRF_HEADER, DEFAULT_DEBOUNCE_MS, DEFAULT_MIN_USERNAME_LEN};
use crate::utils::error::{Result, ValidatorError};
use crate::utils::validation::{
    validate_non_empty_string, validate_positive_number, validate_range, validate_url, Validate,
};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

pub const MAX_DEBOUNCE_MS: u64 = 60_000;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TomlConfig {
    pub endpoint: EndpointConfig,
    pub username: Option<UsernameConfig>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EndpointConfig {
    pub url: String,
    pub csrf_header: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UsernameConfig {
    pub debounce_ms: Option<u64>,
    pub min_length: Option<usize>,
}

impl TomlConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(ValidatorError::IoError)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| ValidatorError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 替換環境變數 (例如 ${CHECK_URL})；未設定的變數保持原樣
    fn substitute_env_vars(content: &str) -> Result<String> {
        use regex::Regex;
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| ValidatorError::ConfigError {
            message: e.to_string(),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures<'_>| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    pub fn debounce_ms(&self) -> u64 {
        self.username
            .as_ref()
            .and_then(|u| u.debounce_ms)
            .unwrap_or(DEFAULT_DEBOUNCE_MS)
    }

    pub fn min_length(&self) -> usize {
        self.username
            .as_ref()
            .and_then(|u| u.min_length)
            .unwrap_or(DEFAULT_MIN_USERNAME_LEN)
    }
}

impl ConfigProvider for TomlConfig {
    fn check_endpoint(&self) -> &str {
        &self.endpoint.url
    }

    fn csrf_header(&self) -> &str {
        self.endpoint.csrf_header.as_deref().unwrap_or(DEFAULT_CSRF_HEADER)
    }

    fn debounce(&self) -> Duration {
        Duration::from_millis(self.debounce_ms())
    }

    fn min_username_len(&self) -> usize {
        self.min_length()
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        validate_url("endpoint.url", &self.endpoint.url)?;
        validate_non_empty_string("endpoint.csrf_header", self.csrf_header())?;
        validate_range("username.debounce_ms", self.debounce_ms(), 1, MAX_DEBOUNCE_MS)?;
        validate_positive_number("username.min_length", self.min_length(), 1)?;
        Ok(())
    }
}
