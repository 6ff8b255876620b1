use thiserror::Error;

#[derive(Error, Debug)]
pub enum ValidatorError {
    #[error("Availability request failed: {0}")]
    ApiError(#[from] reqwest::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Availability endpoint returned status {status}")]
    UnexpectedStatus { status: u16 },

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Configuration validation failed for '{field}': {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value '{value}' for '{field}': {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Element '{id}' has no parent container")]
    DetachedElement { id: String },

    #[error("Page state unavailable: {message}")]
    PageError { message: String },
}

impl ValidatorError {
    /// 給終端使用者看的簡短訊息
    pub fn user_friendly_message(&self) -> String {
        match self {
            ValidatorError::ApiError(_) | ValidatorError::UnexpectedStatus { .. } => {
                "Could not reach the username availability service".to_string()
            }
            ValidatorError::ConfigError { .. }
            | ValidatorError::ConfigValidationError { .. }
            | ValidatorError::InvalidConfigValueError { .. } => format!("Invalid configuration: {}", self),
            _ => self.to_string(),
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            ValidatorError::ApiError(_) => "Check that the check endpoint is reachable",
            ValidatorError::UnexpectedStatus { .. } => {
                "Verify the endpoint path and the anti-forgery header name"
            }
            ValidatorError::SerializationError(_) => {
                "The endpoint must answer with a JSON body like {\"available\": true}"
            }
            ValidatorError::IoError(_) => "Check file paths and permissions",
            ValidatorError::ConfigError { .. }
            | ValidatorError::ConfigValidationError { .. }
            | ValidatorError::InvalidConfigValueError { .. } => {
                "Fix the configuration file or command line flags and retry"
            }
            ValidatorError::DetachedElement { .. } => {
                "Insert the input into a container before attaching feedback"
            }
            ValidatorError::PageError { .. } => "Restart the session",
        }
    }
}

pub type Result<T> = std::result::Result<T, ValidatorError>;
