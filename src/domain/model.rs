use serde::{Deserialize, Serialize};

pub const USERNAME_FEEDBACK_ID: &str = "username-feedback";
pub const EMAIL_FEEDBACK_ID: &str = "email-feedback";
pub const CONFIRM_PASSWORD_FEEDBACK_ID: &str = "confirm-password-feedback";

pub const MSG_USERNAME_AVAILABLE: &str = "Username is available";
pub const MSG_USERNAME_TAKEN: &str = "Username is already taken";
pub const MSG_INVALID_EMAIL: &str = "Please enter a valid email address";
pub const MSG_PASSWORDS_MATCH: &str = "Passwords match";
pub const MSG_PASSWORDS_MISMATCH: &str = "Passwords do not match";

/// Colour class of a feedback message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tone {
    Success,
    Error,
}

impl Tone {
    pub fn color(self) -> &'static str {
        match self {
            Tone::Success => "green",
            Tone::Error => "red",
        }
    }
}

/// 一則要顯示在欄位旁的提示
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Feedback {
    pub text: String,
    pub tone: Tone,
}

impl Feedback {
    pub fn success(text: &str) -> Self {
        Self {
            text: text.to_string(),
            tone: Tone::Success,
        }
    }

    pub fn error(text: &str) -> Self {
        Self {
            text: text.to_string(),
            tone: Tone::Error,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct AvailabilityRequest<'a> {
    pub username: &'a str,
}

/// Response of the availability collaborator. Unknown fields are ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AvailabilityResult {
    pub available: bool,
}

impl AvailabilityResult {
    pub fn feedback(self) -> Feedback {
        if self.available {
            Feedback::success(MSG_USERNAME_AVAILABLE)
        } else {
            Feedback::error(MSG_USERNAME_TAKEN)
        }
    }
}

/// Field-level problem reported by the submit-time registration check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldIssue {
    pub field: String,
    pub message: String,
}

impl FieldIssue {
    pub fn new(field: &str, message: impl Into<String>) -> Self {
        Self {
            field: field.to_string(),
            message: message.into(),
        }
    }
}
