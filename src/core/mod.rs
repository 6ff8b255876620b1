pub mod debounce;
pub mod email;
pub mod password;
pub mod submit;
pub mod username;
pub mod validator;

pub use crate::domain::model::{AvailabilityResult, Feedback, FieldIssue, Tone};
pub use crate::domain::ports::{AvailabilityChecker, ConfigProvider};
pub use crate::utils::error::Result;
