use crate::domain::model::AvailabilityResult;
use crate::utils::error::Result;
use async_trait::async_trait;
use std::time::Duration;

pub const DEFAULT_DEBOUNCE_MS: u64 = 500;
pub const DEFAULT_MIN_USERNAME_LEN: usize = 3;
pub const DEFAULT_CSRF_HEADER: &str = "X-CSRFToken";

pub trait ConfigProvider: Send + Sync {
    fn check_endpoint(&self) -> &str;

    fn csrf_header(&self) -> &str {
        DEFAULT_CSRF_HEADER
    }

    fn debounce(&self) -> Duration {
        Duration::from_millis(DEFAULT_DEBOUNCE_MS)
    }

    fn min_username_len(&self) -> usize {
        DEFAULT_MIN_USERNAME_LEN
    }
}

/// Remote "is this username free" collaborator.
#[async_trait]
pub trait AvailabilityChecker: Send + Sync {
    async fn check(&self, username: &str, csrf_token: &str) -> Result<AvailabilityResult>;
}
