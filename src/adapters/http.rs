use crate::core::{AvailabilityChecker, AvailabilityResult, ConfigProvider};
use crate::domain::model::AvailabilityRequest;
use crate::utils::error::{Result, ValidatorError};
use async_trait::async_trait;
use reqwest::Client;

/// Availability checker backed by the site's JSON endpoint.
#[derive(Debug, Clone)]
pub struct HttpAvailabilityChecker {
    client: Client,
    endpoint: String,
    csrf_header: String,
}

impl HttpAvailabilityChecker {
    pub fn new(endpoint: impl Into<String>, csrf_header: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            endpoint: endpoint.into(),
            csrf_header: csrf_header.into(),
        }
    }

    pub fn from_config<C: ConfigProvider>(config: &C) -> Self {
        Self::new(config.check_endpoint(), config.csrf_header())
    }
}

#[async_trait]
impl AvailabilityChecker for HttpAvailabilityChecker {
    async fn check(&self, username: &str, csrf_token: &str) -> Result<AvailabilityResult> {
        tracing::debug!("POST {}", self.endpoint);
        let response = self
            .client
            .post(&self.endpoint)
            .header(self.csrf_header.as_str(), csrf_token)
            .json(&AvailabilityRequest { username })
            .send()
            .await?;

        let status = response.status();
        tracing::debug!("Availability response status: {}", status);
        if !status.is_success() {
            return Err(ValidatorError::UnexpectedStatus {
                status: status.as_u16(),
            });
        }

        // 只讀取 available 欄位
        let body = response.bytes().await?;
        let result: AvailabilityResult = serde_json::from_slice(&body)?;
        Ok(result)
    }
}
