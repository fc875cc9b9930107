use std::time::Duration;

use reqwest::Client;
use reqwest::header::AUTHORIZATION;
use serde_json::Value;

use homework_common::error::AppError;

/// Authenticated client for the homework statuses endpoint.
pub struct ApiClient {
    client: Client,
    endpoint: String,
    token: String,
}

impl ApiClient {
    pub fn new(endpoint: String, token: String, timeout: Duration) -> Result<Self, AppError> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| AppError::Config(format!("failed to build HTTP client: {}", e)))?;

        Ok(Self {
            client,
            endpoint,
            token,
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Fetch homework statuses updated since `from_date` (unix seconds).
    ///
    /// Any non-200 status or transport fault is logged and returned; there is
    /// no retry here, the poller retries on its next iteration.
    pub async fn get_api_answer(&self, from_date: u64) -> Result<Value, AppError> {
        let result = self.request(from_date).await;

        if let Err(e) = &result {
            tracing::error!(
                endpoint = %self.endpoint,
                from_date,
                error = %e,
                "Homework API request failed"
            );
        }

        result
    }

    async fn request(&self, from_date: u64) -> Result<Value, AppError> {
        let transport = |source: reqwest::Error| AppError::UpstreamTransport {
            endpoint: self.endpoint.clone(),
            source,
        };

        let response = self
            .client
            .get(&self.endpoint)
            .header(AUTHORIZATION, format!("OAuth {}", self.token))
            .query(&[("from_date", from_date)])
            .send()
            .await
            .map_err(transport)?;

        let status = response.status();
        if !status.is_success() {
            return Err(AppError::UpstreamStatus {
                endpoint: self.endpoint.clone(),
                status: status.as_u16(),
            });
        }

        response.json::<Value>().await.map_err(transport)
    }
}
