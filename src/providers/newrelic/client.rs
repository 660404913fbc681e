use async_trait::async_trait;
use reqwest::StatusCode;
use reqwest::header::{HeaderMap, HeaderName, HeaderValue, RETRY_AFTER};

use super::types::{ApiErrorBody, DashboardDetail, DashboardPayload};
use super::{DashboardApi, NewRelicError};

pub const NEWRELIC_API_BASE: &str = "https://api.newrelic.com/v2";

const API_KEY_HEADER: &str = "x-api-key";

#[derive(Clone)]
pub struct NewRelicClient {
    client: reqwest::Client,
    base_url: String,
}

impl NewRelicClient {
    pub fn new(api_key: String) -> Result<Self, NewRelicError> {
        Self::with_base_url(api_key, NEWRELIC_API_BASE.to_string())
    }

    /// NOTE: Primarily used for testing with mock servers.
    pub fn with_base_url(api_key: String, base_url: String) -> Result<Self, NewRelicError> {
        let mut headers = HeaderMap::new();
        let mut header_value = HeaderValue::from_str(&api_key).map_err(|_| NewRelicError::Auth {
            message: "Invalid API key format".to_string(),
        })?;
        header_value.set_sensitive(true);
        headers.insert(HeaderName::from_static(API_KEY_HEADER), header_value);

        let client = reqwest::Client::builder()
            .default_headers(headers)
            .build()
            .map_err(NewRelicError::Network)?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn api_base(&self) -> &str {
        &self.base_url
    }

    fn dashboards_url(&self) -> String {
        format!("{}/dashboards.json", self.base_url)
    }

    fn dashboard_url(&self, id: i64) -> String {
        format!("{}/dashboards/{}.json", self.base_url, id)
    }

    // NOTE: Maps non-success statuses onto the error taxonomy, body is only read on failure
    async fn check_status(
        &self,
        response: reqwest::Response,
    ) -> Result<reqwest::Response, NewRelicError> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        if status == StatusCode::NOT_FOUND {
            return Err(NewRelicError::NotFound);
        }

        if status == StatusCode::TOO_MANY_REQUESTS {
            let retry_after = response
                .headers()
                .get(RETRY_AFTER)
                .and_then(|v| v.to_str().ok())
                .and_then(|v| v.trim().parse::<u64>().ok())
                .unwrap_or(0);
            return Err(NewRelicError::RateLimited { retry_after });
        }

        let body = response.text().await.unwrap_or_default();
        let message = serde_json::from_str::<ApiErrorBody>(&body)
            .map(|b| b.error.title)
            .unwrap_or_else(|_| {
                status
                    .canonical_reason()
                    .unwrap_or("Unknown error")
                    .to_string()
            });

        if status == StatusCode::UNAUTHORIZED || status == StatusCode::FORBIDDEN {
            return Err(NewRelicError::Auth { message });
        }

        Err(NewRelicError::Api {
            status: status.as_u16(),
            message,
        })
    }

    async fn parse_payload(
        &self,
        response: reqwest::Response,
    ) -> Result<DashboardPayload, NewRelicError> {
        let status = response.status();
        response
            .json::<DashboardPayload>()
            .await
            .map_err(|e| NewRelicError::Api {
                status: status.as_u16(),
                message: format!("Failed to parse response: {}", e),
            })
    }
}

#[async_trait]
impl DashboardApi for NewRelicClient {
    async fn create_dashboard(
        &self,
        dashboard: &DashboardPayload,
    ) -> Result<DashboardPayload, NewRelicError> {
        let url = self.dashboards_url();
        tracing::debug!(%url, "POST dashboard");

        let response = self.client.post(&url).json(dashboard).send().await?;
        let response = self.check_status(response).await?;
        self.parse_payload(response).await
    }

    async fn get_dashboard(&self, id: i64) -> Result<DashboardDetail, NewRelicError> {
        let url = self.dashboard_url(id);
        tracing::debug!(%url, "GET dashboard");

        let response = self.client.get(&url).send().await?;
        let response = self.check_status(response).await?;
        Ok(self.parse_payload(response).await?.dashboard)
    }

    async fn update_dashboard(
        &self,
        id: i64,
        dashboard: &DashboardPayload,
    ) -> Result<DashboardPayload, NewRelicError> {
        let url = self.dashboard_url(id);
        tracing::debug!(%url, "PUT dashboard");

        let response = self.client.put(&url).json(dashboard).send().await?;
        let response = self.check_status(response).await?;
        self.parse_payload(response).await
    }

    async fn delete_dashboard(&self, id: i64) -> Result<(), NewRelicError> {
        let url = self.dashboard_url(id);
        tracing::debug!(%url, "DELETE dashboard");

        let response = self.client.delete(&url).send().await?;
        self.check_status(response).await?;
        Ok(())
    }
}

impl std::fmt::Debug for NewRelicClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NewRelicClient")
            .field("api_key", &"[REDACTED]")
            .field("base_url", &self.base_url)
            .finish()
    }
}
