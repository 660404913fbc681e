mod client;
pub mod dashboard;
mod error;
mod types;

pub use client::{NEWRELIC_API_BASE, NewRelicClient};
pub use error::NewRelicError;
pub use types::{
    DashboardDetail, DashboardFilter, DashboardMetadata, DashboardPayload, DashboardWidget,
    Editable, Icon, METADATA_VERSION, Visibility, WidgetData, WidgetLayout, WidgetPresentation,
};

use async_trait::async_trait;

use super::{Provider, ProviderConfig, ProviderError};

/// The four dashboard calls the resource handlers depend on.
#[async_trait]
pub trait DashboardApi: Send + Sync {
    async fn create_dashboard(
        &self,
        dashboard: &DashboardPayload,
    ) -> Result<DashboardPayload, NewRelicError>;

    async fn get_dashboard(&self, id: i64) -> Result<DashboardDetail, NewRelicError>;

    async fn update_dashboard(
        &self,
        id: i64,
        dashboard: &DashboardPayload,
    ) -> Result<DashboardPayload, NewRelicError>;

    async fn delete_dashboard(&self, id: i64) -> Result<(), NewRelicError>;
}

pub struct NewRelicProvider {
    client: Option<NewRelicClient>,
}

impl NewRelicProvider {
    pub fn new(config: &ProviderConfig) -> Result<Self, ProviderError> {
        let api_key = config.api_key.as_deref().filter(|key| !key.is_empty());
        let client = match api_key {
            Some(key) => {
                let base_url = config
                    .api_url
                    .clone()
                    .unwrap_or_else(|| NEWRELIC_API_BASE.to_string());
                Some(NewRelicClient::with_base_url(key.to_string(), base_url)?)
            }
            None => None,
        };

        Ok(Self { client })
    }
}

impl Provider for NewRelicProvider {
    fn name(&self) -> &str {
        "newrelic"
    }

    fn resource_types(&self) -> Vec<&str> {
        vec![dashboard::RESOURCE_TYPE]
    }

    fn dashboard_api(&self) -> Result<&dyn DashboardApi, ProviderError> {
        self.client
            .as_ref()
            .map(|c| c as &dyn DashboardApi)
            .ok_or_else(|| {
                ProviderError::Auth(
                    "No API key provided. Set NEW_RELIC_API_KEY or use --api-key flag"
                        .to_string(),
                )
            })
    }

    fn generate_import(&self, resource_type: &str, name: &str, id: &str) -> String {
        format!(
            "import {{\n  to = {}.{}\n  id = \"{}\"\n}}",
            resource_type, name, id
        )
    }
}
