pub mod newrelic;

use thiserror::Error;

use newrelic::DashboardApi;

#[derive(Debug, Error)]
pub enum ProviderError {
    #[error("unknown provider: {0}")]
    UnknownProvider(String),
    #[error("authentication error: {0}")]
    Auth(String),
    #[error("new relic error: {0}")]
    NewRelic(String),
}

/// Provider-level settings shared by every resource of a provider.
#[derive(Debug, Clone, Default)]
pub struct ProviderConfig {
    pub api_key: Option<String>,
    pub api_url: Option<String>,
}

pub trait Provider: Send + Sync {
    fn name(&self) -> &str;
    fn resource_types(&self) -> Vec<&str>;
    fn dashboard_api(&self) -> Result<&dyn DashboardApi, ProviderError>;
    fn generate_import(&self, resource_type: &str, name: &str, id: &str) -> String;
}

pub fn get_provider(name: &str, config: &ProviderConfig) -> Result<Box<dyn Provider>, ProviderError> {
    match name {
        "newrelic" => Ok(Box::new(newrelic::NewRelicProvider::new(config)?)),
        other => Err(ProviderError::UnknownProvider(other.to_string())),
    }
}
