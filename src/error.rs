use thiserror::Error;

use crate::providers::newrelic::dashboard::DashboardError;

#[derive(Debug, Error)]
pub enum NrdashError {
    #[error(transparent)]
    Provider(#[from] crate::providers::ProviderError),

    #[error(transparent)]
    Resource(#[from] crate::resource::ResourceError),

    #[error(transparent)]
    Dashboard(#[from] DashboardError),

    #[error(transparent)]
    State(#[from] crate::terraform::StateError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("configuration error: {0}")]
    Config(String),
}
