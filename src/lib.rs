//! nrdash - New Relic dashboards as declarative resources
//!
//! A library for validating dashboard configuration and driving the
//! `newrelic_dashboard` resource lifecycle against the New Relic REST API.

pub mod cli;
pub mod error;
pub mod output;
pub mod providers;
pub mod resource;
pub mod schema;
pub mod terraform;

pub use error::NrdashError;
pub use providers::newrelic::dashboard::{DashboardAttributes, DashboardData, DashboardError};
pub use providers::newrelic::{DashboardApi, NewRelicClient, NewRelicError};
pub use providers::{ProviderConfig, ProviderError};
pub use resource::{ResourceData, ResourceError};
