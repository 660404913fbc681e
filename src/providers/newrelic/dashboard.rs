//! The `newrelic_dashboard` resource.
//!
//! Lifecycle handlers drive one resource instance through the dashboards
//! API. Each call builds its request fresh from the current configuration
//! and refreshes the stored attributes with a read afterwards.

pub mod config;
pub mod mapping;
pub mod schema;

pub use config::{DashboardConfig, bind, validate};
pub use mapping::{build_dashboard_struct, read_dashboard_struct};
pub use schema::dashboard_schema;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::types::{Editable, Icon, Visibility};
use super::{DashboardApi, NewRelicError};
use crate::resource::{ResourceData, ResourceError, parse_numeric_id, serialize_numeric_id};
use crate::terraform::{ResourceState, StateError};

pub const RESOURCE_TYPE: &str = "newrelic_dashboard";

/// Attributes persisted in state after a read.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashboardAttributes {
    pub title: String,
    pub icon: Icon,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub visibility: Option<Visibility>,
    pub editable: Editable,
}

pub type DashboardData = ResourceData<DashboardConfig, DashboardAttributes>;

#[derive(Debug, Error)]
pub enum DashboardError {
    #[error(transparent)]
    Resource(#[from] ResourceError),

    #[error(transparent)]
    Api(#[from] NewRelicError),

    #[error("create response did not include a dashboard id")]
    MissingRemoteId,

    #[error("cannot import non-existent remote object: dashboard {id}")]
    ImportNotFound { id: String },
}

pub async fn create(api: &dyn DashboardApi, d: &mut DashboardData) -> Result<(), DashboardError> {
    let config = d.config().ok_or(ResourceError::MissingConfig)?;
    let request = build_dashboard_struct(config);

    tracing::info!(title = %request.dashboard.title, "creating New Relic dashboard");

    let created = api.create_dashboard(&request).await?;
    let id = created.dashboard.id.ok_or(DashboardError::MissingRemoteId)?;
    d.set_id(serialize_numeric_id(id));

    tracing::info!(id, "dashboard created");

    read(api, d).await
}

/// Refreshes attributes from the API.
///
/// A dashboard the API no longer knows about clears the id and is not an
/// error; every other failure is returned unchanged with the id kept.
pub async fn read(api: &dyn DashboardApi, d: &mut DashboardData) -> Result<(), DashboardError> {
    tracing::info!(id = %d.id(), "reading New Relic dashboard");

    let id = parse_numeric_id(d.id())?;

    match api.get_dashboard(id).await {
        Ok(dashboard) => {
            read_dashboard_struct(&dashboard, d);
            Ok(())
        }
        Err(NewRelicError::NotFound) => {
            tracing::warn!(id, "dashboard not found, removing from state");
            d.clear_id();
            Ok(())
        }
        Err(e) => Err(e.into()),
    }
}

pub async fn update(api: &dyn DashboardApi, d: &mut DashboardData) -> Result<(), DashboardError> {
    let id = parse_numeric_id(d.id())?;
    let config = d.config().ok_or(ResourceError::MissingConfig)?;

    let mut request = build_dashboard_struct(config);
    request.dashboard.id = Some(id);

    tracing::info!(id, "updating New Relic dashboard");

    api.update_dashboard(id, &request).await?;

    read(api, d).await
}

pub async fn delete(api: &dyn DashboardApi, d: &mut DashboardData) -> Result<(), DashboardError> {
    let id = parse_numeric_id(d.id())?;

    tracing::info!(id, "deleting New Relic dashboard");

    api.delete_dashboard(id).await?;
    d.clear_id();

    Ok(())
}

/// Passthrough import: the external id is the only import key.
pub async fn import(api: &dyn DashboardApi, id: &str) -> Result<DashboardData, DashboardError> {
    parse_numeric_id(id)?;

    let mut d = DashboardData::with_id(id);
    read(api, &mut d).await?;

    if !d.exists() {
        return Err(DashboardError::ImportNotFound { id: id.to_string() });
    }

    Ok(d)
}

pub fn to_resource_state(d: &DashboardData) -> Result<ResourceState, StateError> {
    Ok(ResourceState {
        resource_type: RESOURCE_TYPE.to_string(),
        id: d.id().to_string(),
        attributes: serde_json::to_value(d.attributes())?,
    })
}

pub fn from_resource_state(state: &ResourceState) -> Result<DashboardData, StateError> {
    if state.resource_type != RESOURCE_TYPE {
        return Err(StateError::ResourceType {
            expected: RESOURCE_TYPE.to_string(),
            found: state.resource_type.clone(),
        });
    }

    let mut d = DashboardData::with_id(state.id.clone());
    if !state.attributes.is_null() {
        d.set_attributes(serde_json::from_value(state.attributes.clone())?);
    }

    Ok(d)
}
