use serde::Deserialize;
use serde_json::Value;

use super::schema::dashboard_schema;
use crate::providers::newrelic::types::{Editable, Icon, Visibility};
use crate::resource::ResourceError;
use crate::schema::{self, Diagnostic};

/// Typed `newrelic_dashboard` configuration, produced by [`bind`].
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct DashboardConfig {
    #[serde(default)]
    pub id: Option<i64>,
    pub title: String,
    pub icon: Icon,
    #[serde(default)]
    pub visibility: Option<Visibility>,
    #[serde(default)]
    pub editable: Editable,
    #[serde(default)]
    pub owner_email: Option<String>,
    #[serde(default)]
    pub filter: Option<FilterConfig>,
    #[serde(default)]
    pub widgets: Vec<WidgetConfig>,
}

#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
pub struct FilterConfig {
    #[serde(default)]
    pub event_types: Vec<String>,
    #[serde(default)]
    pub attributes: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct WidgetConfig {
    #[serde(default)]
    pub visualization: String,
    #[serde(default)]
    pub account_id: Option<i64>,
    pub presentation: PresentationConfig,
    #[serde(default)]
    pub layout: Option<LayoutConfig>,
    #[serde(default)]
    pub data: Vec<DataConfig>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct PresentationConfig {
    pub title: String,
    #[serde(default)]
    pub notes: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Default, Deserialize)]
pub struct LayoutConfig {
    #[serde(default)]
    pub width: Option<u32>,
    #[serde(default)]
    pub height: Option<u32>,
    #[serde(default)]
    pub row: Option<u32>,
    #[serde(default)]
    pub column: Option<u32>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct DataConfig {
    #[serde(default)]
    pub nrql: String,
}

pub fn validate(raw: &Value) -> Vec<Diagnostic> {
    schema::validate(&dashboard_schema(), raw)
}

/// Validates a raw attribute bag and decodes it; serde fills the defaults.
pub fn bind(raw: Value) -> Result<DashboardConfig, ResourceError> {
    let diagnostics = validate(&raw);
    if !diagnostics.is_empty() {
        return Err(ResourceError::InvalidConfig(diagnostics));
    }

    serde_json::from_value(raw)
        .map_err(|e| ResourceError::InvalidConfig(vec![Diagnostic::new("", e.to_string())]))
}
