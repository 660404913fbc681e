use std::fmt;

use serde::{Deserialize, Serialize};

/// Only metadata version the dashboards API accepts.
pub const METADATA_VERSION: u32 = 1;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Icon {
    None,
    Archive,
    BarChart,
    LineChart,
    Bullseye,
    User,
}

impl Icon {
    pub const VALUES: &'static [&'static str] = &[
        "none",
        "archive",
        "bar-chart",
        "line-chart",
        "bullseye",
        "user",
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Icon::None => "none",
            Icon::Archive => "archive",
            Icon::BarChart => "bar-chart",
            Icon::LineChart => "line-chart",
            Icon::Bullseye => "bullseye",
            Icon::User => "user",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Visibility {
    Owner,
    All,
}

impl Visibility {
    pub const VALUES: &'static [&'static str] = &["owner", "all"];

    pub fn as_str(&self) -> &'static str {
        match self {
            Visibility::Owner => "owner",
            Visibility::All => "all",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Editable {
    ReadOnly,
    EditableByOwner,
    #[default]
    EditableByAll,
}

impl Editable {
    pub const VALUES: &'static [&'static str] =
        &["read_only", "editable_by_owner", "editable_by_all"];

    pub fn as_str(&self) -> &'static str {
        match self {
            Editable::ReadOnly => "read_only",
            Editable::EditableByOwner => "editable_by_owner",
            Editable::EditableByAll => "editable_by_all",
        }
    }
}

impl fmt::Display for Icon {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for Visibility {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for Editable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Request and response envelope for every dashboards endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashboardPayload {
    pub dashboard: DashboardDetail,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashboardDetail {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    pub title: String,
    pub icon: Icon,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub visibility: Option<Visibility>,
    #[serde(default)]
    pub editable: Editable,
    #[serde(default)]
    pub metadata: DashboardMetadata,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub filter: Option<DashboardFilter>,
    #[serde(default)]
    pub widgets: Vec<DashboardWidget>,

    // Server-populated, never sent on create/update.
    #[serde(default, skip_serializing)]
    pub owner_email: Option<String>,
    #[serde(default, skip_serializing)]
    pub ui_url: Option<String>,
    #[serde(default, skip_serializing)]
    pub api_url: Option<String>,
    #[serde(default, skip_serializing)]
    pub created_at: Option<String>,
    #[serde(default, skip_serializing)]
    pub updated_at: Option<String>,
}

impl DashboardDetail {
    pub fn new(title: impl Into<String>, icon: Icon) -> Self {
        Self {
            id: None,
            title: title.into(),
            icon,
            visibility: None,
            editable: Editable::default(),
            metadata: DashboardMetadata::default(),
            filter: None,
            widgets: Vec::new(),
            owner_email: None,
            ui_url: None,
            api_url: None,
            created_at: None,
            updated_at: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashboardMetadata {
    pub version: u32,
}

impl Default for DashboardMetadata {
    fn default() -> Self {
        Self {
            version: METADATA_VERSION,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct DashboardFilter {
    #[serde(default)]
    pub event_types: Vec<String>,
    #[serde(default)]
    pub attributes: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashboardWidget {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub widget_id: Option<i64>,
    pub visualization: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub account_id: Option<i64>,
    #[serde(default)]
    pub data: Vec<WidgetData>,
    #[serde(default)]
    pub presentation: WidgetPresentation,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub layout: Option<WidgetLayout>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WidgetData {
    pub nrql: String,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct WidgetPresentation {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub notes: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WidgetLayout {
    pub width: u32,
    pub height: u32,
    pub row: u32,
    pub column: u32,
}

/// Error body returned by the v2 REST API, e.g. `{"error": {"title": "..."}}`.
#[derive(Debug, Deserialize)]
pub struct ApiErrorBody {
    pub error: ApiErrorDetail,
}

#[derive(Debug, Deserialize)]
pub struct ApiErrorDetail {
    pub title: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_enum_values_match_serde_names() {
        for icon in [
            Icon::None,
            Icon::Archive,
            Icon::BarChart,
            Icon::LineChart,
            Icon::Bullseye,
            Icon::User,
        ] {
            let json = serde_json::to_value(icon).unwrap();
            assert_eq!(json, serde_json::json!(icon.as_str()));
            assert!(Icon::VALUES.contains(&icon.as_str()));
        }

        for visibility in [Visibility::Owner, Visibility::All] {
            let json = serde_json::to_value(visibility).unwrap();
            assert_eq!(json, serde_json::json!(visibility.as_str()));
            assert!(Visibility::VALUES.contains(&visibility.as_str()));
        }

        for editable in [
            Editable::ReadOnly,
            Editable::EditableByOwner,
            Editable::EditableByAll,
        ] {
            let json = serde_json::to_value(editable).unwrap();
            assert_eq!(json, serde_json::json!(editable.as_str()));
            assert!(Editable::VALUES.contains(&editable.as_str()));
        }
    }

    #[test]
    fn test_dashboard_response_deserialization_ignores_unknown_fields() {
        let json = r#"{
            "dashboard": {
                "id": 129507,
                "title": "Ops",
                "icon": "bar-chart",
                "created_at": "2017-08-16T19:06:25Z",
                "updated_at": "2017-08-16T19:06:25Z",
                "visibility": "all",
                "editable": "editable_by_all",
                "ui_url": "https://insights.newrelic.com/accounts/1/dashboards/129507",
                "api_url": "https://api.newrelic.com/v2/dashboards/129507",
                "owner_email": "ops@example.com",
                "metadata": { "version": 1 },
                "filter": null,
                "widgets": [
                    {
                        "visualization": "facet_bar_chart",
                        "account_id": 1,
                        "data": [{ "nrql": "SELECT count(*) FROM Transaction FACET name" }],
                        "presentation": { "title": "Throughput", "notes": "" },
                        "layout": { "width": 1, "height": 1, "row": 1, "column": 1 },
                        "widget_id": 42,
                        "future_field": true
                    }
                ]
            }
        }"#;

        let payload: DashboardPayload = serde_json::from_str(json).unwrap();
        let detail = payload.dashboard;
        assert_eq!(detail.id, Some(129507));
        assert_eq!(detail.icon, Icon::BarChart);
        assert_eq!(detail.visibility, Some(Visibility::All));
        assert_eq!(detail.editable, Editable::EditableByAll);
        assert_eq!(detail.owner_email.as_deref(), Some("ops@example.com"));
        assert!(detail.filter.is_none());
        assert_eq!(detail.widgets.len(), 1);
        assert_eq!(detail.widgets[0].widget_id, Some(42));
        assert_eq!(
            detail.widgets[0].layout,
            Some(WidgetLayout {
                width: 1,
                height: 1,
                row: 1,
                column: 1
            })
        );
    }

    #[test]
    fn test_request_serialization_omits_server_fields() {
        let mut detail = DashboardDetail::new("Ops", Icon::User);
        detail.owner_email = Some("ops@example.com".to_string());
        detail.ui_url = Some("https://example.com".to_string());

        let json = serde_json::to_value(DashboardPayload { dashboard: detail }).unwrap();
        let dashboard = &json["dashboard"];

        assert_eq!(dashboard["title"], "Ops");
        assert_eq!(dashboard["icon"], "user");
        assert_eq!(dashboard["editable"], "editable_by_all");
        assert_eq!(dashboard["metadata"]["version"], 1);
        assert!(dashboard.get("id").is_none());
        assert!(dashboard.get("visibility").is_none());
        assert!(dashboard.get("filter").is_none());
        assert!(dashboard.get("owner_email").is_none());
        assert!(dashboard.get("ui_url").is_none());
    }

    #[test]
    fn test_unknown_icon_is_rejected() {
        let result = serde_json::from_str::<Icon>(r#""pie-chart""#);
        assert!(result.is_err());
    }

    #[test]
    fn test_api_error_body_deserialization() {
        let body: ApiErrorBody =
            serde_json::from_str(r#"{"error": {"title": "Dashboard not found"}}"#).unwrap();
        assert_eq!(body.error.title, "Dashboard not found");
    }
}
