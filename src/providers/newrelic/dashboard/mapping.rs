use super::config::DashboardConfig;
use super::{DashboardAttributes, DashboardData};
use crate::providers::newrelic::types::{
    DashboardDetail, DashboardMetadata, DashboardPayload, DashboardWidget, WidgetData,
    WidgetPresentation,
};

/// Builds the create/update request body from a typed configuration.
///
/// Layout, filter, widget account ids and owner email are accepted by the
/// schema but never sent; a warning is logged when any of them is set.
pub fn build_dashboard_struct(config: &DashboardConfig) -> DashboardPayload {
    let widgets = config
        .widgets
        .iter()
        .enumerate()
        .map(|(index, widget)| {
            if widget.layout.is_some() {
                tracing::warn!(widget = index, "widget layout is not sent to the API");
            }
            if widget.account_id.is_some() {
                tracing::warn!(widget = index, "widget account_id is not sent to the API");
            }

            DashboardWidget {
                widget_id: None,
                visualization: widget.visualization.clone(),
                account_id: None,
                data: widget
                    .data
                    .iter()
                    .map(|d| WidgetData {
                        nrql: d.nrql.clone(),
                    })
                    .collect(),
                presentation: WidgetPresentation {
                    title: widget.presentation.title.clone(),
                    notes: widget.presentation.notes.clone(),
                },
                layout: None,
            }
        })
        .collect();

    if config.filter.is_some() {
        tracing::warn!("dashboard filter is not sent to the API");
    }
    if config.owner_email.is_some() {
        tracing::warn!("owner_email is not sent to the API");
    }

    let mut dashboard = DashboardDetail::new(config.title.clone(), config.icon);
    dashboard.visibility = config.visibility;
    dashboard.editable = config.editable;
    dashboard.metadata = DashboardMetadata::default();
    dashboard.widgets = widgets;

    tracing::debug!(
        title = %dashboard.title,
        widgets = dashboard.widgets.len(),
        "built dashboard struct"
    );

    DashboardPayload { dashboard }
}

/// Copies the flat scalar fields of a response into the resource data.
///
/// Widgets, filter and metadata are not read back.
pub fn read_dashboard_struct(dashboard: &DashboardDetail, d: &mut DashboardData) {
    d.set_attributes(DashboardAttributes {
        title: dashboard.title.clone(),
        icon: dashboard.icon,
        visibility: dashboard.visibility,
        editable: dashboard.editable,
    });
}
