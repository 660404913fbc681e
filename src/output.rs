use tabled::settings::Style;
use tabled::{Table, Tabled};
use termtree::Tree;

use crate::providers::newrelic::DashboardPayload;
use crate::terraform::StateFile;

#[derive(Tabled)]
struct StateRow {
    #[tabled(rename = "NAME")]
    name: String,
    #[tabled(rename = "TYPE")]
    resource_type: String,
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "TITLE")]
    title: String,
    #[tabled(rename = "ICON")]
    icon: String,
    #[tabled(rename = "VISIBILITY")]
    visibility: String,
    #[tabled(rename = "EDITABLE")]
    editable: String,
}

fn attribute(attributes: &serde_json::Value, key: &str) -> String {
    attributes
        .get(key)
        .and_then(|v| v.as_str())
        .unwrap_or("-")
        .to_string()
}

pub fn render_state_table(state: &StateFile) -> String {
    if state.resources.is_empty() {
        return "No resources in state.".to_string();
    }

    let rows = state.resources.iter().map(|(name, resource)| StateRow {
        name: name.clone(),
        resource_type: resource.resource_type.clone(),
        id: resource.id.clone(),
        title: attribute(&resource.attributes, "title"),
        icon: attribute(&resource.attributes, "icon"),
        visibility: attribute(&resource.attributes, "visibility"),
        editable: attribute(&resource.attributes, "editable"),
    });

    let mut table = Table::new(rows);
    table.with(Style::rounded());
    table.to_string()
}

/// Renders the request a configuration would send, widgets in order.
pub fn render_dashboard_tree(payload: &DashboardPayload) -> String {
    let dashboard = &payload.dashboard;

    let mut root = Tree::new(format!("{} [{}]", dashboard.title, dashboard.icon));
    root.push(Tree::new(format!(
        "visibility: {}",
        dashboard
            .visibility
            .map(|v| v.as_str())
            .unwrap_or("(unset)")
    )));
    root.push(Tree::new(format!("editable: {}", dashboard.editable)));
    root.push(Tree::new(format!(
        "metadata.version: {}",
        dashboard.metadata.version
    )));

    let mut widgets = Tree::new(format!("widgets ({})", dashboard.widgets.len()));
    for (index, widget) in dashboard.widgets.iter().enumerate() {
        let mut node = Tree::new(format!(
            "[{}] {}: {}",
            index, widget.visualization, widget.presentation.title
        ));
        if !widget.presentation.notes.is_empty() {
            node.push(Tree::new(format!("notes: {}", widget.presentation.notes)));
        }
        for data in &widget.data {
            node.push(Tree::new(format!("nrql: {}", data.nrql)));
        }
        widgets.push(node);
    }
    root.push(widgets);

    root.to_string()
}
