use serde_json::{Value, json};

use crate::providers::newrelic::types::{Editable, Icon, Visibility};

/// JSON Schema for a `newrelic_dashboard` configuration.
///
/// `default` keywords document the literal defaults the typed binding applies.
pub fn dashboard_schema() -> Value {
    json!({
        "$schema": "https://json-schema.org/draft/2020-12/schema",
        "title": "newrelic_dashboard",
        "type": "object",
        "additionalProperties": false,
        "required": ["title", "icon"],
        "properties": {
            "id": { "type": "integer" },
            "title": { "type": "string" },
            "icon": { "type": "string", "enum": Icon::VALUES },
            "visibility": { "type": "string", "enum": Visibility::VALUES },
            "editable": {
                "type": "string",
                "enum": Editable::VALUES,
                "default": Editable::default().as_str()
            },
            "owner_email": { "type": "string" },
            "filter": filter_schema(),
            "widgets": { "type": "array", "items": widget_schema() }
        }
    })
}

fn filter_schema() -> Value {
    json!({
        "type": "object",
        "additionalProperties": false,
        "properties": {
            "event_types": { "type": "array", "items": { "type": "string" } },
            "attributes": { "type": "array", "items": { "type": "string" } }
        }
    })
}

fn widget_schema() -> Value {
    let layout_field = json!({ "type": "integer", "minimum": 0 });

    json!({
        "type": "object",
        "additionalProperties": false,
        "required": ["presentation"],
        "properties": {
            "visualization": { "type": "string", "default": "" },
            "account_id": { "type": "integer" },
            "presentation": {
                "type": "object",
                "additionalProperties": false,
                "required": ["title"],
                "properties": {
                    "title": { "type": "string" },
                    "notes": { "type": "string", "default": "" }
                }
            },
            "layout": {
                "type": "object",
                "additionalProperties": false,
                "properties": {
                    "width": layout_field,
                    "height": layout_field,
                    "row": layout_field,
                    "column": layout_field
                }
            },
            "data": {
                "type": "array",
                "items": {
                    "type": "object",
                    "additionalProperties": false,
                    "properties": {
                        "nrql": { "type": "string", "default": "" }
                    }
                }
            }
        }
    })
}
