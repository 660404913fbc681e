//! Configuration validation against JSON Schema documents.
//!
//! Resources declare their accepted configuration as a JSON Schema document.
//! Validation runs against the raw JSON attribute bag before it is bound to a
//! typed configuration, so shape errors are reported as [`Diagnostic`]s
//! instead of surfacing later as decode failures.

use std::fmt;

use serde_json::Value;

/// Validates `config` against `schema`, collecting every failure.
pub fn validate(schema: &Value, config: &Value) -> Vec<Diagnostic> {
    match jsonschema::validator_for(schema) {
        Ok(validator) => validator
            .iter_errors(config)
            .map(|e| Diagnostic::new(dotted_path(&e.instance_path.to_string()), e.to_string()))
            .collect(),
        Err(e) => vec![Diagnostic::new("", format!("invalid schema: {}", e))],
    }
}

/// Turns a JSON pointer (`/widgets/0/presentation`) into `widgets.0.presentation`.
fn dotted_path(pointer: &str) -> String {
    pointer
        .trim_start_matches('/')
        .split('/')
        .map(|segment| segment.replace("~1", "/").replace("~0", "~"))
        .collect::<Vec<_>>()
        .join(".")
}

/// A single validation failure, addressed by its dotted attribute path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    pub attribute: String,
    pub summary: String,
}

impl Diagnostic {
    pub fn new(attribute: impl Into<String>, summary: impl Into<String>) -> Self {
        Self {
            attribute: attribute.into(),
            summary: summary.into(),
        }
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.attribute.is_empty() {
            write!(f, "{}", self.summary)
        } else {
            write!(f, "{}: {}", self.attribute, self.summary)
        }
    }
}
