use thiserror::Error;

use crate::schema::Diagnostic;

#[derive(Debug, Error)]
pub enum ResourceError {
    #[error("invalid resource identifier: '{0}'")]
    InvalidIdentifier(String),

    #[error("resource has no configuration")]
    MissingConfig,

    #[error("invalid configuration: {}", format_diagnostics(.0))]
    InvalidConfig(Vec<Diagnostic>),
}

fn format_diagnostics(diagnostics: &[Diagnostic]) -> String {
    diagnostics
        .iter()
        .map(|d| d.to_string())
        .collect::<Vec<_>>()
        .join("; ")
}

/// Mutable view of one resource instance during a lifecycle call.
///
/// Holds the external id, the declared configuration (absent on read-only
/// paths such as import) and the attributes last read from the remote API.
/// An empty id means the resource does not exist remotely.
#[derive(Debug, Clone, PartialEq)]
pub struct ResourceData<C, A> {
    id: String,
    config: Option<C>,
    attributes: Option<A>,
}

impl<C, A> ResourceData<C, A> {
    pub fn new(config: C) -> Self {
        Self {
            id: String::new(),
            config: Some(config),
            attributes: None,
        }
    }

    pub fn with_id(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            config: None,
            attributes: None,
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn set_id(&mut self, id: impl Into<String>) {
        self.id = id.into();
    }

    pub fn clear_id(&mut self) {
        self.id.clear();
    }

    pub fn exists(&self) -> bool {
        !self.id.is_empty()
    }

    pub fn config(&self) -> Option<&C> {
        self.config.as_ref()
    }

    pub fn set_config(&mut self, config: C) {
        self.config = Some(config);
    }

    pub fn attributes(&self) -> Option<&A> {
        self.attributes.as_ref()
    }

    pub fn set_attributes(&mut self, attributes: A) {
        self.attributes = Some(attributes);
    }
}

pub fn parse_numeric_id(id: &str) -> Result<i64, ResourceError> {
    id.parse::<i64>()
        .map_err(|_| ResourceError::InvalidIdentifier(id.to_string()))
}

pub fn serialize_numeric_id(id: i64) -> String {
    id.to_string()
}
