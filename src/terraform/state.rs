//! Local state store.
//!
//! Persists, per resource address, the resource type, the external id and
//! the flat attributes last read from the remote API. Nested configuration
//! (widgets, filters) is never stored.

use std::collections::BTreeMap;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tempfile::NamedTempFile;
use thiserror::Error;

pub const STATE_VERSION: u32 = 1;

#[derive(Debug, Error)]
pub enum StateError {
    #[error("state I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("state parse error: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("unsupported state version {found}, expected {}", STATE_VERSION)]
    UnsupportedVersion { found: u32 },

    #[error("resource type mismatch: expected {expected}, found {found}")]
    ResourceType { expected: String, found: String },

    #[error("no state location available; set NRDASH_STATE_FILE or use --state flag")]
    NoDefaultLocation,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResourceState {
    pub resource_type: String,
    pub id: String,
    #[serde(default)]
    pub attributes: serde_json::Value,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StateFile {
    pub version: u32,
    #[serde(default)]
    pub resources: BTreeMap<String, ResourceState>,
}

impl Default for StateFile {
    fn default() -> Self {
        Self {
            version: STATE_VERSION,
            resources: BTreeMap::new(),
        }
    }
}

impl StateFile {
    /// Loads state from `path`; a missing file is an empty state.
    pub fn load(path: &Path) -> Result<Self, StateError> {
        let contents = match fs::read_to_string(path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                tracing::debug!(path = %path.display(), "no state file, starting empty");
                return Ok(Self::default());
            }
            Err(e) => return Err(e.into()),
        };

        let state: StateFile = serde_json::from_str(&contents)?;
        if state.version != STATE_VERSION {
            return Err(StateError::UnsupportedVersion {
                found: state.version,
            });
        }

        Ok(state)
    }

    // NOTE: Written to a uniquely named sibling temp file, then renamed over `path`
    pub fn save(&self, path: &Path) -> Result<(), StateError> {
        let dir = match path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => {
                fs::create_dir_all(parent)?;
                parent
            }
            _ => Path::new("."),
        };

        let mut tmp = NamedTempFile::new_in(dir)?;
        serde_json::to_writer_pretty(&mut tmp, self)?;
        tmp.persist(path).map_err(|e| e.error)?;

        tracing::debug!(path = %path.display(), resources = self.resources.len(), "state saved");
        Ok(())
    }

    pub fn get(&self, name: &str) -> Option<&ResourceState> {
        self.resources.get(name)
    }

    pub fn upsert(&mut self, name: impl Into<String>, resource: ResourceState) {
        self.resources.insert(name.into(), resource);
    }

    pub fn remove(&mut self, name: &str) -> Option<ResourceState> {
        self.resources.remove(name)
    }
}

pub fn default_state_path() -> Option<PathBuf> {
    dirs::data_dir().map(|dir| dir.join("nrdash").join("state.json"))
}
