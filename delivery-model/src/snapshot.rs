use delivery_types::{Configuration, Result};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// The minimal state needed to rebuild a resource: its configuration and
/// the raw payload. Hydrated metadata and depth are recomputed on restore.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    pub configuration: Configuration,
    pub raw: Value,
}

impl Snapshot {
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
}
