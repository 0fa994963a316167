//! Registry keys of the form `"<type>:<id>"`.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::Error;

/// Identity of a resource inside one response tree.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ResourceKey {
    resource_type: String,
    id: String,
}

impl ResourceKey {
    #[must_use]
    pub fn new(resource_type: impl Into<String>, id: impl Into<String>) -> Self {
        Self {
            resource_type: resource_type.into(),
            id: id.into(),
        }
    }

    /// The `sys.type` (or `linkType`) half of the key.
    #[must_use]
    pub fn resource_type(&self) -> &str {
        &self.resource_type
    }

    #[must_use]
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Parses a key from its `"<type>:<id>"` form. Ids may contain `:`.
    pub fn parse(s: &str) -> Result<Self, Error> {
        s.parse()
    }
}

impl fmt::Display for ResourceKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.resource_type, self.id)
    }
}

impl FromStr for ResourceKey {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (resource_type, id) = s
            .split_once(':')
            .ok_or_else(|| Error::InvalidResourceKey(s.to_owned()))?;
        Ok(Self::new(resource_type, id))
    }
}
