use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;

use crate::ResourceKey;

/// A pointer to another resource, not the resource itself.
///
/// Built from the API's link object, `{"sys": {"type": "Link", "linkType":
/// "Space", "id": "..."}}`, or from the bare sys object. Missing members are
/// left empty rather than rejected.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Link {
    id: String,
    link_type: String,
}

impl Link {
    #[must_use]
    pub fn new(link_type: impl Into<String>, id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            link_type: link_type.into(),
        }
    }

    /// Best-effort extraction from a raw link object.
    #[must_use]
    pub fn from_value(item: &Value) -> Self {
        let sys = match item.get("sys") {
            Some(sys) if sys.is_object() => sys,
            _ => item,
        };
        let member = |name: &str| {
            sys.get(name)
                .and_then(Value::as_str)
                .unwrap_or_default()
                .to_owned()
        };

        Self {
            id: member("id"),
            link_type: member("linkType"),
        }
    }

    #[must_use]
    pub fn id(&self) -> &str {
        &self.id
    }

    /// The type of the linked resource (`Space`, `Entry`, ...).
    #[must_use]
    pub fn link_type(&self) -> &str {
        &self.link_type
    }

    /// Key the target is registered under when it is part of the same response.
    #[must_use]
    pub fn key(&self) -> ResourceKey {
        ResourceKey::new(&self.link_type, &self.id)
    }
}

impl fmt::Display for Link {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<Link linkType='{}' id='{}'>", self.link_type, self.id)
    }
}
