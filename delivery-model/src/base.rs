use delivery_types::{scalar_text, Configuration, Link, ResourceKey, Result};
use serde_json::Value;

use crate::{hydrate_sys, Snapshot, Sys};

/// Builds the link stored for `space`, `contentType` and `environment`.
///
/// Every link in hydrated metadata goes through here. Links carry no
/// configuration-dependent state yet; the configuration is part of the
/// signature so resolution options can reach them later.
#[must_use]
pub fn build_link(item: &Value, configuration: &Configuration) -> Link {
    let _ = configuration;
    Link::from_value(item)
}

/// State shared by every resource type.
///
/// `sys` is derived from `raw` and `configuration` on construction and never
/// edited afterwards.
#[derive(Debug, Clone)]
pub struct ResourceBase {
    raw: Value,
    configuration: Configuration,
    default_locale: Option<String>,
    sys: Sys,
    depth: usize,
}

impl ResourceBase {
    pub fn new(raw: Value, configuration: Configuration) -> Result<Self> {
        Self::with_depth(raw, configuration, 0)
    }

    /// Hydrates a resource found `depth` levels into a response tree.
    pub fn with_depth(raw: Value, configuration: Configuration, depth: usize) -> Result<Self> {
        let sys = hydrate_sys(&raw, &configuration)?;
        Ok(Self {
            default_locale: configuration.default_locale.clone(),
            raw,
            configuration,
            sys,
            depth,
        })
    }

    /// Rehydrates from a snapshot. Depth is not part of a snapshot and resets to 0.
    pub fn from_snapshot(snapshot: Snapshot) -> Result<Self> {
        Self::with_depth(snapshot.raw, snapshot.configuration, 0)
    }

    #[must_use]
    pub fn to_snapshot(&self) -> Snapshot {
        Snapshot {
            configuration: self.configuration.clone(),
            raw: self.raw.clone(),
        }
    }

    #[must_use]
    pub fn raw(&self) -> &Value {
        &self.raw
    }

    #[must_use]
    pub fn configuration(&self) -> &Configuration {
        &self.configuration
    }

    #[must_use]
    pub fn default_locale(&self) -> Option<&str> {
        self.default_locale.as_deref()
    }

    #[must_use]
    pub fn sys(&self) -> &Sys {
        &self.sys
    }

    #[must_use]
    pub fn depth(&self) -> usize {
        self.depth
    }

    /// `"<sys.type>:<sys.id>"` taken from the raw payload. Numeric and boolean
    /// members are keyed by their JSON text (`Entry:5`); `null` or structured
    /// members give no key.
    #[must_use]
    pub fn registry_key(&self) -> Option<ResourceKey> {
        let sys = self.raw.get("sys")?;
        let resource_type = scalar_text(sys.get("type")?)?;
        let id = scalar_text(sys.get("id")?)?;
        Some(ResourceKey::new(resource_type, id))
    }
}
