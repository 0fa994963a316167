//! Concrete resource types.
//!
//! Each is a thin wrapper over [`ResourceBase`]; type-specific accessors read
//! straight from the raw payload.

use serde_json::{Map, Value};
use std::fmt;

use crate::{Resource, ResourceBase};

macro_rules! resource_type {
    ($(#[$meta:meta])* $name:ident, $type_name:literal) => {
        $(#[$meta])*
        #[derive(Debug, Clone)]
        pub struct $name {
            base: ResourceBase,
        }

        impl Resource for $name {
            fn base(&self) -> &ResourceBase {
                &self.base
            }

            fn from_base(base: ResourceBase) -> Self {
                Self { base }
            }

            fn type_name(&self) -> &'static str {
                $type_name
            }
        }

        impl PartialEq for $name {
            fn eq(&self, other: &Self) -> bool {
                self.is_same_resource(other)
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.inspect())
            }
        }
    };
}

resource_type!(
    /// A content entry.
    Entry,
    "Entry"
);
resource_type!(
    /// A media asset.
    Asset,
    "Asset"
);
resource_type!(ContentType, "ContentType");
resource_type!(Space, "Space");
resource_type!(Environment, "Environment");
resource_type!(
    /// Tombstone returned by sync for a removed entry.
    DeletedEntry,
    "DeletedEntry"
);
resource_type!(DeletedAsset, "DeletedAsset");

fn raw_fields(resource: &impl Resource) -> Option<&Map<String, Value>> {
    resource.raw().get("fields").and_then(Value::as_object)
}

/// A field value in the resource's locale.
///
/// Responses for all locales (`locale=*`) nest each field under locale codes;
/// those are unwrapped with [`Resource::internal_resource_locale`]. Anything
/// else is returned as is.
fn localized_field<'a>(resource: &'a impl Resource, name: &str) -> Option<&'a Value> {
    let value = raw_fields(resource)?.get(name)?;
    let by_locale = value.as_object();

    match (resource.internal_resource_locale(), by_locale) {
        (Some(locale), Some(map)) if map.contains_key(locale) => map.get(locale),
        _ => Some(value),
    }
}

impl Entry {
    #[must_use]
    pub fn fields(&self) -> Option<&Map<String, Value>> {
        raw_fields(self)
    }

    #[must_use]
    pub fn field(&self, name: &str) -> Option<&Value> {
        localized_field(self, name)
    }
}

impl Asset {
    #[must_use]
    pub fn fields(&self) -> Option<&Map<String, Value>> {
        raw_fields(self)
    }

    #[must_use]
    pub fn field(&self, name: &str) -> Option<&Value> {
        localized_field(self, name)
    }

    #[must_use]
    pub fn title(&self) -> Option<&str> {
        self.field("title").and_then(Value::as_str)
    }

    /// The `file` field (`url`, `contentType`, `details`, ...).
    #[must_use]
    pub fn file(&self) -> Option<&Value> {
        self.field("file")
    }
}

impl ContentType {
    #[must_use]
    pub fn name(&self) -> Option<&str> {
        self.raw().get("name").and_then(Value::as_str)
    }

    /// Id of the field used as the entry title.
    #[must_use]
    pub fn display_field(&self) -> Option<&str> {
        self.raw().get("displayField").and_then(Value::as_str)
    }
}

impl Space {
    #[must_use]
    pub fn name(&self) -> Option<&str> {
        self.raw().get("name").and_then(Value::as_str)
    }
}
