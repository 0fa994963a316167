use delivery_types::{parse_timestamp, Configuration, NamingConvention, Result, SysValue};
use serde::Serialize;
use serde_json::Value;
use std::collections::BTreeMap;
use tracing::warn;

use crate::build_link;

/// How a raw `sys` member is hydrated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Link,
    Timestamp,
    Plain,
}

impl FieldKind {
    /// Classifies a key as it appears in the raw payload.
    #[must_use]
    pub fn of(key: &str) -> Self {
        match key {
            "space" | "contentType" | "environment" => Self::Link,
            "createdAt" | "updatedAt" | "deletedAt" => Self::Timestamp,
            _ => Self::Plain,
        }
    }
}

/// The `sys` members the API documents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SysField {
    Id,
    Type,
    LinkType,
    Space,
    ContentType,
    Environment,
    CreatedAt,
    UpdatedAt,
    DeletedAt,
    Locale,
    Revision,
}

impl SysField {
    /// Key as sent by the API.
    #[must_use]
    pub const fn external_name(self) -> &'static str {
        match self {
            Self::Id => "id",
            Self::Type => "type",
            Self::LinkType => "linkType",
            Self::Space => "space",
            Self::ContentType => "contentType",
            Self::Environment => "environment",
            Self::CreatedAt => "createdAt",
            Self::UpdatedAt => "updatedAt",
            Self::DeletedAt => "deletedAt",
            Self::Locale => "locale",
            Self::Revision => "revision",
        }
    }

    #[must_use]
    pub fn kind(self) -> FieldKind {
        FieldKind::of(self.external_name())
    }
}

/// Hydrated `sys` metadata, keyed by normalized field name.
///
/// Keys present here are exactly the renamed keys of the raw `sys` object;
/// absent members stay absent.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Sys {
    #[serde(flatten)]
    fields: BTreeMap<String, SysValue>,
    #[serde(skip)]
    convention: NamingConvention,
}

impl Sys {
    #[must_use]
    pub fn empty(convention: NamingConvention) -> Self {
        Self {
            fields: BTreeMap::new(),
            convention,
        }
    }

    /// Looks a value up by its normalized name (`created_at` or `createdAt`,
    /// depending on the convention it was hydrated with).
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&SysValue> {
        self.fields.get(name)
    }

    /// Looks a documented member up regardless of naming convention.
    #[must_use]
    pub fn get_field(&self, field: SysField) -> Option<&SysValue> {
        self.get(&self.convention.apply(field.external_name()))
    }

    #[must_use]
    pub fn contains_key(&self, name: &str) -> bool {
        self.fields.contains_key(name)
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.fields.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &SysValue)> {
        self.fields.iter().map(|(k, v)| (k.as_str(), v))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    #[must_use]
    pub fn convention(&self) -> NamingConvention {
        self.convention
    }

    #[must_use]
    pub fn id(&self) -> Option<&str> {
        self.get_field(SysField::Id).and_then(SysValue::as_str)
    }

    /// `sys.id` as text, including numeric ids (`5` gives `"5"`).
    #[must_use]
    pub fn id_text(&self) -> Option<String> {
        self.get_field(SysField::Id).and_then(SysValue::to_text)
    }

    #[must_use]
    pub fn resource_type(&self) -> Option<&str> {
        self.get_field(SysField::Type).and_then(SysValue::as_str)
    }

    #[must_use]
    pub fn locale(&self) -> Option<&str> {
        self.get_field(SysField::Locale).and_then(SysValue::as_str)
    }
}

/// Derives the normalized `sys` mapping from a raw response object.
///
/// Pure in `(raw, configuration)`. A missing or non-object `sys` yields an
/// empty mapping; the only failure is a timestamp member that does not parse.
pub fn hydrate_sys(raw: &Value, configuration: &Configuration) -> Result<Sys> {
    let convention = configuration.naming_convention();
    let mut sys = Sys::empty(convention);

    let members = match raw.get("sys") {
        None | Some(Value::Null) => return Ok(sys),
        Some(Value::Object(members)) => members,
        Some(other) => {
            warn!(sys = %other, "sys is not an object, hydrating empty metadata");
            return Ok(sys);
        }
    };

    for (key, value) in members {
        let hydrated = match FieldKind::of(key) {
            FieldKind::Link => SysValue::Link(build_link(value, configuration)),
            FieldKind::Timestamp => SysValue::Timestamp(parse_timestamp(key, value)?),
            FieldKind::Plain => SysValue::Value(value.clone()),
        };
        sys.fields.insert(convention.apply(key), hydrated);
    }

    Ok(sys)
}
