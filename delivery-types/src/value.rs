use chrono::{DateTime, Utc};
use serde::Serialize;
use serde_json::Value;

use crate::Link;

/// Text form of a scalar JSON value: strings as is, numbers and booleans
/// through their JSON text. `null`, arrays and objects have none.
#[must_use]
pub fn scalar_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}

/// One hydrated `sys` value.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum SysValue {
    /// `space`, `contentType`, `environment`.
    Link(Link),
    /// `createdAt`, `updatedAt`, `deletedAt`.
    Timestamp(DateTime<Utc>),
    /// Everything else, exactly as received.
    Value(Value),
}

impl SysValue {
    #[must_use]
    pub fn as_link(&self) -> Option<&Link> {
        match self {
            Self::Link(link) => Some(link),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_timestamp(&self) -> Option<&DateTime<Utc>> {
        match self {
            Self::Timestamp(ts) => Some(ts),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_value(&self) -> Option<&Value> {
        match self {
            Self::Value(value) => Some(value),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        self.as_value().and_then(Value::as_str)
    }

    /// Plain scalars rendered as text, see [`scalar_text`].
    #[must_use]
    pub fn to_text(&self) -> Option<String> {
        self.as_value().and_then(scalar_text)
    }

    #[must_use]
    pub fn as_i64(&self) -> Option<i64> {
        self.as_value().and_then(Value::as_i64)
    }
}

impl From<Link> for SysValue {
    fn from(link: Link) -> Self {
        Self::Link(link)
    }
}

impl From<DateTime<Utc>> for SysValue {
    fn from(ts: DateTime<Utc>) -> Self {
        Self::Timestamp(ts)
    }
}

impl From<Value> for SysValue {
    fn from(value: Value) -> Self {
        Self::Value(value)
    }
}
