//! Metadata key naming.
//!
//! The delivery API sends camelCase keys (`createdAt`, `contentType`). By
//! default they are exposed as snake_case; with camel case enabled they are
//! kept exactly as received.

use heck::ToSnakeCase;
use serde::{Deserialize, Serialize};

/// Case style used for hydrated `sys` keys.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NamingConvention {
    /// `createdAt` becomes `created_at`.
    #[default]
    SnakeCase,
    /// Keys pass through unchanged.
    CamelCase,
}

impl NamingConvention {
    #[must_use]
    pub const fn from_camel_case_flag(use_camel_case: bool) -> Self {
        if use_camel_case {
            Self::CamelCase
        } else {
            Self::SnakeCase
        }
    }

    /// Renames an external (camelCase) key into this convention.
    #[must_use]
    pub fn apply(self, key: &str) -> String {
        match self {
            Self::SnakeCase => snakify(key),
            Self::CamelCase => key.to_owned(),
        }
    }
}

/// snake_cases each `_`-separated segment on its own, so leading, trailing
/// and repeated underscores survive (`_private`, `a__b`) and distinct keys
/// stay distinct.
fn snakify(key: &str) -> String {
    key.split('_')
        .map(|segment| segment.to_snake_case())
        .collect::<Vec<_>>()
        .join("_")
}
