use serde::{Deserialize, Serialize};

use crate::NamingConvention;

/// Client options that shape how a raw response is hydrated.
///
/// Both options are optional on the wire; an empty object deserializes to
/// the default (no locale fallback, snake_case keys).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Configuration {
    /// Locale used when a resource carries no `sys.locale` of its own.
    pub default_locale: Option<String>,
    /// Keep metadata keys in the API's camelCase instead of snake_case.
    pub use_camel_case: bool,
}

impl Configuration {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_default_locale(mut self, locale: impl Into<String>) -> Self {
        self.default_locale = Some(locale.into());
        self
    }

    #[must_use]
    pub fn with_camel_case(mut self, use_camel_case: bool) -> Self {
        self.use_camel_case = use_camel_case;
        self
    }

    /// The key naming convention selected by `use_camel_case`.
    #[must_use]
    pub fn naming_convention(&self) -> NamingConvention {
        NamingConvention::from_camel_case_flag(self.use_camel_case)
    }
}
