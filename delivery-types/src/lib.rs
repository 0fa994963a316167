//! Value types for content delivery resources.
//!
//! Everything here is independent of how a resource is hydrated:
//! - [`Configuration`]: client options that affect hydration (locale, key casing)
//! - [`NamingConvention`]: snake_case or camelCase metadata keys
//! - [`Link`]: a lightweight `(linkType, id)` pointer to another resource
//! - [`ResourceKey`]: the `"<type>:<id>"` identity used by entry registries
//! - [`SysValue`]: one hydrated metadata value (link, timestamp, or plain JSON)
//!
//! The resource model itself lives in `delivery-model`.

mod configuration;
mod key;
mod link;
mod naming;
mod timestamp;
mod value;

pub use configuration::Configuration;
pub use key::ResourceKey;
pub use link::Link;
pub use naming::NamingConvention;
pub use timestamp::parse_timestamp;
pub use value::{scalar_text, SysValue};

/// Result type alias using the crate's error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while building or transporting resource values.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("invalid timestamp in `{field}`: {value}")]
    InvalidTimestamp { field: String, value: String },

    #[error("invalid resource key: {0}")]
    InvalidResourceKey(String),
}
