//! Resource model for content delivery responses.
//!
//! Every resource returned by the delivery API (entries, assets, content
//! types, spaces, ...) carries a `sys` block with its identity, timestamps and
//! links to related resources. This crate turns a raw decoded response into a
//! typed resource with that block normalized:
//! - [`hydrate_sys`] / [`Sys`]: classification (link, timestamp, plain) and key renaming
//! - [`ResourceBase`]: the raw payload, configuration, hydrated `sys` and depth
//! - [`Resource`]: metadata accessors, identity equality, snapshots and reload
//! - [`EntryRegistry`]: `"<type>:<id>"` lookup shared by one response tree
//! - [`DeliveryClient`]: the fetch capability used by [`Resource::reload`]
//!
//! Transport, pagination and link-graph resolution belong to the client layer.

mod base;
mod client;
mod registry;
mod resource;
mod resources;
mod snapshot;
mod sys;

pub use base::{build_link, ResourceBase};
pub use client::DeliveryClient;
pub use registry::EntryRegistry;
pub use resource::{reload_resource, BuildContext, Resource};
pub use resources::{Asset, ContentType, DeletedAsset, DeletedEntry, Entry, Environment, Space};
pub use snapshot::Snapshot;
pub use sys::{hydrate_sys, FieldKind, Sys, SysField};

pub use delivery_types::{
    Configuration, Error, Link, NamingConvention, ResourceKey, Result, SysValue,
};
