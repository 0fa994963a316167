use chrono::{DateTime, Utc};
use delivery_types::{Configuration, Link, Result, SysValue};
use heck::ToSnakeCase;
use serde_json::Value;
use std::any::Any;
use std::fmt;
use std::sync::Arc;
use tracing::{debug, warn};

use crate::{build_link, DeliveryClient, EntryRegistry, ResourceBase, Snapshot, Sys, SysField};

/// Collaborators supplied by whoever is building a response tree.
#[derive(Debug, Default)]
pub struct BuildContext<'a> {
    /// Registry the new resource is inserted into. `None` opts out of
    /// registration; an empty registry still receives the resource.
    pub entries: Option<&'a mut EntryRegistry>,
    /// Nesting depth of the resource inside the response.
    pub depth: usize,
}

impl<'a> BuildContext<'a> {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_entries(mut self, entries: &'a mut EntryRegistry) -> Self {
        self.entries = Some(entries);
        self
    }

    #[must_use]
    pub fn at_depth(mut self, depth: usize) -> Self {
        self.depth = depth;
        self
    }
}

/// A resource returned by the delivery API.
///
/// Implementors only provide access to their [`ResourceBase`] and their type
/// name. Everything else is provided, and every provided accessor can be
/// overridden: an implementor that defines its own `id` is what callers get,
/// not the raw `sys.id`.
pub trait Resource: Any + Send + Sync + fmt::Debug {
    fn base(&self) -> &ResourceBase;

    fn from_base(base: ResourceBase) -> Self
    where
        Self: Sized;

    /// Type name, e.g. `ContentType`. Reload dispatches on its snake_case form.
    fn type_name(&self) -> &'static str;

    // ── Construction ─────────────────────────────────────────────

    /// Hydrates a standalone resource.
    fn new(raw: Value, configuration: Configuration) -> Result<Self>
    where
        Self: Sized,
    {
        ResourceBase::new(raw, configuration).map(Self::from_base)
    }

    /// Hydrates a resource that is part of a response tree and registers it
    /// under `"<sys.type>:<sys.id>"` when the context carries a registry.
    fn build(raw: Value, configuration: Configuration, ctx: BuildContext<'_>) -> Result<Arc<Self>>
    where
        Self: Sized,
    {
        let base = ResourceBase::with_depth(raw, configuration, ctx.depth)?;
        let key = base.registry_key();
        let resource = Arc::new(Self::from_base(base));

        if let Some(entries) = ctx.entries {
            match key {
                Some(key) => {
                    debug!(key = %key, depth = ctx.depth, "registering resource");
                    entries.insert(key, resource.clone());
                }
                None => debug!("resource has no sys.type/sys.id, not registered"),
            }
        }

        Ok(resource)
    }

    /// Rebuilds a resource from [`Resource::to_snapshot`] output.
    fn from_snapshot(snapshot: Snapshot) -> Result<Self>
    where
        Self: Sized,
    {
        ResourceBase::from_snapshot(snapshot).map(Self::from_base)
    }

    fn to_snapshot(&self) -> Snapshot {
        self.base().to_snapshot()
    }

    // ── State ────────────────────────────────────────────────────

    fn raw(&self) -> &Value {
        self.base().raw()
    }

    fn configuration(&self) -> &Configuration {
        self.base().configuration()
    }

    fn default_locale(&self) -> Option<&str> {
        self.base().default_locale()
    }

    fn sys(&self) -> &Sys {
        self.base().sys()
    }

    fn depth(&self) -> usize {
        self.base().depth()
    }

    // ── Metadata accessors ───────────────────────────────────────

    /// Any hydrated `sys` member by normalized name.
    fn sys_field(&self, name: &str) -> Option<&SysValue> {
        self.sys().get(name)
    }

    fn id(&self) -> Option<&str> {
        self.sys().id()
    }

    fn resource_type(&self) -> Option<&str> {
        self.sys().resource_type()
    }

    fn locale(&self) -> Option<&str> {
        self.sys().locale()
    }

    fn revision(&self) -> Option<i64> {
        self.sys().get_field(SysField::Revision).and_then(SysValue::as_i64)
    }

    fn created_at(&self) -> Option<&DateTime<Utc>> {
        self.sys().get_field(SysField::CreatedAt).and_then(SysValue::as_timestamp)
    }

    fn updated_at(&self) -> Option<&DateTime<Utc>> {
        self.sys().get_field(SysField::UpdatedAt).and_then(SysValue::as_timestamp)
    }

    fn deleted_at(&self) -> Option<&DateTime<Utc>> {
        self.sys().get_field(SysField::DeletedAt).and_then(SysValue::as_timestamp)
    }

    fn space(&self) -> Option<&Link> {
        self.sys().get_field(SysField::Space).and_then(SysValue::as_link)
    }

    fn content_type(&self) -> Option<&Link> {
        self.sys().get_field(SysField::ContentType).and_then(SysValue::as_link)
    }

    fn environment(&self) -> Option<&Link> {
        self.sys().get_field(SysField::Environment).and_then(SysValue::as_link)
    }

    // ── Identity ─────────────────────────────────────────────────

    /// Same concrete type and same `sys.id`. The raw payloads may differ.
    fn is_same_resource(&self, other: &dyn Resource) -> bool {
        let other_any: &dyn Any = other;
        Any::type_id(self) == Any::type_id(other_any)
            && self.sys().get_field(SysField::Id) == other.sys().get_field(SysField::Id)
    }

    /// Short debugging tag, `<Entry id='abc'>`.
    fn inspect(&self) -> String {
        format!(
            "<{} id='{}'>",
            self.repr_name(),
            self.sys().id_text().unwrap_or_default()
        )
    }

    // ── Helpers for implementors ─────────────────────────────────

    /// Label used by [`Resource::inspect`].
    fn repr_name(&self) -> String {
        self.type_name().to_owned()
    }

    /// The resource's own `sys.locale`, else the configured default locale.
    fn internal_resource_locale(&self) -> Option<&str> {
        self.sys().locale().or_else(|| self.default_locale())
    }

    fn build_link(&self, item: &Value) -> Link {
        build_link(item, self.configuration())
    }

    // ── Reload ───────────────────────────────────────────────────

    /// Snake_case resource name the client fetches this type by.
    fn reload_name(&self) -> String {
        self.type_name().to_snake_case()
    }

    /// Id passed to the client: [`Resource::id`], else a numeric `sys.id`
    /// rendered as text.
    fn reload_id(&self) -> Option<String> {
        self.id()
            .map(str::to_owned)
            .or_else(|| self.sys().id_text())
    }

    /// Fetches this resource again through `client`. See [`reload_resource`]
    /// for resources held as `dyn Resource`.
    fn reload<C>(&self, client: Option<&C>) -> Option<C::Output>
    where
        Self: Sized,
        C: DeliveryClient + ?Sized,
    {
        reload_resource(self, client)
    }
}

/// Fetches `resource` again through `client`.
///
/// Returns `None` without fetching when no client is wired up or the
/// resource has no id.
pub fn reload_resource<C>(resource: &dyn Resource, client: Option<&C>) -> Option<C::Output>
where
    C: DeliveryClient + ?Sized,
{
    let client = client?;
    let Some(id) = resource.reload_id() else {
        warn!(resource = %resource.inspect(), "cannot reload a resource without an id");
        return None;
    };

    let name = resource.reload_name();
    debug!(resource = %name, id = %id, "reloading resource");
    Some(client.fetch(&name, &id))
}

impl PartialEq for dyn Resource {
    fn eq(&self, other: &Self) -> bool {
        self.is_same_resource(other)
    }
}

impl fmt::Display for dyn Resource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.inspect())
    }
}
