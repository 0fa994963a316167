use delivery_types::{Link, ResourceKey};
use std::any::Any;
use std::collections::HashMap;
use std::sync::Arc;

use crate::Resource;

/// Resources of one response tree, keyed by `"<type>:<id>"`.
///
/// Owned by the caller that builds the tree; [`Resource::build`] inserts into
/// it, and surrounding code looks links up in it.
#[derive(Debug, Default, Clone)]
pub struct EntryRegistry {
    entries: HashMap<ResourceKey, Arc<dyn Resource>>,
}

impl EntryRegistry {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts or overwrites, returning the previous resource under `key`.
    pub fn insert(
        &mut self,
        key: ResourceKey,
        resource: Arc<dyn Resource>,
    ) -> Option<Arc<dyn Resource>> {
        self.entries.insert(key, resource)
    }

    #[must_use]
    pub fn get(&self, key: &ResourceKey) -> Option<&Arc<dyn Resource>> {
        self.entries.get(key)
    }

    /// Typed lookup; `None` when absent or registered as another type.
    #[must_use]
    pub fn get_as<R: Resource>(&self, key: &ResourceKey) -> Option<&R> {
        let resource: &dyn Any = self.entries.get(key)?.as_ref();
        resource.downcast_ref::<R>()
    }

    /// The registered target of `link`, if it is part of this tree.
    #[must_use]
    pub fn get_link(&self, link: &Link) -> Option<&Arc<dyn Resource>> {
        self.get(&link.key())
    }

    #[must_use]
    pub fn contains_key(&self, key: &ResourceKey) -> bool {
        self.entries.contains_key(key)
    }

    pub fn keys(&self) -> impl Iterator<Item = &ResourceKey> {
        self.entries.keys()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
