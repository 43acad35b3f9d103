//! Field mappings
//!
//! A [`FieldMap`] maps field names to providers. Definitions keep one as their
//! base mapping and callers pass another as per-build overrides.

use std::any::Any;
use std::collections::hash_map;
use std::collections::HashMap;
use std::fmt;

use super::provider::{IntoProvider, Provider};

/// Mapping from field name to the provider that fills it
#[derive(Default)]
pub struct FieldMap {
    entries: HashMap<String, Provider>,
}

impl FieldMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores a value or provider for `name`, replacing any earlier entry
    ///
    /// Plain values must be `Clone + Send + Sync` so every build gets its own
    /// copy. Store anything else through [`deferred`](super::provider::deferred).
    pub fn set(&mut self, name: impl Into<String>, value: impl IntoProvider) -> &mut Self {
        self.entries.insert(name.into(), value.into_provider());
        self
    }

    /// Chaining form of [`FieldMap::set`], handy for overrides
    pub fn with(mut self, name: impl Into<String>, value: impl IntoProvider) -> Self {
        self.set(name, value);
        self
    }

    pub fn get(&self, name: &str) -> Option<&Provider> {
        self.entries.get(name)
    }

    /// Reads back a literal stored earlier, e.g. to derive one field from another
    /// inside a definition builder
    pub fn value_of<V: Any>(&self, name: &str) -> Option<V> {
        self.get(name).and_then(Provider::literal_value)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    pub fn remove(&mut self, name: &str) -> Option<Provider> {
        self.entries.remove(name)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Field names in sorted order
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.entries.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    pub fn iter(&self) -> hash_map::Iter<'_, String, Provider> {
        self.entries.iter()
    }

    /// Copies every entry of `other` into `self`; `other` wins on collisions
    pub fn merge(&mut self, other: &FieldMap) {
        for (name, provider) in &other.entries {
            self.entries.insert(name.clone(), provider.share());
        }
    }

    /// Returns a copy of `self` with `overrides` merged on top
    pub fn merged_with(&self, overrides: &FieldMap) -> FieldMap {
        let mut merged = self.clone();
        merged.merge(overrides);
        merged
    }
}

impl Clone for FieldMap {
    /// The copy holds its own entries, but deferred and sequence providers are
    /// shared with the original.
    fn clone(&self) -> Self {
        let mut copy = FieldMap::new();
        copy.merge(self);
        copy
    }
}

impl fmt::Debug for FieldMap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map()
            .entries(self.names().into_iter().map(|name| (name, &self.entries[name])))
            .finish()
    }
}

impl<'a> IntoIterator for &'a FieldMap {
    type Item = (&'a String, &'a Provider);
    type IntoIter = hash_map::Iter<'a, String, Provider>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<K, P> FromIterator<(K, P)> for FieldMap
where
    K: Into<String>,
    P: IntoProvider,
{
    fn from_iter<I: IntoIterator<Item = (K, P)>>(iter: I) -> Self {
        let mut fields = FieldMap::new();
        for (name, value) in iter {
            fields.set(name, value);
        }
        fields
    }
}
