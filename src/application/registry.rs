//! Definition registry
//!
//! The registry owns every definition for the lifetime of a test suite.
//! Names are unique and append-only: there is no way to replace or remove a
//! definition once it is registered. Construct one at the top of the suite
//! and pass it by reference to whatever needs to define or build fixtures.

use std::collections::BTreeMap;

use tracing::{debug, warn};

use super::engine;
use crate::domain::{Definition, DefinitionName, FieldMap, Record};
use crate::error::{Error, Result};
use crate::infrastructure::log_messages::registry as messages;

/// Table of named definitions
#[derive(Debug, Default)]
pub struct Registry {
    definitions: BTreeMap<String, Definition>,
}

impl Registry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a definition building `R`
    ///
    /// Any string is accepted as `name`. `builder` populates the base mapping once, now; the mapping is frozen
    /// afterwards. Fails when `name` is already taken, leaving the existing
    /// definition in place.
    pub fn define<R, F>(&mut self, name: &str, builder: F) -> Result<()>
    where
        R: Record,
        F: FnOnce(&mut FieldMap),
    {
        self.insert::<R, F>(name, Some(builder))
    }

    /// Registers a definition with an empty base mapping
    pub fn define_empty<R: Record>(&mut self, name: &str) -> Result<()> {
        self.insert::<R, fn(&mut FieldMap)>(name, None)
    }

    fn insert<R, F>(&mut self, name: &str, builder: Option<F>) -> Result<()>
    where
        R: Record,
        F: FnOnce(&mut FieldMap),
    {
        if self.definitions.contains_key(name) {
            warn!(definition = name, "{}", messages::DUPLICATE);
            return Err(Error::duplicate(name));
        }

        let mut fields = FieldMap::new();
        if let Some(builder) = builder {
            builder(&mut fields);
        }

        let definition = Definition::new::<R>(DefinitionName::from(name), fields);
        debug!(
            definition = %definition.name(),
            target_type = definition.target_name(),
            fields = definition.fields().len(),
            "{}",
            messages::DEFINED
        );
        self.definitions
            .insert(definition.name().as_str().to_string(), definition);
        Ok(())
    }

    /// Returns the definition registered under `name`
    ///
    /// The error for a missing name lists every registered name.
    pub fn lookup(&self, name: &str) -> Result<&Definition> {
        self.definitions.get(name).ok_or_else(|| {
            warn!(definition = name, "{}", messages::UNDEFINED);
            Error::undefined(name, self.names())
        })
    }

    pub fn contains(&self, name: &str) -> bool {
        self.definitions.contains_key(name)
    }

    /// Registered names in sorted order
    pub fn names(&self) -> Vec<&str> {
        self.definitions.keys().map(String::as_str).collect()
    }

    pub fn len(&self) -> usize {
        self.definitions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.definitions.is_empty()
    }

    /// Builds a fresh `R` from the definition registered under `name`
    pub fn build<R: Record>(&self, name: &str) -> Result<R> {
        engine::build(self.lookup(name)?)
    }

    /// Builds a fresh `R`, letting `overrides` replace base entries for this
    /// call only
    pub fn build_with_overrides<R: Record>(&self, name: &str, overrides: &FieldMap) -> Result<R> {
        engine::build_with_overrides(self.lookup(name)?, overrides)
    }

    /// Builds `count` records one after another
    ///
    /// Each build resolves its providers independently, so deferred callbacks
    /// run `count` times and sequences advance by `count`.
    pub fn build_batch<R: Record>(&self, name: &str, count: usize) -> Result<Vec<R>> {
        let definition = self.lookup(name)?;
        (0..count).map(|_| engine::build(definition)).collect()
    }
}
