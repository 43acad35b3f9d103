//! Record types and their field schemas
//!
//! Instead of runtime reflection, every buildable type describes its fields
//! once through a [`Schema`]: a table from field name to a typed setter.
//! Fields that exist but must not be written from outside are declared
//! private so the engine can tell them apart from unknown names.

use std::any::{type_name, Any};
use std::collections::HashMap;
use std::fmt;

use super::value::Value;
use crate::error::{Error, Result};

/// A type that fixtures can be built for
///
/// `Default` supplies the zero value every build starts from; fields absent
/// from the mapping keep it.
pub trait Record: Default + Send + 'static {
    fn schema() -> Schema<Self>;
}

type Setter<R> = dyn Fn(&mut R, Value) -> std::result::Result<(), Value> + Send + Sync;

enum Slot<R> {
    Writable {
        setter: Box<Setter<R>>,
        type_name: &'static str,
    },
    Private,
}

/// Field table for a record type
pub struct Schema<R> {
    target: String,
    slots: HashMap<String, Slot<R>>,
}

impl<R: 'static> Schema<R> {
    pub fn new() -> Self {
        Self {
            target: short_type_name::<R>(),
            slots: HashMap::new(),
        }
    }

    /// Overrides the type name used in error messages
    pub fn named(mut self, target: impl Into<String>) -> Self {
        self.target = target.into();
        self
    }

    /// Declares an assignable field holding values of type `V`
    ///
    /// The setter may write anywhere inside the record, which is how fields of
    /// an embedded struct are exposed under their own names.
    pub fn field<V, F>(mut self, name: impl Into<String>, setter: F) -> Self
    where
        V: Any,
        F: Fn(&mut R, V) + Send + Sync + 'static,
    {
        let setter = move |record: &mut R, value: Value| -> std::result::Result<(), Value> {
            let value = value.downcast::<V>()?;
            setter(record, value);
            Ok(())
        };
        self.slots.insert(
            name.into(),
            Slot::Writable {
                setter: Box::new(setter),
                type_name: type_name::<V>(),
            },
        );
        self
    }

    /// Declares a field that exists but cannot be assigned by fixtures
    pub fn private(mut self, name: impl Into<String>) -> Self {
        self.slots.insert(name.into(), Slot::Private);
        self
    }

    pub fn target(&self) -> &str {
        &self.target
    }

    pub fn has_field(&self, name: &str) -> bool {
        self.slots.contains_key(name)
    }

    /// Checks that `field` exists and is writable
    pub fn check(&self, field: &str) -> Result<()> {
        match self.slots.get(field) {
            None => Err(Error::unknown_field(field, &self.target)),
            Some(Slot::Private) => Err(Error::unassignable_field(field, &self.target)),
            Some(Slot::Writable { .. }) => Ok(()),
        }
    }

    /// Writes a resolved value into `field` of `record`
    pub fn assign(&self, record: &mut R, field: &str, value: Value) -> Result<()> {
        match self.slots.get(field) {
            None => Err(Error::unknown_field(field, &self.target)),
            Some(Slot::Private) => Err(Error::unassignable_field(field, &self.target)),
            Some(Slot::Writable { setter, type_name }) => {
                setter(record, value).map_err(|rejected| Error::TypeMismatch {
                    field: field.to_string(),
                    target: self.target.clone(),
                    expected: *type_name,
                    actual: rejected.type_name(),
                })
            }
        }
    }
}

impl<R: 'static> Default for Schema<R> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R> fmt::Debug for Schema<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut fields: Vec<(&str, &str)> = self
            .slots
            .iter()
            .map(|(name, slot)| match slot {
                Slot::Writable { type_name, .. } => (name.as_str(), *type_name),
                Slot::Private => (name.as_str(), "<private>"),
            })
            .collect();
        fields.sort_unstable();
        f.debug_struct("Schema")
            .field("target", &self.target)
            .field("fields", &fields)
            .finish()
    }
}

/// Type name without module path or generic arguments
fn short_type_name<T>() -> String {
    let full = type_name::<T>();
    let base = full.split('<').next().unwrap_or(full);
    base.rsplit("::").next().unwrap_or(base).to_string()
}
