//! Type-erased field values
//!
//! A [`Value`] is what a provider hands to a field setter. It carries the
//! name of the concrete type so mismatches can be reported without the
//! setter knowing anything about the provider.

use std::any::{type_name, Any};
use std::fmt;

/// A concrete value produced while resolving a field
pub struct Value {
    inner: Box<dyn Any + Send>,
    type_name: &'static str,
}

impl Value {
    pub fn new<V: Any + Send>(value: V) -> Self {
        Self {
            inner: Box::new(value),
            type_name: type_name::<V>(),
        }
    }

    /// Fully qualified name of the wrapped type
    pub fn type_name(&self) -> &'static str {
        self.type_name
    }

    pub fn is<V: Any>(&self) -> bool {
        self.inner.is::<V>()
    }

    /// Takes the wrapped value out, handing the value back untouched when the
    /// requested type is wrong.
    pub fn downcast<V: Any>(self) -> Result<V, Self> {
        let type_name = self.type_name;
        self.inner
            .downcast::<V>()
            .map(|boxed| *boxed)
            .map_err(|inner| Self { inner, type_name })
    }
}

impl fmt::Debug for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Value").field(&self.type_name).finish()
    }
}
