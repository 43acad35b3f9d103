//! Value providers
//!
//! A field mapping entry is either a literal, a deferred callback or a
//! sequence. Literals are cloned into every build. Deferred callbacks and
//! sequences run once per build, at the moment their field is assigned.

use std::any::{type_name, Any};
use std::fmt;
use std::sync::Arc;

use parking_lot::Mutex;

use super::value::Value;

type Produce = dyn Fn() -> Value + Send + Sync;
type Sequencer = dyn Fn(u64) -> Value + Send + Sync;

/// Produces the value for one field mapping entry
///
/// Providers are not `Clone`; copying a [`FieldMap`](super::fields::FieldMap)
/// shares the underlying state, so a sequence keeps counting across copies.
pub enum Provider {
    Literal {
        make: Arc<Produce>,
        type_name: &'static str,
    },
    Deferred(Arc<Produce>),
    Sequence(Arc<Sequence>),
}

impl Provider {
    /// Produces the concrete value for one build
    pub fn resolve(&self) -> Value {
        match self {
            Provider::Literal { make, .. } => make(),
            Provider::Deferred(callback) => callback(),
            Provider::Sequence(sequence) => sequence.next(),
        }
    }

    pub fn is_deferred(&self) -> bool {
        !matches!(self, Provider::Literal { .. })
    }

    /// Returns a copy of a literal's value; deferred providers yield `None`
    /// because reading them would run the callback.
    pub fn literal_value<V: Any>(&self) -> Option<V> {
        match self {
            Provider::Literal { make, .. } => make().downcast::<V>().ok(),
            Provider::Deferred(_) | Provider::Sequence(_) => None,
        }
    }

    pub(crate) fn share(&self) -> Self {
        match self {
            Provider::Literal { make, type_name } => Provider::Literal {
                make: Arc::clone(make),
                type_name: *type_name,
            },
            Provider::Deferred(callback) => Provider::Deferred(Arc::clone(callback)),
            Provider::Sequence(sequence) => Provider::Sequence(Arc::clone(sequence)),
        }
    }
}

impl fmt::Debug for Provider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Provider::Literal { type_name, .. } => f.debug_tuple("Literal").field(type_name).finish(),
            Provider::Deferred(_) => f.write_str("Deferred"),
            Provider::Sequence(_) => f.write_str("Sequence"),
        }
    }
}

/// Counter state owned by a single sequence provider
///
/// The counter starts at zero and only moves forward. The lock is held while
/// the sequencer runs so concurrent builds never observe the same count.
pub struct Sequence {
    counter: Mutex<u64>,
    sequencer: Box<Sequencer>,
}

impl Sequence {
    fn next(&self) -> Value {
        let mut counter = self.counter.lock();
        let value = (self.sequencer)(*counter);
        *counter += 1;
        value
    }
}

/// Converts something into a [`Provider`] when stored in a field mapping
///
/// Any `Clone + Send + Sync` value becomes a literal; providers pass through
/// unchanged. For other values, use [`deferred`].
pub trait IntoProvider {
    fn into_provider(self) -> Provider;
}

impl<V> IntoProvider for V
where
    V: Clone + Send + Sync + 'static,
{
    fn into_provider(self) -> Provider {
        literal(self)
    }
}

impl IntoProvider for Provider {
    fn into_provider(self) -> Provider {
        self
    }
}

/// A literal handed to every build as a fresh clone
///
/// Literals must be `Clone + Send + Sync`. Values that are not, such as a
/// record type without a `Clone` impl, can still be supplied by wrapping a
/// constructor in [`deferred`].
pub fn literal<V>(value: V) -> Provider
where
    V: Clone + Send + Sync + 'static,
{
    Provider::Literal {
        make: Arc::new(move || Value::new(value.clone())),
        type_name: type_name::<V>(),
    }
}

/// A callback invoked once per build when its field is assigned
pub fn deferred<V, F>(callback: F) -> Provider
where
    V: Send + 'static,
    F: Fn() -> V + Send + Sync + 'static,
{
    Provider::Deferred(Arc::new(move || Value::new(callback())))
}

/// A callback fed by a private counter that starts at zero and advances on
/// every build that resolves it
pub fn sequenced_by<V, F>(sequencer: F) -> Provider
where
    V: Send + 'static,
    F: Fn(u64) -> V + Send + Sync + 'static,
{
    Provider::Sequence(Arc::new(Sequence {
        counter: Mutex::new(0),
        sequencer: Box::new(move |n| Value::new(sequencer(n))),
    }))
}

/// Sequencer that yields the count itself
pub fn identity_sequencer(n: u64) -> u64 {
    n
}
