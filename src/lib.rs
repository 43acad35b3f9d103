//! Fixture Forge - a test-fixture factory registry
//!
//! Register named definitions that describe how to populate a record type,
//! then build fully populated instances on demand, optionally overriding
//! individual fields per call.
//!
//! ```
//! use fixture_forge::{identity_sequencer, sequenced_by, FieldMap, Record, Registry, Schema};
//!
//! #[derive(Debug, Default)]
//! struct Person {
//!     id: u64,
//!     first_name: String,
//!     admin: bool,
//! }
//!
//! impl Record for Person {
//!     fn schema() -> Schema<Self> {
//!         Schema::new()
//!             .field("Id", |p: &mut Person, v: u64| p.id = v)
//!             .field("FirstName", |p: &mut Person, v: String| p.first_name = v)
//!             .field("Admin", |p: &mut Person, v: bool| p.admin = v)
//!     }
//! }
//!
//! let mut registry = Registry::new();
//! registry
//!     .define::<Person, _>("person", |f| {
//!         f.set("Id", sequenced_by(identity_sequencer))
//!             .set("FirstName", "Jane".to_string())
//!             .set("Admin", false);
//!     })
//!     .unwrap();
//!
//! let jane: Person = registry.build("person").unwrap();
//! let admin: Person = registry
//!     .build_with_overrides("person", &FieldMap::new().with("Admin", true))
//!     .unwrap();
//! assert_eq!((jane.id, admin.id), (0, 1));
//! assert!(admin.admin);
//! ```

pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;

pub use application::Registry;
pub use config::Settings;
pub use domain::{
    deferred, identity_sequencer, literal, sequenced_by, Definition, DefinitionName, FieldMap,
    IntoProvider, Provider, Record, Schema, Value,
};
pub use error::{Error, Result};
