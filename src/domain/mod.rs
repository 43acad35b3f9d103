//! Domain types for fixture definitions
//!
//! Values, providers, field mappings, record schemas and the definitions
//! that tie them together.

pub mod definition;
pub mod fields;
pub mod provider;
pub mod record;
pub mod types;
pub mod value;

pub use definition::*;
pub use fields::*;
pub use provider::*;
pub use record::*;
pub use types::*;
pub use value::*;
