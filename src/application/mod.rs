//! Registry and build orchestration
//!
//! The registry stores definitions; the engine turns a definition and its
//! overrides into a populated record.

pub mod engine;
pub mod registry;

pub use registry::Registry;
