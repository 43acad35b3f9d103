//! Infrastructure for Fixture Forge
//!
//! Logging setup and the message constants shared by the registry and the
//! build engine.

pub mod log_messages;
pub mod telemetry;
