//! Log message constants
//!
//! Centralizes the messages emitted through `tracing` so wording stays
//! consistent between the registry and the build engine.

/// Registration messages
pub mod registry {
    pub const DEFINED: &str = "Definition registered";
    pub const DUPLICATE: &str = "Rejected duplicate definition";
    pub const UNDEFINED: &str = "Lookup of undefined definition";
}

/// Build messages
pub mod build {
    pub const STARTED: &str = "Building fixture";
    pub const OVERRIDES_MERGED: &str = "Merged overrides onto base mapping";
    pub const FIELD_ASSIGNED: &str = "Field assigned";
    pub const COMPLETED: &str = "Fixture built";
    pub const FAILED: &str = "Fixture build failed";
}

/// Telemetry setup messages
pub mod telemetry {
    pub const INVALID_FILTER: &str = "Invalid log filter, falling back to info";
    pub const ALREADY_INSTALLED: &str = "A global tracing subscriber is already installed";
}
