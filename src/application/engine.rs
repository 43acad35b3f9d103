//! Instantiation engine
//!
//! Turns a definition plus optional overrides into a populated record. Every
//! mapping entry is checked against the schema before any provider runs, so a
//! misspelled or private field never advances a sequence. Providers are then
//! resolved one field at a time, right before the assignment.

use tracing::{debug, debug_span, trace, warn};

use crate::domain::{Definition, FieldMap, Record, Schema};
use crate::error::Result;
use crate::infrastructure::log_messages::build as messages;

/// Builds a record from the definition's base mapping
pub fn build<R: Record>(definition: &Definition) -> Result<R> {
    let _span = debug_span!("build", definition = %definition.name()).entered();
    let schema = definition.schema::<R>()?;
    finish(resolve_and_assign(schema, definition.fields()))
}

/// Builds a record from a copy of the base mapping with `overrides` on top
///
/// The definition's own mapping is left untouched.
pub fn build_with_overrides<R: Record>(definition: &Definition, overrides: &FieldMap) -> Result<R> {
    let _span = debug_span!("build", definition = %definition.name()).entered();
    let schema = definition.schema::<R>()?;
    let fields = definition.fields().merged_with(overrides);
    debug!(overrides = overrides.len(), "{}", messages::OVERRIDES_MERGED);
    finish(resolve_and_assign(schema, &fields))
}

/// Allocates a default record and assigns every entry of `fields`
///
/// Entry order is unspecified; no entry may rely on another being assigned
/// first.
pub fn resolve_and_assign<R: Record>(schema: &Schema<R>, fields: &FieldMap) -> Result<R> {
    debug!(target_type = schema.target(), fields = fields.len(), "{}", messages::STARTED);

    for name in fields.names() {
        schema.check(name)?;
    }

    let mut record = R::default();
    for (name, provider) in fields {
        let value = provider.resolve();
        trace!(field = %name, value_type = value.type_name(), "{}", messages::FIELD_ASSIGNED);
        schema.assign(&mut record, name, value)?;
    }
    Ok(record)
}

fn finish<R>(result: Result<R>) -> Result<R> {
    match &result {
        Ok(_) => debug!("{}", messages::COMPLETED),
        Err(error) => warn!(%error, "{}", messages::FAILED),
    }
    result
}
