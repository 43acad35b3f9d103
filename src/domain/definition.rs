//! Definitions: a named record type paired with its base field mapping

use std::any::{type_name, Any, TypeId};
use std::fmt;

use super::fields::FieldMap;
use super::record::{Record, Schema};
use super::types::DefinitionName;
use crate::error::{Error, Result};

/// A registered blueprint
///
/// Created once by the registry and never changed afterwards. The schema is
/// stored type-erased so definitions for different record types can share one
/// table.
pub struct Definition {
    name: DefinitionName,
    target: TypeId,
    target_name: String,
    fields: FieldMap,
    schema: Box<dyn Any + Send + Sync>,
}

impl Definition {
    pub(crate) fn new<R: Record>(name: DefinitionName, fields: FieldMap) -> Self {
        let schema = R::schema();
        Self {
            name,
            target: TypeId::of::<R>(),
            target_name: schema.target().to_string(),
            fields,
            schema: Box::new(schema),
        }
    }

    pub fn name(&self) -> &DefinitionName {
        &self.name
    }

    /// Name of the record type this definition builds
    pub fn target_name(&self) -> &str {
        &self.target_name
    }

    pub fn builds<R: 'static>(&self) -> bool {
        self.target == TypeId::of::<R>()
    }

    /// The base mapping every build starts from
    pub fn fields(&self) -> &FieldMap {
        &self.fields
    }

    /// Schema of the target type, provided `R` is that type
    pub fn schema<R: Record>(&self) -> Result<&Schema<R>> {
        self.schema
            .downcast_ref::<Schema<R>>()
            .ok_or_else(|| Error::TargetMismatch {
                name: self.name.to_string(),
                expected: type_name::<R>(),
                actual: self.target_name.clone(),
            })
    }
}

impl fmt::Debug for Definition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Definition")
            .field("name", &self.name.as_str())
            .field("target", &self.target_name)
            .field("fields", &self.fields)
            .finish()
    }
}
