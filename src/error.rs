use thiserror::Error;

/// Fixture Forge error types
///
/// Every variant describes a usage mistake in a definition or a build call.
/// None of them are transient, so callers normally fail the surrounding test.
#[derive(Error, Debug)]
pub enum Error {
    #[error("'{name}' has already been defined")]
    DuplicateDefinition { name: String },

    #[error("'{name}' is undefined. Defined factories: {}", .defined.join(", "))]
    UndefinedDefinition { name: String, defined: Vec<String> },

    #[error("'{field}' is not a valid field on {target}")]
    UnknownField { field: String, target: String },

    #[error("Field '{field}' on {target} is private; its value cannot be set")]
    UnassignableField { field: String, target: String },

    #[error("Field '{field}' on {target} expects {expected}, got {actual}")]
    TypeMismatch {
        field: String,
        target: String,
        expected: &'static str,
        actual: &'static str,
    },

    #[error("'{name}' builds {actual}, not {expected}")]
    TargetMismatch {
        name: String,
        expected: &'static str,
        actual: String,
    },

    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),
}

impl Error {
    pub fn duplicate(name: impl Into<String>) -> Self {
        Self::DuplicateDefinition { name: name.into() }
    }

    pub fn undefined<'a>(name: impl Into<String>, defined: impl IntoIterator<Item = &'a str>) -> Self {
        Self::UndefinedDefinition {
            name: name.into(),
            defined: defined.into_iter().map(str::to_owned).collect(),
        }
    }

    pub fn unknown_field(field: impl Into<String>, target: impl Into<String>) -> Self {
        Self::UnknownField {
            field: field.into(),
            target: target.into(),
        }
    }

    pub fn unassignable_field(field: impl Into<String>, target: impl Into<String>) -> Self {
        Self::UnassignableField {
            field: field.into(),
            target: target.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
