use thiserror::Error;

use crate::shape::TypeKey;

/// Errors raised while profiles are compiled into a registry.
///
/// Every variant aborts construction of the whole `MapperConfiguration`.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Invalid field selector '{selector}': {reason}")]
    InvalidSelector { selector: String, reason: String },

    #[error("Destination type {destination} has no writable field '{field}'")]
    UnknownDestinationField { field: String, destination: TypeKey },

    #[error("Invalid profile registration '{name}': {reason}")]
    InvalidProfile { name: String, reason: String },
}

impl ConfigError {
    pub fn invalid_selector(selector: &str, reason: &str) -> Self {
        Self::InvalidSelector {
            selector: selector.to_string(),
            reason: reason.to_string(),
        }
    }

    pub fn unknown_destination_field(field: &str, destination: TypeKey) -> Self {
        Self::UnknownDestinationField {
            field: field.to_string(),
            destination,
        }
    }

    pub fn invalid_profile(name: &str, reason: &str) -> Self {
        Self::InvalidProfile {
            name: name.to_string(),
            reason: reason.to_string(),
        }
    }
}

/// Errors raised by a single mapping call.
#[derive(Error, Debug)]
pub enum MapError {
    #[error(
        "Missing mapping configuration from {source_type} to {destination}. \
         Ensure you have configured this mapping using \
         create_map::<{source_type}, {destination}>() in a Profile."
    )]
    MappingNotFound {
        source_type: TypeKey,
        destination: TypeKey,
    },

    #[error("Destination must not be null when mapping into an existing instance")]
    NullDestination,

    #[error("Cannot convert value of type {value_type} to {destination}")]
    Conversion {
        value_type: String,
        destination: String,
    },

    #[error("Cannot assign field '{field}' on {destination}: {source}")]
    FieldAssignment {
        destination: TypeKey,
        field: String,
        #[source]
        source: FieldError,
    },

    #[error("Constructor registered for {destination} produced a different type")]
    Construction { destination: TypeKey },

    #[error("Cannot map a value of type {value_type} into {destination}")]
    UnsupportedTarget {
        value_type: String,
        destination: String,
    },
}

impl MapError {
    pub fn mapping_not_found(source_type: TypeKey, destination: TypeKey) -> Self {
        Self::MappingNotFound {
            source_type,
            destination,
        }
    }

    pub fn conversion(value_type: &str, destination: &str) -> Self {
        Self::Conversion {
            value_type: value_type.to_string(),
            destination: destination.to_string(),
        }
    }
}

/// Errors reported by a `Record` when reading or writing one of its fields.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum FieldError {
    #[error("no field named '{field}'")]
    UnknownField { field: String },

    #[error("field '{field}' is read-only")]
    ReadOnly { field: String },

    #[error("expected {expected}, got {actual}")]
    TypeMismatch { expected: String, actual: String },

    #[error("null is not a valid {expected}")]
    NullValue { expected: String },
}

impl FieldError {
    pub fn unknown_field(field: &str) -> Self {
        Self::UnknownField {
            field: field.to_string(),
        }
    }

    pub fn read_only(field: &str) -> Self {
        Self::ReadOnly {
            field: field.to_string(),
        }
    }

    pub fn type_mismatch(expected: &str, actual: &str) -> Self {
        Self::TypeMismatch {
            expected: expected.to_string(),
            actual: actual.to_string(),
        }
    }
}
