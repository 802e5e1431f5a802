use serde::Serialize;
use tracing::trace;

use super::conversion::convert;
use crate::{
    config::FieldRule,
    errors::MapError,
    shape::{FieldDescriptor, Record},
};

/// One executable field assignment inside a `TypeMap`.
#[derive(Debug, Clone)]
pub enum FieldAssignmentStep {
    /// Resolver-driven assignment, with conversion to the field's type.
    Custom {
        rule: FieldRule,
        destination: FieldDescriptor,
    },
    /// Structural copy between two same-named, assignable fields.
    Auto {
        source: FieldDescriptor,
        destination: FieldDescriptor,
    },
}

impl FieldAssignmentStep {
    pub fn destination_field(&self) -> &'static str {
        match self {
            FieldAssignmentStep::Custom { destination, .. } => destination.name,
            FieldAssignmentStep::Auto { destination, .. } => destination.name,
        }
    }

    pub fn is_custom(&self) -> bool {
        matches!(self, FieldAssignmentStep::Custom { .. })
    }

    pub fn apply(&self, source: &dyn Record, destination: &mut dyn Record) -> Result<(), MapError> {
        let (field, value) = match self {
            FieldAssignmentStep::Custom {
                rule,
                destination: field,
            } => {
                let Some(value) = rule.resolve(source) else {
                    trace!(field = field.name, source = %source.type_key(), "resolver declined source");
                    return Ok(());
                };
                (field.name, convert(value, &field.ty)?)
            }
            FieldAssignmentStep::Auto {
                source: from,
                destination: field,
            } => match source.get_field(from.name) {
                Some(value) => (field.name, value),
                None => return Ok(()),
            },
        };

        destination
            .set_field(field, value)
            .map_err(|source| MapError::FieldAssignment {
                destination: destination.type_key(),
                field: field.to_string(),
                source,
            })
    }

    pub fn describe(&self) -> StepDescription {
        match self {
            FieldAssignmentStep::Custom { destination, .. } => StepDescription {
                kind: StepKind::Custom,
                destination_field: destination.name.to_string(),
                source_field: None,
                field_type: destination.ty.to_string(),
            },
            FieldAssignmentStep::Auto {
                source,
                destination,
            } => StepDescription {
                kind: StepKind::Auto,
                destination_field: destination.name.to_string(),
                source_field: Some(source.name.to_string()),
                field_type: destination.ty.to_string(),
            },
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum StepKind {
    Custom,
    Auto,
}

/// Serialisable summary of a step, for diagnostics.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StepDescription {
    pub kind: StepKind,
    pub destination_field: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source_field: Option<String>,
    pub field_type: String,
}
