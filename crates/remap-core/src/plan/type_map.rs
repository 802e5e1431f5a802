use std::collections::{HashMap, HashSet};

use serde::Serialize;
use tracing::{debug, trace};

use super::{
    step::{FieldAssignmentStep, StepDescription},
    TypePair,
};
use crate::{
    config::{resolve_selector, Constructor, MappingDeclaration},
    errors::{ConfigError, MapError},
    shape::{FieldDescriptor, Record},
};

/// Compiled, immutable plan for exactly one `TypePair`.
#[derive(Debug, Clone)]
pub struct TypeMap {
    pair: TypePair,
    steps: Vec<FieldAssignmentStep>,
    construct: Constructor,
}

impl TypeMap {
    /// Compiles one declaration.
    ///
    /// Custom steps come first, in declaration order, followed by auto steps
    /// in source field order for every field no custom rule covers.
    pub fn compile(declaration: &MappingDeclaration) -> Result<Self, ConfigError> {
        for selector in &declaration.rejected_selectors {
            resolve_selector(selector)?;
        }

        let pair = declaration.type_pair();
        let writable: HashMap<&str, &FieldDescriptor> = declaration
            .destination
            .writable()
            .map(|field| (field.name, field))
            .collect();

        let mut steps = Vec::with_capacity(writable.len());
        for rule in declaration.rules() {
            let field = writable
                .get(rule.destination_field())
                .ok_or_else(|| {
                    ConfigError::unknown_destination_field(rule.destination_field(), pair.destination)
                })?;
            steps.push(FieldAssignmentStep::Custom {
                rule: rule.clone(),
                destination: (*field).clone(),
            });
        }

        let covered: HashSet<&str> = steps.iter().map(|step| step.destination_field()).collect();
        let custom_count = steps.len();

        let mut auto_steps = Vec::new();
        for source_field in declaration.source.readable() {
            if covered.contains(source_field.name) {
                continue;
            }
            let Some(destination_field) = writable.get(source_field.name) else {
                trace!(%pair, field = source_field.name, "no destination field with this name");
                continue;
            };
            if !destination_field.ty.accepts(&source_field.ty) {
                trace!(
                    %pair,
                    field = source_field.name,
                    source_type = %source_field.ty,
                    destination_type = %destination_field.ty,
                    "skipping incompatible field"
                );
                continue;
            }
            auto_steps.push(FieldAssignmentStep::Auto {
                source: source_field.clone(),
                destination: (*destination_field).clone(),
            });
        }
        steps.extend(auto_steps);

        debug!(
            %pair,
            custom = custom_count,
            auto = steps.len() - custom_count,
            "compiled type map"
        );

        Ok(Self {
            pair,
            steps,
            construct: declaration.construct,
        })
    }

    pub fn pair(&self) -> TypePair {
        self.pair
    }

    pub fn steps(&self) -> &[FieldAssignmentStep] {
        &self.steps
    }

    /// Creates a fresh destination instance through its no-argument constructor.
    pub fn instantiate(&self) -> Box<dyn Record> {
        (self.construct)()
    }

    /// Runs every step against `(source, destination)`.
    pub fn apply(&self, source: &dyn Record, destination: &mut dyn Record) -> Result<(), MapError> {
        for step in &self.steps {
            step.apply(source, destination)?;
        }
        Ok(())
    }

    pub fn describe(&self) -> PlanDescription {
        PlanDescription {
            source: self.pair.source.to_string(),
            destination: self.pair.destination.to_string(),
            steps: self.steps.iter().map(FieldAssignmentStep::describe).collect(),
        }
    }
}

/// Serialisable summary of a compiled plan.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlanDescription {
    pub source: String,
    pub destination: String,
    pub steps: Vec<StepDescription>,
}
