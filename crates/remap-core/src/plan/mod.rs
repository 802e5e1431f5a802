//! Plan compilation: turning a mapping declaration into an ordered list of
//! executable field assignments.

pub mod conversion;
pub mod step;
pub mod type_map;
pub mod type_pair;

pub use conversion::convert;
pub use step::{FieldAssignmentStep, StepDescription, StepKind};
pub use type_map::{PlanDescription, TypeMap};
pub use type_pair::TypePair;
