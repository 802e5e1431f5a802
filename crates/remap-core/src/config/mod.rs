//! Mapping configuration: profiles, per-field rules and profile discovery.

pub mod profile;
pub mod registration;
pub mod rule;
pub mod selector;

pub use profile::{Constructor, MappingDeclaration, MappingExpression, MemberConfiguration, Profile};
pub use registration::ProfileRegistration;
pub use rule::FieldRule;
pub use selector::resolve_selector;
