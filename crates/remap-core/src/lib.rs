//! # Remap Core
//!
//! Convention-based object mapping:
//! - Structural descriptors for record types (`record!`, [`Record`], [`Structure`])
//! - Profiles declaring type pairs and per-field rules
//! - A plan compiler turning declarations into immutable [`TypeMap`]s
//! - A conversion policy for values produced by custom rules
//! - A shared registry and a lightweight [`Mapper`] runtime
//!
//! ```
//! use remap_core::{record, MapperConfiguration, Profile};
//!
//! record! {
//!     #[derive(Debug, Default)]
//!     pub struct Person { pub name: String, pub age: i32 }
//! }
//! record! {
//!     #[derive(Debug, Default)]
//!     pub struct PersonDto { pub name: String, pub age: i32 }
//! }
//!
//! let mut profile = Profile::new("people");
//! profile.create_map::<Person, PersonDto>();
//! let mapper = MapperConfiguration::new([profile]).unwrap().create_mapper();
//!
//! let person = Person { name: "Ada".into(), age: 36 };
//! let dto: PersonDto = mapper.map(Some(&person)).unwrap().unwrap();
//! assert_eq!(dto.name, "Ada");
//! ```

#![warn(clippy::all)]

pub mod config;
pub mod errors;
pub mod mapper;
pub mod plan;
pub mod registry;
pub mod shape;

// Re-export commonly used types
pub use config::{FieldRule, MappingExpression, MemberConfiguration, Profile, ProfileRegistration};
pub use errors::{ConfigError, FieldError, MapError};
pub use mapper::Mapper;
pub use plan::{PlanDescription, StepDescription, StepKind, TypeMap, TypePair};
pub use registry::{ConfigurationBuilder, MapperConfiguration};
pub use shape::{Access, FieldDescriptor, FieldType, FieldValue, Record, Shape, Structure, TypeKey, Value};

#[doc(hidden)]
pub use inventory;

/// Remap version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Initialize tracing for remap components at `info` level.
pub fn init_tracing() {
    init_tracing_with("remap_core=info");
}

/// Initialize tracing with an explicit default directive, e.g. `remap_core=debug`.
///
/// `RUST_LOG` still takes part in filtering. Installing a second global
/// subscriber is a no-op.
pub fn init_tracing_with(directive: &str) {
    let mut filter = tracing_subscriber::EnvFilter::from_default_env();
    if let Ok(directive) = directive.parse() {
        filter = filter.add_directive(directive);
    }
    let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();
}
