//! Structural descriptors: the capability the engine uses to discover,
//! read and write the fields of a record without knowing its concrete type.

use std::{
    any::{Any, TypeId},
    fmt,
    hash::{Hash, Hasher},
    sync::Arc,
};

use crate::errors::FieldError;

pub mod field_type;
pub mod macros;
pub mod value;

pub use field_type::FieldType;
pub use value::{FieldValue, Value};

/// Stable identity of a Rust type.
///
/// Equality and hashing only look at the `TypeId`; the name is carried for
/// diagnostics.
#[derive(Clone, Copy)]
pub struct TypeKey {
    id: TypeId,
    name: &'static str,
}

impl TypeKey {
    pub fn of<T: Any + ?Sized>() -> Self {
        Self {
            id: TypeId::of::<T>(),
            name: std::any::type_name::<T>(),
        }
    }

    /// Fully qualified type name, as reported by `std::any::type_name`.
    pub fn full_name(&self) -> &'static str {
        self.name
    }

    /// Type name with every module path stripped, e.g. `Vec<PersonDto>`.
    pub fn short_name(&self) -> String {
        strip_paths(self.name)
    }
}

impl PartialEq for TypeKey {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for TypeKey {}

impl Hash for TypeKey {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl fmt::Debug for TypeKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "TypeKey({})", self.name)
    }
}

impl fmt::Display for TypeKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.short_name())
    }
}

fn strip_paths(full: &str) -> String {
    let mut out = String::with_capacity(full.len());
    let mut segment = String::new();

    for c in full.chars() {
        if c.is_alphanumeric() || c == '_' || c == ':' {
            segment.push(c);
        } else {
            out.push_str(last_segment(&segment));
            segment.clear();
            out.push(c);
        }
    }
    out.push_str(last_segment(&segment));
    out
}

fn last_segment(path: &str) -> &str {
    path.rsplit("::").next().unwrap_or(path)
}

/// Whether a field can be read, written, or both.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
pub enum Access {
    ReadWrite,
    ReadOnly,
    WriteOnly,
}

impl Access {
    pub fn can_read(self) -> bool {
        matches!(self, Access::ReadWrite | Access::ReadOnly)
    }

    pub fn can_write(self) -> bool {
        matches!(self, Access::ReadWrite | Access::WriteOnly)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct FieldDescriptor {
    pub name: &'static str,
    pub ty: FieldType,
    pub access: Access,
}

/// Ordered description of the public fields of one record type.
#[derive(Debug, Clone, PartialEq)]
pub struct Shape {
    key: TypeKey,
    fields: Vec<FieldDescriptor>,
}

impl Shape {
    pub fn of<T: Any>() -> Self {
        Self {
            key: TypeKey::of::<T>(),
            fields: Vec::new(),
        }
    }

    pub fn field(mut self, name: &'static str, ty: FieldType, access: Access) -> Self {
        self.fields.push(FieldDescriptor { name, ty, access });
        self
    }

    pub fn key(&self) -> TypeKey {
        self.key
    }

    pub fn fields(&self) -> &[FieldDescriptor] {
        &self.fields
    }

    /// Fields that can be read, in declaration order.
    pub fn readable(&self) -> impl Iterator<Item = &FieldDescriptor> {
        self.fields.iter().filter(|f| f.access.can_read())
    }

    /// Fields that can be written, in declaration order.
    pub fn writable(&self) -> impl Iterator<Item = &FieldDescriptor> {
        self.fields.iter().filter(|f| f.access.can_write())
    }
}

/// Object-safe view of a record: runtime identity plus by-name field access.
pub trait Record: Any + Send + Sync + fmt::Debug {
    fn type_key(&self) -> TypeKey;

    /// Reads a field. `None` when the record has no readable field of that name.
    fn get_field(&self, name: &str) -> Option<Value>;

    fn set_field(&mut self, name: &str, value: Value) -> Result<(), FieldError>;

    fn as_record(&self) -> &dyn Record;

    fn as_any(&self) -> &dyn Any;

    fn as_any_mut(&mut self) -> &mut dyn Any;

    fn into_any(self: Box<Self>) -> Box<dyn Any>;

    fn into_any_arc(self: Arc<Self>) -> Arc<dyn Any + Send + Sync>;
}

/// A concrete record type that can describe its own fields.
pub trait Structure: Record + Sized {
    fn shape() -> Shape;
}
