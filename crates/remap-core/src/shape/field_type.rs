use std::fmt;

use super::{TypeKey, Value};

/// Declared type of a record field.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum FieldType {
    Bool,
    Char,
    I32,
    I64,
    U32,
    U64,
    F32,
    F64,
    String,
    Optional(Box<FieldType>),
    List(Box<FieldType>),
    Record(TypeKey),
    /// Open type: accepts any value.
    Any,
}

impl FieldType {
    pub fn optional(inner: FieldType) -> Self {
        FieldType::Optional(Box::new(inner))
    }

    pub fn list(element: FieldType) -> Self {
        FieldType::List(Box::new(element))
    }

    /// The wrapped type for `Optional`, otherwise `self`.
    pub fn without_optional(&self) -> &FieldType {
        match self {
            FieldType::Optional(inner) => inner,
            other => other,
        }
    }

    /// Static assignability: can a field of this type receive the value of a
    /// field declared as `source` without conversion?
    pub fn accepts(&self, source: &FieldType) -> bool {
        if self == source {
            return true;
        }
        match (self, source) {
            (FieldType::Any, _) => true,
            (FieldType::Optional(inner), FieldType::Optional(other)) => inner.accepts(other),
            (FieldType::Optional(inner), other) => inner.accepts(other),
            (FieldType::List(element), FieldType::List(other)) => element.accepts(other),
            _ => false,
        }
    }

    /// Dynamic assignability: can this concrete value be stored as-is?
    pub fn admits(&self, value: &Value) -> bool {
        match (self, value) {
            (FieldType::Any, _) => true,
            (FieldType::Optional(_), Value::Null) => true,
            (FieldType::Optional(inner), other) => inner.admits(other),
            (FieldType::Bool, Value::Bool(_))
            | (FieldType::Char, Value::Char(_))
            | (FieldType::I32, Value::I32(_))
            | (FieldType::I64, Value::I64(_))
            | (FieldType::U32, Value::U32(_))
            | (FieldType::U64, Value::U64(_))
            | (FieldType::F32, Value::F32(_))
            | (FieldType::F64, Value::F64(_))
            | (FieldType::String, Value::String(_)) => true,
            (FieldType::List(element), Value::List(items)) => {
                items.iter().all(|item| element.admits(item))
            }
            (FieldType::Record(key), Value::Record(record)) => record.type_key() == *key,
            _ => false,
        }
    }
}

impl fmt::Display for FieldType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldType::Bool => f.write_str("bool"),
            FieldType::Char => f.write_str("char"),
            FieldType::I32 => f.write_str("i32"),
            FieldType::I64 => f.write_str("i64"),
            FieldType::U32 => f.write_str("u32"),
            FieldType::U64 => f.write_str("u64"),
            FieldType::F32 => f.write_str("f32"),
            FieldType::F64 => f.write_str("f64"),
            FieldType::String => f.write_str("String"),
            FieldType::Optional(inner) => write!(f, "Option<{inner}>"),
            FieldType::List(element) => write!(f, "Vec<{element}>"),
            FieldType::Record(key) => write!(f, "{key}"),
            FieldType::Any => f.write_str("Any"),
        }
    }
}
