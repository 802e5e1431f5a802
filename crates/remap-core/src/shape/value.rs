use std::{fmt, sync::Arc};

use super::{FieldType, Record, Structure, TypeKey};
use crate::errors::FieldError;

/// Dynamically typed field value.
///
/// Nested records travel by shared reference; mapping never descends into them.
#[derive(Debug, Clone, Default)]
pub enum Value {
    #[default]
    Null,
    Bool(bool),
    Char(char),
    I32(i32),
    I64(i64),
    U32(u32),
    U64(u64),
    F32(f32),
    F64(f64),
    String(String),
    List(Vec<Value>),
    Record(Arc<dyn Record>),
}

impl Value {
    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    /// Runtime type name, used in diagnostics.
    pub fn type_name(&self) -> String {
        match self {
            Value::Null => "null".to_string(),
            Value::Bool(_) => "bool".to_string(),
            Value::Char(_) => "char".to_string(),
            Value::I32(_) => "i32".to_string(),
            Value::I64(_) => "i64".to_string(),
            Value::U32(_) => "u32".to_string(),
            Value::U64(_) => "u64".to_string(),
            Value::F32(_) => "f32".to_string(),
            Value::F64(_) => "f64".to_string(),
            Value::String(_) => "String".to_string(),
            Value::List(_) => "Vec".to_string(),
            Value::Record(record) => record.type_key().to_string(),
        }
    }

    pub fn as_record(&self) -> Option<&dyn Record> {
        match self {
            Value::Record(record) => Some(record.as_ref()),
            _ => None,
        }
    }

    /// Downcasts a record value to its concrete type.
    pub fn downcast_record<T: Record>(&self) -> Option<&T> {
        self.as_record()
            .and_then(|record| record.as_any().downcast_ref::<T>())
    }
}

impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Value::Null, Value::Null) => true,
            (Value::Bool(a), Value::Bool(b)) => a == b,
            (Value::Char(a), Value::Char(b)) => a == b,
            (Value::I32(a), Value::I32(b)) => a == b,
            (Value::I64(a), Value::I64(b)) => a == b,
            (Value::U32(a), Value::U32(b)) => a == b,
            (Value::U64(a), Value::U64(b)) => a == b,
            (Value::F32(a), Value::F32(b)) => a == b,
            (Value::F64(a), Value::F64(b)) => a == b,
            (Value::String(a), Value::String(b)) => a == b,
            (Value::List(a), Value::List(b)) => a == b,
            // Records compare by identity
            (Value::Record(a), Value::Record(b)) => {
                std::ptr::addr_eq(Arc::as_ptr(a), Arc::as_ptr(b))
            }
            _ => false,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Null => f.write_str("null"),
            Value::Bool(b) => write!(f, "{b}"),
            Value::Char(c) => write!(f, "{c}"),
            Value::I32(n) => write!(f, "{n}"),
            Value::I64(n) => write!(f, "{n}"),
            Value::U32(n) => write!(f, "{n}"),
            Value::U64(n) => write!(f, "{n}"),
            Value::F32(n) => write!(f, "{n}"),
            Value::F64(n) => write!(f, "{n}"),
            Value::String(s) => f.write_str(s),
            Value::List(items) => {
                f.write_str("[")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{item}")?;
                }
                f.write_str("]")
            }
            Value::Record(record) => write!(f, "<{}>", record.type_key()),
        }
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::String(s.to_string())
    }
}

/// Conversion between a concrete field type and `Value`.
pub trait FieldValue: Sized + Send + Sync + 'static {
    fn field_type() -> FieldType;

    fn to_value(&self) -> Value;

    fn from_value(value: Value) -> Result<Self, FieldError>;
}

macro_rules! primitive_field_value {
    ($($ty:ty => $variant:ident),* $(,)?) => {
        $(
            impl FieldValue for $ty {
                fn field_type() -> FieldType {
                    FieldType::$variant
                }

                fn to_value(&self) -> Value {
                    Value::$variant(self.clone())
                }

                fn from_value(value: Value) -> Result<Self, FieldError> {
                    match value {
                        Value::$variant(v) => Ok(v),
                        Value::Null => Ok(<$ty>::default()),
                        other => Err(FieldError::type_mismatch(
                            &FieldType::$variant.to_string(),
                            &other.type_name(),
                        )),
                    }
                }
            }

            impl From<$ty> for Value {
                fn from(v: $ty) -> Self {
                    Value::$variant(v)
                }
            }
        )*
    };
}

primitive_field_value! {
    bool => Bool,
    char => Char,
    i32 => I32,
    i64 => I64,
    u32 => U32,
    u64 => U64,
    f32 => F32,
    f64 => F64,
    String => String,
}

impl<T: FieldValue> FieldValue for Option<T> {
    fn field_type() -> FieldType {
        FieldType::optional(T::field_type())
    }

    fn to_value(&self) -> Value {
        match self {
            Some(inner) => inner.to_value(),
            None => Value::Null,
        }
    }

    fn from_value(value: Value) -> Result<Self, FieldError> {
        match value {
            Value::Null => Ok(None),
            other => T::from_value(other).map(Some),
        }
    }
}

impl<T: FieldValue> FieldValue for Vec<T> {
    fn field_type() -> FieldType {
        FieldType::list(T::field_type())
    }

    fn to_value(&self) -> Value {
        Value::List(self.iter().map(FieldValue::to_value).collect())
    }

    fn from_value(value: Value) -> Result<Self, FieldError> {
        match value {
            Value::List(items) => items.into_iter().map(T::from_value).collect(),
            Value::Null => Ok(Vec::new()),
            other => Err(FieldError::type_mismatch(
                &Self::field_type().to_string(),
                &other.type_name(),
            )),
        }
    }
}

impl<T: Structure> FieldValue for Arc<T> {
    fn field_type() -> FieldType {
        FieldType::Record(TypeKey::of::<T>())
    }

    fn to_value(&self) -> Value {
        Value::Record(self.clone())
    }

    fn from_value(value: Value) -> Result<Self, FieldError> {
        let expected = TypeKey::of::<T>().to_string();
        match value {
            Value::Record(record) => {
                let actual = record.type_key().to_string();
                record
                    .into_any_arc()
                    .downcast::<T>()
                    .map_err(|_| FieldError::type_mismatch(&expected, &actual))
            }
            Value::Null => Err(FieldError::NullValue { expected }),
            other => Err(FieldError::type_mismatch(&expected, &other.type_name())),
        }
    }
}

impl FieldValue for Value {
    fn field_type() -> FieldType {
        FieldType::Any
    }

    fn to_value(&self) -> Value {
        self.clone()
    }

    fn from_value(value: Value) -> Result<Self, FieldError> {
        Ok(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_null_into_primitive_stores_default() {
        assert_eq!(i32::from_value(Value::Null).unwrap(), 0);
        assert_eq!(String::from_value(Value::Null).unwrap(), "");
        assert!(Vec::<String>::from_value(Value::Null).unwrap().is_empty());
    }

    #[test]
    fn test_optional_round_trips_null() {
        assert_eq!(Option::<i64>::from_value(Value::Null).unwrap(), None);
        assert_eq!(Option::<i64>::from_value(Value::I64(7)).unwrap(), Some(7));
        assert_eq!(Some(3u32).to_value(), Value::U32(3));
    }

    #[test]
    fn test_mismatched_primitive_is_rejected() {
        let err = i32::from_value(Value::String("12".into())).unwrap_err();
        assert_eq!(err, FieldError::type_mismatch("i32", "String"));
    }

    #[test]
    fn test_list_values() {
        let lines = vec!["a".to_string(), "b".to_string()];
        let value = lines.to_value();
        assert_eq!(value, Value::List(vec![Value::from("a"), Value::from("b")]));
        assert_eq!(Vec::<String>::from_value(value).unwrap(), lines);
        assert_eq!(Vec::<String>::field_type(), FieldType::list(FieldType::String));
    }

    #[test]
    fn test_any_keeps_value() {
        assert_eq!(Value::from_value(Value::F64(1.5)).unwrap(), Value::F64(1.5));
        assert_eq!(<Value as FieldValue>::field_type(), FieldType::Any);
    }
}
