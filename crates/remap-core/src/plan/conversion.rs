//! Coercion of values produced by custom resolvers into the declared type of
//! their destination field.

use tracing::trace;

use crate::{
    errors::MapError,
    shape::{FieldType, Value},
};

/// Decides what a custom step actually stores.
///
/// * null is stored as-is;
/// * values the field type admits are stored unchanged;
/// * for `Optional(U)` the value is checked against `U`;
/// * otherwise a primitive-to-primitive conversion is attempted.
pub fn convert(value: Value, target: &FieldType) -> Result<Value, MapError> {
    if value.is_null() || target.admits(&value) {
        return Ok(value);
    }

    let target = target.without_optional();
    if target.admits(&value) {
        return Ok(value);
    }

    let value_type = value.type_name();
    let converted = Scalar::from_value(value)
        .and_then(|scalar| scalar.into_target(target))
        .ok_or_else(|| MapError::conversion(&value_type, &target.to_string()))?;

    trace!(from = %value_type, to = %target, "converted custom field value");
    Ok(converted)
}

/// Primitive value normalised for conversion.
enum Scalar {
    Bool(bool),
    Char(char),
    Int(i128),
    Float(f64),
    /// Kept apart from `Float` so it formats at its own precision
    Float32(f32),
    Text(String),
}

impl Scalar {
    fn from_value(value: Value) -> Option<Self> {
        match value {
            Value::Bool(b) => Some(Scalar::Bool(b)),
            Value::Char(c) => Some(Scalar::Char(c)),
            Value::I32(n) => Some(Scalar::Int(n.into())),
            Value::I64(n) => Some(Scalar::Int(n.into())),
            Value::U32(n) => Some(Scalar::Int(n.into())),
            Value::U64(n) => Some(Scalar::Int(n.into())),
            Value::F32(n) => Some(Scalar::Float32(n)),
            Value::F64(n) => Some(Scalar::Float(n)),
            Value::String(s) => Some(Scalar::Text(s)),
            Value::Null | Value::List(_) | Value::Record(_) => None,
        }
    }

    fn into_target(self, target: &FieldType) -> Option<Value> {
        match target {
            FieldType::Bool => self.to_bool().map(Value::Bool),
            FieldType::Char => self.to_char().map(Value::Char),
            FieldType::I32 => self.to_integer().map(Value::I32),
            FieldType::I64 => self.to_integer().map(Value::I64),
            FieldType::U32 => self.to_integer().map(Value::U32),
            FieldType::U64 => self.to_integer().map(Value::U64),
            FieldType::F32 => match &self {
                Scalar::Text(s) => s.trim().parse::<f32>().ok(),
                _ => self.to_float().map(|f| f as f32),
            }
            .map(Value::F32),
            FieldType::F64 => self.to_float().map(Value::F64),
            FieldType::String => Some(Value::String(self.into_text())),
            FieldType::Optional(_) | FieldType::List(_) | FieldType::Record(_) | FieldType::Any => {
                None
            }
        }
    }

    fn to_bool(&self) -> Option<bool> {
        match self {
            Scalar::Bool(b) => Some(*b),
            Scalar::Int(n) => Some(*n != 0),
            Scalar::Float(f) => Some(*f != 0.0),
            Scalar::Float32(f) => Some(*f != 0.0),
            Scalar::Text(s) => {
                let s = s.trim();
                if s.eq_ignore_ascii_case("true") {
                    Some(true)
                } else if s.eq_ignore_ascii_case("false") {
                    Some(false)
                } else {
                    None
                }
            }
            Scalar::Char(_) => None,
        }
    }

    fn to_char(&self) -> Option<char> {
        match self {
            Scalar::Char(c) => Some(*c),
            Scalar::Int(n) => u32::try_from(*n).ok().and_then(char::from_u32),
            Scalar::Text(s) => {
                let mut chars = s.chars();
                match (chars.next(), chars.next()) {
                    (Some(c), None) => Some(c),
                    _ => None,
                }
            }
            Scalar::Bool(_) | Scalar::Float(_) | Scalar::Float32(_) => None,
        }
    }

    fn to_integer<T>(&self) -> Option<T>
    where
        T: TryFrom<i128> + std::str::FromStr,
    {
        match self {
            Scalar::Int(n) => T::try_from(*n).ok(),
            Scalar::Float(f) => Self::round_to_integer(*f),
            Scalar::Float32(f) => Self::round_to_integer(f64::from(*f)),
            Scalar::Bool(b) => T::try_from(i128::from(*b)).ok(),
            Scalar::Char(c) => T::try_from(i128::from(u32::from(*c))).ok(),
            Scalar::Text(s) => s.trim().parse::<T>().ok(),
        }
    }

    fn round_to_integer<T: TryFrom<i128>>(f: f64) -> Option<T> {
        if !f.is_finite() {
            return None;
        }
        let rounded = f.round_ties_even();
        if rounded < i128::MIN as f64 || rounded > i128::MAX as f64 {
            return None;
        }
        T::try_from(rounded as i128).ok()
    }

    fn to_float(&self) -> Option<f64> {
        match self {
            Scalar::Float(f) => Some(*f),
            Scalar::Float32(f) => Some(f64::from(*f)),
            Scalar::Int(n) => Some(*n as f64),
            Scalar::Bool(b) => Some(if *b { 1.0 } else { 0.0 }),
            Scalar::Text(s) => s.trim().parse::<f64>().ok(),
            Scalar::Char(_) => None,
        }
    }

    fn into_text(self) -> String {
        match self {
            Scalar::Bool(b) => b.to_string(),
            Scalar::Char(c) => c.to_string(),
            Scalar::Int(n) => n.to_string(),
            Scalar::Float(f) => f.to_string(),
            Scalar::Float32(f) => f.to_string(),
            Scalar::Text(s) => s,
        }
    }
}
