use std::{fmt, sync::Arc};

use crate::shape::{FieldValue, Record, Value};

type Resolver = Arc<dyn Fn(&dyn Record) -> Option<Value> + Send + Sync>;

/// "Destination field X is computed by f(source)".
///
/// The resolver is only evaluated at map time. It yields `None` when handed
/// a record of a type other than the one it was declared for.
#[derive(Clone)]
pub struct FieldRule {
    destination_field: String,
    resolver: Resolver,
}

impl FieldRule {
    pub fn new<S, R, F>(destination_field: impl Into<String>, resolver: F) -> Self
    where
        S: Record,
        R: FieldValue,
        F: Fn(&S) -> R + Send + Sync + 'static,
    {
        Self {
            destination_field: destination_field.into(),
            resolver: Arc::new(move |source: &dyn Record| {
                source
                    .as_any()
                    .downcast_ref::<S>()
                    .map(|typed| resolver(typed).to_value())
            }),
        }
    }

    /// A rule that always produces `Value::Null`.
    pub fn null(destination_field: impl Into<String>) -> Self {
        Self {
            destination_field: destination_field.into(),
            resolver: Arc::new(|_: &dyn Record| Some(Value::Null)),
        }
    }

    pub fn destination_field(&self) -> &str {
        &self.destination_field
    }

    pub fn resolve(&self, source: &dyn Record) -> Option<Value> {
        (self.resolver)(source)
    }
}

impl fmt::Debug for FieldRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FieldRule")
            .field("destination_field", &self.destination_field)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    crate::record! {
        #[derive(Debug, Default)]
        struct Stock {
            count: i32,
        }
    }

    crate::record! {
        #[derive(Debug, Default)]
        struct Other {
            count: i32,
        }
    }

    #[test]
    fn test_resolver_reads_typed_source() {
        let rule = FieldRule::new("available", |s: &Stock| s.count > 0);
        assert_eq!(rule.destination_field(), "available");
        assert_eq!(rule.resolve(&Stock { count: 15 }), Some(Value::Bool(true)));
        assert_eq!(rule.resolve(&Stock { count: 0 }), Some(Value::Bool(false)));
    }

    #[test]
    fn test_resolver_ignores_foreign_source() {
        let rule = FieldRule::new("available", |s: &Stock| s.count > 0);
        assert_eq!(rule.resolve(&Other { count: 1 }), None);
    }

    #[test]
    fn test_null_rule() {
        assert_eq!(FieldRule::null("x").resolve(&Stock::default()), Some(Value::Null));
    }
}
