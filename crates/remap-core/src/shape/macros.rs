//! `record!` declares a struct together with its structural descriptor.

/// Declares a struct and implements [`Record`](crate::Record) and
/// [`Structure`](crate::Structure) for it. Every field is readable and
/// writable and is exposed under its Rust identifier.
///
/// ```
/// remap_core::record! {
///     #[derive(Debug, Clone, Default)]
///     pub struct Address {
///         pub street: String,
///         pub city: String,
///     }
/// }
/// ```
#[macro_export]
macro_rules! record {
    (
        $(#[$meta:meta])*
        $vis:vis struct $name:ident {
            $(
                $(#[$field_meta:meta])*
                $field_vis:vis $field:ident : $field_ty:ty
            ),* $(,)?
        }
    ) => {
        $(#[$meta])*
        $vis struct $name {
            $(
                $(#[$field_meta])*
                $field_vis $field: $field_ty,
            )*
        }

        impl $crate::Record for $name {
            fn type_key(&self) -> $crate::TypeKey {
                $crate::TypeKey::of::<Self>()
            }

            fn get_field(&self, name: &str) -> ::std::option::Option<$crate::Value> {
                $(
                    if name == stringify!($field) {
                        return ::std::option::Option::Some(
                            <$field_ty as $crate::FieldValue>::to_value(&self.$field),
                        );
                    }
                )*
                let _ = name;
                ::std::option::Option::None
            }

            fn set_field(
                &mut self,
                name: &str,
                value: $crate::Value,
            ) -> ::std::result::Result<(), $crate::FieldError> {
                $(
                    if name == stringify!($field) {
                        self.$field = <$field_ty as $crate::FieldValue>::from_value(value)?;
                        return ::std::result::Result::Ok(());
                    }
                )*
                let _ = value;
                ::std::result::Result::Err($crate::FieldError::unknown_field(name))
            }

            fn as_record(&self) -> &dyn $crate::Record {
                self
            }

            fn as_any(&self) -> &dyn ::std::any::Any {
                self
            }

            fn as_any_mut(&mut self) -> &mut dyn ::std::any::Any {
                self
            }

            fn into_any(self: ::std::boxed::Box<Self>) -> ::std::boxed::Box<dyn ::std::any::Any> {
                self
            }

            fn into_any_arc(
                self: ::std::sync::Arc<Self>,
            ) -> ::std::sync::Arc<dyn ::std::any::Any + ::std::marker::Send + ::std::marker::Sync> {
                self
            }
        }

        impl $crate::Structure for $name {
            fn shape() -> $crate::Shape {
                $crate::Shape::of::<Self>()
                $(
                    .field(
                        stringify!($field),
                        <$field_ty as $crate::FieldValue>::field_type(),
                        $crate::Access::ReadWrite,
                    )
                )*
            }
        }
    };
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use pretty_assertions::assert_eq;

    use crate::{Access, FieldError, FieldType, Record, Structure, TypeKey, Value};

    crate::record! {
        #[derive(Debug, Clone, Default, PartialEq)]
        pub struct Address {
            pub street: String,
            pub city: String,
        }
    }

    crate::record! {
        #[derive(Debug, Clone, Default)]
        struct Customer {
            name: String,
            visits: u32,
            nickname: Option<String>,
            address: Option<Arc<Address>>,
        }
    }

    #[test]
    fn test_shape_lists_fields_in_order() {
        let shape = Customer::shape();
        let fields: Vec<_> = shape
            .fields()
            .iter()
            .map(|f| (f.name, f.ty.clone(), f.access))
            .collect();

        assert_eq!(
            fields,
            vec![
                ("name", FieldType::String, Access::ReadWrite),
                ("visits", FieldType::U32, Access::ReadWrite),
                ("nickname", FieldType::optional(FieldType::String), Access::ReadWrite),
                (
                    "address",
                    FieldType::optional(FieldType::Record(TypeKey::of::<Address>())),
                    Access::ReadWrite
                ),
            ]
        );
    }

    #[test]
    fn test_get_and_set_by_name() {
        let mut customer = Customer::default();
        customer.set_field("name", Value::from("Ada")).unwrap();
        customer.set_field("visits", Value::U32(3)).unwrap();

        assert_eq!(customer.name, "Ada");
        assert_eq!(customer.get_field("visits"), Some(Value::U32(3)));
        assert_eq!(customer.get_field("nickname"), Some(Value::Null));
        assert_eq!(customer.get_field("missing"), None);
    }

    #[test]
    fn test_unknown_field_is_reported() {
        let mut customer = Customer::default();
        let err = customer.set_field("Name", Value::from("Ada")).unwrap_err();
        assert_eq!(err, FieldError::unknown_field("Name"));
    }

    #[test]
    fn test_nested_record_travels_by_reference() {
        let address = Arc::new(Address {
            street: "1 Main St".into(),
            city: "Springfield".into(),
        });
        let mut customer = Customer::default();
        customer
            .set_field("address", Value::Record(address.clone()))
            .unwrap();

        let stored = customer.address.as_ref().unwrap();
        assert!(Arc::ptr_eq(stored, &address));
    }
}
