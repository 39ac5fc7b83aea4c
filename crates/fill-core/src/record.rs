//! Composite records.
//!
//! A record exposes a field-descriptor table and a settable handle per
//! field. The table is produced by [`impl_record!`](crate::impl_record), which
//! also implements [`Fillable`] for the type.
//!
//! ```rust
//! use fill_core::{impl_record, Fillable, Record};
//!
//! #[derive(Debug, Default)]
//! struct Address {
//!     street: String,
//!     zip: u32,
//! }
//!
//! #[derive(Debug, Default)]
//! struct User {
//!     name: String,
//!     email: String,
//!     address: Option<Address>,
//! }
//!
//! impl_record!(Address { street, zip });
//! impl_record!(User { name, email @ "pii" @ "email", address });
//!
//! let user = User::construct().unwrap();
//! let fields = user.fields();
//! assert_eq!(fields.len(), 3);
//! assert!(fields[1].has_attribute("pii"));
//! ```

use crate::fillable::Fillable;
use crate::types::{FieldDescriptor, TypeDesc};

/// A composite value with a fixed set of named fields.
pub trait Record {
    /// Describe the record type itself.
    fn record_type(&self) -> TypeDesc;

    /// Field descriptors in declaration order.
    fn fields(&self) -> Vec<FieldDescriptor>;

    /// Settable handle for the named field.
    fn field_mut(&mut self, name: &str) -> Option<&mut dyn Fillable>;
}

/// Build the descriptor of a field from a reference to its current value.
#[doc(hidden)]
pub fn field_of<T: Fillable>(
    _value: &T,
    name: &'static str,
    declaring_type: &'static str,
    attributes: &'static [&'static str],
) -> FieldDescriptor {
    FieldDescriptor::new(name, declaring_type, T::describe(), attributes)
}

/// Implement [`Record`] and [`Fillable`] for a struct.
///
/// Fields are listed in declaration order; each may carry string tags with
/// `@ "tag"`. The type is constructed with `Default::default()` unless a
/// `construct = ctor` clause names a `fn() -> Result<Self, ConstructionError>`.
#[macro_export]
macro_rules! impl_record {
    (@construct $ty:ty,) => {
        ::core::result::Result::Ok(<$ty as ::core::default::Default>::default())
    };
    (@construct $ty:ty, $ctor:expr) => {
        ($ctor)()
    };
    ($ty:ty { $( $field:ident $( @ $attr:literal )* ),* $(,)? } $( construct = $ctor:expr )? ) => {
        impl $crate::Record for $ty {
            fn record_type(&self) -> $crate::TypeDesc {
                <$ty as $crate::Fillable>::describe()
            }

            fn fields(&self) -> ::std::vec::Vec<$crate::FieldDescriptor> {
                ::std::vec![
                    $(
                        $crate::record::field_of(
                            &self.$field,
                            ::core::stringify!($field),
                            ::std::any::type_name::<$ty>(),
                            &[ $( $attr ),* ],
                        ),
                    )*
                ]
            }

            fn field_mut(
                &mut self,
                name: &str,
            ) -> ::core::option::Option<&mut dyn $crate::Fillable> {
                match name {
                    $(
                        ::core::stringify!($field) => ::core::option::Option::Some(
                            &mut self.$field as &mut dyn $crate::Fillable,
                        ),
                    )*
                    _ => ::core::option::Option::None,
                }
            }
        }

        impl $crate::Fillable for $ty {
            fn describe() -> $crate::TypeDesc {
                $crate::TypeDesc::of::<$ty>($crate::TypeKind::Record)
            }

            fn construct() -> ::core::result::Result<Self, $crate::ConstructionError> {
                $crate::impl_record!(@construct $ty, $( $ctor )?)
            }

            fn type_desc(&self) -> $crate::TypeDesc {
                <$ty as $crate::Fillable>::describe()
            }

            fn reconstruct(&mut self) -> ::core::result::Result<(), $crate::ConstructionError> {
                *self = <$ty as $crate::Fillable>::construct()?;
                ::core::result::Result::Ok(())
            }

            fn assign(
                &mut self,
                _value: $crate::Value,
            ) -> ::core::result::Result<(), $crate::AssignmentError> {
                ::core::result::Result::Err($crate::AssignmentError::unsupported::<$ty>())
            }

            fn shape(&mut self) -> $crate::Shape<'_> {
                $crate::Shape::Record(self)
            }
        }
    };
}
