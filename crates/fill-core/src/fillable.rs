//! Settable slots.
//!
//! `Fillable` is the runtime handle the engine uses to inspect and mutate a
//! value of a type it does not know statically. Leaf and scalar types accept
//! generated values, containers expose their elements through `Shape`, and
//! records expose their fields through [`Record`].

use crate::error::{AssignmentError, ConstructionError};
use crate::record::Record;
use crate::types::{TypeDesc, TypeKind};
use crate::values::Value;
use chrono::{DateTime, NaiveDate, Utc};
use std::collections::VecDeque;
use uuid::Uuid;

/// Mutable view over the elements of an array or sequence.
pub type Elements<'a> = Box<dyn Iterator<Item = &'a mut dyn Fillable> + 'a>;

/// Runtime shape of a value, used for traversal dispatch.
pub enum Shape<'a> {
    /// Primitive, string or opaque scalar; nothing to traverse
    Leaf,
    /// Unset nullable slot
    Absent,
    /// Fixed-size array; absent elements are constructed before filling
    Array(Elements<'a>),
    /// Homogeneous sequence; existing elements are filled in order
    Sequence(Elements<'a>),
    /// Composite record
    Record(&'a mut dyn Record),
}

/// A value the engine can construct, assign and traverse.
pub trait Fillable: Send + 'static {
    /// Describe the declared type.
    fn describe() -> TypeDesc
    where
        Self: Sized;

    /// Default-construct a value of this type.
    fn construct() -> Result<Self, ConstructionError>
    where
        Self: Sized;

    /// Object-safe counterpart of [`Fillable::describe`].
    fn type_desc(&self) -> TypeDesc;

    /// Replace this value with a freshly constructed one.
    fn reconstruct(&mut self) -> Result<(), ConstructionError>;

    /// Write a generated value into this slot.
    fn assign(&mut self, value: Value) -> Result<(), AssignmentError>;

    /// Whether this slot is unset.
    fn is_absent(&self) -> bool {
        false
    }

    /// Expose the structure of this value for traversal.
    fn shape(&mut self) -> Shape<'_>;
}

macro_rules! impl_integer {
    ($($t:ty),* $(,)?) => {
        $(
            impl Fillable for $t {
                fn describe() -> TypeDesc {
                    TypeDesc::of::<$t>(TypeKind::Integer)
                }

                fn construct() -> Result<Self, ConstructionError> {
                    Ok(0)
                }

                fn type_desc(&self) -> TypeDesc {
                    Self::describe()
                }

                fn reconstruct(&mut self) -> Result<(), ConstructionError> {
                    *self = 0;
                    Ok(())
                }

                fn assign(&mut self, value: Value) -> Result<(), AssignmentError> {
                    let converted = match &value {
                        Value::Int(i) => <$t>::try_from(*i).ok(),
                        Value::UInt(u) => <$t>::try_from(*u).ok(),
                        _ => return Err(AssignmentError::mismatch::<$t>(&value)),
                    };
                    *self = converted.ok_or_else(|| AssignmentError::out_of_range::<$t>(&value))?;
                    Ok(())
                }

                fn shape(&mut self) -> Shape<'_> {
                    Shape::Leaf
                }
            }
        )*
    };
}

impl_integer!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);

macro_rules! impl_float {
    ($($t:ty),* $(,)?) => {
        $(
            impl Fillable for $t {
                fn describe() -> TypeDesc {
                    TypeDesc::of::<$t>(TypeKind::Float)
                }

                fn construct() -> Result<Self, ConstructionError> {
                    Ok(0.0)
                }

                fn type_desc(&self) -> TypeDesc {
                    Self::describe()
                }

                fn reconstruct(&mut self) -> Result<(), ConstructionError> {
                    *self = 0.0;
                    Ok(())
                }

                fn assign(&mut self, value: Value) -> Result<(), AssignmentError> {
                    *self = match value {
                        Value::Float(f) => f as $t,
                        Value::Int(i) => i as $t,
                        Value::UInt(u) => u as $t,
                        other => return Err(AssignmentError::mismatch::<$t>(&other)),
                    };
                    Ok(())
                }

                fn shape(&mut self) -> Shape<'_> {
                    Shape::Leaf
                }
            }
        )*
    };
}

impl_float!(f32, f64);

impl Fillable for bool {
    fn describe() -> TypeDesc {
        TypeDesc::of::<bool>(TypeKind::Bool)
    }

    fn construct() -> Result<Self, ConstructionError> {
        Ok(false)
    }

    fn type_desc(&self) -> TypeDesc {
        Self::describe()
    }

    fn reconstruct(&mut self) -> Result<(), ConstructionError> {
        *self = false;
        Ok(())
    }

    fn assign(&mut self, value: Value) -> Result<(), AssignmentError> {
        match value {
            Value::Bool(b) => {
                *self = b;
                Ok(())
            }
            other => Err(AssignmentError::mismatch::<bool>(&other)),
        }
    }

    fn shape(&mut self) -> Shape<'_> {
        Shape::Leaf
    }
}

impl Fillable for char {
    fn describe() -> TypeDesc {
        TypeDesc::of::<char>(TypeKind::Char)
    }

    fn construct() -> Result<Self, ConstructionError> {
        Ok('\0')
    }

    fn type_desc(&self) -> TypeDesc {
        Self::describe()
    }

    fn reconstruct(&mut self) -> Result<(), ConstructionError> {
        *self = '\0';
        Ok(())
    }

    fn assign(&mut self, value: Value) -> Result<(), AssignmentError> {
        match value {
            Value::Char(c) => {
                *self = c;
                Ok(())
            }
            other => Err(AssignmentError::mismatch::<char>(&other)),
        }
    }

    fn shape(&mut self) -> Shape<'_> {
        Shape::Leaf
    }
}

impl Fillable for String {
    fn describe() -> TypeDesc {
        TypeDesc::of::<String>(TypeKind::Text)
    }

    fn construct() -> Result<Self, ConstructionError> {
        Ok(String::new())
    }

    fn type_desc(&self) -> TypeDesc {
        Self::describe()
    }

    fn reconstruct(&mut self) -> Result<(), ConstructionError> {
        self.clear();
        Ok(())
    }

    fn assign(&mut self, value: Value) -> Result<(), AssignmentError> {
        *self = match value {
            Value::String(s) => s,
            Value::Char(c) => c.to_string(),
            Value::Uuid(u) => u.to_string(),
            Value::DateTime(dt) => dt.to_rfc3339(),
            other => return Err(AssignmentError::mismatch::<String>(&other)),
        };
        Ok(())
    }

    fn shape(&mut self) -> Shape<'_> {
        Shape::Leaf
    }
}

impl Fillable for Uuid {
    fn describe() -> TypeDesc {
        TypeDesc::of::<Uuid>(TypeKind::Scalar)
    }

    fn construct() -> Result<Self, ConstructionError> {
        Ok(Uuid::nil())
    }

    fn type_desc(&self) -> TypeDesc {
        Self::describe()
    }

    fn reconstruct(&mut self) -> Result<(), ConstructionError> {
        *self = Uuid::nil();
        Ok(())
    }

    fn assign(&mut self, value: Value) -> Result<(), AssignmentError> {
        *self = match value {
            Value::Uuid(u) => u,
            Value::String(s) => {
                Uuid::parse_str(&s).map_err(|_| AssignmentError::out_of_range::<Uuid>(&s))?
            }
            other => return Err(AssignmentError::mismatch::<Uuid>(&other)),
        };
        Ok(())
    }

    fn shape(&mut self) -> Shape<'_> {
        Shape::Leaf
    }
}

impl Fillable for DateTime<Utc> {
    fn describe() -> TypeDesc {
        TypeDesc::of::<DateTime<Utc>>(TypeKind::Scalar)
    }

    fn construct() -> Result<Self, ConstructionError> {
        Ok(DateTime::<Utc>::default())
    }

    fn type_desc(&self) -> TypeDesc {
        Self::describe()
    }

    fn reconstruct(&mut self) -> Result<(), ConstructionError> {
        *self = DateTime::<Utc>::default();
        Ok(())
    }

    fn assign(&mut self, value: Value) -> Result<(), AssignmentError> {
        *self = match value {
            Value::DateTime(dt) => dt,
            Value::String(s) => DateTime::parse_from_rfc3339(&s)
                .map_err(|_| AssignmentError::out_of_range::<DateTime<Utc>>(&s))?
                .with_timezone(&Utc),
            other => return Err(AssignmentError::mismatch::<DateTime<Utc>>(&other)),
        };
        Ok(())
    }

    fn shape(&mut self) -> Shape<'_> {
        Shape::Leaf
    }
}

impl Fillable for NaiveDate {
    fn describe() -> TypeDesc {
        TypeDesc::of::<NaiveDate>(TypeKind::Scalar)
    }

    fn construct() -> Result<Self, ConstructionError> {
        Ok(NaiveDate::default())
    }

    fn type_desc(&self) -> TypeDesc {
        Self::describe()
    }

    fn reconstruct(&mut self) -> Result<(), ConstructionError> {
        *self = NaiveDate::default();
        Ok(())
    }

    fn assign(&mut self, value: Value) -> Result<(), AssignmentError> {
        *self = match value {
            Value::DateTime(dt) => dt.date_naive(),
            Value::String(s) => NaiveDate::parse_from_str(&s, "%Y-%m-%d")
                .map_err(|_| AssignmentError::out_of_range::<NaiveDate>(&s))?,
            other => return Err(AssignmentError::mismatch::<NaiveDate>(&other)),
        };
        Ok(())
    }

    fn shape(&mut self) -> Shape<'_> {
        Shape::Leaf
    }
}

impl<T: Fillable> Fillable for Option<T> {
    fn describe() -> TypeDesc {
        T::describe().nullable_as(std::any::type_name::<Self>())
    }

    fn construct() -> Result<Self, ConstructionError> {
        Ok(None)
    }

    fn type_desc(&self) -> TypeDesc {
        Self::describe()
    }

    fn reconstruct(&mut self) -> Result<(), ConstructionError> {
        *self = Some(T::construct()?);
        Ok(())
    }

    fn assign(&mut self, value: Value) -> Result<(), AssignmentError> {
        if value.is_null() {
            *self = None;
            return Ok(());
        }
        match self {
            Some(inner) => inner.assign(value),
            None => {
                let mut inner = T::construct()?;
                inner.assign(value)?;
                *self = Some(inner);
                Ok(())
            }
        }
    }

    fn is_absent(&self) -> bool {
        self.is_none()
    }

    fn shape(&mut self) -> Shape<'_> {
        match self {
            Some(inner) => inner.shape(),
            None => Shape::Absent,
        }
    }
}

impl<T: Fillable> Fillable for Box<T> {
    fn describe() -> TypeDesc {
        T::describe()
    }

    fn construct() -> Result<Self, ConstructionError> {
        Ok(Box::new(T::construct()?))
    }

    fn type_desc(&self) -> TypeDesc {
        Self::describe()
    }

    fn reconstruct(&mut self) -> Result<(), ConstructionError> {
        **self = T::construct()?;
        Ok(())
    }

    fn assign(&mut self, value: Value) -> Result<(), AssignmentError> {
        (**self).assign(value)
    }

    fn is_absent(&self) -> bool {
        (**self).is_absent()
    }

    fn shape(&mut self) -> Shape<'_> {
        (**self).shape()
    }
}

impl<T: Fillable, const N: usize> Fillable for [T; N] {
    fn describe() -> TypeDesc {
        TypeDesc::of::<Self>(TypeKind::Array)
    }

    fn construct() -> Result<Self, ConstructionError> {
        let items = (0..N)
            .map(|_| T::construct())
            .collect::<Result<Vec<T>, _>>()?;
        items
            .try_into()
            .map_err(|_| ConstructionError::failed::<Self>("element count mismatch"))
    }

    fn type_desc(&self) -> TypeDesc {
        Self::describe()
    }

    fn reconstruct(&mut self) -> Result<(), ConstructionError> {
        *self = Self::construct()?;
        Ok(())
    }

    fn assign(&mut self, value: Value) -> Result<(), AssignmentError> {
        let values = match value {
            Value::List(values) => values,
            other => return Err(AssignmentError::mismatch::<Self>(&other)),
        };
        if values.len() != N {
            return Err(AssignmentError::out_of_range::<Self>(format!(
                "list of {} elements",
                values.len()
            )));
        }
        let mut fresh = Self::construct()?;
        for (slot, value) in fresh.iter_mut().zip(values) {
            slot.assign(value)?;
        }
        *self = fresh;
        Ok(())
    }

    fn shape(&mut self) -> Shape<'_> {
        Shape::Array(Box::new(
            self.iter_mut().map(|item| item as &mut dyn Fillable),
        ))
    }
}

impl<T: Fillable> Fillable for Box<[T]> {
    fn describe() -> TypeDesc {
        TypeDesc::of::<Self>(TypeKind::Array)
    }

    fn construct() -> Result<Self, ConstructionError> {
        Ok(Box::default())
    }

    fn type_desc(&self) -> TypeDesc {
        Self::describe()
    }

    fn reconstruct(&mut self) -> Result<(), ConstructionError> {
        *self = (0..self.len())
            .map(|_| T::construct())
            .collect::<Result<Box<[T]>, _>>()?;
        Ok(())
    }

    fn assign(&mut self, value: Value) -> Result<(), AssignmentError> {
        let values = match value {
            Value::List(values) => values,
            other => return Err(AssignmentError::mismatch::<Self>(&other)),
        };
        *self = values
            .into_iter()
            .map(|value| {
                let mut item = T::construct()?;
                item.assign(value)?;
                Ok(item)
            })
            .collect::<Result<Box<[T]>, AssignmentError>>()?;
        Ok(())
    }

    fn shape(&mut self) -> Shape<'_> {
        Shape::Array(Box::new(
            self.iter_mut().map(|item| item as &mut dyn Fillable),
        ))
    }
}

macro_rules! impl_sequence {
    ($($seq:ident),* $(,)?) => {
        $(
            impl<T: Fillable> Fillable for $seq<T> {
                fn describe() -> TypeDesc {
                    TypeDesc::of::<Self>(TypeKind::Sequence)
                }

                fn construct() -> Result<Self, ConstructionError> {
                    Ok($seq::new())
                }

                fn type_desc(&self) -> TypeDesc {
                    Self::describe()
                }

                fn reconstruct(&mut self) -> Result<(), ConstructionError> {
                    self.clear();
                    Ok(())
                }

                fn assign(&mut self, value: Value) -> Result<(), AssignmentError> {
                    let values = match value {
                        Value::List(values) => values,
                        other => return Err(AssignmentError::mismatch::<Self>(&other)),
                    };
                    *self = values
                        .into_iter()
                        .map(|value| {
                            let mut item = T::construct()?;
                            item.assign(value)?;
                            Ok(item)
                        })
                        .collect::<Result<$seq<T>, AssignmentError>>()?;
                    Ok(())
                }

                fn shape(&mut self) -> Shape<'_> {
                    Shape::Sequence(Box::new(
                        self.iter_mut().map(|item| item as &mut dyn Fillable),
                    ))
                }
            }
        )*
    };
}

impl_sequence!(Vec, VecDeque);
