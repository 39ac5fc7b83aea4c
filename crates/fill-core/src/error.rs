//! Error types for construction and assignment of slot values.

/// A value of some type could not be default-constructed.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConstructionError {
    /// The type has no default constructor
    #[error("No default constructor for type {type_name}")]
    NoDefault { type_name: &'static str },

    /// The constructor ran but failed
    #[error("Failed to construct {type_name}: {reason}")]
    Failed {
        type_name: &'static str,
        reason: String,
    },
}

impl ConstructionError {
    /// Error for a type `T` that cannot be default-constructed.
    pub fn no_default<T: ?Sized>() -> Self {
        Self::NoDefault {
            type_name: std::any::type_name::<T>(),
        }
    }

    /// Error for a constructor of `T` that failed with the given reason.
    pub fn failed<T: ?Sized>(reason: impl Into<String>) -> Self {
        Self::Failed {
            type_name: std::any::type_name::<T>(),
            reason: reason.into(),
        }
    }
}

/// A generated value could not be written into a slot.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum AssignmentError {
    /// The value kind does not fit the slot type
    #[error("Cannot assign {value} value to slot of type {target}")]
    TypeMismatch {
        target: &'static str,
        value: &'static str,
    },

    /// The value kind fits but the value is out of the slot's range
    #[error("Value {value} is out of range for {target}")]
    OutOfRange { target: &'static str, value: String },

    /// The slot type does not accept generated values at all
    #[error("Type {target} cannot be assigned from a generated value")]
    Unsupported { target: &'static str },

    /// A wrapper slot had to construct its inner value first and failed
    #[error(transparent)]
    Construction(#[from] ConstructionError),
}

impl AssignmentError {
    /// Mismatch between the value variant and slot type `T`.
    pub fn mismatch<T: ?Sized>(value: &crate::Value) -> Self {
        Self::TypeMismatch {
            target: std::any::type_name::<T>(),
            value: value.kind_name(),
        }
    }

    /// Value out of range for slot type `T`.
    pub fn out_of_range<T: ?Sized>(value: impl ToString) -> Self {
        Self::OutOfRange {
            target: std::any::type_name::<T>(),
            value: value.to_string(),
        }
    }

    /// Slot type `T` never accepts generated values.
    pub fn unsupported<T: ?Sized>() -> Self {
        Self::Unsupported {
            target: std::any::type_name::<T>(),
        }
    }
}
