//! Type descriptors for fillable slots.
//!
//! This module defines `TypeDesc`, the runtime description of a declared
//! slot type, and `FieldDescriptor`, the metadata a generator matcher sees
//! for one field of a record.

use std::any::TypeId;
use std::fmt;

/// Structural category of a declared type.
///
/// The engine dispatches on this when no generator claims a field: leaf kinds
/// are left untouched, everything else is constructed and filled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TypeKind {
    /// `bool`
    Bool,
    /// Signed and unsigned integers of any width
    Integer,
    /// `f32` / `f64`
    Float,
    /// `char`
    Char,
    /// `String`
    Text,
    /// Opaque value types without fields (UUIDs, timestamps, dates)
    Scalar,
    /// Composite record with named fields
    Record,
    /// Fixed-size array; absent slots are constructed during fill
    Array,
    /// Homogeneous sequence; elements are filled but never created
    Sequence,
}

impl TypeKind {
    /// Leaf kinds have no substructure and are never constructed by fallback.
    pub fn is_leaf(self) -> bool {
        matches!(
            self,
            Self::Bool | Self::Integer | Self::Float | Self::Char | Self::Text
        )
    }

    /// Get a short lowercase name for this kind.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Bool => "bool",
            Self::Integer => "integer",
            Self::Float => "float",
            Self::Char => "char",
            Self::Text => "text",
            Self::Scalar => "scalar",
            Self::Record => "record",
            Self::Array => "array",
            Self::Sequence => "sequence",
        }
    }

    /// Parse a kind from its short name.
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "bool" | "boolean" => Some(Self::Bool),
            "integer" | "int" => Some(Self::Integer),
            "float" => Some(Self::Float),
            "char" => Some(Self::Char),
            "text" | "string" => Some(Self::Text),
            "scalar" => Some(Self::Scalar),
            "record" => Some(Self::Record),
            "array" => Some(Self::Array),
            "sequence" => Some(Self::Sequence),
            _ => None,
        }
    }
}

impl fmt::Display for TypeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Runtime description of a declared slot type.
///
/// `Option<T>` and `Box<T>` share the `id` and `kind` of `T`, so a matcher
/// written against `bool` also accepts `Option<bool>`. `name` is always the
/// underlying type's name, so name matching sees through the wrappers too.
/// Only `declared_name` and `nullable` tell them apart.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TypeDesc {
    /// Full name of the underlying (unwrapped) type
    pub name: &'static str,
    /// Full name of the type as declared, e.g. `Option<User>`
    pub declared_name: &'static str,
    /// Identity of the underlying (unwrapped) type
    pub id: TypeId,
    /// Structural category
    pub kind: TypeKind,
    /// Whether the slot may be absent (`Option<T>`)
    pub nullable: bool,
}

impl TypeDesc {
    /// Describe `T` with the given kind.
    pub fn of<T: 'static>(kind: TypeKind) -> Self {
        Self {
            name: std::any::type_name::<T>(),
            declared_name: std::any::type_name::<T>(),
            id: TypeId::of::<T>(),
            kind,
            nullable: false,
        }
    }

    /// Check whether the underlying type is `T`.
    pub fn is<T: 'static>(&self) -> bool {
        self.id == TypeId::of::<T>()
    }

    /// Check whether this is a leaf type.
    pub fn is_leaf(&self) -> bool {
        self.kind.is_leaf()
    }

    /// Type name without its module path, e.g. `User` for `app::model::User`.
    ///
    /// Generic arguments are stripped along with the path of the outer type.
    pub fn short_name(&self) -> &'static str {
        short_type_name(self.name)
    }

    /// Mark this description as nullable, declared as `declared_name`.
    pub fn nullable_as(self, declared_name: &'static str) -> Self {
        Self {
            declared_name,
            nullable: true,
            ..self
        }
    }
}

/// Strip the module path (and generic arguments) from a type name.
pub fn short_type_name(name: &'static str) -> &'static str {
    let base = name.split('<').next().unwrap_or(name);
    base.rsplit("::").next().unwrap_or(base)
}

/// Metadata describing one field of a record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldDescriptor {
    /// Field name as declared
    pub name: &'static str,
    /// Full name of the record type declaring this field
    pub declaring_type: &'static str,
    /// Declared type of the field
    pub ty: TypeDesc,
    /// Free-form tags attached to the field
    pub attributes: &'static [&'static str],
}

impl FieldDescriptor {
    /// Create a new field descriptor.
    pub fn new(
        name: &'static str,
        declaring_type: &'static str,
        ty: TypeDesc,
        attributes: &'static [&'static str],
    ) -> Self {
        Self {
            name,
            declaring_type,
            ty,
            attributes,
        }
    }

    /// Check whether the field carries the given tag.
    pub fn has_attribute(&self, attribute: &str) -> bool {
        self.attributes.iter().any(|a| *a == attribute)
    }
}

impl fmt::Display for FieldDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}.{}: {}",
            short_type_name(self.declaring_type),
            self.name,
            self.ty.declared_name
        )
    }
}
