//! The generator contract.
//!
//! A generator decides whether it applies to a field (`matches`) and, if so,
//! produces one value for it (`next`). Generators are shared between the
//! registry and background fills, so any sequence state they keep must use
//! interior mutability and be cleared by `reset`.

use crate::context::FillContext;
use crate::types::{FieldDescriptor, TypeDesc, TypeKind};
use crate::values::Value;
use std::fmt;
use std::sync::Arc;

/// A pluggable producer of field values.
pub trait Generator: Send + Sync {
    /// Whether this generator applies to the given field.
    fn matches(&self, field: &FieldDescriptor) -> bool;

    /// Produce the next value.
    fn next(&self, context: &FillContext) -> Value;

    /// Return any internal sequence state to its initial value.
    fn reset(&self) {}
}

impl<G: Generator + ?Sized> Generator for Arc<G> {
    fn matches(&self, field: &FieldDescriptor) -> bool {
        (**self).matches(field)
    }

    fn next(&self, context: &FillContext) -> Value {
        (**self).next(context)
    }

    fn reset(&self) {
        (**self).reset()
    }
}

/// Shareable predicate over field metadata.
#[derive(Clone)]
pub struct Matcher(Arc<dyn Fn(&FieldDescriptor) -> bool + Send + Sync>);

impl fmt::Debug for Matcher {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Matcher(..)")
    }
}

impl Matcher {
    /// Build a matcher from a predicate.
    pub fn new(predicate: impl Fn(&FieldDescriptor) -> bool + Send + Sync + 'static) -> Self {
        Self(Arc::new(predicate))
    }

    /// Evaluate the predicate.
    pub fn matches(&self, field: &FieldDescriptor) -> bool {
        (self.0)(field)
    }

    /// Matches every field.
    pub fn any() -> Self {
        Self::new(|_| true)
    }

    /// Matches no field.
    pub fn none() -> Self {
        Self::new(|_| false)
    }

    /// Fields whose underlying type is `T` (including `Option<T>` and `Box<T>`).
    pub fn of_type<T: 'static>() -> Self {
        Self::new(|field| field.ty.is::<T>())
    }

    /// Fields whose declared type has the given kind.
    pub fn of_kind(kind: TypeKind) -> Self {
        Self::new(move |field| field.ty.kind == kind)
    }

    /// Fields with the given name.
    pub fn named(name: impl Into<String>) -> Self {
        let name = name.into();
        Self::new(move |field| field.name == name)
    }

    /// Fields whose type has the given short or full name.
    pub fn type_named(name: impl Into<String>) -> Self {
        let name = name.into();
        Self::new(move |field| type_name_matches(&field.ty, &name))
    }

    /// Fields tagged with the given attribute.
    pub fn with_attribute(attribute: impl Into<String>) -> Self {
        let attribute = attribute.into();
        Self::new(move |field| field.has_attribute(&attribute))
    }

    /// Fields declared by record type `T`.
    pub fn declared_in<T: 'static>() -> Self {
        let declaring = std::any::type_name::<T>();
        Self::new(move |field| field.declaring_type == declaring)
    }

    /// Fields declared by a record type with the given short or full name.
    pub fn declared_in_named(name: impl Into<String>) -> Self {
        let name = name.into();
        Self::new(move |field| {
            field.declaring_type == name
                || crate::types::short_type_name(field.declaring_type) == name
        })
    }

    /// Fields that may be absent.
    pub fn nullable() -> Self {
        Self::new(|field| field.ty.nullable)
    }

    /// Both matchers must accept the field.
    pub fn and(self, other: Matcher) -> Self {
        Self::new(move |field| self.matches(field) && other.matches(field))
    }

    /// Either matcher may accept the field.
    pub fn or(self, other: Matcher) -> Self {
        Self::new(move |field| self.matches(field) || other.matches(field))
    }

    /// Invert this matcher.
    pub fn not(self) -> Self {
        Self::new(move |field| !self.matches(field))
    }
}

fn type_name_matches(ty: &TypeDesc, name: &str) -> bool {
    ty.name == name || ty.short_name() == name || ty.kind.as_str() == name
}

/// A generator whose default matcher has been replaced.
#[derive(Debug)]
pub struct Matched<G> {
    inner: G,
    matcher: Matcher,
}

impl<G: Generator> Generator for Matched<G> {
    fn matches(&self, field: &FieldDescriptor) -> bool {
        self.matcher.matches(field)
    }

    fn next(&self, context: &FillContext) -> Value {
        self.inner.next(context)
    }

    fn reset(&self) {
        self.inner.reset()
    }
}

/// Convenience methods available on every generator.
pub trait GeneratorExt: Generator + Sized {
    /// Apply this generator to the fields accepted by `matcher` instead of
    /// its default ones.
    fn with_matcher(self, matcher: Matcher) -> Matched<Self> {
        Matched {
            inner: self,
            matcher,
        }
    }
}

impl<G: Generator + Sized> GeneratorExt for G {}

/// Ad-hoc generator built from a matcher and a closure.
pub struct FnGenerator<F> {
    matcher: Matcher,
    produce: F,
}

impl<F> FnGenerator<F>
where
    F: Fn(&FillContext) -> Value + Send + Sync,
{
    /// Create a generator producing values with `produce` for fields
    /// accepted by `matcher`.
    pub fn new(matcher: Matcher, produce: F) -> Self {
        Self { matcher, produce }
    }
}

impl<F> Generator for FnGenerator<F>
where
    F: Fn(&FillContext) -> Value + Send + Sync,
{
    fn matches(&self, field: &FieldDescriptor) -> bool {
        self.matcher.matches(field)
    }

    fn next(&self, context: &FillContext) -> Value {
        (self.produce)(context)
    }
}
