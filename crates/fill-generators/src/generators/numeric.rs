//! Numeric value generators.

use crate::GeneratorError;
use fill_core::{FieldDescriptor, FillContext, Generator, TypeKind, Value};
use rand::distr::Uniform;
use rand::Rng;

/// Random integers in an inclusive range.
///
/// Matches every integer field. Values that do not fit the field's width are
/// rejected at assignment, so keep the range within the narrowest integer
/// type it is bound to.
#[derive(Debug, Clone)]
pub struct IntRangeGenerator {
    min: i64,
    max: i64,
}

impl Default for IntRangeGenerator {
    fn default() -> Self {
        Self { min: 0, max: 100 }
    }
}

impl IntRangeGenerator {
    /// Create a generator for `min..=max`.
    pub fn new(min: i64, max: i64) -> Result<Self, GeneratorError> {
        if min > max {
            return Err(GeneratorError::invalid_range(min, max));
        }
        Ok(Self { min, max })
    }
}

impl Generator for IntRangeGenerator {
    fn matches(&self, field: &FieldDescriptor) -> bool {
        field.ty.kind == TypeKind::Integer
    }

    fn next(&self, _context: &FillContext) -> Value {
        Value::Int(rand::rng().random_range(self.min..=self.max))
    }
}

/// Random floats in an inclusive range.
///
/// Matches `f32` and `f64` fields.
#[derive(Debug, Clone)]
pub struct FloatRangeGenerator {
    range: Uniform<f64>,
}

impl FloatRangeGenerator {
    /// Create a generator for `min..=max`.
    ///
    /// Fails unless both bounds are finite, ordered, and far enough apart
    /// to be sampled without overflow.
    pub fn new(min: f64, max: f64) -> Result<Self, GeneratorError> {
        let range =
            Uniform::new_inclusive(min, max).map_err(|_| GeneratorError::invalid_range(min, max))?;
        Ok(Self { range })
    }
}

impl Generator for FloatRangeGenerator {
    fn matches(&self, field: &FieldDescriptor) -> bool {
        field.ty.kind == TypeKind::Float
    }

    fn next(&self, _context: &FillContext) -> Value {
        Value::Float(rand::rng().sample(self.range))
    }
}
