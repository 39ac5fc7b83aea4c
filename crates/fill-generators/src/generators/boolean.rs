//! Boolean value generator.

use crate::GeneratorError;
use fill_core::{FieldDescriptor, FillContext, Generator, Value};
use rand::Rng;

/// Random booleans with a configurable probability of `true`.
///
/// Matches `bool` and `Option<bool>` fields.
#[derive(Debug, Clone)]
pub struct BooleanGenerator {
    true_weight: f64,
}

impl Default for BooleanGenerator {
    fn default() -> Self {
        Self { true_weight: 0.5 }
    }
}

impl BooleanGenerator {
    /// Fair coin.
    pub fn new() -> Self {
        Self::default()
    }

    /// `true` with the given probability.
    pub fn weighted(true_weight: f64) -> Result<Self, GeneratorError> {
        if !(0.0..=1.0).contains(&true_weight) {
            return Err(GeneratorError::InvalidWeight(true_weight));
        }
        Ok(Self { true_weight })
    }

    /// Always produce `value`.
    pub fn always(value: bool) -> Self {
        Self {
            true_weight: if value { 1.0 } else { 0.0 },
        }
    }
}

impl Generator for BooleanGenerator {
    fn matches(&self, field: &FieldDescriptor) -> bool {
        field.ty.is::<bool>()
    }

    fn next(&self, _context: &FillContext) -> Value {
        Value::Bool(rand::rng().random_bool(self.true_weight))
    }
}
