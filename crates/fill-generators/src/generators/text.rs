//! Random text generators.

use crate::GeneratorError;
use fill_core::{FieldDescriptor, FillContext, Generator, TypeKind, Value};
use rand::distr::Alphanumeric;
use rand::Rng;

/// Random alphanumeric strings with a length in an inclusive range.
///
/// Matches `String` and `Option<String>` fields.
#[derive(Debug, Clone)]
pub struct TextGenerator {
    min_length: usize,
    max_length: usize,
}

impl Default for TextGenerator {
    fn default() -> Self {
        Self {
            min_length: 8,
            max_length: 16,
        }
    }
}

impl TextGenerator {
    /// Create a generator for strings of `min_length..=max_length` characters.
    pub fn new(min_length: usize, max_length: usize) -> Result<Self, GeneratorError> {
        if min_length > max_length {
            return Err(GeneratorError::invalid_range(min_length, max_length));
        }
        Ok(Self {
            min_length,
            max_length,
        })
    }
}

impl Generator for TextGenerator {
    fn matches(&self, field: &FieldDescriptor) -> bool {
        field.ty.kind == TypeKind::Text
    }

    fn next(&self, _context: &FillContext) -> Value {
        let mut rng = rand::rng();
        let length = rng.random_range(self.min_length..=self.max_length);
        let text: String = (&mut rng)
            .sample_iter(Alphanumeric)
            .take(length)
            .map(char::from)
            .collect();
        Value::String(text)
    }
}

/// Random alphanumeric characters.
///
/// Matches `char` and `Option<char>` fields.
#[derive(Debug, Clone, Default)]
pub struct CharGenerator;

impl Generator for CharGenerator {
    fn matches(&self, field: &FieldDescriptor) -> bool {
        field.ty.kind == TypeKind::Char
    }

    fn next(&self, _context: &FillContext) -> Value {
        Value::Char(char::from(rand::rng().sample(Alphanumeric)))
    }
}
