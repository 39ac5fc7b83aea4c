//! Sequence-based generators.
//!
//! These keep a cursor that advances on every `next` and returns to its
//! initial position on `reset`.

use crate::GeneratorError;
use fill_core::{FieldDescriptor, FillContext, Generator, Matcher, TypeKind, Value};
use std::sync::atomic::{AtomicI64, AtomicUsize, Ordering};

/// Sequential integers starting at `start`.
///
/// Matches every integer field.
#[derive(Debug)]
pub struct SequentialGenerator {
    start: i64,
    next: AtomicI64,
}

impl Default for SequentialGenerator {
    fn default() -> Self {
        Self::new(0)
    }
}

impl SequentialGenerator {
    /// Create a sequence starting at `start`.
    pub fn new(start: i64) -> Self {
        Self {
            start,
            next: AtomicI64::new(start),
        }
    }
}

impl Generator for SequentialGenerator {
    fn matches(&self, field: &FieldDescriptor) -> bool {
        field.ty.kind == TypeKind::Integer
    }

    fn next(&self, _context: &FillContext) -> Value {
        Value::Int(self.next.fetch_add(1, Ordering::SeqCst))
    }

    fn reset(&self) {
        self.next.store(self.start, Ordering::SeqCst);
    }
}

/// Cycles through a fixed list of values in order.
///
/// Matches no field until bound with `with_matcher`, unless created with
/// [`CycleGenerator::for_fields`].
#[derive(Debug)]
pub struct CycleGenerator {
    values: Vec<Value>,
    cursor: AtomicUsize,
    matcher: Matcher,
}

impl CycleGenerator {
    /// Create a cycle over `values`.
    pub fn new(values: Vec<Value>) -> Result<Self, GeneratorError> {
        Self::for_fields(values, Matcher::none())
    }

    /// Create a cycle over `values` applying to fields accepted by `matcher`.
    pub fn for_fields(values: Vec<Value>, matcher: Matcher) -> Result<Self, GeneratorError> {
        if values.is_empty() {
            return Err(GeneratorError::EmptyPool);
        }
        Ok(Self {
            values,
            cursor: AtomicUsize::new(0),
            matcher,
        })
    }
}

impl Generator for CycleGenerator {
    fn matches(&self, field: &FieldDescriptor) -> bool {
        self.matcher.matches(field)
    }

    fn next(&self, _context: &FillContext) -> Value {
        let position = self.cursor.fetch_add(1, Ordering::SeqCst);
        self.values[position % self.values.len()].clone()
    }

    fn reset(&self) {
        self.cursor.store(0, Ordering::SeqCst);
    }
}
