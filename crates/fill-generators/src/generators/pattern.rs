//! Pattern-based string generator.
//!
//! Supports placeholders:
//! - `{index}` - number of values produced since the last reset
//! - `{uuid}` - random UUID
//! - `{rand:N}` - random N-digit number

use fill_core::{FieldDescriptor, FillContext, Generator, TypeKind, Value};
use rand::Rng;
use std::sync::atomic::{AtomicU64, Ordering};
use uuid::Uuid;

/// Strings built from a pattern with placeholders.
///
/// Matches `String` fields.
#[derive(Debug)]
pub struct PatternGenerator {
    pattern: String,
    index: AtomicU64,
}

impl PatternGenerator {
    /// Create a generator for the given pattern.
    pub fn new(pattern: impl Into<String>) -> Self {
        Self {
            pattern: pattern.into(),
            index: AtomicU64::new(0),
        }
    }
}

impl Generator for PatternGenerator {
    fn matches(&self, field: &FieldDescriptor) -> bool {
        field.ty.kind == TypeKind::Text
    }

    fn next(&self, _context: &FillContext) -> Value {
        let index = self.index.fetch_add(1, Ordering::SeqCst);
        Value::String(expand_pattern(&self.pattern, &mut rand::rng(), index))
    }

    fn reset(&self) {
        self.index.store(0, Ordering::SeqCst);
    }
}

/// Expand the placeholders of a pattern.
pub fn expand_pattern<R: Rng>(pattern: &str, rng: &mut R, index: u64) -> String {
    let mut result = pattern.replace("{index}", &index.to_string());

    while result.contains("{uuid}") {
        result = result.replacen("{uuid}", &Uuid::new_v4().to_string(), 1);
    }

    // {rand:N}; a malformed placeholder stops expansion and is kept verbatim
    while let Some(start) = result.find("{rand:") {
        let Some(offset) = result[start..].find('}') else {
            break;
        };
        let end = start + offset;
        let Ok(digits) = result[start + 6..end].parse::<usize>() else {
            break;
        };
        let random_num = random_digits(rng, digits);
        result = format!("{}{}{}", &result[..start], random_num, &result[end + 1..]);
    }

    result
}

/// Generate a random number with exactly N digits.
fn random_digits<R: Rng>(rng: &mut R, digits: usize) -> String {
    if digits == 0 {
        return String::new();
    }

    let mut result = String::with_capacity(digits);

    // No leading zero
    result.push(char::from(b'0' + rng.random_range(1..10u8)));

    for _ in 1..digits {
        result.push(char::from(b'0' + rng.random_range(0..10u8)));
    }

    result
}
