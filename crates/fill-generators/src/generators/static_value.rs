//! Fixed-value generators and YAML to `Value` conversion.

use crate::GeneratorError;
use fill_core::{FieldDescriptor, FillContext, Generator, Matcher, Value};
use rand::Rng;
use serde_yaml::Value as YamlValue;

/// Always produces the same value.
///
/// Matches no field until bound with `with_matcher`; [`ConstantGenerator::null`]
/// applies to every nullable field.
#[derive(Debug, Clone)]
pub struct ConstantGenerator {
    value: Value,
    matcher: Matcher,
}

impl ConstantGenerator {
    /// Create a generator for a fixed value.
    pub fn new(value: impl Into<Value>) -> Self {
        Self {
            value: value.into(),
            matcher: Matcher::none(),
        }
    }

    /// Clears nullable fields.
    pub fn null() -> Self {
        Self {
            value: Value::Null,
            matcher: Matcher::nullable(),
        }
    }
}

impl Generator for ConstantGenerator {
    fn matches(&self, field: &FieldDescriptor) -> bool {
        self.matcher.matches(field)
    }

    fn next(&self, _context: &FillContext) -> Value {
        self.value.clone()
    }
}

/// Random selection from a fixed pool of values.
///
/// Matches no field until bound with `with_matcher`.
#[derive(Debug, Clone)]
pub struct OneOfGenerator {
    values: Vec<Value>,
}

impl OneOfGenerator {
    /// Create a generator choosing among `values`.
    pub fn new(values: Vec<Value>) -> Result<Self, GeneratorError> {
        if values.is_empty() {
            return Err(GeneratorError::EmptyPool);
        }
        Ok(Self { values })
    }
}

impl Generator for OneOfGenerator {
    fn matches(&self, _field: &FieldDescriptor) -> bool {
        false
    }

    fn next(&self, _context: &FillContext) -> Value {
        let idx = rand::rng().random_range(0..self.values.len());
        self.values[idx].clone()
    }
}

/// Convert a YAML value to a `Value`.
///
/// Mappings have no `Value` counterpart and are rejected.
pub fn yaml_to_value(yaml: &YamlValue) -> Result<Value, GeneratorError> {
    match yaml {
        YamlValue::Null => Ok(Value::Null),
        YamlValue::Bool(b) => Ok(Value::Bool(*b)),
        YamlValue::Number(n) => {
            if let Some(i) = n.as_i64() {
                Ok(Value::Int(i))
            } else if let Some(u) = n.as_u64() {
                Ok(Value::UInt(u))
            } else if let Some(f) = n.as_f64() {
                Ok(Value::Float(f))
            } else {
                Err(GeneratorError::UnsupportedValue(n.to_string()))
            }
        }
        YamlValue::String(s) => Ok(Value::String(s.clone())),
        YamlValue::Sequence(items) => Ok(Value::List(
            items.iter().map(yaml_to_value).collect::<Result<_, _>>()?,
        )),
        YamlValue::Mapping(_) => Err(GeneratorError::UnsupportedValue(
            "mapping".to_string(),
        )),
        YamlValue::Tagged(tagged) => yaml_to_value(&tagged.value),
    }
}
