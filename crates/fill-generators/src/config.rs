//! Declarative generator configuration.
//!
//! `GeneratorConfig` describes one generator from the catalog in a form that
//! can be loaded from YAML:
//!
//! ```yaml
//! type: int_range
//! min: 18
//! max: 80
//! ```

use crate::generators::{
    yaml_to_value, BooleanGenerator, CharGenerator, ConstantGenerator, CycleGenerator,
    FloatRangeGenerator, IntRangeGenerator, OneOfGenerator, PatternGenerator,
    SequentialGenerator, TextGenerator, TimestampNowGenerator, TimestampRangeGenerator,
    UuidGenerator,
};
use crate::GeneratorError;
use fill_core::{Generator, Value};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Generator configuration.
///
/// This enum defines the different types of value generators available
/// for producing test data.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum GeneratorConfig {
    /// Generate UUIDs (v4)
    UuidV4,

    /// Generate sequential integers
    Sequential {
        /// Starting value
        #[serde(default)]
        start: i64,
    },

    /// Generate values using a pattern with placeholders
    Pattern {
        /// Pattern string (supports {index}, {uuid}, {rand:N})
        pattern: String,
    },

    /// Generate random integers in a range
    IntRange {
        /// Minimum value (inclusive)
        min: i64,
        /// Maximum value (inclusive)
        max: i64,
    },

    /// Generate random floats in a range
    FloatRange {
        /// Minimum value (inclusive)
        min: f64,
        /// Maximum value (inclusive)
        max: f64,
    },

    /// Generate random alphanumeric text
    Text {
        /// Minimum length in characters
        #[serde(default = "default_min_length")]
        min_length: usize,
        /// Maximum length in characters
        #[serde(default = "default_max_length")]
        max_length: usize,
    },

    /// Generate random alphanumeric characters
    Char,

    /// Generate random timestamps in a range
    TimestampRange {
        /// Start timestamp (RFC 3339 or YYYY-MM-DD)
        start: String,
        /// End timestamp (RFC 3339 or YYYY-MM-DD)
        end: String,
    },

    /// Generate the current timestamp
    TimestampNow,

    /// Generate booleans with a weighted probability
    WeightedBool {
        /// Probability of generating true (0.0 to 1.0)
        true_weight: f64,
    },

    /// Pick randomly from a list of values
    OneOf {
        /// Values to choose from
        values: Vec<serde_yaml::Value>,
    },

    /// Cycle through a list of values in order
    Cycle {
        /// Values to cycle through
        values: Vec<serde_yaml::Value>,
    },

    /// Always generate the same value
    Static {
        /// The value
        value: serde_yaml::Value,
    },

    /// Always generate null
    Null,
}

fn default_min_length() -> usize {
    8
}

fn default_max_length() -> usize {
    16
}

impl GeneratorConfig {
    /// Build the configured generator.
    pub fn build(&self) -> Result<Arc<dyn Generator>, GeneratorError> {
        let generator: Arc<dyn Generator> = match self {
            Self::UuidV4 => Arc::new(UuidGenerator),
            Self::Sequential { start } => Arc::new(SequentialGenerator::new(*start)),
            Self::Pattern { pattern } => Arc::new(PatternGenerator::new(pattern.clone())),
            Self::IntRange { min, max } => Arc::new(IntRangeGenerator::new(*min, *max)?),
            Self::FloatRange { min, max } => Arc::new(FloatRangeGenerator::new(*min, *max)?),
            Self::Text {
                min_length,
                max_length,
            } => Arc::new(TextGenerator::new(*min_length, *max_length)?),
            Self::Char => Arc::new(CharGenerator),
            Self::TimestampRange { start, end } => {
                Arc::new(TimestampRangeGenerator::parse(start, end)?)
            }
            Self::TimestampNow => Arc::new(TimestampNowGenerator),
            Self::WeightedBool { true_weight } => {
                Arc::new(BooleanGenerator::weighted(*true_weight)?)
            }
            Self::OneOf { values } => Arc::new(OneOfGenerator::new(yaml_to_values(values)?)?),
            Self::Cycle { values } => Arc::new(CycleGenerator::new(yaml_to_values(values)?)?),
            Self::Static { value } => Arc::new(ConstantGenerator::new(yaml_to_value(value)?)),
            Self::Null => Arc::new(ConstantGenerator::null()),
        };
        Ok(generator)
    }
}

fn yaml_to_values(values: &[serde_yaml::Value]) -> Result<Vec<Value>, GeneratorError> {
    values.iter().map(yaml_to_value).collect()
}
