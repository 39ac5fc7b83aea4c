//! Value generators for the fixture-fill test data generator.
//!
//! This crate provides the catalog of concrete [`Generator`](fill_core::Generator)
//! implementations and [`GeneratorConfig`], their declarative YAML form.
//!
//! # Example
//!
//! ```rust
//! use fill_core::{FillContext, Generator, GeneratorExt, Matcher, Value};
//! use fill_generators::{GeneratorConfig, PatternGenerator};
//!
//! let emails = PatternGenerator::new("user_{index}@example.com")
//!     .with_matcher(Matcher::named("email"));
//! let context = FillContext::new();
//! assert_eq!(emails.next(&context), Value::from("user_0@example.com"));
//!
//! let ages = GeneratorConfig::IntRange { min: 18, max: 80 }.build().unwrap();
//! assert!(matches!(ages.next(&context), Value::Int(18..=80)));
//! ```
//!
//! # Generators
//!
//! The following generator types are supported:
//!
//! - `uuid_v4` - Random UUID v4
//! - `sequential` - Sequential integers
//! - `pattern` - Pattern strings with placeholders (`{index}`, `{uuid}`, `{rand:N}`)
//! - `int_range` - Random integers in a range
//! - `float_range` - Random floats in a range
//! - `text` - Random alphanumeric strings
//! - `char` - Random alphanumeric characters
//! - `timestamp_range` - Random timestamps in a date range
//! - `timestamp_now` - The current time
//! - `weighted_bool` - Boolean with configurable true probability
//! - `one_of` - Random selection from a list
//! - `cycle` - Values from a list in order
//! - `static` - Static value
//! - `null` - Null value

pub mod config;
pub mod error;
pub mod generators;

// Re-exports for convenience
pub use config::GeneratorConfig;
pub use error::GeneratorError;
pub use generators::*;
