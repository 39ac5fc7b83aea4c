//! fixture-fill
//!
//! Populate arbitrary object graphs with plausible random values for tests.
//!
//! # Features
//!
//! - Pluggable generators selected by a predicate over field metadata
//! - Priority ordering with registration order breaking ties
//! - Recursive population of nested records, arrays and sequences
//! - Recursion guard for self-referential types
//! - Background fills on a small worker pool
//! - YAML configuration of generator bindings
//!
//! # Usage
//!
//! ```rust
//! use fixture_fill::fill_core::{impl_record, GeneratorExt, Matcher};
//! use fixture_fill::generators::{BooleanGenerator, PatternGenerator};
//! use fixture_fill::{Priority, RandomData};
//!
//! #[derive(Debug, Default)]
//! struct Account {
//!     email: String,
//!     active: bool,
//! }
//!
//! impl_record!(Account { email, active });
//!
//! let mut data = RandomData::new();
//! data.add_generator(BooleanGenerator::always(true));
//! data.add_generator_with_priority(
//!     PatternGenerator::new("user_{index}@example.com").with_matcher(Matcher::named("email")),
//!     Priority::High,
//! );
//!
//! let account: Account = data.generate().unwrap();
//! assert!(account.active);
//! assert_eq!(account.email, "user_0@example.com");
//! ```

pub mod config;
pub mod engine;
pub mod executor;
pub mod registry;

// Re-export the core and generator crates for convenience
pub use fill_core;
pub use fill_generators as generators;

pub use config::{ConfigError, FillConfig, GeneratorBinding, MatchRule};
pub use engine::RandomData;
pub use executor::{FillError, FillExecutor, OnFillCompleted, FILL_WORKERS};
pub use registry::{GeneratorRegistry, Priority, RegistryEntry};
