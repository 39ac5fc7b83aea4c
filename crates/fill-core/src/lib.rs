//! Core types for the fixture-fill test data generator.
//!
//! This crate provides the foundational types shared by the population
//! engine and the generator catalog:
//!
//! - [`Fillable`] - settable handle over a value of any supported type
//! - [`Record`] / [`impl_record!`] - field-descriptor table for structs
//! - [`FieldDescriptor`] / [`TypeDesc`] - metadata seen by matchers
//! - [`Value`] - raw generated values before assignment
//! - [`Generator`] / [`Matcher`] - the generator contract
//! - [`FillContext`] - per-call recursion guard
//!
//! # Architecture
//!
//! ```text
//! fill-core (this crate)
//!    │
//!    ├─── fill-generators  (catalog of concrete generators)
//!    │
//!    └─── fixture-fill     (registry, population engine, async facade)
//! ```

pub mod context;
pub mod error;
pub mod fillable;
pub mod generator;
pub mod record;
pub mod types;
pub mod values;

// Re-exports for convenience
pub use context::{ActiveRecord, ActiveScope, FillContext, RecordIdentity, DEFAULT_MAX_RECURSION};
pub use error::{AssignmentError, ConstructionError};
pub use fillable::{Elements, Fillable, Shape};
pub use generator::{FnGenerator, Generator, GeneratorExt, Matched, Matcher};
pub use record::Record;
pub use types::{FieldDescriptor, TypeDesc, TypeKind};
pub use values::Value;
