//! Concrete value generators.
//!
//! Each generator produces one kind of value and carries a default matcher
//! for the field types it naturally applies to. Pool-based generators match
//! nothing until they are bound to fields with
//! [`GeneratorExt::with_matcher`](fill_core::GeneratorExt::with_matcher).

pub mod boolean;
pub mod numeric;
pub mod pattern;
pub mod sequence;
pub mod static_value;
pub mod text;
pub mod timestamp;
pub mod uuid;

pub use boolean::BooleanGenerator;
pub use numeric::{FloatRangeGenerator, IntRangeGenerator};
pub use pattern::PatternGenerator;
pub use sequence::{CycleGenerator, SequentialGenerator};
pub use static_value::{yaml_to_value, ConstantGenerator, OneOfGenerator};
pub use text::{CharGenerator, TextGenerator};
pub use timestamp::{TimestampNowGenerator, TimestampRangeGenerator};
pub use self::uuid::UuidGenerator;
