//! UUID value generator.

use fill_core::{FieldDescriptor, FillContext, Generator, Value};
use uuid::Uuid;

/// Random version 4 UUIDs.
///
/// Matches `Uuid` and `Option<Uuid>` fields.
#[derive(Debug, Clone, Default)]
pub struct UuidGenerator;

impl Generator for UuidGenerator {
    fn matches(&self, field: &FieldDescriptor) -> bool {
        field.ty.is::<Uuid>()
    }

    fn next(&self, _context: &FillContext) -> Value {
        Value::Uuid(Uuid::new_v4())
    }
}
