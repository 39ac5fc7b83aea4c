//! Per-call traversal state.
//!
//! A `FillContext` lives for exactly one top-level fill. It records the
//! chain of records currently being filled so the engine can refuse to
//! re-enter a record that is already in progress and can stop constructing
//! new values for self-referential types.

use crate::record::Record;
use crate::types::TypeDesc;
use std::any::TypeId;
use std::ops::{Deref, DerefMut};

/// Default number of times a record type may appear on the active path
/// before no further values of that type are constructed.
pub const DEFAULT_MAX_RECURSION: usize = 2;

/// Identity of a live record: its address plus its type.
///
/// The type is part of the identity because a struct and its first field
/// share an address.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RecordIdentity {
    address: usize,
    type_id: TypeId,
}

impl RecordIdentity {
    /// Identity of the given record.
    pub fn of(record: &dyn Record) -> Self {
        Self {
            address: record as *const dyn Record as *const () as usize,
            type_id: record.record_type().id,
        }
    }
}

/// A record on the active path.
#[derive(Debug, Clone, Copy)]
pub struct ActiveRecord {
    pub identity: RecordIdentity,
    pub type_desc: TypeDesc,
}

impl ActiveRecord {
    /// Describe the given record for the active path.
    pub fn of(record: &dyn Record) -> Self {
        Self {
            identity: RecordIdentity::of(record),
            type_desc: record.record_type(),
        }
    }
}

/// Mutable traversal state threaded through one top-level fill.
#[derive(Debug, Clone)]
pub struct FillContext {
    active: Vec<ActiveRecord>,
    max_recursion: usize,
}

impl Default for FillContext {
    fn default() -> Self {
        Self::new()
    }
}

impl FillContext {
    /// Create an empty context with the default recursion limit.
    pub fn new() -> Self {
        Self::with_max_recursion(DEFAULT_MAX_RECURSION)
    }

    /// Create an empty context with the given recursion limit.
    pub fn with_max_recursion(max_recursion: usize) -> Self {
        Self {
            active: Vec::new(),
            max_recursion,
        }
    }

    /// Number of records currently being filled.
    pub fn depth(&self) -> usize {
        self.active.len()
    }

    /// The recursion limit of this context.
    pub fn max_recursion(&self) -> usize {
        self.max_recursion
    }

    /// The innermost record being filled, i.e. the owner of the current field.
    pub fn current(&self) -> Option<&ActiveRecord> {
        self.active.last()
    }

    /// Short type names of the active path, outermost first.
    pub fn path(&self) -> Vec<&'static str> {
        self.active
            .iter()
            .map(|record| record.type_desc.short_name())
            .collect()
    }

    /// Whether the given record is already being filled.
    pub fn is_active(&self, identity: &RecordIdentity) -> bool {
        self.active.iter().any(|record| record.identity == *identity)
    }

    /// How many records of the given type are on the active path.
    pub fn type_depth(&self, type_id: TypeId) -> usize {
        self.active
            .iter()
            .filter(|record| record.type_desc.id == type_id)
            .count()
    }

    /// Whether a new value of the described type may be constructed here.
    ///
    /// Only record types are limited; everything else is always allowed.
    pub fn allows_nested(&self, desc: &TypeDesc) -> bool {
        desc.kind != crate::types::TypeKind::Record
            || self.type_depth(desc.id) < self.max_recursion
    }

    /// Push a record onto the active path for the lifetime of the returned
    /// scope.
    pub fn enter(&mut self, record: ActiveRecord) -> ActiveScope<'_> {
        let saved_depth = self.active.len();
        self.active.push(record);
        ActiveScope {
            context: self,
            saved_depth,
        }
    }
}

/// Guard restoring the active path to its saved depth when dropped.
///
/// Dereferences to the context so recursion can continue through it.
pub struct ActiveScope<'a> {
    context: &'a mut FillContext,
    saved_depth: usize,
}

impl Deref for ActiveScope<'_> {
    type Target = FillContext;

    fn deref(&self) -> &Self::Target {
        self.context
    }
}

impl DerefMut for ActiveScope<'_> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        self.context
    }
}

impl Drop for ActiveScope<'_> {
    fn drop(&mut self) {
        self.context.active.truncate(self.saved_depth);
    }
}
