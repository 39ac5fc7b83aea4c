//! Population engine.
//!
//! [`RandomData`] owns the generator registry and walks target values:
//! arrays get absent slots constructed, sequences have their existing
//! elements filled, and records are filled field by field. For each field
//! the first matching generator (in priority order) whose value the field
//! accepts wins; unmatched leaf fields are left alone and any other
//! unmatched field is constructed and filled recursively.

use crate::config::{ConfigError, FillConfig};
use crate::executor::{FillError, FillExecutor, OnFillCompleted};
use crate::registry::{GeneratorRegistry, Priority, RegistryEntry};
use fill_core::{
    ActiveRecord, ConstructionError, FieldDescriptor, FillContext, Fillable, Generator, Record,
    Shape, TypeKind, DEFAULT_MAX_RECURSION,
};
use parking_lot::Mutex;
use std::sync::Arc;
use tracing::{debug, trace, warn};

/// Random test data generator.
#[derive(Debug, Clone)]
pub struct RandomData {
    registry: GeneratorRegistry,
    max_recursion: usize,
}

impl Default for RandomData {
    fn default() -> Self {
        Self::new()
    }
}

impl RandomData {
    /// Create an engine with no generators.
    pub fn new() -> Self {
        Self {
            registry: GeneratorRegistry::new(),
            max_recursion: DEFAULT_MAX_RECURSION,
        }
    }

    /// Build an engine from a loaded configuration.
    pub fn from_config(config: &FillConfig) -> Result<Self, ConfigError> {
        let mut engine = Self::new().with_max_recursion(config.max_recursion);
        for binding in &config.generators {
            engine.add_shared(binding.build()?, binding.priority);
        }
        Ok(engine)
    }

    /// Set how many times a record type may appear on the active path before
    /// no further values of it are constructed.
    pub fn with_max_recursion(mut self, max_recursion: usize) -> Self {
        self.max_recursion = max_recursion;
        self
    }

    /// Register a generator at normal priority.
    pub fn add_generator<G: Generator + 'static>(&mut self, generator: G) -> &mut Self {
        self.add_generator_with_priority(generator, Priority::Normal)
    }

    /// Register a generator at the given priority.
    pub fn add_generator_with_priority<G: Generator + 'static>(
        &mut self,
        generator: G,
        priority: Priority,
    ) -> &mut Self {
        self.add_shared(Arc::new(generator), priority)
    }

    /// Register an already shared generator.
    pub fn add_shared(&mut self, generator: Arc<dyn Generator>, priority: Priority) -> &mut Self {
        self.registry.register(generator, priority);
        self
    }

    /// Register several generators at normal priority.
    pub fn add_generators<I>(&mut self, generators: I) -> &mut Self
    where
        I: IntoIterator<Item = Arc<dyn Generator>>,
    {
        self.add_generators_with_priority(generators, Priority::Normal)
    }

    /// Register several generators at the same priority, keeping their order.
    pub fn add_generators_with_priority<I>(&mut self, generators: I, priority: Priority) -> &mut Self
    where
        I: IntoIterator<Item = Arc<dyn Generator>>,
    {
        self.registry.register_batch(generators, priority);
        self
    }

    /// The underlying registry.
    pub fn registry(&self) -> &GeneratorRegistry {
        &self.registry
    }

    /// Construct a `T` with its default constructor and fill it.
    pub fn generate<T: Fillable>(&self) -> Result<T, ConstructionError> {
        let mut value = T::construct()?;
        self.fill(&mut value);
        Ok(value)
    }

    /// Generate `size` independent values.
    pub fn generate_array<T: Fillable>(&self, size: usize) -> Result<Box<[T]>, ConstructionError> {
        (0..size).map(|_| self.generate()).collect()
    }

    /// Generate `size` independent values.
    pub fn generate_list<T: Fillable>(&self, size: usize) -> Result<Vec<T>, ConstructionError> {
        (0..size).map(|_| self.generate()).collect()
    }

    /// Fill `target` in place with a fresh context.
    pub fn fill(&self, target: &mut dyn Fillable) {
        let mut context = FillContext::with_max_recursion(self.max_recursion);
        self.fill_with_context(target, &mut context);
    }

    /// Fill `target` in place, threading the given context through.
    pub fn fill_with_context(&self, target: &mut dyn Fillable, context: &mut FillContext) {
        let entries = self.registry.sorted();
        Walk::new(&entries).fill(target, context);
    }

    /// Fill `target` on the background pool and call `on_complete` when done.
    ///
    /// Returns as soon as the job is queued. The registry is snapshotted
    /// first, so registrations made afterwards do not affect this fill.
    pub fn fill_async<T: Fillable>(
        &self,
        target: Arc<Mutex<T>>,
        on_complete: Option<OnFillCompleted>,
    ) -> Result<(), FillError> {
        let entries = self.registry.sorted();
        let max_recursion = self.max_recursion;
        FillExecutor::global()?.submit(move || {
            {
                let mut target = target.lock();
                let mut context = FillContext::with_max_recursion(max_recursion);
                Walk::new(&entries).fill(&mut *target, &mut context);
            }
            if let Some(on_complete) = on_complete {
                on_complete();
            }
        });
        Ok(())
    }

    /// Reset the sequence state of every registered generator.
    pub fn reset(&self) {
        self.registry.reset();
    }
}

/// One traversal over a sorted registry snapshot.
struct Walk<'r> {
    entries: &'r [RegistryEntry],
}

impl<'r> Walk<'r> {
    fn new(entries: &'r [RegistryEntry]) -> Self {
        Self { entries }
    }

    fn fill(&self, target: &mut dyn Fillable, context: &mut FillContext) {
        match target.shape() {
            Shape::Leaf | Shape::Absent => {}
            Shape::Array(elements) => {
                for element in elements {
                    self.fill_array_slot(element, context);
                }
            }
            Shape::Sequence(elements) => {
                for element in elements {
                    self.fill(element, context);
                }
            }
            Shape::Record(record) => self.fill_record(record, context),
        }
    }

    fn fill_array_slot(&self, slot: &mut dyn Fillable, context: &mut FillContext) {
        if slot.is_absent() && !self.construct(slot, context) {
            return;
        }
        self.fill(slot, context);
    }

    fn fill_record(&self, record: &mut dyn Record, context: &mut FillContext) {
        let active = ActiveRecord::of(record);
        if context.is_active(&active.identity) {
            debug!(
                record = active.type_desc.short_name(),
                path = ?context.path(),
                "Record is already being filled, skipping re-entry"
            );
            return;
        }

        let mut scope = context.enter(active);
        for field in record.fields() {
            if let Some(slot) = record.field_mut(field.name) {
                self.fill_field(slot, &field, &mut scope);
            }
        }
    }

    fn fill_field(&self, slot: &mut dyn Fillable, field: &FieldDescriptor, context: &mut FillContext) {
        for entry in self.entries {
            if !entry.generator.matches(field) {
                continue;
            }
            let value = entry.generator.next(context);
            match slot.assign(value) {
                Ok(()) => {
                    trace!(field = %field, priority = %entry.priority, "Field filled by generator");
                    return;
                }
                Err(e) => {
                    debug!(field = %field, error = %e, "Generated value rejected, trying next generator");
                }
            }
        }

        if field.ty.is_leaf() {
            return;
        }

        // Containers that already exist are filled in place so their
        // elements survive.
        let in_place = matches!(field.ty.kind, TypeKind::Array | TypeKind::Sequence)
            && !slot.is_absent();
        if in_place || self.construct(slot, context) {
            self.fill(slot, context);
        }
    }

    /// Replace `slot` with a freshly constructed value. Returns whether the
    /// slot now holds one.
    fn construct(&self, slot: &mut dyn Fillable, context: &FillContext) -> bool {
        let desc = slot.type_desc();
        if !context.allows_nested(&desc) {
            debug!(
                ty = desc.short_name(),
                max_recursion = context.max_recursion(),
                "Recursion limit reached, not constructing nested value"
            );
            return false;
        }
        match slot.reconstruct() {
            Ok(()) => true,
            Err(e) => {
                warn!(ty = desc.declared_name, error = %e, "Failed to construct value, leaving slot unset");
                false
            }
        }
    }
}
