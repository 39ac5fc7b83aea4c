//! Priority-ordered generator registry.
//!
//! Entries are kept in registration order. [`GeneratorRegistry::sorted`]
//! produces the view the engine walks: descending priority, ties in
//! registration order.

use fill_core::Generator;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::Arc;

/// Precedence of a registration. Higher priorities are consulted first.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    Lowest,
    Low,
    #[default]
    Normal,
    High,
    Highest,
}

impl Priority {
    /// Numeric weight of this priority.
    pub fn value(self) -> u8 {
        match self {
            Self::Lowest => 0,
            Self::Low => 1,
            Self::Normal => 2,
            Self::High => 3,
            Self::Highest => 4,
        }
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Lowest => "lowest",
            Self::Low => "low",
            Self::Normal => "normal",
            Self::High => "high",
            Self::Highest => "highest",
        };
        f.write_str(name)
    }
}

/// A generator registration.
#[derive(Clone)]
pub struct RegistryEntry {
    pub generator: Arc<dyn Generator>,
    pub priority: Priority,
}

impl fmt::Debug for RegistryEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RegistryEntry")
            .field("priority", &self.priority)
            .finish_non_exhaustive()
    }
}

/// Ordered collection of generator registrations.
#[derive(Debug, Clone, Default)]
pub struct GeneratorRegistry {
    entries: Vec<RegistryEntry>,
}

impl GeneratorRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append one registration.
    pub fn register(&mut self, generator: Arc<dyn Generator>, priority: Priority) {
        self.entries.push(RegistryEntry {
            generator,
            priority,
        });
    }

    /// Append one registration per generator, all at the same priority.
    pub fn register_batch<I>(&mut self, generators: I, priority: Priority)
    where
        I: IntoIterator<Item = Arc<dyn Generator>>,
    {
        self.entries
            .extend(generators.into_iter().map(|generator| RegistryEntry {
                generator,
                priority,
            }));
    }

    /// Registrations ordered by descending priority.
    ///
    /// The sort is stable, so equal priorities keep registration order.
    pub fn sorted(&self) -> Vec<RegistryEntry> {
        let mut entries = self.entries.clone();
        entries.sort_by(|a, b| b.priority.cmp(&a.priority));
        entries
    }

    /// Reset the sequence state of every registered generator.
    pub fn reset(&self) {
        for entry in &self.entries {
            entry.generator.reset();
        }
    }

    /// Number of registrations.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check whether nothing is registered.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Remove every registration.
    pub fn clear(&mut self) {
        self.entries.clear();
    }
}
