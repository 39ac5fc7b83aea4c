//! YAML configuration for the population engine.
//!
//! ```yaml
//! max_recursion: 2
//! generators:
//!   - match: { field: email }
//!     priority: high
//!     generator: { type: pattern, pattern: "user_{index}@example.com" }
//!   - match: { type: bool }
//!     generator: { type: weighted_bool, true_weight: 0.8 }
//! ```
//!
//! Every key given under `match` must hold for a field to be matched.

use crate::registry::Priority;
use fill_core::{Generator, GeneratorExt, Matcher, TypeKind, DEFAULT_MAX_RECURSION};
use fill_generators::{GeneratorConfig, GeneratorError};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use std::sync::Arc;

/// Errors that can occur when loading or applying a configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Error reading config file
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    /// Error parsing YAML
    #[error("Failed to parse YAML: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// A binding has no match keys
    #[error("Generator binding #{0} has an empty match")]
    EmptyMatch(usize),

    /// A binding names a type kind that does not exist
    #[error("Unknown type kind '{0}'")]
    UnknownKind(String),

    /// A generator could not be built
    #[error("Invalid generator: {0}")]
    Generator(#[from] GeneratorError),
}

fn default_max_recursion() -> usize {
    DEFAULT_MAX_RECURSION
}

/// Engine configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FillConfig {
    /// Times a record type may appear on the active path before no further
    /// values of it are constructed
    #[serde(default = "default_max_recursion")]
    pub max_recursion: usize,

    /// Generator registrations, in registration order
    #[serde(default)]
    pub generators: Vec<GeneratorBinding>,
}

impl Default for FillConfig {
    fn default() -> Self {
        Self {
            max_recursion: DEFAULT_MAX_RECURSION,
            generators: Vec::new(),
        }
    }
}

impl FillConfig {
    /// Load configuration from a YAML file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path)?;
        Self::from_yaml(&content)
    }

    /// Parse configuration from a YAML string.
    pub fn from_yaml(yaml: &str) -> Result<Self, ConfigError> {
        let config: FillConfig = serde_yaml::from_str(yaml)?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        for (index, binding) in self.generators.iter().enumerate() {
            if binding.matcher.is_empty() {
                return Err(ConfigError::EmptyMatch(index));
            }
            binding.matcher.kind()?;
        }
        Ok(())
    }
}

/// One generator registration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeneratorBinding {
    /// Which fields the generator applies to
    #[serde(rename = "match")]
    pub matcher: MatchRule,

    /// Registration priority
    #[serde(default)]
    pub priority: Priority,

    /// The generator itself
    pub generator: GeneratorConfig,
}

impl GeneratorBinding {
    /// Build the generator, bound to this binding's match rule.
    pub fn build(&self) -> Result<Arc<dyn Generator>, ConfigError> {
        let matcher = self.matcher.to_matcher()?;
        let generator = self.generator.build()?;
        Ok(Arc::new(generator.with_matcher(matcher)))
    }
}

/// Field predicate in declarative form.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct MatchRule {
    /// Field name
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub field: Option<String>,

    /// Type name, short or fully qualified (`bool`, `String`, `User`)
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub type_name: Option<String>,

    /// Type kind (`integer`, `text`, `record`, ...)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,

    /// Field attribute tag
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub attribute: Option<String>,

    /// Name of the declaring record type
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub declared_in: Option<String>,
}

impl MatchRule {
    /// Check whether no key is set.
    pub fn is_empty(&self) -> bool {
        self.field.is_none()
            && self.type_name.is_none()
            && self.kind.is_none()
            && self.attribute.is_none()
            && self.declared_in.is_none()
    }

    fn kind(&self) -> Result<Option<TypeKind>, ConfigError> {
        self.kind
            .as_deref()
            .map(|kind| TypeKind::parse(kind).ok_or_else(|| ConfigError::UnknownKind(kind.to_string())))
            .transpose()
    }

    /// Convert into a matcher requiring every given key.
    pub fn to_matcher(&self) -> Result<Matcher, ConfigError> {
        let mut matcher = Matcher::any();
        if let Some(field) = &self.field {
            matcher = matcher.and(Matcher::named(field.clone()));
        }
        if let Some(type_name) = &self.type_name {
            matcher = matcher.and(Matcher::type_named(type_name.clone()));
        }
        if let Some(kind) = self.kind()? {
            matcher = matcher.and(Matcher::of_kind(kind));
        }
        if let Some(attribute) = &self.attribute {
            matcher = matcher.and(Matcher::with_attribute(attribute.clone()));
        }
        if let Some(declared_in) = &self.declared_in {
            matcher = matcher.and(Matcher::declared_in_named(declared_in.clone()));
        }
        Ok(matcher)
    }
}
