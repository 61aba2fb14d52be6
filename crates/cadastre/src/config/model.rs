//! Configuration data model.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// A named logical partition of a repository.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AreaDefinition {
    /// What this area covers, in a sentence.
    #[serde(default)]
    pub description: String,

    /// Glob patterns for paths this area owns, in declaration order.
    #[serde(default, rename = "included_paths")]
    pub included_patterns: Vec<String>,

    /// Glob patterns carving exceptions out of the included set. An exclude
    /// pattern never removes a path that was not already included.
    #[serde(default, rename = "excluded_paths")]
    pub excluded_patterns: Vec<String>,

    /// Guidance text used when summarizing this area.
    #[serde(default)]
    pub prompt: String,
}

impl AreaDefinition {
    /// Create an area with a description and nothing else.
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
            ..Self::default()
        }
    }

    /// Add an include pattern.
    pub fn with_included(mut self, pattern: impl Into<String>) -> Self {
        self.included_patterns.push(pattern.into());
        self
    }

    /// Add an exclude pattern.
    pub fn with_excluded(mut self, pattern: impl Into<String>) -> Self {
        self.excluded_patterns.push(pattern.into());
        self
    }

    /// Set the area prompt.
    pub fn with_prompt(mut self, prompt: impl Into<String>) -> Self {
        self.prompt = prompt.into();
        self
    }
}

/// The full area configuration for one project.
///
/// Area names are the map keys, so they are unique by construction; the
/// `IndexMap` keeps declaration order stable across load/save round-trips.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProjectConfig {
    /// Human-readable project name.
    pub project_name: String,

    /// Guidance text used when no area-specific prompt applies.
    pub default_prompt: String,

    /// Areas keyed by name, in declaration order.
    pub areas: IndexMap<String, AreaDefinition>,
}

impl ProjectConfig {
    /// Create an empty configuration for a named project.
    pub fn new(project_name: impl Into<String>) -> Self {
        Self {
            project_name: project_name.into(),
            ..Self::default()
        }
    }

    /// Set the default prompt.
    pub fn with_default_prompt(mut self, prompt: impl Into<String>) -> Self {
        self.default_prompt = prompt.into();
        self
    }

    /// Add an area definition.
    pub fn with_area(mut self, name: impl Into<String>, area: AreaDefinition) -> Self {
        self.areas.insert(name.into(), area);
        self
    }

    /// Look up an area by name.
    pub fn area(&self, name: &str) -> Option<&AreaDefinition> {
        self.areas.get(name)
    }
}
