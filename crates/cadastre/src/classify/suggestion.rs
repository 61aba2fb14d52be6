//! Suggestion records produced by the classification service.

use serde::{Deserialize, Serialize};

/// A proposed area assignment for one uncategorized path.
///
/// Created transiently from the service's reply and consumed by the merger;
/// only actionable when `area` names an existing area definition.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PathClassificationSuggestion {
    /// Repository-relative path being classified.
    pub path: String,

    /// Name of the target area.
    pub area: String,

    /// Confidence in the assignment (0.0-1.0).
    pub confidence: f64,

    /// Model-provided rationale for the assignment.
    pub reasoning: String,
}

impl PathClassificationSuggestion {
    /// Create a suggestion with zero confidence and no reasoning.
    pub fn new(path: impl Into<String>, area: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            area: area.into(),
            confidence: 0.0,
            reasoning: String::new(),
        }
    }

    /// Set the confidence, clamped into [0.0, 1.0].
    pub fn with_confidence(mut self, confidence: f64) -> Self {
        self.confidence = confidence.clamp(0.0, 1.0);
        self
    }

    /// Set the reasoning.
    pub fn with_reasoning(mut self, reasoning: impl Into<String>) -> Self {
        self.reasoning = reasoning.into();
        self
    }
}
