//! Fold classification suggestions into the area configuration.

use crate::config::ProjectConfig;

use super::suggestion::PathClassificationSuggestion;

/// Why a suggestion was not applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    /// Confidence fell below the caller's threshold.
    BelowThreshold,
    /// The suggested area does not exist in the configuration.
    UnknownArea,
}

/// A suggestion that was reported but not applied.
#[derive(Debug, Clone, PartialEq)]
pub struct SkippedSuggestion {
    pub suggestion: PathClassificationSuggestion,
    pub reason: SkipReason,
}

/// Result of one merge pass.
///
/// Skipped suggestions are retained for the caller's reporting, never
/// discarded silently.
#[derive(Debug, Clone, Default)]
pub struct MergeOutcome {
    pub applied: Vec<PathClassificationSuggestion>,
    pub skipped: Vec<SkippedSuggestion>,
}

impl MergeOutcome {
    /// Whether the pass saw no suggestions at all.
    pub fn is_empty(&self) -> bool {
        self.applied.is_empty() && self.skipped.is_empty()
    }
}

/// Apply `suggestions` to `config` under `confidence_threshold`.
///
/// A suggestion is applied only when its confidence reaches the threshold
/// (inclusive) and its area exists. Applying appends the path to the area's
/// included patterns unless already present, so merging the same suggestion
/// twice is a no-op. Paths already owned by another area are never removed
/// or reclassified; a path may end up in two areas' include lists.
///
/// The mutated configuration is persisted by the caller.
pub fn merge(
    config: &mut ProjectConfig,
    suggestions: Vec<PathClassificationSuggestion>,
    confidence_threshold: f64,
) -> MergeOutcome {
    let mut outcome = MergeOutcome::default();

    for suggestion in suggestions {
        if suggestion.confidence < confidence_threshold {
            log::debug!(
                "skipping '{}': confidence {:.2} below threshold {:.2}",
                suggestion.path,
                suggestion.confidence,
                confidence_threshold
            );
            outcome.skipped.push(SkippedSuggestion {
                suggestion,
                reason: SkipReason::BelowThreshold,
            });
            continue;
        }

        let Some(area) = config.areas.get_mut(&suggestion.area) else {
            log::debug!(
                "skipping '{}': unknown area '{}'",
                suggestion.path,
                suggestion.area
            );
            outcome.skipped.push(SkippedSuggestion {
                suggestion,
                reason: SkipReason::UnknownArea,
            });
            continue;
        };

        if !area.included_patterns.contains(&suggestion.path) {
            area.included_patterns.push(suggestion.path.clone());
        }
        outcome.applied.push(suggestion);
    }

    outcome
}
