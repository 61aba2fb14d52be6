//! AI-assisted classification of uncategorized paths.

mod merger;
mod suggester;
mod suggestion;

pub use merger::{merge, MergeOutcome, SkipReason, SkippedSuggestion};
pub use suggester::{ClassificationSuggester, ContentProvider};
pub use suggestion::PathClassificationSuggestion;
