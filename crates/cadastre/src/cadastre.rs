//! Main Cadastre struct and public API.

use std::sync::Arc;

use crate::areas::AreaResolver;
use crate::classify::{self, ClassificationSuggester, ContentProvider, MergeOutcome};
use crate::config::ProjectConfig;
use crate::error::{CadastreError, Result};
use crate::extract::{self, ExtractionResult};
use crate::llm::{prompts, LlmProvider};

/// Tunable settings for Cadastre operations.
#[derive(Debug, Clone)]
pub struct CadastreConfig {
    /// Minimum suggestion confidence required for auto-merging a
    /// classification into the configuration.
    pub confidence_threshold: f64,
}

impl Default for CadastreConfig {
    fn default() -> Self {
        Self {
            confidence_threshold: 0.8,
        }
    }
}

/// The main entry point tying classification and summarization together.
pub struct Cadastre {
    config: CadastreConfig,
    provider: Option<Arc<dyn LlmProvider>>,
}

impl Cadastre {
    /// Create a Cadastre instance with default configuration.
    pub fn new() -> Self {
        Self::with_config(CadastreConfig::default())
    }

    /// Create a Cadastre instance with custom configuration.
    pub fn with_config(config: CadastreConfig) -> Self {
        Self {
            config,
            provider: None,
        }
    }

    /// Attach a text-generation provider.
    pub fn with_llm(mut self, provider: impl LlmProvider + 'static) -> Self {
        self.provider = Some(Arc::new(provider));
        self
    }

    /// Classify the uncategorized paths of `all_paths` into `project`'s
    /// areas and merge the high-confidence suggestions in place.
    ///
    /// The caller persists the mutated configuration afterwards; skipped
    /// suggestions come back in the outcome for reporting.
    pub fn classify(
        &self,
        project: &mut ProjectConfig,
        all_paths: &[String],
        content: &dyn ContentProvider,
    ) -> Result<MergeOutcome> {
        let provider = self.provider()?;

        let resolver = AreaResolver::new(project);
        let uncategorized = resolver.find_uncategorized(all_paths.iter().map(String::as_str));
        if uncategorized.is_empty() {
            log::info!("every path is categorized; skipping the classification request");
            return Ok(MergeOutcome::default());
        }

        let suggester = ClassificationSuggester::new(provider.as_ref());
        let suggestions = suggester.suggest(&uncategorized, &project.areas, content)?;

        Ok(classify::merge(
            project,
            suggestions,
            self.config.confidence_threshold,
        ))
    }

    /// Generate and extract the artifact pair for one packed repository
    /// document under `prompt` guidance.
    ///
    /// Transport failures propagate; the caller converts them into the
    /// fallback artifact pair.
    pub fn summarize(&self, packed: &str, prompt: &str) -> Result<ExtractionResult> {
        let provider = self.provider()?;

        let system = format!("{}\n\n{}", prompt, prompts::summary_format_instructions());
        let reply = provider.generate(&system, packed)?;

        Ok(extract::extract(&reply))
    }

    fn provider(&self) -> Result<&Arc<dyn LlmProvider>> {
        self.provider.as_ref().ok_or_else(|| {
            CadastreError::Config("no text-generation provider configured".to_string())
        })
    }
}

impl Default for Cadastre {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    use crate::config::AreaDefinition;
    use crate::llm::MockProvider;

    fn test_project() -> ProjectConfig {
        ProjectConfig::new("demo").with_area(
            "api",
            AreaDefinition::new("HTTP layer").with_included("src/api/**"),
        )
    }

    #[test]
    fn test_classify_without_provider_is_config_error() {
        let cadastre = Cadastre::new();
        let mut project = test_project();
        let content: HashMap<String, String> = HashMap::new();

        let err = cadastre
            .classify(&mut project, &["x.rs".to_string()], &content)
            .unwrap_err();
        assert!(matches!(err, CadastreError::Config(_)));
    }

    #[test]
    fn test_classify_merges_high_confidence_suggestions() {
        let cadastre = Cadastre::new().with_llm(MockProvider::new().with_reply(
            r#"[{"path": "scripts/run.sh", "category": "api", "confidence": 0.95, "reasoning": "r"}]"#,
        ));
        let mut project = test_project();
        let content: HashMap<String, String> = HashMap::new();

        let outcome = cadastre
            .classify(
                &mut project,
                &["src/api/mod.rs".to_string(), "scripts/run.sh".to_string()],
                &content,
            )
            .unwrap();

        assert_eq!(outcome.applied.len(), 1);
        assert!(project.areas["api"]
            .included_patterns
            .contains(&"scripts/run.sh".to_string()));
    }

    #[test]
    fn test_classify_with_no_gaps_skips_the_request() {
        // The canned reply would be applied if a request were made; it is not.
        let cadastre = Cadastre::new().with_llm(MockProvider::new().with_reply(
            r#"[{"path": "src/api/mod.rs", "category": "api", "confidence": 1.0, "reasoning": "r"}]"#,
        ));
        let mut project = test_project();
        let content: HashMap<String, String> = HashMap::new();

        let outcome = cadastre
            .classify(&mut project, &["src/api/mod.rs".to_string()], &content)
            .unwrap();

        assert!(outcome.is_empty());
        assert_eq!(project, test_project());
    }

    #[test]
    fn test_summarize_extracts_artifact_pair() {
        let cadastre = Cadastre::new().with_llm(MockProvider::new());
        let result = cadastre.summarize("packed repo", "Summarize").unwrap();

        assert!(!result.narrative.is_empty());
        assert!(result.structured.starts_with("<?xml"));
    }
}
