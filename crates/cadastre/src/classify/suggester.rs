//! Build classification requests and parse the service's replies.

use std::collections::HashMap;
use std::path::Path;

use indexmap::IndexMap;
use serde::Deserialize;

use crate::config::AreaDefinition;
use crate::error::Result;
use crate::llm::{prompts, LlmProvider};

use super::suggestion::PathClassificationSuggestion;

/// Maximum number of content samples attached to one request.
const MAX_SAMPLE_FILES: usize = 10;

/// Maximum lines taken from each sampled file.
const MAX_SAMPLE_LINES: usize = 50;

/// File extensions considered text-like enough to sample.
const TEXT_EXTENSIONS: &[&str] = &[
    "rs", "py", "js", "ts", "jsx", "tsx", "go", "java", "rb", "c", "h", "cpp", "hpp", "md", "txt",
    "toml", "yaml", "yml", "json", "ini", "cfg", "sh", "sql", "html", "css",
];

/// Source of file contents for request samples.
///
/// The filesystem implementation lives with the caller; tests use the
/// in-memory map implementation below.
pub trait ContentProvider {
    /// The contents of `path`, or `None` when it cannot be read.
    fn read(&self, path: &str) -> Option<String>;
}

impl ContentProvider for HashMap<String, String> {
    fn read(&self, path: &str) -> Option<String> {
        self.get(path).cloned()
    }
}

/// Builds one classification request per invocation and parses the reply.
pub struct ClassificationSuggester<'a> {
    provider: &'a dyn LlmProvider,
}

impl<'a> ClassificationSuggester<'a> {
    /// Create a suggester delegating to `provider`.
    pub fn new(provider: &'a dyn LlmProvider) -> Self {
        Self { provider }
    }

    /// Ask the provider to classify `uncategorized` paths into `areas`.
    ///
    /// One request carries the area definitions, the full path list, and a
    /// bounded set of content samples. An unparseable reply degrades to an
    /// empty suggestion list; only transport failures are errors.
    pub fn suggest(
        &self,
        uncategorized: &[String],
        areas: &IndexMap<String, AreaDefinition>,
        content: &dyn ContentProvider,
    ) -> Result<Vec<PathClassificationSuggestion>> {
        if uncategorized.is_empty() {
            return Ok(Vec::new());
        }

        let samples = collect_samples(uncategorized, content);
        let prompt = prompts::classification_prompt(areas, uncategorized, &samples);
        let reply = self
            .provider
            .generate(prompts::classification_system_prompt(), &prompt)?;

        Ok(parse_suggestions(&reply))
    }
}

/// Gather up to [`MAX_SAMPLE_FILES`] text-like files, truncated to
/// [`MAX_SAMPLE_LINES`] lines each, to keep the request bounded.
fn collect_samples(paths: &[String], content: &dyn ContentProvider) -> Vec<(String, String)> {
    let mut samples = Vec::new();

    for path in paths {
        if samples.len() >= MAX_SAMPLE_FILES {
            break;
        }
        if !is_text_like(path) {
            continue;
        }
        if let Some(text) = content.read(path) {
            let truncated = text
                .lines()
                .take(MAX_SAMPLE_LINES)
                .collect::<Vec<_>>()
                .join("\n");
            samples.push((path.clone(), truncated));
        }
    }

    samples
}

fn is_text_like(path: &str) -> bool {
    Path::new(path)
        .extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| TEXT_EXTENSIONS.iter().any(|t| ext.eq_ignore_ascii_case(t)))
}

/// Wire shape of one suggestion record in the classification reply.
#[derive(Debug, Deserialize)]
struct SuggestionRecord {
    path: String,
    category: String,
    #[serde(default)]
    confidence: f64,
    #[serde(default)]
    reasoning: String,
}

/// Parse the reply into suggestion records.
///
/// Tries, in order: a fenced `json` block, a fenced block without a
/// language tag, the whole reply as JSON. Anything unparseable yields an
/// empty list rather than an error.
fn parse_suggestions(reply: &str) -> Vec<PathClassificationSuggestion> {
    for candidate in json_candidates(reply) {
        if let Ok(records) = serde_json::from_str::<Vec<SuggestionRecord>>(candidate.trim()) {
            return records
                .into_iter()
                .map(|record| PathClassificationSuggestion {
                    path: record.path,
                    area: record.category,
                    confidence: record.confidence.clamp(0.0, 1.0),
                    reasoning: record.reasoning,
                })
                .collect();
        }
    }

    log::warn!("classification reply did not contain a parseable JSON array");
    Vec::new()
}

/// Candidate JSON spans, in fallback order.
fn json_candidates(reply: &str) -> Vec<&str> {
    let mut candidates = Vec::new();
    if let Some(block) = fenced_block(reply, "```json") {
        candidates.push(block);
    }
    if let Some(block) = fenced_block(reply, "```") {
        candidates.push(block);
    }
    candidates.push(reply);
    candidates
}

fn fenced_block<'t>(text: &'t str, fence: &str) -> Option<&'t str> {
    text.split(fence)
        .nth(1)
        .and_then(|rest| rest.split("```").next())
}
