//! Prompt templates for classification and summarization requests.

use indexmap::IndexMap;

use crate::config::AreaDefinition;

/// System prompt for classification requests.
pub fn classification_system_prompt() -> &'static str {
    r#"You are a repository organization assistant for Cadastre, a tool that
maps repository paths to named project areas.

Your role is to assign uncategorized repository paths to the project areas
they belong to, based on the area descriptions, the existing path patterns,
and the file content samples provided.

Guidelines:
- Only use area names that are listed in the request
- Report a confidence between 0.0 and 1.0 for every assignment
- When no area fits a path, omit that path rather than guessing
- Always respond with valid JSON when requested"#
}

/// Build the single classification request for one batch of paths.
///
/// One request carries everything: the area definitions, the full
/// uncategorized path list, and the bounded content samples.
pub fn classification_prompt(
    areas: &IndexMap<String, AreaDefinition>,
    uncategorized: &[String],
    samples: &[(String, String)],
) -> String {
    let area_list = areas
        .iter()
        .map(|(name, definition)| {
            format!(
                "- {}: {}\n  included: {:?}\n  excluded: {:?}",
                name,
                definition.description,
                definition.included_patterns,
                definition.excluded_patterns
            )
        })
        .collect::<Vec<_>>()
        .join("\n");

    let path_list = uncategorized
        .iter()
        .map(|path| format!("- {}", path))
        .collect::<Vec<_>>()
        .join("\n");

    let sample_section = if samples.is_empty() {
        "No content samples available.".to_string()
    } else {
        samples
            .iter()
            .map(|(path, content)| format!("### {}\n```\n{}\n```", path, content))
            .collect::<Vec<_>>()
            .join("\n\n")
    };

    format!(
        r#"Classify these repository paths into the project's existing areas.

## Areas
{area_list}

## Uncategorized paths
{path_list}

## Content samples (truncated)
{sample_section}

## Task
Assign each path to the single best-fitting area. Skip paths that fit no
area.

Respond with a JSON array:
[
  {{
    "path": "the/path",
    "category": "area name",
    "confidence": 0.0-1.0,
    "reasoning": "one sentence"
  }}
]"#
    )
}

/// Fixed instructions appended to every summary request so the reply
/// carries both artifacts the extractor looks for.
pub fn summary_format_instructions() -> &'static str {
    r#"Structure your reply in two parts:
1. A Markdown narrative summary of the repository. You may wrap it in a
   ```markdown fence.
2. An XML summary document with root element <summary>, wrapped in a
   ```xml fence."#
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classification_prompt_lists_everything() {
        let mut areas = IndexMap::new();
        areas.insert(
            "api".to_string(),
            AreaDefinition::new("HTTP layer").with_included("src/api/**"),
        );

        let uncategorized = vec!["scripts/deploy.sh".to_string()];
        let samples = vec![("scripts/deploy.sh".to_string(), "#!/bin/sh".to_string())];

        let prompt = classification_prompt(&areas, &uncategorized, &samples);

        assert!(prompt.contains("api: HTTP layer"));
        assert!(prompt.contains("src/api/**"));
        assert!(prompt.contains("- scripts/deploy.sh"));
        assert!(prompt.contains("#!/bin/sh"));
        assert!(prompt.contains("\"category\""));
    }

    #[test]
    fn test_classification_prompt_without_samples() {
        let areas = IndexMap::new();
        let prompt = classification_prompt(&areas, &["a.bin".to_string()], &[]);
        assert!(prompt.contains("No content samples available."));
    }
}
