//! Integration tests for the area classification pipeline: configuration
//! round-trips, prompt resolution, and the suggest-merge-persist flow.

use std::collections::HashMap;

use cadastre::{
    resolve_prompt, AreaDefinition, AreaResolver, Cadastre, CadastreConfig, MockProvider,
    ProjectConfig, SkipReason,
};
use tempfile::tempdir;

fn sample_config() -> ProjectConfig {
    ProjectConfig::new("acme")
        .with_default_prompt("Summarize this repository")
        .with_area(
            "api",
            AreaDefinition::new("HTTP layer")
                .with_included("src/api/**")
                .with_excluded("src/api/fixtures/**")
                .with_prompt("Analyze this API code"),
        )
        .with_area(
            "docs",
            AreaDefinition::new("Documentation")
                .with_included("docs/**")
                .with_included("README.md"),
        )
}

#[test]
fn test_config_round_trip() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("cadastre.toml");

    let config = sample_config();
    config.save(&path).unwrap();
    let loaded = ProjectConfig::load(&path).unwrap().unwrap();

    assert_eq!(loaded, config);
}

#[test]
fn test_resolve_prompt_contract() {
    let config = sample_config();

    assert_eq!(resolve_prompt(None, Some("x"), "fallback"), "fallback");
    assert_eq!(
        resolve_prompt(Some(&config), Some("unknown-area"), "fallback"),
        "Summarize this repository"
    );
    assert_eq!(
        resolve_prompt(Some(&config), Some("api"), "fallback"),
        "Analyze this API code"
    );
    assert!(resolve_prompt(Some(&config), Some("api"), "").contains("Analyze this API code"));
}

#[test]
fn test_ownership_tie_is_not_uncategorized() {
    // README.md is claimed by both areas; the tie stays visible and the
    // path is still categorized.
    let config = sample_config().with_area(
        "markdown",
        AreaDefinition::new("All Markdown").with_included("**/*.md"),
    );
    let resolver = AreaResolver::new(&config);

    assert_eq!(resolver.owners("README.md"), vec!["docs", "markdown"]);
    let uncategorized = resolver.find_uncategorized(["README.md", "orphan.c"].iter().copied());
    assert_eq!(uncategorized, vec!["orphan.c"]);
}

#[test]
fn test_threshold_scenario_both_suggestions_returned() {
    // Two suggestions for the same path with confidences 0.9 and 0.4
    // against threshold 0.8: only the first mutates, both are visible.
    let reply = r#"```json
[
  {"path": "openapi.yaml", "category": "api", "confidence": 0.9, "reasoning": "API schema"},
  {"path": "openapi.yaml", "category": "docs", "confidence": 0.4, "reasoning": "maybe docs"}
]
```"#;

    let cadastre = Cadastre::with_config(CadastreConfig {
        confidence_threshold: 0.8,
    })
    .with_llm(MockProvider::new().with_reply(reply));

    let mut config = sample_config();
    let content: HashMap<String, String> = HashMap::new();
    let outcome = cadastre
        .classify(&mut config, &["openapi.yaml".to_string()], &content)
        .unwrap();

    assert_eq!(outcome.applied.len(), 1);
    assert_eq!(outcome.applied[0].area, "api");
    assert_eq!(outcome.skipped.len(), 1);
    assert_eq!(outcome.skipped[0].reason, SkipReason::BelowThreshold);

    assert!(config.areas["api"]
        .included_patterns
        .contains(&"openapi.yaml".to_string()));
    assert!(!config.areas["docs"]
        .included_patterns
        .contains(&"openapi.yaml".to_string()));
}

#[test]
fn test_classify_twice_is_idempotent() {
    let reply = r#"[{"path": "openapi.yaml", "category": "api", "confidence": 0.95, "reasoning": "r"}]"#;
    let cadastre = Cadastre::new().with_llm(MockProvider::new().with_reply(reply));

    let mut config = sample_config();
    let content: HashMap<String, String> = HashMap::new();
    let paths = vec!["openapi.yaml".to_string()];

    cadastre.classify(&mut config, &paths, &content).unwrap();
    let after_first = config.clone();

    // After the merge the path is categorized, so the second pass makes no
    // request and changes nothing.
    cadastre.classify(&mut config, &paths, &content).unwrap();
    assert_eq!(config, after_first);

    let occurrences = config.areas["api"]
        .included_patterns
        .iter()
        .filter(|p| *p == "openapi.yaml")
        .count();
    assert_eq!(occurrences, 1);
}

#[test]
fn test_full_flow_persists_merged_configuration() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("cadastre.toml");
    sample_config().save(&path).unwrap();

    let reply = r#"```json
[
  {"path": "scripts/release.sh", "category": "api", "confidence": 0.9, "reasoning": "deploys the API"},
  {"path": "notes.txt", "category": "scratch", "confidence": 0.99, "reasoning": "unknown area"}
]
```"#;
    let cadastre = Cadastre::new().with_llm(MockProvider::new().with_reply(reply));

    let mut config = ProjectConfig::load(&path).unwrap().unwrap();
    let content: HashMap<String, String> = HashMap::new();
    let paths = vec!["scripts/release.sh".to_string(), "notes.txt".to_string()];

    let outcome = cadastre.classify(&mut config, &paths, &content).unwrap();
    assert_eq!(outcome.applied.len(), 1);
    assert_eq!(outcome.skipped.len(), 1);
    assert_eq!(outcome.skipped[0].reason, SkipReason::UnknownArea);

    config.save(&path).unwrap();

    let reloaded = ProjectConfig::load(&path).unwrap().unwrap();
    assert!(reloaded.areas["api"]
        .included_patterns
        .contains(&"scripts/release.sh".to_string()));
    // The unknown-area suggestion never created a new area.
    assert!(!reloaded.areas.contains_key("scratch"));
}

#[test]
fn test_unparseable_reply_degrades_to_no_suggestions() {
    let cadastre =
        Cadastre::new().with_llm(MockProvider::new().with_reply("Sorry, I have no idea."));

    let mut config = sample_config();
    let content: HashMap<String, String> = HashMap::new();
    let outcome = cadastre
        .classify(&mut config, &["orphan.c".to_string()], &content)
        .unwrap();

    assert!(outcome.is_empty());
    assert_eq!(config, sample_config());
}
