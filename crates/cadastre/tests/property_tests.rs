//! Property-based tests for the Cadastre invariants.
//!
//! These use proptest to throw arbitrary inputs at the extraction chain,
//! the resolver, and the merger, and verify that the core guarantees hold
//! under all conditions:
//!
//! 1. **No panics**: every operation is total over its input domain
//! 2. **Well-formedness**: structured artifacts always carry a declaration
//! 3. **Consistency**: gap discovery agrees with ownership resolution
//! 4. **Idempotence**: merging is a no-op the second time around

use proptest::prelude::*;

use cadastre::classify::{merge, PathClassificationSuggestion};
use cadastre::extract::{extract, extract_structured, XML_DECLARATION};
use cadastre::{AreaDefinition, AreaResolver, ProjectConfig};

/// Path-like strings: a few lowercase segments and a short extension.
fn path_like() -> impl Strategy<Value = String> {
    "[a-z]{1,8}(/[a-z]{1,8}){0,3}\\.[a-z]{1,3}"
}

fn test_config() -> ProjectConfig {
    ProjectConfig::new("prop")
        .with_area(
            "api",
            AreaDefinition::new("api").with_included("src/api/**"),
        )
        .with_area(
            "docs",
            AreaDefinition::new("docs")
                .with_included("docs/**")
                .with_excluded("docs/internal/**"),
        )
}

proptest! {
    #[test]
    fn prop_extraction_is_total(input in ".{0,400}") {
        let result = extract(&input);

        prop_assert!(!result.narrative.is_empty());
        // A declaration is always present, whether prepended by the chain
        // or carried verbatim by the input's own structured span.
        prop_assert!(result.structured.trim_start().starts_with("<?xml"));
    }

    #[test]
    fn prop_markerless_input_yields_escaped_error_document(
        // No backticks and no angle brackets, so no strategy before the
        // synthesized error document can fire.
        input in "[a-zA-Z0-9 &'\"\n]{0,200}"
    ) {
        let structured = extract_structured(&input);

        prop_assert!(structured.starts_with(XML_DECLARATION));
        prop_assert!(structured.contains("<summary>"));
        prop_assert!(structured.contains("</summary>"));
        prop_assert!(structured.contains("<extraction_error>"));

        // The embedded input is fully escaped: no markup-significant
        // character survives between the raw_response tags.
        let start = structured.find("<raw_response>").unwrap() + "<raw_response>".len();
        let end = structured.find("</raw_response>").unwrap();
        let embedded = &structured[start..end];
        prop_assert!(!embedded.contains('<'));
        prop_assert!(!embedded.contains('>'));
        prop_assert!(!embedded.contains('"'));
        prop_assert!(!embedded.contains('\''));
    }

    #[test]
    fn prop_uncategorized_agrees_with_ownership(paths in prop::collection::vec(path_like(), 0..40)) {
        let resolver = AreaResolver::new(&test_config());
        let uncategorized = resolver.find_uncategorized(paths.iter().map(String::as_str));

        // Nothing owned ever shows up in the gap list.
        for path in &uncategorized {
            prop_assert!(!resolver.is_categorized(path));
        }

        // And the two views partition the input.
        let categorized_count = paths.iter().filter(|p| resolver.is_categorized(p)).count();
        prop_assert_eq!(categorized_count + uncategorized.len(), paths.len());
    }

    #[test]
    fn prop_merge_is_idempotent(
        paths in prop::collection::vec(path_like(), 0..20),
        confidence in 0.0f64..1.0,
    ) {
        let suggestions: Vec<PathClassificationSuggestion> = paths
            .iter()
            .map(|p| PathClassificationSuggestion::new(p, "api").with_confidence(confidence))
            .collect();

        let mut once = test_config();
        merge(&mut once, suggestions.clone(), 0.5);

        let mut twice = once.clone();
        merge(&mut twice, suggestions, 0.5);

        prop_assert_eq!(once, twice);
    }

    #[test]
    fn prop_merge_skipped_plus_applied_is_input(
        paths in prop::collection::vec(path_like(), 0..20),
    ) {
        let suggestions: Vec<PathClassificationSuggestion> = paths
            .iter()
            .enumerate()
            .map(|(i, p)| {
                let area = if i % 3 == 0 { "api" } else { "nope" };
                PathClassificationSuggestion::new(p, area).with_confidence((i as f64 % 10.0) / 10.0)
            })
            .collect();

        let total = suggestions.len();
        let mut config = test_config();
        let outcome = merge(&mut config, suggestions, 0.5);

        // Every suggestion comes back to the caller, applied or skipped.
        prop_assert_eq!(outcome.applied.len() + outcome.skipped.len(), total);
    }
}

#[test]
fn test_resolver_handles_empty_input() {
    let resolver = AreaResolver::new(&test_config());
    let none: Vec<&str> = Vec::new();
    assert!(resolver.find_uncategorized(none).is_empty());
}

#[test]
fn test_merge_handles_empty_suggestions() {
    let mut config = test_config();
    let outcome = merge(&mut config, Vec::new(), 0.8);
    assert!(outcome.is_empty());
    assert_eq!(config, test_config());
}
