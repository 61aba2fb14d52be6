//! Fallback artifact pair for failed generation runs.

use chrono::{DateTime, Utc};

use super::extractor::{escape_xml, ExtractionResult, SUMMARY_ROOT, XML_DECLARATION};

/// Produce the artifact pair describing a failed generation run.
///
/// The shape is identical whether the failure was a transport error, an
/// authorization error, or an unexpected one; only the embedded message
/// differs. Consumers therefore always receive two well-formed documents.
pub fn fallback_artifacts(failure_reason: &str, timestamp: DateTime<Utc>) -> ExtractionResult {
    let stamp = timestamp.format("%Y-%m-%d %H:%M:%S UTC").to_string();

    let narrative = format!(
        r#"# Summary Generation Failed

Generated: {stamp}

The summary could not be generated: {failure_reason}

## Next steps

- Check that the provider API key environment variable is set and valid
- Check network connectivity to the provider endpoint
- Re-run the summarize command once the underlying issue is resolved"#
    );

    let structured = format!(
        "{decl}\n<{root}>\n  <error timestamp=\"{attr}\">{message}</error>\n</{root}>",
        decl = XML_DECLARATION,
        root = SUMMARY_ROOT,
        attr = timestamp.format("%Y-%m-%dT%H:%M:%SZ"),
        message = escape_xml(failure_reason),
    );

    ExtractionResult {
        narrative,
        structured,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn fixed_timestamp() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 3, 14, 9, 26, 53).unwrap()
    }

    #[test]
    fn test_narrative_carries_timestamp_and_reason() {
        let result = fallback_artifacts("connection refused", fixed_timestamp());

        assert!(result.narrative.starts_with("# Summary Generation Failed"));
        assert!(result.narrative.contains("2025-03-14 09:26:53 UTC"));
        assert!(result.narrative.contains("connection refused"));
        assert!(result.narrative.contains("## Next steps"));
    }

    #[test]
    fn test_structured_is_declared_and_escaped() {
        let result = fallback_artifacts("bad <key> & worse", fixed_timestamp());

        assert!(result.structured.starts_with(XML_DECLARATION));
        assert!(result
            .structured
            .contains("<error timestamp=\"2025-03-14T09:26:53Z\">"));
        assert!(result.structured.contains("bad &lt;key&gt; &amp; worse"));
        assert!(result.structured.ends_with(&format!("</{}>", SUMMARY_ROOT)));
    }

    #[test]
    fn test_shape_is_identical_across_failure_causes() {
        let transport = fallback_artifacts("timeout", fixed_timestamp());
        let auth = fallback_artifacts("invalid api key", fixed_timestamp());

        // Same skeleton, only the message differs.
        assert_eq!(
            transport.structured.replace("timeout", "invalid api key"),
            auth.structured
        );
    }
}
