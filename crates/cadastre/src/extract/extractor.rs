//! Parse raw generated text into narrative and structured artifacts.
//!
//! Both extractions are ordered first-match-wins chains, kept as separate
//! steps so the fallback behavior stays auditable and each strategy can be
//! tested on its own. Extraction is total: every input, including empty
//! text, yields a non-empty narrative and a well-formed structured document.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

/// Declaration line carried by every structured artifact.
pub const XML_DECLARATION: &str = r#"<?xml version="1.0" encoding="UTF-8"?>"#;

/// Root element name of the structured artifact; stable across calls.
pub const SUMMARY_ROOT: &str = "summary";

/// Narrative text used when nothing at all can be extracted.
const ERROR_NARRATIVE: &str = "Error extracting summary";

/// The two artifacts produced from one generated reply.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExtractionResult {
    /// Markdown prose document. Never empty.
    pub narrative: String,

    /// XML document, always declaration-prefixed and well-formed.
    pub structured: String,
}

static MARKDOWN_FENCE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?s)```markdown\s*\n(.*?)```").unwrap());

static MD_FENCE: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?s)```md\s*\n(.*?)```").unwrap());

static HEADING_LINE: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?m)^#{1,6}[ \t]").unwrap());

static XML_FENCE: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?s)```xml\s*\n(.*?)```").unwrap());

static DECLARED_SPAN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?s)<\?xml[^>]*\?>\s*(?:.*?</summary>|<summary[^>]*/>)").unwrap()
});

static BARE_SPAN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?s)<summary(?:\s[^>]*)?>.*?</summary>|<summary(?:\s[^>]*)?/>").unwrap()
});

/// Extract both artifacts from one generated reply.
pub fn extract(text: &str) -> ExtractionResult {
    ExtractionResult {
        narrative: extract_narrative(text),
        structured: extract_structured(text),
    }
}

/// Extract the Markdown narrative from `text`.
///
/// Strategies, first match wins:
/// 1. a fenced block labeled `markdown`
/// 2. a fenced block labeled `md`
/// 3. a heading-led span ending right before the structured document
/// 4. everything before the first structured marker, trimmed
/// 5. the whole text, trimmed; an error narrative when even that is empty
pub fn extract_narrative(text: &str) -> String {
    if let Some(block) = MARKDOWN_FENCE.captures(text).and_then(|c| c.get(1)) {
        let block = block.as_str().trim();
        if !block.is_empty() {
            return block.to_string();
        }
    }

    if let Some(block) = MD_FENCE.captures(text).and_then(|c| c.get(1)) {
        let block = block.as_str().trim();
        if !block.is_empty() {
            return block.to_string();
        }
    }

    if let Some(span) = heading_span(text) {
        return span;
    }

    if let Some(idx) = structured_marker_offset(text) {
        let prefix = text[..idx].trim();
        if !prefix.is_empty() {
            return prefix.to_string();
        }
    }

    let trimmed = text.trim();
    if trimmed.is_empty() {
        ERROR_NARRATIVE.to_string()
    } else {
        trimmed.to_string()
    }
}

/// Strategy 3: from the first Markdown heading up to the structured block
/// (fenced or bare declaration) or end of text.
fn heading_span(text: &str) -> Option<String> {
    let start = HEADING_LINE.find(text)?.start();
    let tail = &text[start..];
    let end = structured_marker_offset(tail).unwrap_or(tail.len());
    let span = tail[..end].trim();
    (!span.is_empty()).then(|| span.to_string())
}

fn structured_marker_offset(text: &str) -> Option<usize> {
    match (text.find("<?xml"), text.find("```xml")) {
        (Some(a), Some(b)) => Some(a.min(b)),
        (Some(a), None) => Some(a),
        (None, Some(b)) => Some(b),
        (None, None) => None,
    }
}

/// Extract the XML structured artifact from `text`.
///
/// Strategies, first match wins:
/// 1. a fenced block labeled `xml`
/// 2. a declaration-prefixed `<summary>` span directly in the text
/// 3. a bare `<summary>` span, declaration prepended
/// 4. a synthesized error document embedding the escaped input
///
/// The result always begins with the declaration line.
pub fn extract_structured(text: &str) -> String {
    if let Some(block) = XML_FENCE.captures(text).and_then(|c| c.get(1)) {
        let block = block.as_str().trim();
        if !block.is_empty() {
            return ensure_declaration(block);
        }
    }

    if let Some(span) = DECLARED_SPAN.find(text) {
        return ensure_declaration(span.as_str().trim());
    }

    if let Some(span) = BARE_SPAN.find(text) {
        return ensure_declaration(span.as_str().trim());
    }

    error_document(text)
}

/// Prepend the XML declaration when the document lacks one.
fn ensure_declaration(document: &str) -> String {
    if document.trim_start().starts_with("<?xml") {
        document.to_string()
    } else {
        format!("{}\n{}", XML_DECLARATION, document)
    }
}

/// Synthesize a well-formed document signaling that no structured summary
/// could be extracted, with the raw input escaped inside it.
fn error_document(raw: &str) -> String {
    format!(
        "{decl}\n<{root}>\n  <extraction_error>No structured summary could be extracted from the response</extraction_error>\n  <raw_response>{raw}</raw_response>\n</{root}>",
        decl = XML_DECLARATION,
        root = SUMMARY_ROOT,
        raw = escape_xml(raw.trim()),
    )
}

/// Escape the five markup-significant characters to their entities.
pub fn escape_xml(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '\'' => escaped.push_str("&apos;"),
            '"' => escaped.push_str("&quot;"),
            _ => escaped.push(c),
        }
    }
    escaped
}
