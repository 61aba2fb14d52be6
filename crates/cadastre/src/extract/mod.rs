//! Response extraction: narrative and structured artifacts.

mod extractor;
mod fallback;

pub use extractor::{
    escape_xml, extract, extract_narrative, extract_structured, ExtractionResult, SUMMARY_ROOT,
    XML_DECLARATION,
};
pub use fallback::fallback_artifacts;
