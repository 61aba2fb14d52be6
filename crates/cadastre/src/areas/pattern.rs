//! Glob-style path matching for area definitions.
//!
//! Matching is case-sensitive and operates on path strings relative to a
//! fixed repository root; no symlink resolution happens here.

use globset::{GlobBuilder, GlobMatcher};

/// A single compiled path pattern.
///
/// `*` matches within one path segment, `**` crosses segments, and an exact
/// literal path matches itself. A pattern that fails to compile degrades to
/// a literal string comparison; compilation never raises to the caller.
#[derive(Debug, Clone)]
enum PathPattern {
    Glob(GlobMatcher),
    Literal(String),
}

impl PathPattern {
    fn compile(pattern: &str) -> Self {
        match GlobBuilder::new(pattern).literal_separator(true).build() {
            Ok(glob) => PathPattern::Glob(glob.compile_matcher()),
            Err(_) => PathPattern::Literal(pattern.to_string()),
        }
    }

    fn is_match(&self, path: &str) -> bool {
        match self {
            PathPattern::Glob(matcher) => matcher.is_match(path),
            PathPattern::Literal(literal) => literal == path,
        }
    }
}

/// A compiled include/exclude pattern pair for one area.
///
/// Compiling once and matching many paths avoids re-building the globs on
/// every resolver pass.
#[derive(Debug, Clone)]
pub struct PatternSet {
    include: Vec<PathPattern>,
    exclude: Vec<PathPattern>,
}

impl PatternSet {
    /// Compile an include/exclude pattern list.
    pub fn new(include_patterns: &[String], exclude_patterns: &[String]) -> Self {
        Self {
            include: include_patterns
                .iter()
                .map(|p| PathPattern::compile(p))
                .collect(),
            exclude: exclude_patterns
                .iter()
                .map(|p| PathPattern::compile(p))
                .collect(),
        }
    }

    /// Whether `path` is owned by this pattern set: matched by at least one
    /// include pattern and by none of the exclude patterns. An empty include
    /// list owns nothing.
    pub fn matches(&self, path: &str) -> bool {
        self.include.iter().any(|p| p.is_match(path))
            && !self.exclude.iter().any(|p| p.is_match(path))
    }
}

/// One-shot convenience over [`PatternSet`].
pub fn matches(path: &str, include_patterns: &[String], exclude_patterns: &[String]) -> bool {
    PatternSet::new(include_patterns, exclude_patterns).matches(path)
}
