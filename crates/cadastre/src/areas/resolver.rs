//! Resolve area ownership and find uncategorized paths.

use crate::config::ProjectConfig;

use super::pattern::PatternSet;

/// Resolves which declared areas own a path, using the compiled
/// include/exclude patterns of every area in a configuration.
pub struct AreaResolver {
    areas: Vec<(String, PatternSet)>,
}

impl AreaResolver {
    /// Compile the patterns of every area in `config`.
    pub fn new(config: &ProjectConfig) -> Self {
        let areas = config
            .areas
            .iter()
            .map(|(name, definition)| {
                (
                    name.clone(),
                    PatternSet::new(
                        &definition.included_patterns,
                        &definition.excluded_patterns,
                    ),
                )
            })
            .collect();

        Self { areas }
    }

    /// Every area claiming `path`, in declaration order.
    ///
    /// More than one area may claim the same path. No tie-break is applied
    /// anywhere; callers always see the full set.
    pub fn owners(&self, path: &str) -> Vec<&str> {
        self.areas
            .iter()
            .filter(|(_, patterns)| patterns.matches(path))
            .map(|(name, _)| name.as_str())
            .collect()
    }

    /// Whether any area claims `path`.
    pub fn is_categorized(&self, path: &str) -> bool {
        self.areas.iter().any(|(_, patterns)| patterns.matches(path))
    }

    /// Every path in `all_paths` that no area claims, preserving the input
    /// enumeration order.
    ///
    /// Enumeration itself is the caller's job, including the pre-filtering
    /// of version-control and dependency-cache directories.
    pub fn find_uncategorized<'a, I>(&self, all_paths: I) -> Vec<String>
    where
        I: IntoIterator<Item = &'a str>,
    {
        all_paths
            .into_iter()
            .filter(|path| !self.is_categorized(path))
            .map(str::to_string)
            .collect()
    }
}
