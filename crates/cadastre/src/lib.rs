//! Cadastre: area mapping and AI summary extraction for repositories.
//!
//! Cadastre keeps a declarative map from repository paths to named project
//! areas (include/exclude glob patterns per area), finds the paths no area
//! claims, and folds AI-suggested classifications back into the map under a
//! confidence policy. Independently, it parses the free-form output of a
//! text-generation service into two well-formed artifacts: a Markdown
//! narrative and an XML summary document.
//!
//! # Core principles
//!
//! - **Degrade, don't crash**: bad configuration, unparseable AI replies,
//!   and malformed response text all fall back to safe defaults.
//! - **Every artifact is well-formed**: extraction and fallback generation
//!   always yield a non-empty narrative and a declaration-prefixed XML
//!   document.
//!
//! # Example
//!
//! ```no_run
//! use std::collections::HashMap;
//!
//! use cadastre::{Cadastre, MockProvider, ProjectConfig};
//!
//! let mut project = ProjectConfig::load("cadastre.toml")
//!     .unwrap()
//!     .unwrap_or_default();
//!
//! let cadastre = Cadastre::new().with_llm(MockProvider::new());
//! let paths = vec!["src/api/mod.rs".to_string()];
//! let samples: HashMap<String, String> = HashMap::new();
//!
//! let outcome = cadastre.classify(&mut project, &paths, &samples).unwrap();
//! println!("applied: {}", outcome.applied.len());
//! ```

pub mod areas;
pub mod classify;
pub mod config;
pub mod error;
pub mod extract;
pub mod llm;

mod cadastre;

pub use crate::cadastre::{Cadastre, CadastreConfig};
pub use areas::{AreaResolver, PatternSet};
pub use classify::{
    ContentProvider, MergeOutcome, PathClassificationSuggestion, SkipReason, SkippedSuggestion,
};
pub use config::{resolve_prompt, AreaDefinition, ProjectConfig};
pub use error::{CadastreError, Result};
pub use extract::{extract, fallback_artifacts, ExtractionResult};
pub use llm::{
    AnthropicProvider, LlmConfig, LlmProvider, MockProvider, OllamaProvider, OpenAIProvider,
};
