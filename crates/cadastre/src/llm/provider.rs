//! Provider trait and shared configuration.

use crate::error::Result;

/// Configuration shared by all text-generation providers.
#[derive(Debug, Clone)]
pub struct LlmConfig {
    /// Model identifier (provider-specific).
    pub model: String,

    /// Maximum tokens in one response.
    pub max_tokens: usize,

    /// Sampling temperature (0.0-1.0).
    pub temperature: f64,
}

impl Default for LlmConfig {
    fn default() -> Self {
        Self {
            model: "claude-sonnet-4-20250514".to_string(),
            max_tokens: 4096,
            temperature: 0.3,
        }
    }
}

/// A synchronous text-generation capability: prompt text in, raw text out.
///
/// Each implementation owns its provider-specific request building and
/// reply parsing. Implementations must be thread-safe (Send + Sync) so one
/// provider can serve independent requests.
pub trait LlmProvider: Send + Sync {
    /// Send `prompt` under `system` guidance and return the raw reply text.
    ///
    /// One-shot request/response with a bounded wait; no retries. Transport
    /// and authorization failures surface as
    /// [`CadastreError::Api`](crate::error::CadastreError::Api); the caller
    /// is responsible for producing fallback artifacts from them.
    fn generate(&self, system: &str, prompt: &str) -> Result<String>;

    /// Configuration for this provider.
    fn config(&self) -> &LlmConfig;

    /// Provider name for logging and reporting.
    fn name(&self) -> &str;
}
