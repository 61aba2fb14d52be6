//! Mock provider for testing and offline runs.

use crate::error::Result;

use super::provider::{LlmConfig, LlmProvider};

/// Mock provider that returns predictable replies without any network use.
///
/// By default it synthesizes a minimal summary-shaped reply; tests that
/// exercise classification set a canned reply with [`MockProvider::with_reply`].
pub struct MockProvider {
    config: LlmConfig,
    reply: Option<String>,
}

impl MockProvider {
    /// Create a new mock provider.
    pub fn new() -> Self {
        Self {
            config: LlmConfig::default(),
            reply: None,
        }
    }

    /// Answer every request with a fixed canned reply.
    pub fn with_reply(mut self, reply: impl Into<String>) -> Self {
        self.reply = Some(reply.into());
        self
    }

    /// Create with custom configuration.
    pub fn with_config(config: LlmConfig) -> Self {
        Self {
            config,
            reply: None,
        }
    }
}

impl Default for MockProvider {
    fn default() -> Self {
        Self::new()
    }
}

impl LlmProvider for MockProvider {
    fn generate(&self, _system: &str, prompt: &str) -> Result<String> {
        if let Some(ref reply) = self.reply {
            return Ok(reply.clone());
        }

        Ok(format!(
            "# Mock Summary\n\nThe request contained {} characters.\n\n\
             ```xml\n<summary>\n  <note>mock reply</note>\n</summary>\n```\n",
            prompt.len()
        ))
    }

    fn config(&self) -> &LlmConfig {
        &self.config
    }

    fn name(&self) -> &str {
        "mock"
    }
}
