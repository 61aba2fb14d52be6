//! Text-generation provider integration.
//!
//! Cadastre consumes a single synchronous capability from the outside
//! world: prompt text in, raw text out. Everything provider-specific
//! (request shape, authentication, reply parsing) lives behind the
//! [`LlmProvider`] trait, one implementation per provider.
//!
//! # Supported providers
//!
//! - **Anthropic** - Claude models via API (requires `ANTHROPIC_API_KEY`)
//! - **OpenAI** - GPT models via API (requires `OPENAI_API_KEY`)
//! - **Ollama** - Local models, no API key needed (requires Ollama installed)
//! - **Mock** - deterministic replies for tests and offline runs

mod anthropic;
mod mock;
mod ollama;
mod openai;
mod provider;

pub mod prompts;

pub use anthropic::AnthropicProvider;
pub use mock::MockProvider;
pub use ollama::OllamaProvider;
pub use openai::OpenAIProvider;
pub use provider::{LlmConfig, LlmProvider};
