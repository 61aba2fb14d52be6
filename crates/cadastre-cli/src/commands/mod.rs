//! Command implementations.

pub mod areas;
pub mod classify;
pub mod init;
pub mod summarize;

use std::path::Path;

use cadastre::{
    AnthropicProvider, Cadastre, CadastreError, LlmConfig, MockProvider, OllamaProvider,
    OpenAIProvider, ProjectConfig,
};

use crate::cli::LlmProviderChoice;

/// Load the configuration, degrading to `None` on a parse failure.
///
/// A malformed file is logged and then treated like a missing one, so the
/// pipeline never crashes on bad configuration.
pub(crate) fn load_lenient(path: &Path) -> Option<ProjectConfig> {
    match ProjectConfig::load(path) {
        Ok(config) => config,
        Err(e) => {
            log::warn!("{}; proceeding without configuration", e);
            None
        }
    }
}

/// Attach the chosen provider to a Cadastre instance.
pub(crate) fn attach_provider(
    cadastre: Cadastre,
    choice: &LlmProviderChoice,
    model: Option<String>,
) -> cadastre::Result<Cadastre> {
    Ok(match choice {
        LlmProviderChoice::Anthropic => {
            let api_key = std::env::var("ANTHROPIC_API_KEY").map_err(|_| {
                CadastreError::Config(
                    "ANTHROPIC_API_KEY environment variable not set".to_string(),
                )
            })?;
            let provider = match model {
                Some(model) => AnthropicProvider::with_config(
                    api_key,
                    LlmConfig {
                        model,
                        ..LlmConfig::default()
                    },
                )?,
                None => AnthropicProvider::new(api_key)?,
            };
            cadastre.with_llm(provider)
        }

        LlmProviderChoice::OpenAI => {
            let api_key = std::env::var("OPENAI_API_KEY").map_err(|_| {
                CadastreError::Config("OPENAI_API_KEY environment variable not set".to_string())
            })?;
            let provider = match model {
                Some(model) => OpenAIProvider::with_config(
                    api_key,
                    LlmConfig {
                        model,
                        ..LlmConfig::default()
                    },
                )?,
                None => OpenAIProvider::new(api_key)?,
            };
            cadastre.with_llm(provider)
        }

        LlmProviderChoice::Ollama => {
            let provider = match model {
                Some(model) => OllamaProvider::with_model(model)?,
                None => OllamaProvider::new()?,
            };
            cadastre.with_llm(provider)
        }

        LlmProviderChoice::Mock => cadastre.with_llm(MockProvider::new()),
    })
}
