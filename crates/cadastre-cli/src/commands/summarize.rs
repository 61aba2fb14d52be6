//! Summarize command - produce the narrative and XML artifact pair.

use std::fs;
use std::path::{Path, PathBuf};

use cadastre::{fallback_artifacts, resolve_prompt, Cadastre, CadastreError};
use chrono::Utc;
use colored::Colorize;

use crate::cli::LlmProviderChoice;

use super::{attach_provider, load_lenient};

/// Prompt used when neither the configuration nor the caller provides one.
const DEFAULT_PROMPT: &str = "Summarize this repository's structure and purpose.";

#[allow(clippy::too_many_arguments)]
pub fn run(
    config_path: &Path,
    packed: PathBuf,
    area: Option<String>,
    explicit_prompt: String,
    llm: LlmProviderChoice,
    model: Option<String>,
    narrative_out: PathBuf,
    structured_out: PathBuf,
    verbose: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let packed_text = fs::read_to_string(&packed)
        .map_err(|e| format!("Failed to read packed file '{}': {}", packed.display(), e))?;

    let config = load_lenient(config_path);
    let mut prompt = resolve_prompt(config.as_ref(), area.as_deref(), &explicit_prompt);
    if prompt.trim().is_empty() {
        prompt = DEFAULT_PROMPT.to_string();
    }

    let cadastre = attach_provider(Cadastre::new(), &llm, model)?;

    println!(
        "{} {} ({} bytes, provider: {})",
        "Summarizing".cyan().bold(),
        packed.display(),
        packed_text.len(),
        llm
    );
    if verbose {
        println!("  prompt: {}", prompt.dimmed());
    }

    // A failed generation still yields both artifacts: the fallback pair
    // takes the place of the extracted one.
    let result = match cadastre.summarize(&packed_text, &prompt) {
        Ok(result) => result,
        Err(e @ CadastreError::Api { .. }) => {
            eprintln!("{} {}", "Generation failed:".red().bold(), e);
            fallback_artifacts(&e.to_string(), Utc::now())
        }
        Err(e) => return Err(e.into()),
    };

    fs::write(&narrative_out, &result.narrative).map_err(|e| {
        format!(
            "Failed to write narrative '{}': {}",
            narrative_out.display(),
            e
        )
    })?;
    fs::write(&structured_out, &result.structured).map_err(|e| {
        format!(
            "Failed to write structured summary '{}': {}",
            structured_out.display(),
            e
        )
    })?;

    println!(
        "{} {} and {}",
        "Wrote".green().bold(),
        narrative_out.display(),
        structured_out.display()
    );

    Ok(())
}
