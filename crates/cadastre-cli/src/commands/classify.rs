//! Classify command - AI classification of uncategorized paths.

use std::path::{Path, PathBuf};

use cadastre::{Cadastre, CadastreConfig, SkipReason};
use colored::Colorize;

use crate::cli::LlmProviderChoice;
use crate::repo::{self, FsContentProvider};

use super::{attach_provider, load_lenient};

pub fn run(
    config_path: &Path,
    root: PathBuf,
    llm: LlmProviderChoice,
    model: Option<String>,
    threshold: f64,
    dry_run: bool,
    verbose: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let Some(config) = load_lenient(config_path) else {
        return Err(format!("No usable configuration at {}", config_path.display()).into());
    };

    let cadastre = attach_provider(
        Cadastre::with_config(CadastreConfig {
            confidence_threshold: threshold,
        }),
        &llm,
        model,
    )?;

    let paths = repo::enumerate_paths(&root);
    let content = FsContentProvider::new(&root);

    println!(
        "{} {} paths under {} (provider: {})",
        "Scanning".cyan().bold(),
        paths.len(),
        root.display(),
        llm
    );

    let mut updated = config;
    let outcome = cadastre.classify(&mut updated, &paths, &content)?;

    if outcome.is_empty() {
        println!("{}", "Nothing to classify.".green());
        return Ok(());
    }

    for applied in &outcome.applied {
        println!(
            "  {} {} -> {} ({:.0}%)",
            "+".green().bold(),
            applied.path,
            applied.area.cyan(),
            applied.confidence * 100.0
        );
        if verbose && !applied.reasoning.is_empty() {
            println!("      {}", applied.reasoning.dimmed());
        }
    }

    for skipped in &outcome.skipped {
        let reason = match skipped.reason {
            SkipReason::BelowThreshold => "below threshold",
            SkipReason::UnknownArea => "unknown area",
        };
        println!(
            "  {} {} -> {} ({:.0}%, {})",
            "-".yellow(),
            skipped.suggestion.path,
            skipped.suggestion.area,
            skipped.suggestion.confidence * 100.0,
            reason
        );
    }

    println!(
        "Applied {} of {} suggestions",
        outcome.applied.len(),
        outcome.applied.len() + outcome.skipped.len()
    );

    if dry_run {
        println!("{}", "Dry run: configuration not updated.".yellow());
    } else if !outcome.applied.is_empty() {
        updated.save(config_path)?;
        println!("{} {}", "Saved".green().bold(), config_path.display());
    }

    Ok(())
}
