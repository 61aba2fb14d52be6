//! Areas command - show ownership counts and uncategorized paths.

use std::path::{Path, PathBuf};

use cadastre::AreaResolver;
use colored::Colorize;
use serde_json::json;

use crate::repo;

use super::load_lenient;

pub fn run(
    config_path: &Path,
    root: PathBuf,
    uncategorized_only: bool,
    json_output: bool,
    verbose: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let Some(config) = load_lenient(config_path) else {
        return Err(format!("No usable configuration at {}", config_path.display()).into());
    };

    let resolver = AreaResolver::new(&config);
    let paths = repo::enumerate_paths(&root);
    let uncategorized = resolver.find_uncategorized(paths.iter().map(String::as_str));

    if json_output {
        let areas: Vec<_> = config
            .areas
            .iter()
            .map(|(name, area)| {
                let owned = paths
                    .iter()
                    .filter(|p| resolver.owners(p).contains(&name.as_str()))
                    .count();
                json!({
                    "name": name,
                    "description": area.description,
                    "owned_paths": owned,
                })
            })
            .collect();

        let report = json!({
            "project": config.project_name,
            "total_paths": paths.len(),
            "areas": areas,
            "uncategorized": uncategorized,
        });
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    if !uncategorized_only {
        println!(
            "{} ({} paths)",
            config.project_name.white().bold(),
            paths.len()
        );
        for (name, area) in &config.areas {
            let owned = paths
                .iter()
                .filter(|p| resolver.owners(p).contains(&name.as_str()))
                .count();
            println!(
                "  {:20} {:5} paths  {}",
                name.cyan(),
                owned,
                area.description.dimmed()
            );
        }
        println!();
    }

    if verbose {
        for path in &paths {
            let owners = resolver.owners(path);
            if owners.len() > 1 {
                println!(
                    "  {} {} claimed by {}",
                    "tie:".yellow(),
                    path,
                    owners.join(", ")
                );
            }
        }
    }

    if uncategorized.is_empty() {
        println!("{}", "Every path is categorized.".green());
    } else {
        println!(
            "{} ({}):",
            "Uncategorized".yellow().bold(),
            uncategorized.len()
        );
        for path in &uncategorized {
            println!("  {}", path);
        }
    }

    Ok(())
}
