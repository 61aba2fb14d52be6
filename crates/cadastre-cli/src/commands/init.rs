//! Init command - create a starter area configuration.

use std::path::Path;

use cadastre::{AreaDefinition, ProjectConfig};
use colored::Colorize;

pub fn run(config_path: &Path, name: String) -> Result<(), Box<dyn std::error::Error>> {
    if config_path.exists() {
        return Err(format!("Configuration already exists: {}", config_path.display()).into());
    }

    let config = ProjectConfig::new(name)
        .with_default_prompt("Summarize this repository's structure and purpose.")
        .with_area(
            "docs",
            AreaDefinition::new("Project documentation")
                .with_included("docs/**")
                .with_included("README.md")
                .with_prompt("Summarize the documentation set."),
        );

    config.save(config_path)?;

    println!("{} {}", "Created".green().bold(), config_path.display());
    println!("Edit the file to declare your project's areas and patterns.");
    Ok(())
}
