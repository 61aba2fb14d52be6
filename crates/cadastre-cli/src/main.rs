//! Cadastre CLI - area mapping and AI summaries for repositories.

mod cli;
mod commands;
mod repo;

use clap::Parser;
use cli::{Cli, Commands};

fn main() {
    env_logger::init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Init { name } => commands::init::run(&cli.config, name),

        Commands::Areas {
            root,
            uncategorized,
            json,
        } => commands::areas::run(&cli.config, root, uncategorized, json, cli.verbose),

        Commands::Classify {
            root,
            llm,
            model,
            threshold,
            dry_run,
        } => commands::classify::run(
            &cli.config,
            root,
            llm,
            model,
            threshold,
            dry_run,
            cli.verbose,
        ),

        Commands::Summarize {
            packed,
            area,
            prompt,
            llm,
            model,
            narrative_out,
            structured_out,
        } => commands::summarize::run(
            &cli.config,
            packed,
            area,
            prompt,
            llm,
            model,
            narrative_out,
            structured_out,
            cli.verbose,
        ),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
