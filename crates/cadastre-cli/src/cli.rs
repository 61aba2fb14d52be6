//! CLI argument definitions using clap.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Cadastre: area mapping and AI summaries for repositories
#[derive(Parser)]
#[command(name = "cadastre")]
#[command(version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Path to the area configuration file
    #[arg(short, long, global = true, default_value = "cadastre.toml")]
    pub config: PathBuf,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Create a starter area configuration
    Init {
        /// Project name recorded in the configuration
        #[arg(value_name = "NAME")]
        name: String,
    },

    /// Show areas, their ownership counts, and uncategorized paths
    Areas {
        /// Repository root to enumerate
        #[arg(short, long, default_value = ".")]
        root: PathBuf,

        /// Only print uncategorized paths
        #[arg(long)]
        uncategorized: bool,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Classify uncategorized paths with the AI provider and merge the
    /// confident suggestions into the configuration
    Classify {
        /// Repository root to enumerate
        #[arg(short, long, default_value = ".")]
        root: PathBuf,

        /// LLM provider to use
        #[arg(long, default_value = "anthropic")]
        llm: LlmProviderChoice,

        /// Model to use (provider-specific, e.g. "gpt-4o", "llama3.2")
        #[arg(long)]
        model: Option<String>,

        /// Minimum confidence required to merge a suggestion
        #[arg(long, default_value = "0.8")]
        threshold: f64,

        /// Show suggestions without updating the configuration
        #[arg(long)]
        dry_run: bool,
    },

    /// Summarize a packed repository document into a narrative and an XML
    /// artifact
    Summarize {
        /// Path to the packed repository document
        #[arg(value_name = "PACKED_FILE")]
        packed: PathBuf,

        /// Area whose prompt should guide the summary
        #[arg(short, long)]
        area: Option<String>,

        /// Explicit prompt overriding the configuration
        #[arg(short, long, default_value = "")]
        prompt: String,

        /// LLM provider to use
        #[arg(long, default_value = "anthropic")]
        llm: LlmProviderChoice,

        /// Model to use (provider-specific)
        #[arg(long)]
        model: Option<String>,

        /// Output path for the narrative document
        #[arg(long, default_value = "SUMMARY.md")]
        narrative_out: PathBuf,

        /// Output path for the structured document
        #[arg(long, default_value = "summary.xml")]
        structured_out: PathBuf,
    },
}

/// LLM provider choice.
#[derive(Clone, Debug, Default)]
pub enum LlmProviderChoice {
    /// Anthropic Claude API (requires ANTHROPIC_API_KEY)
    #[default]
    Anthropic,
    /// OpenAI GPT API (requires OPENAI_API_KEY)
    OpenAI,
    /// Ollama local models (requires Ollama running)
    Ollama,
    /// Mock provider for testing
    Mock,
}

impl std::str::FromStr for LlmProviderChoice {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "anthropic" | "claude" => Ok(LlmProviderChoice::Anthropic),
            "openai" | "gpt" => Ok(LlmProviderChoice::OpenAI),
            "ollama" | "local" => Ok(LlmProviderChoice::Ollama),
            "mock" | "test" => Ok(LlmProviderChoice::Mock),
            _ => Err(format!(
                "Unknown provider: {}. Use: anthropic, openai, ollama, or mock.",
                s
            )),
        }
    }
}

impl std::fmt::Display for LlmProviderChoice {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LlmProviderChoice::Anthropic => write!(f, "anthropic"),
            LlmProviderChoice::OpenAI => write!(f, "openai"),
            LlmProviderChoice::Ollama => write!(f, "ollama"),
            LlmProviderChoice::Mock => write!(f, "mock"),
        }
    }
}
