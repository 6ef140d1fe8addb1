//! CLI command definitions and handlers.

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

use doclens_llm::groq;
use doclens_llm::LlmConfig;

pub mod analyze;
pub mod serve;

/// Doclens - LLM Document Analysis
#[derive(Parser)]
#[command(name = "doclens")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Path to project directory (defaults to current directory)
    #[arg(short, long, global = true)]
    pub project: Option<PathBuf>,

    /// Groq API key
    #[arg(long, env = "GROQ_API_KEY", global = true, hide_env_values = true)]
    pub api_key: Option<String>,

    /// Chat completions endpoint
    #[arg(long, global = true, default_value = groq::DEFAULT_API_URL)]
    pub api_url: String,

    /// Completion model
    #[arg(long, global = true, default_value = groq::DEFAULT_MODEL)]
    pub model: String,

    /// Completion token limit
    #[arg(long, global = true, default_value_t = groq::DEFAULT_MAX_TOKENS)]
    pub max_tokens: u32,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Start the analyzer web server
    Serve(serve::ServeArgs),

    /// Analyze a document from the terminal
    Analyze(analyze::AnalyzeArgs),
}

impl Cli {
    pub async fn execute(self) -> Result<()> {
        let project_dir = self
            .project
            .unwrap_or_else(|| std::env::current_dir().unwrap());

        // One provider configuration for the whole process.
        let llm = LlmConfig {
            api_url: self.api_url,
            api_key: self.api_key,
            model: self.model,
            max_tokens: self.max_tokens,
        };

        match self.command {
            Commands::Serve(args) => serve::execute(args, &project_dir, llm).await,
            Commands::Analyze(args) => analyze::execute(args, llm).await,
        }
    }
}
