//! One-shot document analysis command.

use anyhow::{bail, Context, Result};
use clap::Args;
use indicatif::{ProgressBar, ProgressStyle};
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use doclens_core::validate_document;
use doclens_llm::{DocumentAnalyzer, GroqClient, LlmConfig};

use crate::output;

#[derive(Args)]
pub struct AnalyzeArgs {
    /// Document text to analyze
    pub text: Option<String>,

    /// Read the document from a file instead
    #[arg(long, conflicts_with = "text")]
    pub file: Option<PathBuf>,

    /// Print the raw JSON report
    #[arg(long)]
    pub json: bool,
}

pub async fn execute(args: AnalyzeArgs, llm: LlmConfig) -> Result<()> {
    let raw = match (&args.text, &args.file) {
        (Some(text), _) => text.clone(),
        (None, Some(path)) => std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?,
        (None, None) => bail!("Provide a document as an argument or with --file"),
    };

    let document = validate_document(&raw)?;

    let client = GroqClient::new(&llm)?;
    let analyzer = DocumentAnalyzer::new(Arc::new(client));

    let spinner = ProgressBar::new_spinner();
    spinner.set_style(ProgressStyle::default_spinner());
    spinner.set_message("Analyzing document...");
    spinner.enable_steady_tick(Duration::from_millis(80));

    let report = analyzer.analyze(&document).await;

    spinner.finish_and_clear();
    let report = report?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        output::print_report(&report);
    }

    Ok(())
}
