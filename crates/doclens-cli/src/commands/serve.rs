//! Web server command.

use anyhow::Result;
use clap::Args;
use colored::Colorize;
use std::path::Path;
use std::sync::Arc;

use doclens_llm::{DocumentAnalyzer, GroqClient, LlmConfig};

#[derive(Args)]
pub struct ServeArgs {
    /// Port to listen on
    #[arg(long, default_value = "3030")]
    pub port: u16,

    /// Host to bind to
    #[arg(long, default_value = "127.0.0.1")]
    pub host: String,
}

pub async fn execute(args: ServeArgs, project_dir: &Path, llm: LlmConfig) -> Result<()> {
    let client = GroqClient::new(&llm)?;
    let analyzer = Arc::new(DocumentAnalyzer::new(Arc::new(client)));

    let written = doclens_web::assets::write_assets(project_dir)?;
    for path in &written {
        tracing::debug!(path = %path, "Wrote front-end asset");
    }

    println!();
    println!("  {} {}", "Doclens".cyan().bold(), "Web Server".bold());
    println!();
    println!(
        "  {}  http://{}:{}",
        "Analyzer".green(),
        args.host,
        args.port
    );
    println!(
        "  {}       http://{}:{}/analyze",
        "API".green(),
        args.host,
        args.port
    );
    println!("  {}     {}", "Model".green(), llm.model);
    println!();
    println!("  {}", "Ctrl+C to stop".dimmed());
    println!();

    doclens_web::run_server(analyzer, &args.host, args.port).await?;

    Ok(())
}
