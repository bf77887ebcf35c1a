//! nextdown CLI - save a Next.js page as Markdown.

use std::path::PathBuf;
use std::time::Duration;

use anyhow::Context;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use nextdown::{parse, ParseOptions, DEFAULT_USER_AGENT};

/// Convert a statically generated Next.js page to Markdown.
#[derive(Parser)]
#[command(name = "nextdown", version, about)]
struct Cli {
    /// Page URL
    url: String,

    /// Output file
    #[arg(short, long, default_value = "output.md")]
    output: PathBuf,

    /// Request timeout in milliseconds
    #[arg(long, env = "NEXTDOWN_TIMEOUT_MS", default_value_t = 10_000)]
    timeout: u64,

    /// User-Agent header
    #[arg(long, env = "NEXTDOWN_USER_AGENT", default_value = DEFAULT_USER_AGENT)]
    user_agent: String,

    /// Log progress at INFO level
    #[arg(short, long)]
    verbose: bool,
}

/// --verbose enables INFO level, otherwise use RUST_LOG or default to WARN
fn log_filter(verbose: bool) -> EnvFilter {
    if verbose {
        return EnvFilter::new("info");
    }
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(log_filter(cli.verbose))
        .init();

    let options = ParseOptions::default()
        .with_timeout(Duration::from_millis(cli.timeout))
        .with_user_agent(&cli.user_agent);

    let result = parse(&cli.url, &options).await?;

    std::fs::write(&cli.output, &result.full_markdown)
        .with_context(|| format!("Failed to write {}", cli.output.display()))?;

    println!("{}", result.title);
    println!("Saved to {}", cli.output.display());
    Ok(())
}
