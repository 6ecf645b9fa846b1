//! Branchview CLI
//!
//! Terminal front end that picks a repository from the public listing and
//! shows its branches.

mod commands;
mod config;

use anyhow::Result;
use branchview_client::DEFAULT_BASE_URL;
use clap::Parser;
use commands::{Commands, handle_command};
use config::Config;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "branchview")]
#[command(about = "Browse branches of public repositories", long_about = None)]
struct Cli {
    /// Base URL of the hosting API
    #[arg(long, env = "BRANCHVIEW_API_URL", default_value = DEFAULT_BASE_URL)]
    api_url: String,

    #[command(subcommand)]
    command: Commands,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "branchview=info,branchview_client=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    let config = Config {
        api_url: cli.api_url,
    };
    let source = config.source()?;

    handle_command(cli.command, source).await
}
