//! Commands module
//!
//! Defines all CLI commands and their handlers.

mod browse;
mod listing;

use std::sync::Arc;

use anyhow::Result;
use branchview_client::GithubSource;
use clap::Subcommand;

/// Top-level CLI commands
#[derive(Subcommand)]
pub enum Commands {
    /// Pick a repository from the public listing and show its branches
    Show {
        /// Index into the listing instead of a random pick
        #[arg(short, long)]
        index: Option<usize>,
    },
    /// List the public repository listing
    Repos,
    /// List the branches of a repository
    Branches {
        /// Owner login
        owner: String,

        /// Repository name
        repo: String,
    },
}

/// Handle a CLI command
///
/// Routes the command to the appropriate handler module.
pub async fn handle_command(command: Commands, source: Arc<GithubSource>) -> Result<()> {
    match command {
        Commands::Show { index } => browse::show(source, index.into()).await,
        Commands::Repos => listing::list_repositories(&*source).await,
        Commands::Branches { owner, repo } => {
            listing::list_branches(&*source, &owner, &repo).await
        }
    }
}
