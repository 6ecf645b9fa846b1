//! Listing command handlers
//!
//! Plain listings of the two endpoints without a screen around them.

use anyhow::{Context, Result};
use branchview_client::RepositorySource;
use colored::*;

use super::browse::print_branches;

/// List the public repository listing with each entry's index
pub async fn list_repositories(source: &dyn RepositorySource) -> Result<()> {
    let repos = source
        .repositories()?
        .await
        .context("Failed to fetch repositories")?;

    if repos.is_empty() {
        println!("{}", "No repositories.".yellow());
        return Ok(());
    }

    println!("{}", format!("Found {} repositories:", repos.len()).bold());
    println!();
    for (index, repo) in repos.iter().enumerate() {
        println!("  {:>3}  {}", index.to_string().dimmed(), repo.full_name());
    }

    Ok(())
}

/// List the branches of `owner/repo`
pub async fn list_branches(source: &dyn RepositorySource, owner: &str, repo: &str) -> Result<()> {
    let branches = source
        .branches(owner, repo)?
        .await
        .with_context(|| format!("Failed to fetch branches of {}/{}", owner, repo))?;

    println!("{}", format!("{}/{}", owner, repo).bold());
    print_branches(&branches);

    Ok(())
}
