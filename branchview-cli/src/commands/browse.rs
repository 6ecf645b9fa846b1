//! Show command handler
//!
//! Renders the branch screen in the terminal: the title placeholder, the
//! chosen repository, then one row per branch.

use std::sync::Arc;

use anyhow::{Context, Result};
use branchview_client::{BranchScreen, GithubSource, TitleState};
use branchview_core::domain::branch::Branch;
use branchview_core::selection::Selection;
use colored::*;
use futures::StreamExt;
use tracing::info;

/// Show the branches of one repository picked from the listing
pub async fn show(source: Arc<GithubSource>, selection: Selection) -> Result<()> {
    let screen = BranchScreen::load(source, selection).context("Failed to start loading")?;

    let mut titles = Box::pin(screen.title_updates());
    while let Some(title) = titles.next().await {
        match render_title(&title) {
            Some(line) => println!("{}", line),
            // Reported once through the error returned below
            None => break,
        }
    }

    let repo = screen
        .selected()
        .await
        .context("Failed to fetch repositories")?;
    info!("Showing branches of {}", repo);

    let branches = screen
        .branches()
        .await
        .with_context(|| format!("Failed to fetch branches of {}", repo))?;
    print_branches(&branches);

    Ok(())
}

/// Styled title line, or `None` for a failed title
fn render_title(title: &TitleState) -> Option<ColoredString> {
    match title {
        TitleState::Loading => Some(title.to_string().dimmed()),
        TitleState::Ready(_) => Some(title.to_string().bold()),
        TitleState::Failed(_) => None,
    }
}

/// Print one row per branch
pub fn print_branches(branches: &[Branch]) {
    if branches.is_empty() {
        println!("{}", "No branches.".yellow());
        return;
    }

    println!();
    for branch in branches {
        println!("  {} {}", "▸".cyan(), branch.name);
    }
}
