//! Branchview HTTP Client
//!
//! Fetches repository and branch listings from a GitHub-compatible API and
//! exposes them as single-value, cancellable results.
//!
//! - [`FetchClient`]: one GET per call, JSON decoded into a typed record
//! - [`GithubSource`]: the two endpoints (repository listing, branch listing)
//! - [`SharedFetch`]: one execution, many consumers
//! - [`BranchScreen`]: title and branch list of one chosen repository
//!
//! # Example
//!
//! ```no_run
//! use std::sync::Arc;
//! use branchview_client::{BranchScreen, GithubSource, DEFAULT_BASE_URL};
//! use branchview_core::selection::Selection;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let source = Arc::new(GithubSource::new(DEFAULT_BASE_URL)?);
//!     let screen = BranchScreen::load(source, Selection::Random)?;
//!
//!     println!("{}", screen.title().await?);
//!     for branch in screen.branches().await? {
//!         println!("  {}", branch.name);
//!     }
//!     Ok(())
//! }
//! ```

pub mod error;
mod fetch;
mod screen;
mod shared;
mod source;

#[cfg(test)]
mod test_support;

// Re-export commonly used types
pub use error::{ClientError, Result};
pub use fetch::{FetchClient, FetchTask, USER_AGENT};
pub use screen::{BranchScreen, LOADING_TITLE, TitleState};
pub use shared::{SharedFetch, SharedResult};
pub use source::{DEFAULT_BASE_URL, GithubSource, RepositorySource};
