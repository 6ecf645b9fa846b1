//! Branch screen model
//!
//! Drives what the branch screen shows: a title that starts as a
//! placeholder and becomes `owner/repo` for the chosen repository, and the
//! branch list of that same repository. The repository listing is fetched
//! once and shared by both.

use std::fmt;
use std::sync::Arc;

use branchview_core::domain::branch::Branch;
use branchview_core::domain::repository::Repository;
use branchview_core::selection::Selection;
use futures::future;
use futures::stream::{self, Stream, StreamExt};
use tracing::debug;

use crate::error::{ClientError, Result};
use crate::shared::{SharedFetch, SharedResult};
use crate::source::RepositorySource;

/// Title shown while the repository listing is loading
pub const LOADING_TITLE: &str = "Loading...";

/// State of the screen title
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TitleState {
    /// Listing not yet available
    Loading,

    /// `owner/repo` of the chosen repository
    Ready(String),

    /// Listing or selection failed
    Failed(String),
}

impl fmt::Display for TitleState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TitleState::Loading => write!(f, "{}", LOADING_TITLE),
            TitleState::Ready(title) => write!(f, "{}", title),
            TitleState::Failed(message) => write!(f, "Error: {}", message),
        }
    }
}

/// Screen showing the branches of one repository picked from the listing
pub struct BranchScreen {
    source: Arc<dyn RepositorySource>,
    selected: SharedFetch<Repository>,
}

impl BranchScreen {
    /// Start loading the screen
    ///
    /// Issues the repository listing request immediately. The chosen
    /// repository is resolved from the listing once it arrives.
    ///
    /// # Arguments
    /// * `source` - Where listings are fetched from
    /// * `selection` - Which repository of the listing to show
    pub fn load(source: Arc<dyn RepositorySource>, selection: Selection) -> Result<Self> {
        let listing = source.repositories()?;

        let selected = SharedFetch::new(async move {
            let mut repos = listing.await?;
            let index = selection.resolve(repos.len())?;
            debug!("Selected repository {} of {}", index, repos.len());
            Ok::<_, ClientError>(repos.swap_remove(index))
        });

        Ok(Self { source, selected })
    }

    /// The chosen repository
    pub async fn selected(&self) -> SharedResult<Repository> {
        self.selected.clone().await
    }

    /// `owner/repo` of the chosen repository
    pub async fn title(&self) -> SharedResult<String> {
        self.selected().await.map(|repo| repo.full_name())
    }

    /// Title states in display order
    ///
    /// Yields [`TitleState::Loading`] first, then exactly one of
    /// [`TitleState::Ready`] or [`TitleState::Failed`].
    pub fn title_updates(&self) -> impl Stream<Item = TitleState> + Send + 'static {
        let selected = self.selected.clone();
        let resolved = async move {
            match selected.await {
                Ok(repo) => TitleState::Ready(repo.full_name()),
                Err(e) => TitleState::Failed(e.to_string()),
            }
        };

        stream::once(future::ready(TitleState::Loading)).chain(stream::once(resolved))
    }

    /// Branches of the chosen repository, one entry per row
    pub async fn branches(&self) -> SharedResult<Vec<Branch>> {
        let repo = self.selected().await?;
        let task = self.source.branches(&repo.owner.login, &repo.name)?;
        Ok(task.await?)
    }
}

impl fmt::Debug for BranchScreen {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BranchScreen")
            .field("selected", &self.selected)
            .finish_non_exhaustive()
    }
}
