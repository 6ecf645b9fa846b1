//! Repository data source
//!
//! Builds the two endpoint URLs of the hosting API over one base host and
//! hands them to the [`FetchClient`]. No state is kept between calls.

use branchview_core::domain::branch::Branch;
use branchview_core::domain::repository::Repository;
use url::Url;

use crate::error::{ClientError, Result};
use crate::fetch::{FetchClient, FetchTask};

/// Default base host of the public API
pub const DEFAULT_BASE_URL: &str = "https://api.github.com";

/// Source of repository listings and branch listings
///
/// Trait-based so the screen model can be driven by a stub in tests.
pub trait RepositorySource: Send + Sync {
    /// Start fetching the public repository listing
    ///
    /// `GET {base}/repositories`
    fn repositories(&self) -> Result<FetchTask<Vec<Repository>>>;

    /// Start fetching the branches of one repository
    ///
    /// `GET {base}/repos/{owner}/{repo}/branches`
    ///
    /// # Arguments
    /// * `owner_login` - Login of the repository owner
    /// * `repo_name` - Repository name
    fn branches(&self, owner_login: &str, repo_name: &str) -> Result<FetchTask<Vec<Branch>>>;
}

/// HTTP implementation of [`RepositorySource`] for a GitHub-compatible API
#[derive(Debug, Clone)]
pub struct GithubSource {
    /// Base URL of the API (e.g., "https://api.github.com")
    base_url: Url,
    fetch: FetchClient,
}

impl GithubSource {
    /// Create a source for the given base URL with a default fetch client
    ///
    /// # Example
    /// ```
    /// use branchview_client::GithubSource;
    ///
    /// let source = GithubSource::new("https://api.github.com").unwrap();
    /// assert_eq!(
    ///     source.repositories_url().unwrap().as_str(),
    ///     "https://api.github.com/repositories"
    /// );
    /// ```
    pub fn new(base_url: &str) -> Result<Self> {
        Self::with_fetch_client(base_url, FetchClient::new()?)
    }

    /// Create a source that issues requests through `fetch`
    pub fn with_fetch_client(base_url: &str, fetch: FetchClient) -> Result<Self> {
        let base_url = parse_base_url(base_url)?;
        Ok(Self { base_url, fetch })
    }

    /// Get the base URL
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// URL of the repository listing
    pub fn repositories_url(&self) -> Result<Url> {
        self.endpoint(&["repositories"])
    }

    /// URL of the branch listing for `owner_login/repo_name`
    ///
    /// Owner and repository are used verbatim as single path segments;
    /// reserved characters are percent-encoded.
    pub fn branches_url(&self, owner_login: &str, repo_name: &str) -> Result<Url> {
        self.endpoint(&["repos", owner_login, repo_name, "branches"])
    }

    fn endpoint(&self, segments: &[&str]) -> Result<Url> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| ClientError::InvalidUrl(format!("{} cannot be a base", self.base_url)))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }
}

impl RepositorySource for GithubSource {
    fn repositories(&self) -> Result<FetchTask<Vec<Repository>>> {
        self.fetch.execute_url(self.repositories_url()?)
    }

    fn branches(&self, owner_login: &str, repo_name: &str) -> Result<FetchTask<Vec<Branch>>> {
        self.fetch
            .execute_url(self.branches_url(owner_login, repo_name)?)
    }
}

/// Parse and check a base URL
///
/// Only http and https bases are accepted; query and fragment are dropped.
fn parse_base_url(base_url: &str) -> Result<Url> {
    let mut url = Url::parse(base_url.trim())
        .map_err(|e| ClientError::InvalidUrl(format!("{}: {}", base_url, e)))?;

    if !matches!(url.scheme(), "http" | "https") {
        return Err(ClientError::InvalidUrl(format!(
            "{}: unsupported scheme '{}'",
            base_url,
            url.scheme()
        )));
    }

    url.set_query(None);
    url.set_fragment(None);
    Ok(url)
}
