//! Fetch client
//!
//! Issues one HTTP GET per call and decodes the JSON body into a typed
//! record. Each call returns a [`FetchTask`]: a single-value future that
//! resolves to the decoded value or to exactly one error, and that aborts
//! the underlying request when cancelled or dropped.

use std::future::Future;
use std::pin::Pin;
use std::task::{Context, Poll, ready};

use reqwest::Client;
use reqwest::header::ACCEPT;
use serde::de::DeserializeOwned;
use tokio::runtime::Handle;
use tokio::task::JoinHandle;
use tracing::{debug, warn};
use url::Url;

use crate::error::{ClientError, Result};

/// User agent sent with every request; the public API rejects requests without one
pub const USER_AGENT: &str = concat!("branchview/", env!("CARGO_PKG_VERSION"));

const ACCEPT_JSON: &str = "application/vnd.github+json";

/// HTTP client that performs single GET requests and decodes JSON responses
#[derive(Debug, Clone)]
pub struct FetchClient {
    /// HTTP client instance
    client: Client,
}

impl FetchClient {
    /// Create a new fetch client with the default user agent
    pub fn new() -> Result<Self> {
        let client = Client::builder().user_agent(USER_AGENT).build()?;
        Ok(Self { client })
    }

    /// Create a new fetch client with a custom HTTP client
    ///
    /// This allows you to configure timeouts, proxies, TLS settings, etc.
    /// The custom client is responsible for setting a user agent.
    ///
    /// # Example
    /// ```
    /// use branchview_client::FetchClient;
    /// use reqwest::Client;
    ///
    /// let http_client = Client::builder()
    ///     .user_agent("my-app/1.0")
    ///     .build()
    ///     .unwrap();
    ///
    /// let fetch = FetchClient::with_client(http_client);
    /// ```
    pub fn with_client(client: Client) -> Self {
        Self { client }
    }

    /// Start fetching `url` and decode the body as `T`
    ///
    /// The URL is parsed before anything is sent; a malformed URL is
    /// reported as [`ClientError::InvalidUrl`].
    ///
    /// # Arguments
    /// * `url` - Absolute URL to GET
    ///
    /// # Returns
    /// A task that resolves once with the decoded value or an error
    ///
    /// # Example
    /// ```no_run
    /// # use branchview_client::FetchClient;
    /// # use branchview_core::domain::branch::Branch;
    /// # async fn example() -> anyhow::Result<()> {
    /// let fetch = FetchClient::new()?;
    /// let branches: Vec<Branch> = fetch
    ///     .execute("https://api.github.com/repos/rust-lang/rust/branches")?
    ///     .await?;
    /// # Ok(())
    /// # }
    /// ```
    pub fn execute<T>(&self, url: &str) -> Result<FetchTask<T>>
    where
        T: DeserializeOwned + Send + 'static,
    {
        let parsed =
            Url::parse(url).map_err(|e| ClientError::InvalidUrl(format!("{}: {}", url, e)))?;
        self.execute_url(parsed)
    }

    /// Start fetching an already parsed URL and decode the body as `T`
    ///
    /// Must be called from within a Tokio runtime.
    pub fn execute_url<T>(&self, url: Url) -> Result<FetchTask<T>>
    where
        T: DeserializeOwned + Send + 'static,
    {
        let runtime = Handle::try_current()
            .map_err(|e| ClientError::InternalError(format!("No async runtime: {}", e)))?;

        debug!("GET {}", url);
        let request = self
            .client
            .get(url.clone())
            .header(ACCEPT, ACCEPT_JSON);

        let task_url = url.clone();
        let handle = runtime.spawn(async move {
            let result = match request.send().await {
                Ok(response) => handle_response(response).await,
                Err(e) => Err(ClientError::from(e)),
            };
            if let Err(e) = &result {
                warn!("GET {} failed: {}", task_url, e);
            }
            result
        });

        Ok(FetchTask { url, handle })
    }
}

/// Check the status code and decode the response body
///
/// Non-success statuses become [`ClientError::ApiError`] carrying the body
/// text (or the status reason when the body is empty). A success with an
/// empty body is [`ClientError::EmptyBody`].
async fn handle_response<T: DeserializeOwned>(response: reqwest::Response) -> Result<T> {
    let status = response.status();
    let body = response.bytes().await?;

    if !status.is_success() {
        let message = if body.is_empty() {
            status
                .canonical_reason()
                .unwrap_or("Unknown error")
                .to_string()
        } else {
            String::from_utf8_lossy(&body).into_owned()
        };
        return Err(ClientError::api_error(status.as_u16(), message));
    }

    if body.is_empty() {
        return Err(ClientError::EmptyBody);
    }

    Ok(serde_json::from_slice(&body)?)
}

/// An in-flight fetch
///
/// Resolves exactly once. Dropping the task, or calling [`FetchTask::cancel`],
/// aborts the request and releases its connection; a cancelled task resolves
/// to [`ClientError::Cancelled`] and never yields a value.
#[derive(Debug)]
pub struct FetchTask<T> {
    url: Url,
    handle: JoinHandle<Result<T>>,
}

impl<T> FetchTask<T> {
    /// URL being fetched
    pub fn url(&self) -> &Url {
        &self.url
    }

    /// Abort the request
    pub fn cancel(&self) {
        debug!("Cancelling GET {}", self.url);
        self.handle.abort();
    }

    /// Whether the request has completed, failed, or been cancelled
    pub fn is_finished(&self) -> bool {
        self.handle.is_finished()
    }
}

impl<T> Future for FetchTask<T> {
    type Output = Result<T>;

    fn poll(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        let joined = ready!(Pin::new(&mut self.handle).poll(cx));
        Poll::Ready(match joined {
            Ok(result) => result,
            Err(e) if e.is_cancelled() => Err(ClientError::Cancelled),
            Err(e) => Err(ClientError::InternalError(format!(
                "Fetch task failed: {}",
                e
            ))),
        })
    }
}

impl<T> Drop for FetchTask<T> {
    fn drop(&mut self) {
        self.handle.abort();
    }
}
