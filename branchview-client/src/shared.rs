//! Shared fetch
//!
//! A fetch whose side effect runs once and whose outcome is delivered to
//! every consumer. Consumers that arrive after completion replay the stored
//! outcome without issuing another request.

use std::fmt;
use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;
use std::task::{Context, Poll};

use futures::future::{BoxFuture, FutureExt, Shared};

use crate::error::{ClientError, Result};
use crate::fetch::FetchTask;

/// Outcome delivered to every consumer of a [`SharedFetch`]
pub type SharedResult<T> = std::result::Result<T, Arc<ClientError>>;

/// A cloneable, single-execution fetch
///
/// Every clone resolves to the same outcome. Dropping all clones before
/// completion drops the underlying future, which cancels its request.
pub struct SharedFetch<T: Clone> {
    inner: Shared<BoxFuture<'static, SharedResult<T>>>,
}

impl<T> SharedFetch<T>
where
    T: Clone + Send + Sync + 'static,
{
    /// Share the outcome of `future` between all clones
    pub fn new<F>(future: F) -> Self
    where
        F: Future<Output = Result<T>> + Send + 'static,
    {
        Self {
            inner: future.map(|result| result.map_err(Arc::new)).boxed().shared(),
        }
    }

    /// Outcome of the fetch if it has already completed
    pub fn peek(&self) -> Option<&SharedResult<T>> {
        self.inner.peek()
    }
}

impl<T> From<FetchTask<T>> for SharedFetch<T>
where
    T: Clone + Send + Sync + 'static,
{
    fn from(task: FetchTask<T>) -> Self {
        Self::new(task)
    }
}

impl<T: Clone> Clone for SharedFetch<T> {
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
        }
    }
}

impl<T: Clone> Future for SharedFetch<T> {
    type Output = SharedResult<T>;

    fn poll(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        Pin::new(&mut self.inner).poll(cx)
    }
}

impl<T: Clone> fmt::Debug for SharedFetch<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SharedFetch")
            .field("strong_count", &self.inner.strong_count())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fetch::FetchClient;
    use crate::test_support::MockServer;
    use axum::http::StatusCode;
    use branchview_core::domain::repository::Repository;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[tokio::test]
    async fn test_many_consumers_one_request() {
        let server = MockServer::builder()
            .json(
                "/repositories",
                r#"[{"name": "repoA", "owner": {"login": "alice"}}]"#,
            )
            .start()
            .await;
        let fetch = FetchClient::new().unwrap();
        let shared: SharedFetch<Vec<Repository>> = fetch
            .execute(&server.url("/repositories"))
            .unwrap()
            .into();

        let consumers: Vec<_> = (0..4).map(|_| tokio::spawn(shared.clone())).collect();
        for consumer in consumers {
            let repos = consumer.await.unwrap().unwrap();
            assert_eq!(repos, vec![Repository::new("alice", "repoA")]);
        }

        // Late subscriber replays the stored outcome
        assert!(shared.peek().is_some());
        let repos = shared.clone().await.unwrap();
        assert_eq!(repos.len(), 1);

        assert_eq!(server.hit_count("/repositories"), 1);
    }

    #[tokio::test]
    async fn test_error_is_shared() {
        let server = MockServer::builder()
            .route("/repositories", StatusCode::INTERNAL_SERVER_ERROR, "")
            .start()
            .await;
        let fetch = FetchClient::new().unwrap();
        let shared: SharedFetch<Vec<Repository>> = fetch
            .execute(&server.url("/repositories"))
            .unwrap()
            .into();

        let first = shared.clone().await.unwrap_err();
        let second = shared.clone().await.unwrap_err();
        assert!(first.is_server_error());
        assert!(Arc::ptr_eq(&first, &second));
        assert_eq!(server.hit_count("/repositories"), 1);
    }

    #[tokio::test]
    async fn test_future_runs_once() {
        let runs = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&runs);
        let shared = SharedFetch::new(async move {
            counter.fetch_add(1, Ordering::SeqCst);
            Ok::<_, ClientError>(42u32)
        });

        assert!(shared.peek().is_none());
        assert_eq!(shared.clone().await.unwrap(), 42);
        assert_eq!(shared.clone().await.unwrap(), 42);
        assert_eq!(runs.load(Ordering::SeqCst), 1);
    }
}
