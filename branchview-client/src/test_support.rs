//! In-process mock of the hosting API for tests

use axum::Router;
use axum::extract::State;
use axum::http::{StatusCode, Uri, header};
use axum::response::{IntoResponse, Response};
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use tokio::net::TcpListener;
use tokio::task::JoinHandle;

#[derive(Default)]
struct MockState {
    routes: HashMap<String, (StatusCode, String)>,
    hits: Mutex<Vec<String>>,
}

/// Builds a [`MockServer`] from canned responses keyed by raw request path
#[derive(Default)]
pub(crate) struct MockServerBuilder {
    routes: HashMap<String, (StatusCode, String)>,
}

impl MockServerBuilder {
    pub(crate) fn route(mut self, path: &str, status: StatusCode, body: &str) -> Self {
        self.routes.insert(path.to_string(), (status, body.to_string()));
        self
    }

    pub(crate) fn json(self, path: &str, body: &str) -> Self {
        self.route(path, StatusCode::OK, body)
    }

    pub(crate) async fn start(self) -> MockServer {
        let state = Arc::new(MockState {
            routes: self.routes,
            hits: Mutex::new(Vec::new()),
        });

        let app = Router::new()
            .fallback(respond)
            .with_state(Arc::clone(&state));

        let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind");
        let addr = listener.local_addr().expect("local addr");
        let handle = tokio::spawn(async move {
            axum::serve(listener, app).await.expect("serve");
        });

        MockServer {
            base_url: format!("http://{}", addr),
            state,
            handle,
        }
    }
}

/// Mock API server that records every request path it receives
pub(crate) struct MockServer {
    base_url: String,
    state: Arc<MockState>,
    handle: JoinHandle<()>,
}

impl MockServer {
    pub(crate) fn builder() -> MockServerBuilder {
        MockServerBuilder::default()
    }

    pub(crate) fn base_url(&self) -> &str {
        &self.base_url
    }

    pub(crate) fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Request paths in arrival order
    pub(crate) fn hits(&self) -> Vec<String> {
        self.state.hits.lock().unwrap().clone()
    }

    pub(crate) fn hit_count(&self, path: &str) -> usize {
        self.hits().iter().filter(|hit| hit.as_str() == path).count()
    }
}

impl Drop for MockServer {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

async fn respond(State(state): State<Arc<MockState>>, uri: Uri) -> Response {
    let path = uri.path().to_string();
    state.hits.lock().unwrap().push(path.clone());

    match state.routes.get(&path) {
        Some((status, body)) => {
            (*status, [(header::CONTENT_TYPE, "application/json")], body.clone()).into_response()
        }
        None => (StatusCode::NOT_FOUND, r#"{"message":"Not Found"}"#).into_response(),
    }
}
