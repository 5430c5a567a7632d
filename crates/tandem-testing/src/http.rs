//! In-process HTTP stub for upstream services.
//!
//! Binds an axum router on an ephemeral localhost port and records every
//! request it receives, so tests can assert both on what a client returned and
//! on whether (and how) it called out.

use std::sync::{Arc, Mutex};

use axum::Router;
use axum::extract::Request;
use axum::http::StatusCode;
use axum::middleware::{self, Next};
use axum::routing::get;
use serde_json::Value;
use tokio::net::TcpListener;
use tokio::task::JoinHandle;

use tandem_core::middleware::REQUEST_ID_HEADER;

/// One request observed by a [`StubServer`].
#[derive(Debug, Clone)]
pub struct RecordedRequest {
    pub method: String,
    pub path: String,
    pub request_id: Option<String>,
}

/// A running stub upstream. The server task is aborted on drop.
pub struct StubServer {
    base_url: String,
    requests: Arc<Mutex<Vec<RecordedRequest>>>,
    handle: JoinHandle<()>,
}

impl StubServer {
    /// Serve `router` on `127.0.0.1:<ephemeral>`.
    pub async fn start(router: Router) -> Self {
        let requests: Arc<Mutex<Vec<RecordedRequest>>> = Arc::default();
        let recorder = Arc::clone(&requests);
        let app = router.layer(middleware::from_fn(move |req: Request, next: Next| {
            let recorder = Arc::clone(&recorder);
            async move {
                let recorded = RecordedRequest {
                    method: req.method().to_string(),
                    path: req.uri().path().to_owned(),
                    request_id: req
                        .headers()
                        .get(REQUEST_ID_HEADER)
                        .and_then(|v| v.to_str().ok())
                        .map(str::to_owned),
                };
                recorder.lock().unwrap().push(recorded);
                next.run(req).await
            }
        }));

        let listener = TcpListener::bind("127.0.0.1:0")
            .await
            .expect("bind stub listener");
        let addr = listener.local_addr().expect("stub local addr");
        let handle = tokio::spawn(async move {
            axum::serve(listener, app).await.expect("stub server error");
        });

        Self {
            base_url: format!("http://{addr}"),
            requests,
            handle,
        }
    }

    /// Stub answering `GET path` with a fixed status and JSON body.
    /// `path` uses axum syntax, e.g. `/users/{id}`.
    pub async fn json(path: &str, status: StatusCode, body: Value) -> Self {
        let router = Router::new().route(
            path,
            get(move || {
                let body = body.clone();
                async move { (status, axum::Json(body)) }
            }),
        );
        Self::start(router).await
    }

    /// Stub answering `GET path` with a fixed status and a raw text body.
    pub async fn text(path: &str, status: StatusCode, body: &'static str) -> Self {
        let router = Router::new().route(path, get(move || async move { (status, body) }));
        Self::start(router).await
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.requests.lock().unwrap().clone()
    }

    pub fn hits(&self) -> usize {
        self.requests.lock().unwrap().len()
    }
}

impl Drop for StubServer {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

/// A base URL with nothing listening behind it (connection refused).
pub async fn unreachable_base_url() -> String {
    let listener = TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind probe listener");
    let addr = listener.local_addr().expect("probe local addr");
    drop(listener);
    format!("http://{addr}")
}
