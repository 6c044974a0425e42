//! In-process stand-in for the API, used by the tests.
//!
//! Every request is recorded when it arrives, then answered from a fixed
//! route table. Unknown routes get a 404.

use std::collections::HashMap;
use std::convert::Infallible;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use hyper::service::{make_service_fn, service_fn};
use hyper::{Body, Request, Response, Server};
use serde_json::Value;
use tokio::sync::Mutex;
use tokio::task::JoinHandle;

#[derive(Debug, Clone)]
pub struct MockResponse {
    status: u16,
    body: String,
    content_type: &'static str,
    delay: Duration,
}

impl MockResponse {
    pub fn json(status: u16, body: Value) -> Self {
        Self {
            status,
            body: body.to_string(),
            content_type: "application/json",
            delay: Duration::ZERO,
        }
    }

    pub fn text(status: u16, body: &str) -> Self {
        Self {
            status,
            body: body.to_string(),
            content_type: "text/plain",
            delay: Duration::ZERO,
        }
    }

    pub fn empty(status: u16) -> Self {
        Self::text(status, "")
    }

    /// Holds the response back for `millis` before answering.
    pub fn delayed(mut self, millis: u64) -> Self {
        self.delay = Duration::from_millis(millis);
        self
    }
}

#[derive(Debug, Clone)]
pub struct RecordedRequest {
    pub method: String,
    pub path: String,
    pub headers: HashMap<String, String>,
    pub body: String,
}

impl RecordedRequest {
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name).map(String::as_str)
    }

    pub fn json(&self) -> Value {
        serde_json::from_str(&self.body).expect("request body is not JSON")
    }
}

struct Routes {
    routes: Vec<(String, String, MockResponse)>,
    requests: Mutex<Vec<RecordedRequest>>,
}

pub struct MockServer {
    address: SocketAddr,
    inner: Arc<Routes>,
    runtime: JoinHandle<()>,
}

impl MockServer {
    pub async fn start(routes: Vec<(&str, &str, MockResponse)>) -> Self {
        let inner = Arc::new(Routes {
            routes: routes
                .into_iter()
                .map(|(method, path, response)| (method.to_string(), path.to_string(), response))
                .collect(),
            requests: Mutex::new(vec![]),
        });

        let port = portpicker::pick_unused_port().expect("No free port for the mock server");
        let address: SocketAddr = ([127, 0, 0, 1], port).into();

        let routes = inner.clone();

        let service = make_service_fn(move |_| {
            let routes = routes.clone();

            async move {
                Ok::<_, Infallible>(service_fn(move |req: Request<Body>| {
                    request_handler(req, routes.clone())
                }))
            }
        });

        let server = Server::bind(&address).serve(service);

        let runtime = tokio::spawn(async move {
            if let Err(error) = server.await {
                log::error!("Mock server error: {error}");
            }
        });

        Self {
            address,
            inner,
            runtime,
        }
    }

    pub fn url(&self) -> String {
        format!("http://{}", self.address)
    }

    pub async fn requests(&self) -> Vec<RecordedRequest> {
        self.inner.requests.lock().await.clone()
    }

    pub async fn requests_to(&self, method: &str, path: &str) -> Vec<RecordedRequest> {
        self.requests()
            .await
            .into_iter()
            .filter(|req| req.method == method && req.path == path)
            .collect()
    }
}

impl Drop for MockServer {
    fn drop(&mut self) {
        self.runtime.abort();
    }
}

async fn request_handler(
    req: Request<Body>,
    routes: Arc<Routes>,
) -> Result<Response<Body>, Infallible> {
    let method = req.method().to_string();
    let path = req.uri().path().to_string();

    let headers = req
        .headers()
        .iter()
        .filter_map(|(name, value)| Some((name.to_string(), value.to_str().ok()?.to_string())))
        .collect();

    let body = hyper::body::to_bytes(req.into_body())
        .await
        .map(|bytes| String::from_utf8_lossy(&bytes).into_owned())
        .unwrap_or_default();

    routes.requests.lock().await.push(RecordedRequest {
        method: method.clone(),
        path: path.clone(),
        headers,
        body,
    });

    let found = routes
        .routes
        .iter()
        .find(|(m, p, _)| *m == method && *p == path)
        .map(|(_, _, response)| response.clone());

    let Some(found) = found else {
        return Ok(Response::builder()
            .status(404)
            .header("content-type", "application/json")
            .body(r#"{"detail":"Not Found"}"#.into())
            .unwrap());
    };

    if !found.delay.is_zero() {
        tokio::time::sleep(found.delay).await;
    }

    Ok(Response::builder()
        .status(found.status)
        .header("content-type", found.content_type)
        .body(found.body.into())
        .unwrap())
}
