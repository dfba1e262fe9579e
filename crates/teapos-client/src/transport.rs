//! HTTP transport abstraction.
//!
//! The client core is transport-agnostic: inside a Spin component it
//! rides the platform's outbound HTTP host calls, while tests and the
//! native demo tool use an in-memory transport with canned responses.

use async_trait::async_trait;

use crate::error::ApiError;

/// Raw HTTP transport used by [`PosApi`](crate::PosApi).
///
/// Implementations return the response status and body verbatim;
/// status interpretation happens in the client.
#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
pub trait Transport: Send + Sync {
    /// Issue a GET request.
    async fn get(&self, url: &str) -> Result<(u16, String), ApiError>;

    /// Issue a POST request carrying a JSON body.
    async fn post_json(&self, url: &str, body: String) -> Result<(u16, String), ApiError>;
}

/// Transport backed by the Spin outbound HTTP host API.
#[cfg(target_arch = "wasm32")]
#[derive(Debug, Default)]
pub struct SpinTransport;

#[cfg(target_arch = "wasm32")]
impl SpinTransport {
    /// Create a new Spin-backed transport.
    pub fn new() -> Self {
        Self
    }
}

#[cfg(target_arch = "wasm32")]
#[async_trait(?Send)]
impl Transport for SpinTransport {
    async fn get(&self, url: &str) -> Result<(u16, String), ApiError> {
        let req = spin_sdk::http::Request::get(url);
        let resp: spin_sdk::http::Response = spin_sdk::http::send(req)
            .await
            .map_err(|e| ApiError::Transport(e.to_string()))?;

        let status = *resp.status();
        let body = String::from_utf8_lossy(resp.body()).into_owned();
        Ok((status, body))
    }

    async fn post_json(&self, url: &str, body: String) -> Result<(u16, String), ApiError> {
        use spin_sdk::http::{Method, Request};

        let mut request = Request::builder();
        request.method(Method::Post);
        request.uri(url);
        request.header("content-type", "application/json");
        let request = request
            .body(body.into_bytes())
            .map_err(|e| ApiError::Transport(e.to_string()))?;

        let resp: spin_sdk::http::Response = spin_sdk::http::send(request)
            .await
            .map_err(|e| ApiError::Transport(e.to_string()))?;

        let status = *resp.status();
        let body = String::from_utf8_lossy(&resp.into_body()).into_owned();
        Ok((status, body))
    }
}

/// In-memory transport serving canned responses.
///
/// Routes are keyed by method and full URL. Unmatched requests get a
/// 404 so client error mapping can be exercised without a server.
/// POST bodies are recorded for inspection.
#[derive(Debug, Default)]
pub struct StaticTransport {
    routes: std::collections::HashMap<String, (u16, String)>,
    posts: std::sync::Mutex<Vec<(String, String)>>,
}

impl StaticTransport {
    /// Create an empty transport.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a GET route.
    pub fn with_get(mut self, url: impl Into<String>, status: u16, body: impl Into<String>) -> Self {
        self.routes
            .insert(format!("GET {}", url.into()), (status, body.into()));
        self
    }

    /// Register a POST route.
    pub fn with_post(mut self, url: impl Into<String>, status: u16, body: impl Into<String>) -> Self {
        self.routes
            .insert(format!("POST {}", url.into()), (status, body.into()));
        self
    }

    /// Bodies of every POST received, in arrival order.
    pub fn recorded_posts(&self) -> Vec<(String, String)> {
        self.posts.lock().unwrap().clone()
    }

    fn lookup(&self, method: &str, url: &str) -> (u16, String) {
        match self.routes.get(&format!("{method} {url}")) {
            Some((status, body)) => (*status, body.clone()),
            None => (404, format!(r#"{{"error":"no route for {method} {url}"}}"#)),
        }
    }
}

#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
impl Transport for StaticTransport {
    async fn get(&self, url: &str) -> Result<(u16, String), ApiError> {
        Ok(self.lookup("GET", url))
    }

    async fn post_json(&self, url: &str, body: String) -> Result<(u16, String), ApiError> {
        self.posts.lock().unwrap().push((url.to_string(), body));
        Ok(self.lookup("POST", url))
    }
}
