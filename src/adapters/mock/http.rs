//! Mock HTTP client for testing.
//!
//! Provides a configurable mock HTTP client that returns predefined
//! responses or transport errors and records every request it sees.

use async_trait::async_trait;
use std::collections::{HashMap, VecDeque};
use std::sync::{Arc, Mutex};

use crate::traits::{Headers, HttpClient, HttpError, Response};

/// A recorded HTTP request for verification in tests.
#[derive(Debug, Clone)]
pub struct RecordedRequest {
    /// HTTP method (GET, POST, PUT or DELETE)
    pub method: String,
    /// Request URL
    pub url: String,
    /// Request headers
    pub headers: Headers,
    /// Request body (for POST and PUT requests)
    pub body: Option<String>,
}

impl RecordedRequest {
    /// Parse the recorded body as JSON.
    pub fn json_body(&self) -> Option<serde_json::Value> {
        self.body
            .as_deref()
            .and_then(|body| serde_json::from_str(body).ok())
    }
}

/// Configuration for a mock response.
#[derive(Debug, Clone)]
pub enum MockResponse {
    /// Return a response (any status)
    Success(Response),
    /// Fail at the transport layer
    Error(HttpError),
}

#[derive(Debug, Default)]
struct Routes {
    /// Responses that are used every time the route matches
    fixed: HashMap<(String, String), MockResponse>,
    /// Responses consumed one per request before falling back to `fixed`
    queued: HashMap<(String, String), VecDeque<MockResponse>>,
}

/// Mock HTTP client for testing.
///
/// Routes are keyed by method and URL. A route URL matches a request URL
/// exactly or as a prefix ending at a `/` or `?` boundary (longest prefix
/// wins), so a `GET .../books` route also answers `GET .../books?status=reading`
/// but a `.../books/4` route does not answer `.../books/42`.
///
/// # Example
///
/// ```ignore
/// use shelf::adapters::mock::{MockHttpClient, MockResponse};
/// use shelf::traits::{HttpClient, Response, Headers};
///
/// let client = MockHttpClient::new();
/// client.set_response("GET", "http://api/books", MockResponse::Success(Response::new(200, "[]")));
///
/// let response = client.get("http://api/books", &Headers::new()).await?;
/// assert_eq!(response.status, 200);
/// assert_eq!(client.get_requests().len(), 1);
/// ```
#[derive(Debug, Clone)]
pub struct MockHttpClient {
    routes: Arc<Mutex<Routes>>,
    /// Default response when no route matches
    default_response: Arc<Mutex<Option<MockResponse>>>,
    /// Recorded requests for verification
    requests: Arc<Mutex<Vec<RecordedRequest>>>,
}

impl MockHttpClient {
    /// Create a new mock HTTP client.
    pub fn new() -> Self {
        Self {
            routes: Arc::new(Mutex::new(Routes::default())),
            default_response: Arc::new(Mutex::new(None)),
            requests: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Set the response for a method and URL.
    pub fn set_response(&self, method: &str, url: &str, response: MockResponse) {
        let mut routes = self.routes.lock().unwrap();
        routes
            .fixed
            .insert((method.to_string(), url.to_string()), response);
    }

    /// Queue a one-shot response for a method and URL.
    ///
    /// Queued responses are returned in order before the fixed response
    /// for the same route is consulted.
    pub fn push_response(&self, method: &str, url: &str, response: MockResponse) {
        let mut routes = self.routes.lock().unwrap();
        routes
            .queued
            .entry((method.to_string(), url.to_string()))
            .or_default()
            .push_back(response);
    }

    /// Set a default response for requests without a matching route.
    pub fn set_default_response(&self, response: MockResponse) {
        let mut default = self.default_response.lock().unwrap();
        *default = Some(response);
    }

    /// Get all recorded requests.
    pub fn get_requests(&self) -> Vec<RecordedRequest> {
        self.requests.lock().unwrap().clone()
    }

    /// Get recorded requests with the given method.
    pub fn requests_with_method(&self, method: &str) -> Vec<RecordedRequest> {
        self.get_requests()
            .into_iter()
            .filter(|request| request.method == method)
            .collect()
    }

    /// Clear all recorded requests.
    pub fn clear_requests(&self) {
        self.requests.lock().unwrap().clear();
    }

    fn record_request(&self, method: &str, url: &str, headers: &Headers, body: Option<String>) {
        let mut requests = self.requests.lock().unwrap();
        requests.push(RecordedRequest {
            method: method.to_string(),
            url: url.to_string(),
            headers: headers.clone(),
            body,
        });
    }

    /// Whether `pattern` covers `url`: equal, or followed by a path or query.
    fn route_matches(pattern: &str, url: &str) -> bool {
        match url.strip_prefix(pattern) {
            Some(rest) => rest.is_empty() || rest.starts_with('/') || rest.starts_with('?'),
            None => false,
        }
    }

    /// Find the longest matching route URL for `method` among entries
    /// accepted by `usable`.
    fn best_route<'a, V>(
        table: &'a HashMap<(String, String), V>,
        method: &str,
        url: &str,
        usable: impl Fn(&V) -> bool,
    ) -> Option<&'a (String, String)> {
        table
            .iter()
            .filter(|((m, pattern), value)| {
                m == method && Self::route_matches(pattern, url) && usable(*value)
            })
            .map(|(key, _)| key)
            .max_by_key(|(_, pattern)| pattern.len())
    }

    fn get_response(&self, method: &str, url: &str) -> Option<MockResponse> {
        let mut routes = self.routes.lock().unwrap();

        let queued_key =
            Self::best_route(&routes.queued, method, url, |queue| !queue.is_empty()).cloned();
        if let Some(key) = queued_key {
            if let Some(response) = routes.queued.get_mut(&key).and_then(VecDeque::pop_front) {
                return Some(response);
            }
        }

        if let Some(key) = Self::best_route(&routes.fixed, method, url, |_| true) {
            return routes.fixed.get(key).cloned();
        }

        let default = self.default_response.lock().unwrap();
        default.clone()
    }

    fn respond(&self, method: &str, url: &str) -> Result<Response, HttpError> {
        match self.get_response(method, url) {
            Some(MockResponse::Success(response)) => Ok(response),
            Some(MockResponse::Error(err)) => Err(err),
            None => Err(HttpError::Other(format!(
                "No mock response for {} {}",
                method, url
            ))),
        }
    }
}

impl Default for MockHttpClient {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl HttpClient for MockHttpClient {
    async fn get(&self, url: &str, headers: &Headers) -> Result<Response, HttpError> {
        self.record_request("GET", url, headers, None);
        self.respond("GET", url)
    }

    async fn post(&self, url: &str, body: &str, headers: &Headers) -> Result<Response, HttpError> {
        self.record_request("POST", url, headers, Some(body.to_string()));
        self.respond("POST", url)
    }

    async fn put(&self, url: &str, body: &str, headers: &Headers) -> Result<Response, HttpError> {
        self.record_request("PUT", url, headers, Some(body.to_string()));
        self.respond("PUT", url)
    }

    async fn delete(&self, url: &str, headers: &Headers) -> Result<Response, HttpError> {
        self.record_request("DELETE", url, headers, None);
        self.respond("DELETE", url)
    }
}
