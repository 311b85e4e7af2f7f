//! HTTP client utilities for the VeloCart storefront.
//!
//! A thin, ergonomic client with automatic JSON handling over two
//! transports: the browser's `fetch` on `wasm32-unknown-unknown` and Spin's
//! outbound HTTP host on `wasm32-wasi`. On native targets the transport is
//! stubbed out so the request/response plumbing stays unit-testable.
//!
//! # Example
//!
//! ```rust,ignore
//! use velo_data::ApiClient;
//! use serde::Deserialize;
//!
//! #[derive(Deserialize)]
//! struct Product {
//!     id: String,
//!     title: String,
//! }
//!
//! let client = ApiClient::new().with_base_url("https://apis.velocart.dev");
//!
//! let product: Product = client
//!     .get("/products/123")
//!     .bearer_auth(token)
//!     .send()
//!     .await?
//!     .error_for_status()?
//!     .json()?;
//! ```

mod error;
mod request;
mod response;

pub use error::FetchError;
pub use request::{Method, RequestBuilder};
pub use response::Response;

/// HTTP client for outbound API requests.
///
/// Holds an optional base URL and a set of default headers which seed every
/// request built through it.
#[derive(Debug, Clone, Default)]
pub struct ApiClient {
    base_url: Option<String>,
    default_headers: Vec<(String, String)>,
}

impl ApiClient {
    /// Create a client with no base URL or default headers.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a base URL that relative request paths are resolved against.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = Some(base_url.into());
        self
    }

    /// Add a header included on every request built through this client.
    pub fn with_default_header(
        mut self,
        key: impl Into<String>,
        value: impl Into<String>,
    ) -> Self {
        self.default_headers.push((key.into(), value.into()));
        self
    }

    /// Start a GET request.
    pub fn get(&self, url: impl Into<String>) -> RequestBuilder {
        self.request(Method::Get, url)
    }

    /// Start a POST request.
    pub fn post(&self, url: impl Into<String>) -> RequestBuilder {
        self.request(Method::Post, url)
    }

    /// Start a PUT request.
    pub fn put(&self, url: impl Into<String>) -> RequestBuilder {
        self.request(Method::Put, url)
    }

    /// Start a DELETE request.
    pub fn delete(&self, url: impl Into<String>) -> RequestBuilder {
        self.request(Method::Delete, url)
    }

    /// Start a request with an explicit method.
    pub fn request(&self, method: Method, url: impl Into<String>) -> RequestBuilder {
        let mut builder = RequestBuilder::new(method, self.resolve(url.into()));
        for (key, value) in &self.default_headers {
            builder = builder.header(key.clone(), value.clone());
        }
        builder
    }

    /// Resolve a possibly-relative path against the base URL. Absolute URLs
    /// pass through untouched.
    fn resolve(&self, url: String) -> String {
        match &self.base_url {
            Some(base) if !url.starts_with("http://") && !url.starts_with("https://") => {
                format!("{}/{}", base.trim_end_matches('/'), url.trim_start_matches('/'))
            }
            _ => url,
        }
    }
}
