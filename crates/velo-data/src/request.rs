//! HTTP request construction and dispatch.

use std::collections::HashMap;

use serde::Serialize;

use crate::{FetchError, Response};

/// HTTP methods supported by the client.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
    Put,
    Delete,
}

impl Method {
    /// HTTP method string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Method::Get => "GET",
            Method::Post => "POST",
            Method::Put => "PUT",
            Method::Delete => "DELETE",
        }
    }
}

/// A builder for a single outbound request.
///
/// Created through [`crate::ApiClient`], which seeds it with the resolved
/// URL and any default headers.
#[derive(Debug, Clone)]
pub struct RequestBuilder {
    pub(crate) method: Method,
    pub(crate) url: String,
    pub(crate) headers: HashMap<String, String>,
    pub(crate) body: Option<Vec<u8>>,
}

impl RequestBuilder {
    pub(crate) fn new(method: Method, url: String) -> Self {
        Self {
            method,
            url,
            headers: HashMap::new(),
            body: None,
        }
    }

    /// The URL this request will be sent to.
    pub fn url(&self) -> &str {
        &self.url
    }

    /// Add a header to the request.
    pub fn header(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(key.into(), value.into());
        self
    }

    /// Add an `Authorization: Bearer <token>` header.
    pub fn bearer_auth(self, token: impl AsRef<str>) -> Self {
        self.header("Authorization", format!("Bearer {}", token.as_ref()))
    }

    /// Set the `Accept` header.
    pub fn accept(self, content_type: impl Into<String>) -> Self {
        self.header("Accept", content_type)
    }

    /// Set the request body as raw bytes.
    pub fn body(mut self, body: impl Into<Vec<u8>>) -> Self {
        self.body = Some(body.into());
        self
    }

    /// Set the request body as JSON, with the matching `Content-Type`.
    pub fn json<T: Serialize>(mut self, value: &T) -> Result<Self, FetchError> {
        let encoded = serde_json::to_vec(value)?;
        self.headers
            .insert("Content-Type".to_string(), "application/json".to_string());
        self.body = Some(encoded);
        Ok(self)
    }

    /// Send the request via Spin's outbound HTTP host and await the full
    /// response body.
    #[cfg(all(target_arch = "wasm32", target_os = "wasi"))]
    pub async fn send(self) -> Result<Response, FetchError> {
        use spin_sdk::http::{Method as SpinMethod, Request};

        let method = match self.method {
            Method::Get => SpinMethod::Get,
            Method::Post => SpinMethod::Post,
            Method::Put => SpinMethod::Put,
            Method::Delete => SpinMethod::Delete,
        };

        let mut request = Request::builder();
        request.method(method);
        request.uri(&self.url);
        for (key, value) in &self.headers {
            request.header(key.as_str(), value.as_str());
        }
        if let Some(body) = self.body {
            request.body(body);
        }

        let response: spin_sdk::http::Response = spin_sdk::http::send(request.build())
            .await
            .map_err(|e| FetchError::Transport(e.to_string()))?;

        let status = *response.status();
        let headers: std::collections::HashMap<String, String> = response
            .headers()
            .map(|(k, v)| (k.to_string(), v.as_str().unwrap_or("").to_string()))
            .collect();
        let body = response.into_body();

        Ok(Response::new(status, headers, body))
    }

    /// Send the request via the browser's `fetch` and await the full
    /// response body.
    #[cfg(all(target_arch = "wasm32", target_os = "unknown"))]
    pub async fn send(self) -> Result<Response, FetchError> {
        use js_sys::Uint8Array;
        use wasm_bindgen::{JsCast, JsValue};
        use wasm_bindgen_futures::JsFuture;

        fn transport(err: JsValue) -> FetchError {
            FetchError::Transport(format!("{err:?}"))
        }

        let headers = web_sys::Headers::new().map_err(transport)?;
        for (key, value) in &self.headers {
            headers.set(key, value).map_err(transport)?;
        }

        let init = web_sys::RequestInit::new();
        init.set_method(self.method.as_str());
        init.set_headers(headers.as_ref());
        if let Some(body) = &self.body {
            let body: JsValue = Uint8Array::from(body.as_slice()).into();
            init.set_body(&body);
        }

        let window = web_sys::window()
            .ok_or_else(|| FetchError::Transport("no window in scope".to_string()))?;
        let response = JsFuture::from(window.fetch_with_str_and_init(&self.url, &init))
            .await
            .map_err(transport)?;
        let response: web_sys::Response = response.dyn_into().map_err(transport)?;

        let status = response.status();
        let mut header_map = std::collections::HashMap::new();
        if let Ok(Some(entries)) = js_sys::try_iter(response.headers().as_ref()) {
            for entry in entries.flatten() {
                let pair = js_sys::Array::from(&entry);
                if let (Some(key), Some(value)) = (pair.get(0).as_string(), pair.get(1).as_string())
                {
                    header_map.insert(key, value);
                }
            }
        }

        let buffer = JsFuture::from(response.array_buffer().map_err(transport)?)
            .await
            .map_err(transport)?;
        let body = Uint8Array::new(&buffer).to_vec();

        Ok(Response::new(status, header_map, body))
    }

    /// Outbound HTTP is only available on `wasm32` targets; the native build
    /// exists for the test suite and fails any attempt to actually send.
    #[cfg(not(target_arch = "wasm32"))]
    pub async fn send(self) -> Result<Response, FetchError> {
        Err(FetchError::Transport(format!(
            "outbound HTTP is unavailable on native targets ({} {})",
            self.method.as_str(),
            self.url
        )))
    }
}
