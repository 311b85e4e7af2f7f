//! HTTP response handling.

use std::collections::HashMap;

use serde::de::DeserializeOwned;

use crate::FetchError;

/// A fully-received HTTP response.
///
/// The body is always buffered in full before the response is handed to the
/// caller; there is no streaming path in this client.
#[derive(Debug, Clone)]
pub struct Response {
    status: u16,
    headers: HashMap<String, String>,
    body: Vec<u8>,
}

impl Response {
    /// Create a response from its parts.
    pub fn new(status: u16, headers: HashMap<String, String>, body: Vec<u8>) -> Self {
        Self {
            status,
            headers,
            body,
        }
    }

    /// The HTTP status code.
    pub fn status(&self) -> u16 {
        self.status
    }

    /// Whether the status is in the 2xx range.
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// Whether the status is in the 4xx range.
    pub fn is_client_error(&self) -> bool {
        (400..500).contains(&self.status)
    }

    /// Whether the status is in the 5xx range.
    pub fn is_server_error(&self) -> bool {
        (500..600).contains(&self.status)
    }

    /// Case-insensitive header lookup.
    pub fn header(&self, key: &str) -> Option<&str> {
        let key = key.to_ascii_lowercase();
        self.headers
            .iter()
            .find(|(k, _)| k.to_ascii_lowercase() == key)
            .map(|(_, v)| v.as_str())
    }

    /// The `Content-Type` header, if present.
    pub fn content_type(&self) -> Option<&str> {
        self.header("Content-Type")
    }

    /// The raw response body.
    pub fn bytes(&self) -> &[u8] {
        &self.body
    }

    /// The response body as UTF-8 text.
    pub fn text(&self) -> Result<String, FetchError> {
        String::from_utf8(self.body.clone())
            .map_err(|e| FetchError::Decode(format!("invalid UTF-8: {e}")))
    }

    /// Deserialize the response body as JSON.
    pub fn json<T: DeserializeOwned>(&self) -> Result<T, FetchError> {
        serde_json::from_slice(&self.body).map_err(|e| FetchError::Decode(e.to_string()))
    }

    /// Convert a non-2xx response into [`FetchError::Status`].
    pub fn error_for_status(self) -> Result<Self, FetchError> {
        if self.is_success() {
            Ok(self)
        } else {
            let message = self.text().unwrap_or_else(|_| "unknown error".to_string());
            Err(FetchError::Status {
                status: self.status,
                message,
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn response(status: u16, body: &[u8]) -> Response {
        Response::new(status, HashMap::new(), body.to_vec())
    }

    fn response_with_headers(status: u16, headers: Vec<(&str, &str)>) -> Response {
        let headers = headers
            .into_iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Response::new(status, headers, Vec::new())
    }

    #[test]
    fn status_ranges() {
        assert!(response(200, b"").is_success());
        assert!(response(204, b"").is_success());
        assert!(!response(301, b"").is_success());
        assert!(response(404, b"").is_client_error());
        assert!(response(503, b"").is_server_error());
        assert!(!response(404, b"").is_server_error());
    }

    #[test]
    fn header_lookup_is_case_insensitive() {
        let resp = response_with_headers(200, vec![("Content-Type", "application/json")]);
        assert_eq!(resp.header("content-type"), Some("application/json"));
        assert_eq!(resp.header("CONTENT-TYPE"), Some("application/json"));
        assert_eq!(resp.header("X-Missing"), None);
        assert_eq!(resp.content_type(), Some("application/json"));
    }

    #[test]
    fn text_decodes_utf8() {
        assert_eq!(response(200, b"hello").text().unwrap(), "hello");
        assert!(response(200, &[0xff, 0xfe]).text().is_err());
    }

    #[test]
    fn json_decodes_body() {
        #[derive(serde::Deserialize, Debug, PartialEq)]
        struct Data {
            value: i32,
        }

        let data: Data = response(200, br#"{"value": 42}"#).json().unwrap();
        assert_eq!(data, Data { value: 42 });

        let bad: Result<Data, _> = response(200, b"not json").json();
        assert!(bad.is_err());
    }

    #[test]
    fn error_for_status_passes_success_through() {
        assert!(response(200, b"ok").error_for_status().is_ok());
    }

    #[test]
    fn error_for_status_captures_status_and_body() {
        let err = response(404, b"missing").error_for_status().unwrap_err();
        match err {
            FetchError::Status { status, message } => {
                assert_eq!(status, 404);
                assert_eq!(message, "missing");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }
}
