//! Minimal HTTP response model.
//!
//! This struct represents a **fully buffered** HTTP response returned by the
//! network layer. It contains the final URL (after redirects, if the client
//! follows them), status code + reason, response headers, and the raw body bytes.
//!
//! ## Notes
//! - The body is stored as raw `Vec<u8>`. For text responses, convert with
//!   `String::from_utf8_lossy(&resp.body)` or similar. For JSON, parse with
//!   `serde_json::from_slice::<T>(&resp.body)`.
//! - `headers` is an `http::HeaderMap`, which is **case-insensitive** for
//!   header names.
//! - A non-2xx response is turned into a [`RequestFailure`] with
//!   [`Response::into_failure`].
//!
use http::HeaderMap;
use serde_json::Value;

use crate::net::headers::HeaderInput;
use crate::net::RequestFailure;

/// Simple structure for HTTP responses.
///
/// All fields reflect the **received** response as-is; no additional parsing
/// or transformation is performed by this type.
#[derive(Debug)]
pub struct Response {
    /// Final URL of the response (after redirects, if any).
    pub url: url::Url,

    /// Numeric HTTP status code (e.g., `200`, `404`).
    pub status: u16,

    /// Human-readable reason phrase (e.g., `"OK"`, `"Not Found"`).
    ///
    /// May be `"Unknown"` for non-standard codes.
    pub status_text: String,

    /// Response headers as a case-insensitive map.
    pub headers: HeaderMap,

    /// Raw response body bytes.
    pub body: Vec<u8>,
}

impl Response {
    /// Returns `true` for 2xx statuses.
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// Converts the response into a [`RequestFailure`].
    ///
    /// The body becomes the failure payload: parsed JSON when it is valid JSON,
    /// otherwise the (lossy) text. An empty body gives no payload.
    pub fn into_failure(self) -> RequestFailure {
        let payload = if self.body.is_empty() {
            None
        } else {
            Some(
                serde_json::from_slice::<Value>(&self.body)
                    .unwrap_or_else(|_| Value::String(String::from_utf8_lossy(&self.body).into_owned())),
            )
        };

        RequestFailure::new(Some(self.status), payload, Some(HeaderInput::from(&self.headers)))
    }
}
