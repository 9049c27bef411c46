//! The outcome of a failed network request.
//!
//! A [`RequestFailure`] carries whatever the transport knew when the request
//! failed: the HTTP status code, the response payload and the response
//! headers. Each of these is optional; a connection that never got a response
//! has none of them.
//!
//! The value is immutable once created. Headers handed over as a raw header
//! block are parsed on construction, so [`RequestFailure::response_headers`]
//! always yields a map.
//!
//! ```rust
//! use gosub_net::net::RequestFailure;
//! use serde_json::json;
//!
//! let failure = RequestFailure::new(
//!     Some(500),
//!     Some(json!({ "error": "internal" })),
//!     Some("X-Trace-Id: 123\r\n".into()),
//! );
//!
//! assert_eq!(failure.status_code(), Some(500));
//! assert_eq!(failure.to_string(), "Request has failed. Status Code: 500");
//! ```
use std::fmt::Write;

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use crate::net::headers::{HeaderInput, ResponseHeaders};

/// A failed request: status code, response payload and response headers.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, thiserror::Error)]
#[serde(rename_all = "camelCase", from = "RawRequestFailure")]
#[error("{}", self.describe())]
pub struct RequestFailure {
    /// HTTP status code, if the failure happened at the HTTP level.
    ///
    /// Bounded to `u16`: deserializing a larger `statusCode` is an error.
    #[serde(skip_serializing_if = "Option::is_none")]
    status_code: Option<u16>,

    /// Body or structured error payload returned with the failure. Not inspected.
    #[serde(skip_serializing_if = "Option::is_none")]
    response: Option<Value>,

    /// Response headers. Never a raw header block after construction.
    #[serde(skip_serializing_if = "Option::is_none")]
    response_headers: Option<ResponseHeaders>,
}

impl RequestFailure {
    /// Creates a new failure. Never fails; absent inputs stay absent.
    ///
    /// The status code is not checked against the HTTP status range.
    pub fn new(status_code: Option<u16>, response: Option<Value>, response_headers: Option<HeaderInput>) -> Self {
        Self {
            status_code,
            response,
            response_headers: response_headers.map(HeaderInput::into_headers),
        }
    }

    pub fn status_code(&self) -> Option<u16> {
        self.status_code
    }

    pub fn response(&self) -> Option<&Value> {
        self.response.as_ref()
    }

    pub fn response_headers(&self) -> Option<&ResponseHeaders> {
        self.response_headers.as_ref()
    }

    /// Human readable summary, e.g. `"Request has failed. Status Code: 404"`.
    ///
    /// The status code is appended whenever it is present, including `0`.
    pub fn describe(&self) -> String {
        let mut s = String::from("Request has failed.");
        if let Some(code) = self.status_code {
            let _ = write!(s, " Status Code: {code}");
        }
        s
    }
}

impl From<reqwest::Error> for RequestFailure {
    fn from(e: reqwest::Error) -> Self {
        log::warn!("request failed: {e}");
        Self::new(e.status().map(|s| s.as_u16()), None, None)
    }
}

/// Wire shape used for deserialization. Headers may arrive as a raw block and
/// go through the same normalisation as [`RequestFailure::new`].
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawRequestFailure {
    #[serde(default)]
    status_code: Option<u16>,
    #[serde(default, deserialize_with = "present")]
    response: Option<Value>,
    #[serde(default)]
    response_headers: Option<HeaderInput>,
}

// A key that is there is `Some`, even when its value is `null`. A missing key
// falls back to `#[serde(default)]`.
fn present<'de, D: Deserializer<'de>>(d: D) -> Result<Option<Value>, D::Error> {
    Value::deserialize(d).map(Some)
}

impl From<RawRequestFailure> for RequestFailure {
    fn from(raw: RawRequestFailure) -> Self {
        RequestFailure::new(raw.status_code, raw.response, raw.response_headers)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn headers(pairs: &[(&str, &str)]) -> ResponseHeaders {
        pairs.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect()
    }

    #[test]
    fn no_arguments() {
        let f = RequestFailure::new(None, None, None);
        assert_eq!(f.describe(), "Request has failed.");
        assert_eq!(f.status_code(), None);
        assert!(f.response().is_none());
        assert!(f.response_headers().is_none());
        assert_eq!(f, RequestFailure::default());
    }

    #[test]
    fn status_code_only() {
        let f = RequestFailure::new(Some(404), None, None);
        assert_eq!(f.describe(), "Request has failed. Status Code: 404");
    }

    #[test]
    fn zero_status_code_is_present() {
        let f = RequestFailure::new(Some(0), None, None);
        assert_eq!(f.status_code(), Some(0));
        assert_eq!(f.describe(), "Request has failed. Status Code: 0");
    }

    #[test]
    fn status_code_is_not_range_checked() {
        let f = RequestFailure::new(Some(999), None, None);
        assert_eq!(f.describe(), "Request has failed. Status Code: 999");
    }

    #[test]
    fn raw_headers_are_parsed() {
        let f = RequestFailure::new(
            None,
            None,
            Some("Content-Type: text/html\r\nContent-Length: 42\r\n".into()),
        );
        assert_eq!(
            f.response_headers(),
            Some(&headers(&[("Content-Type", "text/html"), ("Content-Length", "42")]))
        );
    }

    #[test]
    fn parsed_headers_are_kept() {
        let input = headers(&[(" X-Pad ", "  v  "), ("X-Custom", "abc")]);
        let f = RequestFailure::new(None, None, Some(input.clone().into()));
        assert_eq!(f.response_headers(), Some(&input));
    }

    #[test]
    fn empty_headers_are_present_but_empty() {
        let f = RequestFailure::new(None, None, Some(ResponseHeaders::new().into()));
        assert_eq!(f.response_headers(), Some(&ResponseHeaders::new()));
    }

    #[test]
    fn describe_is_stable_and_matches_display() {
        let f = RequestFailure::new(Some(503), Some(json!("busy")), None);
        let first = f.describe();
        assert_eq!(f.describe(), first);
        assert_eq!(f.to_string(), first);
        assert_eq!(f.response(), Some(&json!("busy")));
    }

    #[test]
    fn end_to_end() {
        let f = RequestFailure::new(Some(500), Some(json!({ "error": "internal" })), Some("X-Trace-Id: 123\r\n".into()));

        assert_eq!(f.status_code(), Some(500));
        assert_eq!(f.response().and_then(|r| r["error"].as_str()), Some("internal"));
        assert_eq!(f.response_headers(), Some(&headers(&[("X-Trace-Id", "123")])));
        assert_eq!(f.describe(), "Request has failed. Status Code: 500");
    }

    #[test]
    fn usable_as_boxed_error() {
        fn fails() -> Result<(), Box<dyn std::error::Error>> {
            Err(RequestFailure::new(Some(401), None, None).into())
        }

        let err = fails().unwrap_err();
        assert_eq!(err.to_string(), "Request has failed. Status Code: 401");
    }

    #[test]
    fn serializes_camel_case_and_omits_absent_fields() {
        let f = RequestFailure::new(Some(404), None, Some(headers(&[("A", "1")]).into()));
        let v = serde_json::to_value(&f).unwrap();
        assert_eq!(v, json!({ "statusCode": 404, "responseHeaders": { "A": "1" } }));

        let empty = serde_json::to_value(RequestFailure::default()).unwrap();
        assert_eq!(empty, json!({}));
    }

    #[test]
    fn deserializing_raw_headers_normalises_them() {
        let f: RequestFailure = serde_json::from_str(
            r#"{"statusCode":500,"response":{"error":"internal"},"responseHeaders":"X-Trace-Id: 123\r\n"}"#,
        )
        .unwrap();

        assert_eq!(f.status_code(), Some(500));
        assert_eq!(f.response_headers(), Some(&headers(&[("X-Trace-Id", "123")])));
    }

    #[test]
    fn serde_roundtrip_preserves_value() {
        let f = RequestFailure::new(Some(418), Some(json!([1, 2, 3])), Some("Teapot: yes\r\n".into()));
        let json = serde_json::to_string(&f).unwrap();
        let back: RequestFailure = serde_json::from_str(&json).unwrap();
        assert_eq!(back, f);
    }

    #[test]
    fn serde_roundtrip_preserves_null_payload() {
        let f = RequestFailure::new(None, Some(Value::Null), None);
        let json = serde_json::to_string(&f).unwrap();
        assert_eq!(json, r#"{"response":null}"#);

        let back: RequestFailure = serde_json::from_str(&json).unwrap();
        assert_eq!(back.response(), Some(&Value::Null));
        assert_eq!(back, f);

        let missing: RequestFailure = serde_json::from_str("{}").unwrap();
        assert!(missing.response().is_none());
    }

    #[test]
    fn status_code_beyond_u16_is_rejected_on_the_wire() {
        let err = serde_json::from_str::<RequestFailure>(r#"{"statusCode":70000}"#).unwrap_err();
        assert!(err.to_string().contains("expected u16"));

        let f: RequestFailure = serde_json::from_str(r#"{"statusCode":65535}"#).unwrap();
        assert_eq!(f.status_code(), Some(65535));
    }
}
