//! Response header normalisation.
//!
//! Transports hand us response headers in one of two shapes: an already
//! parsed name/value map, or the raw header block as returned by
//! `getAllResponseHeaders()`-style APIs:
//!
//! ```text
//! Content-Type: text/html\r\n
//! Content-Length: 42\r\n
//! ```
//!
//! [`HeaderInput`] makes that choice explicit, and [`parse_response_headers`]
//! turns a raw block into a [`ResponseHeaders`] map.
//!
//! ```rust
//! use gosub_net::net::headers::{parse_response_headers, HeaderInput};
//!
//! let headers = parse_response_headers("Content-Type: text/html\r\nContent-Length: 42\r\n");
//! assert_eq!(headers.get("Content-Length").map(String::as_str), Some("42"));
//!
//! let input: HeaderInput = "X-Trace-Id: 123\r\n".into();
//! assert_eq!(input.into_headers().len(), 1);
//! ```
use std::collections::HashMap;

use http::HeaderMap;
use serde::Deserialize;

/// Header name to header value. Names are stored in the case they were received in.
pub type ResponseHeaders = HashMap<String, String>;

/// Response headers as supplied by a transport.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum HeaderInput {
    /// A raw `Name: Value` header block, one header per line.
    Raw(String),
    /// Headers that are already split into a map. Stored as-is.
    Parsed(ResponseHeaders),
}

impl HeaderInput {
    /// Normalises the input into a header map. Raw blocks are parsed, maps are passed through.
    pub fn into_headers(self) -> ResponseHeaders {
        match self {
            HeaderInput::Raw(raw) => parse_response_headers(&raw),
            HeaderInput::Parsed(headers) => headers,
        }
    }
}

impl From<String> for HeaderInput {
    fn from(raw: String) -> Self {
        HeaderInput::Raw(raw)
    }
}

impl From<&str> for HeaderInput {
    fn from(raw: &str) -> Self {
        HeaderInput::Raw(raw.to_string())
    }
}

impl From<ResponseHeaders> for HeaderInput {
    fn from(headers: ResponseHeaders) -> Self {
        HeaderInput::Parsed(headers)
    }
}

impl From<&HeaderMap> for HeaderInput {
    /// Repeated headers are folded into one comma separated value. Values that
    /// are not valid UTF-8 end up as empty strings.
    fn from(map: &HeaderMap) -> Self {
        let mut headers = ResponseHeaders::new();
        for (name, value) in map.iter() {
            let value = value.to_str().unwrap_or("");
            headers
                .entry(name.to_string())
                .and_modify(|existing: &mut String| {
                    existing.push_str(", ");
                    existing.push_str(value);
                })
                .or_insert_with(|| value.to_string());
        }

        HeaderInput::Parsed(headers)
    }
}

/// Parses a raw response header block into a map.
///
/// Lines are split on CRLF (a bare LF works too). Each line is split on its
/// first `:`. Lines without a colon or without a name are skipped. When a
/// name occurs more than once the last value wins.
pub fn parse_response_headers(raw: &str) -> ResponseHeaders {
    let mut headers = ResponseHeaders::new();

    for line in raw.split('\n') {
        let line = line.strip_suffix('\r').unwrap_or(line);
        if line.trim().is_empty() {
            continue;
        }

        match line.split_once(':') {
            Some((name, value)) if !name.trim().is_empty() => {
                headers.insert(name.trim().to_string(), value.trim().to_string());
            }
            _ => log::trace!("skipping malformed header line: {line:?}"),
        }
    }

    headers
}
