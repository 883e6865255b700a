//! Inbound request value objects

use std::collections::BTreeMap;

use base64::Engine;
use bytes::Bytes;
use serde::Deserialize;

use crate::domain::error::RequestError;

/// Request headers with case-insensitive lookup.
/// Keeps the names and values exactly as the host delivered them.
/// Deserializes from a name/value map; a `null` map is an empty header set.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(from = "Option<BTreeMap<String, String>>")]
pub struct RequestHeaders {
    entries: Vec<(String, String)>,
}

impl RequestHeaders {
    /// Append a header
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.entries.push((name.into(), value.into()));
    }

    /// First value whose name matches case-insensitively
    pub fn get(&self, name: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }

    /// `Content-Type` header, if present and not blank
    pub fn content_type(&self) -> Option<&str> {
        self.get("content-type").filter(|v| !v.trim().is_empty())
    }

    /// `Content-Length` header parsed as a byte count.
    /// Unparsable values are treated as absent.
    pub fn content_length(&self) -> Option<u64> {
        self.get("content-length")?.trim().parse().ok()
    }
}

impl From<BTreeMap<String, String>> for RequestHeaders {
    fn from(map: BTreeMap<String, String>) -> Self {
        Self {
            entries: map.into_iter().collect(),
        }
    }
}

impl From<Option<BTreeMap<String, String>>> for RequestHeaders {
    fn from(map: Option<BTreeMap<String, String>>) -> Self {
        map.map(Self::from).unwrap_or_default()
    }
}

impl<K, V> FromIterator<(K, V)> for RequestHeaders
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            entries: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

/// A single HTTP-like invocation as delivered by the hosting platform.
///
/// Deserializes from the serverless event shape
/// (`httpMethod`, `headers`, `body`, `isBase64Encoded`).
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InboundRequest {
    #[serde(rename = "httpMethod")]
    pub method: String,
    #[serde(default)]
    pub headers: RequestHeaders,
    #[serde(default)]
    pub body: Option<String>,
    #[serde(default)]
    pub is_base64_encoded: bool,
}

impl InboundRequest {
    /// Create a request with the given method and no headers or body
    pub fn new(method: impl Into<String>) -> Self {
        Self {
            method: method.into(),
            ..Default::default()
        }
    }

    /// Add a header
    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(name, value);
        self
    }

    /// Attach a body sent as-is
    pub fn with_body(mut self, body: impl Into<String>) -> Self {
        self.body = Some(body.into());
        self.is_base64_encoded = false;
        self
    }

    /// Attach a binary body, base64-encoded the way API gateways deliver it
    pub fn with_binary_body(mut self, body: &[u8]) -> Self {
        self.body = Some(base64::engine::general_purpose::STANDARD.encode(body));
        self.is_base64_encoded = true;
        self
    }

    /// Whether this is a POST (case-insensitive)
    pub fn is_post(&self) -> bool {
        self.method.eq_ignore_ascii_case("POST")
    }

    /// Raw body bytes, decoding base64 when the host flagged it.
    pub fn decode_body(&self) -> Result<Bytes, RequestError> {
        let body = self
            .body
            .as_deref()
            .filter(|b| !b.is_empty())
            .ok_or(RequestError::MissingBody)?;

        if self.is_base64_encoded {
            let decoded = base64::engine::general_purpose::STANDARD
                .decode(body.trim())
                .map_err(|e| RequestError::InvalidBody(format!("invalid base64 ({})", e)))?;
            Ok(Bytes::from(decoded))
        } else {
            Ok(Bytes::copy_from_slice(body.as_bytes()))
        }
    }
}
