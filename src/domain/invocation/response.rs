//! Outbound response value objects

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::domain::error::RequestError;

/// Content type of every response body
pub const JSON_CONTENT_TYPE: &str = "application/json";

/// JSON body returned to the caller
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ResponseBody {
    #[serde(rename_all = "camelCase")]
    Transcript {
        text: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        request_id: Option<String>,
    },
    #[serde(rename_all = "camelCase")]
    Failure {
        error: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        request_id: Option<String>,
    },
}

/// Response produced for one invocation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutboundResponse {
    pub status: u16,
    pub headers: Vec<(String, String)>,
    pub body: ResponseBody,
}

impl OutboundResponse {
    fn json(status: u16, body: ResponseBody) -> Self {
        Self {
            status,
            headers: vec![("Content-Type".to_string(), JSON_CONTENT_TYPE.to_string())],
            body,
        }
    }

    /// 200 with the transcript
    pub fn transcript(text: impl Into<String>, request_id: Option<String>) -> Self {
        Self::json(
            200,
            ResponseBody::Transcript {
                text: text.into(),
                request_id,
            },
        )
    }

    /// Error response with an arbitrary status
    pub fn failure(status: u16, error: impl Into<String>, request_id: Option<String>) -> Self {
        Self::json(
            status,
            ResponseBody::Failure {
                error: error.into(),
                request_id,
            },
        )
    }

    /// Error response for a rejected request
    pub fn rejected(error: &RequestError) -> Self {
        let mut response = Self::failure(error.status(), error.to_string(), None);
        if matches!(error, RequestError::MethodNotAllowed) {
            response
                .headers
                .push(("Allow".to_string(), "POST".to_string()));
        }
        response
    }

    /// First header value matching `name` case-insensitively
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }

    /// Serialized JSON body
    pub fn body_json(&self) -> String {
        serde_json::to_string(&self.body)
            .unwrap_or_else(|_| r#"{"error":"Failed to serialize response."}"#.to_string())
    }
}

/// Serverless response shape (`statusCode`, `headers`, `body` as a string)
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ServerlessResponse {
    pub status_code: u16,
    pub headers: BTreeMap<String, String>,
    pub body: String,
}

impl From<OutboundResponse> for ServerlessResponse {
    fn from(response: OutboundResponse) -> Self {
        let body = response.body_json();
        Self {
            status_code: response.status,
            headers: response.headers.into_iter().collect(),
            body,
        }
    }
}
