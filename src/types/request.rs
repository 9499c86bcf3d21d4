//! Request and response types exchanged with a [`Transport`](crate::core::traits::Transport)

use serde_json::Value;
use std::fmt;

/// A request to the API
///
/// The caller decides the HTTP method explicitly: a JSON body always means
/// POST, anything else is a GET with an optional raw query string.
#[derive(Debug, Clone, PartialEq)]
pub enum ApiRequest {
    /// GET, with the query string appended after `?` when present
    Get {
        /// Pre-encoded query string such as `page[size]=100`
        query: Option<String>,
    },
    /// POST with a JSON-encoded body
    Post {
        /// Request body
        body: Value,
    },
}

impl ApiRequest {
    /// GET without query parameters
    pub fn get() -> Self {
        ApiRequest::Get { query: None }
    }

    /// GET with a query string; an empty string means no query
    pub fn get_with_query(query: impl Into<String>) -> Self {
        let query = query.into();
        ApiRequest::Get {
            query: (!query.is_empty()).then_some(query),
        }
    }

    /// POST with a JSON body
    pub fn post(body: Value) -> Self {
        ApiRequest::Post { body }
    }

    /// HTTP method name, for logging
    pub fn method(&self) -> &'static str {
        match self {
            ApiRequest::Get { .. } => "GET",
            ApiRequest::Post { .. } => "POST",
        }
    }
}

impl fmt::Display for ApiRequest {
    /// Formats the request payload the way it is logged on failure
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiRequest::Get { query: Some(query) } => write!(f, "{}", query),
            ApiRequest::Get { query: None } => write!(f, "<none>"),
            ApiRequest::Post { body } => write!(f, "{}", body),
        }
    }
}

/// A raw HTTP response: status code and undecoded body text
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiResponse {
    /// HTTP status code
    pub status: u16,

    /// Response body as text
    pub body: String,
}

impl ApiResponse {
    /// Create a new response
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        ApiResponse {
            status,
            body: body.into(),
        }
    }

    /// Whether the status is in the 2xx range
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}
