//! Blocking HTTP transport built on reqwest
//!
//! One [`reqwest::blocking::Client`] is created per run and reused for every
//! request. The bearer token is installed as the only default header;
//! `Connection: close` is added to each request.

use crate::core::traits::Transport;
use crate::types::{ApiRequest, ApiResponse, ExportError};
use reqwest::blocking::Client;
use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION, CONNECTION};
use std::time::Duration;

/// Production [`Transport`] backed by a blocking reqwest session
#[derive(Debug, Clone)]
pub struct ReqwestTransport {
    client: Client,
}

impl ReqwestTransport {
    /// Create a session authenticated with `api_key`
    ///
    /// # Errors
    ///
    /// Returns a `Config` error if the key cannot be used as a header value or
    /// the HTTP client cannot be initialised.
    pub fn new(api_key: &str, timeout: Duration) -> Result<Self, ExportError> {
        let mut auth = HeaderValue::from_str(&format!("Bearer {}", api_key))
            .map_err(|e| ExportError::config(format!("invalid API key: {}", e)))?;
        auth.set_sensitive(true);

        let mut headers = HeaderMap::new();
        headers.insert(AUTHORIZATION, auth);

        let client = Client::builder()
            .default_headers(headers)
            .timeout(timeout)
            .build()
            .map_err(|e| ExportError::config(format!("failed to build HTTP client: {}", e)))?;

        Ok(ReqwestTransport { client })
    }
}

impl Transport for ReqwestTransport {
    fn send(&self, url: &str, request: &ApiRequest) -> Result<ApiResponse, ExportError> {
        let builder = match request {
            ApiRequest::Get { .. } => self.client.get(url),
            ApiRequest::Post { body } => self.client.post(url).json(body),
        };

        let response = builder
            .header(CONNECTION, "close")
            .send()
            .map_err(|e| ExportError::transport(url, e))?;

        let status = response.status().as_u16();
        let body = response
            .text()
            .map_err(|e| ExportError::transport(url, e))?;

        Ok(ApiResponse::new(status, body))
    }
}
