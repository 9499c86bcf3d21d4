//! HTTP caller for the Up Banking API
//!
//! This module provides the ApiClient that resolves endpoints against the base
//! URL, sends requests through a [`Transport`], applies the retry policy for
//! transient server errors, and decodes the JSON body.
//!
//! # Status Handling
//!
//! - **2xx**: body is decoded and returned
//! - **422**: the request is repeated once, immediately; the second response
//!   is decoded whatever its status
//! - **503**: the request is repeated after a fixed delay until the server
//!   answers with anything else, up to `RetryPolicy::max_unavailable_retries`
//! - **anything else**: the failure is logged and the body is still decoded
//!   and returned, so callers must tolerate error documents in place of data

use crate::config::RetryPolicy;
use crate::core::traits::{Sleeper, ThreadSleeper, Transport};
use crate::types::{ApiRequest, ApiResponse, ExportError, Result};
use serde_json::Value;
use tracing::{error, info, warn};

const STATUS_UNPROCESSABLE: u16 = 422;
const STATUS_UNAVAILABLE: u16 = 503;

/// HTTP caller bound to one API root and one transport session
pub struct ApiClient<T: Transport, S: Sleeper = ThreadSleeper> {
    transport: T,
    sleeper: S,
    base_url: String,
    retry: RetryPolicy,
}

impl<T: Transport> ApiClient<T> {
    /// Create a client that waits with [`ThreadSleeper`]
    pub fn new(transport: T, base_url: impl Into<String>, retry: RetryPolicy) -> Self {
        Self::with_sleeper(transport, ThreadSleeper, base_url, retry)
    }
}

impl<T: Transport, S: Sleeper> ApiClient<T, S> {
    /// Create a client with a custom sleeper
    pub fn with_sleeper(
        transport: T,
        sleeper: S,
        base_url: impl Into<String>,
        retry: RetryPolicy,
    ) -> Self {
        let base_url: String = base_url.into();
        ApiClient {
            transport,
            sleeper,
            base_url: base_url.trim_end_matches('/').to_string(),
            retry,
        }
    }

    /// Build the URL a request is sent to
    ///
    /// Absolute endpoints (next links) are used verbatim, anything else is an
    /// action appended to the base URL. A GET query is appended last.
    pub fn resolve_url(&self, endpoint: &str, request: &ApiRequest) -> String {
        let mut url = if endpoint.starts_with("http://") || endpoint.starts_with("https://") {
            endpoint.to_string()
        } else {
            format!("{}{}", self.base_url, endpoint)
        };

        if let ApiRequest::Get { query: Some(query) } = request {
            url.push(if url.contains('?') { '&' } else { '?' });
            url.push_str(query);
        }

        url
    }

    /// Call `endpoint` and return the decoded body, or the reason it failed
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The transport could not produce a response
    /// - The 503 retry budget ran out
    /// - The final response body is not JSON
    pub fn try_call(&self, endpoint: &str, request: &ApiRequest) -> Result<Value> {
        let url = self.resolve_url(endpoint, request);
        let mut response = self.transport.send(&url, request)?;
        let mut attempts: u32 = 1;

        match response.status {
            _ if response.is_success() => {}
            STATUS_UNPROCESSABLE => {
                warn!(
                    "{} {} returned 422, attempting call again",
                    request.method(),
                    url
                );
                response = self.transport.send(&url, request)?;
            }
            STATUS_UNAVAILABLE => {
                while response.status == STATUS_UNAVAILABLE {
                    if attempts > self.retry.max_unavailable_retries {
                        return Err(ExportError::retries_exhausted(
                            &url,
                            response.status,
                            attempts,
                        ));
                    }
                    warn!(
                        "{} {} returned 503, retrying in {:?} (attempt {})",
                        request.method(),
                        url,
                        self.retry.unavailable_delay,
                        attempts + 1
                    );
                    self.sleeper.sleep(self.retry.unavailable_delay);
                    response = self.transport.send(&url, request)?;
                    attempts += 1;
                }
            }
            _ => {}
        }

        if response.is_success() {
            info!(
                "status code for {} call to \"{}\" is {}",
                request.method(),
                url,
                response.status
            );
        } else {
            error!(
                "for endpoint \"{}\" error code {} received for payload {} with reason: {}",
                url, response.status, request, response.body
            );
        }

        decode(&url, &response)
    }

    /// Call `endpoint`, logging any failure and yielding `None` in its place
    pub fn call(&self, endpoint: &str, request: &ApiRequest) -> Option<Value> {
        match self.try_call(endpoint, request) {
            Ok(body) => Some(body),
            Err(e) => {
                error!("calling action {} failed: {}", endpoint, e);
                error!("request payload: {}", request);
                None
            }
        }
    }
}

fn decode(url: &str, response: &ApiResponse) -> Result<Value> {
    serde_json::from_str(&response.body)
        .map_err(|e| ExportError::decode(url, response.status, e))
}
