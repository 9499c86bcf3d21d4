//! Core traits for HTTP transport and retry delays
//!
//! This module defines the trait abstractions that separate the retry and
//! pagination logic from the actual network and clock, so the production
//! implementations can be swapped for scripted ones in tests.

use crate::types::{ApiRequest, ApiResponse, ExportError};
use std::time::Duration;

/// Trait for sending a single HTTP request
///
/// Implementations perform exactly one round trip per call: no retries, no
/// interpretation of the status code. A response with any status is `Ok`;
/// `Err` is reserved for requests that produced no response at all.
pub trait Transport {
    /// Send `request` to the fully resolved `url`
    fn send(&self, url: &str, request: &ApiRequest) -> Result<ApiResponse, ExportError>;
}

impl<T: Transport + ?Sized> Transport for &T {
    fn send(&self, url: &str, request: &ApiRequest) -> Result<ApiResponse, ExportError> {
        (**self).send(url, request)
    }
}

/// Trait for waiting between retry attempts
pub trait Sleeper {
    /// Block the current thread for `duration`
    fn sleep(&self, duration: Duration);
}

impl<S: Sleeper + ?Sized> Sleeper for &S {
    fn sleep(&self, duration: Duration) {
        (**self).sleep(duration)
    }
}

/// Sleeper backed by [`std::thread::sleep`]
#[derive(Debug, Clone, Copy, Default)]
pub struct ThreadSleeper;

impl Sleeper for ThreadSleeper {
    fn sleep(&self, duration: Duration) {
        std::thread::sleep(duration);
    }
}
