//! Scripted transport and sleeper used by unit tests

use crate::core::traits::{Sleeper, Transport};
use crate::types::{ApiRequest, ApiResponse, ExportError};
use std::cell::RefCell;
use std::collections::VecDeque;
use std::time::Duration;

/// Transport that replays a fixed list of outcomes and records every request
pub struct ScriptedTransport {
    script: RefCell<VecDeque<Result<ApiResponse, ExportError>>>,
    sent: RefCell<Vec<(String, ApiRequest)>>,
}

impl ScriptedTransport {
    pub fn new(script: Vec<Result<ApiResponse, ExportError>>) -> Self {
        ScriptedTransport {
            script: RefCell::new(script.into()),
            sent: RefCell::new(Vec::new()),
        }
    }

    /// Script made only of responses
    pub fn statuses(responses: &[(u16, &str)]) -> Self {
        Self::new(
            responses
                .iter()
                .map(|(status, body)| Ok(ApiResponse::new(*status, *body)))
                .collect(),
        )
    }

    pub fn call_count(&self) -> usize {
        self.sent.borrow().len()
    }

    pub fn requests(&self) -> Vec<(String, ApiRequest)> {
        self.sent.borrow().clone()
    }

    pub fn urls(&self) -> Vec<String> {
        self.sent.borrow().iter().map(|(url, _)| url.clone()).collect()
    }
}

impl Transport for ScriptedTransport {
    fn send(&self, url: &str, request: &ApiRequest) -> Result<ApiResponse, ExportError> {
        self.sent
            .borrow_mut()
            .push((url.to_string(), request.clone()));
        self.script
            .borrow_mut()
            .pop_front()
            .unwrap_or_else(|| Err(ExportError::transport(url, "script exhausted")))
    }
}

/// Sleeper that records requested delays instead of waiting
#[derive(Default)]
pub struct RecordingSleeper {
    delays: RefCell<Vec<Duration>>,
}

impl RecordingSleeper {
    pub fn delays(&self) -> Vec<Duration> {
        self.delays.borrow().clone()
    }
}

impl Sleeper for RecordingSleeper {
    fn sleep(&self, duration: Duration) {
        self.delays.borrow_mut().push(duration);
    }
}
