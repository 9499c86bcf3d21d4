//! Error types for the Up Banking exporter
//!
//! This module defines all error types that can occur while fetching,
//! flattening, and exporting account data.
//!
//! # Error Categories
//!
//! - **Transport Errors**: Connection failures, timeouts, unreadable responses
//! - **Retry Errors**: The 503 retry budget or the page budget ran out
//! - **File Errors**: The output file could not be written
//! - **Configuration Errors**: Missing API key, unresolvable output path, etc.
//!
//! Most of these are recovered locally by the caller (logged, then replaced
//! with a sentinel or an empty record set). Only a failed account listing or a
//! failed write stops the run.

use thiserror::Error;

/// Convenience alias used across the crate
pub type Result<T> = std::result::Result<T, ExportError>;

/// Main error type for the exporter
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ExportError {
    /// The request never produced an HTTP response (connection refused,
    /// timeout, TLS failure, ...)
    #[error("Transport error calling {endpoint}: {message}")]
    Transport {
        /// Fully resolved URL that was requested
        endpoint: String,
        /// Description of the transport failure
        message: String,
    },

    /// The response body was not valid JSON
    #[error("Malformed response from {endpoint} (status {status}): {message}")]
    Decode {
        /// Fully resolved URL that was requested
        endpoint: String,
        /// HTTP status of the response
        status: u16,
        /// Parser error message
        message: String,
    },

    /// The server kept answering 503 after the configured number of retries
    #[error("Retries exhausted for {endpoint}: status {status} after {attempts} attempts")]
    RetriesExhausted {
        /// Fully resolved URL that was requested
        endpoint: String,
        /// Last status code observed
        status: u16,
        /// Total number of requests sent
        attempts: u32,
    },

    /// The next-link chain did not terminate within the page budget
    #[error("Pagination from {endpoint} exceeded {max_pages} pages")]
    PageLimitExceeded {
        /// Endpoint the walk started from
        endpoint: String,
        /// Configured page budget
        max_pages: usize,
    },

    /// A call that the run cannot continue without produced no response
    #[error("No response received from {endpoint}")]
    MissingResponse {
        /// Endpoint (action or URL) that was called
        endpoint: String,
    },

    /// I/O error while writing output files
    #[error("I/O error: {message}")]
    IoError {
        /// Description of the I/O error
        message: String,
    },

    /// CSV serialization error
    #[error("CSV error: {message}")]
    CsvError {
        /// Description of the CSV error
        message: String,
    },

    /// Invalid or incomplete configuration
    #[error("Configuration error: {message}")]
    Config {
        /// Description of the problem
        message: String,
    },
}

impl From<std::io::Error> for ExportError {
    fn from(error: std::io::Error) -> Self {
        ExportError::IoError {
            message: error.to_string(),
        }
    }
}

impl From<csv::Error> for ExportError {
    fn from(error: csv::Error) -> Self {
        ExportError::CsvError {
            message: error.to_string(),
        }
    }
}

// Helper functions for creating common errors

impl ExportError {
    /// Create a Transport error
    pub fn transport(endpoint: &str, message: impl ToString) -> Self {
        ExportError::Transport {
            endpoint: endpoint.to_string(),
            message: message.to_string(),
        }
    }

    /// Create a Decode error
    pub fn decode(endpoint: &str, status: u16, message: impl ToString) -> Self {
        ExportError::Decode {
            endpoint: endpoint.to_string(),
            status,
            message: message.to_string(),
        }
    }

    /// Create a RetriesExhausted error
    pub fn retries_exhausted(endpoint: &str, status: u16, attempts: u32) -> Self {
        ExportError::RetriesExhausted {
            endpoint: endpoint.to_string(),
            status,
            attempts,
        }
    }

    /// Create a PageLimitExceeded error
    pub fn page_limit_exceeded(endpoint: &str, max_pages: usize) -> Self {
        ExportError::PageLimitExceeded {
            endpoint: endpoint.to_string(),
            max_pages,
        }
    }

    /// Create a MissingResponse error
    pub fn missing_response(endpoint: &str) -> Self {
        ExportError::MissingResponse {
            endpoint: endpoint.to_string(),
        }
    }

    /// Create a Config error
    pub fn config(message: impl ToString) -> Self {
        ExportError::Config {
            message: message.to_string(),
        }
    }
}
