//! Up Banking Export Library
//! # Overview
//!
//! This library retrieves accounts and their transactions from the Up Banking
//! REST API, flattens the nested JSON:API documents into one row per
//! transaction, and writes the rows to a CSV file.
//!
//! # Architecture
//!
//! The system is organized into several key components:
//!
//! - [`types`] - Core data types (Account, Transaction, FlattenedRow, etc.)
//! - [`config`] - Run configuration built once at startup
//! - [`cli`] - CLI arguments parsing
//! - [`core`] - Retrieval and flattening logic:
//!   - [`core::api_client`] - HTTP caller with the 422/503 retry policy
//!   - [`core::paginator`] - Next-link pagination walker
//!   - [`core::flattener`] - Account/transaction/category flattening
//! - [`io`] - HTTP transport, JSON:API shapes, CSV output
//! - [`pipeline`] - Composition of the above into one export run
//!
//! # Output
//!
//! One CSV row per transaction with the columns `accountId`, `accountName`,
//! `accountType`, `accountBalance`, `transactionStatus`, `rawText`,
//! `description`, `message`, `transactionAmount`, `transactionPostedOn`,
//! `transactionSettledOn`, `category`, `parentCategory`.

// Module declarations
pub mod cli;
pub mod config;
pub mod core;
pub mod io;
pub mod pipeline;
pub mod types;

pub use crate::config::{Endpoint, ExportConfig, RetryPolicy};
pub use crate::core::{ApiClient, PageWalker, Sleeper, ThreadSleeper, Transport};
pub use crate::io::{export, export_categories, ReqwestTransport};
pub use crate::pipeline::{ExportPipeline, ExportSummary};
pub use crate::types::{
    Account, ApiRequest, ApiResponse, CategoryPair, ExportError, FlattenedRow, Transaction,
};
