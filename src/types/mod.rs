//! Types module
//!
//! Contains core data structures used throughout the application.
//! This module organizes types into logical submodules:
//! - `account`: Account-related types
//! - `transaction`: Transaction fields and the flattened output row
//! - `category`: Category hierarchy pairs
//! - `request`: Requests to and responses from the API
//! - `error`: Error types for the exporter

pub mod account;
pub mod category;
pub mod error;
pub mod request;
pub mod transaction;

pub use account::{Account, AccountId};
pub use category::CategoryPair;
pub use error::{ExportError, Result};
pub use request::{ApiRequest, ApiResponse};
pub use transaction::{FlattenedRow, Transaction};
