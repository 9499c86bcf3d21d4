//! Transaction-related types for the Up Banking exporter
//!
//! This module defines the flattened transaction fields and the row type
//! that joins them with their parent account.

use super::account::Account;
use rust_decimal::Decimal;

/// Transaction fields extracted from a single transaction resource
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transaction {
    /// The transaction ID
    pub id: String,

    /// Settlement status (`HELD` or `SETTLED`)
    pub status: String,

    /// Original text of the transaction as it appeared on the statement
    pub raw_text: Option<String>,

    /// Short, cleaned-up description
    pub description: String,

    /// Message attached by the sender, if any
    pub message: Option<String>,

    /// Signed amount, with the scale the API supplied
    pub amount: Decimal,

    /// ISO-8601 timestamp the transaction was first encountered
    pub posted_on: String,

    /// ISO-8601 timestamp the transaction settled, if it has
    pub settled_on: Option<String>,

    /// Category ID
    ///
    /// Set together with `parent_category`: either both are present or both
    /// are `None`.
    pub category: Option<String>,

    /// Parent category ID
    pub parent_category: Option<String>,
}

/// The denormalized join of one account with one of its transactions
///
/// This is the unit of output: one row per transaction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FlattenedRow {
    /// Copy of the owning account at fetch time
    pub account: Account,

    /// The transaction itself
    pub transaction: Transaction,
}
