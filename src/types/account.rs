//! Account-related types for the Up Banking exporter
//!
//! This module defines the Account structure extracted from the
//! `/accounts` listing.

use rust_decimal::Decimal;

/// Account identifier as issued by the API (a UUID string)
pub type AccountId = String;

/// Bank account as seen at fetch time
///
/// Accounts are immutable once fetched. Every flattened row carries its own
/// clone, so no row can observe a change made through another row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Account {
    /// The account ID
    pub id: AccountId,

    /// Display name chosen by the customer (e.g. "Spending")
    pub name: String,

    /// Account type as reported by the API
    ///
    /// One of `SAVER`, `TRANSACTIONAL` or `HOME_LOAN` today; any other value
    /// is passed through unchanged.
    pub account_type: String,

    /// Current balance, with the scale the API supplied
    pub balance: Decimal,
}
