//! Core retrieval and flattening module
//!
//! This module contains the core components of an export run:
//! - `traits` - Trait abstractions over the network and the clock
//! - `api_client` - HTTP caller with the retry policy
//! - `paginator` - Next-link pagination walker
//! - `flattener` - Conversion of API documents into flat rows

pub mod api_client;
pub mod flattener;
pub mod paginator;
pub mod traits;

#[cfg(test)]
pub(crate) mod test_utils;

pub use api_client::ApiClient;
pub use flattener::{flatten_account, flatten_categories, flatten_transaction, flatten_transactions};
pub use paginator::{PageWalk, PageWalker};
pub use traits::{Sleeper, ThreadSleeper, Transport};
