//! Export pipeline
//!
//! This module provides the ExportPipeline that composes the HTTP caller, the
//! pagination walker, the record flattener, and the exporter into one run.
//!
//! # Flow
//!
//! ```text
//! accounts (all pages) ─┬─> account 1 ─> transactions (all pages) ─> rows
//!                       ├─> account 2 ─> transactions (all pages) ─> rows
//!                       └─> ...
//!                                                    rows ─> CSV file
//! categories (optional) ─> parent/child pairs ─> CSV file
//! ```
//!
//! Accounts are processed one at a time, in listing order. A failure while
//! fetching one account's transactions is logged and that account contributes
//! whatever rows were gathered; the run continues with the next account.

use crate::config::ExportConfig;
use crate::core::flattener::{flatten_account, flatten_categories, flatten_transactions};
use crate::core::{ApiClient, PageWalker, Sleeper, ThreadSleeper, Transport};
use crate::io::{export, export_categories, ReqwestTransport};
use crate::types::{ApiRequest, CategoryPair, ExportError, FlattenedRow, Result};
use tracing::{error, info};

/// Counts reported at the end of a run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExportSummary {
    /// Accounts successfully read from the listing
    pub accounts: usize,

    /// Rows written to the transaction export
    pub rows: usize,

    /// Pairs written to the category export, if it was requested
    pub category_pairs: Option<usize>,
}

/// One configured export run
pub struct ExportPipeline<T: Transport, S: Sleeper = ThreadSleeper> {
    client: ApiClient<T, S>,
    config: ExportConfig,
}

impl ExportPipeline<ReqwestTransport> {
    /// Create a pipeline talking to the real API over reqwest
    pub fn from_config(config: ExportConfig) -> Result<Self> {
        let transport = ReqwestTransport::new(&config.api_key, config.timeout)?;
        let client = ApiClient::new(transport, config.base_url.clone(), config.retry);
        Ok(ExportPipeline::new(client, config))
    }
}

impl<T: Transport, S: Sleeper> ExportPipeline<T, S> {
    /// Create a pipeline from an existing client
    pub fn new(client: ApiClient<T, S>, config: ExportConfig) -> Self {
        ExportPipeline { client, config }
    }

    /// Fetch every account and its transactions and flatten them into rows
    ///
    /// Returns the rows and the number of accounts that were read.
    ///
    /// # Errors
    ///
    /// Returns an error only if the account listing itself cannot be fetched.
    pub fn collect_rows(&self) -> Result<(Vec<FlattenedRow>, usize)> {
        let walker = PageWalker::new(&self.client, self.config.max_pages);
        let accounts = &self.config.accounts;
        let raw_accounts = walker.fetch_all_pages(&accounts.action, &accounts.query)?;

        let mut rows = Vec::new();
        let mut account_count = 0;

        for raw in &raw_accounts {
            let Some(account) = flatten_account(raw) else {
                continue;
            };
            account_count += 1;

            let action = self.config.transactions.action_for_account(&account.id);
            match walker.walk(&action, &self.config.transactions.query) {
                Ok(walk) => {
                    if let Some(e) = &walk.truncated {
                        error!(
                            "transactions for account {} ({}) are incomplete: {}",
                            account.name, account.id, e
                        );
                    }
                    let account_rows = flatten_transactions(&account, &walk.records);
                    info!(
                        "account {} ({}): {} transactions",
                        account.name,
                        account.id,
                        account_rows.len()
                    );
                    rows.extend(account_rows);
                }
                Err(e) => {
                    error!(
                        "transactions for account {} ({}) are missing: {}",
                        account.name, account.id, e
                    );
                }
            }
        }

        Ok((rows, account_count))
    }

    /// Fetch the category listing and flatten it into parent/child pairs
    ///
    /// # Errors
    ///
    /// Returns `MissingResponse` if the listing produced no response.
    pub fn collect_categories(&self) -> Result<Vec<CategoryPair>> {
        let categories = &self.config.categories;
        let payload = self
            .client
            .call(
                &categories.action,
                &ApiRequest::get_with_query(categories.query.as_str()),
            )
            .ok_or_else(|| ExportError::missing_response(&categories.action))?;

        Ok(flatten_categories(&payload))
    }

    /// Run the export end to end and write the configured files
    pub fn run(&self) -> Result<ExportSummary> {
        let (rows, accounts) = self.collect_rows()?;
        export(&rows, &self.config.output_path)?;

        let category_pairs = match &self.config.categories_output_path {
            Some(path) => {
                let pairs = self.collect_categories()?;
                export_categories(&pairs, path)?;
                Some(pairs.len())
            }
            None => None,
        };

        Ok(ExportSummary {
            accounts,
            rows: rows.len(),
            category_pairs,
        })
    }
}
