//! Run configuration
//!
//! Everything the pipeline needs to know about the API and the output is
//! collected here once at startup and handed to the components by value.

use std::path::PathBuf;
use std::time::Duration;

/// Default API root
pub const DEFAULT_BASE_URL: &str = "https://api.up.com.au/api/v1";

/// Default page size requested from listing endpoints
pub const DEFAULT_PAGE_SIZE: u32 = 100;

/// Placeholder substituted with the account ID in templated actions
const ACCOUNT_ID_PLACEHOLDER: &str = "{accountId}";

/// An API action together with the query sent on its first page
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoint {
    /// Path relative to the base URL, e.g. `/accounts/{accountId}/transactions`
    pub action: String,

    /// Raw query string, e.g. `page[size]=100`; empty for none
    pub query: String,
}

impl Endpoint {
    /// Create a new endpoint
    pub fn new(action: impl Into<String>, query: impl Into<String>) -> Self {
        Endpoint {
            action: action.into(),
            query: query.into(),
        }
    }

    /// The action with `{accountId}` replaced by `account_id`
    pub fn action_for_account(&self, account_id: &str) -> String {
        self.action.replace(ACCOUNT_ID_PLACEHOLDER, account_id)
    }
}

/// Retry behaviour for transient server errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    /// Wait between attempts while the server answers 503
    pub unavailable_delay: Duration,

    /// Number of retries after the first 503 before giving up
    pub max_unavailable_retries: u32,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        RetryPolicy {
            unavailable_delay: Duration::from_secs(60),
            max_unavailable_retries: 60,
        }
    }
}

/// Complete configuration for one export run
#[derive(Debug, Clone)]
pub struct ExportConfig {
    /// API root; actions are appended to it
    pub base_url: String,

    /// Personal access token sent as a bearer token
    pub api_key: String,

    /// Account listing
    pub accounts: Endpoint,

    /// Per-account transaction listing (templated with `{accountId}`)
    pub transactions: Endpoint,

    /// Category listing
    pub categories: Endpoint,

    /// Retry behaviour for 503 responses
    pub retry: RetryPolicy,

    /// Upper bound on pages followed for a single listing
    pub max_pages: usize,

    /// Per-request timeout
    pub timeout: Duration,

    /// Destination of the transaction CSV
    pub output_path: PathBuf,

    /// Destination of the category CSV; categories are skipped when `None`
    pub categories_output_path: Option<PathBuf>,
}

impl ExportConfig {
    /// Configuration with the standard Up endpoints and the given page size
    pub fn new(
        base_url: impl Into<String>,
        api_key: impl Into<String>,
        page_size: u32,
        output_path: PathBuf,
    ) -> Self {
        let base_url: String = base_url.into();
        let page_query = format!("page[size]={}", page_size);
        ExportConfig {
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key: api_key.into(),
            accounts: Endpoint::new("/accounts", page_query.clone()),
            transactions: Endpoint::new("/accounts/{accountId}/transactions", page_query),
            categories: Endpoint::new("/categories", ""),
            retry: RetryPolicy::default(),
            max_pages: 10_000,
            timeout: Duration::from_secs(30),
            output_path,
            categories_output_path: None,
        }
    }
}

/// `~/Documents/UpAccountTransactions.csv`, or `None` without a home directory
pub fn default_output_path() -> Option<PathBuf> {
    dirs::home_dir().map(|home| home.join("Documents").join("UpAccountTransactions.csv"))
}
