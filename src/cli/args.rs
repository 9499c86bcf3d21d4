use crate::config::{default_output_path, ExportConfig, DEFAULT_BASE_URL, DEFAULT_PAGE_SIZE};
use crate::types::ExportError;
use clap::Parser;
use std::path::PathBuf;
use std::time::Duration;

/// Export Up Banking accounts and transactions to CSV
#[derive(Parser, Debug)]
#[command(name = "up-export")]
#[command(about = "Export Up Banking accounts and transactions to CSV", long_about = None)]
pub struct CliArgs {
    /// Personal access token for the Up API
    #[arg(long = "api-key", env = "UP_API_KEY", hide_env_values = true)]
    pub api_key: String,

    /// API root that actions are appended to
    #[arg(long = "base-url", env = "UP_BASE_URL", default_value = DEFAULT_BASE_URL)]
    pub base_url: String,

    /// Destination of the transaction CSV
    #[arg(
        long = "output",
        value_name = "PATH",
        help = "Output CSV path (default: ~/Documents/UpAccountTransactions.csv)"
    )]
    pub output: Option<PathBuf>,

    /// Destination of the category CSV
    #[arg(
        long = "categories-output",
        value_name = "PATH",
        help = "Also export the parent/child category list to this path"
    )]
    pub categories_output: Option<PathBuf>,

    /// Records requested per page
    #[arg(long = "page-size", value_name = "SIZE", default_value_t = DEFAULT_PAGE_SIZE)]
    pub page_size: u32,

    /// Seconds to wait between attempts while the API answers 503
    #[arg(long = "retry-delay-secs", value_name = "SECS", default_value_t = 60)]
    pub retry_delay_secs: u64,

    /// Retries after a 503 before giving up on a call
    #[arg(long = "max-unavailable-retries", value_name = "COUNT", default_value_t = 60)]
    pub max_unavailable_retries: u32,

    /// Upper bound on pages followed for one listing
    #[arg(long = "max-pages", value_name = "COUNT", default_value_t = 10_000)]
    pub max_pages: usize,

    /// Per-request timeout in seconds
    #[arg(long = "timeout-secs", value_name = "SECS", default_value_t = 30)]
    pub timeout_secs: u64,
}

impl CliArgs {
    /// Create an ExportConfig from CLI arguments
    ///
    /// Zero values for page size, page budget, or timeout fall back to
    /// their defaults.
    ///
    /// # Errors
    ///
    /// Returns a `Config` error if no output path was given and the home
    /// directory cannot be determined, or if the API key is blank.
    pub fn to_export_config(&self) -> Result<ExportConfig, ExportError> {
        if self.api_key.trim().is_empty() {
            return Err(ExportError::config("API key is empty"));
        }

        let output_path = match &self.output {
            Some(path) => path.clone(),
            None => default_output_path().ok_or_else(|| {
                ExportError::config("cannot determine home directory, pass --output")
            })?,
        };

        let page_size = if self.page_size == 0 {
            DEFAULT_PAGE_SIZE
        } else {
            self.page_size
        };

        let mut config = ExportConfig::new(&self.base_url, self.api_key.trim(), page_size, output_path);
        config.categories_output_path = self.categories_output.clone();
        config.retry.unavailable_delay = Duration::from_secs(self.retry_delay_secs);
        config.retry.max_unavailable_retries = self.max_unavailable_retries;
        if self.max_pages > 0 {
            config.max_pages = self.max_pages;
        }
        if self.timeout_secs > 0 {
            config.timeout = Duration::from_secs(self.timeout_secs);
        }

        Ok(config)
    }
}
