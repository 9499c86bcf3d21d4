//! Pagination walker
//!
//! Listing endpoints return one page of records in `data` and a link to the
//! following page in `links.next`. The walker follows that chain until the
//! link is null, concatenating the records of every page in order.
//!
//! The walk is bounded by a page budget so a server that never stops handing
//! out next links cannot keep the export running forever.

use crate::core::api_client::ApiClient;
use crate::core::traits::{Sleeper, Transport};
use crate::types::{ApiRequest, ExportError, Result};
use serde_json::Value;
use tracing::{debug, warn};

/// Walks the next-link chain of a listing endpoint
pub struct PageWalker<'a, T: Transport, S: Sleeper> {
    client: &'a ApiClient<T, S>,
    max_pages: usize,
}

impl<'a, T: Transport, S: Sleeper> PageWalker<'a, T, S> {
    /// Create a walker that follows at most `max_pages` pages per listing
    pub fn new(client: &'a ApiClient<T, S>, max_pages: usize) -> Self {
        PageWalker { client, max_pages }
    }

    /// Fetch every page of `endpoint` and return all records in page order
    ///
    /// The first page is requested with `query`; next links are requested
    /// verbatim with no additional query.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The first page produced no response (`MissingResponse`)
    /// - More than `max_pages` pages were linked (`PageLimitExceeded`)
    ///
    /// A later page that produces no response ends the walk early; the
    /// records gathered so far are returned. Use [`PageWalker::walk`] to keep
    /// the records gathered before the page budget ran out.
    pub fn fetch_all_pages(&self, endpoint: &str, query: &str) -> Result<Vec<Value>> {
        let walk = self.walk(endpoint, query)?;
        match walk.truncated {
            Some(e) => Err(e),
            None => Ok(walk.records),
        }
    }

    /// Fetch every page of `endpoint`, stopping at the page budget
    ///
    /// Unlike [`PageWalker::fetch_all_pages`], hitting the budget is not an
    /// error: the records of the pages already fetched are returned and
    /// `truncated` carries the `PageLimitExceeded` error.
    ///
    /// # Errors
    ///
    /// Returns `MissingResponse` if the first page produced no response.
    pub fn walk(&self, endpoint: &str, query: &str) -> Result<PageWalk> {
        let mut page = self
            .client
            .call(endpoint, &ApiRequest::get_with_query(query))
            .ok_or_else(|| ExportError::missing_response(endpoint))?;

        let mut records = Vec::new();
        let mut pages = 1;

        loop {
            let next = next_link(&page);
            take_records(page, endpoint, &mut records);

            let Some(next) = next else {
                break;
            };

            if pages >= self.max_pages {
                return Ok(PageWalk {
                    records,
                    truncated: Some(ExportError::page_limit_exceeded(endpoint, self.max_pages)),
                });
            }

            debug!("following next link {}", next);
            match self.client.call(&next, &ApiRequest::get()) {
                Some(next_page) => page = next_page,
                None => {
                    warn!(
                        "page {} of {} produced no response, keeping {} records",
                        pages + 1,
                        endpoint,
                        records.len()
                    );
                    break;
                }
            }
            pages += 1;
        }

        Ok(PageWalk {
            records,
            truncated: None,
        })
    }
}

/// Records gathered by [`PageWalker::walk`]
#[derive(Debug, Clone, PartialEq)]
pub struct PageWalk {
    /// Records of every fetched page, in page order
    pub records: Vec<Value>,

    /// Set when the walk stopped at the page budget with next links remaining
    pub truncated: Option<ExportError>,
}

/// The `links.next` URL of a page, if there is one
pub fn next_link(page: &Value) -> Option<String> {
    page.get("links")?
        .get("next")?
        .as_str()
        .map(str::to_string)
}

fn take_records(page: Value, endpoint: &str, records: &mut Vec<Value>) {
    match page {
        Value::Object(mut map) => match map.remove("data") {
            Some(Value::Array(data)) => records.extend(data),
            _ => {
                let page = serde_json::Value::Object(map);
                warn!("page from {} has no data array, skipping: {}", endpoint, page)
            }
        },
        other => warn!("page from {} is not an object, skipping: {}", endpoint, other),
    }
}
