//! I/O module
//!
//! Handles everything that crosses the process boundary.
//!
//! # Components
//!
//! - `json_api` - Shapes of the JSON:API documents returned by the API
//! - `http_transport` - Blocking reqwest implementation of `Transport`
//! - `csv_format` - CSV layout and serialization of the exported rows
//! - `exporter` - Writing the CSV documents to disk

pub mod csv_format;
pub mod exporter;
pub mod http_transport;
pub mod json_api;

pub use csv_format::{write_categories_csv, write_rows_csv, CATEGORY_HEADER, ROW_HEADER};
pub use exporter::{export, export_categories};
pub use http_transport::ReqwestTransport;
