//! File exporter
//!
//! Writes the CSV documents produced by [`csv_format`](crate::io::csv_format)
//! to a path, replacing whatever was there before.

use crate::io::csv_format::{write_categories_csv, write_rows_csv};
use crate::types::{CategoryPair, ExportError, FlattenedRow};
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::Path;
use tracing::info;

/// Write `rows` to `destination`, overwriting any existing file
///
/// Missing parent directories are created.
pub fn export(rows: &[FlattenedRow], destination: &Path) -> Result<(), ExportError> {
    let mut output = create(destination)?;
    write_rows_csv(rows, &mut output)?;
    output.flush()?;

    info!("wrote {} rows to {}", rows.len(), destination.display());
    Ok(())
}

/// Write category pairs to `destination`, overwriting any existing file
pub fn export_categories(pairs: &[CategoryPair], destination: &Path) -> Result<(), ExportError> {
    let mut output = create(destination)?;
    write_categories_csv(pairs, &mut output)?;
    output.flush()?;

    info!(
        "wrote {} category pairs to {}",
        pairs.len(),
        destination.display()
    );
    Ok(())
}

fn create(destination: &Path) -> Result<BufWriter<File>, ExportError> {
    if let Some(parent) = destination.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    Ok(BufWriter::new(File::create(destination)?))
}
