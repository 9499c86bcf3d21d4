//! CSV format handling for the exported files
//!
//! This module centralizes all CSV format concerns:
//! - Column layout of the transaction export
//! - Column layout of the category export
//! - Serialization of rows to any writer
//!
//! All functions write to a caller-supplied writer (no file handling) for
//! easy testing.

use crate::types::{CategoryPair, ExportError, FlattenedRow};
use csv::Writer;
use std::io::Write;

/// Column order of the transaction export
pub const ROW_HEADER: [&str; 13] = [
    "accountId",
    "accountName",
    "accountType",
    "accountBalance",
    "transactionStatus",
    "rawText",
    "description",
    "message",
    "transactionAmount",
    "transactionPostedOn",
    "transactionSettledOn",
    "category",
    "parentCategory",
];

/// Column order of the category export
pub const CATEGORY_HEADER: [&str; 2] = ["parentCategory", "childCategory"];

/// Write flattened rows in CSV format
///
/// Rows are written in the order given. Missing values become empty fields;
/// amounts keep the scale the API supplied.
///
/// # Arguments
///
/// * `rows` - Rows to write
/// * `output` - Mutable reference to a writer for outputting CSV
///
/// # Returns
///
/// * `Ok(())` if writing succeeded
/// * `Err(ExportError)` if a write error occurred
pub fn write_rows_csv(rows: &[FlattenedRow], output: &mut dyn Write) -> Result<(), ExportError> {
    let mut writer = Writer::from_writer(output);

    writer.write_record(ROW_HEADER)?;

    for row in rows {
        let account = &row.account;
        let tx = &row.transaction;
        let balance = account.balance.to_string();
        let amount = tx.amount.to_string();
        writer.write_record([
            account.id.as_str(),
            account.name.as_str(),
            account.account_type.as_str(),
            balance.as_str(),
            tx.status.as_str(),
            tx.raw_text.as_deref().unwrap_or_default(),
            tx.description.as_str(),
            tx.message.as_deref().unwrap_or_default(),
            amount.as_str(),
            tx.posted_on.as_str(),
            tx.settled_on.as_deref().unwrap_or_default(),
            tx.category.as_deref().unwrap_or_default(),
            tx.parent_category.as_deref().unwrap_or_default(),
        ])?;
    }

    writer.flush()?;

    Ok(())
}

/// Write category pairs in CSV format
///
/// # Arguments
///
/// * `pairs` - Parent/child pairs to write
/// * `output` - Mutable reference to a writer for outputting CSV
pub fn write_categories_csv(
    pairs: &[CategoryPair],
    output: &mut dyn Write,
) -> Result<(), ExportError> {
    let mut writer = Writer::from_writer(output);

    writer.write_record(CATEGORY_HEADER)?;

    for pair in pairs {
        writer.write_record([pair.parent.as_str(), pair.child.as_deref().unwrap_or_default()])?;
    }

    writer.flush()?;

    Ok(())
}
