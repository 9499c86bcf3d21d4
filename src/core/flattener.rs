//! Record flattener
//!
//! Turns the nested JSON:API documents into flat domain values:
//! - account resources into [`Account`]
//! - transaction resources, joined with their account, into [`FlattenedRow`]
//! - the category listing into parent/child [`CategoryPair`]s
//!
//! Records that do not have the expected shape are logged and skipped rather
//! than failing the export. The one exception is the category relationship on
//! a transaction, which is recovered to `None` and never skips the row.

use crate::io::json_api::{related_id, AccountResource, CategoryResource, TransactionResource};
use crate::types::{Account, CategoryPair, FlattenedRow, Transaction};
use rust_decimal::Decimal;
use serde::Deserialize;
use serde_json::Value;
use std::str::FromStr;
use tracing::warn;

/// Extract an [`Account`] from an account resource
///
/// Returns `None` (and logs a warning) if the record is malformed or its
/// balance is not a decimal number.
pub fn flatten_account(raw: &Value) -> Option<Account> {
    let resource = match AccountResource::deserialize(raw) {
        Ok(resource) => resource,
        Err(e) => {
            warn!("skipping malformed account record: {}", e);
            return None;
        }
    };

    let balance = parse_amount(&resource.attributes.balance.value, &resource.id)?;

    Some(Account {
        id: resource.id,
        name: resource.attributes.display_name,
        account_type: resource.attributes.account_type,
        balance,
    })
}

/// Extract the transaction fields from a transaction resource
///
/// Returns `None` (and logs a warning) if the record is malformed or its
/// amount is not a decimal number.
pub fn flatten_transaction(raw: &Value) -> Option<Transaction> {
    let resource = match TransactionResource::deserialize(raw) {
        Ok(resource) => resource,
        Err(e) => {
            warn!("skipping malformed transaction record: {}", e);
            return None;
        }
    };

    let amount = parse_amount(&resource.attributes.amount.value, &resource.id)?;

    // Both ids or neither
    let (category, parent_category) = match (
        related_id(&resource.relationships, "category"),
        related_id(&resource.relationships, "parentCategory"),
    ) {
        (Some(category), Some(parent)) => (Some(category), Some(parent)),
        _ => (None, None),
    };

    let attributes = resource.attributes;
    Some(Transaction {
        id: resource.id,
        status: attributes.status,
        raw_text: attributes.raw_text,
        description: attributes.description,
        message: attributes.message,
        amount,
        posted_on: attributes.created_at,
        settled_on: attributes.settled_at,
        category,
        parent_category,
    })
}

/// Join `account` with each of its transactions, one row per transaction
///
/// Every row receives its own copy of `account`.
pub fn flatten_transactions(account: &Account, transactions: &[Value]) -> Vec<FlattenedRow> {
    transactions
        .iter()
        .filter_map(flatten_transaction)
        .map(|transaction| FlattenedRow {
            account: account.clone(),
            transaction,
        })
        .collect()
}

/// Build parent/child pairs from a category listing document
///
/// Only top-level categories (no parent) are iterated. Each yields one pair
/// per child, in order, or a single pair with no child when it has none.
pub fn flatten_categories(payload: &Value) -> Vec<CategoryPair> {
    let Some(data) = payload.get("data").and_then(Value::as_array) else {
        warn!("category listing has no data array: {}", payload);
        return Vec::new();
    };

    let mut pairs = Vec::new();
    for raw in data {
        let category = match CategoryResource::deserialize(raw) {
            Ok(category) => category,
            Err(e) => {
                warn!("skipping malformed category record: {}", e);
                continue;
            }
        };

        if category.relationships.parent.data.is_some() {
            continue;
        }

        let children = category.relationships.children.data;
        if children.is_empty() {
            pairs.push(CategoryPair::new(category.id, None));
        } else {
            for child in children {
                pairs.push(CategoryPair::new(category.id.clone(), Some(child.id)));
            }
        }
    }

    pairs
}

fn parse_amount(value: &str, record_id: &str) -> Option<Decimal> {
    match Decimal::from_str(value.trim()) {
        Ok(amount) => Some(amount),
        Err(e) => {
            warn!(
                "skipping record {}: invalid amount '{}': {}",
                record_id, value, e
            );
            None
        }
    }
}
