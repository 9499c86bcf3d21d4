//! JSON:API resource shapes returned by the Up Banking API
//!
//! Only the fields the exporter reads are modelled; everything else in the
//! documents is ignored. Relationships on transactions are kept as raw JSON
//! because their `data` member is routinely `null` and must never fail the
//! record.

use serde::Deserialize;
use serde_json::Value;

/// Monetary amount; `value` is a decimal string such as `"-12.50"`
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct MoneyObject {
    pub value: String,
}

/// `accounts` resource
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct AccountResource {
    pub id: String,
    pub attributes: AccountAttributes,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AccountAttributes {
    pub display_name: String,
    pub account_type: String,
    pub balance: MoneyObject,
}

/// `transactions` resource
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct TransactionResource {
    pub id: String,
    pub attributes: TransactionAttributes,
    #[serde(default)]
    pub relationships: Value,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct TransactionAttributes {
    pub status: String,
    pub raw_text: Option<String>,
    pub description: String,
    pub message: Option<String>,
    pub amount: MoneyObject,
    pub created_at: String,
    pub settled_at: Option<String>,
}

/// `categories` resource
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct CategoryResource {
    pub id: String,
    pub relationships: CategoryRelationships,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct CategoryRelationships {
    pub parent: ToOne,
    pub children: ToMany,
}

/// To-one relationship; `data` is `null` when there is no related resource
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct ToOne {
    pub data: Option<ResourceIdentifier>,
}

/// To-many relationship
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct ToMany {
    #[serde(default)]
    pub data: Vec<ResourceIdentifier>,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct ResourceIdentifier {
    pub id: String,
}

/// ID of the resource a to-one relationship named `name` points at
///
/// Returns `None` when the relationship is missing, its `data` is `null`, or
/// it has an unexpected shape.
pub fn related_id(relationships: &Value, name: &str) -> Option<String> {
    relationships
        .get(name)?
        .get("data")?
        .get("id")?
        .as_str()
        .map(str::to_string)
}
