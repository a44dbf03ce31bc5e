//! Domain types for ledger transactions.

use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::common::{Displayable, Identifiable};

/// A single ledger entry. Immutable-ish: edits replace the whole record.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Transaction {
    pub id: Uuid,
    /// Non-negative; the sign is derived from `kind` when aggregating.
    pub amount: f64,
    pub currency: String,
    #[serde(rename = "type")]
    pub kind: TransactionKind,
    pub date: NaiveDate,
    pub category_id: Uuid,
    pub account_id: Uuid,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<GeoLocation>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub attachment_url: Option<String>,
}

impl Transaction {
    pub fn new(
        amount: f64,
        currency: impl Into<String>,
        kind: TransactionKind,
        date: NaiveDate,
        category_id: Uuid,
        account_id: Uuid,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            amount,
            currency: currency.into(),
            kind,
            date,
            category_id,
            account_id,
            note: None,
            location: None,
            attachment_url: None,
        }
    }

    pub fn with_note(mut self, note: impl Into<String>) -> Self {
        self.note = Some(note.into());
        self
    }

    /// Contribution of this transaction to aggregate totals: expenses
    /// subtract, income adds, transfers are neutral.
    pub fn signed_amount(&self) -> f64 {
        match self.kind {
            TransactionKind::Expense => -self.amount,
            TransactionKind::Income => self.amount,
            TransactionKind::Transfer => 0.0,
        }
    }
}

impl Identifiable for Transaction {
    fn id(&self) -> Uuid {
        self.id
    }
}

impl Displayable for Transaction {
    fn display_label(&self) -> String {
        format!("txn:{} [{}]", self.id, self.kind)
    }
}

/// Supported transaction types; serialized in the original document's
/// uppercase spelling.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TransactionKind {
    Expense,
    Income,
    Transfer,
}

impl fmt::Display for TransactionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            TransactionKind::Expense => "Expense",
            TransactionKind::Income => "Income",
            TransactionKind::Transfer => "Transfer",
        };
        f.write_str(label)
    }
}

/// Optional geotag carried by a transaction.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GeoLocation {
    pub lat: f64,
    pub lng: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
}
