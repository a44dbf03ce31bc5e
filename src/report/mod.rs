//! Monthly report snapshot handed to the external report generator.
//!
//! Generation itself (LLM-backed in production) is an external
//! collaborator behind `ReportGenerator`; this module only assembles
//! the data snapshot: enriched transaction rows, totals, and the
//! living-fee allocation for the month.

use chrono::{Datelike, Duration, NaiveDate};
use serde::Serialize;
use uuid::Uuid;

use crate::core::tree::TreeView;
use crate::domain::TransactionKind;
use crate::errors::LedgerError;
use crate::ledger::Ledger;

/// Takes a data snapshot and a prompt, returns the report text.
pub trait ReportGenerator {
    fn generate(&self, snapshot: &MonthSnapshot, prompt: &str) -> Result<String, LedgerError>;
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MonthSnapshot {
    pub month: String,
    pub currency: String,
    pub total_income: f64,
    pub total_expense: f64,
    pub living_fee_allocated: f64,
    pub record_count: usize,
    pub rows: Vec<ReportRow>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportRow {
    pub date: NaiveDate,
    pub amount: f64,
    #[serde(rename = "type")]
    pub kind: TransactionKind,
    pub category: String,
    /// Group breadcrumb from the project tree, "N/A" for unfiled rows.
    pub project: String,
    pub note: String,
}

impl MonthSnapshot {
    /// Builds the snapshot for a `YYYY-MM` month. `None` when the month
    /// has no transactions or does not parse.
    pub fn build(ledger: &Ledger, month: &str) -> Option<Self> {
        let days = days_in_month(month)?;
        let rows: Vec<ReportRow> = ledger
            .transactions
            .iter()
            .filter(|txn| txn.date.format("%Y-%m").to_string() == month)
            .map(|txn| ReportRow {
                date: txn.date,
                amount: txn.amount,
                kind: txn.kind,
                category: category_name(ledger, txn.category_id),
                project: TreeView::node_path(ledger, txn.id).unwrap_or_else(|| "N/A".into()),
                note: txn.note.clone().unwrap_or_default(),
            })
            .collect();
        if rows.is_empty() {
            return None;
        }

        let total_income = rows
            .iter()
            .filter(|row| row.kind == TransactionKind::Income)
            .map(|row| row.amount)
            .sum();
        let total_expense = rows
            .iter()
            .filter(|row| row.kind == TransactionKind::Expense)
            .map(|row| row.amount)
            .sum();

        Some(Self {
            month: month.to_string(),
            currency: ledger.settings.currency.clone(),
            total_income,
            total_expense,
            living_fee_allocated: ledger.settings.living_fee_for_month(days),
            record_count: rows.len(),
            rows,
        })
    }
}

fn category_name(ledger: &Ledger, category_id: Uuid) -> String {
    ledger
        .category(category_id)
        .map_or_else(|| "Unknown".into(), |category| category.name.clone())
}

fn days_in_month(month: &str) -> Option<u32> {
    let first = NaiveDate::parse_from_str(&format!("{month}-01"), "%Y-%m-%d").ok()?;
    let (year, m) = (first.year(), first.month());
    let (next_year, next_month) = if m == 12 { (year + 1, 1) } else { (year, m + 1) };
    let first_next = NaiveDate::from_ymd_opt(next_year, next_month, 1)?;
    Some((first_next - Duration::days(1)).day())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::tree::TreeEngine;
    use crate::domain::{Category, LivingFeeRule, Transaction};
    use chrono::NaiveDate;
    use std::collections::HashSet;

    #[test]
    fn days_in_month_handles_short_and_long_months() {
        assert_eq!(days_in_month("2025-02"), Some(28));
        assert_eq!(days_in_month("2024-02"), Some(29));
        assert_eq!(days_in_month("2025-12"), Some(31));
        assert_eq!(days_in_month("not-a-month"), None);
    }

    #[test]
    fn snapshot_enriches_rows_with_project_breadcrumbs() {
        let mut ledger = Ledger::default();
        let category = Category::new("Games", "gamepad-2", "text-purple-600");
        let category_id = category.id;
        ledger.add_category(category);
        let account =
            crate::domain::Account::new("Cash Wallet", crate::domain::AccountKind::Cash, "CNY");
        let account_id = account.id;
        ledger.add_account(account);
        ledger.settings.living_fee_rules = vec![LivingFeeRule {
            day: 31,
            amount: 100.0,
        }];

        let txn = Transaction::new(
            268.0,
            "CNY",
            TransactionKind::Expense,
            NaiveDate::from_ymd_opt(2025, 4, 12).unwrap(),
            category_id,
            account_id,
        )
        .with_note("Black Myth");
        ledger.add_transaction(txn);

        TreeEngine::sync(&mut ledger, category_id);
        let node_id = ledger.project_nodes[0].id;
        let members: HashSet<_> = [node_id].into_iter().collect();
        TreeEngine::create_group(&mut ledger, category_id, "Game Collection", &members).unwrap();

        let snapshot = MonthSnapshot::build(&ledger, "2025-04").expect("snapshot");
        assert_eq!(snapshot.record_count, 1);
        assert_eq!(snapshot.rows[0].project, "Game Collection");
        assert_eq!(snapshot.rows[0].note, "Black Myth");
        assert_eq!(snapshot.total_expense, 268.0);
        // April has 30 days; the day-31 rule does not apply.
        assert_eq!(snapshot.living_fee_allocated, 0.0);
        assert!(MonthSnapshot::build(&ledger, "2025-05").is_none());
    }
}
