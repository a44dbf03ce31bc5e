//! Bulk mock-data injection for exercising the tree and chart views.

use chrono::{Duration, Utc};
use rand::Rng;

use crate::domain::{Transaction, TransactionKind};
use crate::ledger::Ledger;

/// Injects `count` random transactions dated within the last 60 days,
/// roughly 65% expenses, spread over the existing categories and booked
/// against the first account. No-op when the ledger has no categories
/// or accounts to reference.
pub fn generate_transactions(ledger: &mut Ledger, count: usize) -> usize {
    if ledger.categories.is_empty() || ledger.accounts.is_empty() {
        return 0;
    }
    let account_id = ledger.accounts[0].id;
    let today = Utc::now().date_naive();
    let mut rng = rand::thread_rng();

    for _ in 0..count {
        let is_expense = rng.gen_bool(0.65);
        let amount = rng.gen_range(5..155) as f64;
        let category = &ledger.categories[rng.gen_range(0..ledger.categories.len())];
        let category_id = category.id;
        let date = today - Duration::days(rng.gen_range(0..60));
        let kind = if is_expense {
            TransactionKind::Expense
        } else {
            TransactionKind::Income
        };
        let txn = Transaction::new(amount, "CNY", kind, date, category_id, account_id).with_note(
            format!(
                "Test {} #{}",
                kind,
                rng.gen_range(0..1000)
            ),
        );
        ledger.add_transaction(txn);
    }
    tracing::info!(count, "generated mock transactions");
    count
}

/// Drops every transaction. Project nodes left dangling are pruned on
/// the next sync.
pub fn clear_transactions(ledger: &mut Ledger) {
    let removed = ledger.transactions.len();
    ledger.transactions.clear();
    tracing::info!(removed, "cleared all transactions");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generates_valid_transactions() {
        let mut ledger = Ledger::with_defaults();
        assert_eq!(generate_transactions(&mut ledger, 50), 50);
        assert_eq!(ledger.transaction_count(), 50);
        assert!(ledger.transactions.iter().all(|txn| {
            txn.amount >= 0.0
                && ledger.category(txn.category_id).is_some()
                && ledger.account(txn.account_id).is_some()
        }));
    }

    #[test]
    fn generation_requires_seed_data() {
        let mut ledger = Ledger::default();
        assert_eq!(generate_transactions(&mut ledger, 10), 0);
    }
}
