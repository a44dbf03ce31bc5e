use uuid::Uuid;

use crate::domain::Transaction;
use crate::ledger::Ledger;

use super::{ServiceError, ServiceResult};

pub struct TransactionService;

impl TransactionService {
    pub fn add(ledger: &mut Ledger, transaction: Transaction) -> ServiceResult<Uuid> {
        Self::validate(ledger, &transaction)?;
        Ok(ledger.add_transaction(transaction))
    }

    /// Full-record replacement; transactions are never edited in place.
    pub fn replace(ledger: &mut Ledger, transaction: Transaction) -> ServiceResult<()> {
        Self::validate(ledger, &transaction)?;
        let slot = ledger
            .transaction_mut(transaction.id)
            .ok_or_else(|| ServiceError::Invalid("Transaction not found".into()))?;
        *slot = transaction;
        Ok(())
    }

    pub fn remove(ledger: &mut Ledger, id: Uuid) -> ServiceResult<()> {
        let before = ledger.transactions.len();
        ledger.transactions.retain(|txn| txn.id != id);
        if ledger.transactions.len() == before {
            return Err(ServiceError::Invalid("Transaction not found".into()));
        }
        Ok(())
    }

    pub fn list_by_category(ledger: &Ledger, category_id: Uuid) -> Vec<&Transaction> {
        ledger
            .transactions
            .iter()
            .filter(|txn| txn.category_id == category_id)
            .collect()
    }

    /// Transactions falling inside a `YYYY-MM` month.
    pub fn list_by_month<'a>(ledger: &'a Ledger, month: &str) -> Vec<&'a Transaction> {
        ledger
            .transactions
            .iter()
            .filter(|txn| txn.date.format("%Y-%m").to_string() == month)
            .collect()
    }

    fn validate(ledger: &Ledger, transaction: &Transaction) -> ServiceResult<()> {
        if !transaction.amount.is_finite() || transaction.amount < 0.0 {
            return Err(ServiceError::Invalid(
                "Transaction amount must be non-negative".into(),
            ));
        }
        if ledger.category(transaction.category_id).is_none() {
            return Err(ServiceError::Invalid(format!(
                "Unknown category {}",
                transaction.category_id
            )));
        }
        if ledger.account(transaction.account_id).is_none() {
            return Err(ServiceError::Invalid(format!(
                "Unknown account {}",
                transaction.account_id
            )));
        }
        Ok(())
    }
}
