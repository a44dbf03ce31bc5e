use uuid::Uuid;

use crate::domain::Account;
use crate::ledger::Ledger;

use super::{ServiceError, ServiceResult};

pub struct AccountService;

impl AccountService {
    pub fn add(ledger: &mut Ledger, account: Account) -> ServiceResult<()> {
        Self::validate_name(ledger, None, &account.name)?;
        ledger.add_account(account);
        Ok(())
    }

    pub fn edit(ledger: &mut Ledger, id: Uuid, changes: Account) -> ServiceResult<()> {
        Self::validate_name(ledger, Some(id), &changes.name)?;
        let account = ledger
            .account_mut(id)
            .ok_or_else(|| ServiceError::Invalid("Account not found".into()))?;
        account.name = changes.name;
        account.kind = changes.kind;
        account.currency = changes.currency;
        account.balance = changes.balance;
        Ok(())
    }

    pub fn remove(ledger: &mut Ledger, id: Uuid) -> ServiceResult<()> {
        if ledger.transactions.iter().any(|txn| txn.account_id == id) {
            return Err(ServiceError::Invalid(
                "Account has linked transactions".into(),
            ));
        }
        let before = ledger.accounts.len();
        ledger.accounts.retain(|account| account.id != id);
        if ledger.accounts.len() == before {
            return Err(ServiceError::Invalid("Account not found".into()));
        }
        Ok(())
    }

    pub fn list(ledger: &Ledger) -> Vec<&Account> {
        ledger.accounts.iter().collect()
    }

    fn validate_name(ledger: &Ledger, exclude: Option<Uuid>, candidate: &str) -> ServiceResult<()> {
        let normalized = candidate.trim().to_lowercase();
        if normalized.is_empty() {
            return Err(ServiceError::Invalid("Account name is empty".into()));
        }
        let duplicate = ledger.accounts.iter().any(|account| {
            let name = account.name.trim().to_lowercase();
            name == normalized && exclude.map_or(true, |id| account.id != id)
        });
        if duplicate {
            Err(ServiceError::Invalid(format!(
                "Account `{}` already exists",
                candidate
            )))
        } else {
            Ok(())
        }
    }
}
