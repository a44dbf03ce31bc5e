use chrono::NaiveDate;
use zenledger::{
    core::services::{
        AccountService, CategoryService, ProjectService, ServiceError, TransactionService,
    },
    domain::{Account, AccountKind, Category, Transaction, TransactionKind},
    ledger::Ledger,
};

fn prepared_ledger() -> Ledger {
    let mut ledger = Ledger::with_defaults();
    let category_id = ledger.categories[0].id;
    let account_id = ledger.accounts[0].id;
    let txn = Transaction::new(
        42.0,
        "CNY",
        TransactionKind::Expense,
        NaiveDate::from_ymd_opt(2025, 2, 10).unwrap(),
        category_id,
        account_id,
    )
    .with_note("Lunch");
    TransactionService::add(&mut ledger, txn).unwrap();
    ledger
}

#[test]
fn transaction_validation_rejects_bad_references_and_amounts() {
    let mut ledger = Ledger::with_defaults();
    let category_id = ledger.categories[0].id;
    let account_id = ledger.accounts[0].id;
    let date = NaiveDate::from_ymd_opt(2025, 2, 10).unwrap();

    let negative = Transaction::new(
        -5.0,
        "CNY",
        TransactionKind::Expense,
        date,
        category_id,
        account_id,
    );
    assert!(matches!(
        TransactionService::add(&mut ledger, negative).unwrap_err(),
        ServiceError::Invalid(_)
    ));

    let unknown_category = Transaction::new(
        5.0,
        "CNY",
        TransactionKind::Expense,
        date,
        uuid::Uuid::new_v4(),
        account_id,
    );
    assert!(TransactionService::add(&mut ledger, unknown_category).is_err());
    assert_eq!(ledger.transaction_count(), 0);
}

#[test]
fn transaction_replace_is_full_record() {
    let mut ledger = prepared_ledger();
    let mut replacement = ledger.transactions[0].clone();
    replacement.amount = 99.0;
    replacement.note = None;
    TransactionService::replace(&mut ledger, replacement).unwrap();

    let stored = &ledger.transactions[0];
    assert_eq!(stored.amount, 99.0);
    assert!(stored.note.is_none());
}

#[test]
fn list_by_month_filters_on_calendar_month() {
    let mut ledger = prepared_ledger();
    let category_id = ledger.categories[0].id;
    let account_id = ledger.accounts[0].id;
    let txn = Transaction::new(
        7.0,
        "CNY",
        TransactionKind::Income,
        NaiveDate::from_ymd_opt(2025, 3, 1).unwrap(),
        category_id,
        account_id,
    );
    TransactionService::add(&mut ledger, txn).unwrap();

    assert_eq!(TransactionService::list_by_month(&ledger, "2025-02").len(), 1);
    assert_eq!(TransactionService::list_by_month(&ledger, "2025-03").len(), 1);
    assert!(TransactionService::list_by_month(&ledger, "2025-04").is_empty());
}

#[test]
fn duplicate_category_name_rejected() {
    let mut ledger = Ledger::default();
    CategoryService::add(
        &mut ledger,
        Category::new("Rent", "home", "text-purple-500"),
    )
    .unwrap();
    let err = CategoryService::add(
        &mut ledger,
        Category::new("rent", "home", "text-purple-500"),
    )
    .unwrap_err();
    assert!(matches!(err, ServiceError::Invalid(_)));
}

#[test]
fn categories_nest_at_most_two_levels() {
    let mut ledger = Ledger::default();
    let top = Category::new("Food", "utensils", "text-orange-500");
    let top_id = top.id;
    CategoryService::add(&mut ledger, top).unwrap();
    let child = Category::new("Snacks", "utensils", "text-orange-500").with_parent(top_id);
    let child_id = child.id;
    CategoryService::add(&mut ledger, child).unwrap();

    let grandchild =
        Category::new("Midnight Snacks", "utensils", "text-orange-500").with_parent(child_id);
    assert!(CategoryService::add(&mut ledger, grandchild).is_err());
}

#[test]
fn promoted_category_cannot_be_removed() {
    let mut ledger = Ledger::default();
    let category = Category::new("Games", "gamepad-2", "text-purple-600");
    let category_id = category.id;
    CategoryService::add(&mut ledger, category).unwrap();
    ProjectService::promote(&mut ledger, &[category_id]);

    assert!(CategoryService::remove(&mut ledger, category_id).is_err());
    ProjectService::demote(&mut ledger, category_id);
    CategoryService::remove(&mut ledger, category_id).unwrap();
}

#[test]
fn account_crud_roundtrip() {
    let mut ledger = Ledger::default();
    let account = Account::new("Savings", AccountKind::Savings, "CNY");
    let account_id = account.id;
    AccountService::add(&mut ledger, account.clone()).unwrap();

    let mut update = account;
    update.name = "Emergency Fund".into();
    update.balance = 1200.0;
    AccountService::edit(&mut ledger, account_id, update).unwrap();
    assert_eq!(ledger.account(account_id).unwrap().name, "Emergency Fund");

    AccountService::remove(&mut ledger, account_id).unwrap();
    assert!(ledger.account(account_id).is_none());
}

#[test]
fn account_with_transactions_cannot_be_removed() {
    let mut ledger = prepared_ledger();
    let account_id = ledger.accounts[0].id;
    assert!(AccountService::remove(&mut ledger, account_id).is_err());
}
