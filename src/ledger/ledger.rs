use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::{
    Account, AccountKind, Category, Project, ProjectNode, Settings, Transaction,
};

static DEFAULT_CATEGORY_SEED: Lazy<Vec<(&str, &str, &str)>> = Lazy::new(|| {
    vec![
        ("Dining", "utensils", "text-orange-500"),
        ("Transport", "car", "text-blue-500"),
        ("Housing", "home", "text-purple-500"),
        ("Salary", "banknote", "text-green-500"),
        ("Shopping", "shopping-bag", "text-pink-500"),
        ("Entertainment", "film", "text-indigo-500"),
        ("Study", "book", "text-yellow-500"),
        ("Games", "gamepad-2", "text-purple-600"),
        ("Stocks", "trending-up", "text-red-500"),
    ]
});

/// The whole application state, serialized as one JSON document. Every
/// mutation re-serializes and rewrites the full document; there are no
/// partial updates.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Ledger {
    #[serde(default)]
    pub transactions: Vec<Transaction>,
    #[serde(default)]
    pub categories: Vec<Category>,
    #[serde(default)]
    pub accounts: Vec<Account>,
    #[serde(default)]
    pub settings: Settings,
    #[serde(default)]
    pub projects: Vec<Project>,
    #[serde(default)]
    pub project_nodes: Vec<ProjectNode>,
}

impl Ledger {
    /// Fresh document seeded with the stock categories and accounts.
    pub fn with_defaults() -> Self {
        let categories = DEFAULT_CATEGORY_SEED
            .iter()
            .map(|(name, icon, color)| Category::new(*name, *icon, *color))
            .collect();
        let accounts = vec![
            Account::new("Cash Wallet", AccountKind::Cash, "CNY"),
            Account::new("WeChat/Alipay", AccountKind::Checking, "CNY"),
        ];
        Self {
            transactions: Vec::new(),
            categories,
            accounts,
            settings: Settings::default(),
            projects: Vec::new(),
            project_nodes: Vec::new(),
        }
    }

    pub fn add_transaction(&mut self, transaction: Transaction) -> Uuid {
        let id = transaction.id;
        self.transactions.push(transaction);
        id
    }

    pub fn add_category(&mut self, category: Category) -> Uuid {
        let id = category.id;
        self.categories.push(category);
        id
    }

    pub fn add_account(&mut self, account: Account) -> Uuid {
        let id = account.id;
        self.accounts.push(account);
        id
    }

    pub fn transaction(&self, id: Uuid) -> Option<&Transaction> {
        self.transactions.iter().find(|txn| txn.id == id)
    }

    pub fn transaction_mut(&mut self, id: Uuid) -> Option<&mut Transaction> {
        self.transactions.iter_mut().find(|txn| txn.id == id)
    }

    pub fn category(&self, id: Uuid) -> Option<&Category> {
        self.categories.iter().find(|category| category.id == id)
    }

    pub fn category_mut(&mut self, id: Uuid) -> Option<&mut Category> {
        self.categories.iter_mut().find(|category| category.id == id)
    }

    pub fn account(&self, id: Uuid) -> Option<&Account> {
        self.accounts.iter().find(|account| account.id == id)
    }

    pub fn account_mut(&mut self, id: Uuid) -> Option<&mut Account> {
        self.accounts.iter_mut().find(|account| account.id == id)
    }

    pub fn node(&self, id: Uuid) -> Option<&ProjectNode> {
        self.project_nodes.iter().find(|node| node.id == id)
    }

    pub fn node_mut(&mut self, id: Uuid) -> Option<&mut ProjectNode> {
        self.project_nodes.iter_mut().find(|node| node.id == id)
    }

    pub fn transaction_count(&self) -> usize {
        self.transactions.len()
    }

    /// Next sibling-order value: strictly greater than every existing
    /// node's `order`, so freshly created nodes sort after older ones.
    pub fn next_node_order(&self) -> i64 {
        self.project_nodes
            .iter()
            .map(|node| node.order)
            .max()
            .map_or(0, |max| max + 1)
    }
}
