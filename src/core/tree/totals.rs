//! Derived aggregate totals per node, recomputed after every mutation.

use std::collections::{HashMap, HashSet};

use uuid::Uuid;

use crate::ledger::Ledger;

use super::view::TreeView;

/// Signed total per relevant node of a project: a transaction node
/// contributes its signed amount, a group the recursive sum of its
/// direct children. Memoized per node id; a visited-set guard converts
/// any transient cycle into a zero contribution plus a warning instead
/// of unbounded recursion.
pub fn compute_totals(ledger: &Ledger, category_id: Uuid) -> HashMap<Uuid, f64> {
    let mut memo: HashMap<Uuid, f64> = HashMap::new();
    let mut visiting: HashSet<Uuid> = HashSet::new();
    for node in TreeView::relevant_nodes(ledger, category_id) {
        total_for(ledger, node.id, &mut memo, &mut visiting);
    }
    memo
}

fn total_for(
    ledger: &Ledger,
    node_id: Uuid,
    memo: &mut HashMap<Uuid, f64>,
    visiting: &mut HashSet<Uuid>,
) -> f64 {
    if let Some(&cached) = memo.get(&node_id) {
        return cached;
    }
    if !visiting.insert(node_id) {
        tracing::warn!(%node_id, "cycle detected while aggregating totals");
        return 0.0;
    }

    let sum = match ledger.node(node_id) {
        None => 0.0,
        Some(node) => match node.transaction_id() {
            Some(transaction_id) => ledger
                .transaction(transaction_id)
                .map_or(0.0, |txn| txn.signed_amount()),
            None => {
                let children: Vec<Uuid> = ledger
                    .project_nodes
                    .iter()
                    .filter(|child| child.parent_id == Some(node_id))
                    .map(|child| child.id)
                    .collect();
                children
                    .into_iter()
                    .map(|child| total_for(ledger, child, memo, visiting))
                    .sum()
            }
        },
    };

    visiting.remove(&node_id);
    memo.insert(node_id, sum);
    sum
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Category, ProjectNode, Transaction, TransactionKind};
    use chrono::NaiveDate;

    fn ledger_with_category() -> (Ledger, Uuid, Uuid) {
        let mut ledger = Ledger::default();
        let category = Category::new("Games", "gamepad-2", "text-purple-600");
        let category_id = category.id;
        ledger.add_category(category);
        let account = crate::domain::Account::new(
            "Cash Wallet",
            crate::domain::AccountKind::Cash,
            "CNY",
        );
        let account_id = account.id;
        ledger.add_account(account);
        (ledger, category_id, account_id)
    }

    fn txn(amount: f64, kind: TransactionKind, category_id: Uuid, account_id: Uuid) -> Transaction {
        Transaction::new(
            amount,
            "CNY",
            kind,
            NaiveDate::from_ymd_opt(2025, 3, 14).unwrap(),
            category_id,
            account_id,
        )
    }

    #[test]
    fn cycle_breaker_yields_zero_instead_of_hanging() {
        let (mut ledger, category_id, _) = ledger_with_category();
        let mut a = ProjectNode::group("A", 0);
        let mut b = ProjectNode::group("B", 1);
        // Corrupted state: two groups parenting each other.
        a.parent_id = Some(b.id);
        b.parent_id = Some(a.id);
        let (a_id, b_id) = (a.id, b.id);
        ledger.project_nodes.push(a);
        ledger.project_nodes.push(b);

        let totals = compute_totals(&ledger, category_id);
        assert_eq!(totals.get(&a_id).copied(), Some(0.0));
        assert_eq!(totals.get(&b_id).copied(), Some(0.0));
    }

    #[test]
    fn transfer_nodes_contribute_zero() {
        // Placeholder sign convention for transfers pending clarification.
        let (mut ledger, category_id, account_id) = ledger_with_category();
        let transfer = txn(120.0, TransactionKind::Transfer, category_id, account_id);
        let transfer_id = transfer.id;
        ledger.add_transaction(transfer);
        let node = ProjectNode::transaction(transfer_id, 0);
        let node_id = node.id;
        ledger.project_nodes.push(node);

        let totals = compute_totals(&ledger, category_id);
        assert_eq!(totals.get(&node_id).copied(), Some(0.0));
    }

    #[test]
    fn missing_transaction_contributes_zero() {
        let (mut ledger, category_id, _) = ledger_with_category();
        let group = ProjectNode::group("Shell", 0);
        let group_id = group.id;
        let mut dangling = ProjectNode::transaction(Uuid::new_v4(), 1);
        dangling.parent_id = Some(group_id);
        ledger.project_nodes.push(group);
        ledger.project_nodes.push(dangling);

        let totals = compute_totals(&ledger, category_id);
        assert_eq!(totals.get(&group_id).copied(), Some(0.0));
    }
}
