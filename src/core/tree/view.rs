//! Read model consumed by the tree renderer and the node picker.
//!
//! All derivations are computed fresh from the ledger on every call;
//! nothing here caches across mutations.

use std::collections::HashSet;

use uuid::Uuid;

use crate::domain::{ProjectNode, Transaction};
use crate::ledger::Ledger;

use super::acyclic::MAX_ANCESTOR_HOPS;

/// Display side of a root node in the two-sided trunk layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LaneSide {
    Left,
    Right,
}

impl LaneSide {
    /// Root nodes alternate sides by position along the trunk.
    pub fn for_index(index: usize) -> Self {
        if index % 2 == 0 {
            LaneSide::Left
        } else {
            LaneSide::Right
        }
    }
}

pub struct TreeView;

impl TreeView {
    /// The subset of all project nodes belonging to one project.
    ///
    /// A transaction node is relevant when its transaction exists and
    /// carries the project's category. A group node is relevant when
    /// any descendant transaction node is, or when it has no
    /// transaction descendants at all (an emptied group stays visible
    /// rather than vanishing the moment its last child is removed).
    pub fn relevant_nodes(ledger: &Ledger, category_id: Uuid) -> Vec<&ProjectNode> {
        ledger
            .project_nodes
            .iter()
            .filter(|node| Self::is_relevant(ledger, category_id, node))
            .collect()
    }

    pub fn relevant_ids(ledger: &Ledger, category_id: Uuid) -> HashSet<Uuid> {
        Self::relevant_nodes(ledger, category_id)
            .into_iter()
            .map(|node| node.id)
            .collect()
    }

    /// Root trunk of the project: relevant nodes without a resolvable
    /// parent, ordered by `order` ascending (ties break by id for a
    /// stable layout).
    pub fn root_nodes(ledger: &Ledger, category_id: Uuid) -> Vec<&ProjectNode> {
        let mut roots: Vec<&ProjectNode> = Self::relevant_nodes(ledger, category_id)
            .into_iter()
            .filter(|node| Self::effective_parent(ledger, node).is_none())
            .collect();
        roots.sort_by_key(|node| (node.order, node.id));
        roots
    }

    /// Direct children of a group, ordered like root nodes.
    pub fn children_of(ledger: &Ledger, category_id: Uuid, parent_id: Uuid) -> Vec<&ProjectNode> {
        let mut children: Vec<&ProjectNode> = Self::relevant_nodes(ledger, category_id)
            .into_iter()
            .filter(|node| node.parent_id == Some(parent_id))
            .collect();
        children.sort_by_key(|node| (node.order, node.id));
        children
    }

    /// Transactions of the category not yet represented by any node.
    pub fn unlinked_transactions(ledger: &Ledger, category_id: Uuid) -> Vec<&Transaction> {
        let linked: HashSet<Uuid> = ledger
            .project_nodes
            .iter()
            .filter_map(|node| node.transaction_id())
            .collect();
        ledger
            .transactions
            .iter()
            .filter(|txn| txn.category_id == category_id && !linked.contains(&txn.id))
            .collect()
    }

    pub fn unlinked_count(ledger: &Ledger, category_id: Uuid) -> usize {
        Self::unlinked_transactions(ledger, category_id).len()
    }

    /// Group-name breadcrumb above a transaction's node, root-most
    /// first, joined with " > ". `None` when the transaction has no
    /// node or sits directly on the trunk.
    pub fn node_path(ledger: &Ledger, transaction_id: Uuid) -> Option<String> {
        let node = ledger
            .project_nodes
            .iter()
            .find(|node| node.transaction_id() == Some(transaction_id))?;
        let mut names = Vec::new();
        let mut current = node.parent_id;
        let mut hops = 0usize;
        while let Some(parent_id) = current {
            let Some(parent) = ledger.node(parent_id) else {
                break;
            };
            if let Some(name) = parent.group_name() {
                names.push(name.to_string());
            }
            current = parent.parent_id;
            hops += 1;
            if hops >= MAX_ANCESTOR_HOPS {
                tracing::warn!(%transaction_id, "breadcrumb walk exceeded hop cap");
                break;
            }
        }
        if names.is_empty() {
            return None;
        }
        names.reverse();
        Some(names.join(" > "))
    }

    /// A dangling parent reference degrades to the root trunk.
    fn effective_parent<'a>(ledger: &'a Ledger, node: &ProjectNode) -> Option<&'a ProjectNode> {
        node.parent_id.and_then(|parent_id| ledger.node(parent_id))
    }

    fn is_relevant(ledger: &Ledger, category_id: Uuid, node: &ProjectNode) -> bool {
        match node.transaction_id() {
            Some(transaction_id) => ledger
                .transaction(transaction_id)
                .map_or(false, |txn| txn.category_id == category_id),
            None => {
                let (descendants, matching) = Self::descendant_stats(ledger, category_id, node.id);
                descendants == 0 || matching > 0
            }
        }
    }

    /// Counts transaction-node descendants of a group and how many of
    /// them belong to the given category. Visited guard keeps a
    /// transiently corrupted forest from looping the scan.
    fn descendant_stats(ledger: &Ledger, category_id: Uuid, group_id: Uuid) -> (usize, usize) {
        let mut descendants = 0usize;
        let mut matching = 0usize;
        let mut visited: HashSet<Uuid> = HashSet::new();
        let mut stack = vec![group_id];
        while let Some(current) = stack.pop() {
            if !visited.insert(current) {
                continue;
            }
            for child in ledger
                .project_nodes
                .iter()
                .filter(|node| node.parent_id == Some(current))
            {
                match child.transaction_id() {
                    Some(transaction_id) => {
                        if ledger.transaction(transaction_id).is_some() {
                            descendants += 1;
                            if ledger
                                .transaction(transaction_id)
                                .map_or(false, |txn| txn.category_id == category_id)
                            {
                                matching += 1;
                            }
                        }
                    }
                    None => stack.push(child.id),
                }
            }
        }
        (descendants, matching)
    }
}
