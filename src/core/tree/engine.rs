//! Mutating operations of the project tree engine.
//!
//! Rejections originating from interactive gestures (empty group name,
//! cyclic move, unknown target) are silent no-ops rather than errors:
//! the return value says whether the forest changed, and a speculative
//! drag must never crash the interaction.

use std::collections::HashSet;

use uuid::Uuid;

use crate::domain::ProjectNode;
use crate::ledger::Ledger;

use super::acyclic::can_adopt;
use super::view::TreeView;

pub struct TreeEngine;

impl TreeEngine {
    /// Imports every transaction of the project's category that has no
    /// node yet, as new root-trunk transaction nodes. Batch order
    /// follows ledger enumeration order; orders are strictly increasing
    /// so the batch sorts after existing nodes. Orphaned transaction
    /// nodes (their transaction was deleted out from under them) are
    /// pruned first. Returns the number of nodes created.
    pub fn sync(ledger: &mut Ledger, category_id: Uuid) -> usize {
        Self::prune_orphans(ledger);

        let unlinked: Vec<Uuid> = TreeView::unlinked_transactions(ledger, category_id)
            .into_iter()
            .map(|txn| txn.id)
            .collect();
        if unlinked.is_empty() {
            return 0;
        }

        let base = ledger.next_node_order();
        for (idx, transaction_id) in unlinked.iter().enumerate() {
            ledger
                .project_nodes
                .push(ProjectNode::transaction(*transaction_id, base + idx as i64));
        }
        tracing::info!(%category_id, count = unlinked.len(), "synced unlinked transactions");
        unlinked.len()
    }

    /// Creates a named group at the root trunk and re-parents every
    /// member node under it, detaching members from any prior parent
    /// (a node belongs to one group at a time). Returns the new group's
    /// id so callers can auto-expand it, or `None` when the name trims
    /// empty, the member set is empty, or a member is not a relevant
    /// node of this project.
    pub fn create_group(
        ledger: &mut Ledger,
        category_id: Uuid,
        name: &str,
        members: &HashSet<Uuid>,
    ) -> Option<Uuid> {
        let name = name.trim();
        if name.is_empty() || members.is_empty() {
            return None;
        }
        let relevant = TreeView::relevant_ids(ledger, category_id);
        if !members.is_subset(&relevant) {
            return None;
        }

        let group = ProjectNode::group(name, ledger.next_node_order());
        let group_id = group.id;
        for node in ledger
            .project_nodes
            .iter_mut()
            .filter(|node| members.contains(&node.id))
        {
            node.parent_id = Some(group_id);
        }
        ledger.project_nodes.push(group);
        tracing::info!(%group_id, members = members.len(), "created group");
        Some(group_id)
    }

    /// Re-parents a node under a group. No-op unless the node exists,
    /// the target is an existing group, and the move keeps the forest
    /// acyclic. Returns whether the forest changed.
    pub fn move_node(ledger: &mut Ledger, node_id: Uuid, target_group_id: Uuid) -> bool {
        if ledger.node(node_id).is_none() {
            return false;
        }
        if !can_adopt(&ledger.project_nodes, node_id, target_group_id) {
            tracing::debug!(%node_id, %target_group_id, "rejected re-parent");
            return false;
        }
        // can_adopt guarantees the target exists and is a group.
        match ledger.node_mut(node_id) {
            Some(node) if node.parent_id != Some(target_group_id) => {
                node.parent_id = Some(target_group_id);
                true
            }
            _ => false,
        }
    }

    /// Detaches a node onto the root trunk. Returns whether anything
    /// changed; unlinking a root node is an already-satisfied no-op.
    pub fn unlink_node(ledger: &mut Ledger, node_id: Uuid) -> bool {
        match ledger.node_mut(node_id) {
            Some(node) if node.parent_id.is_some() => {
                node.parent_id = None;
                true
            }
            _ => false,
        }
    }

    /// Commits a picker or drag decision: `Some` adopts under a group,
    /// `None` attaches to the root trunk.
    pub fn reparent(ledger: &mut Ledger, node_id: Uuid, parent: Option<Uuid>) -> bool {
        match parent {
            Some(target_group_id) => Self::move_node(ledger, node_id, target_group_id),
            None => Self::unlink_node(ledger, node_id),
        }
    }

    /// Deletes a node and promotes its direct children to the root
    /// trunk; never cascades. The underlying transaction, if any, is
    /// untouched and becomes eligible for re-sync. Removing an unknown
    /// node is a no-op.
    pub fn remove_node(ledger: &mut Ledger, node_id: Uuid) -> bool {
        let before = ledger.project_nodes.len();
        ledger.project_nodes.retain(|node| node.id != node_id);
        if ledger.project_nodes.len() == before {
            return false;
        }
        for child in ledger
            .project_nodes
            .iter_mut()
            .filter(|node| node.parent_id == Some(node_id))
        {
            child.parent_id = None;
        }
        tracing::info!(%node_id, "removed node, children promoted to root");
        true
    }

    /// Drops transaction nodes whose transaction no longer exists in
    /// the ledger. Transaction nodes are leaves, so nothing needs
    /// promoting.
    fn prune_orphans(ledger: &mut Ledger) {
        let before = ledger.project_nodes.len();
        let live: HashSet<Uuid> = ledger.transactions.iter().map(|txn| txn.id).collect();
        ledger.project_nodes.retain(|node| match node.transaction_id() {
            Some(transaction_id) => live.contains(&transaction_id),
            None => true,
        });
        let pruned = before - ledger.project_nodes.len();
        if pruned > 0 {
            tracing::warn!(pruned, "pruned orphaned transaction nodes");
        }
    }
}
