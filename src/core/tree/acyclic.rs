//! Admissibility check for proposed parent edges.

use uuid::Uuid;

use crate::domain::ProjectNode;

/// Upper bound on ancestor-walk length. A well-formed forest never gets
/// close; the cap converts a corrupted parent chain into a rejection
/// instead of an unbounded loop.
pub const MAX_ANCESTOR_HOPS: usize = 10_000;

/// Decides whether `child` may be re-parented under `parent` without
/// breaking the forest. Pure predicate: safe to evaluate repeatedly
/// while a drag gesture hovers over candidate targets.
///
/// Rejects when the target is missing or not a group, when the move is
/// a self-parent, when `child` is an ancestor of `parent`, and when the
/// walk meets an unresolvable parent reference (conservative: malformed
/// state is treated as already invalid).
pub fn can_adopt(nodes: &[ProjectNode], child: Uuid, parent: Uuid) -> bool {
    if child == parent {
        return false;
    }
    let Some(target) = find(nodes, parent) else {
        return false;
    };
    if !target.is_group() {
        return false;
    }

    // Walk from the candidate target up to the forest root; meeting
    // `child` on the way means the move would close a cycle.
    let mut current = target.parent_id;
    let mut hops = 0usize;
    while let Some(ancestor_id) = current {
        if ancestor_id == child {
            return false;
        }
        let Some(ancestor) = find(nodes, ancestor_id) else {
            tracing::warn!(%ancestor_id, "dangling parent reference during adoption check");
            return false;
        };
        current = ancestor.parent_id;
        hops += 1;
        if hops >= MAX_ANCESTOR_HOPS {
            tracing::warn!(%child, %parent, "ancestor walk exceeded hop cap");
            return false;
        }
    }
    true
}

fn find(nodes: &[ProjectNode], id: Uuid) -> Option<&ProjectNode> {
    nodes.iter().find(|node| node.id == id)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn group(order: i64) -> ProjectNode {
        ProjectNode::group(format!("g{order}"), order)
    }

    #[test]
    fn rejects_self_parent() {
        let g = group(0);
        let nodes = vec![g.clone()];
        assert!(!can_adopt(&nodes, g.id, g.id));
    }

    #[test]
    fn rejects_descendant_target() {
        let outer = group(0);
        let mut inner = group(1);
        inner.parent_id = Some(outer.id);
        let nodes = vec![outer.clone(), inner.clone()];
        // Moving the outer group under its own child would close a cycle.
        assert!(!can_adopt(&nodes, outer.id, inner.id));
        assert!(can_adopt(&nodes, inner.id, outer.id));
    }

    #[test]
    fn rejects_transaction_target() {
        let leaf = ProjectNode::transaction(Uuid::new_v4(), 0);
        let g = group(1);
        let nodes = vec![leaf.clone(), g.clone()];
        assert!(!can_adopt(&nodes, g.id, leaf.id));
    }

    #[test]
    fn rejects_dangling_parent_chain() {
        let mut orphaned = group(0);
        orphaned.parent_id = Some(Uuid::new_v4());
        let mover = group(1);
        let nodes = vec![orphaned.clone(), mover.clone()];
        assert!(!can_adopt(&nodes, mover.id, orphaned.id));
    }

    #[test]
    fn survives_preexisting_cycle_without_looping() {
        let mut a = group(0);
        let mut b = group(1);
        a.parent_id = Some(b.id);
        b.parent_id = Some(a.id);
        let mover = group(2);
        let nodes = vec![a.clone(), b, mover.clone()];
        assert!(!can_adopt(&nodes, mover.id, a.id));
    }
}
