//! Ephemeral UI bookkeeping for the tree view: expansion, selection,
//! and the two-phase drag protocol. Nothing here is persisted.

use std::collections::HashSet;

use uuid::Uuid;

use crate::ledger::Ledger;

use super::acyclic::can_adopt;
use super::engine::TreeEngine;

#[derive(Debug, Default)]
pub struct TreeUiState {
    expanded: HashSet<Uuid>,
    selected: HashSet<Uuid>,
    dragged: Option<Uuid>,
}

impl TreeUiState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn toggle_expand(&mut self, group_id: Uuid) {
        if !self.expanded.remove(&group_id) {
            self.expanded.insert(group_id);
        }
    }

    pub fn expand(&mut self, group_id: Uuid) {
        self.expanded.insert(group_id);
    }

    pub fn is_expanded(&self, group_id: Uuid) -> bool {
        self.expanded.contains(&group_id)
    }

    pub fn toggle_select(&mut self, node_id: Uuid) {
        if !self.selected.remove(&node_id) {
            self.selected.insert(node_id);
        }
    }

    pub fn selected(&self) -> &HashSet<Uuid> {
        &self.selected
    }

    pub fn clear_selection(&mut self) {
        self.selected.clear();
    }

    /// Creates a group from the current selection and auto-expands it.
    pub fn group_selection(
        &mut self,
        ledger: &mut Ledger,
        category_id: Uuid,
        name: &str,
    ) -> Option<Uuid> {
        let group_id = TreeEngine::create_group(ledger, category_id, name, &self.selected)?;
        self.selected.clear();
        self.expanded.insert(group_id);
        Some(group_id)
    }

    // --- drag and drop -------------------------------------------------

    pub fn drag_start(&mut self, node_id: Uuid) {
        self.dragged = Some(node_id);
    }

    pub fn drag_cancel(&mut self) {
        self.dragged = None;
    }

    pub fn dragged(&self) -> Option<Uuid> {
        self.dragged
    }

    /// Pure hover predicate: may be evaluated on every pointer move
    /// with no observable side effect.
    pub fn can_accept(&self, ledger: &Ledger, target_id: Uuid) -> bool {
        match self.dragged {
            Some(dragged) => can_adopt(&ledger.project_nodes, dragged, target_id),
            None => false,
        }
    }

    /// Commits the drag exactly once; the drop target auto-expands so
    /// the moved node stays visible.
    pub fn drop_on(&mut self, ledger: &mut Ledger, target_id: Uuid) -> bool {
        let Some(dragged) = self.dragged.take() else {
            return false;
        };
        let moved = TreeEngine::move_node(ledger, dragged, target_id);
        if moved {
            self.expanded.insert(target_id);
        }
        moved
    }

    /// Picker-mode commit: `Some` links under the chosen group, `None`
    /// attaches to the root trunk.
    pub fn pick_parent(
        &mut self,
        ledger: &mut Ledger,
        node_id: Uuid,
        parent: Option<Uuid>,
    ) -> bool {
        let changed = TreeEngine::reparent(ledger, node_id, parent);
        if changed {
            if let Some(parent_id) = parent {
                self.expanded.insert(parent_id);
            }
        }
        changed
    }
}
