//! Domain types for the project tree subsystem.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::common::{Displayable, Identifiable};

/// Marks a category as having an associated project tree. At most one
/// project exists per category; duplicates are silently skipped at
/// promotion time.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub category_id: Uuid,
    pub created_at: DateTime<Utc>,
}

impl Project {
    pub fn new(category_id: Uuid) -> Self {
        Self {
            category_id,
            created_at: Utc::now(),
        }
    }
}

/// A unit in a project tree: either a leaf wrapping one transaction or a
/// group (folder) aggregating children.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ProjectNode {
    pub id: Uuid,
    #[serde(flatten)]
    pub kind: NodeKind,
    /// `None` puts the node on the project's root trunk. `Some` must
    /// reference a group node; a dangling reference degrades to root.
    pub parent_id: Option<Uuid>,
    /// Monotonic insertion moment, used only to order siblings.
    pub order: i64,
}

impl ProjectNode {
    pub fn transaction(transaction_id: Uuid, order: i64) -> Self {
        Self {
            id: Uuid::new_v4(),
            kind: NodeKind::Transaction { transaction_id },
            parent_id: None,
            order,
        }
    }

    pub fn group(name: impl Into<String>, order: i64) -> Self {
        Self {
            id: Uuid::new_v4(),
            kind: NodeKind::Group { name: name.into() },
            parent_id: None,
            order,
        }
    }

    pub fn is_group(&self) -> bool {
        matches!(self.kind, NodeKind::Group { .. })
    }

    pub fn is_transaction(&self) -> bool {
        matches!(self.kind, NodeKind::Transaction { .. })
    }

    pub fn transaction_id(&self) -> Option<Uuid> {
        match self.kind {
            NodeKind::Transaction { transaction_id } => Some(transaction_id),
            NodeKind::Group { .. } => None,
        }
    }

    pub fn group_name(&self) -> Option<&str> {
        match &self.kind {
            NodeKind::Group { name } => Some(name),
            NodeKind::Transaction { .. } => None,
        }
    }
}

impl Identifiable for ProjectNode {
    fn id(&self) -> Uuid {
        self.id
    }
}

impl Displayable for ProjectNode {
    fn display_label(&self) -> String {
        match &self.kind {
            NodeKind::Group { name } => format!("group:{} `{}`", self.id, name),
            NodeKind::Transaction { transaction_id } => {
                format!("node:{} -> txn:{}", self.id, transaction_id)
            }
        }
    }
}

/// Variant payloads of a project node. Serialized with the original
/// document's `type` tag so a `GROUP` can never carry a transaction
/// reference, nor a `TRANSACTION` a display name.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type")]
pub enum NodeKind {
    #[serde(rename = "TRANSACTION", rename_all = "camelCase")]
    Transaction { transaction_id: Uuid },
    #[serde(rename = "GROUP")]
    Group { name: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn node_kind_serializes_with_flat_type_tag() {
        let node = ProjectNode::group("Game Collection", 7);
        let json = serde_json::to_value(&node).unwrap();
        assert_eq!(json["type"], "GROUP");
        assert_eq!(json["name"], "Game Collection");
        assert_eq!(json["order"], 7);
        assert!(json["parentId"].is_null());
        assert!(json.get("transactionId").is_none());
    }

    #[test]
    fn transaction_node_round_trips() {
        let node = ProjectNode::transaction(Uuid::new_v4(), 1);
        let json = serde_json::to_string(&node).unwrap();
        let back: ProjectNode = serde_json::from_str(&json).unwrap();
        assert_eq!(back, node);
        assert!(back.is_transaction());
        assert!(back.group_name().is_none());
    }
}
