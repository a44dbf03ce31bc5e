//! Registry of categories promoted into project trees.

use uuid::Uuid;

use crate::domain::Project;
use crate::ledger::Ledger;

pub struct ProjectService;

impl ProjectService {
    /// Promotes categories into projects. Unknown categories and
    /// categories already promoted are silently skipped; returns the
    /// number of projects actually created.
    pub fn promote(ledger: &mut Ledger, category_ids: &[Uuid]) -> usize {
        let mut added = 0;
        for &category_id in category_ids {
            if ledger.category(category_id).is_none() {
                tracing::debug!(%category_id, "skipping promotion of unknown category");
                continue;
            }
            if Self::is_project(ledger, category_id) {
                continue;
            }
            ledger.projects.push(Project::new(category_id));
            added += 1;
        }
        if added > 0 {
            tracing::info!(added, "promoted categories to projects");
        }
        added
    }

    /// Removes the registry entry only. Nodes are left in place so a
    /// later re-promotion restores the tree unchanged.
    pub fn demote(ledger: &mut Ledger, category_id: Uuid) -> bool {
        let before = ledger.projects.len();
        ledger
            .projects
            .retain(|project| project.category_id != category_id);
        ledger.projects.len() != before
    }

    pub fn is_project(ledger: &Ledger, category_id: Uuid) -> bool {
        ledger
            .projects
            .iter()
            .any(|project| project.category_id == category_id)
    }

    pub fn list(ledger: &Ledger) -> Vec<Uuid> {
        ledger
            .projects
            .iter()
            .map(|project| project.category_id)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Category;

    #[test]
    fn promote_skips_duplicates_and_unknown_categories() {
        let mut ledger = Ledger::default();
        let cat = Category::new("Games", "gamepad-2", "text-purple-600");
        let cat_id = cat.id;
        ledger.add_category(cat);

        assert_eq!(ProjectService::promote(&mut ledger, &[cat_id]), 1);
        assert_eq!(
            ProjectService::promote(&mut ledger, &[cat_id, Uuid::new_v4()]),
            0
        );
        assert_eq!(ledger.projects.len(), 1);
        assert!(ProjectService::is_project(&ledger, cat_id));
    }

    #[test]
    fn demote_removes_registry_entry_only() {
        let mut ledger = Ledger::default();
        let cat = Category::new("Study", "book", "text-yellow-500");
        let cat_id = cat.id;
        ledger.add_category(cat);
        ProjectService::promote(&mut ledger, &[cat_id]);

        assert!(ProjectService::demote(&mut ledger, cat_id));
        assert!(!ProjectService::is_project(&ledger, cat_id));
        assert!(!ProjectService::demote(&mut ledger, cat_id));
    }
}
