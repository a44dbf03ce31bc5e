use uuid::Uuid;

use crate::domain::Category;
use crate::ledger::Ledger;

use super::{ServiceError, ServiceResult};

pub struct CategoryService;

impl CategoryService {
    pub fn add(ledger: &mut Ledger, category: Category) -> ServiceResult<()> {
        Self::validate_name(ledger, None, &category.name)?;
        if let Some(parent_id) = category.parent_id {
            Self::validate_parent(ledger, parent_id, None)?;
        }
        ledger.add_category(category);
        Ok(())
    }

    pub fn edit(ledger: &mut Ledger, id: Uuid, changes: Category) -> ServiceResult<()> {
        Self::validate_name(ledger, Some(id), &changes.name)?;
        if let Some(parent_id) = changes.parent_id {
            Self::validate_parent(ledger, parent_id, Some(id))?;
        }
        let category = ledger
            .category_mut(id)
            .ok_or_else(|| ServiceError::Invalid("Category not found".into()))?;
        category.name = changes.name;
        category.icon = changes.icon;
        category.color = changes.color;
        category.parent_id = changes.parent_id;
        Ok(())
    }

    pub fn remove(ledger: &mut Ledger, id: Uuid) -> ServiceResult<()> {
        if ledger
            .categories
            .iter()
            .any(|cat| cat.parent_id == Some(id))
        {
            return Err(ServiceError::Invalid(
                "Category has child categories".into(),
            ));
        }
        if ledger
            .transactions
            .iter()
            .any(|txn| txn.category_id == id)
        {
            return Err(ServiceError::Invalid(
                "Category has linked transactions".into(),
            ));
        }
        if ledger
            .projects
            .iter()
            .any(|project| project.category_id == id)
        {
            return Err(ServiceError::Invalid(
                "Category is promoted to a project".into(),
            ));
        }
        let before = ledger.categories.len();
        ledger.categories.retain(|category| category.id != id);
        if ledger.categories.len() == before {
            return Err(ServiceError::Invalid("Category not found".into()));
        }
        Ok(())
    }

    pub fn list(ledger: &Ledger) -> Vec<&Category> {
        ledger.categories.iter().collect()
    }

    fn validate_name(ledger: &Ledger, exclude: Option<Uuid>, candidate: &str) -> ServiceResult<()> {
        let normalized = candidate.trim().to_lowercase();
        if normalized.is_empty() {
            return Err(ServiceError::Invalid("Category name is empty".into()));
        }
        let duplicate = ledger.categories.iter().any(|category| {
            let name = category.name.trim().to_lowercase();
            name == normalized && exclude.map_or(true, |id| category.id != id)
        });
        if duplicate {
            Err(ServiceError::Invalid(format!(
                "Category `{}` already exists",
                candidate
            )))
        } else {
            Ok(())
        }
    }

    fn validate_parent(
        ledger: &Ledger,
        parent_id: Uuid,
        current: Option<Uuid>,
    ) -> ServiceResult<()> {
        if Some(parent_id) == current {
            return Err(ServiceError::Invalid(
                "Category cannot be its own parent".into(),
            ));
        }
        let parent = ledger
            .category(parent_id)
            .ok_or_else(|| ServiceError::Invalid("Parent category not found".into()))?;
        // Two-level structure: a parent may not itself be a child.
        if parent.parent_id.is_some() {
            return Err(ServiceError::Invalid(
                "Categories nest at most two levels".into(),
            ));
        }
        Ok(())
    }
}
