//! Category CRUD. Categories carry no relational checks of their own.

use std::sync::Arc;

use quill_core::error::CoreError;
use quill_core::types::DbId;
use quill_db::models::category::{Category, CategoryDto, CategoryInput, NewCategory};
use quill_db::CategoryStore;

use crate::ServiceResult;

#[derive(Clone)]
pub struct CategoryService {
    categories: Arc<dyn CategoryStore>,
}

impl CategoryService {
    pub fn new(categories: Arc<dyn CategoryStore>) -> Self {
        Self { categories }
    }

    pub async fn add_category(&self, input: &CategoryInput) -> ServiceResult<CategoryDto> {
        let category = self.categories.insert(NewCategory::from(input)).await?;
        tracing::info!(category_id = category.id, name = %category.name, "Category created");
        Ok(category.into())
    }

    pub async fn get_category(&self, id: DbId) -> ServiceResult<CategoryDto> {
        Ok(self.load(id).await?.into())
    }

    pub async fn get_all_categories(&self) -> ServiceResult<Vec<CategoryDto>> {
        let categories = self.categories.find_all().await?;
        tracing::debug!(count = categories.len(), "Listed categories");
        Ok(categories.into_iter().map(CategoryDto::from).collect())
    }

    pub async fn update_category(
        &self,
        input: &CategoryInput,
        id: DbId,
    ) -> ServiceResult<CategoryDto> {
        let existing = self.load(id).await?;
        let updated = self
            .categories
            .update(&apply_update(existing, input))
            .await?;
        tracing::info!(category_id = id, "Category updated");
        Ok(updated.into())
    }

    /// Remove a category. Posts that reference it are left to the store.
    pub async fn delete_category(&self, id: DbId) -> ServiceResult<()> {
        let existing = self.load(id).await?;
        self.categories.delete(&existing).await?;
        tracing::info!(category_id = id, "Category deleted");
        Ok(())
    }

    async fn load(&self, id: DbId) -> ServiceResult<Category> {
        let category = self
            .categories
            .find_by_id(id)
            .await?
            .ok_or_else(|| CoreError::not_found("Category", id))?;
        Ok(category)
    }
}

/// Overwrite the editable fields of a stored category.
fn apply_update(existing: Category, input: &CategoryInput) -> Category {
    Category {
        name: input.name.clone(),
        description: input.description.clone(),
        ..existing
    }
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;
    use quill_db::repositories::MemoryCategoryStore;

    use super::*;
    use crate::ServiceError;

    fn input(name: &str, description: &str) -> CategoryInput {
        CategoryInput {
            name: name.to_string(),
            description: description.to_string(),
        }
    }

    fn service() -> CategoryService {
        CategoryService::new(Arc::new(MemoryCategoryStore::new()))
    }

    #[tokio::test]
    async fn add_returns_input_fields_and_new_id() {
        let svc = service();
        let created = svc
            .add_category(&input("Rust", "Systems programming"))
            .await
            .unwrap();
        assert_eq!(created.name, "Rust");
        assert_eq!(created.description, "Systems programming");
        assert!(created.id > 0);
    }

    #[tokio::test]
    async fn get_missing_category_is_not_found() {
        let err = service().get_category(99).await.unwrap_err();
        assert_matches!(
            err,
            ServiceError::Core(CoreError::NotFound {
                entity: "Category",
                field: "id",
                value: 99
            })
        );
    }

    #[tokio::test]
    async fn get_all_keeps_insertion_order() {
        let svc = service();
        svc.add_category(&input("b", "")).await.unwrap();
        svc.add_category(&input("a", "")).await.unwrap();
        svc.add_category(&input("c", "")).await.unwrap();

        let names: Vec<_> = svc
            .get_all_categories()
            .await
            .unwrap()
            .into_iter()
            .map(|c| c.name)
            .collect();
        assert_eq!(names, vec!["b", "a", "c"]);
    }

    #[tokio::test]
    async fn update_overwrites_name_and_description() {
        let svc = service();
        let created = svc.add_category(&input("Old", "old")).await.unwrap();

        let updated = svc
            .update_category(&input("New", "new"), created.id)
            .await
            .unwrap();
        assert_eq!(updated.id, created.id);
        assert_eq!(updated.name, "New");
        assert_eq!(updated.description, "new");
        assert_eq!(svc.get_category(created.id).await.unwrap(), updated);
    }

    #[tokio::test]
    async fn update_missing_category_is_not_found() {
        let err = service()
            .update_category(&input("x", "y"), 5)
            .await
            .unwrap_err();
        assert_matches!(err, ServiceError::Core(CoreError::NotFound { .. }));
    }

    #[tokio::test]
    async fn deleted_category_is_gone() {
        let svc = service();
        let created = svc.add_category(&input("Temp", "")).await.unwrap();
        svc.delete_category(created.id).await.unwrap();

        let err = svc.get_category(created.id).await.unwrap_err();
        assert_matches!(err, ServiceError::Core(CoreError::NotFound { .. }));
    }

    #[tokio::test]
    async fn delete_missing_category_is_not_found() {
        let err = service().delete_category(1).await.unwrap_err();
        assert_matches!(err, ServiceError::Core(CoreError::NotFound { .. }));
    }

    #[test]
    fn apply_update_keeps_identity() {
        let existing = Category {
            id: 3,
            name: "a".into(),
            description: "b".into(),
        };
        let updated = apply_update(existing, &input("c", "d"));
        assert_eq!(updated.id, 3);
        assert_eq!(updated.name, "c");
        assert_eq!(updated.description, "d");
    }
}
