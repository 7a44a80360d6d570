//! Categories service.

use async_trait::async_trait;
use mockall::automock;
use tracing::{debug, info};

use crate::{
    domain::{
        categories::{
            data::{CategoryUpdate, NewCategory},
            errors::CategoriesServiceError,
            records::{CategoryRecord, CategoryUuid},
        },
        is_blank,
    },
    repository::InventoryRepository,
};

#[derive(Debug, Clone)]
pub struct DocumentCategoriesService {
    repository: InventoryRepository,
}

impl DocumentCategoriesService {
    #[must_use]
    pub fn new(repository: InventoryRepository) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl CategoriesService for DocumentCategoriesService {
    async fn list_categories(&self) -> Result<Vec<CategoryRecord>, CategoriesServiceError> {
        Ok(self.repository.get_categories().await?)
    }

    async fn get_category(
        &self,
        category: CategoryUuid,
    ) -> Result<CategoryRecord, CategoriesServiceError> {
        self.repository
            .get_categories()
            .await?
            .into_iter()
            .find(|c| c.id == category)
            .ok_or(CategoriesServiceError::NotFound)
    }

    async fn create_category(
        &self,
        category: NewCategory,
    ) -> Result<CategoryRecord, CategoriesServiceError> {
        if is_blank(&category.name) {
            return Err(CategoriesServiceError::MissingRequiredData);
        }

        let created = CategoryRecord {
            id: CategoryUuid::new(),
            name: category.name,
        };

        self.repository
            .update_categories(|categories| {
                categories.push(created.clone());

                Ok::<_, CategoriesServiceError>(())
            })
            .await?;

        info!(category_id = %created.id, "created category");

        Ok(created)
    }

    async fn update_category(
        &self,
        category: CategoryUuid,
        update: CategoryUpdate,
    ) -> Result<CategoryRecord, CategoriesServiceError> {
        if is_blank(&update.name) {
            return Err(CategoriesServiceError::MissingRequiredData);
        }

        self.repository
            .update_categories(|categories| {
                let existing = categories
                    .iter_mut()
                    .find(|c| c.id == category)
                    .ok_or(CategoriesServiceError::NotFound)?;

                existing.name = update.name;

                Ok(existing.clone())
            })
            .await
    }

    async fn delete_category(&self, category: CategoryUuid) -> Result<(), CategoriesServiceError> {
        self.repository
            .update_document(|document| {
                let products = document
                    .products
                    .iter()
                    .filter(|p| p.category_id == category)
                    .count();

                if products > 0 {
                    debug!(category_id = %category, products, "category still in use");

                    return Err(CategoriesServiceError::InUse { products });
                }

                let position = document
                    .categories
                    .iter()
                    .position(|c| c.id == category)
                    .ok_or(CategoriesServiceError::NotFound)?;

                document.categories.remove(position);

                Ok(())
            })
            .await?;

        info!(category_id = %category, "deleted category");

        Ok(())
    }
}

#[automock]
#[async_trait]
pub trait CategoriesService: Send + Sync {
    /// Retrieves all categories in stored order.
    async fn list_categories(&self) -> Result<Vec<CategoryRecord>, CategoriesServiceError>;

    /// Retrieve a single category.
    async fn get_category(
        &self,
        category: CategoryUuid,
    ) -> Result<CategoryRecord, CategoriesServiceError>;

    /// Creates a category under a freshly assigned id.
    async fn create_category(
        &self,
        category: NewCategory,
    ) -> Result<CategoryRecord, CategoriesServiceError>;

    /// Renames the category with the given id.
    async fn update_category(
        &self,
        category: CategoryUuid,
        update: CategoryUpdate,
    ) -> Result<CategoryRecord, CategoriesServiceError>;

    /// Deletes a category, refusing while any product still references it.
    async fn delete_category(&self, category: CategoryUuid) -> Result<(), CategoriesServiceError>;
}
