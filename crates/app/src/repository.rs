//! Inventory Repository
//!
//! Typed accessors over the two collections of the inventory [`Document`].
//! Both collections live in one document, so saving one collection always
//! round-trips the other; every save runs as a single unit of work under the
//! store's exclusive lock, which keeps a concurrent save of the other
//! collection from being overwritten with a stale copy.

use std::sync::Arc;

use crate::{
    domain::{categories::records::CategoryRecord, products::records::ProductRecord},
    store::{Document, Store, StoreError},
};

#[derive(Debug, Clone)]
pub struct InventoryRepository {
    store: Arc<Store>,
}

impl InventoryRepository {
    #[must_use]
    pub fn new(store: Arc<Store>) -> Self {
        Self { store }
    }

    /// Snapshot of both collections.
    ///
    /// # Errors
    ///
    /// Propagates any [`StoreError`] raised while reading the document.
    pub async fn get_document(&self) -> Result<Document, StoreError> {
        self.store.read_all().await
    }

    /// # Errors
    ///
    /// Propagates any [`StoreError`] raised while reading the document.
    pub async fn get_products(&self) -> Result<Vec<ProductRecord>, StoreError> {
        Ok(self.store.read_all().await?.products)
    }

    /// # Errors
    ///
    /// Propagates any [`StoreError`] raised while reading the document.
    pub async fn get_categories(&self) -> Result<Vec<CategoryRecord>, StoreError> {
        Ok(self.store.read_all().await?.categories)
    }

    /// Replace the products collection, keeping the committed categories.
    ///
    /// # Errors
    ///
    /// Propagates any [`StoreError`] raised while reading or writing.
    pub async fn save_products(&self, products: Vec<ProductRecord>) -> Result<(), StoreError> {
        self.update_products(|current| {
            *current = products;

            Ok(())
        })
        .await
    }

    /// Replace the categories collection, keeping the committed products.
    ///
    /// # Errors
    ///
    /// Propagates any [`StoreError`] raised while reading or writing.
    pub async fn save_categories(&self, categories: Vec<CategoryRecord>) -> Result<(), StoreError> {
        self.update_categories(|current| {
            *current = categories;

            Ok(())
        })
        .await
    }

    /// Run a read-modify-write over the products collection.
    ///
    /// # Errors
    ///
    /// Returns the error produced by `change` (in which case nothing is
    /// persisted) or any [`StoreError`].
    pub async fn update_products<T, E, F>(&self, change: F) -> Result<T, E>
    where
        F: FnOnce(&mut Vec<ProductRecord>) -> Result<T, E>,
        E: From<StoreError>,
    {
        self.store
            .mutate(|document| change(&mut document.products))
            .await
    }

    /// Run a read-modify-write over the categories collection.
    ///
    /// # Errors
    ///
    /// Returns the error produced by `change` (in which case nothing is
    /// persisted) or any [`StoreError`].
    pub async fn update_categories<T, E, F>(&self, change: F) -> Result<T, E>
    where
        F: FnOnce(&mut Vec<CategoryRecord>) -> Result<T, E>,
        E: From<StoreError>,
    {
        self.store
            .mutate(|document| change(&mut document.categories))
            .await
    }

    /// Run a read-modify-write that needs both collections, such as a check
    /// against products before removing a category.
    ///
    /// # Errors
    ///
    /// Returns the error produced by `change` (in which case nothing is
    /// persisted) or any [`StoreError`].
    pub async fn update_document<T, E, F>(&self, change: F) -> Result<T, E>
    where
        F: FnOnce(&mut Document) -> Result<T, E>,
        E: From<StoreError>,
    {
        self.store.mutate(change).await
    }
}

#[cfg(test)]
mod tests {
    use rust_decimal::Decimal;
    use tempfile::TempDir;
    use testresult::TestResult;

    use crate::domain::{
        categories::records::CategoryUuid,
        products::records::ProductUuid,
    };

    use super::*;

    async fn make_repository(dir: &TempDir) -> Result<InventoryRepository, StoreError> {
        let store = Arc::new(Store::new(dir.path().join("inventory.json")));

        store.initialize().await?;

        Ok(InventoryRepository::new(store))
    }

    fn make_product(category: CategoryUuid) -> ProductRecord {
        ProductRecord {
            id: ProductUuid::new(),
            name: "Saw".to_string(),
            code: "S1".to_string(),
            category_id: category,
            price: Decimal::new(1999, 2),
            stock_quantity: 4,
            is_active: true,
        }
    }

    #[tokio::test]
    async fn save_products_keeps_committed_categories() -> TestResult {
        let dir = TempDir::new()?;
        let repo = make_repository(&dir).await?;

        let category = CategoryRecord {
            id: CategoryUuid::new(),
            name: "Tools".to_string(),
        };

        repo.save_categories(vec![category.clone()]).await?;

        let product = make_product(category.id);

        repo.save_products(vec![product.clone()]).await?;

        assert_eq!(repo.get_products().await?, vec![product]);
        assert_eq!(repo.get_categories().await?, vec![category]);

        Ok(())
    }

    #[tokio::test]
    async fn save_categories_keeps_committed_products() -> TestResult {
        let dir = TempDir::new()?;
        let repo = make_repository(&dir).await?;

        let product = make_product(CategoryUuid::new());

        repo.save_products(vec![product.clone()]).await?;
        repo.save_categories(vec![]).await?;

        assert_eq!(repo.get_products().await?, vec![product]);

        Ok(())
    }

    #[tokio::test]
    async fn concurrent_saves_of_both_collections_are_not_lost() -> TestResult {
        let dir = TempDir::new()?;
        let repo = make_repository(&dir).await?;

        let category = CategoryRecord {
            id: CategoryUuid::new(),
            name: "Garden".to_string(),
        };
        let product = make_product(category.id);

        let (products, categories) = tokio::join!(
            repo.save_products(vec![product.clone()]),
            repo.save_categories(vec![category.clone()]),
        );

        products?;
        categories?;

        let document = repo.get_document().await?;

        assert_eq!(document.products, vec![product]);
        assert_eq!(document.categories, vec![category]);

        Ok(())
    }
}
