//! App Context

use std::{path::PathBuf, sync::Arc};

use thiserror::Error;

use crate::{
    domain::{
        categories::{CategoriesService, DocumentCategoriesService},
        products::{DocumentProductsService, ProductsService},
        summary::{DocumentSummaryService, SummaryService},
    },
    repository::InventoryRepository,
    store::{Store, StoreError},
};

#[derive(Debug, Error)]
pub enum AppInitError {
    #[error("failed to initialize inventory document")]
    Store(#[source] StoreError),
}

/// The services shared by every request, all backed by one [`Store`].
#[derive(Clone)]
pub struct AppContext {
    pub products: Arc<dyn ProductsService>,
    pub categories: Arc<dyn CategoriesService>,
    pub summary: Arc<dyn SummaryService>,
}

impl AppContext {
    /// Build application context over the inventory document at `path`,
    /// creating the document when it does not exist yet.
    ///
    /// # Errors
    ///
    /// Returns an error when the document cannot be initialized.
    pub async fn from_data_file(path: impl Into<PathBuf>) -> Result<Self, AppInitError> {
        let store = Arc::new(Store::new(path));

        store.initialize().await.map_err(AppInitError::Store)?;

        Ok(Self::from_repository(InventoryRepository::new(store)))
    }

    #[must_use]
    pub fn from_repository(repository: InventoryRepository) -> Self {
        Self {
            products: Arc::new(DocumentProductsService::new(repository.clone())),
            categories: Arc::new(DocumentCategoriesService::new(repository.clone())),
            summary: Arc::new(DocumentSummaryService::new(repository)),
        }
    }
}
