//! Categories service errors.

use thiserror::Error;

use crate::store::StoreError;

#[derive(Debug, Error)]
pub enum CategoriesServiceError {
    #[error("category not found")]
    NotFound,

    #[error("missing required data")]
    MissingRequiredData,

    #[error("category is used by {products} product(s)")]
    InUse { products: usize },

    #[error("storage error")]
    Storage(#[from] StoreError),
}
