//! Category Errors

use salvo::http::StatusError;
use tracing::{error, info};

use inventory_app::domain::categories::CategoriesServiceError;

use crate::observability::record_storage_error;

pub(crate) fn into_status_error(error: CategoriesServiceError) -> StatusError {
    match error {
        CategoriesServiceError::MissingRequiredData => {
            StatusError::bad_request().brief("Category name is required")
        }
        CategoriesServiceError::InUse { products } => {
            info!(products, "refused to delete category in use");

            StatusError::bad_request().brief("Cannot delete: products use this category.")
        }
        CategoriesServiceError::NotFound => StatusError::not_found().brief("Category not found"),
        CategoriesServiceError::Storage(source) => {
            record_storage_error("categories");

            error!(error = ?source, "failed to access category storage");

            StatusError::internal_server_error()
        }
    }
}
