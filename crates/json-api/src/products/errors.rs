//! Product Errors

use salvo::http::StatusError;
use tracing::error;

use inventory_app::domain::products::ProductsServiceError;

use crate::observability::record_storage_error;

pub(crate) fn into_status_error(error: ProductsServiceError) -> StatusError {
    match error {
        ProductsServiceError::MissingRequiredData => {
            StatusError::bad_request().brief("Product name is required")
        }
        ProductsServiceError::InvalidPrice => {
            StatusError::bad_request().brief("Product price cannot be negative")
        }
        ProductsServiceError::NotFound => StatusError::not_found().brief("Product not found"),
        ProductsServiceError::Storage(source) => {
            record_storage_error("products");

            error!(error = ?source, "failed to access product storage");

            StatusError::internal_server_error()
        }
    }
}
