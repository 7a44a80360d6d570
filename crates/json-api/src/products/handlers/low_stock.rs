//! Low Stock Products Handler

use std::sync::Arc;

use salvo::{oapi::extract::QueryParam, prelude::*};

use inventory_app::domain::products::DEFAULT_LOW_STOCK_THRESHOLD;

use crate::{
    extensions::*,
    products::{errors::into_status_error, get::ProductResponse},
    state::State,
};

/// Low Stock Products Handler
///
/// Returns products with fewer units in stock than `threshold`.
#[endpoint(
    tags("products"),
    summary = "List Low Stock Products",
    responses(
        (status_code = StatusCode::OK, description = "Low stock products"),
        (status_code = StatusCode::BAD_REQUEST, description = "Bad Request"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
pub(crate) async fn handler(
    threshold: QueryParam<u32, false>,
    depot: &mut Depot,
) -> Result<Json<Vec<ProductResponse>>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;
    let threshold = threshold
        .into_inner()
        .unwrap_or(DEFAULT_LOW_STOCK_THRESHOLD);

    let products = state
        .app
        .products
        .list_low_stock_products(threshold)
        .await
        .map_err(into_status_error)?;

    Ok(Json(products.into_iter().map(Into::into).collect()))
}
