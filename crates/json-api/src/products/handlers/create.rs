//! Create Product Handler

use std::sync::Arc;

use rust_decimal::Decimal;
use salvo::{
    http::header::LOCATION,
    oapi::{ToSchema, extract::JsonBody},
    prelude::*,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use inventory_app::domain::products::data::{NewProduct, ProductUpdate};

use crate::{
    extensions::*,
    products::{errors::into_status_error, get::ProductResponse},
    state::State,
};

/// Product Request
///
/// Body of both create and update. Any `id` sent by the client is ignored.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub(crate) struct ProductRequest {
    #[serde(default)]
    pub name: String,

    #[serde(default)]
    pub code: String,

    #[serde(default)]
    pub category_id: Uuid,

    #[serde(default, with = "rust_decimal::serde::arbitrary_precision")]
    #[salvo(schema(value_type = f64))]
    pub price: Decimal,

    #[serde(default)]
    pub stock_quantity: u32,

    #[serde(default = "active_by_default")]
    pub is_active: bool,
}

fn active_by_default() -> bool {
    true
}

impl From<ProductRequest> for NewProduct {
    fn from(request: ProductRequest) -> Self {
        NewProduct {
            name: request.name,
            code: request.code,
            category_id: request.category_id.into(),
            price: request.price,
            stock_quantity: request.stock_quantity,
            is_active: request.is_active,
        }
    }
}

impl From<ProductRequest> for ProductUpdate {
    fn from(request: ProductRequest) -> Self {
        ProductUpdate {
            name: request.name,
            code: request.code,
            category_id: request.category_id.into(),
            price: request.price,
            stock_quantity: request.stock_quantity,
            is_active: request.is_active,
        }
    }
}

/// Create Product Handler
#[endpoint(
    tags("products"),
    summary = "Create Product",
    responses(
        (status_code = StatusCode::CREATED, description = "Product created"),
        (status_code = StatusCode::BAD_REQUEST, description = "Bad Request"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
pub(crate) async fn handler(
    json: JsonBody<ProductRequest>,
    depot: &mut Depot,
    res: &mut Response,
) -> Result<Json<ProductResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let product = state
        .app
        .products
        .create_product(json.into_inner().into())
        .await
        .map_err(into_status_error)?;

    res.add_header(LOCATION, format!("/api/products/{}", product.id), true)
        .or_500("failed to set location header")?
        .status_code(StatusCode::CREATED);

    Ok(Json(product.into()))
}

#[cfg(test)]
mod tests {
    use salvo::test::{ResponseExt, TestClient};
    use serde_json::json;
    use testresult::TestResult;

    use inventory_app::domain::{
        categories::records::CategoryUuid,
        products::{MockProductsService, ProductsServiceError, records::ProductUuid},
    };

    use crate::test_helpers::{make_product, products_service};

    use super::*;

    fn make_service(repo: MockProductsService) -> Service {
        products_service(repo, Router::with_path("products").post(handler))
    }

    #[tokio::test]
    async fn test_create_product_success() -> TestResult {
        let id = ProductUuid::new();
        let category = CategoryUuid::new();

        let mut product = make_product(id);

        product.category_id = category;

        let mut repo = MockProductsService::new();

        repo.expect_create_product()
            .once()
            .withf(move |new| {
                *new == NewProduct {
                    name: "Hammer".to_string(),
                    code: "H1".to_string(),
                    category_id: category,
                    price: Decimal::new(999, 2),
                    stock_quantity: 3,
                    is_active: true,
                }
            })
            .return_once(move |_| Ok(product));

        repo.expect_update_product().never();
        repo.expect_delete_product().never();

        let mut res = TestClient::post("http://example.com/products")
            .json(&json!({
                "name": "Hammer",
                "code": "H1",
                "categoryId": category.into_uuid(),
                "price": 9.99,
                "stockQuantity": 3,
                "isActive": true,
            }))
            .send(&make_service(repo))
            .await;

        let body: ProductResponse = res.take_json().await?;
        let location = res.headers().get("location").and_then(|v| v.to_str().ok());

        assert_eq!(res.status_code, Some(StatusCode::CREATED));
        assert_eq!(location, Some(format!("/api/products/{id}").as_str()));
        assert_eq!(body.id, id.into_uuid());

        Ok(())
    }

    #[tokio::test]
    async fn test_create_product_applies_defaults_and_ignores_client_id() -> TestResult {
        let id = ProductUuid::new();
        let product = make_product(id);

        let mut repo = MockProductsService::new();

        repo.expect_create_product()
            .once()
            .withf(|new| {
                *new == NewProduct {
                    name: "Saw".to_string(),
                    ..NewProduct::default()
                }
            })
            .return_once(move |_| Ok(product));

        let res = TestClient::post("http://example.com/products")
            .json(&json!({ "id": Uuid::now_v7(), "name": "Saw" }))
            .send(&make_service(repo))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::CREATED));

        Ok(())
    }

    #[tokio::test]
    async fn test_create_product_missing_name_returns_400() -> TestResult {
        let mut repo = MockProductsService::new();

        repo.expect_create_product()
            .once()
            .return_once(|_| Err(ProductsServiceError::MissingRequiredData));

        let res = TestClient::post("http://example.com/products")
            .json(&json!({ "name": "  ", "price": 1.5 }))
            .send(&make_service(repo))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::BAD_REQUEST));

        Ok(())
    }

    #[tokio::test]
    async fn test_create_product_negative_stock_is_rejected_before_service() -> TestResult {
        let mut repo = MockProductsService::new();

        repo.expect_create_product().never();

        let res = TestClient::post("http://example.com/products")
            .json(&json!({ "name": "Saw", "stockQuantity": -2 }))
            .send(&make_service(repo))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::BAD_REQUEST));

        Ok(())
    }
}
