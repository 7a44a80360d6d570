//! Delete Category Handler

use std::sync::Arc;

use salvo::{oapi::extract::PathParam, prelude::*};
use uuid::Uuid;

use crate::{categories::errors::into_status_error, extensions::*, state::State};

/// Delete Category Handler
///
/// Refused while any product still references the category.
#[endpoint(
    tags("categories"),
    summary = "Delete Category",
    responses(
        (status_code = StatusCode::NO_CONTENT, description = "Category deleted"),
        (status_code = StatusCode::NOT_FOUND, description = "Category not found"),
        (status_code = StatusCode::BAD_REQUEST, description = "Category in use or bad request"),
        (status_code = StatusCode::INTERNAL_SERVER_ERROR, description = "Internal Server Error"),
    ),
)]
pub(crate) async fn handler(
    id: PathParam<Uuid>,
    depot: &mut Depot,
) -> Result<StatusCode, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    state
        .app
        .categories
        .delete_category(id.into_inner().into())
        .await
        .map_err(into_status_error)?;

    Ok(StatusCode::NO_CONTENT)
}

#[cfg(test)]
mod tests {
    use salvo::test::TestClient;
    use testresult::TestResult;

    use inventory_app::domain::categories::{
        CategoriesServiceError, MockCategoriesService, records::CategoryUuid,
    };

    use crate::test_helpers::categories_service;

    use super::*;

    fn make_service(repo: MockCategoriesService) -> Service {
        categories_service(repo, Router::with_path("categories/{id}").delete(handler))
    }

    #[tokio::test]
    async fn test_delete_category_success() -> TestResult {
        let id = CategoryUuid::new();

        let mut repo = MockCategoriesService::new();

        repo.expect_delete_category()
            .once()
            .withf(move |c| *c == id)
            .return_once(|_| Ok(()));

        let res = TestClient::delete(format!("http://example.com/categories/{id}"))
            .send(&make_service(repo))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::NO_CONTENT));

        Ok(())
    }

    #[tokio::test]
    async fn test_delete_category_in_use_returns_400() -> TestResult {
        let id = CategoryUuid::new();

        let mut repo = MockCategoriesService::new();

        repo.expect_delete_category()
            .once()
            .withf(move |c| *c == id)
            .return_once(|_| Err(CategoriesServiceError::InUse { products: 1 }));

        let res = TestClient::delete(format!("http://example.com/categories/{id}"))
            .send(&make_service(repo))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::BAD_REQUEST));

        Ok(())
    }

    #[tokio::test]
    async fn test_delete_missing_category_returns_404() -> TestResult {
        let mut repo = MockCategoriesService::new();

        repo.expect_delete_category()
            .once()
            .return_once(|_| Err(CategoriesServiceError::NotFound));

        let res = TestClient::delete(format!("http://example.com/categories/{}", CategoryUuid::new()))
            .send(&make_service(repo))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::NOT_FOUND));

        Ok(())
    }
}
