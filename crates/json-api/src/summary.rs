//! Inventory Summary Handler

use std::sync::Arc;

use salvo::{
    oapi::{ToSchema, extract::QueryParam},
    prelude::*,
};
use serde::{Deserialize, Serialize};
use tracing::error;

use inventory_app::domain::{
    products::DEFAULT_LOW_STOCK_THRESHOLD, summary::records::InventorySummary,
};

use crate::{extensions::*, observability::record_storage_error, state::State};

/// Inventory summary response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub(crate) struct SummaryResponse {
    /// Number of products
    pub total_products: usize,

    /// Number of categories
    pub total_categories: usize,

    /// Products with fewer units in stock than the threshold
    pub low_stock_products: usize,

    /// Products currently marked active
    pub active_products: usize,
}

impl From<InventorySummary> for SummaryResponse {
    fn from(summary: InventorySummary) -> Self {
        SummaryResponse {
            total_products: summary.total_products,
            total_categories: summary.total_categories,
            low_stock_products: summary.low_stock_products,
            active_products: summary.active_products,
        }
    }
}

/// Inventory Summary Handler
#[endpoint(tags("summary"), summary = "Inventory Summary")]
pub(crate) async fn handler(
    threshold: QueryParam<u32, false>,
    depot: &mut Depot,
) -> Result<Json<SummaryResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let summary = state
        .app
        .summary
        .summarize(threshold.into_inner().unwrap_or(DEFAULT_LOW_STOCK_THRESHOLD))
        .await
        .map_err(|source| {
            record_storage_error("summary");

            error!(error = ?source, "failed to summarize inventory");

            StatusError::internal_server_error()
        })?;

    Ok(Json(summary.into()))
}

#[cfg(test)]
mod tests {
    use salvo::test::{ResponseExt, TestClient};
    use testresult::TestResult;

    use inventory_app::domain::summary::MockSummaryService;

    use crate::test_helpers::summary_service;

    use super::*;

    fn make_service(repo: MockSummaryService) -> Service {
        summary_service(repo, Router::with_path("summary").get(handler))
    }

    #[tokio::test]
    async fn test_summary_returns_counts() -> TestResult {
        let mut repo = MockSummaryService::new();

        repo.expect_summarize()
            .once()
            .withf(|threshold| *threshold == DEFAULT_LOW_STOCK_THRESHOLD)
            .return_once(|_| {
                Ok(InventorySummary {
                    total_products: 4,
                    total_categories: 2,
                    low_stock_products: 1,
                    active_products: 3,
                })
            });

        let mut res = TestClient::get("http://example.com/summary")
            .send(&make_service(repo))
            .await;

        let body: serde_json::Value = res.take_json().await?;

        assert_eq!(res.status_code, Some(StatusCode::OK));
        assert_eq!(body["totalProducts"], 4);
        assert_eq!(body["totalCategories"], 2);
        assert_eq!(body["lowStockProducts"], 1);
        assert_eq!(body["activeProducts"], 3);

        Ok(())
    }

    #[tokio::test]
    async fn test_summary_forwards_threshold() -> TestResult {
        let mut repo = MockSummaryService::new();

        repo.expect_summarize()
            .once()
            .withf(|threshold| *threshold == 10)
            .return_once(|_| Ok(InventorySummary::default()));

        let res = TestClient::get("http://example.com/summary?threshold=10")
            .send(&make_service(repo))
            .await;

        assert_eq!(res.status_code, Some(StatusCode::OK));

        Ok(())
    }
}
