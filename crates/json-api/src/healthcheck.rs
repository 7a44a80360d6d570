//! Healthcheck Handler

use std::sync::Arc;

use salvo::{oapi::ToSchema, prelude::*};
use serde::{Deserialize, Serialize};
use tracing::warn;

use inventory_app::domain::products::DEFAULT_LOW_STOCK_THRESHOLD;

use crate::{extensions::*, state::State};

/// Healthcheck response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct HealthResponse {
    /// `ok`, or `unavailable` when the inventory document cannot be read
    pub status: String,
}

/// Healthcheck handler
///
/// Reads the inventory document once, so a missing or corrupt file turns the
/// check red.
#[endpoint(
    tags("health"),
    summary = "Health check endpoint",
    responses(
        (status_code = StatusCode::OK, description = "Service healthy"),
        (status_code = StatusCode::SERVICE_UNAVAILABLE, description = "Inventory document unreadable"),
    ),
)]
pub(crate) async fn handler(
    depot: &mut Depot,
    res: &mut Response,
) -> Result<Json<HealthResponse>, StatusError> {
    let state = depot.obtain_or_500::<Arc<State>>()?;

    let status = match state.app.summary.summarize(DEFAULT_LOW_STOCK_THRESHOLD).await {
        Ok(_) => "ok",
        Err(error) => {
            warn!(error = ?error, "inventory document unreadable");

            res.status_code(StatusCode::SERVICE_UNAVAILABLE);

            "unavailable"
        }
    };

    Ok(Json(HealthResponse {
        status: status.to_string(),
    }))
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use salvo::test::{ResponseExt, TestClient};
    use testresult::TestResult;

    use inventory_app::{
        domain::summary::{MockSummaryService, records::InventorySummary},
        store::StoreError,
    };

    use crate::test_helpers::summary_service;

    use super::*;

    fn make_service(summary: MockSummaryService) -> Service {
        summary_service(summary, Router::with_path("healthcheck").get(handler))
    }

    #[tokio::test]
    async fn test_healthcheck() -> TestResult {
        let mut summary = MockSummaryService::new();

        summary
            .expect_summarize()
            .once()
            .return_once(|_| Ok(InventorySummary::default()));

        let mut res = TestClient::get("http://example.com/healthcheck")
            .send(&make_service(summary))
            .await;

        let response: HealthResponse = res.take_json().await?;

        assert_eq!(res.status_code, Some(StatusCode::OK));
        assert_eq!(response.status, "ok");

        Ok(())
    }

    #[tokio::test]
    async fn test_healthcheck_unreadable_document_returns_503() -> TestResult {
        let mut summary = MockSummaryService::new();

        let error = StoreError::Corrupt {
            path: PathBuf::from("inventory.json"),
            source: serde_json::from_str::<InventorySummary>("{")
                .err()
                .ok_or("truncated json parsed")?,
        };

        summary
            .expect_summarize()
            .once()
            .return_once(move |_| Err(error));

        let mut res = TestClient::get("http://example.com/healthcheck")
            .send(&make_service(summary))
            .await;

        let response: HealthResponse = res.take_json().await?;

        assert_eq!(res.status_code, Some(StatusCode::SERVICE_UNAVAILABLE));
        assert_eq!(response.status, "unavailable");

        Ok(())
    }
}
