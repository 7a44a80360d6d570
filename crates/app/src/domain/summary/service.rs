//! Summary service.

use async_trait::async_trait;
use mockall::automock;

use crate::{
    domain::summary::records::InventorySummary, repository::InventoryRepository, store::StoreError,
};

#[derive(Debug, Clone)]
pub struct DocumentSummaryService {
    repository: InventoryRepository,
}

impl DocumentSummaryService {
    #[must_use]
    pub fn new(repository: InventoryRepository) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl SummaryService for DocumentSummaryService {
    async fn summarize(&self, low_stock_threshold: u32) -> Result<InventorySummary, StoreError> {
        let document = self.repository.get_document().await?;

        Ok(InventorySummary {
            total_products: document.products.len(),
            total_categories: document.categories.len(),
            low_stock_products: document
                .products
                .iter()
                .filter(|p| p.stock_quantity < low_stock_threshold)
                .count(),
            active_products: document.products.iter().filter(|p| p.is_active).count(),
        })
    }
}

#[automock]
#[async_trait]
pub trait SummaryService: Send + Sync {
    /// Counts products, categories, low-stock and active products.
    async fn summarize(&self, low_stock_threshold: u32) -> Result<InventorySummary, StoreError>;
}

#[cfg(test)]
mod tests {
    use rust_decimal::Decimal;
    use testresult::TestResult;

    use crate::{
        domain::{
            categories::{CategoriesService, data::NewCategory},
            products::{DEFAULT_LOW_STOCK_THRESHOLD, ProductsService, data::NewProduct},
        },
        test::TestContext,
    };

    use super::*;

    #[tokio::test]
    async fn summarize_empty_inventory() -> TestResult {
        let ctx = TestContext::new().await?;

        let summary = ctx.summary.summarize(DEFAULT_LOW_STOCK_THRESHOLD).await?;

        assert_eq!(summary, InventorySummary::default());

        Ok(())
    }

    #[tokio::test]
    async fn summarize_counts_each_group() -> TestResult {
        let ctx = TestContext::new().await?;

        let category = ctx
            .categories
            .create_category(NewCategory {
                name: "Tools".to_string(),
            })
            .await?;

        for (name, stock_quantity, is_active) in
            [("Hammer", 3, true), ("Saw", 10, true), ("Drill", 0, false)]
        {
            ctx.products
                .create_product(NewProduct {
                    name: name.to_string(),
                    category_id: category.id,
                    price: Decimal::ONE,
                    stock_quantity,
                    is_active,
                    ..NewProduct::default()
                })
                .await?;
        }

        let summary = ctx.summary.summarize(DEFAULT_LOW_STOCK_THRESHOLD).await?;

        assert_eq!(
            summary,
            InventorySummary {
                total_products: 3,
                total_categories: 1,
                low_stock_products: 2,
                active_products: 2,
            }
        );

        Ok(())
    }
}
