//! Summary Records

use serde::{Deserialize, Serialize};

/// Headline counts over one snapshot of the inventory document.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InventorySummary {
    pub total_products: usize,
    pub total_categories: usize,
    pub low_stock_products: usize,
    pub active_products: usize,
}
