//! Product Records

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::{domain::categories::records::CategoryUuid, uuids::TypedUuid};

/// Product UUID
pub type ProductUuid = TypedUuid<ProductRecord>;

/// Product Record
///
/// This is the persisted shape of a product as well as its wire shape; the
/// container-level `camelCase` rule is the single field mapping between the
/// two.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductRecord {
    pub id: ProductUuid,
    pub name: String,
    pub code: String,
    pub category_id: CategoryUuid,
    #[serde(with = "rust_decimal::serde::arbitrary_precision")]
    pub price: Decimal,
    pub stock_quantity: u32,
    pub is_active: bool,
}
