//! Products Data

use rust_decimal::Decimal;

use crate::domain::categories::records::CategoryUuid;

/// New Product Data
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewProduct {
    pub name: String,
    pub code: String,
    pub category_id: CategoryUuid,
    pub price: Decimal,
    pub stock_quantity: u32,
    pub is_active: bool,
}

impl Default for NewProduct {
    /// Values a product takes when a field is left out on creation. Products
    /// start out active.
    fn default() -> Self {
        Self {
            name: String::new(),
            code: String::new(),
            category_id: CategoryUuid::nil(),
            price: Decimal::ZERO,
            stock_quantity: 0,
            is_active: true,
        }
    }
}

/// Product Update Data
///
/// Every mutable field is overwritten; the id never changes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductUpdate {
    pub name: String,
    pub code: String,
    pub category_id: CategoryUuid,
    pub price: Decimal,
    pub stock_quantity: u32,
    pub is_active: bool,
}
