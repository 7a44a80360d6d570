//! Inventory Domain Concerns

pub mod categories;
pub mod products;
pub mod summary;

/// Names are required and must contain something other than whitespace.
pub(crate) fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}
