//! Product Handlers

pub(crate) mod active;
pub(crate) mod by_category;
pub(crate) mod create;
pub(crate) mod delete;
pub(crate) mod get;
pub(crate) mod index;
pub(crate) mod low_stock;
pub(crate) mod update;
