//! Categories

pub mod data;
pub mod errors;
pub mod records;
pub mod service;

pub use errors::CategoriesServiceError;
pub use service::*;
