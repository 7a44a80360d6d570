//! Inventory persistence, repository and domain services.

pub mod context;
pub mod domain;
pub mod repository;
pub mod store;

#[cfg(test)]
mod test;

mod uuids;
