//! Inventory Document

use serde::{Deserialize, Serialize};

use crate::domain::{categories::records::CategoryRecord, products::records::ProductRecord};

/// The single persisted aggregate holding every product and category.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Document {
    pub products: Vec<ProductRecord>,
    pub categories: Vec<CategoryRecord>,
}

impl Document {
    pub(crate) fn encode(&self) -> Result<Vec<u8>, serde_json::Error> {
        let mut bytes = serde_json::to_vec_pretty(self)?;

        bytes.push(b'\n');

        Ok(bytes)
    }

    pub(crate) fn decode(bytes: &[u8]) -> Result<Self, serde_json::Error> {
        serde_json::from_slice(bytes)
    }
}
