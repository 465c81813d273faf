//! Catalog seeding from a JSON document.

use serde::Deserialize;
use thiserror::Error;
use tracing::info;

use kassa_catalog::Product;
use kassa_core::DomainError;

use crate::in_memory::InMemoryProductDao;

/// Seed document failure.
#[derive(Debug, Error)]
pub enum SeedError {
    /// The document is not valid JSON of the expected shape.
    #[error("malformed catalog document: {0}")]
    Malformed(#[from] serde_json::Error),

    /// A record failed domain validation.
    #[error("invalid catalog record: {0}")]
    InvalidRecord(#[source] DomainError),
}

#[derive(Debug, Deserialize)]
struct ProductRecord {
    name: String,
    count: i64,
}

/// Load a JSON catalog document into the dao.
///
/// The document is an array of `{ "name": ..., "count": ... }` records.
/// Returns how many products were added; the first invalid record fails
/// the seed (records before it are already inserted).
pub fn seed_from_json(dao: &InMemoryProductDao, json: &str) -> Result<usize, SeedError> {
    let records: Vec<ProductRecord> = serde_json::from_str(json)?;
    let total = records.len();
    for record in records {
        let product = Product::new(record.name, record.count).map_err(SeedError::InvalidRecord)?;
        dao.insert(product);
    }
    info!(products = total, "catalog seeded");
    Ok(total)
}
