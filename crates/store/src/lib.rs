//! In-memory product store.
//!
//! The tests/dev implementation of the shopping layer's [`ProductDao`]
//! collaborator, plus JSON catalog seeding.
//!
//! [`ProductDao`]: kassa_shopping::ProductDao

pub mod in_memory;
pub mod seed;

pub use in_memory::InMemoryProductDao;
pub use seed::{SeedError, seed_from_json};
