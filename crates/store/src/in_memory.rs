use std::collections::HashMap;
use std::sync::RwLock;

use kassa_catalog::{Product, ProductHandle};
use kassa_shopping::ProductDao;

/// In-memory product collaborator.
///
/// Intended for tests/dev. Not optimized for performance. Live handles
/// are the shared inventory; saved snapshots model the persisted
/// representation, kept separately so `save` never touches a product's
/// own lock.
#[derive(Debug, Default)]
pub struct InMemoryProductDao {
    live: RwLock<HashMap<String, ProductHandle>>,
    persisted: RwLock<HashMap<String, Product>>,
    saves: RwLock<usize>,
}

impl InMemoryProductDao {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a product as live inventory and record its initial
    /// persisted snapshot. Returns the shared handle.
    pub fn insert(&self, product: Product) -> ProductHandle {
        let name = product.name().to_string();
        let handle = ProductHandle::new(product.clone());
        if let Ok(mut live) = self.live.write() {
            live.insert(name.clone(), handle.clone());
        }
        if let Ok(mut persisted) = self.persisted.write() {
            persisted.insert(name, product);
        }
        handle
    }

    /// Last persisted snapshot for `name`.
    pub fn persisted(&self, name: &str) -> Option<Product> {
        let map = self.persisted.read().ok()?;
        map.get(name).cloned()
    }

    /// Number of `save` calls observed.
    pub fn save_count(&self) -> usize {
        self.saves.read().map(|n| *n).unwrap_or(0)
    }
}

impl ProductDao for InMemoryProductDao {
    fn get_all(&self) -> Vec<ProductHandle> {
        match self.live.read() {
            Ok(map) => map.values().cloned().collect(),
            Err(_) => vec![],
        }
    }

    fn get_by_name(&self, name: &str) -> Option<ProductHandle> {
        let map = self.live.read().ok()?;
        map.get(name).cloned()
    }

    fn save(&self, product: &Product) {
        if let Ok(mut persisted) = self.persisted.write() {
            persisted.insert(product.name().to_string(), product.clone());
        }
        if let Ok(mut saves) = self.saves.write() {
            *saves += 1;
        }
    }
}
