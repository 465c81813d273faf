use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use serde::{Deserialize, Serialize};

use kassa_core::{DomainError, DomainResult};

/// Mutable inventory record.
///
/// Identity is the product name, unique within the catalog. `count` is
/// the total quantity currently available for sale.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    name: String,
    count: i64,
}

impl Product {
    /// The name is the catalog identity; a blank one is rejected.
    pub fn new(name: impl Into<String>, count: i64) -> DomainResult<Self> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(DomainError::validation("name cannot be empty"));
        }
        Ok(Self { name, count })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn count(&self) -> i64 {
        self.count
    }

    /// Whether `quantity` units could be taken from the current stock.
    pub fn has_in_stock(&self, quantity: i64) -> bool {
        quantity <= self.count
    }

    /// Remove `quantity` units from stock.
    ///
    /// No lower bound is enforced here; checkout performs the stock check
    /// before deducting.
    pub fn deduct(&mut self, quantity: i64) {
        self.count -= quantity;
    }
}

/// Shared handle to a catalog product.
///
/// The wrapped lock is the per-product mutual-exclusion scope: checkout
/// holds the write guard across its check-deduct-persist sequence, so two
/// buyers of the same product serialize on it.
#[derive(Debug, Clone)]
pub struct ProductHandle {
    inner: Arc<RwLock<Product>>,
}

impl ProductHandle {
    pub fn new(product: Product) -> Self {
        Self {
            inner: Arc::new(RwLock::new(product)),
        }
    }

    pub fn name(&self) -> String {
        self.read().name().to_string()
    }

    pub fn count(&self) -> i64 {
        self.read().count()
    }

    /// Clone of the current record.
    pub fn snapshot(&self) -> Product {
        self.read().clone()
    }

    /// Shared read access. Poisoned locks are recovered; `count` updates
    /// are single assignments and cannot be observed half-done.
    pub fn read(&self) -> RwLockReadGuard<'_, Product> {
        self.inner.read().unwrap_or_else(PoisonError::into_inner)
    }

    /// Exclusive access for the checkout sequence.
    pub fn write(&self) -> RwLockWriteGuard<'_, Product> {
        self.inner.write().unwrap_or_else(PoisonError::into_inner)
    }

    /// Whether two handles point at the same live record.
    pub fn same_record(&self, other: &ProductHandle) -> bool {
        Arc::ptr_eq(&self.inner, &other.inner)
    }
}
