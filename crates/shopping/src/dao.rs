//! Product lookup/persistence collaborator boundary.

use std::sync::Arc;

use kassa_catalog::{Product, ProductHandle};

/// Data-access collaborator consumed by the shopping service.
///
/// Lookup hands out shared handles to live inventory; `save` persists an
/// updated record after checkout deducts from it.
pub trait ProductDao: Send + Sync {
    /// All live catalog products.
    fn get_all(&self) -> Vec<ProductHandle>;

    /// Look a product up by its catalog name.
    fn get_by_name(&self, name: &str) -> Option<ProductHandle>;

    /// Persist an updated product record.
    ///
    /// Called with the product's own lock held; implementations must not
    /// take that lock again.
    fn save(&self, product: &Product);
}

impl<D> ProductDao for Arc<D>
where
    D: ProductDao + ?Sized,
{
    fn get_all(&self) -> Vec<ProductHandle> {
        (**self).get_all()
    }

    fn get_by_name(&self, name: &str) -> Option<ProductHandle> {
        (**self).get_by_name(name)
    }

    fn save(&self, product: &Product) {
        (**self).save(product)
    }
}
