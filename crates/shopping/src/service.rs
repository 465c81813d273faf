use thiserror::Error;
use tracing::{debug, warn};

use kassa_catalog::ProductHandle;
use kassa_customers::Customer;

use crate::cart::Cart;
use crate::dao::ProductDao;

/// Checkout-time failure: inventory ran out between staging and buying.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum BuyError {
    #[error("В наличии нет необходимого количества товара '{name}'")]
    OutOfStock { name: String },
}

/// Stateless checkout orchestrator over a product collaborator.
#[derive(Debug)]
pub struct ShoppingService<D> {
    dao: D,
}

impl<D: ProductDao> ShoppingService<D> {
    pub fn new(dao: D) -> Self {
        Self { dao }
    }

    /// A cart for `customer`.
    ///
    /// Always a fresh, empty cart; carts are not retained between calls.
    pub fn get_cart(&self, customer: &Customer) -> Cart {
        Cart::new(customer.clone())
    }

    /// Pass-through to the collaborator's list-all.
    pub fn get_all_products(&self) -> Vec<ProductHandle> {
        self.dao.get_all()
    }

    /// Pass-through to the collaborator's lookup-by-name.
    pub fn get_product_by_name(&self, name: &str) -> Option<ProductHandle> {
        self.dao.get_by_name(name)
    }

    /// Commit the cart's staged quantities against shared inventory.
    ///
    /// Returns `Ok(false)` without touching anything when no staged line
    /// carries positive demand. Otherwise each positive line is checked,
    /// deducted and persisted under that product's write lock, one
    /// product at a time; lines already committed stay committed if a
    /// later line fails. On full success the cart is cleared.
    pub fn buy(&self, cart: &mut Cart) -> Result<bool, BuyError> {
        if !cart.has_positive_demand() {
            return Ok(false);
        }

        for line in cart.lines().values() {
            let quantity = line.quantity();
            if quantity <= 0 {
                // A no-op sale; nothing to deduct or persist.
                continue;
            }

            let mut product = line.product().write();
            if !product.has_in_stock(quantity) {
                warn!(
                    product = product.name(),
                    requested = quantity,
                    available = product.count(),
                    "insufficient stock at checkout"
                );
                return Err(BuyError::OutOfStock {
                    name: product.name().to_string(),
                });
            }

            product.deduct(quantity);
            self.dao.save(&product);
            debug!(
                product = product.name(),
                quantity,
                remaining = product.count(),
                "cart line committed"
            );
        }

        cart.clear();
        Ok(true)
    }
}
