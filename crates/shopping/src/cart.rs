use std::collections::HashMap;

use thiserror::Error;

use kassa_catalog::ProductHandle;
use kassa_customers::Customer;

/// Staging-time failure: the requested quantity cannot be reserved.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CartError {
    #[error("Невозможно добавить товар {name} в корзину, т.к. нет необходимого количества товаров")]
    NotEnoughStock { name: String },
}

/// A staged cart line: the product plus the quantity reserved so far.
#[derive(Debug, Clone)]
pub struct CartLine {
    product: ProductHandle,
    quantity: i64,
}

impl CartLine {
    pub fn product(&self) -> &ProductHandle {
        &self.product
    }

    pub fn quantity(&self) -> i64 {
        self.quantity
    }
}

/// Per-customer staging area for product quantities prior to checkout.
///
/// Owned by exactly one customer, set at construction. Mutable until a
/// buy succeeds, at which point the service clears it; a failed or empty
/// buy leaves it untouched.
#[derive(Debug, Clone)]
pub struct Cart {
    customer: Customer,
    lines: HashMap<String, CartLine>,
}

impl Cart {
    pub fn new(customer: Customer) -> Self {
        Self {
            customer,
            lines: HashMap::new(),
        }
    }

    pub fn customer(&self) -> &Customer {
        &self.customer
    }

    /// Staged lines, keyed by product name.
    pub fn lines(&self) -> &HashMap<String, CartLine> {
        &self.lines
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Stage `quantity` units of `product`.
    ///
    /// The staged total for this product in this cart must fit in the
    /// live stock at call time; a rejected add leaves the cart untouched.
    /// Quantities staged by other carts are not counted, and stock
    /// consumed after staging is only caught at checkout. Zero and
    /// negative quantities pass the check; they surface at buy time as
    /// no-op sales.
    pub fn add(&mut self, product: &ProductHandle, quantity: i64) -> Result<(), CartError> {
        let name = product.name();
        let staged = self.lines.get(&name).map(|line| line.quantity).unwrap_or(0);
        if !product.read().has_in_stock(staged + quantity) {
            return Err(CartError::NotEnoughStock { name });
        }

        self.lines
            .entry(name)
            .and_modify(|line| line.quantity += quantity)
            .or_insert_with(|| CartLine {
                product: product.clone(),
                quantity,
            });
        Ok(())
    }

    /// Whether any staged line carries positive demand.
    pub(crate) fn has_positive_demand(&self) -> bool {
        self.lines.values().any(|line| line.quantity > 0)
    }

    /// Invoked only by a successful buy.
    pub(crate) fn clear(&mut self) {
        self.lines.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use kassa_catalog::Product;
    use kassa_customers::CustomerId;

    fn test_customer() -> Customer {
        Customer::new(CustomerId::new(123), "11-22-33-44")
    }

    fn test_product(count: i64) -> ProductHandle {
        ProductHandle::new(Product::new("Продукт", count).unwrap())
    }

    #[test]
    fn add_stages_the_requested_quantity() {
        let product = test_product(10);
        let mut cart = Cart::new(test_customer());

        cart.add(&product, 2).unwrap();

        let line = &cart.lines()["Продукт"];
        assert_eq!(line.quantity(), 2);
        assert!(line.product().same_record(&product));
    }

    #[test]
    fn add_accumulates_across_calls() {
        let product = test_product(10);
        let mut cart = Cart::new(test_customer());

        cart.add(&product, 2).unwrap();
        cart.add(&product, 3).unwrap();

        assert_eq!(cart.lines()["Продукт"].quantity(), 5);
        assert_eq!(cart.lines().len(), 1);
    }

    #[test]
    fn add_rejects_quantity_over_live_stock() {
        let product = test_product(10);
        let mut cart = Cart::new(test_customer());

        let err = cart.add(&product, 11).unwrap_err();

        assert_eq!(
            err.to_string(),
            "Невозможно добавить товар Продукт в корзину, т.к. нет необходимого количества товаров"
        );
        assert!(cart.is_empty());
    }

    #[test]
    fn add_rejects_overstaging_the_same_cart() {
        let product = test_product(10);
        let mut cart = Cart::new(test_customer());

        cart.add(&product, 10).unwrap();
        let err = cart.add(&product, 1).unwrap_err();

        assert_eq!(
            err,
            CartError::NotEnoughStock {
                name: "Продукт".to_string()
            }
        );
        // The rejected add must not touch the staged line.
        assert_eq!(cart.lines()["Продукт"].quantity(), 10);
    }

    #[test]
    fn two_carts_stage_independently_against_live_stock() {
        let product = test_product(10);
        let mut first = Cart::new(test_customer());
        let mut second = Cart::new(Customer::new(CustomerId::new(456), "55-66-77-88"));

        first.add(&product, 6).unwrap();
        second.add(&product, 5).unwrap();

        assert_eq!(first.lines()["Продукт"].quantity(), 6);
        assert_eq!(second.lines()["Продукт"].quantity(), 5);
    }

    #[test]
    fn add_permits_zero_and_negative_quantities() {
        let product = test_product(10);
        let mut cart = Cart::new(test_customer());

        cart.add(&product, 0).unwrap();
        cart.add(&product, -5).unwrap();

        assert_eq!(cart.lines()["Продукт"].quantity(), -5);
    }

    #[test]
    fn cart_belongs_to_its_customer() {
        let cart = Cart::new(test_customer());
        assert_eq!(cart.customer().id(), CustomerId::new(123));
        assert!(cart.is_empty());
    }

    #[cfg(test)]
    mod proptest_tests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            /// Property: a second add succeeds exactly when the cumulative
            /// staged quantity still fits in the live stock.
            #[test]
            fn staging_respects_cumulative_stock(
                count in 1i64..1_000,
                first in 1i64..1_000,
                second in 1i64..1_000
            ) {
                let product = test_product(count);
                let mut cart = Cart::new(test_customer());

                if first > count {
                    prop_assert!(cart.add(&product, first).is_err());
                    prop_assert!(cart.is_empty());
                    return Ok(());
                }

                cart.add(&product, first).unwrap();
                let result = cart.add(&product, second);
                if first + second <= count {
                    prop_assert!(result.is_ok());
                    prop_assert_eq!(cart.lines()["Продукт"].quantity(), first + second);
                } else {
                    prop_assert!(result.is_err());
                    prop_assert_eq!(cart.lines()["Продукт"].quantity(), first);
                }
            }
        }
    }
}
