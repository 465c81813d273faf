//! Shopping domain module.
//!
//! Per-customer carts and the checkout service that commits staged
//! quantities against shared inventory. The service itself is stateless;
//! product lookup and persistence go through the [`ProductDao`]
//! collaborator.

pub mod cart;
pub mod dao;
pub mod service;

pub use cart::{Cart, CartError, CartLine};
pub use dao::ProductDao;
pub use service::{BuyError, ShoppingService};
