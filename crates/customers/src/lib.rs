//! Customers domain module.
//!
//! Identity records for shoppers; no IO, no storage. A customer here is
//! only ever a cart owner.

pub mod customer;

pub use customer::{Customer, CustomerId};
