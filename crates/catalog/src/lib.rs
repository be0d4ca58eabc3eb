//! Product catalog domain module.
//!
//! This crate contains the product model the listing page is built from and
//! the seeded in-memory catalog that backs the product API. Pure data: no
//! IO, no HTTP, no storage.

pub mod catalog;
pub mod product;

pub use catalog::Catalog;
pub use product::{Product, ProductList};
