pub mod page;
pub mod products;
