//! Product-list fetching.
//!
//! The rendering pipeline consumes products through the [`ProductFetcher`]
//! seam: an HTTP implementation talks to the product API, and an in-memory
//! implementation serves wiring and tests. A fetch resolves to the list,
//! to "absent" (the upstream has nothing for the locale), or to an error
//! the caller decides what to do with.

pub mod error;
pub mod fetcher;

pub use error::FetchError;
pub use fetcher::{HttpProductFetcher, InMemoryProductFetcher, ProductFetcher};
