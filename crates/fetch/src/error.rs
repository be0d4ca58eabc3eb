//! Fetch error model.

use thiserror::Error;

/// Failure while fetching a product list from the product API.
///
/// None of these reach the rendering pipeline; callers either surface them
/// or collapse them into the absent-data path.
#[derive(Debug, Error)]
pub enum FetchError {
    /// Transport-level failure reaching the product API.
    #[error("product API unreachable: {0}")]
    Transport(#[source] reqwest::Error),

    /// The product API answered with a non-success status.
    #[error("product API returned status {0}")]
    Status(reqwest::StatusCode),

    /// The response body was not a valid product list.
    #[error("malformed product payload: {0}")]
    Decode(#[source] reqwest::Error),
}
