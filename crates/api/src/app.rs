use std::sync::Arc;

use axum::{Router, extract::Extension};
use tower::ServiceBuilder;

use crate::app::services::AppServices;

pub mod errors;
pub mod routes;
pub mod services;

/// Build the storefront router.
///
/// Two surfaces: the product API (`/api/products/:locale`) serving the
/// localized catalog, and the page endpoint (`/page/:locale`) serving the
/// rendered page descriptor.
pub fn build_app(services: Arc<AppServices>) -> Router {
    Router::new()
        .nest("/api/products", routes::products::router())
        .nest("/page", routes::page::router())
        .fallback(errors::not_found)
        .layer(ServiceBuilder::new().layer(Extension(services)))
}
