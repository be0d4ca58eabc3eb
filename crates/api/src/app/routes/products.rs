use std::sync::Arc;

use axum::{
    Json, Router,
    extract::{Extension, Path},
    http::StatusCode,
    response::IntoResponse,
    routing::get,
};

use tienda_i18n::Locale;

use crate::app::services::AppServices;

pub fn router() -> Router {
    Router::new().route("/:locale", get(list_products))
}

/// `GET /api/products/:locale` — the localized product list as a JSON
/// array, in display order. Unknown locales serve the default list.
pub async fn list_products(
    Extension(services): Extension<Arc<AppServices>>,
    Path(locale): Path<String>,
) -> axum::response::Response {
    let locale = Locale::from(locale);
    let items = services.products_for(&locale).to_vec();
    (StatusCode::OK, Json(items)).into_response()
}
