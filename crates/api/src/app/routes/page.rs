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
    Router::new().route("/:locale", get(get_page))
}

/// `GET /page/:locale` — fetch the locale's products, resolve its texts,
/// and return the rendered page descriptor. Absent data renders as the
/// empty page, so this endpoint always answers 200.
pub async fn get_page(
    Extension(services): Extension<Arc<AppServices>>,
    Path(locale): Path<String>,
) -> axum::response::Response {
    let locale = Locale::from(locale);
    let page = services.page_for(&locale).await;
    (StatusCode::OK, Json(page)).into_response()
}
