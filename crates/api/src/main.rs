use std::sync::Arc;

use tienda_api::app::services::AppServices;
use tienda_fetch::HttpProductFetcher;

#[tokio::main]
async fn main() {
    tienda_observability::init();

    let services = match std::env::var("PRODUCTS_API_URL") {
        Ok(base_url) => AppServices::shipped(Arc::new(HttpProductFetcher::new(base_url))),
        Err(_) => {
            tracing::warn!("PRODUCTS_API_URL not set; serving pages from the local catalog");
            AppServices::in_memory()
        }
    };

    let app = tienda_api::app::build_app(Arc::new(services));

    let listener = tokio::net::TcpListener::bind("0.0.0.0:3000")
        .await
        .expect("failed to bind 0.0.0.0:3000");

    tracing::info!("listening on {}", listener.local_addr().unwrap());

    axum::serve(listener, app).await.unwrap();
}
