//! Fetcher trait and its HTTP / in-memory implementations.

use async_trait::async_trait;
use reqwest::StatusCode;

use tienda_catalog::{Catalog, ProductList};
use tienda_i18n::Locale;

use crate::error::FetchError;

/// Source of per-locale product lists.
///
/// `Ok(None)` means the upstream has no data for the locale at all (the
/// absent case the renderer turns into an empty page); `Ok(Some(list))`
/// preserves upstream order.
#[async_trait]
pub trait ProductFetcher: Send + Sync {
    async fn fetch_products(&self, locale: &Locale) -> Result<Option<ProductList>, FetchError>;
}

/// Fetches product lists from the product API over HTTP.
#[derive(Debug, Clone)]
pub struct HttpProductFetcher {
    client: reqwest::Client,
    base_url: String,
}

impl HttpProductFetcher {
    /// `base_url` is the API origin, e.g. `http://localhost:3000`; a
    /// trailing slash is tolerated.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    fn products_url(&self, locale: &Locale) -> String {
        format!("{}/api/products/{}", self.base_url, locale)
    }
}

#[async_trait]
impl ProductFetcher for HttpProductFetcher {
    async fn fetch_products(&self, locale: &Locale) -> Result<Option<ProductList>, FetchError> {
        let url = self.products_url(locale);
        tracing::debug!(%locale, %url, "fetching product list");

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(FetchError::Transport)?;

        // A 404 is "no list for this locale", not a failure.
        if response.status() == StatusCode::NOT_FOUND {
            tracing::debug!(%locale, "product API has no list for locale");
            return Ok(None);
        }

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status(status));
        }

        let list = response
            .json::<ProductList>()
            .await
            .map_err(FetchError::Decode)?;

        tracing::debug!(%locale, count = list.len(), "fetched product list");
        Ok(Some(list))
    }
}

/// Serves product lists straight from an in-memory catalog.
///
/// Used to wire the page endpoint to the local catalog without a network
/// hop, and as the fetcher of choice in tests.
#[derive(Debug, Clone)]
pub struct InMemoryProductFetcher {
    catalog: Catalog,
}

impl InMemoryProductFetcher {
    pub fn new(catalog: Catalog) -> Self {
        Self { catalog }
    }
}

#[async_trait]
impl ProductFetcher for InMemoryProductFetcher {
    async fn fetch_products(&self, locale: &Locale) -> Result<Option<ProductList>, FetchError> {
        Ok(Some(self.catalog.list_for(locale).to_vec()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn products_url_joins_base_and_locale() {
        let fetcher = HttpProductFetcher::new("http://localhost:3000");
        assert_eq!(
            fetcher.products_url(&Locale::from("es-ES")),
            "http://localhost:3000/api/products/es-ES"
        );
    }

    #[test]
    fn trailing_slash_in_base_url_is_tolerated() {
        let fetcher = HttpProductFetcher::new("http://localhost:3000/");
        assert_eq!(
            fetcher.products_url(&Locale::from("en-US")),
            "http://localhost:3000/api/products/en-US"
        );
    }

    #[tokio::test]
    async fn in_memory_fetcher_serves_the_catalog_list() {
        let fetcher = InMemoryProductFetcher::new(Catalog::shipped());
        let list = fetcher
            .fetch_products(&Locale::from("en-US"))
            .await
            .unwrap()
            .unwrap();
        assert_eq!(list[0].title, "Shirt");
    }

    #[tokio::test]
    async fn in_memory_fetcher_falls_back_for_unknown_locales() {
        let fetcher = InMemoryProductFetcher::new(Catalog::shipped());
        let list = fetcher
            .fetch_products(&Locale::from("de-DE"))
            .await
            .unwrap()
            .unwrap();
        assert_eq!(list[0].title, "Camiseta");
    }
}
