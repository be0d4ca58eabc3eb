use std::sync::Arc;

use tienda_catalog::{Catalog, Product};
use tienda_fetch::{InMemoryProductFetcher, ProductFetcher};
use tienda_i18n::{Locale, LocaleTexts};
use tienda_render::{Page, render_page};

/// Application state shared by the handlers: the catalog backing the
/// product API, the text bundles, and the fetcher the page endpoint pulls
/// products through.
pub struct AppServices {
    catalog: Catalog,
    texts: LocaleTexts,
    fetcher: Arc<dyn ProductFetcher>,
}

impl AppServices {
    pub fn new(catalog: Catalog, texts: LocaleTexts, fetcher: Arc<dyn ProductFetcher>) -> Self {
        Self {
            catalog,
            texts,
            fetcher,
        }
    }

    /// Shipped catalog and texts with a caller-provided fetcher (the page
    /// endpoint then renders whatever that fetcher returns).
    pub fn shipped(fetcher: Arc<dyn ProductFetcher>) -> Self {
        Self::new(Catalog::shipped(), LocaleTexts::shipped(), fetcher)
    }

    /// Fully self-contained wiring: the page endpoint reads the same
    /// in-memory catalog the product API serves. Dev/test default.
    pub fn in_memory() -> Self {
        Self::shipped(Arc::new(InMemoryProductFetcher::new(Catalog::shipped())))
    }

    /// Localized product list for the API surface, fallback for unknown
    /// locales.
    pub fn products_for(&self, locale: &Locale) -> &[Product] {
        self.catalog.list_for(locale)
    }

    /// Fetch and render the listing page for a locale.
    ///
    /// A fetch failure is logged and collapsed into the absent-data branch:
    /// the viewer gets an empty page, never an error payload. The render
    /// itself is synchronous once the fetch resolves.
    pub async fn page_for(&self, locale: &Locale) -> Page {
        let products = match self.fetcher.fetch_products(locale).await {
            Ok(list) => list,
            Err(err) => {
                tracing::warn!(%locale, error = %err, "product fetch failed; rendering empty page");
                None
            }
        };

        render_page(products.as_deref(), self.texts.resolve(locale))
    }
}
