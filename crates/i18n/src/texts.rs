//! Text bundles and the locale-keyed registry.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::locale::Locale;

/// Texts for the main page section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MainTexts {
    /// Heading label for the featured-products listing.
    pub products: String,
}

/// All localized strings for one locale.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextBundle {
    pub main: MainTexts,
}

impl TextBundle {
    pub fn new(products_heading: impl Into<String>) -> Self {
        Self {
            main: MainTexts {
                products: products_heading.into(),
            },
        }
    }
}

/// Registry mapping locale codes to text bundles.
///
/// Resolution is total: an unknown locale yields the fallback bundle, never
/// an error. The registry is constructed explicitly and passed to whoever
/// renders, so there is no hidden global text table.
#[derive(Debug, Clone)]
pub struct LocaleTexts {
    bundles: HashMap<Locale, TextBundle>,
    fallback: TextBundle,
}

impl LocaleTexts {
    /// Create a registry with only the fallback bundle registered.
    pub fn new(fallback: TextBundle) -> Self {
        Self {
            bundles: HashMap::new(),
            fallback,
        }
    }

    /// Register a bundle for a locale (builder-style).
    pub fn with_bundle(mut self, locale: Locale, bundle: TextBundle) -> Self {
        self.bundles.insert(locale, bundle);
        self
    }

    /// Resolve a locale to its bundle, falling back to the default bundle
    /// for unregistered codes.
    pub fn resolve(&self, locale: &Locale) -> &TextBundle {
        self.bundles.get(locale).unwrap_or(&self.fallback)
    }

    pub fn fallback(&self) -> &TextBundle {
        &self.fallback
    }

    /// The bundles shipped with the storefront: Spanish (the default),
    /// English, and Portuguese.
    pub fn shipped() -> Self {
        let spanish = TextBundle::new("Productos destacados");
        Self::new(spanish.clone())
            .with_bundle(Locale::from("es-ES"), spanish)
            .with_bundle(Locale::from("en-US"), TextBundle::new("Featured products"))
            .with_bundle(Locale::from("pt-BR"), TextBundle::new("Produtos em destaque"))
    }
}
