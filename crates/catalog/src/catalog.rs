//! In-memory per-locale catalog backing the product API.

use std::collections::HashMap;

use tienda_i18n::Locale;

use crate::product::{Product, ProductList};

/// Locale-keyed product lists with a fallback list for unknown locales.
///
/// Mirrors the text-bundle registry: lookup is exact-match and total, and
/// the catalog is an explicit value handed to the API layer rather than a
/// module-level table.
#[derive(Debug, Clone)]
pub struct Catalog {
    lists: HashMap<Locale, ProductList>,
    fallback: ProductList,
}

impl Catalog {
    pub fn new(fallback: ProductList) -> Self {
        Self {
            lists: HashMap::new(),
            fallback,
        }
    }

    pub fn with_list(mut self, locale: Locale, list: ProductList) -> Self {
        self.lists.insert(locale, list);
        self
    }

    /// The product list for a locale, in display order. Unknown locales get
    /// the fallback list.
    pub fn list_for(&self, locale: &Locale) -> &[Product] {
        self.lists.get(locale).unwrap_or(&self.fallback)
    }

    /// The catalog shipped with the storefront: the same four products with
    /// localized titles and descriptions for Spanish (fallback), English,
    /// and Portuguese.
    pub fn shipped() -> Self {
        let spanish = vec![
            product(1, "Camiseta", "Camiseta de algodón con logo bordado.", 3.0, "/shirt.png", Some(15000.0)),
            product(2, "Zapatillas", "Zapatillas urbanas de suela alta.", 4.0, "/sneakers.png", Some(42500.0)),
            product(3, "Mochila", "Mochila impermeable de 20 litros.", 5.0, "/backpack.png", Some(27999.0)),
            product(4, "Gorra", "Gorra ajustable de visera plana.", 2.0, "/cap.png", Some(6900.0)),
        ];
        let english = vec![
            product(1, "Shirt", "Cotton shirt with embroidered logo.", 3.0, "/shirt.png", Some(15000.0)),
            product(2, "Sneakers", "High-sole urban sneakers.", 4.0, "/sneakers.png", Some(42500.0)),
            product(3, "Backpack", "Waterproof 20-liter backpack.", 5.0, "/backpack.png", Some(27999.0)),
            product(4, "Cap", "Flat-brim adjustable cap.", 2.0, "/cap.png", Some(6900.0)),
        ];
        let portuguese = vec![
            product(1, "Camiseta", "Camiseta de algodão com logo bordado.", 3.0, "/shirt.png", Some(15000.0)),
            product(2, "Tênis", "Tênis urbano de sola alta.", 4.0, "/sneakers.png", Some(42500.0)),
            product(3, "Mochila", "Mochila impermeável de 20 litros.", 5.0, "/backpack.png", Some(27999.0)),
            product(4, "Boné", "Boné ajustável de aba reta.", 2.0, "/cap.png", Some(6900.0)),
        ];

        Self::new(spanish.clone())
            .with_list(Locale::from("es-ES"), spanish)
            .with_list(Locale::from("en-US"), english)
            .with_list(Locale::from("pt-BR"), portuguese)
    }
}

fn product(
    id: u64,
    title: &str,
    description: &str,
    rating: f64,
    image: &str,
    price: Option<f64>,
) -> Product {
    Product {
        id,
        title: title.to_string(),
        description: description.to_string(),
        rating,
        image: image.to_string(),
        price,
    }
}
