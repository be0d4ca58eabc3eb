//! Page composition: product list plus resolved texts to a page descriptor.

use serde::Serialize;

use tienda_catalog::Product;
use tienda_i18n::TextBundle;

use crate::card::{CardDescriptor, assemble_card};

/// Text shown before the footer logo.
pub const FOOTER_POWERED_BY: &str = "Powered by";
/// Footer logo asset.
pub const FOOTER_LOGO_ASSET: &str = "/dh.png";
/// Footer logo alt text.
pub const FOOTER_LOGO_ALT: &str = "Digital House Logo";
/// Display size of the footer logo, in pixels.
pub const FOOTER_LOGO_WIDTH: u32 = 30;
/// Display size of the footer logo, in pixels.
pub const FOOTER_LOGO_HEIGHT: u32 = 30;

/// Static footer element: a fixed "powered by" logo.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Footer {
    pub powered_by: &'static str,
    pub logo: &'static str,
    pub logo_alt: &'static str,
    pub logo_width: u32,
    pub logo_height: u32,
}

impl Footer {
    pub fn standard() -> Self {
        Self {
            powered_by: FOOTER_POWERED_BY,
            logo: FOOTER_LOGO_ASSET,
            logo_alt: FOOTER_LOGO_ALT,
            logo_width: FOOTER_LOGO_WIDTH,
            logo_height: FOOTER_LOGO_HEIGHT,
        }
    }
}

impl Default for Footer {
    fn default() -> Self {
        Self::standard()
    }
}

/// Fully composed listing page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PageDescriptor {
    /// Document title, taken from the bundle's products label.
    pub title: String,
    /// Page heading; same text as the title.
    pub heading: String,
    /// Cards in product-list order. May be empty.
    pub cards: Vec<CardDescriptor>,
    pub footer: Footer,
}

/// A render result: either a composed listing or nothing at all.
///
/// The empty variant is produced only when the product list itself was
/// absent; an empty product list still renders a full page with zero cards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Page {
    /// No data: no header, no grid, no footer.
    Empty,
    Listing(PageDescriptor),
}

impl Page {
    pub fn is_empty(&self) -> bool {
        matches!(self, Page::Empty)
    }
}

/// Render the listing page for a (possibly absent) product list.
///
/// This is the pipeline's single failure-tolerance branch: an absent list
/// yields [`Page::Empty`]; everything else composes deterministically from
/// the inputs.
pub fn render_page(products: Option<&[Product]>, texts: &TextBundle) -> Page {
    let Some(products) = products else {
        return Page::Empty;
    };

    let heading = texts.main.products.clone();
    Page::Listing(PageDescriptor {
        title: heading.clone(),
        heading,
        cards: products.iter().map(assemble_card).collect(),
        footer: Footer::standard(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use tienda_i18n::{Locale, LocaleTexts};

    fn bundle() -> TextBundle {
        TextBundle::new("Featured products")
    }

    #[test]
    fn absent_list_renders_the_empty_page() {
        let page = render_page(None, &bundle());
        assert_eq!(page, Page::Empty);
        assert!(page.is_empty());
    }

    #[test]
    fn empty_list_still_renders_heading_and_footer() {
        let page = render_page(Some(&[]), &bundle());

        let Page::Listing(descriptor) = page else {
            panic!("expected a listing page");
        };
        assert_eq!(descriptor.heading, "Featured products");
        assert_eq!(descriptor.title, descriptor.heading);
        assert!(descriptor.cards.is_empty());
        assert_eq!(descriptor.footer, Footer::standard());
    }

    #[test]
    fn cards_come_out_in_list_order() {
        let products: Vec<Product> = (1..=3)
            .map(|id| Product {
                id,
                title: format!("p{id}"),
                description: String::new(),
                rating: 1.0,
                image: format!("/{id}.png"),
                price: Some(1000.0 * id as f64),
            })
            .collect();

        let page = render_page(Some(&products), &bundle());
        let Page::Listing(descriptor) = page else {
            panic!("expected a listing page");
        };

        let ids: Vec<u64> = descriptor.cards.iter().map(|c| c.id).collect();
        assert_eq!(ids, vec![1, 2, 3]);
        assert_eq!(descriptor.cards[2].formatted_price.as_deref(), Some("3.000"));
    }

    #[test]
    fn end_to_end_reference_listing() {
        let products = vec![Product {
            id: 1,
            title: "Shirt".to_string(),
            description: "d".to_string(),
            rating: 3.0,
            image: "/x.png".to_string(),
            price: Some(15000.0),
        }];

        let texts = LocaleTexts::shipped();
        let page = render_page(Some(&products), texts.resolve(&Locale::from("en-US")));

        let Page::Listing(descriptor) = page else {
            panic!("expected a listing page");
        };
        assert_eq!(descriptor.heading, "Featured products");
        assert_eq!(descriptor.cards.len(), 1);

        let card = &descriptor.cards[0];
        assert_eq!(card.formatted_price.as_deref(), Some("15.000"));
        let fills: Vec<bool> = card.stars.iter().map(|s| s.filled).collect();
        assert_eq!(fills, vec![true, true, true, true, false]);
    }

    #[test]
    fn empty_page_serializes_without_listing_fields() {
        let json = serde_json::to_value(Page::Empty).unwrap();
        assert_eq!(json, serde_json::json!({ "kind": "empty" }));
    }
}
