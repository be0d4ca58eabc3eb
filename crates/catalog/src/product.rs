//! Product model as delivered by the product API.

use serde::{Deserialize, Serialize};

/// One product as it appears in the API payload.
///
/// Values are taken as-is: out-of-range ratings and absent prices are
/// accepted here and handled downstream by the rendering pipeline, which is
/// total over any field values.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: u64,
    pub title: String,
    pub description: String,
    /// Star rating, nominally in `[0, 5]` but never validated.
    pub rating: f64,
    /// Path of the product image asset.
    pub image: String,
    /// Price in whole currency units. Absent when the upstream payload
    /// omits it; the renderer then shows no price at all.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price: Option<f64>,
}

/// Ordered product list. API response order is display order.
pub type ProductList = Vec<Product>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_an_api_payload_preserving_order() {
        let payload = r#"[
            {"id": 1, "title": "Shirt", "description": "d", "rating": 3, "image": "/x.png", "price": 15000},
            {"id": 2, "title": "Cap", "description": "e", "rating": 4.5, "image": "/y.png", "price": 900}
        ]"#;

        let list: ProductList = serde_json::from_str(payload).unwrap();
        assert_eq!(list.len(), 2);
        assert_eq!(list[0].id, 1);
        assert_eq!(list[0].price, Some(15000.0));
        assert_eq!(list[1].title, "Cap");
        assert_eq!(list[1].rating, 4.5);
    }

    #[test]
    fn missing_price_deserializes_to_none() {
        let payload = r#"{"id": 7, "title": "Mug", "description": "", "rating": 0, "image": "/m.png"}"#;
        let product: Product = serde_json::from_str(payload).unwrap();
        assert_eq!(product.price, None);
    }
}
