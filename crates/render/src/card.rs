//! Card assembly: one product record to one renderable card descriptor.

use serde::{Deserialize, Serialize};

use tienda_catalog::Product;

use crate::price::format_price;
use crate::stars::{DEFAULT_MAX_STARS, StarState, star_states};

/// Display size of the product image, in pixels.
pub const CARD_IMAGE_WIDTH: u32 = 100;
/// Display size of the product image, in pixels.
pub const CARD_IMAGE_HEIGHT: u32 = 130;

/// Renderable description of one product card.
///
/// Derived and ephemeral: recomputed on every render pass and discarded
/// afterwards, never stored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardDescriptor {
    pub id: u64,
    pub title: String,
    pub description: String,
    /// Thousands-grouped price, without currency symbol. `None` when the
    /// product carried no price; the presentation then renders no price.
    pub formatted_price: Option<String>,
    pub stars: Vec<StarState>,
    pub image: String,
}

/// Assemble a card descriptor from one product.
///
/// `id`, `title`, `description` and `image` pass through unchanged; the
/// price is formatted (or skipped when absent) and the rating becomes
/// [`DEFAULT_MAX_STARS`] star states. No side effects.
pub fn assemble_card(product: &Product) -> CardDescriptor {
    CardDescriptor {
        id: product.id,
        title: product.title.clone(),
        description: product.description.clone(),
        formatted_price: product.price.map(format_price),
        stars: star_states(product.rating, DEFAULT_MAX_STARS),
        image: product.image.clone(),
    }
}
