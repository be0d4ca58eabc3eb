//! Product-listing rendering pipeline.
//!
//! Transforms a raw product list into a deterministic page descriptor:
//! price formatting, rating-to-stars mapping, card assembly, and page
//! composition. Implemented purely as deterministic logic (no IO, no HTTP,
//! no storage); every operation is total over whatever product values the
//! API delivers.

pub mod card;
pub mod page;
pub mod price;
pub mod stars;

pub use card::{CardDescriptor, assemble_card};
pub use page::{Footer, Page, PageDescriptor, render_page};
pub use price::format_price;
pub use stars::{DEFAULT_MAX_STARS, StarState, star_states};
