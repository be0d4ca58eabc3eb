//! Rating-to-stars mapping.

use serde::{Deserialize, Serialize};

/// Number of stars a card shows unless a caller asks otherwise.
pub const DEFAULT_MAX_STARS: usize = 5;

/// Display size of a star image, in pixels.
pub const STAR_WIDTH: u32 = 20;
/// Display size of a star image, in pixels.
pub const STAR_HEIGHT: u32 = 20;

/// Asset shown for a filled star.
pub const FILLED_STAR_ASSET: &str = "/yellowStar.png";
/// Asset shown for an empty star.
pub const EMPTY_STAR_ASSET: &str = "/emptyStar.png";

/// Fill state of a single star position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StarState {
    pub filled: bool,
}

impl StarState {
    /// Image asset for this state.
    pub fn asset(&self) -> &'static str {
        if self.filled {
            FILLED_STAR_ASSET
        } else {
            EMPTY_STAR_ASSET
        }
    }

    /// Alt text for this state.
    pub fn alt(&self) -> &'static str {
        if self.filled { "yellow star" } else { "empty star" }
    }
}

/// Map a rating to exactly `max_stars` star states.
///
/// Position `i` (0-indexed) is filled when `i <= rating`, so a rating of 0
/// still fills the first star. The comparison is intentional display
/// behavior, not a rounding rule; do not change it to `<`.
///
/// The output length is always `max_stars`, whatever the rating — negative
/// ratings yield all-empty stars, ratings past the end yield all-filled.
pub fn star_states(rating: f64, max_stars: usize) -> Vec<StarState> {
    (0..max_stars)
        .map(|i| StarState {
            filled: (i as f64) <= rating,
        })
        .collect()
}
