// src/core/stars.rs
use tracing::trace;

use crate::models::{GlyphCounts, Rating, STAR_SLOTS, StarRow};

/// Splits a rating into full, half and empty slot counts.
///
/// `full` is the integer part, `half` is set when any fractional part remains,
/// and `empty` tops the row up to `STAR_SLOTS`.
#[must_use]
#[allow(
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    reason = "Rating is bounded to [0, 5] so the floor fits in usize"
)]
pub fn glyph_counts(rating: Rating) -> GlyphCounts {
    let value = rating.value();
    let floored = value.floor();
    let full = (floored as usize).min(STAR_SLOTS);
    let half = usize::from(value - floored > 0.0 && full < STAR_SLOTS);
    GlyphCounts {
        full,
        half,
        empty: STAR_SLOTS - full - half,
    }
}

/// Builds the star row for a rating: full glyphs, then at most one half glyph,
/// then empty glyphs, always `STAR_SLOTS` long.
///
/// # Arguments
///
/// * `rating` - A validated rating in `[0, 5]`
///
/// # Returns
///
/// A `StarRow` whose glyph keys are `<kind>-<slot>`
#[must_use]
pub fn rating_glyphs(rating: Rating) -> StarRow {
    let counts = glyph_counts(rating);
    trace!(%rating, ?counts, "Built star row");
    StarRow::from_counts(counts)
}

/// Mean of a set of ratings, or `None` when there are none.
#[must_use]
#[allow(
    clippy::cast_precision_loss,
    reason = "Review counts are far below 2^52"
)]
pub fn average_rating(ratings: &[Rating]) -> Option<Rating> {
    if ratings.is_empty() {
        return None;
    }
    let sum: f64 = ratings.iter().map(|r| r.value()).sum();
    // Rounding can push the mean of in-range values a hair past a bound
    Some(Rating::clamped(sum / ratings.len() as f64))
}
