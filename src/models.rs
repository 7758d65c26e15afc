// src/models.rs
mod glyph;
mod numeral_input;
mod rating;

pub use glyph::{Glyph, GlyphCounts, GlyphKind, StarRow};
pub use numeral_input::NumeralInput;
pub use rating::{MAX_RATING, Rating, RatingError, STAR_SLOTS};
