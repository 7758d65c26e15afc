// src/lib.rs
//! Arabic-Indic numeral transliteration and star-rating glyph rows.
//!
//! Both utilities are pure functions: [`transliterate`] swaps ASCII digits for
//! Eastern Arabic-Indic ones, and [`rating_glyphs`] turns a [`Rating`] into a
//! five-slot row of full, half and empty stars.

pub mod cli;
pub mod config;
pub mod core;
pub mod models;
pub mod utils;

pub use cli::{Args, Command, NumeralsArgs, OutputFormat, StarsArgs, execute, run};
pub use config::{Config, NumeralTarget, OutOfRange, load_config};
pub use crate::core::numerals::{EASTERN_ARABIC_DIGITS, to_western_digits, transliterate, transliterate_str};
pub use crate::core::stars::{average_rating, glyph_counts, rating_glyphs};
pub use models::{
    Glyph, GlyphCounts, GlyphKind, MAX_RATING, NumeralInput, Rating, RatingError, STAR_SLOTS,
    StarRow,
};
