// src/utils.rs
use anyhow::Result;

use crate::config::{NumeralTarget, StarSymbols};
use crate::core::numerals::{to_western_digits, transliterate_str};
use crate::models::StarRow;

/// Renders a star row with the configured symbols, reversed for right-to-left
/// layouts.
#[must_use]
pub fn render_row(row: &StarRow, symbols: &StarSymbols, rtl: bool) -> String {
    let kinds = row.kinds();
    if rtl {
        kinds.rev().map(|kind| symbols.symbol(kind)).collect()
    } else {
        kinds.map(|kind| symbols.symbol(kind)).collect()
    }
}

/// Serializes a star row for consumption by another renderer.
///
/// # Errors
///
/// Returns an error if serialization fails.
pub fn row_to_json(row: &StarRow) -> Result<String> {
    Ok(serde_json::to_string(row)?)
}

#[must_use]
pub fn convert_numerals(text: &str, target: NumeralTarget) -> String {
    match target {
        NumeralTarget::Eastern => transliterate_str(text),
        NumeralTarget::Western => to_western_digits(text),
    }
}
