// src/core/numerals.rs
use crate::models::NumeralInput;

/// Eastern Arabic-Indic digits, indexed by digit value.
pub const EASTERN_ARABIC_DIGITS: [char; 10] = [
    '\u{0660}', // ٠
    '\u{0661}', // ١
    '\u{0662}', // ٢
    '\u{0663}', // ٣
    '\u{0664}', // ٤
    '\u{0665}', // ٥
    '\u{0666}', // ٦
    '\u{0667}', // ٧
    '\u{0668}', // ٨
    '\u{0669}', // ٩
];

/// Converts the Western digits in a string or number to Eastern Arabic-Indic
/// digits.
///
/// Every other character (signs, separators, letters, whitespace) is copied
/// through at the same position, so the result has as many characters as the
/// input's string form.
///
/// # Arguments
///
/// * `input` - A string, integer or decimal; numbers use `.` as separator
///
/// # Returns
///
/// The transliterated string. Eastern digits already present are left alone,
/// so feeding the output back in returns it unchanged.
#[inline]
#[must_use]
pub fn transliterate<'a>(input: impl Into<NumeralInput<'a>>) -> String {
    match input.into() {
        NumeralInput::Text(text) => transliterate_str(text),
        number => transliterate_str(&number.to_string()),
    }
}

/// String-only form of [`transliterate`].
#[inline]
#[must_use]
pub fn transliterate_str(text: &str) -> String {
    let mut result = String::with_capacity(text.len() * 2);
    for c in text.chars() {
        result.push(eastern_digit(c).unwrap_or(c));
    }
    result
}

/// Converts Eastern Arabic-Indic digits back to ASCII digits, leaving every
/// other character untouched.
#[inline]
#[must_use]
pub fn to_western_digits(text: &str) -> String {
    text.chars().map(|c| western_digit(c).unwrap_or(c)).collect()
}

#[inline]
fn eastern_digit(c: char) -> Option<char> {
    // to_digit only accepts ASCII digits for radix 10
    let value = c.to_digit(10)?;
    EASTERN_ARABIC_DIGITS
        .get(usize::try_from(value).ok()?)
        .copied()
}

#[inline]
fn western_digit(c: char) -> Option<char> {
    let value = EASTERN_ARABIC_DIGITS.iter().position(|&d| d == c)?;
    char::from_digit(u32::try_from(value).ok()?, 10)
}
