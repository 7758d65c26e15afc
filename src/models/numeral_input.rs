// src/models/numeral_input.rs
use std::fmt;

/// A value whose decimal string form can be transliterated.
///
/// Strings may mix digits with arbitrary text (dates, prices, `1,200+`).
/// Numbers are formatted with `.` as the decimal separator before conversion:
/// whole floats drop the fraction (`2.0` is `"2"`), both zeros print as `"0"`
/// and infinities print as `"Infinity"` / `"-Infinity"`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum NumeralInput<'a> {
    Text(&'a str),
    Integer(i128),
    Unsigned(u128),
    Decimal(f64),
    /// Kept at single precision so the shortest `f32` form is printed.
    Decimal32(f32),
}

impl fmt::Display for NumeralInput<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text(text) => f.write_str(text),
            Self::Integer(value) => write!(f, "{value}"),
            Self::Unsigned(value) => write!(f, "{value}"),
            Self::Decimal(value) => write_float(
                f,
                value,
                *value == 0.0,
                value.is_infinite(),
                value.is_sign_negative(),
            ),
            Self::Decimal32(value) => write_float(
                f,
                value,
                *value == 0.0,
                value.is_infinite(),
                value.is_sign_negative(),
            ),
        }
    }
}

fn write_float(
    f: &mut fmt::Formatter<'_>,
    value: &dyn fmt::Display,
    is_zero: bool,
    is_infinite: bool,
    is_negative: bool,
) -> fmt::Result {
    if is_zero {
        // -0.0 would otherwise print its sign
        return f.write_str("0");
    }
    if is_infinite {
        return f.write_str(if is_negative { "-Infinity" } else { "Infinity" });
    }
    write!(f, "{value}")
}

impl<'a> From<&'a str> for NumeralInput<'a> {
    fn from(value: &'a str) -> Self {
        Self::Text(value)
    }
}

impl<'a> From<&'a String> for NumeralInput<'a> {
    fn from(value: &'a String) -> Self {
        Self::Text(value.as_str())
    }
}

macro_rules! integer_input {
    ($variant:ident, $wide:ty: $($ty:ty),*) => {
        $(
            impl From<$ty> for NumeralInput<'_> {
                fn from(value: $ty) -> Self {
                    Self::$variant(<$wide>::from(value))
                }
            }
        )*
    };
}

integer_input!(Integer, i128: i8, i16, i32, i64, i128);
integer_input!(Unsigned, u128: u8, u16, u32, u64, u128);

// Pointer-sized integers have no `From` into i128/u128, but never exceed 64 bits
impl From<isize> for NumeralInput<'_> {
    fn from(value: isize) -> Self {
        Self::Integer(value as i128)
    }
}

impl From<usize> for NumeralInput<'_> {
    fn from(value: usize) -> Self {
        Self::Unsigned(value as u128)
    }
}

impl From<f64> for NumeralInput<'_> {
    fn from(value: f64) -> Self {
        Self::Decimal(value)
    }
}

impl From<f32> for NumeralInput<'_> {
    fn from(value: f32) -> Self {
        Self::Decimal32(value)
    }
}
