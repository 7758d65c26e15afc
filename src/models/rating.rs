// src/models/rating.rs
use std::{fmt, str::FromStr};

use serde::Serialize;

/// Highest rating a row can display.
pub const MAX_RATING: f64 = 5.0;

/// Number of star slots in every rendered row.
pub const STAR_SLOTS: usize = 5;

/// A rating within `[0, MAX_RATING]`.
///
/// The bounds are checked once, at construction, so every operation taking a
/// `Rating` can rely on them.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize)]
#[serde(transparent)]
pub struct Rating(f64);

impl Rating {
    /// Creates a rating, rejecting values the star row cannot represent.
    ///
    /// # Errors
    ///
    /// Returns `RatingError::NotANumber` for NaN and
    /// `RatingError::OutOfRange` for values below `0` or above `MAX_RATING`.
    pub fn new(value: f64) -> Result<Self, RatingError> {
        if value.is_nan() {
            return Err(RatingError::NotANumber);
        }
        if !(0.0..=MAX_RATING).contains(&value) {
            return Err(RatingError::OutOfRange(value));
        }
        Ok(Self(value))
    }

    /// Creates a rating by clamping into `[0, MAX_RATING]`. NaN becomes `0`.
    #[must_use]
    pub fn clamped(value: f64) -> Self {
        if value.is_nan() {
            return Self(0.0);
        }
        Self(value.clamp(0.0, MAX_RATING))
    }

    #[must_use]
    pub const fn value(self) -> f64 {
        self.0
    }
}

impl TryFrom<f64> for Rating {
    type Error = RatingError;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl FromStr for Rating {
    type Err = RatingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let value: f64 = s
            .trim()
            .parse()
            .map_err(|_| RatingError::Unparseable(s.to_owned()))?;
        Self::new(value)
    }
}

impl fmt::Display for Rating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Error returned when a value cannot be used as a rating.
#[derive(Debug, thiserror::Error, PartialEq)]
pub enum RatingError {
    #[error("rating {0} is outside the range 0 to 5")]
    OutOfRange(f64),

    #[error("rating is not a number")]
    NotANumber,

    #[error("'{0}' is not a valid rating")]
    Unparseable(String),
}
