// src/config.rs
pub mod loader;

use anyhow::{Context as _, Result};
use serde::Deserialize;
use std::fs;
use std::path::Path;
use tracing::warn;

use crate::models::{GlyphKind, Rating, RatingError};

pub use loader::{CONFIG_FILE_NAME, load_config};

/// Settings read from a `.glyphs.toml` file. Every section is optional.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub stars: StarSymbols,
    pub rating: RatingPolicy,
    pub numerals: NumeralSettings,
}

impl Config {
    /// Reads and parses a config file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or is not valid TOML for
    /// this schema.
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        Self::parse(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))
    }

    /// Parses config from TOML text.
    ///
    /// # Errors
    ///
    /// Returns an error if the text is not valid TOML for this schema.
    pub fn parse(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }
}

/// Symbols printed for each glyph kind in text output.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct StarSymbols {
    pub full: String,
    pub half: String,
    pub empty: String,
}

impl Default for StarSymbols {
    fn default() -> Self {
        Self {
            full: String::from("★"),
            half: String::from("⯪"),
            empty: String::from("☆"),
        }
    }
}

impl StarSymbols {
    #[must_use]
    pub fn symbol(&self, kind: GlyphKind) -> &str {
        match kind {
            GlyphKind::Full => &self.full,
            GlyphKind::Half => &self.half,
            GlyphKind::Empty => &self.empty,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RatingPolicy {
    pub out_of_range: OutOfRange,
}

/// What to do with a rating outside `[0, 5]`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutOfRange {
    #[default]
    Reject,
    Clamp,
}

impl RatingPolicy {
    /// Turns a raw value into a rating according to the policy.
    ///
    /// # Errors
    ///
    /// Under `Reject`, returns the `RatingError` from `Rating::new`. Under
    /// `Clamp`, never fails.
    pub fn apply(&self, value: f64) -> Result<Rating, RatingError> {
        match self.out_of_range {
            OutOfRange::Reject => Rating::new(value),
            OutOfRange::Clamp => {
                let rating = Rating::clamped(value);
                if rating.value().to_bits() != value.to_bits() {
                    warn!(value, clamped = rating.value(), "Clamped rating into range");
                }
                Ok(rating)
            }
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct NumeralSettings {
    pub target: NumeralTarget,
}

/// Digit set that numerals are converted into.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum NumeralTarget {
    #[default]
    Eastern,
    Western,
}
