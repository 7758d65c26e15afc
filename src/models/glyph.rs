// src/models/glyph.rs
use serde::Serialize;
use std::fmt;

use crate::models::STAR_SLOTS;

/// Visual state of a single star slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum GlyphKind {
    Full,
    Half,
    Empty,
}

impl GlyphKind {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Full => "full",
            Self::Half => "half",
            Self::Empty => "empty",
        }
    }
}

impl fmt::Display for GlyphKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One slot of a star row, keyed by its position so a renderer can track it.
///
/// Every kind, the half star included, is keyed `<kind>-<slot>` (`half-4`
/// rather than a bare `half`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Glyph {
    pub kind: GlyphKind,
    pub key: String,
}

impl Glyph {
    #[must_use]
    pub fn new(kind: GlyphKind, slot: usize) -> Self {
        Self {
            kind,
            key: format!("{kind}-{slot}"),
        }
    }
}

/// How many slots of each kind a row holds. Always sums to `STAR_SLOTS`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct GlyphCounts {
    pub full: usize,
    pub half: usize,
    pub empty: usize,
}

impl GlyphCounts {
    #[must_use]
    pub const fn total(&self) -> usize {
        self.full + self.half + self.empty
    }

    /// Kind of the glyph at `slot`: full slots first, then the half, then empties.
    #[must_use]
    pub const fn kind_at(&self, slot: usize) -> GlyphKind {
        if slot < self.full {
            GlyphKind::Full
        } else if slot < self.full + self.half {
            GlyphKind::Half
        } else {
            GlyphKind::Empty
        }
    }
}

/// A rendered rating: exactly `STAR_SLOTS` glyphs in display order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StarRow {
    pub glyphs: [Glyph; STAR_SLOTS],
}

impl StarRow {
    #[must_use]
    pub fn from_counts(counts: GlyphCounts) -> Self {
        Self {
            glyphs: std::array::from_fn(|slot| Glyph::new(counts.kind_at(slot), slot)),
        }
    }

    #[must_use]
    pub fn counts(&self) -> GlyphCounts {
        let mut counts = GlyphCounts::default();
        for glyph in &self.glyphs {
            match glyph.kind {
                GlyphKind::Full => counts.full += 1,
                GlyphKind::Half => counts.half += 1,
                GlyphKind::Empty => counts.empty += 1,
            }
        }
        counts
    }

    pub fn kinds(&self) -> impl DoubleEndedIterator<Item = GlyphKind> + '_ {
        self.glyphs.iter().map(|glyph| glyph.kind)
    }
}
