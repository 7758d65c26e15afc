// tests/integration_tests/stars_test.rs
use super::common::{kinds, rating};
use anyhow::Result;
use glyphs::GlyphKind::{Empty, Full, Half};
use glyphs::{Rating, RatingError, STAR_SLOTS, average_rating, glyph_counts, rating_glyphs};

#[test]
fn test_boundaries() -> Result<()> {
    assert_eq!(kinds(&rating_glyphs(rating(0.0)?)), vec![Empty; 5]);
    assert_eq!(kinds(&rating_glyphs(rating(5.0)?)), vec![Full; 5]);
    Ok(())
}

#[test]
fn test_fractional_and_whole() -> Result<()> {
    assert_eq!(
        kinds(&rating_glyphs(rating(4.5)?)),
        vec![Full, Full, Full, Full, Half]
    );
    assert_eq!(
        kinds(&rating_glyphs(rating(4.999_999)?)),
        vec![Full, Full, Full, Full, Half]
    );
    assert_eq!(
        kinds(&rating_glyphs(rating(3.0)?)),
        vec![Full, Full, Full, Empty, Empty]
    );
    Ok(())
}

#[test]
fn test_every_row_has_five_ordered_slots() -> Result<()> {
    for hundredths in 0..=500 {
        let value = f64::from(hundredths) / 100.0;
        let row = rating_glyphs(rating(value)?);
        assert_eq!(row.glyphs.len(), STAR_SLOTS);
        assert_eq!(glyph_counts(rating(value)?).total(), STAR_SLOTS);

        let ranks: Vec<u8> = row
            .kinds()
            .map(|kind| match kind {
                Full => 0,
                Half => 1,
                Empty => 2,
            })
            .collect();
        assert!(ranks.windows(2).all(|w| w[0] <= w[1]), "rating {value}");
        assert!(row.counts().half <= 1, "rating {value}");
    }
    Ok(())
}

#[test]
fn test_keys_are_stable_per_slot() -> Result<()> {
    let row = rating_glyphs(rating(1.5)?);
    let keys: Vec<&str> = row.glyphs.iter().map(|g| g.key.as_str()).collect();
    assert_eq!(keys, vec!["full-0", "half-1", "empty-2", "empty-3", "empty-4"]);
    assert_eq!(row, rating_glyphs(rating(1.5)?));
    Ok(())
}

#[test]
fn test_out_of_range_is_an_error() {
    assert_eq!(Rating::new(5.5), Err(RatingError::OutOfRange(5.5)));
    assert_eq!(Rating::new(-1.0), Err(RatingError::OutOfRange(-1.0)));
}

#[test]
fn test_clamping_is_explicit() {
    assert_eq!(kinds(&rating_glyphs(Rating::clamped(5.5))), vec![Full; 5]);
    assert_eq!(kinds(&rating_glyphs(Rating::clamped(-2.0))), vec![Empty; 5]);
}

#[test]
fn test_average_of_reviews() -> Result<()> {
    let reviews = [rating(5.0)?, rating(4.0)?, rating(4.0)?, rating(3.0)?];
    let average = average_rating(&reviews).map(Rating::value);
    assert_eq!(average, Some(4.0));
    Ok(())
}
