// tests/integration_tests/common.rs
use anyhow::Result;
use glyphs::{GlyphKind, Rating, StarRow};
use std::fs;
use std::path::Path;

pub fn create_config_file(dir: &Path, content: &str) -> Result<()> {
    fs::create_dir_all(dir)?;
    fs::write(dir.join(".glyphs.toml"), content)?;
    Ok(())
}

pub fn kinds(row: &StarRow) -> Vec<GlyphKind> {
    row.kinds().collect()
}

pub fn rating(value: f64) -> Result<Rating> {
    Ok(Rating::new(value)?)
}
