// src/core.rs
pub mod numerals;
pub mod stars;
