// tests/integration_tests/numerals_test.rs
use glyphs::{EASTERN_ARABIC_DIGITS, to_western_digits, transliterate};

#[test]
fn test_digit_only_substitution() {
    let input = "Lesson 7: pages 10-25 (2h)";
    let output = transliterate(input);

    for (original, converted) in input.chars().zip(output.chars()) {
        match original.to_digit(10) {
            Some(d) => assert_eq!(Some(&converted), EASTERN_ARABIC_DIGITS.get(d as usize)),
            None => assert_eq!(original, converted),
        }
    }
    assert_eq!(output.chars().count(), input.chars().count());
}

#[test]
fn test_date_keeps_separators() {
    assert_eq!(transliterate("2024-01-01"), "٢٠٢٤-٠١-٠١");
}

#[test]
fn test_number_inputs() {
    assert_eq!(transliterate(1890), "١٨٩٠");
    assert_eq!(transliterate(1890_u32), "١٨٩٠");
    assert_eq!(transliterate(-7_i64), "-٧");
    assert_eq!(transliterate(99.5), "٩٩.٥");
}

#[test]
fn test_owned_string_input_is_not_consumed() {
    let price = String::from("250 SAR");
    assert_eq!(transliterate(&price), "٢٥٠ SAR");
    assert_eq!(price, "250 SAR");
}

#[test]
fn test_western_round_trip() {
    let input = "Call 0123-456-789";
    assert_eq!(to_western_digits(&transliterate(input)), input);
}

#[test]
fn test_single_precision_input() {
    assert_eq!(transliterate(0.1_f32), "٠.١");
    assert_eq!(transliterate(4.7_f32), "٤.٧");
}

#[test]
fn test_wide_count_inputs() {
    assert_eq!(transliterate(3_usize), "٣");
    assert_eq!(
        to_western_digits(&transliterate(usize::MAX)),
        usize::MAX.to_string()
    );
    assert_eq!(transliterate(u64::MAX), "١٨٤٤٦٧٤٤٠٧٣٧٠٩٥٥١٦١٥");
}

#[test]
fn test_negative_zero_prints_as_zero() {
    assert_eq!(transliterate(-0.0), "٠");
}
