//! Digit extraction and mask application.

use input_mask_contract::{MaskPattern, MaskSlot};

/// Separator inserted before digits that exceed the pattern's placeholder capacity.
const OVERFLOW_SEPARATOR: char = ' ';

/// Returns the ASCII digits of `input` in order, discarding every other character.
///
/// This is both the normalization step before masking and the "raw value"
/// representation reported alongside a masked display value.
pub fn extract_digits(input: &str) -> String {
    input.chars().filter(char::is_ascii_digit).collect()
}

/// Formats `input` against `pattern`.
///
/// Digits are consumed strictly left to right; the walk stops as soon as the
/// last digit has been consumed, so no literal trails the final digit. An
/// input with no digits produces the empty string rather than a literal-only
/// skeleton. Digits beyond the pattern's placeholder capacity are appended
/// verbatim after a single separator, never dropped.
pub fn apply_mask(input: &str, pattern: &MaskPattern) -> String {
    let digits = extract_digits(input);
    if digits.is_empty() {
        return String::new();
    }

    let mut masked = String::new();
    let mut remaining = digits.chars().peekable();
    for slot in pattern.slots() {
        match slot {
            MaskSlot::Placeholder => {
                if let Some(digit) = remaining.next() {
                    masked.push(digit);
                }
                if remaining.peek().is_none() {
                    break;
                }
            }
            MaskSlot::Literal(ch) => masked.push(*ch),
        }
    }

    let overflow: String = remaining.collect();
    if !overflow.is_empty() {
        masked.push(OVERFLOW_SEPARATOR);
        masked.push_str(&overflow);
    }
    masked
}
