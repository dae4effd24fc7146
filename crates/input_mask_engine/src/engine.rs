//! Combined mask-and-caret entry point and listener payload construction.

use input_mask_contract::{EditIntent, MaskPattern, MaskResult, MaskedFieldEvent};

use crate::caret::resolve_caret;
use crate::mask::{apply_mask, extract_digits};

/// Re-formats `value` against `pattern` and resolves the caret that preserves
/// the user's editing point.
///
/// This is the single entry point rendering layers call on every edit event:
/// `value` and `caret_position` describe the field as the edit left it, and
/// the result carries the string to display plus the caret to re-apply once
/// the display has updated. A `None` caret leaves placement to the field.
pub fn apply_mask_with_cursor(
    value: &str,
    pattern: &MaskPattern,
    caret_position: usize,
    intent: EditIntent,
) -> MaskResult {
    let masked_value = apply_mask(value, pattern);
    let cursor_position = resolve_caret(&masked_value, value, caret_position, intent);
    MaskResult {
        masked_value,
        cursor_position,
    }
}

/// Builds the listener payload for a masked display value.
///
/// `raw_value` carries the unmasked digit sequence for validation and
/// submission paths that must not see formatting literals.
pub fn masked_field_event(masked_value: impl Into<String>) -> MaskedFieldEvent {
    let value = masked_value.into();
    let raw_value = extract_digits(&value);
    MaskedFieldEvent { value, raw_value }
}
