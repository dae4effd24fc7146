//! Caret resolution across mask re-formats.

use input_mask_contract::EditIntent;

/// Resolves the caret offset that preserves the user's logical editing point
/// after `initial_value` was re-formatted into `updated_value`.
///
/// Policy, in precedence order:
/// 1. A non-delete edit with the caret already at the end of `initial_value`
///    resolves to `None`: appending needs no correction, so the field's
///    natural end-of-text behavior applies.
/// 2. Prefix-stable: if the text before the caret survived re-formatting
///    untouched, the offset is still valid as-is.
/// 3. Suffix-stable: if the text after the caret survived, the offset is
///    measured backward from the end of `updated_value`.
/// 4. Otherwise the caret anchors to the offset just after the same number of
///    digits that preceded it before re-formatting, independent of whatever
///    literals the mask inserted or removed around it.
///
/// Offsets are byte offsets into the string they were measured against.
/// `initial_position` is clamped into `[0, initial_value.len()]` and floored
/// to a character boundary before use.
pub fn resolve_caret(
    updated_value: &str,
    initial_value: &str,
    initial_position: usize,
    intent: EditIntent,
) -> Option<usize> {
    let initial_position = clamp_to_char_boundary(initial_value, initial_position);
    let caret_at_end = initial_position == initial_value.len();
    if caret_at_end && !intent.is_delete_backward() {
        return None;
    }

    let before = &initial_value[..initial_position];
    let after = &initial_value[initial_position..];
    if updated_value.starts_with(before) {
        return Some(initial_position);
    }
    if updated_value.ends_with(after) {
        return Some(updated_value.len() - after.len());
    }
    Some(offset_after_digits(updated_value, count_digits(before)))
}

fn count_digits(text: &str) -> usize {
    text.chars().filter(char::is_ascii_digit).count()
}

/// Offset immediately after the `count`-th digit of `text`, clamped to the end
/// when `text` holds fewer digits than `count`.
fn offset_after_digits(text: &str, count: usize) -> usize {
    if count == 0 {
        return 0;
    }
    let mut matched = 0;
    for (index, ch) in text.char_indices() {
        if ch.is_ascii_digit() {
            matched += 1;
            if matched == count {
                return index + ch.len_utf8();
            }
        }
    }
    text.len()
}

fn clamp_to_char_boundary(text: &str, position: usize) -> usize {
    let mut position = position.min(text.len());
    while !text.is_char_boundary(position) {
        position -= 1;
    }
    position
}

#[cfg(test)]
mod tests {
    use input_mask_contract::EditIntent;
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn append_at_end_leaves_caret_placement_to_the_field() {
        assert_eq!(resolve_caret("(555) 1", "5551", 4, EditIntent::Other), None);
        // out-of-range carets clamp to the end and behave the same
        assert_eq!(resolve_caret("(555) 1", "5551", 99, EditIntent::Other), None);
        assert_eq!(resolve_caret("", "", 0, EditIntent::Other), None);
    }

    #[test]
    fn untouched_prefix_keeps_the_offset() {
        assert_eq!(
            resolve_caret(
                "(555) 123-45",
                "(555) 123-45",
                12,
                EditIntent::DeleteBackward
            ),
            Some(12),
        );
        assert_eq!(
            resolve_caret("(555) 912-3456 7", "(555) 9123-4567", 7, EditIntent::Other),
            Some(7),
        );
    }

    #[test]
    fn untouched_suffix_measures_backward_from_the_end() {
        // a literal grew in front of the caret but everything after it survived
        assert_eq!(resolve_caret("(555", "555", 1, EditIntent::Other), Some(2));
        assert_eq!(
            resolve_caret("(12) 34", "1234", 2, EditIntent::Other),
            Some(5),
        );
    }

    #[test]
    fn general_case_anchors_after_the_same_digit_count() {
        // raw paste re-formats on both sides of the caret
        assert_eq!(
            resolve_caret("(555) 123-4567", "5551234567", 5, EditIntent::Other),
            Some(8),
        );
        // caret with no digits in front of it anchors to the start
        assert_eq!(resolve_caret("ab", "-x", 1, EditIntent::Other), Some(0));
        // fewer digits in the updated value clamps to its end
        assert_eq!(
            resolve_caret("12", "999999", 4, EditIntent::DeleteBackward),
            Some(2),
        );
    }

    #[test]
    fn positions_inside_a_char_floor_to_its_boundary() {
        // byte 1 splits the two-byte 'é'; the clamp lands on offset 0
        assert_eq!(resolve_caret("5", "é5", 1, EditIntent::Other), Some(0));
    }
}
