//! Shared masking contracts used by the headless masking engine and field-rendering layers.
//!
//! This crate is intentionally runtime-agnostic. It defines the serializable pattern
//! vocabulary, edit-intent classification, and masking result payloads without depending
//! on any UI framework or browser APIs.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

use serde::{Deserialize, Serialize};

/// Pattern character that marks a digit-consuming slot in the textual mask form.
pub const PLACEHOLDER_MARKER: char = '0';

/// One slot of a parsed mask pattern.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum MaskSlot {
    /// Consumes exactly one input digit.
    Placeholder,
    /// Rendered verbatim; never consumes input.
    Literal(char),
}

/// Parsed, immutable mask template describing how digits are formatted.
///
/// Placeholders are consumed strictly left to right; the template carries no
/// per-session state and is supplied fresh on every masking call.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct MaskPattern {
    slots: Vec<MaskSlot>,
}

impl MaskPattern {
    /// Parses the textual mask form, e.g. `"(000) 000-0000"`.
    ///
    /// Parsing is total: [`PLACEHOLDER_MARKER`] becomes a placeholder slot and
    /// every other character becomes a literal slot.
    pub fn parse(pattern: &str) -> Self {
        Self {
            slots: pattern
                .chars()
                .map(|ch| {
                    if ch == PLACEHOLDER_MARKER {
                        MaskSlot::Placeholder
                    } else {
                        MaskSlot::Literal(ch)
                    }
                })
                .collect(),
        }
    }

    /// Returns the ordered slots.
    pub fn slots(&self) -> &[MaskSlot] {
        &self.slots
    }

    /// Returns how many input digits the pattern can format before overflowing.
    pub fn placeholder_capacity(&self) -> usize {
        self.slots
            .iter()
            .filter(|slot| matches!(slot, MaskSlot::Placeholder))
            .count()
    }

    /// Returns whether the pattern has no slots at all.
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }
}

impl From<&str> for MaskPattern {
    fn from(pattern: &str) -> Self {
        Self::parse(pattern)
    }
}

impl std::fmt::Display for MaskPattern {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for slot in &self.slots {
            match slot {
                MaskSlot::Placeholder => write!(f, "{PLACEHOLDER_MARKER}")?,
                MaskSlot::Literal(ch) => write!(f, "{ch}")?,
            }
        }
        Ok(())
    }
}

/// Edit classification distinguishing a backward delete from every other edit.
///
/// Insertions, forward deletes, pastes, and programmatic value sets all count
/// as [`EditIntent::Other`]; only the backward-delete family changes how the
/// caret is resolved after re-formatting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum EditIntent {
    /// Backspace and its word/line variants.
    DeleteBackward,
    /// Any other edit.
    #[default]
    Other,
}

impl EditIntent {
    /// Classifies a DOM `InputEvent.inputType` value.
    ///
    /// The backward-delete family (`deleteContentBackward`, `deleteWordBackward`,
    /// `deleteSoftLineBackward`, `deleteHardLineBackward`) maps to
    /// [`EditIntent::DeleteBackward`]; everything else, including forward deletes,
    /// maps to [`EditIntent::Other`].
    pub fn from_input_type(input_type: &str) -> Self {
        if input_type.starts_with("delete") && input_type.ends_with("Backward") {
            Self::DeleteBackward
        } else {
            Self::Other
        }
    }

    /// Returns whether this edit is a backward delete.
    pub fn is_delete_backward(self) -> bool {
        matches!(self, Self::DeleteBackward)
    }
}

/// Output of the combined mask-and-caret entry point.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MaskResult {
    /// Formatted string to display.
    pub masked_value: String,
    /// Caret offset to re-apply once the display updates; `None` leaves caret
    /// placement to default text-field behavior.
    pub cursor_position: Option<usize>,
}

/// Listener payload describing a masked field update.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MaskedFieldEvent {
    /// Formatted display value.
    pub value: String,
    /// Unmasked digit sequence extracted from `value`.
    pub raw_value: String,
}
