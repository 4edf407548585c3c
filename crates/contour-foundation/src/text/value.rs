//! Immutable text field content snapshot.

use super::TextRange;

/// Immutable snapshot of text field content.
///
/// This represents the text, selection, and composition state at a point in
/// time. Constructors keep both ranges inside the text and on UTF-8 character
/// boundaries.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TextFieldValue {
    /// The text content
    pub text: String,
    /// Current selection or cursor position
    pub selection: TextRange,
    /// IME composition range, if any
    pub composition: Option<TextRange>,
}

impl TextFieldValue {
    /// Creates a new value with the given text and cursor at end.
    pub fn new(text: impl Into<String>) -> Self {
        let text = text.into();
        let len = text.len();
        Self {
            text,
            selection: TextRange::cursor(len),
            composition: None,
        }
    }

    /// Creates a value with specified text and selection.
    pub fn with_selection(text: impl Into<String>, selection: TextRange) -> Self {
        let text = text.into();
        let selection = clamp_range(&text, selection);
        Self {
            text,
            selection,
            composition: None,
        }
    }

    /// Returns a copy with the composition range set (clamped into the text).
    pub fn with_composition(mut self, composition: Option<TextRange>) -> Self {
        self.composition = composition.map(|range| clamp_range(&self.text, range));
        self
    }

    /// Returns a copy carrying `text` while keeping this value's selection and
    /// composition, clamped into the new text.
    pub fn copy_with_text(&self, text: impl Into<String>) -> Self {
        let text = text.into();
        let selection = clamp_range(&text, self.selection);
        let composition = self.composition.map(|range| clamp_range(&text, range));
        Self {
            text,
            selection,
            composition,
        }
    }

    /// Clamps a caller-built value so both ranges lie inside the text.
    pub fn coerced(mut self) -> Self {
        self.selection = clamp_range(&self.text, self.selection);
        self.composition = self.composition.map(|range| clamp_range(&self.text, range));
        self
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Returns true when both ranges lie inside the text.
    pub fn ranges_valid(&self) -> bool {
        let len = self.text.len();
        self.selection.is_within(len) && self.composition.map_or(true, |c| c.is_within(len))
    }
}

/// Coerces `range` into `[0, text.len()]` and moves each end back to the
/// nearest character boundary.
fn clamp_range(text: &str, range: TextRange) -> TextRange {
    let coerced = range.coerce_in(text.len());
    TextRange::new(
        floor_char_boundary(text, coerced.start),
        floor_char_boundary(text, coerced.end),
    )
}

fn floor_char_boundary(text: &str, index: usize) -> usize {
    (0..=index)
        .rev()
        .find(|&i| text.is_char_boundary(i))
        .unwrap_or(0)
}
