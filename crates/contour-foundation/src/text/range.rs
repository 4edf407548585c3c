//! Selection and composition ranges.

/// A span of text between two UTF-8 byte offsets.
///
/// `start == end` is a caret. `start` may exceed `end` for a selection made
/// backwards.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default, Hash)]
pub struct TextRange {
    pub start: usize,
    pub end: usize,
}

impl TextRange {
    pub const fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    /// A caret at `position`.
    pub const fn cursor(position: usize) -> Self {
        Self {
            start: position,
            end: position,
        }
    }

    pub const fn collapsed(&self) -> bool {
        self.start == self.end
    }

    /// Clamps both ends into `[0, max]`.
    pub fn coerce_in(&self, max: usize) -> Self {
        Self {
            start: self.start.min(max),
            end: self.end.min(max),
        }
    }

    /// Returns true if both ends lie within `[0, len]`.
    pub fn is_within(&self, len: usize) -> bool {
        self.start <= len && self.end <= len
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cursor_is_collapsed() {
        assert!(TextRange::cursor(5).collapsed());
        assert!(!TextRange::new(7, 2).collapsed());
    }

    #[test]
    fn coerce_in_clamps_each_end() {
        let coerced = TextRange::new(5, 100).coerce_in(10);
        assert_eq!(coerced, TextRange::new(5, 10));
        assert!(coerced.is_within(10));
        assert!(!TextRange::new(0, 11).is_within(10));
    }

    #[test]
    fn coerce_in_keeps_reverse_selection() {
        assert_eq!(TextRange::new(12, 3).coerce_in(8), TextRange::new(8, 3));
    }
}
