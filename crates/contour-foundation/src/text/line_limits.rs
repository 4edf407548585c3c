//! Line limit configuration for text fields.

/// Line limit configuration for text fields.
///
/// `SingleLine` blocks newlines (pasted newlines become spaces) and shows
/// exactly one line. `MultiLine` allows newlines and grows up to `max_lines`
/// visible lines before the host scrolls.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextFieldLineLimits {
    /// Single line input - no newlines allowed, horizontal scrolling.
    SingleLine,
    /// Multi-line input with a cap on visible lines.
    MultiLine {
        /// Maximum visible lines before scrolling, at least 1.
        max_lines: usize,
    },
}

impl TextFieldLineLimits {
    /// Default multi-line with no practical cap.
    pub const DEFAULT: Self = Self::MultiLine {
        max_lines: usize::MAX,
    };

    /// Builds limits from the `single_line` flag and `max_lines` setting.
    /// Single-line mode forces one visible line.
    pub fn from_options(single_line: bool, max_lines: usize) -> Self {
        if single_line {
            Self::SingleLine
        } else {
            Self::MultiLine { max_lines }
        }
    }

    /// Returns true if this is single-line mode.
    #[inline]
    pub fn is_single_line(&self) -> bool {
        matches!(self, Self::SingleLine)
    }

    /// Returns the maximum number of visible lines (1 for SingleLine).
    pub fn max_lines(&self) -> usize {
        match self {
            Self::SingleLine => 1,
            Self::MultiLine { max_lines } => *max_lines,
        }
    }
}

impl Default for TextFieldLineLimits {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Filters text for single-line mode by replacing newlines with spaces.
///
/// ```
/// use contour_foundation::text::filter_for_single_line;
///
/// assert_eq!(filter_for_single_line("hello\nworld"), "hello world");
/// ```
pub fn filter_for_single_line(text: &str) -> String {
    text.replace('\n', " ")
}
