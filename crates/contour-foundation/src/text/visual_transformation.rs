//! Visual transformations map the stored text to the text that is displayed.

use std::fmt;

/// How offsets in the stored text relate to offsets in the displayed text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OffsetMapping {
    /// Displayed text has the same byte layout as the stored text.
    Identity,
    /// Every character is replaced by `mask`.
    Masked { mask: char },
}

impl OffsetMapping {
    /// Maps a byte offset in `original` to the displayed text.
    pub fn original_to_transformed(&self, original: &str, offset: usize) -> usize {
        match self {
            OffsetMapping::Identity => offset,
            OffsetMapping::Masked { mask } => {
                let chars = original
                    .char_indices()
                    .take_while(|(index, _)| *index < offset)
                    .count();
                chars * mask.len_utf8()
            }
        }
    }

    /// Maps a byte offset in the displayed text back to `original`.
    pub fn transformed_to_original(&self, original: &str, offset: usize) -> usize {
        match self {
            OffsetMapping::Identity => offset,
            OffsetMapping::Masked { mask } => {
                let chars = offset / mask.len_utf8();
                original
                    .char_indices()
                    .nth(chars)
                    .map_or(original.len(), |(index, _)| index)
            }
        }
    }
}

/// Displayed text produced by a [`VisualTransformation`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransformedText {
    pub text: String,
    pub offset_mapping: OffsetMapping,
}

impl TransformedText {
    pub fn identity(text: &str) -> Self {
        Self {
            text: text.to_owned(),
            offset_mapping: OffsetMapping::Identity,
        }
    }
}

/// Maps stored text to the text that is shown, e.g. to mask passwords.
///
/// The stored value is never modified; emptiness checks and layout use the
/// transformed text.
pub trait VisualTransformation: fmt::Debug {
    fn filter(&self, text: &str) -> TransformedText;
}

/// Shows the text unchanged.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NoTransformation;

impl VisualTransformation for NoTransformation {
    fn filter(&self, text: &str) -> TransformedText {
        TransformedText::identity(text)
    }
}

/// Replaces every character with a mask character.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PasswordVisualTransformation {
    pub mask: char,
}

impl Default for PasswordVisualTransformation {
    fn default() -> Self {
        Self { mask: '\u{2022}' }
    }
}

impl VisualTransformation for PasswordVisualTransformation {
    fn filter(&self, text: &str) -> TransformedText {
        TransformedText {
            text: std::iter::repeat(self.mask)
                .take(text.chars().count())
                .collect(),
            offset_mapping: OffsetMapping::Masked { mask: self.mask },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn password_masks_each_character() {
        let transformed = PasswordVisualTransformation::default().filter("héllo");
        assert_eq!(transformed.text, "•••••");
    }

    #[test]
    fn masked_offsets_round_trip() {
        let original = "héllo";
        let mapping = OffsetMapping::Masked { mask: '•' };
        // byte 3 in the original is the start of the first 'l' (third char)
        let displayed = mapping.original_to_transformed(original, 3);
        assert_eq!(displayed, 2 * '•'.len_utf8());
        assert_eq!(mapping.transformed_to_original(original, displayed), 3);
        assert_eq!(
            mapping.transformed_to_original(original, 5 * '•'.len_utf8()),
            original.len()
        );
    }

    #[test]
    fn identity_keeps_text() {
        let transformed = NoTransformation.filter("abc");
        assert_eq!(transformed, TransformedText::identity("abc"));
        assert_eq!(transformed.offset_mapping.original_to_transformed("abc", 2), 2);
    }
}
