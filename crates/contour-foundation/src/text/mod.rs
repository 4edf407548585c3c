//! Text input module for editable text fields.
//!
//! # Core Types
//!
//! - [`TextRange`] - Represents cursor position or text selection range
//! - [`TextFieldValue`] - Immutable snapshot of text, selection and composition
//! - [`TextFieldLineLimits`] - Controls single-line vs multi-line input
//! - [`VisualTransformation`] - Maps stored text to displayed text
//! - [`KeyboardOptions`] - Keyboard type and IME action requested from the host

mod keyboard;
mod line_limits;
mod range;
mod value;
mod visual_transformation;

pub use keyboard::{ImeAction, KeyboardOptions, KeyboardType};
pub use line_limits::{filter_for_single_line, TextFieldLineLimits};
pub use range::TextRange;
pub use value::TextFieldValue;
pub use visual_transformation::{
    NoTransformation, OffsetMapping, PasswordVisualTransformation, TransformedText,
    VisualTransformation,
};
