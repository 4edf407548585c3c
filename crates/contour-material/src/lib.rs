//! Material outlined text field for Contour.
//!
//! [`OutlinedTextField`] combines four pieces:
//!
//! - [`transition`]: the focus/content phase machine animating the label,
//!   border and placeholder,
//! - [`layout`]: the slot measurement policy,
//! - [`border`]: the outline painter with its label gap,
//! - [`colors`]: the color strategy.

pub mod border;
pub mod colors;
pub mod defaults;
mod error;
pub mod layout;
mod options;
mod text_field;
pub mod transition;

pub use border::{draw_outlined_border, outline_path, OutlinedBorderParams};
pub use colors::{ColorState, DefaultTextFieldColors, ResolvedColors, TextFieldColors};
pub use error::TextFieldError;
pub use layout::{OutlinedTextFieldMeasurePolicy, TextFieldMeasureResult, TextFieldSlots};
pub use options::{
    ImeActionHandler, SlotDecoration, SlotRenderer, TextFieldOptions, TextFieldStyle,
};
pub use text_field::{
    OutlinedTextField, PlainTextValue, RichTextValue, TextFieldFrame, TextFieldValueHolder,
};
pub use transition::{InputPhase, InputTransition, TransitionTargets, TransitionValues};

pub mod prelude {
    pub use crate::options::{SlotDecoration, TextFieldOptions};
    pub use crate::text_field::{OutlinedTextField, TextFieldFrame};
    pub use crate::transition::InputPhase;
    pub use contour_foundation::text::{TextFieldValue, TextRange};
    pub use contour_foundation::InteractionSource;
}
