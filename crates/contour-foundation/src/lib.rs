//! Foundation types for Contour text inputs.
//!
//! Holds the editable text model and the small pieces of input plumbing a
//! text field needs from its host: keyboard configuration, visual
//! transformations and interaction (focus) observation.

pub mod interaction;
pub mod text;

pub use interaction::{Interaction, InteractionSource};
