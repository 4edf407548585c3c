//! Layout contracts & policies for Contour

mod alignment;
mod constraints;
mod direction;
mod measure;
mod padding;

pub use alignment::*;
pub use constraints::*;
pub use direction::*;
pub use measure::*;
pub use padding::*;

pub mod prelude {
    pub use crate::alignment::VerticalAlignment;
    pub use crate::constraints::Constraints;
    pub use crate::measure::{
        Measurable, MeasurePolicy, MeasureResult, MeasureScope, Placeable, Placement,
    };
    pub use crate::direction::{LayoutContext, LayoutDirection};
}
