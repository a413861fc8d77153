//! The in-memory icon data model: styles, paths, shapes, transformers,
//! and the affine transforms shared across them.

pub mod affine;
pub mod error;
#[allow(clippy::module_inception)]
mod icon;
pub mod path;
pub mod shape;
pub mod style;
pub mod transformer;

pub use affine::Affine;
pub use error::{HvifError, ImportWarning};
pub use icon::{Icon, MAX_ENTRIES};
pub use path::{ControlPoint, VectorPath};
pub use shape::{DEFAULT_MAX_VISIBILITY_SCALE, DEFAULT_MIN_VISIBILITY_SCALE, Shape};
pub use style::{Gradient, GradientKind, GradientStop, Rgba, Style};
pub use transformer::{Contour, LineCap, LineJoin, Stroke, Transformer};
