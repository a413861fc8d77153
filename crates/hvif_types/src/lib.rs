//! This crate provides the core data model and codec for the Haiku Vector
//! Icon Format (HVIF).
//!
//! # Formats
//!
//! - **Flat icon format**: the compact binary layout icons are stored and
//!   rendered from ([`format`]).
//! - **Archive format**: the tagged-field authoring format icon editors
//!   read from disk resources ([`archive`]).
//!
//! # Examples
//!
//! ```rust
//! use hvif_types::{Icon, Shape, Style, Rgba, VectorPath, ControlPoint};
//! use hvif_types::format::{encode_icon, decode_icon};
//!
//! let mut icon = Icon::new();
//! icon.styles.push(Style::Solid(Rgba::new(255, 0, 0, 255)));
//! icon.paths.push(VectorPath::new(
//!     vec![ControlPoint::corner((0.0, 0.0)), ControlPoint::corner((10.0, 0.0))],
//!     false,
//! ));
//! let mut shape = Shape::new(0);
//! shape.paths.push(0);
//! icon.shapes.push(shape);
//!
//! let bytes = encode_icon(&icon).expect("encode");
//! let roundtripped = decode_icon(&bytes).expect("decode");
//! assert_eq!(roundtripped, icon);
//! ```

pub mod archive;
pub mod codec;
pub mod format;
pub mod icon;
pub mod prelude;

pub use icon::{
	Affine, Contour, ControlPoint, Gradient, GradientKind, GradientStop, HvifError, ImportWarning, LineCap, LineJoin,
	Rgba, Shape, Stroke, Style, Transformer, VectorPath, Icon, DEFAULT_MAX_VISIBILITY_SCALE, DEFAULT_MIN_VISIBILITY_SCALE,
	MAX_ENTRIES,
};
