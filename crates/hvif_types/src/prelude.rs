//! Prelude module for `hvif_types`.
//!
//! This module provides a convenient way to import the icon data model, the
//! flat format codec, and the archive reader in one `use`.
//!
//! # Examples
//!
//! ```no_run
//! use hvif_types::prelude::*;
//!
//! let icon = Icon::new();
//! let bytes = encode_icon(&icon).expect("encode");
//! ```

// Icon data model
#[doc(inline)]
pub use crate::icon::{
	Affine, Contour, ControlPoint, Gradient, GradientKind, GradientStop, HvifError, ImportWarning, LineCap, LineJoin,
	Rgba, Shape, Stroke, Style, Transformer, VectorPath, Icon, DEFAULT_MAX_VISIBILITY_SCALE, DEFAULT_MIN_VISIBILITY_SCALE,
	MAX_ENTRIES,
};

// Flat format codec
#[doc(inline)]
pub use crate::format::{decode_icon, encode_icon};

// Archive reader
#[doc(inline)]
pub use crate::archive::{import_icon, Archive, FieldValue};

// Re-export the submodules for advanced usage
#[doc(inline)]
pub use crate::{archive, codec, format, icon};
