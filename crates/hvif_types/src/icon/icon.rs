//! The top-level `Icon`: an owned graph of styles, paths, and shapes.

use crate::icon::path::VectorPath;
use crate::icon::shape::Shape;
use crate::icon::style::Style;

/// The maximum number of entries the flat format can represent in any of
/// `styles`, `paths`, or `shapes` (spec.md §4.5: each count is a single
/// byte).
pub const MAX_ENTRIES: usize = 255;

/// An icon: an ordered graph of styles, paths, and shapes.
///
/// Shapes refer to one style and zero-or-more paths by position in
/// `styles`/`paths`; those references are resolved indices, not
/// ownership. Declaration order here (`styles`, `paths`, `shapes`) is
/// the reverse of the reference direction, so the default `Vec` drop
/// order already tears shapes down first, then paths, then styles,
/// matching spec.md §3's lifecycle note without a bespoke teardown
/// method.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Icon {
	/// Styles referenced by shapes, in on-disk order.
	pub styles: Vec<Style>,
	/// Paths referenced by shapes, in on-disk order.
	pub paths: Vec<VectorPath>,
	/// Shapes, in draw order.
	pub shapes: Vec<Shape>,
}

impl Icon {
	/// Builds an empty icon.
	#[must_use]
	pub fn new() -> Self {
		Self::default()
	}
}
