//! Shapes: an assignment of paths to a style, with an affine transform
//! and optional per-shape transformers.

use crate::icon::affine::Affine;
use crate::icon::transformer::Transformer;

/// The default minimum visibility scale when not set on disk or in an
/// archive (spec.md §4.4).
pub const DEFAULT_MIN_VISIBILITY_SCALE: f32 = 0.0;
/// The default maximum visibility scale when not set on disk or in an
/// archive (spec.md §4.4).
pub const DEFAULT_MAX_VISIBILITY_SCALE: f32 = 4.0;

/// A shape: a style reference, an ordered list of path references, a
/// transform, and a stack of transformers.
///
/// `style` and the entries of `paths` are weak references — positions
/// into the owning [`crate::icon::Icon`]'s `styles`/`paths` vectors, not
/// ownership (spec.md §3's "Ownership" paragraph).
#[derive(Debug, Clone, PartialEq)]
pub struct Shape {
	/// Index into the owning icon's `styles`.
	pub style: usize,
	/// Indices into the owning icon's `paths`, in draw order.
	pub paths: Vec<usize>,
	/// Affine transform applied to this shape's geometry.
	pub transform: Affine,
	/// Whether pixel-grid hinting is enabled for this shape.
	pub hinting: bool,
	/// Minimum scale at which this shape is visible, in `[0.0, 4.0]`.
	pub min_visibility_scale: f32,
	/// Maximum scale at which this shape is visible, in `[0.0, 4.0]`.
	pub max_visibility_scale: f32,
	/// Ordered post-processing transformers, exclusively owned by this
	/// shape.
	pub transformers: Vec<Transformer>,
}

impl Shape {
	/// Builds a shape referencing `style` and no paths, identity
	/// transform, hinting off, default visibility scale, and no
	/// transformers.
	#[must_use]
	pub fn new(style: usize) -> Self {
		Self {
			style,
			paths: Vec::new(),
			transform: Affine::IDENTITY,
			hinting: false,
			min_visibility_scale: DEFAULT_MIN_VISIBILITY_SCALE,
			max_visibility_scale: DEFAULT_MAX_VISIBILITY_SCALE,
			transformers: Vec::new(),
		}
	}

	/// Whether the visibility scale differs from the wire-format
	/// defaults, the predicate that decides whether `LOD_SCALE` is
	/// emitted on encode.
	#[must_use]
	pub fn has_custom_visibility_scale(&self) -> bool {
		self.min_visibility_scale != DEFAULT_MIN_VISIBILITY_SCALE
			|| self.max_visibility_scale != DEFAULT_MAX_VISIBILITY_SCALE
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn new_shape_has_default_visibility_scale() {
		let shape = Shape::new(0);
		assert!(!shape.has_custom_visibility_scale());
	}

	#[test]
	fn changed_visibility_scale_is_flagged() {
		let mut shape = Shape::new(0);
		shape.max_visibility_scale = 3.0;
		assert!(shape.has_custom_visibility_scale());
	}
}
