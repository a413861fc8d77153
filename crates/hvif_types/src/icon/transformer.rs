//! Per-shape post-processing transformers.

/// Line join style, shared by [`Contour`] and [`Stroke`].
///
/// Grounded on AGG's `agg::line_join_e` as referenced from
/// `transform/Transformers.h`; unrecognized on-disk values are kept
/// rather than rejected since the flat format has no validation rule
/// for them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineJoin {
	/// Miter join.
	Miter,
	/// Round join.
	Round,
	/// Bevel join.
	Bevel,
	/// An on-disk value this implementation does not recognize.
	Other(u8),
}

impl LineJoin {
	/// Decodes the low nibble / full byte on-disk representation.
	#[must_use]
	pub fn from_tag(tag: u8) -> Self {
		match tag {
			0 => Self::Miter,
			1 => Self::Round,
			2 => Self::Bevel,
			other => Self::Other(other),
		}
	}

	/// Encodes back to the on-disk tag.
	#[must_use]
	pub fn to_tag(self) -> u8 {
		match self {
			Self::Miter => 0,
			Self::Round => 1,
			Self::Bevel => 2,
			Self::Other(v) => v,
		}
	}
}

/// Line cap style, used by [`Stroke`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineCap {
	/// Flat cap, flush with the endpoint.
	Butt,
	/// Rounded cap.
	Round,
	/// Square cap, projecting past the endpoint.
	Square,
	/// An on-disk value this implementation does not recognize.
	Other(u8),
}

impl LineCap {
	/// Decodes the high-nibble on-disk representation.
	#[must_use]
	pub fn from_tag(tag: u8) -> Self {
		match tag {
			0 => Self::Butt,
			1 => Self::Round,
			2 => Self::Square,
			other => Self::Other(other),
		}
	}

	/// Encodes back to the on-disk tag.
	#[must_use]
	pub fn to_tag(self) -> u8 {
		match self {
			Self::Butt => 0,
			Self::Round => 1,
			Self::Square => 2,
			Self::Other(v) => v,
		}
	}
}

/// An outline drawn around a shape's filled region.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Contour {
	/// Signed contour width.
	pub width: i8,
	/// Corner join style.
	pub line_join: LineJoin,
	/// Limit on miter-join spike length.
	pub miter_limit: u8,
}

/// A stroked outline, distinct from [`Contour`] in also carrying a cap
/// style.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Stroke {
	/// Signed stroke width.
	pub width: i8,
	/// Corner join style.
	pub line_join: LineJoin,
	/// End cap style.
	pub line_cap: LineCap,
	/// Limit on miter-join spike length.
	pub miter_limit: u8,
}

/// A per-shape post-processing stage.
///
/// Modeled as a closed tagged sum rather than a class hierarchy, per
/// spec.md §9's explicit design note: encode/decode/clone become total
/// functions over the sum instead of virtual dispatch.
#[derive(Debug, Clone, PartialEq)]
pub enum Transformer {
	/// A 2-D affine transform, stored as 6 doubles.
	Affine([f64; 6]),
	/// A perspective transform, stored as a 3x3 matrix (9 doubles).
	Perspective([f64; 9]),
	/// A contour outline.
	Contour(Contour),
	/// A stroked outline.
	Stroke(Stroke),
}
