//! Style: a solid color or gradient paint, referenced by shapes.

use crate::icon::affine::Affine;

/// Four 8-bit color channels. On-disk byte order for the packed `rgba`
/// style variant matches this struct's field order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Rgba {
	/// Red channel.
	pub r: u8,
	/// Green channel.
	pub g: u8,
	/// Blue channel.
	pub b: u8,
	/// Alpha channel.
	pub a: u8,
}

impl Rgba {
	/// Builds a color from channels.
	#[must_use]
	pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
		Self { r, g, b, a }
	}

	/// Whether `r == g == b`, the predicate that selects the gray style
	/// variants on encode.
	#[must_use]
	pub fn is_gray(&self) -> bool {
		self.r == self.g && self.g == self.b
	}

	/// Whether this color is fully opaque.
	#[must_use]
	pub fn is_opaque(&self) -> bool {
		self.a == 255
	}

	/// Packs the color as a little-endian `u32`, `r` in the low byte.
	#[must_use]
	pub fn to_packed(self) -> u32 {
		u32::from(self.r) | (u32::from(self.g) << 8) | (u32::from(self.b) << 16) | (u32::from(self.a) << 24)
	}

	/// Unpacks a little-endian `u32` produced by [`Rgba::to_packed`].
	#[must_use]
	pub fn from_packed(value: u32) -> Self {
		Self {
			r: (value & 0xff) as u8,
			g: ((value >> 8) & 0xff) as u8,
			b: ((value >> 16) & 0xff) as u8,
			a: ((value >> 24) & 0xff) as u8,
		}
	}
}

/// The shape of a gradient's color progression.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum GradientKind {
	/// A straight-line progression along the transform's x axis.
	Linear = 0,
	/// Concentric circles.
	Circular = 1,
	/// Concentric diamonds (Chebyshev distance).
	Diamond = 2,
	/// A sweep around the center.
	Conic = 3,
	/// A circular gradient with an off-center focal point.
	RadialFocus = 4,
	/// Raw (x, y) progression, used for procedurally computed gradients.
	Xy = 5,
}

impl GradientKind {
	/// Maps the on-disk tag byte to a [`GradientKind`].
	#[must_use]
	pub fn from_tag(tag: u8) -> Option<Self> {
		match tag {
			0 => Some(Self::Linear),
			1 => Some(Self::Circular),
			2 => Some(Self::Diamond),
			3 => Some(Self::Conic),
			4 => Some(Self::RadialFocus),
			5 => Some(Self::Xy),
			_ => None,
		}
	}

	/// Returns the on-disk tag byte.
	#[must_use]
	pub fn to_tag(self) -> u8 {
		self as u8
	}
}

/// A single color stop along a gradient.
///
/// `offset` is stored already quantized to the on-disk 8-bit resolution
/// (1/255ths), matching spec.md §3's "8-bit offset".
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GradientStop {
	/// Position along the gradient, `0..=255`.
	pub offset: u8,
	/// Color at this position.
	pub color: Rgba,
}

/// A gradient paint: a kind, an affine transform, and 1..=255 ordered
/// stops.
#[derive(Debug, Clone, PartialEq)]
pub struct Gradient {
	/// Which progression the gradient follows.
	pub kind: GradientKind,
	/// Affine transform applied to the gradient's coordinate space.
	/// Identity means "no transform" on the wire.
	pub transform: Affine,
	/// Ordered color stops; must contain 1..=255 entries to be valid.
	pub stops: Vec<GradientStop>,
}

impl Gradient {
	/// Whether every stop is gray (`r == g == b`).
	#[must_use]
	pub fn all_gray(&self) -> bool {
		self.stops.iter().all(|s| s.color.is_gray())
	}

	/// Whether every stop is fully opaque.
	#[must_use]
	pub fn all_opaque(&self) -> bool {
		self.stops.iter().all(|s| s.color.is_opaque())
	}
}

/// A style: either a solid color or a gradient.
#[derive(Debug, Clone, PartialEq)]
pub enum Style {
	/// A flat solid color.
	Solid(Rgba),
	/// A gradient paint.
	Gradient(Gradient),
}
