//! Vector paths: ordered sequences of cubic Bézier control points.

/// A single control point: its position plus incoming/outgoing Bézier
/// handles, and whether it is "connected" to its neighbors (an
/// authoring-archive-only attribute; see [`crate::codec::path_commands`]).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ControlPoint {
	/// The point itself.
	pub point: (f32, f32),
	/// Incoming Bézier handle. Equal to `point` for a corner.
	pub point_in: (f32, f32),
	/// Outgoing Bézier handle. Equal to `point` for a corner.
	pub point_out: (f32, f32),
	/// Whether the handles are locked together in the authoring tool.
	/// Always `false` for points reconstructed from the flat command
	/// stream (spec.md §4.3).
	pub connected: bool,
}

impl ControlPoint {
	/// Builds a plain corner point: `point_in == point_out == point`,
	/// `connected = false`.
	#[must_use]
	pub fn corner(point: (f32, f32)) -> Self {
		Self {
			point,
			point_in: point,
			point_out: point,
			connected: false,
		}
	}

	/// Whether this point carries no Bézier curvature (a "straight"
	/// point, per spec.md §3).
	#[must_use]
	pub fn is_straight(&self) -> bool {
		self.point == self.point_in && self.point == self.point_out
	}
}

/// An ordered sequence of at most 255 control points, plus whether the
/// path is closed.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct VectorPath {
	/// The path's control points, in draw order.
	pub points: Vec<ControlPoint>,
	/// Whether the path's last point connects back to its first.
	pub closed: bool,
}

impl VectorPath {
	/// Builds a path from points and a closed flag.
	#[must_use]
	pub fn new(points: Vec<ControlPoint>, closed: bool) -> Self {
		Self { points, closed }
	}
}
