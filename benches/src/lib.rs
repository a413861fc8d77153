//! Benchmark helper utilities for `hvif-rs`.
//!
//! This module generates synthetic icons of varying complexity so the
//! codec benchmarks exercise every wire-format branch (gray/color styles,
//! gradients, the 2-bit command stream vs. the plain curve form, shape
//! transformers) without depending on any external fixture files.

use hvif_types::icon::affine::Affine;
use hvif_types::icon::path::{ControlPoint, VectorPath};
use hvif_types::icon::shape::Shape;
use hvif_types::icon::style::{Gradient, GradientKind, GradientStop, Rgba, Style};
use hvif_types::icon::transformer::{Contour, LineJoin, Transformer};
use hvif_types::icon::Icon;

/// Builds an axis-aligned unit-step star-shaped path with `point_count`
/// points, alternating between straight corners (favoring the 2-bit
/// command stream) and curved handles (forcing the plain form), so the
/// encoder's per-path size estimate (spec.md §4.5) has real work to do.
fn generate_path(point_count: usize, with_curves: bool) -> VectorPath {
	let mut points = Vec::with_capacity(point_count);
	let mut last = (0.0_f32, 0.0_f32);

	for i in 0..point_count {
		let x = (i as f32 * 3.0) % 64.0;
		let y = if i % 2 == 0 { last.1 } else { last.0 };

		let point = (x, y);
		let cp = if with_curves && i % 5 == 0 {
			ControlPoint {
				point,
				point_in: (point.0 - 2.0, point.1 - 2.0),
				point_out: (point.0 + 2.0, point.1 + 2.0),
				connected: false,
			}
		} else {
			ControlPoint::corner(point)
		};

		last = point;
		points.push(cp);
	}

	VectorPath::new(points, true)
}

/// Builds an icon with `shape_count` shapes, each owning one path of
/// `points_per_path` control points and referencing one of a handful of
/// solid/gradient styles, with transformers attached to every third shape.
#[must_use]
pub fn generate_icon(shape_count: usize, points_per_path: usize) -> Icon {
	let mut icon = Icon::new();

	icon.styles.push(Style::Solid(Rgba::new(200, 40, 40, 255)));
	icon.styles.push(Style::Solid(Rgba::new(10, 10, 10, 128)));
	icon.styles.push(Style::Gradient(Gradient {
		kind: GradientKind::Linear,
		transform: Affine::IDENTITY,
		stops: vec![
			GradientStop { offset: 0, color: Rgba::new(0, 0, 0, 255) },
			GradientStop { offset: 128, color: Rgba::new(128, 0, 255, 200) },
			GradientStop { offset: 255, color: Rgba::new(255, 255, 255, 255) },
		],
	}));

	for i in 0..shape_count {
		let path_index = icon.paths.len();
		icon.paths.push(generate_path(points_per_path, i % 2 == 0));

		let mut shape = Shape::new(i % icon.styles.len());
		shape.paths.push(path_index);
		shape.transform = Affine::new(1.0, 0.0, 0.0, 1.0, (i % 16) as f64, (i % 9) as f64);

		if i % 3 == 0 {
			shape.transformers.push(Transformer::Contour(Contour {
				width: 2,
				line_join: LineJoin::Round,
				miter_limit: 4,
			}));
		}

		icon.shapes.push(shape);
	}

	icon
}

/// Representative icon sizes, loosely modeled on real Haiku app icons:
/// a small UI glyph, a typical multi-shape app icon, and a large,
/// many-shape icon exercising the 255-entry ceilings.
pub mod sizes {
	/// A tiny single-shape glyph: 1 shape, 8-point path.
	pub const TINY: (usize, usize) = (1, 8);
	/// A typical small app icon: 8 shapes, 16-point paths.
	pub const SMALL: (usize, usize) = (8, 16);
	/// A moderately complex icon: 32 shapes, 32-point paths.
	pub const MEDIUM: (usize, usize) = (32, 32);
	/// A large, near-maximal icon: 200 shapes, 64-point paths.
	pub const LARGE: (usize, usize) = (200, 64);
}

#[cfg(test)]
mod tests {
	use super::*;
	use hvif_types::format::{decode_icon, encode_icon};

	#[test]
	fn generated_icons_round_trip() {
		for &(shapes, points) in &[sizes::TINY, sizes::SMALL, sizes::MEDIUM] {
			let icon = generate_icon(shapes, points);
			let bytes = encode_icon(&icon).expect("encode");
			let decoded = decode_icon(&bytes).expect("decode");
			assert_eq!(decoded.shapes.len(), icon.shapes.len());
			assert_eq!(decoded.paths.len(), icon.paths.len());
		}
	}

	#[test]
	fn sizes_stay_within_encoder_limits() {
		assert!(sizes::LARGE.0 <= 255);
		assert!(sizes::LARGE.1 <= 255);
	}
}
