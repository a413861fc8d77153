//! The worked scenarios this encoder/decoder pair was designed against.
//!
//! Each test pins an exact byte sequence rather than a round-trip, since
//! round-tripping alone would not catch the encoder picking a
//! differently-shaped-but-equivalent encoding.

use crate::codec::float24::write_float24;
use crate::format::decoder::decode_icon;
use crate::format::encoder::encode_icon;
use crate::icon::affine::Affine;
use crate::icon::path::{ControlPoint, VectorPath};
use crate::icon::shape::Shape;
use crate::icon::style::{Gradient, GradientKind, GradientStop, Rgba, Style};
use crate::icon::Icon;

/// S1: one opaque red solid style, one 2-point horizontal line path
/// `(0,0)` to `(10,0)`, one shape referencing both.
#[test]
fn s1_solid_style_and_horizontal_line_path() {
	let mut icon = Icon::new();
	icon.styles.push(Style::Solid(Rgba::new(255, 0, 0, 255)));
	icon.paths.push(VectorPath::new(
		vec![ControlPoint::corner((0.0, 0.0)), ControlPoint::corner((10.0, 0.0))],
		false,
	));
	let mut shape = Shape::new(0);
	shape.paths.push(0);
	icon.shapes.push(shape);

	let bytes = encode_icon(&icon).expect("encode");
	// NO_CURVES has no command byte at all: just flags, point count, then
	// one narrow coord pair per point. point (0,0) -> coord bytes 0x20,
	// 0x20; point (10,0) -> 0x2A, 0x20.
	#[rustfmt::skip]
	let expected = vec![
		0x6E, 0x63, 0x69, 0x66, // magic
		1, 3, 255, 0, 0,        // 1 style: colorNoAlpha, r=255 g=0 b=0
		1, 4, 2, 0x20, 0x20, 0x2A, 0x20, // 1 path: flags=NO_CURVES, 2 points, (x0,y0),(x1,y1)
		1, 10, 0, 1, 0, 0,      // 1 shape: type, style idx, path count, path idx, flags
	];
	assert_eq!(bytes, expected);

	let decoded = decode_icon(&bytes).expect("decode");
	assert_eq!(decoded, icon);
}

/// S2: a linear gradient from opaque black to opaque white, identity
/// transform — both stops collapse to the gray/no-alpha wire form.
#[test]
fn s2_grayscale_linear_gradient() {
	let mut icon = Icon::new();
	icon.styles.push(Style::Gradient(Gradient {
		kind: GradientKind::Linear,
		transform: Affine::IDENTITY,
		stops: vec![
			GradientStop { offset: 0x00, color: Rgba::new(0, 0, 0, 255) },
			GradientStop { offset: 0xFF, color: Rgba::new(255, 255, 255, 255) },
		],
	}));

	let bytes = encode_icon(&icon).expect("encode");
	#[rustfmt::skip]
	let expected = vec![
		0x6E, 0x63, 0x69, 0x66,
		1, 4,             // 1 style, tag=gradient
		0, 6, 2,          // kind=linear, flags=GRAYS|NO_ALPHA, 2 stops
		0x00, 0,          // stop 0: offset 0x00, r=0
		0xFF, 255,        // stop 1: offset 0xFF, r=255
		0, 0,             // 0 paths, 0 shapes
	];
	assert_eq!(bytes, expected);

	let decoded = decode_icon(&bytes).expect("decode");
	assert_eq!(decoded, icon);
}

/// S3: a closed axis-aligned unit square starting at the origin. Opcode
/// selection is seeded at `(0.0, 0.0)` rather than the path's own first
/// point (see [`crate::codec::path_commands::write_path_commands`]), so
/// the first point here lands on `V_LINE` rather than the generic `LINE`
/// opcode, since it happens to share the seed's x coordinate.
#[test]
fn s3_closed_unit_square_uses_command_stream() {
	let mut icon = Icon::new();
	icon.paths.push(VectorPath::new(
		vec![
			ControlPoint::corner((0.0, 0.0)),
			ControlPoint::corner((1.0, 0.0)),
			ControlPoint::corner((1.0, 1.0)),
			ControlPoint::corner((0.0, 1.0)),
		],
		true,
	));

	let bytes = encode_icon(&icon).expect("encode");
	// flags = CLOSED | NO_CURVES = 1 | 4 = 5 (no point carries curve
	// handles, so the curve-free flag applies even though the command
	// stream is used); point_count = 4.
	// Opcodes, low-to-high 2 bits per point, each checked against the
	// *previous point* (seeded at the origin): point1 (0,0) shares x
	// with the seed -> V_LINE; point2 (1,0) shares y with point1 ->
	// H_LINE; point3 (1,1) shares x with point2 -> V_LINE; point4 (0,1)
	// shares y with point3 -> H_LINE. byte = 1 | 0<<2 | 1<<4 | 0<<6 = 0x11.
	let coord = |v: f32| ((v + 32.0) as u8);
	#[rustfmt::skip]
	let expected = vec![
		0x6E, 0x63, 0x69, 0x66,
		0,                            // 0 styles
		1, 5, 4, 0x11,                // 1 path: flags, point count, command byte
		coord(0.0), coord(1.0), coord(1.0), coord(0.0), // payload: y,x,y,x
		0,                            // 0 shapes
	];
	assert_eq!(bytes, expected);

	let decoded = decode_icon(&bytes).expect("decode");
	assert_eq!(decoded, icon);
}

/// S4: a shape with a pure translation of `(5, 7)` and no other
/// transform.
#[test]
fn s4_pure_translation_shape() {
	let mut icon = Icon::new();
	icon.styles.push(Style::Solid(Rgba::new(0, 0, 0, 255)));
	let mut shape = Shape::new(0);
	shape.transform = Affine::new(1.0, 0.0, 0.0, 1.0, 5.0, 7.0);
	icon.shapes.push(shape);

	let bytes = encode_icon(&icon).expect("encode");
	#[rustfmt::skip]
	let expected = vec![
		0x6E, 0x63, 0x69, 0x66,
		1, 1, 0,          // 1 style: grayNoAlpha, r=0
		0,                // 0 paths
		1, 10, 0, 0, 32, 37, 39, // 1 shape: type, style, path count=0, flags=TRANSLATION, tx=37 ty=39
	];
	assert_eq!(bytes, expected);

	let decoded = decode_icon(&bytes).expect("decode");
	assert_eq!(decoded, icon);
}

/// S5: a shape with a non-default visibility scale of `(0.0, 3.0)`.
///
/// The worked arithmetic in the wire-format description rounds
/// `3 * 63.75 + 0.5` up to `192`; truncating (the actual `as u8` cast,
/// matching a C-style narrowing conversion) yields `191` since
/// `3 * 63.75 + 0.5 == 191.75`. This encoder truncates, so `191` is what
/// actually appears on the wire.
#[test]
fn s5_custom_visibility_scale_truncates() {
	let mut icon = Icon::new();
	icon.styles.push(Style::Solid(Rgba::new(0, 0, 0, 255)));
	let mut shape = Shape::new(0);
	shape.max_visibility_scale = 3.0;
	icon.shapes.push(shape);

	let bytes = encode_icon(&icon).expect("encode");
	#[rustfmt::skip]
	let expected = vec![
		0x6E, 0x63, 0x69, 0x66,
		1, 1, 0,
		0,
		1, 10, 0, 0, 8, 0, 191, // flags=LOD_SCALE, min byte=0, max byte=191
	];
	assert_eq!(bytes, expected);

	let decoded = decode_icon(&bytes).expect("decode");
	assert_eq!(decoded, icon);
}

/// S6: `float24` round-trip of `1.0`.
#[test]
fn s6_float24_one_encodes_to_fixed_bytes() {
	let mut buf = Vec::new();
	write_float24(&mut buf, 1.0);
	assert_eq!(buf, vec![0x40, 0x00, 0x00]);
}
