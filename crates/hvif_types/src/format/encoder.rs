//! The flat icon encoder (spec.md §4.5): chooses the smallest-byte-count
//! variant for each style, path, and shape record and emits the
//! top-level `magic` / `styles` / `paths` / `shapes` layout.

use crate::codec::buffer::WriteBuffer;
use crate::codec::path_commands::write_path_commands;
use crate::format::constants::{
	GRADIENT_FLAG_GRAYS, GRADIENT_FLAG_NO_ALPHA, GRADIENT_FLAG_TRANSFORM, MAGIC, PATH_FLAG_CLOSED, PATH_FLAG_NO_CURVES,
	PATH_FLAG_USES_COMMANDS, SHAPE_FLAG_HAS_TRANSFORMERS, SHAPE_FLAG_HINTING, SHAPE_FLAG_LOD_SCALE, SHAPE_FLAG_TRANSFORM,
	SHAPE_FLAG_TRANSLATION, SHAPE_TYPE_PATH_SOURCE, STYLE_COLOR, STYLE_COLOR_NO_ALPHA, STYLE_GRADIENT, STYLE_GRAY,
	STYLE_GRAY_NO_ALPHA, TRANSFORMER_AFFINE, TRANSFORMER_CONTOUR, TRANSFORMER_PERSPECTIVE, TRANSFORMER_STROKE,
	VISIBILITY_SCALE_MULTIPLIER,
};
use crate::icon::error::HvifError;
use crate::icon::path::{ControlPoint, VectorPath};
use crate::icon::{Icon, MAX_ENTRIES};
use crate::icon::shape::Shape;
use crate::icon::style::{Gradient, Rgba, Style};
use crate::icon::transformer::Transformer;

fn count_overflow(what: &'static str, count: usize) -> HvifError {
	HvifError::Unsupported {
		what,
		reason: format!("{count} exceeds the maximum of {MAX_ENTRIES}"),
	}
}

fn encode_signed_width(width: i8) -> u8 {
	(i16::from(width) + 128) as u8
}

fn encode_visibility_scale(value: f32) -> u8 {
	(value * VISIBILITY_SCALE_MULTIPLIER + 0.5) as u8
}

fn style_tag(rgba: Rgba) -> u8 {
	match (rgba.is_gray(), rgba.is_opaque()) {
		(true, true) => STYLE_GRAY_NO_ALPHA,
		(true, false) => STYLE_GRAY,
		(false, true) => STYLE_COLOR_NO_ALPHA,
		(false, false) => STYLE_COLOR,
	}
}

fn encode_gradient(buf: &mut WriteBuffer, gradient: &Gradient) -> Result<(), HvifError> {
	if gradient.stops.is_empty() {
		return Err(HvifError::Unsupported {
			what: "gradient stops",
			reason: "a gradient must have at least one stop".into(),
		});
	}
	if gradient.stops.len() > MAX_ENTRIES {
		return Err(count_overflow("gradient stops", gradient.stops.len()));
	}

	let grays = gradient.all_gray();
	let no_alpha = gradient.all_opaque();

	let mut flags = 0u8;
	if !gradient.transform.is_identity() {
		flags |= GRADIENT_FLAG_TRANSFORM;
	}
	if no_alpha {
		flags |= GRADIENT_FLAG_NO_ALPHA;
	}
	if grays {
		flags |= GRADIENT_FLAG_GRAYS;
	}

	buf.write_u8(gradient.kind.to_tag());
	buf.write_u8(flags);
	buf.write_u8(gradient.stops.len() as u8);

	if flags & GRADIENT_FLAG_TRANSFORM != 0 {
		for v in gradient.transform.m {
			buf.write_float24(v as f32);
		}
	}

	for stop in &gradient.stops {
		buf.write_u8(stop.offset);
		if grays {
			buf.write_u8(stop.color.r);
			if !no_alpha {
				buf.write_u8(stop.color.a);
			}
		} else if no_alpha {
			buf.write_u8(stop.color.r);
			buf.write_u8(stop.color.g);
			buf.write_u8(stop.color.b);
		} else {
			buf.write_u32(stop.color.to_packed());
		}
	}

	Ok(())
}

fn encode_style(buf: &mut WriteBuffer, style: &Style) -> Result<(), HvifError> {
	match style {
		Style::Solid(rgba) => {
			let tag = style_tag(*rgba);
			buf.write_u8(tag);
			match tag {
				STYLE_GRAY_NO_ALPHA => buf.write_u8(rgba.r),
				STYLE_GRAY => {
					buf.write_u8(rgba.r);
					buf.write_u8(rgba.a);
				}
				STYLE_COLOR_NO_ALPHA => {
					buf.write_u8(rgba.r);
					buf.write_u8(rgba.g);
					buf.write_u8(rgba.b);
				}
				_ => buf.write_u32(rgba.to_packed()),
			}
			Ok(())
		}
		Style::Gradient(gradient) => {
			buf.write_u8(STYLE_GRADIENT);
			encode_gradient(buf, gradient)
		}
	}
}

/// Classifies each point of a path the same way
/// [`write_path_commands`](crate::codec::path_commands::write_path_commands)
/// does, for the size estimate in spec.md §4.5: `straight` points need
/// only one coord payload value (H-line/V-line), `line` points need two,
/// `curve` points need six.
fn classify_points(points: &[ControlPoint]) -> (usize, usize, usize) {
	let mut straight = 0;
	let mut line = 0;
	let mut curve = 0;
	let mut last = (0.0_f32, 0.0_f32);

	for cp in points {
		if cp.is_straight() {
			if cp.point.0 == last.0 || cp.point.1 == last.1 {
				straight += 1;
			} else {
				line += 1;
			}
		} else {
			curve += 1;
		}
		last = cp.point;
	}

	(straight, line, curve)
}

fn encode_path(buf: &mut WriteBuffer, path: &VectorPath) -> Result<(), HvifError> {
	if path.points.len() > MAX_ENTRIES {
		return Err(count_overflow("path points", path.points.len()));
	}

	let point_count = path.points.len();
	let (straight, line, curve) = classify_points(&path.points);
	let command_bytes = point_count + 2 * straight + 4 * line + 12 * curve;
	let plain_bytes = 12 * point_count;

	let mut flags = 0u8;
	if path.closed {
		flags |= PATH_FLAG_CLOSED;
	}

	if command_bytes < plain_bytes && curve == 0 {
		// No point carries curve handles: every point is a plain (x, y)
		// pair, so the command-bits segment (and its per-opcode
		// distinctions) would only add overhead. NO_CURVES writes the
		// coords directly, with no command byte at all.
		flags |= PATH_FLAG_NO_CURVES;
		buf.write_u8(flags);
		buf.write_u8(point_count as u8);
		for cp in &path.points {
			buf.write_coord(cp.point.0);
			buf.write_coord(cp.point.1);
		}
	} else if command_bytes < plain_bytes {
		flags |= PATH_FLAG_USES_COMMANDS;
		buf.write_u8(flags);
		buf.write_u8(point_count as u8);
		let (commands, payload) = write_path_commands(&path.points)?;
		buf.append(commands);
		buf.append(payload);
	} else {
		buf.write_u8(flags);
		buf.write_u8(point_count as u8);
		for cp in &path.points {
			buf.write_coord(cp.point.0);
			buf.write_coord(cp.point.1);
			buf.write_coord(cp.point_in.0);
			buf.write_coord(cp.point_in.1);
			buf.write_coord(cp.point_out.0);
			buf.write_coord(cp.point_out.1);
		}
	}

	Ok(())
}

fn encode_transformer(buf: &mut WriteBuffer, transformer: &Transformer) {
	match transformer {
		Transformer::Affine(m) => {
			buf.write_u8(TRANSFORMER_AFFINE);
			for v in m {
				buf.write_float24(*v as f32);
			}
		}
		Transformer::Perspective(m) => {
			buf.write_u8(TRANSFORMER_PERSPECTIVE);
			for v in m {
				buf.write_float24(*v as f32);
			}
		}
		Transformer::Contour(c) => {
			buf.write_u8(TRANSFORMER_CONTOUR);
			buf.write_u8(encode_signed_width(c.width));
			buf.write_u8(c.line_join.to_tag());
			buf.write_u8(c.miter_limit);
		}
		Transformer::Stroke(s) => {
			buf.write_u8(TRANSFORMER_STROKE);
			buf.write_u8(encode_signed_width(s.width));
			buf.write_u8((s.line_join.to_tag() & 0x0f) | (s.line_cap.to_tag() << 4));
			buf.write_u8(s.miter_limit);
		}
	}
}

fn encode_shape(buf: &mut WriteBuffer, shape: &Shape) -> Result<(), HvifError> {
	if shape.style > 255 {
		return Err(count_overflow("style index", shape.style));
	}
	if shape.paths.len() > MAX_ENTRIES {
		return Err(count_overflow("shape path refs", shape.paths.len()));
	}
	if shape.transformers.len() > MAX_ENTRIES {
		return Err(count_overflow("shape transformers", shape.transformers.len()));
	}

	buf.write_u8(SHAPE_TYPE_PATH_SOURCE);
	buf.write_u8(shape.style as u8);
	buf.write_u8(shape.paths.len() as u8);
	for &path_index in &shape.paths {
		if path_index > 255 {
			return Err(count_overflow("path index", path_index));
		}
		buf.write_u8(path_index as u8);
	}

	let is_identity = shape.transform.is_identity();
	let is_translation = !is_identity && shape.transform.is_translation_only();

	let mut flags = 0u8;
	if !is_identity && !is_translation {
		flags |= SHAPE_FLAG_TRANSFORM;
	} else if is_translation {
		flags |= SHAPE_FLAG_TRANSLATION;
	}
	if shape.hinting {
		flags |= SHAPE_FLAG_HINTING;
	}
	if shape.has_custom_visibility_scale() {
		flags |= SHAPE_FLAG_LOD_SCALE;
	}
	if !shape.transformers.is_empty() {
		flags |= SHAPE_FLAG_HAS_TRANSFORMERS;
	}
	buf.write_u8(flags);

	if flags & SHAPE_FLAG_TRANSFORM != 0 {
		for v in shape.transform.m {
			buf.write_float24(v as f32);
		}
	} else if flags & SHAPE_FLAG_TRANSLATION != 0 {
		buf.write_coord(shape.transform.m[4] as f32);
		buf.write_coord(shape.transform.m[5] as f32);
	}

	if flags & SHAPE_FLAG_LOD_SCALE != 0 {
		buf.write_u8(encode_visibility_scale(shape.min_visibility_scale));
		buf.write_u8(encode_visibility_scale(shape.max_visibility_scale));
	}

	if flags & SHAPE_FLAG_HAS_TRANSFORMERS != 0 {
		buf.write_u8(shape.transformers.len() as u8);
		for transformer in &shape.transformers {
			encode_transformer(buf, transformer);
		}
	}

	Ok(())
}

/// Encodes `icon` to a flat icon blob (spec.md §4.5).
///
/// Fails fast with [`HvifError::Unsupported`] if any of `styles`,
/// `paths`, `shapes` (or any per-shape/per-path/per-gradient list)
/// exceeds 255 entries — the flat format's single-byte count fields
/// cannot represent more.
pub fn encode_icon(icon: &Icon) -> Result<Vec<u8>, HvifError> {
	if icon.styles.len() > MAX_ENTRIES {
		return Err(count_overflow("styles", icon.styles.len()));
	}
	if icon.paths.len() > MAX_ENTRIES {
		return Err(count_overflow("paths", icon.paths.len()));
	}
	if icon.shapes.len() > MAX_ENTRIES {
		return Err(count_overflow("shapes", icon.shapes.len()));
	}

	let mut buf = WriteBuffer::new();
	buf.write_bytes(&MAGIC);

	buf.write_u8(icon.styles.len() as u8);
	for style in &icon.styles {
		encode_style(&mut buf, style)?;
	}

	buf.write_u8(icon.paths.len() as u8);
	for path in &icon.paths {
		encode_path(&mut buf, path)?;
	}

	buf.write_u8(icon.shapes.len() as u8);
	for shape in &icon.shapes {
		encode_shape(&mut buf, shape)?;
	}

	Ok(buf.into_vec())
}
