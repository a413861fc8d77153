//! The flat icon decoder (spec.md §4.6): the symmetrical inverse of
//! [`crate::format::encoder`], with bounds and index validation.

use crate::codec::buffer::ReadCursor;
use crate::codec::path_commands::read_path_commands;
use crate::format::constants::{
	GRADIENT_FLAG_GRAYS, GRADIENT_FLAG_NO_ALPHA, GRADIENT_FLAG_TRANSFORM, MAGIC, PATH_FLAG_CLOSED, PATH_FLAG_NO_CURVES,
	PATH_FLAG_USES_COMMANDS, SHAPE_FLAG_HAS_TRANSFORMERS, SHAPE_FLAG_HINTING, SHAPE_FLAG_LOD_SCALE, SHAPE_FLAG_TRANSFORM,
	SHAPE_FLAG_TRANSLATION, SHAPE_TYPE_PATH_SOURCE, STYLE_COLOR, STYLE_COLOR_NO_ALPHA, STYLE_GRADIENT, STYLE_GRAY,
	STYLE_GRAY_NO_ALPHA, TRANSFORMER_AFFINE, TRANSFORMER_CONTOUR, TRANSFORMER_PERSPECTIVE, TRANSFORMER_STROKE,
	VISIBILITY_SCALE_MULTIPLIER,
};
use crate::icon::affine::Affine;
use crate::icon::error::HvifError;
use crate::icon::path::{ControlPoint, VectorPath};
use crate::icon::shape::{Shape, DEFAULT_MAX_VISIBILITY_SCALE, DEFAULT_MIN_VISIBILITY_SCALE};
use crate::icon::style::{Gradient, GradientKind, GradientStop, Rgba, Style};
use crate::icon::transformer::{Contour, LineCap, LineJoin, Stroke, Transformer};
use crate::icon::Icon;

fn decode_signed_width(byte: u8) -> i8 {
	(i16::from(byte) - 128) as i8
}

fn decode_visibility_scale(byte: u8) -> f32 {
	f32::from(byte) / VISIBILITY_SCALE_MULTIPLIER
}

fn decode_style(cursor: &mut ReadCursor<'_>) -> Result<Style, HvifError> {
	let offset = cursor.position();
	let tag = cursor.read_u8()?;
	match tag {
		STYLE_GRAY_NO_ALPHA => {
			let r = cursor.read_u8()?;
			Ok(Style::Solid(Rgba::new(r, r, r, 255)))
		}
		STYLE_GRAY => {
			let r = cursor.read_u8()?;
			let a = cursor.read_u8()?;
			Ok(Style::Solid(Rgba::new(r, r, r, a)))
		}
		STYLE_COLOR_NO_ALPHA => {
			let r = cursor.read_u8()?;
			let g = cursor.read_u8()?;
			let b = cursor.read_u8()?;
			Ok(Style::Solid(Rgba::new(r, g, b, 255)))
		}
		STYLE_COLOR => Ok(Style::Solid(Rgba::from_packed(cursor.read_u32()?))),
		STYLE_GRADIENT => Ok(Style::Gradient(decode_gradient(cursor)?)),
		other => Err(HvifError::UnknownTag { kind: "style", tag: other, offset }),
	}
}

fn decode_gradient(cursor: &mut ReadCursor<'_>) -> Result<Gradient, HvifError> {
	let kind_offset = cursor.position();
	let kind_tag = cursor.read_u8()?;
	let kind = GradientKind::from_tag(kind_tag).ok_or_else(|| HvifError::Malformed {
		what: "gradient kind",
		offset: kind_offset,
		reason: format!("unknown kind {kind_tag}"),
	})?;

	let flags = cursor.read_u8()?;
	let stop_count_offset = cursor.position();
	let stop_count = cursor.read_u8()? as usize;
	if stop_count == 0 {
		return Err(HvifError::Malformed {
			what: "gradient stops",
			offset: stop_count_offset,
			reason: "gradient has no stops".into(),
		});
	}

	let mut transform = Affine::IDENTITY;
	if flags & GRADIENT_FLAG_TRANSFORM != 0 {
		let mut m = [0.0_f64; 6];
		for slot in &mut m {
			*slot = f64::from(cursor.read_float24()?);
		}
		transform = Affine::new(m[0], m[1], m[2], m[3], m[4], m[5]);
	}

	let no_alpha = flags & GRADIENT_FLAG_NO_ALPHA != 0;
	let grays = flags & GRADIENT_FLAG_GRAYS != 0;

	let mut stops = Vec::with_capacity(stop_count);
	for _ in 0..stop_count {
		let offset = cursor.read_u8()?;
		let color = if grays {
			let r = cursor.read_u8()?;
			let a = if no_alpha { 255 } else { cursor.read_u8()? };
			Rgba::new(r, r, r, a)
		} else if no_alpha {
			let r = cursor.read_u8()?;
			let g = cursor.read_u8()?;
			let b = cursor.read_u8()?;
			Rgba::new(r, g, b, 255)
		} else {
			Rgba::from_packed(cursor.read_u32()?)
		};
		stops.push(GradientStop { offset, color });
	}

	Ok(Gradient { kind, transform, stops })
}

fn decode_path(cursor: &mut ReadCursor<'_>) -> Result<VectorPath, HvifError> {
	let flags = cursor.read_u8()?;
	let point_count = cursor.read_u8()? as usize;
	let closed = flags & PATH_FLAG_CLOSED != 0;

	// NO_CURVES and USES_COMMANDS are distinct wire shapes (see
	// crate::format::encoder::encode_path): NO_CURVES is a plain (x, y)
	// coord-pair stream with no command byte, USES_COMMANDS is the
	// bit-packed opcode stream. Neither set means the plain curve form.
	let points = if flags & PATH_FLAG_NO_CURVES != 0 {
		let mut points = Vec::with_capacity(point_count);
		for _ in 0..point_count {
			let point = (cursor.read_coord()?, cursor.read_coord()?);
			points.push(ControlPoint::corner(point));
		}
		points
	} else if flags & PATH_FLAG_USES_COMMANDS != 0 {
		let command_bytes = point_count.div_ceil(4);
		let mut command_cursor = cursor.read_sub_cursor(command_bytes)?;
		read_path_commands(&mut command_cursor, cursor, point_count)?
	} else {
		let mut points = Vec::with_capacity(point_count);
		for _ in 0..point_count {
			let point = (cursor.read_coord()?, cursor.read_coord()?);
			let point_in = (cursor.read_coord()?, cursor.read_coord()?);
			let point_out = (cursor.read_coord()?, cursor.read_coord()?);
			points.push(ControlPoint {
				point,
				point_in,
				point_out,
				connected: false,
			});
		}
		points
	};

	Ok(VectorPath::new(points, closed))
}

fn decode_transformer(cursor: &mut ReadCursor<'_>) -> Result<Transformer, HvifError> {
	let offset = cursor.position();
	let tag = cursor.read_u8()?;
	match tag {
		TRANSFORMER_AFFINE => {
			let mut m = [0.0_f64; 6];
			for slot in &mut m {
				*slot = f64::from(cursor.read_float24()?);
			}
			Ok(Transformer::Affine(m))
		}
		TRANSFORMER_PERSPECTIVE => {
			let mut m = [0.0_f64; 9];
			for slot in &mut m {
				*slot = f64::from(cursor.read_float24()?);
			}
			Ok(Transformer::Perspective(m))
		}
		TRANSFORMER_CONTOUR => Ok(Transformer::Contour(Contour {
			width: decode_signed_width(cursor.read_u8()?),
			line_join: LineJoin::from_tag(cursor.read_u8()?),
			miter_limit: cursor.read_u8()?,
		})),
		TRANSFORMER_STROKE => {
			let width = decode_signed_width(cursor.read_u8()?);
			let options = cursor.read_u8()?;
			let miter_limit = cursor.read_u8()?;
			Ok(Transformer::Stroke(Stroke {
				width,
				line_join: LineJoin::from_tag(options & 0x0f),
				line_cap: LineCap::from_tag(options >> 4),
				miter_limit,
			}))
		}
		other => Err(HvifError::UnknownTag { kind: "transformer", tag: other, offset }),
	}
}

/// Decodes a shape record. Returns `Ok(None)` if the shape's type tag is
/// not [`SHAPE_TYPE_PATH_SOURCE`] — readers must still consume the
/// record's bytes (its layout does not depend on the type tag) but may
/// skip the shape itself, per spec.md §4.6.
fn decode_shape(cursor: &mut ReadCursor<'_>, style_count: usize, path_count: usize) -> Result<Option<Shape>, HvifError> {
	let shape_type = cursor.read_u8()?;
	let style_index = cursor.read_u8()? as usize;

	let path_ref_count = cursor.read_u8()? as usize;
	let mut paths = Vec::with_capacity(path_ref_count);
	for _ in 0..path_ref_count {
		paths.push(cursor.read_u8()? as usize);
	}

	let flags = cursor.read_u8()?;

	let mut transform = Affine::IDENTITY;
	if flags & SHAPE_FLAG_TRANSFORM != 0 {
		let mut m = [0.0_f64; 6];
		for slot in &mut m {
			*slot = f64::from(cursor.read_float24()?);
		}
		transform = Affine::new(m[0], m[1], m[2], m[3], m[4], m[5]);
	} else if flags & SHAPE_FLAG_TRANSLATION != 0 {
		let tx = cursor.read_coord()?;
		let ty = cursor.read_coord()?;
		transform = Affine::new(1.0, 0.0, 0.0, 1.0, f64::from(tx), f64::from(ty));
	}

	let (min_scale, max_scale) = if flags & SHAPE_FLAG_LOD_SCALE != 0 {
		let min_byte = cursor.read_u8()?;
		let max_byte = cursor.read_u8()?;
		(decode_visibility_scale(min_byte), decode_visibility_scale(max_byte))
	} else {
		(DEFAULT_MIN_VISIBILITY_SCALE, DEFAULT_MAX_VISIBILITY_SCALE)
	};

	let mut transformers = Vec::new();
	if flags & SHAPE_FLAG_HAS_TRANSFORMERS != 0 {
		let count = cursor.read_u8()? as usize;
		for _ in 0..count {
			transformers.push(decode_transformer(cursor)?);
		}
	}

	if shape_type != SHAPE_TYPE_PATH_SOURCE {
		return Ok(None);
	}

	if style_index >= style_count {
		return Err(HvifError::IndexOutOfRange {
			kind: "style",
			index: style_index,
			count: style_count,
		});
	}
	let mut resolved_paths = Vec::with_capacity(paths.len());
	for path_index in paths {
		if path_index >= path_count {
			return Err(HvifError::IndexOutOfRange {
				kind: "path",
				index: path_index,
				count: path_count,
			});
		}
		resolved_paths.push(path_index);
	}

	Ok(Some(Shape {
		style: style_index,
		paths: resolved_paths,
		transform,
		hinting: flags & SHAPE_FLAG_HINTING != 0,
		min_visibility_scale: min_scale,
		max_visibility_scale: max_scale,
		transformers,
	}))
}

/// Decodes a flat icon blob into an [`Icon`] (spec.md §4.6).
///
/// Validates the magic, every style/path index referenced by a shape,
/// and rejects unrecognized style/transformer tags (no length is
/// recoverable for them); unrecognized shape types are skipped rather
/// than rejected, per spec.md §4.5/§4.6.
pub fn decode_icon(data: &[u8]) -> Result<Icon, HvifError> {
	let mut cursor = ReadCursor::new(data);

	let magic = cursor.read_bytes(4)?;
	let mut got = [0u8; 4];
	got.copy_from_slice(magic);
	if got != MAGIC {
		return Err(HvifError::InvalidMagic(got));
	}

	let style_count = cursor.read_u8()? as usize;
	let mut styles = Vec::with_capacity(style_count);
	for _ in 0..style_count {
		styles.push(decode_style(&mut cursor)?);
	}

	let path_count = cursor.read_u8()? as usize;
	let mut paths = Vec::with_capacity(path_count);
	for _ in 0..path_count {
		paths.push(decode_path(&mut cursor)?);
	}

	let shape_count = cursor.read_u8()? as usize;
	let mut shapes = Vec::with_capacity(shape_count);
	for _ in 0..shape_count {
		if let Some(shape) = decode_shape(&mut cursor, styles.len(), paths.len())? {
			shapes.push(shape);
		}
	}

	Ok(Icon { styles, paths, shapes })
}
