//! Builds an [`Icon`] from a tagged-field [`Archive`] (spec.md §4.4).

use crate::archive::reader::Archive;
use crate::icon::affine::Affine;
use crate::icon::error::{HvifError, ImportWarning};
use crate::icon::path::{ControlPoint, VectorPath};
use crate::icon::shape::Shape;
use crate::icon::style::{Gradient, GradientKind, GradientStop, Rgba, Style};
use crate::icon::transformer::{Contour, LineCap, LineJoin, Stroke, Transformer};
use crate::icon::Icon;

/// The type tag used for packed-color `Data` fields (`rgba` style
/// payloads, gradient stop colors). An arbitrary but stable constant
/// local to this archive format; spec.md §4.4 does not assign a
/// specific tag value since the container format itself is unspecified.
pub const RGBA_TYPE_TAG: u32 = 0x5247_4241;

fn malformed(what: &'static str, reason: impl Into<String>) -> HvifError {
	HvifError::Malformed {
		what,
		offset: 0,
		reason: reason.into(),
	}
}

fn import_paths(archive: &Archive, warnings: &mut Vec<ImportWarning>) -> Result<Vec<VectorPath>, HvifError> {
	let _ = warnings;
	let Some(paths_msg) = archive.find_message("paths", 0) else {
		return Ok(Vec::new());
	};

	let count = paths_msg.count("path");
	let mut paths = Vec::with_capacity(count);
	for i in 0..count {
		let path_msg = paths_msg
			.find_message("path", i)
			.ok_or_else(|| malformed("path", format!("entry {i} missing")))?;

		let point_count = path_msg.count("point");
		let mut points = Vec::with_capacity(point_count);
		for j in 0..point_count {
			let point = path_msg
				.find_point("point", j)
				.ok_or_else(|| malformed("path.point", format!("path entry missing point {j}")))?;
			let point_in = path_msg
				.find_point("point in", j)
				.ok_or_else(|| malformed("path.point in", format!("path entry missing point in {j}")))?;
			let point_out = path_msg
				.find_point("point out", j)
				.ok_or_else(|| malformed("path.point out", format!("path entry missing point out {j}")))?;
			let connected = path_msg
				.find_bool("connected", j)
				.ok_or_else(|| malformed("path.connected", format!("path entry missing connected {j}")))?;
			points.push(ControlPoint {
				point,
				point_in,
				point_out,
				connected,
			});
		}

		let closed = path_msg.find_bool("path closed", 0).unwrap_or(false);
		paths.push(VectorPath::new(points, closed));
	}

	Ok(paths)
}

fn import_gradient(gradient_msg: &Archive) -> Result<Gradient, HvifError> {
	let kind_tag = gradient_msg
		.find_int32("kind", 0)
		.ok_or_else(|| malformed("gradient.kind", "missing"))?;
	let kind = GradientKind::from_tag(kind_tag as u8).ok_or_else(|| malformed("gradient.kind", format!("unknown kind {kind_tag}")))?;

	let transform = match gradient_msg.find_doubles("transform", 0) {
		Some(d) if d.len() == 6 => Affine::new(d[0], d[1], d[2], d[3], d[4], d[5]),
		Some(d) => return Err(malformed("gradient.transform", format!("matrix is not 6 doubles (got {})", d.len()))),
		None => Affine::IDENTITY,
	};

	let stop_count = gradient_msg.count("offset");
	if stop_count == 0 {
		return Err(malformed("gradient.stops", "gradient has no stops"));
	}

	let mut stops = Vec::with_capacity(stop_count);
	for i in 0..stop_count {
		let offset_f = gradient_msg
			.find_double("offset", i)
			.or_else(|| gradient_msg.find_float("offset", i).map(f64::from))
			.ok_or_else(|| malformed("gradient.offset", format!("missing stop {i}")))?;
		let packed = gradient_msg
			.find_data("color", RGBA_TYPE_TAG, i)
			.ok_or_else(|| malformed("gradient.color", format!("missing stop {i}")))?;
		let bytes: [u8; 4] = packed
			.try_into()
			.map_err(|_| malformed("gradient.color", format!("stop {i} is not 4 bytes")))?;
		stops.push(GradientStop {
			offset: (offset_f * 255.0).round().clamp(0.0, 255.0) as u8,
			color: Rgba::from_packed(u32::from_le_bytes(bytes)),
		});
	}

	Ok(Gradient { kind, transform, stops })
}

fn import_styles(archive: &Archive) -> Result<Vec<Style>, HvifError> {
	let Some(styles_msg) = archive.find_message("styles", 0) else {
		return Ok(Vec::new());
	};

	let count = styles_msg.count("style");
	let mut styles = Vec::with_capacity(count);
	for i in 0..count {
		let style_msg = styles_msg
			.find_message("style", i)
			.ok_or_else(|| malformed("style", format!("entry {i} missing")))?;

		if let Some(packed) = style_msg.find_data("rgba", RGBA_TYPE_TAG, 0) {
			let bytes: [u8; 4] = packed.try_into().map_err(|_| malformed("style.rgba", "not 4 bytes"))?;
			styles.push(Style::Solid(Rgba::from_packed(u32::from_le_bytes(bytes))));
		} else if let Some(gradient_msg) = style_msg.find_message("gradient", 0) {
			styles.push(Style::Gradient(import_gradient(gradient_msg)?));
		} else {
			return Err(malformed("style", format!("entry {i} has neither rgba nor gradient")));
		}
	}

	Ok(styles)
}

fn import_transformer(msg: &Archive) -> Result<Transformer, HvifError> {
	let ty = msg.find_str("type", 0).ok_or_else(|| malformed("transformer.type", "missing"))?;
	match ty {
		"affine" => {
			let d = msg
				.find_doubles("matrix", 0)
				.ok_or_else(|| malformed("transformer.matrix", "affine transformer missing matrix"))?;
			if d.len() != 6 {
				return Err(malformed("transformer.matrix", "affine matrix is not 6 doubles"));
			}
			Ok(Transformer::Affine([d[0], d[1], d[2], d[3], d[4], d[5]]))
		}
		"perspective" => {
			let d = msg
				.find_doubles("matrix", 0)
				.ok_or_else(|| malformed("transformer.matrix", "perspective transformer missing matrix"))?;
			if d.len() != 9 {
				return Err(malformed("transformer.matrix", "perspective matrix is not 9 doubles"));
			}
			let mut m = [0.0; 9];
			m.copy_from_slice(d);
			Ok(Transformer::Perspective(m))
		}
		"contour" => Ok(Transformer::Contour(Contour {
			width: msg.find_int32("width", 0).unwrap_or(0) as i8,
			line_join: LineJoin::from_tag(msg.find_int32("line join", 0).unwrap_or(0) as u8),
			miter_limit: msg.find_int32("miter limit", 0).unwrap_or(0) as u8,
		})),
		"stroke" => Ok(Transformer::Stroke(Stroke {
			width: msg.find_int32("width", 0).unwrap_or(0) as i8,
			line_join: LineJoin::from_tag(msg.find_int32("line join", 0).unwrap_or(0) as u8),
			line_cap: LineCap::from_tag(msg.find_int32("line cap", 0).unwrap_or(0) as u8),
			miter_limit: msg.find_int32("miter limit", 0).unwrap_or(0) as u8,
		})),
		other => Err(malformed("transformer.type", format!("unknown transformer type {other:?}"))),
	}
}

fn import_shapes(archive: &Archive, style_count: usize, path_count: usize, warnings: &mut Vec<ImportWarning>) -> Result<Vec<Shape>, HvifError> {
	let Some(shapes_msg) = archive.find_message("shapes", 0) else {
		return Ok(Vec::new());
	};

	let count = shapes_msg.count("shape");
	let mut shapes = Vec::with_capacity(count);
	for i in 0..count {
		let shape_msg = shapes_msg
			.find_message("shape", i)
			.ok_or_else(|| malformed("shape", format!("entry {i} missing")))?;

		let style_ref = shape_msg
			.find_int32("style ref", 0)
			.ok_or_else(|| malformed("shape.style ref", format!("entry {i} missing required field")))?;

		if style_ref < 0 || style_ref as usize >= style_count {
			warnings.push(ImportWarning::ShapeSkipped {
				shape_index: i,
				style_ref,
			});
			continue;
		}

		let mut shape = Shape::new(style_ref as usize);

		let path_ref_count = shape_msg.count("path ref");
		for j in 0..path_ref_count {
			let Some(path_ref) = shape_msg.find_int32("path ref", j) else {
				continue;
			};
			if path_ref < 0 || path_ref as usize >= path_count {
				warnings.push(ImportWarning::PathRefSkipped {
					shape_index: i,
					path_ref,
				});
				continue;
			}
			shape.paths.push(path_ref as usize);
		}

		let transformer_count = shape_msg.count("transformer");
		for k in 0..transformer_count {
			let t_msg = shape_msg
				.find_message("transformer", k)
				.ok_or_else(|| malformed("shape.transformer", format!("entry {i} missing transformer {k}")))?;
			shape.transformers.push(import_transformer(t_msg)?);
		}

		shape.transform = match shape_msg.find_doubles("transformation", 0) {
			Some(d) if d.len() == 6 => Affine::new(d[0], d[1], d[2], d[3], d[4], d[5]),
			Some(d) => return Err(malformed("shape.transformation", format!("matrix is not 6 doubles (got {})", d.len()))),
			None => Affine::IDENTITY,
		};
		shape.hinting = shape_msg.find_bool("hinting", 0).unwrap_or(false);
		shape.min_visibility_scale = shape_msg.find_double("min visibility scale", 0).unwrap_or(0.0) as f32;
		shape.max_visibility_scale = shape_msg.find_double("max visibility scale", 0).unwrap_or(4.0) as f32;

		shapes.push(shape);
	}

	Ok(shapes)
}

/// Builds an [`Icon`] from a parsed archive, returning non-fatal import
/// warnings alongside it (spec.md §7: a shape with an unresolved style
/// or path reference is skipped, not fatal, while any other missing
/// required field fails the import outright).
pub fn import_icon(archive: &Archive) -> Result<(Icon, Vec<ImportWarning>), HvifError> {
	let mut warnings = Vec::new();
	let paths = import_paths(archive, &mut warnings)?;
	let styles = import_styles(archive)?;
	let shapes = import_shapes(archive, styles.len(), paths.len(), &mut warnings)?;

	Ok((Icon { styles, paths, shapes }, warnings))
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::archive::reader::FieldValue;

	fn solid_style_archive(rgba: Rgba) -> Archive {
		let mut style = Archive::new();
		style.push(
			"rgba",
			FieldValue::Data {
				type_tag: RGBA_TYPE_TAG,
				bytes: rgba.to_packed().to_le_bytes().to_vec(),
			},
		);
		let mut styles = Archive::new();
		styles.push("style", FieldValue::Message(Box::new(style)));
		styles
	}

	#[test]
	fn import_minimal_icon_with_one_solid_style() {
		let mut archive = Archive::new();
		archive.push("styles", FieldValue::Message(Box::new(solid_style_archive(Rgba::new(255, 0, 0, 255)))));

		let (icon, warnings) = import_icon(&archive).expect("import");
		assert!(warnings.is_empty());
		assert_eq!(icon.styles.len(), 1);
		assert_eq!(icon.styles[0], Style::Solid(Rgba::new(255, 0, 0, 255)));
		assert!(icon.paths.is_empty());
		assert!(icon.shapes.is_empty());
	}

	#[test]
	fn shape_with_unresolved_style_ref_is_skipped_not_fatal() {
		let mut shape = Archive::new();
		shape.push("style ref", FieldValue::Int32(5));
		let mut shapes_msg = Archive::new();
		shapes_msg.push("shape", FieldValue::Message(Box::new(shape)));

		let mut archive = Archive::new();
		archive.push("shapes", FieldValue::Message(Box::new(shapes_msg)));

		let (icon, warnings) = import_icon(&archive).expect("import");
		assert!(icon.shapes.is_empty());
		assert_eq!(warnings.len(), 1);
		assert!(matches!(warnings[0], ImportWarning::ShapeSkipped { shape_index: 0, style_ref: 5 }));
	}

	#[test]
	fn shape_missing_style_ref_fails_import() {
		let shape = Archive::new();
		let mut shapes_msg = Archive::new();
		shapes_msg.push("shape", FieldValue::Message(Box::new(shape)));

		let mut archive = Archive::new();
		archive.push("shapes", FieldValue::Message(Box::new(shapes_msg)));

		assert!(import_icon(&archive).is_err());
	}

	#[test]
	fn gradient_with_zero_stops_is_malformed() {
		let gradient = Archive::new();
		let mut style = Archive::new();
		style.push("gradient", FieldValue::Message(Box::new(gradient)));
		let mut styles = Archive::new();
		styles.push("style", FieldValue::Message(Box::new(style)));

		let mut archive = Archive::new();
		archive.push("styles", FieldValue::Message(Box::new(styles)));

		let err = import_icon(&archive).unwrap_err();
		assert!(matches!(err, HvifError::Malformed { .. }));
	}

	#[test]
	fn dangling_path_ref_is_dropped_without_failing_shape() {
		let mut shape = Archive::new();
		shape.push("style ref", FieldValue::Int32(0));
		shape.push("path ref", FieldValue::Int32(9));
		let mut shapes_msg = Archive::new();
		shapes_msg.push("shape", FieldValue::Message(Box::new(shape)));

		let mut archive = Archive::new();
		archive.push("styles", FieldValue::Message(Box::new(solid_style_archive(Rgba::new(1, 1, 1, 255)))));
		archive.push("shapes", FieldValue::Message(Box::new(shapes_msg)));

		let (icon, warnings) = import_icon(&archive).expect("import");
		assert_eq!(icon.shapes.len(), 1);
		assert!(icon.shapes[0].paths.is_empty());
		assert_eq!(warnings.len(), 1);
		assert!(matches!(warnings[0], ImportWarning::PathRefSkipped { shape_index: 0, path_ref: 9 }));
	}

	#[test]
	fn gradient_transform_with_wrong_length_is_malformed() {
		let mut gradient = Archive::new();
		gradient.push("kind", FieldValue::Int32(0));
		gradient.push("transform", FieldValue::Doubles(vec![1.0, 0.0, 0.0]));
		gradient.push("offset", FieldValue::Double(0.0));
		gradient.push("color", FieldValue::Data { type_tag: RGBA_TYPE_TAG, bytes: Rgba::new(0, 0, 0, 255).to_packed().to_le_bytes().to_vec() });
		let mut style = Archive::new();
		style.push("gradient", FieldValue::Message(Box::new(gradient)));
		let mut styles = Archive::new();
		styles.push("style", FieldValue::Message(Box::new(style)));

		let mut archive = Archive::new();
		archive.push("styles", FieldValue::Message(Box::new(styles)));

		let err = import_icon(&archive).unwrap_err();
		assert!(matches!(err, HvifError::Malformed { .. }));
	}

	#[test]
	fn shape_transformation_with_wrong_length_is_malformed() {
		let mut shape = Archive::new();
		shape.push("style ref", FieldValue::Int32(0));
		shape.push("transformation", FieldValue::Doubles(vec![1.0, 0.0, 0.0, 1.0]));
		let mut shapes_msg = Archive::new();
		shapes_msg.push("shape", FieldValue::Message(Box::new(shape)));

		let mut archive = Archive::new();
		archive.push("styles", FieldValue::Message(Box::new(solid_style_archive(Rgba::new(1, 1, 1, 255)))));
		archive.push("shapes", FieldValue::Message(Box::new(shapes_msg)));

		let err = import_icon(&archive).unwrap_err();
		assert!(matches!(err, HvifError::Malformed { .. }));
	}
}
