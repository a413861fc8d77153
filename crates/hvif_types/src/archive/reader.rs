//! The authoring archive: a self-describing tagged-field container.
//!
//! Haiku's native archive format is a flattened `BMessage`; spec.md §4.4
//! explicitly leaves its exact tag wire format unspecified ("a fixed
//! external contract...not redefined here...implementations may adopt
//! any equivalent library"). This implementation defines its own small
//! tagged-field archive, serialized with `serde_json`, and exposes the
//! field-accessor contract spec.md §4.4 actually names
//! (`find_message`, `find_point`, `find_bool`, `find_int32`,
//! `find_float`, `find_double`, `find_data`).

use serde::{Deserialize, Serialize};

use crate::icon::error::HvifError;

/// The optional big-endian magic that may prefix a native icon archive
/// (spec.md §6): `'IMSG'`.
pub const IMSG_MAGIC: [u8; 4] = [0x49, 0x4D, 0x53, 0x47];

/// One value stored under a field name in an [`Archive`].
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "kind")]
pub enum FieldValue {
	/// A boolean scalar.
	Bool(bool),
	/// A signed 32-bit integer scalar.
	Int32(i32),
	/// A single-precision float scalar.
	Float(f32),
	/// A double-precision float scalar.
	Double(f64),
	/// A 2-D point, `(x, y)`.
	Point(f32, f32),
	/// A string scalar, used for the discriminating `type` field on
	/// transformer sub-archives.
	Str(String),
	/// A run of doubles, used for affine/perspective matrix blobs.
	Doubles(Vec<f64>),
	/// A type-tagged byte blob, used for packed colors and similar.
	Data {
		/// The host-defined type tag for this blob (e.g. a packed RGBA
		/// color field).
		type_tag: u32,
		/// The raw bytes.
		bytes: Vec<u8>,
	},
	/// A nested sub-archive (a `BMessage`-valued field).
	Message(Box<Archive>),
}

/// A tagged-field archive: an ordered list of `(name, value)` pairs.
/// Multiple entries may share a name; they are addressed by occurrence
/// index, mirroring `BMessage`'s per-name repeat indices.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Archive {
	fields: Vec<(String, FieldValue)>,
}

impl Archive {
	/// Builds an empty archive.
	#[must_use]
	pub fn new() -> Self {
		Self::default()
	}

	/// Appends a `(name, value)` entry, returning `self` for chaining.
	pub fn push(&mut self, name: impl Into<String>, value: FieldValue) -> &mut Self {
		self.fields.push((name.into(), value));
		self
	}

	fn nth(&self, name: &str, index: usize) -> Option<&FieldValue> {
		self.fields.iter().filter(|(n, _)| n == name).map(|(_, v)| v).nth(index)
	}

	/// Number of entries stored under `name` (`BMessage::CountNames`
	/// equivalent, scoped to one field).
	#[must_use]
	pub fn count(&self, name: &str) -> usize {
		self.fields.iter().filter(|(n, _)| n == name).count()
	}

	/// A human-readable type code for the field named `name`'s first
	/// occurrence, or `None` if absent.
	#[must_use]
	pub fn type_code(&self, name: &str) -> Option<&'static str> {
		Some(match self.nth(name, 0)? {
			FieldValue::Bool(_) => "bool",
			FieldValue::Int32(_) => "int32",
			FieldValue::Float(_) => "float",
			FieldValue::Double(_) => "double",
			FieldValue::Point(..) => "point",
			FieldValue::Str(_) => "string",
			FieldValue::Doubles(_) => "doubles",
			FieldValue::Data { .. } => "data",
			FieldValue::Message(_) => "message",
		})
	}

	/// Finds the `index`-th nested sub-archive under `name`.
	#[must_use]
	pub fn find_message(&self, name: &str, index: usize) -> Option<&Archive> {
		match self.nth(name, index)? {
			FieldValue::Message(m) => Some(m),
			_ => None,
		}
	}

	/// Finds the `index`-th point under `name`.
	#[must_use]
	pub fn find_point(&self, name: &str, index: usize) -> Option<(f32, f32)> {
		match self.nth(name, index)? {
			FieldValue::Point(x, y) => Some((*x, *y)),
			_ => None,
		}
	}

	/// Finds the `index`-th bool under `name`.
	#[must_use]
	pub fn find_bool(&self, name: &str, index: usize) -> Option<bool> {
		match self.nth(name, index)? {
			FieldValue::Bool(b) => Some(*b),
			_ => None,
		}
	}

	/// Finds the `index`-th int32 under `name`.
	#[must_use]
	pub fn find_int32(&self, name: &str, index: usize) -> Option<i32> {
		match self.nth(name, index)? {
			FieldValue::Int32(v) => Some(*v),
			_ => None,
		}
	}

	/// Finds the `index`-th float under `name`.
	#[must_use]
	pub fn find_float(&self, name: &str, index: usize) -> Option<f32> {
		match self.nth(name, index)? {
			FieldValue::Float(v) => Some(*v),
			_ => None,
		}
	}

	/// Finds the `index`-th string under `name`.
	#[must_use]
	pub fn find_str(&self, name: &str, index: usize) -> Option<&str> {
		match self.nth(name, index)? {
			FieldValue::Str(v) => Some(v.as_str()),
			_ => None,
		}
	}

	/// Finds the `index`-th double under `name`.
	#[must_use]
	pub fn find_double(&self, name: &str, index: usize) -> Option<f64> {
		match self.nth(name, index)? {
			FieldValue::Double(v) => Some(*v),
			_ => None,
		}
	}

	/// Finds the `index`-th doubles blob under `name` (affine/perspective
	/// matrices).
	#[must_use]
	pub fn find_doubles(&self, name: &str, index: usize) -> Option<&[f64]> {
		match self.nth(name, index)? {
			FieldValue::Doubles(v) => Some(v),
			_ => None,
		}
	}

	/// Finds the `index`-th data blob under `name`, checking its type
	/// tag matches `type_tag`.
	#[must_use]
	pub fn find_data(&self, name: &str, type_tag: u32, index: usize) -> Option<&[u8]> {
		match self.nth(name, index)? {
			FieldValue::Data { type_tag: t, bytes } if *t == type_tag => Some(bytes),
			_ => None,
		}
	}

	/// Parses an archive from bytes, consuming the optional `IMSG`
	/// prefix if present (spec.md §4.4/§6) before deserializing the
	/// remainder as JSON.
	pub fn from_bytes(data: &[u8]) -> Result<Self, HvifError> {
		let body = if data.len() >= 4 && data[..4] == IMSG_MAGIC { &data[4..] } else { data };
		serde_json::from_slice(body).map_err(|e| HvifError::Malformed {
			what: "archive",
			offset: 0,
			reason: e.to_string(),
		})
	}

	/// Serializes this archive to bytes, optionally prefixed with the
	/// `IMSG` magic.
	#[must_use]
	pub fn to_bytes(&self, with_imsg_prefix: bool) -> Vec<u8> {
		let mut out = Vec::new();
		if with_imsg_prefix {
			out.extend_from_slice(&IMSG_MAGIC);
		}
		out.extend_from_slice(&serde_json::to_vec(self).expect("archive serialization is infallible"));
		out
	}
}
