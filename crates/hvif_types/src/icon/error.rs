//! Error types for icon archive import and flat icon encode/decode.

use thiserror::Error;

/// Errors that can occur while decoding, encoding, or importing HVIF icons.
#[derive(Debug, Error)]
pub enum HvifError {
	/// The byte stream ended before the expected data was found.
	#[error("unexpected end of data: wanted {wanted} bytes at offset {offset}, had {available}")]
	UnexpectedEof {
		/// Number of bytes the reader tried to consume
		wanted: usize,
		/// Offset into the buffer where the read was attempted
		offset: usize,
		/// Number of bytes actually remaining
		available: usize,
	},

	/// The flat icon magic number did not match.
	#[error("invalid flat icon magic: {0:02X?}")]
	InvalidMagic([u8; 4]),

	/// A tag byte did not correspond to any known record kind.
	#[error("unrecognized {kind} tag {tag:#04x} at offset {offset}")]
	UnknownTag {
		/// What kind of record was being read (style, shape, transformer, ...)
		kind: &'static str,
		/// The tag byte that was read
		tag: u8,
		/// Offset into the buffer where the tag was read
		offset: usize,
	},

	/// A shape, style, or path index referenced an entry that does not exist.
	#[error("{kind} index {index} out of range (have {count})")]
	IndexOutOfRange {
		/// What kind of table was indexed (style, path)
		kind: &'static str,
		/// The index that was requested
		index: usize,
		/// Number of entries actually present
		count: usize,
	},

	/// A count field (styles, paths, shapes, points, stops) exceeded what
	/// the flat format or this implementation can represent.
	#[error("{what} count {count} exceeds the maximum of {max}")]
	OutOfMemory {
		/// What was being counted
		what: &'static str,
		/// The count that was requested
		count: usize,
		/// The maximum representable count
		max: usize,
	},

	/// The archive or binary stream was structurally malformed in a way not
	/// covered by a more specific variant.
	#[error("malformed {what} at offset {offset}: {reason}")]
	Malformed {
		/// What was being parsed
		what: &'static str,
		/// Offset into the buffer where the problem was found
		offset: usize,
		/// Human-readable reason
		reason: String,
	},

	/// A feature present on disk is recognized but not supported by this
	/// implementation (as opposed to being outright malformed).
	#[error("unsupported {what}: {reason}")]
	Unsupported {
		/// What was unsupported
		what: &'static str,
		/// Human-readable reason
		reason: String,
	},

	/// Underlying I/O failure (reading/writing a file or attribute).
	#[error(transparent)]
	Io(#[from] std::io::Error),
}

/// A non-fatal condition encountered while importing an archive.
///
/// Per the archive import rules, a shape whose style reference cannot be
/// resolved is dropped entirely, and a shape's dangling path references are
/// dropped individually without failing the shape. Both are reported here
/// rather than aborting the whole import.
#[derive(Debug, Clone, Error)]
pub enum ImportWarning {
	/// A shape's `style ref` did not resolve to any style in the archive;
	/// the whole shape was skipped.
	#[error("shape {shape_index} skipped: style ref {style_ref} does not resolve")]
	ShapeSkipped {
		/// Index of the shape within the archive's `shapes` message
		shape_index: usize,
		/// The unresolved style reference
		style_ref: i32,
	},

	/// A shape's `path ref` did not resolve to any path in the archive; the
	/// reference was dropped from that shape's path list.
	#[error("shape {shape_index} dropped path ref {path_ref}: does not resolve")]
	PathRefSkipped {
		/// Index of the shape within the archive's `shapes` message
		shape_index: usize,
		/// The unresolved path reference
		path_ref: i32,
	},
}
