//! The attribute-writer capability (spec.md §6): `write_attr(target, name,
//! type_tag, bytes) -> status`.
//!
//! Haiku stores extended attributes with an explicit 4-byte type code
//! alongside the bytes (`BNode::WriteAttr`, grounded on
//! `FlatIconExporter::ExportToAttribute` in the original importer/exporter
//! pair). POSIX extended attributes (the `xattr(7)` family this crate
//! targets on non-Haiku Unix) have no equivalent type slot, only a
//! namespaced name, so `type_tag` is accepted for interface parity but is
//! not persisted outside Haiku.

use std::path::Path;

use thiserror::Error;

/// The host's "vector icon" attribute type tag, as `B_VECTOR_ICON_TYPE`
/// is defined on Haiku (the four characters `'VICN'` packed big-endian).
/// Passed to [`AttributeWriter::write_attr`] by callers that don't have a
/// more specific type tag of their own.
pub const VECTOR_ICON_TYPE_TAG: u32 = 0x5649_434E;

/// Errors from the attribute-writer and file I/O collaborators.
#[derive(Debug, Error)]
pub enum VfsError {
	/// The underlying file or attribute operation failed.
	#[error("{operation} failed for {path}: {source}")]
	Io {
		/// What was being attempted (e.g. "write attribute", "read file").
		operation: &'static str,
		/// The path involved.
		path: String,
		/// The underlying I/O error.
		#[source]
		source: std::io::Error,
	},

	/// This platform has no extended-attribute mechanism this crate knows
	/// how to drive.
	#[error("extended attributes are not supported on this platform")]
	AttributesUnsupported,
}

/// Abstract capability to write a named, typed attribute onto a file.
///
/// Mirrors `BNode::WriteAttr`'s `(name, type, offset, data, length)`
/// signature, minus the offset (attribute writes here are always whole-value
/// replacements, matching how the reference exporter uses it).
pub trait AttributeWriter {
	/// Writes `bytes` under the attribute `name` on `target`, tagged with
	/// `type_tag`.
	fn write_attr(&self, target: &Path, name: &str, type_tag: u32, bytes: &[u8]) -> Result<(), VfsError>;
}

/// An [`AttributeWriter`] backed by the host's POSIX extended-attribute
/// syscalls (via the `xattr` crate), available wherever `cfg(unix)` holds.
#[derive(Debug, Default, Clone, Copy)]
pub struct XattrWriter;

#[cfg(unix)]
impl XattrWriter {
	/// Maps a Haiku-style bare attribute name (e.g. `BEOS:ICON`) to the
	/// namespaced name Linux's `xattr(7)` requires. Other Unix-likes (BSD,
	/// macOS) accept bare names directly, so the name passes through
	/// unchanged there.
	fn namespaced<'a>(name: &'a str) -> std::borrow::Cow<'a, str> {
		if cfg!(target_os = "linux") && !name.contains('.') {
			std::borrow::Cow::Owned(format!("user.{name}"))
		} else {
			std::borrow::Cow::Borrowed(name)
		}
	}
}

#[cfg(unix)]
impl AttributeWriter for XattrWriter {
	fn write_attr(&self, target: &Path, name: &str, type_tag: u32, bytes: &[u8]) -> Result<(), VfsError> {
		// type_tag has no POSIX xattr equivalent; accepted for interface
		// parity with spec.md §6 and otherwise unused here.
		let _ = type_tag;
		let attr_name = Self::namespaced(name);
		log::debug!("writing {} bytes to attribute {attr_name:?} on {}", bytes.len(), target.display());
		xattr::set(target, attr_name.as_ref(), bytes).map_err(|source| {
			log::warn!("failed to write attribute {attr_name:?} on {}: {source}", target.display());
			VfsError::Io {
				operation: "write attribute",
				path: target.display().to_string(),
				source,
			}
		})
	}
}

#[cfg(not(unix))]
impl AttributeWriter for XattrWriter {
	fn write_attr(&self, _target: &Path, _name: &str, _type_tag: u32, _bytes: &[u8]) -> Result<(), VfsError> {
		Err(VfsError::AttributesUnsupported)
	}
}
