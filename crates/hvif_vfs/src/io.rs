//! Plain file I/O wrappers: a byte source for archive import, a byte sink
//! for flat icon export (spec.md §1, §6).

use std::path::Path;

use crate::attr::VfsError;

/// Reads the entirety of `path` into memory.
pub fn read_bytes(path: &Path) -> Result<Vec<u8>, VfsError> {
	log::debug!("reading {}", path.display());
	std::fs::read(path).map_err(|source| {
		log::warn!("failed to read {}: {source}", path.display());
		VfsError::Io {
			operation: "read file",
			path: path.display().to_string(),
			source,
		}
	})
}

/// Writes `bytes` to `path`, creating or truncating it.
pub fn write_bytes(path: &Path, bytes: &[u8]) -> Result<(), VfsError> {
	log::debug!("writing {} bytes to {}", bytes.len(), path.display());
	std::fs::write(path, bytes).map_err(|source| {
		log::warn!("failed to write {}: {source}", path.display());
		VfsError::Io {
			operation: "write file",
			path: path.display().to_string(),
			source,
		}
	})
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn write_then_read_round_trips() {
		let path = std::env::temp_dir().join(format!("hvif_vfs_io_test_{}", std::process::id()));
		write_bytes(&path, b"hello").expect("write");
		let got = read_bytes(&path).expect("read");
		assert_eq!(got, b"hello");
		let _ = std::fs::remove_file(&path);
	}

	#[test]
	fn reading_a_missing_file_is_an_io_error() {
		let path = std::env::temp_dir().join("hvif_vfs_io_test_does_not_exist_12345");
		assert!(matches!(read_bytes(&path), Err(VfsError::Io { .. })));
	}
}
