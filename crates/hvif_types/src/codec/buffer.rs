//! Growable little-endian write buffer and bounds-checked read cursor.
//!
//! In the reference implementation these wrap a manually `realloc`'d byte
//! array that grows in 256-byte chunks. A `Vec<u8>` already gives amortized
//! growth for free, so `WriteBuffer` is a thin wrapper whose job is to fix
//! the byte layout (little-endian scalars) rather than to manage memory.

use crate::codec::coord::{read_coord, write_coord};
use crate::codec::float24::{read_float24, write_float24};
use crate::icon::error::HvifError;

/// A growable little-endian output buffer.
#[derive(Debug, Default, Clone)]
pub struct WriteBuffer {
	bytes: Vec<u8>,
}

impl WriteBuffer {
	/// Creates an empty buffer.
	#[must_use]
	pub fn new() -> Self {
		Self::default()
	}

	/// Returns the bytes written so far.
	#[must_use]
	pub fn as_slice(&self) -> &[u8] {
		&self.bytes
	}

	/// Consumes the buffer, returning the accumulated bytes.
	#[must_use]
	pub fn into_vec(self) -> Vec<u8> {
		self.bytes
	}

	/// Number of bytes written so far.
	#[must_use]
	pub fn len(&self) -> usize {
		self.bytes.len()
	}

	/// Whether no bytes have been written yet.
	#[must_use]
	pub fn is_empty(&self) -> bool {
		self.bytes.is_empty()
	}

	/// Writes a single byte.
	pub fn write_u8(&mut self, value: u8) {
		self.bytes.push(value);
	}

	/// Writes a 16-bit value, little-endian.
	pub fn write_u16(&mut self, value: u16) {
		self.bytes.extend_from_slice(&value.to_le_bytes());
	}

	/// Writes a 32-bit value, little-endian.
	pub fn write_u32(&mut self, value: u32) {
		self.bytes.extend_from_slice(&value.to_le_bytes());
	}

	/// Writes a 32-bit value, big-endian.
	///
	/// Used only for the flat icon magic, whose four on-disk bytes are
	/// fixed regardless of host or container endianness conventions.
	pub fn write_u32_be(&mut self, value: u32) {
		self.bytes.extend_from_slice(&value.to_be_bytes());
	}

	/// Writes raw bytes verbatim.
	pub fn write_bytes(&mut self, data: &[u8]) {
		self.bytes.extend_from_slice(data);
	}

	/// Appends the contents of another buffer, consuming it.
	///
	/// Mirrors `LittleEndianBuffer::Write(LittleEndianBuffer&)`, the
	/// sub-buffer transfer used to splice a deferred-length section (such as
	/// the path command stream) into its parent once its size is known.
	pub fn append(&mut self, other: WriteBuffer) {
		self.bytes.extend(other.bytes);
	}

	/// Writes an adaptive 1- or 2-byte coordinate (see
	/// [`crate::codec::coord`]).
	pub fn write_coord(&mut self, coord: f32) {
		write_coord(&mut self.bytes, coord);
	}

	/// Writes a 3-byte truncated float (see [`crate::codec::float24`]).
	pub fn write_float24(&mut self, value: f32) {
		write_float24(&mut self.bytes, value);
	}
}

/// A bounds-checked little-endian input cursor over a borrowed byte slice.
#[derive(Debug, Clone, Copy)]
pub struct ReadCursor<'a> {
	data: &'a [u8],
	pos: usize,
}

impl<'a> ReadCursor<'a> {
	/// Wraps `data` for reading from the start.
	#[must_use]
	pub fn new(data: &'a [u8]) -> Self {
		Self { data, pos: 0 }
	}

	/// Current byte offset into the underlying data.
	#[must_use]
	pub fn position(&self) -> usize {
		self.pos
	}

	/// Number of bytes remaining to be read.
	#[must_use]
	pub fn remaining(&self) -> usize {
		self.data.len() - self.pos
	}

	fn take(&mut self, n: usize) -> Result<&'a [u8], HvifError> {
		if self.remaining() < n {
			return Err(HvifError::UnexpectedEof {
				wanted: n,
				offset: self.pos,
				available: self.remaining(),
			});
		}
		let slice = &self.data[self.pos..self.pos + n];
		self.pos += n;
		Ok(slice)
	}

	/// Reads a single byte.
	pub fn read_u8(&mut self) -> Result<u8, HvifError> {
		Ok(self.take(1)?[0])
	}

	/// Reads a 16-bit value, little-endian.
	pub fn read_u16(&mut self) -> Result<u16, HvifError> {
		let b = self.take(2)?;
		Ok(u16::from_le_bytes([b[0], b[1]]))
	}

	/// Reads a 32-bit value, little-endian.
	pub fn read_u32(&mut self) -> Result<u32, HvifError> {
		let b = self.take(4)?;
		Ok(u32::from_le_bytes([b[0], b[1], b[2], b[3]]))
	}

	/// Reads a 32-bit value, big-endian (used only for the flat icon magic).
	pub fn read_u32_be(&mut self) -> Result<u32, HvifError> {
		let b = self.take(4)?;
		Ok(u32::from_be_bytes([b[0], b[1], b[2], b[3]]))
	}

	/// Reads `n` raw bytes.
	pub fn read_bytes(&mut self, n: usize) -> Result<&'a [u8], HvifError> {
		self.take(n)
	}

	/// Skips `n` bytes without interpreting them.
	pub fn skip(&mut self, n: usize) -> Result<(), HvifError> {
		self.take(n)?;
		Ok(())
	}

	/// Splits off a sub-cursor over the next `n` bytes, advancing past them.
	///
	/// Mirrors `LittleEndianBuffer::Read(LittleEndianBuffer&, size_t)`: the
	/// path command stream and other length-prefixed sections are parsed
	/// through a cursor scoped to exactly their own bytes.
	pub fn read_sub_cursor(&mut self, n: usize) -> Result<ReadCursor<'a>, HvifError> {
		let slice = self.take(n)?;
		Ok(ReadCursor::new(slice))
	}

	/// Reads an adaptive 1- or 2-byte coordinate (see
	/// [`crate::codec::coord`]).
	pub fn read_coord(&mut self) -> Result<f32, HvifError> {
		let offset_before = self.pos;
		let remaining = self.remaining();
		let mut local = 0usize;
		let value =
			read_coord(&self.data[self.pos..], &mut local).ok_or(HvifError::UnexpectedEof {
				wanted: 1,
				offset: offset_before,
				available: remaining,
			})?;
		self.pos += local;
		Ok(value)
	}

	/// Reads a 3-byte truncated float (see [`crate::codec::float24`]).
	pub fn read_float24(&mut self) -> Result<f32, HvifError> {
		let b = self.take(3)?;
		let mut local = 0usize;
		read_float24(b, &mut local).ok_or(HvifError::UnexpectedEof {
			wanted: 3,
			offset: self.pos - 3,
			available: self.remaining() + 3,
		})
	}
}
