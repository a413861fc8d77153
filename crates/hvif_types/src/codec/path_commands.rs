//! 2-bit-per-point path command stream.
//!
//! Each control point is encoded as one of four opcodes packed 4-per-byte
//! into a leading command segment, followed by a payload segment of
//! [`coord`](super::coord) values. The two segments are written and read as
//! two independently length-prefixed sub-sections of the parent buffer (see
//! [`crate::codec::buffer`]).

use crate::codec::buffer::{ReadCursor, WriteBuffer};
use crate::icon::error::HvifError;
use crate::icon::path::ControlPoint;

const H_LINE: u8 = 0;
const V_LINE: u8 = 1;
const LINE: u8 = 2;
const CURVE: u8 = 3;

struct CommandWriter {
	command_buffer: WriteBuffer,
	command_byte: u8,
	command_pos: u8,
	command_count: usize,
}

impl CommandWriter {
	fn new() -> Self {
		Self {
			command_buffer: WriteBuffer::new(),
			command_byte: 0,
			command_pos: 0,
			command_count: 0,
		}
	}

	fn append(&mut self, command: u8) -> Result<(), HvifError> {
		if self.command_count == 255 {
			return Err(HvifError::OutOfMemory {
				what: "path commands",
				count: self.command_count + 1,
				max: 255,
			});
		}

		self.command_byte |= command << self.command_pos;
		self.command_pos += 2;
		self.command_count += 1;

		if self.command_pos == 8 {
			self.command_buffer.write_u8(self.command_byte);
			self.command_byte = 0;
			self.command_pos = 0;
		}

		Ok(())
	}

	fn finish(mut self) -> WriteBuffer {
		if self.command_pos > 0 {
			self.command_buffer.write_u8(self.command_byte);
		}
		self.command_buffer
	}
}

/// Encodes `points` into a command segment and a payload segment.
///
/// Opcode selection compares each point against the *previous point in this
/// call* (seeded at `(0.0, 0.0)`, not the path's own first point, matching
/// the reference encoder): if a point's in/out control handles coincide
/// with the point itself, it is a straight segment, further narrowed to
/// `V_LINE`/`H_LINE` when it shares an axis with the previous point (x
/// checked before y); a point with distinct handles is always a `CURVE`.
/// This seeding means the very first point of a path can be encoded as
/// `H_LINE` or `V_LINE` whenever it happens to share an axis with the
/// origin, not only `LINE`.
///
/// Returns `HvifError::OutOfMemory` if `points.len()` exceeds 255, since the
/// command counter is a single byte.
pub fn write_path_commands(
	points: &[ControlPoint],
) -> Result<(WriteBuffer, WriteBuffer), HvifError> {
	if points.len() > 255 {
		return Err(HvifError::OutOfMemory {
			what: "path points",
			count: points.len(),
			max: 255,
		});
	}

	let mut commands = CommandWriter::new();
	let mut payload = WriteBuffer::new();
	let mut last = (0.0_f32, 0.0_f32);

	for cp in points {
		let is_straight = cp.point == cp.point_in && cp.point == cp.point_out;

		if is_straight && cp.point.0 == last.0 {
			commands.append(V_LINE)?;
			payload.write_coord(cp.point.1);
		} else if is_straight && cp.point.1 == last.1 {
			commands.append(H_LINE)?;
			payload.write_coord(cp.point.0);
		} else if is_straight {
			commands.append(LINE)?;
			payload.write_coord(cp.point.0);
			payload.write_coord(cp.point.1);
		} else {
			commands.append(CURVE)?;
			payload.write_coord(cp.point.0);
			payload.write_coord(cp.point.1);
			payload.write_coord(cp.point_in.0);
			payload.write_coord(cp.point_in.1);
			payload.write_coord(cp.point_out.0);
			payload.write_coord(cp.point_out.1);
		}

		last = cp.point;
	}

	Ok((commands.finish(), payload))
}

/// Decodes `point_count` control points from a command cursor and a payload
/// cursor, as produced by [`write_path_commands`].
///
/// `commands` must hold exactly `ceil(point_count / 4)` bytes. Decoded
/// points always have `connected = false`; the `connected` flag is only
/// meaningful on archive-imported paths and is not part of the flat wire
/// format (see [`crate::icon::path`]).
pub fn read_path_commands(
	commands: &mut ReadCursor<'_>,
	payload: &mut ReadCursor<'_>,
	point_count: usize,
) -> Result<Vec<ControlPoint>, HvifError> {
	let mut command_byte: u8 = 0;
	let mut command_pos: u8 = 0;

	let mut out = Vec::with_capacity(point_count);
	let mut last = (0.0_f32, 0.0_f32);

	for _ in 0..point_count {
		if command_pos == 0 {
			command_byte = commands.read_u8()?;
		}

		let command = (command_byte >> command_pos) & 0x03;
		command_pos += 2;
		if command_pos == 8 {
			command_pos = 0;
		}

		let cp = match command {
			H_LINE => {
				let x = payload.read_coord()?;
				let point = (x, last.1);
				ControlPoint::corner(point)
			}
			V_LINE => {
				let y = payload.read_coord()?;
				let point = (last.0, y);
				ControlPoint::corner(point)
			}
			LINE => {
				let point = (payload.read_coord()?, payload.read_coord()?);
				ControlPoint::corner(point)
			}
			CURVE => {
				let point = (payload.read_coord()?, payload.read_coord()?);
				let point_in = (payload.read_coord()?, payload.read_coord()?);
				let point_out = (payload.read_coord()?, payload.read_coord()?);
				ControlPoint {
					point,
					point_in,
					point_out,
					connected: false,
				}
			}
			_ => unreachable!("2-bit command always in 0..4"),
		};

		last = cp.point;
		out.push(cp);
	}

	Ok(out)
}

#[cfg(test)]
mod tests {
	use super::*;

	fn straight(x: f32, y: f32) -> ControlPoint {
		ControlPoint::corner((x, y))
	}

	fn curve(point: (f32, f32), point_in: (f32, f32), point_out: (f32, f32)) -> ControlPoint {
		ControlPoint {
			point,
			point_in,
			point_out,
			connected: false,
		}
	}

	#[test]
	fn first_point_at_origin_prefers_v_line() {
		let points = vec![straight(0.0, 5.0)];
		let (commands, _) = write_path_commands(&points).unwrap();
		assert_eq!(commands.as_slice()[0] & 0x03, V_LINE);
	}

	#[test]
	fn first_point_sharing_y_with_origin_is_h_line() {
		let points = vec![straight(5.0, 0.0)];
		let (commands, _) = write_path_commands(&points).unwrap();
		assert_eq!(commands.as_slice()[0] & 0x03, H_LINE);
	}

	#[test]
	fn first_point_off_both_axes_is_line() {
		let points = vec![straight(5.0, 5.0)];
		let (commands, _) = write_path_commands(&points).unwrap();
		assert_eq!(commands.as_slice()[0] & 0x03, LINE);
	}

	#[test]
	fn mismatched_handles_force_curve() {
		let points = vec![curve((0.0, 0.0), (1.0, 1.0), (-1.0, -1.0))];
		let (commands, _) = write_path_commands(&points).unwrap();
		assert_eq!(commands.as_slice()[0] & 0x03, CURVE);
	}

	#[test]
	fn square_path_roundtrips() {
		let points = vec![
			straight(0.0, 0.0),
			straight(10.0, 0.0),
			straight(10.0, 10.0),
			straight(0.0, 10.0),
		];
		let (commands, payload) = write_path_commands(&points).unwrap();
		assert_eq!(commands.len(), 1);

		let command_bytes = commands.into_vec();
		let payload_bytes = payload.into_vec();
		let mut command_cursor = ReadCursor::new(&command_bytes);
		let mut payload_cursor = ReadCursor::new(&payload_bytes);
		let decoded =
			read_path_commands(&mut command_cursor, &mut payload_cursor, points.len()).unwrap();

		assert_eq!(decoded.len(), points.len());
		for (original, got) in points.iter().zip(decoded.iter()) {
			assert_eq!(original.point, got.point);
		}
	}

	#[test]
	fn more_than_255_points_is_out_of_memory() {
		let points = vec![straight(1.0, 1.0); 256];
		assert!(write_path_commands(&points).is_err());
	}
}
