//! 3-byte truncated-float codec used for transformer matrices and gradient
//! transforms.
//!
//! The layout is 1 sign bit, 6 exponent bits biased by 32, and the top 17
//! bits of a binary32 mantissa — a binary32 with its low 6 mantissa bits and
//! most of its exponent range discarded.

/// Encodes `value` as 3 bytes, appended to `out`.
///
/// Values whose unbiased exponent falls outside `-32..32` collapse to three
/// zero bytes, matching the reference encoder exactly (this also means
/// `0.0` and subnormal-adjacent tiny values both encode as all-zero).
pub fn write_float24(out: &mut Vec<u8>, value: f32) {
	let bits = value.to_bits();
	let sign = (bits >> 31) & 0x1;
	let exponent = ((bits >> 23) & 0xff) as i32 - 127;
	let mantissa = bits & 0x007f_ffff;

	if !(-32..32).contains(&exponent) {
		out.extend_from_slice(&[0, 0, 0]);
		return;
	}

	let short_value = (sign << 23) | (((exponent + 32) as u32) << 17) | (mantissa >> 6);
	out.push((short_value >> 16) as u8);
	out.push(((short_value >> 8) & 0xff) as u8);
	out.push((short_value & 0xff) as u8);
}

/// Decodes a 3-byte truncated float from `data` starting at `*offset`,
/// advancing `*offset` by 3 on success.
pub fn read_float24(data: &[u8], offset: &mut usize) -> Option<f32> {
	let b0 = *data.get(*offset)?;
	let b1 = *data.get(*offset + 1)?;
	let b2 = *data.get(*offset + 2)?;
	*offset += 3;

	let short_value = (u32::from(b0) << 16) | (u32::from(b1) << 8) | u32::from(b2);
	if short_value == 0 {
		return Some(0.0);
	}

	let sign = (short_value >> 23) & 0x1;
	let exponent = ((short_value >> 17) & 0x3f) as i32 - 32;
	let mantissa = (short_value & 0x0001_ffff) << 6;

	let bits = (sign << 31) | (((exponent + 127) as u32) << 23) | mantissa;
	Some(f32::from_bits(bits))
}

#[cfg(test)]
mod tests {
	use super::*;

	fn roundtrip(value: f32) -> f32 {
		let mut buf = Vec::new();
		write_float24(&mut buf, value);
		assert_eq!(buf.len(), 3);
		let mut offset = 0;
		let decoded = read_float24(&buf, &mut offset).expect("decode");
		assert_eq!(offset, 3);
		decoded
	}

	#[test]
	fn zero_roundtrips_exactly() {
		assert_eq!(roundtrip(0.0), 0.0);
	}

	#[test]
	fn representative_values_roundtrip_within_mantissa_precision() {
		for v in [1.0_f32, -1.0, 0.5, 2.0, 100.0, -100.0, 1.0 / 3.0] {
			let out = roundtrip(v);
			assert!(
				(out - v).abs() <= v.abs() * (1.0 / 131072.0) + 1e-6,
				"{v} roundtripped to {out}"
			);
		}
	}

	#[test]
	fn out_of_range_exponent_collapses_to_zero() {
		assert_eq!(roundtrip(1.0e20), 0.0);
		assert_eq!(roundtrip(1.0e-20), 0.0);
	}

	#[test]
	fn read_returns_none_on_truncated_input() {
		let mut offset = 0;
		assert!(read_float24(&[0, 0], &mut offset).is_none());
	}
}
