//! Order-preserving byte encoding for signed `f64` values.
//!
//! [`encode_f64`] maps a double onto eight big-endian bytes whose natural
//! lexicographic order equals the numeric order of the inputs; [`decode_f64`]
//! is its inverse. This lets a double participate in composite byte keys for
//! ordered key-value stores.
//!
//! The transform works on the IEEE-754 bit pattern: positive values (sign bit
//! clear) get the sign bit flipped so they sort above all negatives; negative
//! values get every bit flipped so that more-negative values sort first.
//! Negative zero is collapsed to positive zero before the transform, keeping
//! the encoding injective over numeric values (`-0.0` and `0.0` compare equal
//! numerically and must not produce distinct keys).
//!
//! `±INFINITY` encode and order correctly at the extremes of the range. NaN
//! has no numeric ordering and gets none here; callers are expected to reject
//! NaN before encoding.

const SIGN_BIT: u64 = 1 << 63;

/// Encodes a double into eight bytes that sort in numeric order.
///
/// # Example
///
/// ```
/// use lexpack_ordfloat::encode_f64;
///
/// assert!(encode_f64(-2.0) < encode_f64(-1.5));
/// assert!(encode_f64(-1.5) < encode_f64(0.0));
/// assert!(encode_f64(0.0) < encode_f64(10.0));
/// assert_eq!(encode_f64(-0.0), encode_f64(0.0));
/// ```
#[must_use]
pub fn encode_f64(value: f64) -> [u8; 8] {
    // Collapse -0.0: numerically equal values must encode identically.
    let value = if value == 0.0 { 0.0 } else { value };
    let bits = value.to_bits();
    let mask = if bits & SIGN_BIT == 0 { SIGN_BIT } else { u64::MAX };
    (bits ^ mask).to_be_bytes()
}

/// Decodes eight bytes produced by [`encode_f64`] back into a double.
///
/// # Example
///
/// ```
/// use lexpack_ordfloat::{decode_f64, encode_f64};
///
/// assert_eq!(decode_f64(encode_f64(-273.15)), -273.15);
/// ```
#[must_use]
pub fn decode_f64(bytes: [u8; 8]) -> f64 {
    let bits = u64::from_be_bytes(bytes);
    let mask = if bits & SIGN_BIT == 0 { u64::MAX } else { SIGN_BIT };
    f64::from_bits(bits ^ mask)
}
