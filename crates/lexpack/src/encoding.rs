//! The per-variant encoding contract.

use std::cmp::Ordering;

use crate::codec::Codec;
use crate::error::CodecError;
use crate::value::LexValue;

/// One registered variant of a [`Codec`].
///
/// An encoding owns everything about its variant except the prefix byte,
/// which lives in the registry entry. The codec is passed into each call as
/// the recursion handle for nested values; encodings never store it.
///
/// The contract that makes the whole scheme work: for any two values this
/// encoding claims, [`compare`](Encoding::compare) must agree with the
/// byte-wise comparison of the bodies produced by
/// [`encode_body`](Encoding::encode_body).
pub trait Encoding {
    /// Whether this encoding claims `value`. Matchers are first-match in
    /// registry order, so an encoding registered earlier wins ties.
    fn matches(&self, value: &LexValue) -> bool;

    /// Appends the body (everything after the prefix byte) for `value`.
    fn encode_body(
        &self,
        value: &LexValue,
        codec: &Codec,
        out: &mut Vec<u8>,
    ) -> Result<(), CodecError>;

    /// Inverse of [`encode_body`](Encoding::encode_body).
    fn decode_body(&self, body: &[u8], codec: &Codec) -> Result<LexValue, CodecError>;

    /// In-memory comparison of two values this encoding claims.
    fn compare(&self, a: &LexValue, b: &LexValue, codec: &Codec)
        -> Result<Ordering, CodecError>;
}
