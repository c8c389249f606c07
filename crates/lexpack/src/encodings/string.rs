use std::cmp::Ordering;

use crate::codec::Codec;
use crate::encoding::Encoding;
use crate::error::CodecError;
use crate::value::LexValue;

/// `string` — body is the identity UTF-8 bytes.
///
/// Comparison is byte-wise string order, which is exactly the order of the
/// identity body.
pub struct StringEncoding;

impl Encoding for StringEncoding {
    fn matches(&self, value: &LexValue) -> bool {
        matches!(value, LexValue::Str(_))
    }

    fn encode_body(
        &self,
        value: &LexValue,
        _codec: &Codec,
        out: &mut Vec<u8>,
    ) -> Result<(), CodecError> {
        let LexValue::Str(s) = value else {
            return Err(CodecError::UnsupportedValue);
        };
        out.extend_from_slice(s.as_bytes());
        Ok(())
    }

    fn decode_body(&self, body: &[u8], _codec: &Codec) -> Result<LexValue, CodecError> {
        String::from_utf8(body.to_vec())
            .map(LexValue::Str)
            .map_err(|_| CodecError::InvalidUtf8)
    }

    fn compare(&self, a: &LexValue, b: &LexValue, _codec: &Codec) -> Result<Ordering, CodecError> {
        match (a, b) {
            (LexValue::Str(a), LexValue::Str(b)) => Ok(a.as_bytes().cmp(b.as_bytes())),
            _ => Err(CodecError::UnsupportedValue),
        }
    }
}
