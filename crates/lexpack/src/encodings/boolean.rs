use std::cmp::Ordering;

use crate::codec::Codec;
use crate::encoding::Encoding;
use crate::error::CodecError;
use crate::value::LexValue;

/// `bool` — body is the literal `true` or `false`.
///
/// `false < true` falls out of the byte order: `f` precedes `t`.
pub struct BoolEncoding;

impl Encoding for BoolEncoding {
    fn matches(&self, value: &LexValue) -> bool {
        matches!(value, LexValue::Bool(_))
    }

    fn encode_body(
        &self,
        value: &LexValue,
        _codec: &Codec,
        out: &mut Vec<u8>,
    ) -> Result<(), CodecError> {
        let LexValue::Bool(b) = value else {
            return Err(CodecError::UnsupportedValue);
        };
        out.extend_from_slice(if *b { b"true" } else { b"false" });
        Ok(())
    }

    fn decode_body(&self, body: &[u8], _codec: &Codec) -> Result<LexValue, CodecError> {
        match body {
            b"true" => Ok(LexValue::Bool(true)),
            b"false" => Ok(LexValue::Bool(false)),
            _ => Err(CodecError::InvalidBoolBody),
        }
    }

    fn compare(&self, a: &LexValue, b: &LexValue, _codec: &Codec) -> Result<Ordering, CodecError> {
        match (a, b) {
            (LexValue::Bool(a), LexValue::Bool(b)) => Ok(a.cmp(b)),
            _ => Err(CodecError::UnsupportedValue),
        }
    }
}
