use std::cmp::Ordering;

use crate::codec::Codec;
use crate::encoding::Encoding;
use crate::error::CodecError;
use crate::value::LexValue;

/// `null` — empty body; all nulls compare equal.
pub struct NullEncoding;

impl Encoding for NullEncoding {
    fn matches(&self, value: &LexValue) -> bool {
        matches!(value, LexValue::Null)
    }

    fn encode_body(
        &self,
        _value: &LexValue,
        _codec: &Codec,
        _out: &mut Vec<u8>,
    ) -> Result<(), CodecError> {
        Ok(())
    }

    fn decode_body(&self, _body: &[u8], _codec: &Codec) -> Result<LexValue, CodecError> {
        Ok(LexValue::Null)
    }

    fn compare(
        &self,
        _a: &LexValue,
        _b: &LexValue,
        _codec: &Codec,
    ) -> Result<Ordering, CodecError> {
        Ok(Ordering::Equal)
    }
}
