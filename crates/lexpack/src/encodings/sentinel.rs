use std::cmp::Ordering;

use crate::codec::Codec;
use crate::encoding::Encoding;
use crate::error::CodecError;
use crate::value::LexValue;

/// `MIN` / `MAX` — empty-body range bounds.
///
/// Their prefixes are registered as the smallest and largest bytes of the
/// registry, so they bound every other variant. Decoding yields a neutral
/// `null`; sentinels are range markers, not round-trippable data.
pub struct SentinelEncoding {
    max: bool,
}

impl SentinelEncoding {
    /// The lower bound encoding.
    pub fn min() -> Self {
        Self { max: false }
    }

    /// The upper bound encoding.
    pub fn max() -> Self {
        Self { max: true }
    }
}

impl Encoding for SentinelEncoding {
    fn matches(&self, value: &LexValue) -> bool {
        match value {
            LexValue::Min => !self.max,
            LexValue::Max => self.max,
            _ => false,
        }
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
        // Both sides matched the same sentinel.
        Ok(Ordering::Equal)
    }
}
