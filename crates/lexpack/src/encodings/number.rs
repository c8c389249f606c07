use std::cmp::Ordering;

use lexpack_ordfloat::{decode_f64, encode_f64};

use crate::codec::Codec;
use crate::encoding::Encoding;
use crate::error::CodecError;
use crate::value::LexValue;

/// `number` — body is the eight-byte ordered-float encoding.
///
/// NaN has no position in the key order and is rejected at both encode and
/// compare time.
pub struct NumberEncoding;

impl Encoding for NumberEncoding {
    fn matches(&self, value: &LexValue) -> bool {
        matches!(value, LexValue::Number(_))
    }

    fn encode_body(
        &self,
        value: &LexValue,
        _codec: &Codec,
        out: &mut Vec<u8>,
    ) -> Result<(), CodecError> {
        let LexValue::Number(x) = value else {
            return Err(CodecError::UnsupportedValue);
        };
        if x.is_nan() {
            return Err(CodecError::NanNumber);
        }
        out.extend_from_slice(&encode_f64(*x));
        Ok(())
    }

    fn decode_body(&self, body: &[u8], _codec: &Codec) -> Result<LexValue, CodecError> {
        let bytes: [u8; 8] = body
            .try_into()
            .map_err(|_| CodecError::InvalidNumberBody(body.len()))?;
        Ok(LexValue::Number(decode_f64(bytes)))
    }

    fn compare(&self, a: &LexValue, b: &LexValue, _codec: &Codec) -> Result<Ordering, CodecError> {
        match (a, b) {
            (LexValue::Number(a), LexValue::Number(b)) => {
                a.partial_cmp(b).ok_or(CodecError::NanNumber)
            }
            _ => Err(CodecError::UnsupportedValue),
        }
    }
}
