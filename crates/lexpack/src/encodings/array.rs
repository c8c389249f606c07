use std::cmp::Ordering;

use crate::codec::Codec;
use crate::encoding::Encoding;
use crate::error::CodecError;
use crate::escape::{write_frame, Frames};
use crate::value::LexValue;

/// `array` — one frame per element over the recursive element encodings.
///
/// Comparison is component-wise: the first differing pair of elements
/// decides, and when one array is a prefix of the other the shorter one is
/// less. The frame terminator makes the byte order agree: a frame ends with
/// `0x00`, which is below every escaped content byte.
pub struct ArrayEncoding;

impl Encoding for ArrayEncoding {
    fn matches(&self, value: &LexValue) -> bool {
        matches!(value, LexValue::Array(_))
    }

    fn encode_body(
        &self,
        value: &LexValue,
        codec: &Codec,
        out: &mut Vec<u8>,
    ) -> Result<(), CodecError> {
        let LexValue::Array(elements) = value else {
            return Err(CodecError::UnsupportedValue);
        };
        for element in elements {
            let encoded = codec.encode(element)?;
            write_frame(&encoded, out);
        }
        Ok(())
    }

    fn decode_body(&self, body: &[u8], codec: &Codec) -> Result<LexValue, CodecError> {
        let mut elements = Vec::new();
        for frame in Frames::new(body) {
            elements.push(codec.decode(&frame?)?);
        }
        Ok(LexValue::Array(elements))
    }

    fn compare(&self, a: &LexValue, b: &LexValue, codec: &Codec) -> Result<Ordering, CodecError> {
        let (LexValue::Array(a), LexValue::Array(b)) = (a, b) else {
            return Err(CodecError::UnsupportedValue);
        };
        compare_elements(a, b, codec)
    }
}

fn compare_elements(
    a: &[LexValue],
    b: &[LexValue],
    codec: &Codec,
) -> Result<Ordering, CodecError> {
    for (x, y) in a.iter().zip(b) {
        let ord = codec.compare(x, y)?;
        if ord != Ordering::Equal {
            return Ok(ord);
        }
    }
    Ok(a.len().cmp(&b.len()))
}
