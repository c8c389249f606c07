use std::cmp::Ordering;

use crate::codec::{Codec, ObjectForm};
use crate::encoding::Encoding;
use crate::error::CodecError;
use crate::escape::{write_frame, Frames};
use crate::value::LexValue;

/// `object` — entries canonically sorted by key, then laid out over array
/// framing.
///
/// Two layouts exist, chosen at codec construction:
///
/// - [`ObjectForm::Flat`]: the sorted entries flattened to
///   `[k0, v0, k1, v1, …]`, each element framed individually.
/// - [`ObjectForm::Paired`]: each sorted entry encoded as a two-element
///   array `[k, v]`. Kept for data written by earlier deployments.
///
/// Both layouts produce the same ordering, because entry-wise comparison
/// with keys before values agrees with the flattened comparison.
pub struct ObjectEncoding {
    form: ObjectForm,
}

impl ObjectEncoding {
    pub fn new(form: ObjectForm) -> Self {
        Self { form }
    }
}

impl Encoding for ObjectEncoding {
    fn matches(&self, value: &LexValue) -> bool {
        matches!(value, LexValue::Object(_))
    }

    fn encode_body(
        &self,
        value: &LexValue,
        codec: &Codec,
        out: &mut Vec<u8>,
    ) -> Result<(), CodecError> {
        let LexValue::Object(entries) = value else {
            return Err(CodecError::UnsupportedValue);
        };
        match self.form {
            ObjectForm::Flat => {
                for (key, val) in sorted_entries(entries) {
                    let encoded_key = codec.encode(&LexValue::Str(key.clone()))?;
                    write_frame(&encoded_key, out);
                    let encoded_val = codec.encode(val)?;
                    write_frame(&encoded_val, out);
                }
            }
            ObjectForm::Paired => {
                for (key, val) in sorted_entries(entries) {
                    let pair =
                        LexValue::Array(vec![LexValue::Str(key.clone()), val.clone()]);
                    let encoded = codec.encode(&pair)?;
                    write_frame(&encoded, out);
                }
            }
        }
        Ok(())
    }

    fn decode_body(&self, body: &[u8], codec: &Codec) -> Result<LexValue, CodecError> {
        let mut elements = Vec::new();
        for frame in Frames::new(body) {
            elements.push(codec.decode(&frame?)?);
        }
        match self.form {
            ObjectForm::Flat => {
                if elements.len() % 2 != 0 {
                    return Err(CodecError::OddObjectBody(elements.len()));
                }
                let mut entries = Vec::with_capacity(elements.len() / 2);
                let mut elements = elements.into_iter();
                while let (Some(key), Some(val)) = (elements.next(), elements.next()) {
                    let LexValue::Str(key) = key else {
                        return Err(CodecError::InvalidObjectKey);
                    };
                    entries.push((key, val));
                }
                Ok(LexValue::Object(entries))
            }
            ObjectForm::Paired => {
                let mut entries = Vec::with_capacity(elements.len());
                for element in elements {
                    let LexValue::Array(pair) = element else {
                        return Err(CodecError::InvalidObjectPair);
                    };
                    if pair.len() != 2 {
                        return Err(CodecError::InvalidObjectPair);
                    }
                    let mut pair = pair.into_iter();
                    let (Some(key), Some(val)) = (pair.next(), pair.next()) else {
                        return Err(CodecError::InvalidObjectPair);
                    };
                    let LexValue::Str(key) = key else {
                        return Err(CodecError::InvalidObjectKey);
                    };
                    entries.push((key, val));
                }
                Ok(LexValue::Object(entries))
            }
        }
    }

    fn compare(&self, a: &LexValue, b: &LexValue, codec: &Codec) -> Result<Ordering, CodecError> {
        let (LexValue::Object(a), LexValue::Object(b)) = (a, b) else {
            return Err(CodecError::UnsupportedValue);
        };
        let a = sorted_entries(a);
        let b = sorted_entries(b);
        for ((key_a, val_a), (key_b, val_b)) in a.iter().zip(&b) {
            let ord = key_a.as_bytes().cmp(key_b.as_bytes());
            if ord != Ordering::Equal {
                return Ok(ord);
            }
            let ord = codec.compare(val_a, val_b)?;
            if ord != Ordering::Equal {
                return Ok(ord);
            }
        }
        Ok(a.len().cmp(&b.len()))
    }
}

/// Canonical entry order: ascending by key, byte-wise — the same order the
/// string encoding produces on the wire.
fn sorted_entries(entries: &[(String, LexValue)]) -> Vec<(&String, &LexValue)> {
    let mut sorted: Vec<_> = entries.iter().map(|(k, v)| (k, v)).collect();
    sorted.sort_by(|a, b| a.0.as_bytes().cmp(b.0.as_bytes()));
    sorted
}
