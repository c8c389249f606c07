//! The codec: a prefix-byte registry plus the three top-level operations.

use std::cmp::Ordering;
use std::ptr;

use crate::encoding::Encoding;
use crate::encodings::{
    ArrayEncoding, BoolEncoding, NullEncoding, NumberEncoding, ObjectEncoding, SentinelEncoding,
    StringEncoding,
};
use crate::error::CodecError;
use crate::value::LexValue;

/// Lower range bound; sorts strictly below every representable value.
pub const MIN: LexValue = LexValue::Min;

/// Upper range bound; sorts strictly above every representable value.
pub const MAX: LexValue = LexValue::Max;

/// How object entries are laid out over array framing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ObjectForm {
    /// Sorted entries flattened to `[k0, v0, k1, v1, …]`.
    #[default]
    Flat,
    /// Sorted entries as two-element `[k, v]` arrays. Kept so data written
    /// by earlier deployments stays readable.
    Paired,
}

/// One registered variant: a prefix byte and the encoding that owns it.
pub struct RegistryEntry {
    pub prefix: u8,
    pub encoding: Box<dyn Encoding>,
}

impl RegistryEntry {
    pub fn new(prefix: u8, encoding: impl Encoding + 'static) -> Self {
        Self {
            prefix,
            encoding: Box::new(encoding),
        }
    }
}

/// An order-preserving codec over a fixed registry of encodings.
///
/// A codec is immutable once constructed: every operation takes `&self` and
/// allocates per call, so one instance can serve concurrent callers without
/// coordination.
///
/// Registry order matters twice. The prefix bytes define the inter-variant
/// order on the wire. The declared entry order is the match order for
/// [`encode`](Codec::encode) and [`compare`](Codec::compare): the first
/// entry whose matcher accepts a value wins, which is how overlapping
/// matchers (say, a user-defined variant that an object matcher would also
/// claim) are disambiguated.
pub struct Codec {
    entries: Vec<RegistryEntry>,
}

impl Codec {
    /// Builds a codec from encodings in declared order.
    ///
    /// Fails with [`CodecError::DuplicatePrefix`] if two entries share a
    /// prefix byte.
    pub fn new(entries: Vec<RegistryEntry>) -> Result<Self, CodecError> {
        for (i, entry) in entries.iter().enumerate() {
            if entries[..i].iter().any(|e| e.prefix == entry.prefix) {
                return Err(CodecError::DuplicatePrefix(entry.prefix));
            }
        }
        Ok(Self { entries })
    }

    /// The default JSON-style codec with flat-form objects.
    #[must_use]
    pub fn json() -> Self {
        // The default table has statically distinct prefixes.
        Self {
            entries: json_entries(ObjectForm::Flat),
        }
    }

    /// The JSON-style codec with an explicit object form.
    #[must_use]
    pub fn json_with_object_form(form: ObjectForm) -> Self {
        Self {
            entries: json_entries(form),
        }
    }

    /// Encodes a value into its ordered byte key: the prefix byte of the
    /// first matching encoding, followed by that encoding's body.
    pub fn encode(&self, value: &LexValue) -> Result<Vec<u8>, CodecError> {
        let entry = self.entry_for(value)?;
        let mut out = vec![entry.prefix];
        entry.encoding.encode_body(value, self, &mut out)?;
        Ok(out)
    }

    /// Decodes a byte key back into a value.
    pub fn decode(&self, bytes: &[u8]) -> Result<LexValue, CodecError> {
        let (&prefix, body) = bytes.split_first().ok_or(CodecError::UnexpectedEof)?;
        let entry = self
            .entries
            .iter()
            .find(|entry| entry.prefix == prefix)
            .ok_or(CodecError::UnknownPrefix(prefix))?;
        entry.encoding.decode_body(body, self)
    }

    /// Compares two values the way their encodings would compare byte-wise.
    ///
    /// Values claimed by different encodings compare by prefix byte; values
    /// claimed by the same encoding delegate to its comparator.
    pub fn compare(&self, a: &LexValue, b: &LexValue) -> Result<Ordering, CodecError> {
        if ptr::eq(a, b) {
            return Ok(Ordering::Equal);
        }
        let entry_a = self.entry_for(a)?;
        let entry_b = self.entry_for(b)?;
        if entry_a.prefix != entry_b.prefix {
            return Ok(entry_a.prefix.cmp(&entry_b.prefix));
        }
        entry_a.encoding.compare(a, b, self)
    }

    fn entry_for(&self, value: &LexValue) -> Result<&RegistryEntry, CodecError> {
        self.entries
            .iter()
            .find(|entry| entry.encoding.matches(value))
            .ok_or(CodecError::UnsupportedValue)
    }
}

impl std::fmt::Debug for Codec {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let prefixes: Vec<u8> = self.entries.iter().map(|entry| entry.prefix).collect();
        f.debug_struct("Codec").field("prefixes", &prefixes).finish()
    }
}

/// The registry of the default JSON-style codec, in declared order:
///
/// ```text
/// 0x00 → MIN
///  'b' → null
///  'c' → object
///  'd' → array
///  'e' → number
///  'f' → string
///  'g' → bool
/// 0xff → MAX
/// ```
///
/// Public so callers can splice their own encodings into the list (before
/// the object entry, if their matcher would otherwise lose to it) and build
/// a custom [`Codec`].
#[must_use]
pub fn json_entries(form: ObjectForm) -> Vec<RegistryEntry> {
    vec![
        RegistryEntry::new(0x00, SentinelEncoding::min()),
        RegistryEntry::new(b'b', NullEncoding),
        RegistryEntry::new(b'c', ObjectEncoding::new(form)),
        RegistryEntry::new(b'd', ArrayEncoding),
        RegistryEntry::new(b'e', NumberEncoding),
        RegistryEntry::new(b'f', StringEncoding),
        RegistryEntry::new(b'g', BoolEncoding),
        RegistryEntry::new(0xff, SentinelEncoding::max()),
    ]
}
