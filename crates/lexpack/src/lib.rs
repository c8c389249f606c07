//! Lexicographically order-preserving codec for structured values.
//!
//! Maps null, booleans, numbers, strings, arrays, and objects onto byte
//! strings such that byte-wise comparison of two encodings agrees with the
//! component-wise semantic ordering of the values. Ordered key-value stores
//! accept only byte keys; this codec lets them index structured tuples while
//! keeping prefix-range and component-wise query semantics.
//!
//! Wire format:
//! - Every encoded value is one prefix byte identifying the variant,
//!   followed by the variant body.
//! - Null / MIN / MAX: empty body
//! - Bool: literal `true` or `false`
//! - Number: eight bytes from the ordered-float primitive
//! - String: raw UTF-8 bytes
//! - Array: one frame per element, each the escaped element encoding plus
//!   a `0x00` terminator (`0x01 → 0x01 0x01`, `0x00 → 0x01 0x00`)
//! - Object: entries sorted by key, laid out over array framing in either
//!   the flat or the paired form
//!
//! The default JSON-style codec registers the variant order
//! `MIN < null < object < array < number < string < bool < MAX`.
//!
//! Encoding, decoding, and comparison recurse through nested values, so
//! stack depth is proportional to nesting depth; callers decoding untrusted
//! keys should bound nesting themselves.
//!
//! # Example
//!
//! ```
//! use lexpack::{Codec, LexValue};
//!
//! let codec = Codec::json();
//! assert_eq!(codec.encode(&LexValue::Null).unwrap(), b"b");
//! assert_eq!(codec.encode(&LexValue::from("hello world")).unwrap(), b"fhello world");
//!
//! let tuple = LexValue::Array(vec![LexValue::from("user"), LexValue::from(42.0)]);
//! let key = codec.encode(&tuple).unwrap();
//! assert_eq!(codec.decode(&key).unwrap(), tuple);
//! ```

mod codec;
mod encoding;
mod error;
mod escape;
mod value;

pub mod encodings;

pub use codec::{json_entries, Codec, ObjectForm, RegistryEntry, MAX, MIN};
pub use encoding::Encoding;
pub use error::CodecError;
pub use value::{LexExtension, LexValue};
