//! Codec error type.

use thiserror::Error;

/// Errors raised by codec construction, encoding, decoding, and comparison.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CodecError {
    /// `encode` or `compare` was given a value no registered encoding claims.
    #[error("no registered encoding matches the value")]
    UnsupportedValue,

    /// `decode` was given bytes whose leading byte is not a registered prefix.
    #[error("unknown prefix byte: 0x{0:02x}")]
    UnknownPrefix(u8),

    /// Two registry entries were declared with the same prefix byte.
    #[error("duplicate prefix byte in registry: 0x{0:02x}")]
    DuplicatePrefix(u8),

    /// Input ended before a complete value could be read.
    #[error("unexpected end of input")]
    UnexpectedEof,

    /// An escape byte was followed by something other than `0x00` or `0x01`.
    #[error("invalid escape pair: 0x01 0x{0:02x}")]
    InvalidEscape(u8),

    /// A string body was not valid UTF-8.
    #[error("invalid UTF-8 in string body")]
    InvalidUtf8,

    /// A number body was not exactly eight bytes long.
    #[error("number body must be 8 bytes, got {0}")]
    InvalidNumberBody(usize),

    /// A boolean body was neither `true` nor `false`.
    #[error("boolean body must be `true` or `false`")]
    InvalidBoolBody,

    /// A flat-form object body held an odd number of elements.
    #[error("flat object body has odd element count: {0}")]
    OddObjectBody(usize),

    /// An object key decoded to a non-string value.
    #[error("object key is not a string")]
    InvalidObjectKey,

    /// A paired-form object element was not a two-element array.
    #[error("paired object entry is not a two-element array")]
    InvalidObjectPair,

    /// NaN has no position in the key order and cannot be encoded.
    #[error("cannot encode or compare NaN")]
    NanNumber,
}
