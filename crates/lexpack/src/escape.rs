//! Frame escaping for sequence bodies.
//!
//! A sequence body is the concatenation of per-element frames: the escaped
//! element encoding followed by a single `0x00` terminator. Inside a frame,
//! `0x01` becomes `0x01 0x01` and `0x00` becomes `0x01 0x00`.
//!
//! The terminator never appears inside escaped content, so frames are
//! self-delimiting. Escaping `0x00` behind the `0x01` escape byte (rather
//! than above it) keeps the byte order intact: a frame that ends orders
//! before any longer frame that continues, and escaped content preserves the
//! relative order of the raw bytes.
//!
//! Malformed bodies: an unterminated trailing frame is dropped (decoding
//! terminates on the last complete frame); an escape byte followed by
//! anything other than `0x00`/`0x01` is undecodable and raises
//! [`CodecError::InvalidEscape`].

use crate::error::CodecError;

pub(crate) const TERMINATOR: u8 = 0x00;
pub(crate) const ESCAPE: u8 = 0x01;

/// Appends one frame for `element`: the escaped bytes plus the terminator.
pub(crate) fn write_frame(element: &[u8], out: &mut Vec<u8>) {
    for &byte in element {
        match byte {
            TERMINATOR | ESCAPE => {
                out.push(ESCAPE);
                out.push(byte);
            }
            _ => out.push(byte),
        }
    }
    out.push(TERMINATOR);
}

/// Iterator over the unescaped elements of a sequence body.
pub(crate) struct Frames<'a> {
    data: &'a [u8],
    pos: usize,
}

impl<'a> Frames<'a> {
    pub(crate) fn new(data: &'a [u8]) -> Self {
        Self { data, pos: 0 }
    }
}

impl Iterator for Frames<'_> {
    type Item = Result<Vec<u8>, CodecError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.pos >= self.data.len() {
            return None;
        }
        let mut element = Vec::new();
        while self.pos < self.data.len() {
            let byte = self.data[self.pos];
            self.pos += 1;
            match byte {
                TERMINATOR => return Some(Ok(element)),
                ESCAPE => {
                    let Some(&escaped) = self.data.get(self.pos) else {
                        // Dangling escape inside an unterminated trailing
                        // frame: the frame is incomplete, drop it.
                        return None;
                    };
                    self.pos += 1;
                    match escaped {
                        TERMINATOR | ESCAPE => element.push(escaped),
                        other => return Some(Err(CodecError::InvalidEscape(other))),
                    }
                }
                other => element.push(other),
            }
        }
        // No terminator reached: drop the trailing partial frame.
        None
    }
}
