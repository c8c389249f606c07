//! A fixture of representable values in strictly ascending codec order.
//!
//! Covers every variant of the default JSON-style codec (null, objects,
//! arrays, numbers, strings with embedded `\x00`/`\x01`, booleans) so the
//! order matrices can check all pairs against their fixture rank.

use lexpack::LexValue;

use super::{arr, obj};

pub const MAX_SAFE_INTEGER: f64 = 9_007_199_254_740_991.0;

pub fn sorted_fixture() -> Vec<LexValue> {
    vec![
        // null
        LexValue::Null,
        // objects: empty body first, then by first sorted entry
        obj(&[]),
        obj(&[("a", LexValue::from(1.0))]),
        obj(&[("a", LexValue::from(2.0))]),
        obj(&[("a", LexValue::from(2.0)), ("b", LexValue::from(1.0))]),
        obj(&[("b", LexValue::from(1.0))]),
        obj(&[("b", LexValue::from("\x00"))]),
        // arrays: component-wise, shorter prefix first
        arr(&[]),
        arr(&[LexValue::Null]),
        arr(&[LexValue::Null, LexValue::Null]),
        arr(&[LexValue::Null, LexValue::Bool(true)]),
        arr(&[obj(&[("a", LexValue::from(1.0))])]),
        arr(&[arr(&[LexValue::Null])]),
        arr(&[LexValue::from(1.0)]),
        arr(&[LexValue::from(1.0), LexValue::from(2.0)]),
        arr(&[LexValue::from(2.0)]),
        arr(&[LexValue::from("a")]),
        arr(&[LexValue::from("a"), LexValue::from("\x00b")]),
        arr(&[LexValue::from("b")]),
        arr(&[LexValue::Bool(true)]),
        // numbers
        LexValue::Number(-f64::MAX),
        LexValue::Number(-MAX_SAFE_INTEGER),
        LexValue::Number(-12_345.678),
        LexValue::Number(-1.0),
        LexValue::Number(-0.5),
        LexValue::Number(0.0),
        LexValue::Number(f64::MIN_POSITIVE),
        LexValue::Number(0.5),
        LexValue::Number(1.0),
        LexValue::Number(10.0),
        LexValue::Number(MAX_SAFE_INTEGER),
        LexValue::Number(f64::MAX),
        // strings, including escape-relevant low bytes
        LexValue::from(""),
        LexValue::from("\x00"),
        LexValue::from("\x00\x00"),
        LexValue::from("\x00\x01"),
        LexValue::from("\x01"),
        LexValue::from("a"),
        LexValue::from("a\x00b"),
        LexValue::from("a\x01b"),
        LexValue::from("aa"),
        LexValue::from("b"),
        LexValue::from("hello world"),
        // booleans
        LexValue::Bool(false),
        LexValue::Bool(true),
    ]
}
