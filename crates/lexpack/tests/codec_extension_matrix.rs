//! User-registered encodings: a calendar-date variant at prefix `h`, and the
//! first-match rule for overlapping matchers.

mod common;

use std::cmp::Ordering;

use common::obj;
use lexpack::{
    json_entries, Codec, CodecError, Encoding, LexExtension, LexValue, ObjectForm, RegistryEntry,
};

/// ISO-8601 date strings carried as an extension value. Identity body, so
/// the chronological order is the string order.
struct DateEncoding;

const DATE_KIND: &str = "date";

fn date(iso: &str) -> LexValue {
    LexValue::Extension(Box::new(LexExtension::new(DATE_KIND, LexValue::from(iso))))
}

impl Encoding for DateEncoding {
    fn matches(&self, value: &LexValue) -> bool {
        matches!(value, LexValue::Extension(ext) if ext.kind == DATE_KIND)
    }

    fn encode_body(
        &self,
        value: &LexValue,
        _codec: &Codec,
        out: &mut Vec<u8>,
    ) -> Result<(), CodecError> {
        let LexValue::Extension(ext) = value else {
            return Err(CodecError::UnsupportedValue);
        };
        let LexValue::Str(iso) = &ext.value else {
            return Err(CodecError::UnsupportedValue);
        };
        out.extend_from_slice(iso.as_bytes());
        Ok(())
    }

    fn decode_body(&self, body: &[u8], _codec: &Codec) -> Result<LexValue, CodecError> {
        let iso = String::from_utf8(body.to_vec()).map_err(|_| CodecError::InvalidUtf8)?;
        Ok(date(&iso))
    }

    fn compare(&self, a: &LexValue, b: &LexValue, _codec: &Codec) -> Result<Ordering, CodecError> {
        match (a, b) {
            (LexValue::Extension(a), LexValue::Extension(b)) => match (&a.value, &b.value) {
                (LexValue::Str(a), LexValue::Str(b)) => Ok(a.as_bytes().cmp(b.as_bytes())),
                _ => Err(CodecError::UnsupportedValue),
            },
            _ => Err(CodecError::UnsupportedValue),
        }
    }
}

fn codec_with_dates() -> Codec {
    let mut entries = json_entries(ObjectForm::Flat);
    // Before MAX, so `h` still sorts under the upper sentinel.
    let max = entries.pop().unwrap();
    entries.push(RegistryEntry::new(b'h', DateEncoding));
    entries.push(max);
    Codec::new(entries).unwrap()
}

#[test]
fn date_wire_bytes() {
    let codec = codec_with_dates();
    let value = date("2023-11-29T18:44:54.942Z");
    assert_eq!(
        codec.encode(&value).unwrap(),
        b"h2023-11-29T18:44:54.942Z"
    );
}

#[test]
fn date_roundtrip() {
    let codec = codec_with_dates();
    let value = date("2020-03-10T00:00:00.000Z");
    let encoded = codec.encode(&value).unwrap();
    assert_eq!(codec.decode(&encoded).unwrap(), value);
}

#[test]
fn dates_order_between_bool_and_max() {
    let codec = codec_with_dates();
    let early = date("2020-03-10T00:00:00.000Z");
    let late = date("2023-11-29T18:44:54.942Z");
    assert_eq!(codec.compare(&early, &late).unwrap(), Ordering::Less);
    assert!(codec.encode(&early).unwrap() < codec.encode(&late).unwrap());

    let boolean = LexValue::Bool(true);
    assert_eq!(codec.compare(&boolean, &early).unwrap(), Ordering::Less);
    assert_eq!(
        codec.compare(&lexpack::MAX, &late).unwrap(),
        Ordering::Greater
    );
}

#[test]
fn dates_nest_inside_tuples() {
    let codec = codec_with_dates();
    let tuple = LexValue::Array(vec![
        LexValue::from("created"),
        date("2023-11-29T18:44:54.942Z"),
    ]);
    let encoded = codec.encode(&tuple).unwrap();
    assert_eq!(codec.decode(&encoded).unwrap(), tuple);
}

#[test]
fn unregistered_extensions_are_unsupported() {
    let codec = Codec::json();
    assert_eq!(
        codec.encode(&date("2020-01-01")).err(),
        Some(CodecError::UnsupportedValue)
    );
}

/// Claims the empty object; overlaps with the stock object matcher.
struct UnitEncoding;

impl Encoding for UnitEncoding {
    fn matches(&self, value: &LexValue) -> bool {
        matches!(value, LexValue::Object(entries) if entries.is_empty())
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
        Ok(LexValue::Object(Vec::new()))
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

#[test]
fn first_registration_wins_overlapping_matchers() {
    // Registered before the stock object encoding: empty objects go to `a`.
    let mut entries = json_entries(ObjectForm::Flat);
    entries.insert(1, RegistryEntry::new(b'a', UnitEncoding));
    let codec = Codec::new(entries).unwrap();

    assert_eq!(codec.encode(&obj(&[])).unwrap(), b"a");
    // Non-empty objects still fall through to the stock encoding.
    let populated = obj(&[("k", LexValue::from(1.0))]);
    assert_eq!(codec.encode(&populated).unwrap()[0], b'c');

    // Registered after, the stock matcher claims empty objects first.
    let mut entries = json_entries(ObjectForm::Flat);
    entries.push(RegistryEntry::new(b'a', UnitEncoding));
    let codec = Codec::new(entries).unwrap();
    assert_eq!(codec.encode(&obj(&[])).unwrap(), b"c");
}
