#![allow(dead_code)]

pub mod fixtures;

use lexpack::LexValue;

/// Builds an object value from borrowed entries.
pub fn obj(entries: &[(&str, LexValue)]) -> LexValue {
    LexValue::Object(
        entries
            .iter()
            .map(|(k, v)| ((*k).to_owned(), v.clone()))
            .collect(),
    )
}

/// Builds an array value from borrowed elements.
pub fn arr(elements: &[LexValue]) -> LexValue {
    LexValue::Array(elements.to_vec())
}
