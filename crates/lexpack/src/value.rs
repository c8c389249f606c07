//! [`LexValue`] — the universal value type encoded by the codec.

/// A structured value that can be encoded into an ordered byte key.
///
/// Covers the JSON-style universe (null, bool, number, string, array,
/// object), the two range-bound sentinels, and a carrier for user-defined
/// variants registered as extra encodings.
#[derive(Debug, Clone)]
pub enum LexValue {
    /// JSON null.
    Null,
    /// Boolean value.
    Bool(bool),
    /// Double-precision number. NaN is rejected at encode and compare time.
    Number(f64),
    /// UTF-8 string. May contain `\x00` and `\x01`; the escape layer keeps
    /// such strings self-delimiting inside arrays.
    Str(String),
    /// Array of values.
    Array(Vec<LexValue>),
    /// Object as key-value entries. Entry order is not significant: entries
    /// are canonically sorted by key before encoding and comparison.
    Object(Vec<(String, LexValue)>),
    /// Lower range bound; sorts strictly below every representable value.
    Min,
    /// Upper range bound; sorts strictly above every representable value.
    Max,
    /// A user-defined variant, claimed by a user-registered encoding via its
    /// `kind` tag.
    Extension(Box<LexExtension>),
}

/// Payload of a user-defined variant.
///
/// The `kind` tag is what a user-registered [`Encoding`](crate::Encoding)
/// matches on; `value` is the carried payload.
#[derive(Debug, Clone, PartialEq)]
pub struct LexExtension {
    pub kind: String,
    pub value: LexValue,
}

impl LexExtension {
    pub fn new(kind: impl Into<String>, value: LexValue) -> Self {
        Self {
            kind: kind.into(),
            value,
        }
    }
}

impl LexValue {
    /// Returns `true` if the value is null.
    #[inline]
    #[must_use]
    pub const fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    /// Returns the value as a boolean if it is one.
    #[inline]
    #[must_use]
    pub const fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// Returns the value as a double if it is a number.
    #[inline]
    #[must_use]
    pub const fn as_f64(&self) -> Option<f64> {
        match self {
            Self::Number(x) => Some(*x),
            _ => None,
        }
    }

    /// Returns the value as a string slice if it is a string.
    #[inline]
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Str(s) => Some(s),
            _ => None,
        }
    }

    /// Returns the value as an element slice if it is an array.
    #[inline]
    #[must_use]
    pub fn as_array(&self) -> Option<&[LexValue]> {
        match self {
            Self::Array(elements) => Some(elements),
            _ => None,
        }
    }

    /// Returns the value as an entry slice if it is an object.
    #[inline]
    #[must_use]
    pub fn as_object(&self) -> Option<&[(String, LexValue)]> {
        match self {
            Self::Object(entries) => Some(entries),
            _ => None,
        }
    }
}

/// Semantic equality: objects compare entry-set-wise regardless of entry
/// order, and `-0.0 == 0.0`. Deep-equality of a decoded value against its
/// original relies on this, since decoding returns canonically sorted
/// object entries.
impl PartialEq for LexValue {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Null, Self::Null) | (Self::Min, Self::Min) | (Self::Max, Self::Max) => true,
            (Self::Bool(a), Self::Bool(b)) => a == b,
            (Self::Number(a), Self::Number(b)) => a == b,
            (Self::Str(a), Self::Str(b)) => a == b,
            (Self::Array(a), Self::Array(b)) => a == b,
            (Self::Object(a), Self::Object(b)) => {
                if a.len() != b.len() {
                    return false;
                }
                a.iter().all(|(key, value)| {
                    b.iter()
                        .find(|(other_key, _)| other_key == key)
                        .is_some_and(|(_, other_value)| value == other_value)
                })
            }
            (Self::Extension(a), Self::Extension(b)) => a == b,
            _ => false,
        }
    }
}

impl From<bool> for LexValue {
    #[inline]
    fn from(b: bool) -> Self {
        Self::Bool(b)
    }
}

impl From<f64> for LexValue {
    #[inline]
    fn from(x: f64) -> Self {
        Self::Number(x)
    }
}

impl From<i64> for LexValue {
    #[inline]
    fn from(i: i64) -> Self {
        Self::Number(i as f64)
    }
}

impl From<&str> for LexValue {
    #[inline]
    fn from(s: &str) -> Self {
        Self::Str(s.to_owned())
    }
}

impl From<String> for LexValue {
    #[inline]
    fn from(s: String) -> Self {
        Self::Str(s)
    }
}

impl From<Vec<LexValue>> for LexValue {
    #[inline]
    fn from(elements: Vec<LexValue>) -> Self {
        Self::Array(elements)
    }
}

impl From<serde_json::Value> for LexValue {
    fn from(v: serde_json::Value) -> Self {
        match v {
            serde_json::Value::Null => LexValue::Null,
            serde_json::Value::Bool(b) => LexValue::Bool(b),
            serde_json::Value::Number(n) => LexValue::Number(n.as_f64().unwrap_or(0.0)),
            serde_json::Value::String(s) => LexValue::Str(s),
            serde_json::Value::Array(arr) => {
                LexValue::Array(arr.into_iter().map(LexValue::from).collect())
            }
            serde_json::Value::Object(obj) => LexValue::Object(
                obj.into_iter()
                    .map(|(k, v)| (k, LexValue::from(v)))
                    .collect(),
            ),
        }
    }
}

impl From<LexValue> for serde_json::Value {
    fn from(v: LexValue) -> Self {
        match v {
            // Sentinels have no JSON rendition.
            LexValue::Null | LexValue::Min | LexValue::Max => serde_json::Value::Null,
            LexValue::Bool(b) => serde_json::Value::Bool(b),
            LexValue::Number(x) => serde_json::Number::from_f64(x)
                .map_or(serde_json::Value::Null, serde_json::Value::Number),
            LexValue::Str(s) => serde_json::Value::String(s),
            LexValue::Array(arr) => {
                serde_json::Value::Array(arr.into_iter().map(serde_json::Value::from).collect())
            }
            LexValue::Object(entries) => serde_json::Value::Object(
                entries
                    .into_iter()
                    .map(|(k, v)| (k, serde_json::Value::from(v)))
                    .collect(),
            ),
            LexValue::Extension(ext) => serde_json::Value::from(ext.value),
        }
    }
}
