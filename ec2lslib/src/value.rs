//! Values produced by resolution and how they become cell text.

use std::borrow::Cow;
use std::fmt;

use serde_json::Value;

/// A resolved value before stringification.
///
/// Record types hand these out from reserved accessors; general path
/// evaluation always produces [`FieldValue::Json`].
pub enum FieldValue<'a> {
    /// Absent or null
    Null,
    Text(Cow<'a, str>),
    Bool(bool),
    Integer(i64),
    Unsigned(u64),
    Float(f64),
    /// Anything with its own text form
    Display(&'a dyn fmt::Display),
    Json(Cow<'a, Value>),
}

impl FieldValue<'_> {
    /// Cell text for this value.
    ///
    /// Strings are used as-is, scalars use their canonical form, null is
    /// empty, and arrays/objects fall back to compact JSON.
    pub fn to_cell(&self) -> String {
        match self {
            FieldValue::Null => String::new(),
            FieldValue::Text(text) => text.to_string(),
            FieldValue::Bool(value) => value.to_string(),
            FieldValue::Integer(value) => value.to_string(),
            FieldValue::Unsigned(value) => value.to_string(),
            FieldValue::Float(value) => value.to_string(),
            FieldValue::Display(value) => value.to_string(),
            FieldValue::Json(value) => json_cell(value),
        }
    }
}

fn json_cell(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(text) => text.clone(),
        Value::Bool(value) => value.to_string(),
        Value::Number(number) => number.to_string(),
        Value::Array(_) | Value::Object(_) => serde_json::to_string(value).unwrap_or_default(),
    }
}

impl fmt::Debug for FieldValue<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldValue::Null => f.write_str("Null"),
            FieldValue::Text(text) => f.debug_tuple("Text").field(text).finish(),
            FieldValue::Bool(value) => f.debug_tuple("Bool").field(value).finish(),
            FieldValue::Integer(value) => f.debug_tuple("Integer").field(value).finish(),
            FieldValue::Unsigned(value) => f.debug_tuple("Unsigned").field(value).finish(),
            FieldValue::Float(value) => f.debug_tuple("Float").field(value).finish(),
            FieldValue::Display(value) => f.debug_tuple("Display").field(&value.to_string()).finish(),
            FieldValue::Json(value) => f.debug_tuple("Json").field(value).finish(),
        }
    }
}

impl<'a> From<&'a str> for FieldValue<'a> {
    fn from(text: &'a str) -> Self {
        FieldValue::Text(Cow::Borrowed(text))
    }
}

impl From<String> for FieldValue<'_> {
    fn from(text: String) -> Self {
        FieldValue::Text(Cow::Owned(text))
    }
}

impl From<bool> for FieldValue<'_> {
    fn from(value: bool) -> Self {
        FieldValue::Bool(value)
    }
}

impl From<i64> for FieldValue<'_> {
    fn from(value: i64) -> Self {
        FieldValue::Integer(value)
    }
}

impl From<u64> for FieldValue<'_> {
    fn from(value: u64) -> Self {
        FieldValue::Unsigned(value)
    }
}

impl From<f64> for FieldValue<'_> {
    fn from(value: f64) -> Self {
        FieldValue::Float(value)
    }
}

impl<'a> From<&'a Value> for FieldValue<'a> {
    fn from(value: &'a Value) -> Self {
        FieldValue::Json(Cow::Borrowed(value))
    }
}

impl<'a, T> From<Option<T>> for FieldValue<'a>
where
    T: Into<FieldValue<'a>>,
{
    fn from(value: Option<T>) -> Self {
        value.map_or(FieldValue::Null, Into::into)
    }
}
