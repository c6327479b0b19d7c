//! Structured context for key-value fields
//!
//! A [`LogContext`] travels with every entry. Its values feed two consumers:
//! the interpolator, which needs a flat string per value, and the serializer,
//! which keeps composite values structural.

use indexmap::IndexMap;
use serde::{Serialize, Serializer};
use std::fmt;

/// Value type for structured logging fields
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    Null,
    Bool(bool),
    Int(i64),
    Float(f64),
    String(String),
    /// Arrays and maps, rendered structurally
    Composite(serde_json::Value),
    /// An opaque value: its captured display string, else its type name
    Object {
        type_name: &'static str,
        display: Option<String>,
    },
}

impl FieldValue {
    /// Capture a value through its `Display` implementation
    pub fn display<T: fmt::Display + ?Sized>(value: &T) -> Self {
        FieldValue::Object {
            type_name: std::any::type_name::<T>(),
            display: Some(value.to_string()),
        }
    }

    /// Capture a value through its `Serialize` implementation
    ///
    /// Scalars become the matching scalar variant. If serialization fails the
    /// value is kept as an opaque object tagged with its type name.
    pub fn serialized<T: Serialize + ?Sized>(value: &T) -> Self {
        match serde_json::to_value(value) {
            Ok(json) => FieldValue::from(json),
            Err(_) => FieldValue::Object {
                type_name: std::any::type_name::<T>(),
                display: None,
            },
        }
    }

    /// A value with no string form of its own; rendered as its type name
    pub fn opaque<T: ?Sized>() -> Self {
        FieldValue::Object {
            type_name: std::any::type_name::<T>(),
            display: None,
        }
    }

    /// Convert to serde_json::Value for JSON serialization
    ///
    /// Opaque objects collapse to their string form.
    #[must_use]
    pub fn to_json_value(&self) -> serde_json::Value {
        match self {
            FieldValue::Null => serde_json::Value::Null,
            FieldValue::Bool(b) => serde_json::Value::Bool(*b),
            FieldValue::Int(i) => serde_json::Value::Number((*i).into()),
            FieldValue::Float(f) => serde_json::Number::from_f64(*f)
                .map(serde_json::Value::Number)
                .unwrap_or(serde_json::Value::Null),
            FieldValue::String(s) => serde_json::Value::String(s.clone()),
            FieldValue::Composite(value) => value.clone(),
            FieldValue::Object { .. } => serde_json::Value::String(self.to_string()),
        }
    }
}

impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldValue::Null => write!(f, "null"),
            FieldValue::Bool(b) => write!(f, "{}", b),
            FieldValue::Int(i) => write!(f, "{}", i),
            FieldValue::Float(fl) => write!(f, "{}", fl),
            FieldValue::String(s) => write!(f, "{}", s),
            FieldValue::Composite(value) => write!(f, "{}", value),
            FieldValue::Object {
                display: Some(display),
                ..
            } => write!(f, "{}", display),
            FieldValue::Object { type_name, .. } => write!(f, "{}", type_name),
        }
    }
}

impl Serialize for FieldValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            FieldValue::Null => serializer.serialize_unit(),
            FieldValue::Bool(b) => serializer.serialize_bool(*b),
            FieldValue::Int(i) => serializer.serialize_i64(*i),
            FieldValue::Float(f) if f.is_finite() => serializer.serialize_f64(*f),
            FieldValue::Float(_) => serializer.serialize_unit(),
            FieldValue::String(s) => serializer.serialize_str(s),
            FieldValue::Composite(value) => value.serialize(serializer),
            FieldValue::Object { .. } => serializer.collect_str(self),
        }
    }
}

impl From<serde_json::Value> for FieldValue {
    fn from(value: serde_json::Value) -> Self {
        match value {
            serde_json::Value::Null => FieldValue::Null,
            serde_json::Value::Bool(b) => FieldValue::Bool(b),
            serde_json::Value::Number(n) => match n.as_i64() {
                Some(i) => FieldValue::Int(i),
                None => match n.as_f64() {
                    Some(f) if n.is_f64() => FieldValue::Float(f),
                    _ => FieldValue::Composite(serde_json::Value::Number(n)),
                },
            },
            serde_json::Value::String(s) => FieldValue::String(s),
            composite => FieldValue::Composite(composite),
        }
    }
}

impl From<String> for FieldValue {
    fn from(s: String) -> Self {
        FieldValue::String(s)
    }
}

impl From<&str> for FieldValue {
    fn from(s: &str) -> Self {
        FieldValue::String(s.to_string())
    }
}

impl From<&String> for FieldValue {
    fn from(s: &String) -> Self {
        FieldValue::String(s.clone())
    }
}

impl From<bool> for FieldValue {
    fn from(b: bool) -> Self {
        FieldValue::Bool(b)
    }
}

impl From<f32> for FieldValue {
    fn from(f: f32) -> Self {
        FieldValue::Float(f64::from(f))
    }
}

impl From<f64> for FieldValue {
    fn from(f: f64) -> Self {
        FieldValue::Float(f)
    }
}

macro_rules! impl_from_int {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for FieldValue {
                fn from(i: $ty) -> Self {
                    FieldValue::Int(i64::from(i))
                }
            }
        )*
    };
}

impl_from_int!(i8, i16, i32, i64, u8, u16, u32);

impl From<u64> for FieldValue {
    fn from(i: u64) -> Self {
        match i64::try_from(i) {
            Ok(i) => FieldValue::Int(i),
            Err(_) => FieldValue::Composite(serde_json::Value::from(i)),
        }
    }
}

impl From<usize> for FieldValue {
    fn from(i: usize) -> Self {
        FieldValue::from(i as u64)
    }
}

impl<T: Into<FieldValue>> From<Option<T>> for FieldValue {
    fn from(value: Option<T>) -> Self {
        value.map_or(FieldValue::Null, Into::into)
    }
}

impl<T: Into<FieldValue>> From<Vec<T>> for FieldValue {
    fn from(values: Vec<T>) -> Self {
        FieldValue::Composite(serde_json::Value::Array(
            values
                .into_iter()
                .map(|value| value.into().to_json_value())
                .collect(),
        ))
    }
}

/// Ordered key-value context attached to a log entry
///
/// Keys keep their insertion order; setting an existing key replaces its
/// value in place.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct LogContext {
    fields: IndexMap<String, FieldValue>,
}

impl LogContext {
    /// Create a new empty log context
    pub fn new() -> Self {
        Self {
            fields: IndexMap::new(),
        }
    }

    /// Add a field to the context
    #[must_use]
    pub fn with_field<K, V>(mut self, key: K, value: V) -> Self
    where
        K: Into<String>,
        V: Into<FieldValue>,
    {
        self.fields.insert(key.into(), value.into());
        self
    }

    /// Add a field to the context (mutable version)
    pub fn add_field<K, V>(&mut self, key: K, value: V)
    where
        K: Into<String>,
        V: Into<FieldValue>,
    {
        self.fields.insert(key.into(), value.into());
    }

    pub fn get(&self, key: &str) -> Option<&FieldValue> {
        self.fields.get(key)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &FieldValue)> {
        self.fields.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Serialize the context as a compact JSON object
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}

impl<K: Into<String>, V: Into<FieldValue>> FromIterator<(K, V)> for LogContext {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            fields: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}
