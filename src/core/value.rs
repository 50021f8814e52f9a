use std::fmt;
use std::sync::Arc;

use indexmap::IndexMap;
use serde::ser::{SerializeMap, SerializeSeq};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Number;

/// Insertion-ordered mapping node of an option tree.
pub type OptionMap = IndexMap<String, OptionValue>;

/// Formatter callback carried as an atomic option leaf.
pub type FormatterFn = Arc<dyn Fn(&OptionValue) -> String + Send + Sync>;

/// Structural classification of a node, inspected at every traversal step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ValueKind {
    /// `Null` or absent.
    Missing,
    Scalar,
    Sequence,
    Mapping,
    Opaque,
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Missing => "missing",
            Self::Scalar => "scalar",
            Self::Sequence => "sequence",
            Self::Mapping => "mapping",
            Self::Opaque => "opaque",
        };
        f.write_str(name)
    }
}

/// Executable leaf (label formatter, tooltip callback, ...).
///
/// Never traversed or merged into; two opaque values are equal only when they
/// share the same callback allocation.
#[derive(Clone)]
pub struct OpaqueValue {
    name: String,
    formatter: FormatterFn,
}

impl OpaqueValue {
    #[must_use]
    pub fn new(name: impl Into<String>, formatter: FormatterFn) -> Self {
        Self {
            name: name.into(),
            formatter,
        }
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn format(&self, input: &OptionValue) -> String {
        (self.formatter)(input)
    }
}

impl fmt::Debug for OpaqueValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("OpaqueValue").field(&self.name).finish()
    }
}

impl PartialEq for OpaqueValue {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.formatter, &other.formatter)
    }
}

/// Node of a chart-option tree.
#[derive(Debug, Clone, Default)]
pub enum OptionValue {
    #[default]
    Null,
    Bool(bool),
    Number(Number),
    String(String),
    Sequence(Vec<OptionValue>),
    Mapping(OptionMap),
    Opaque(OpaqueValue),
}

impl OptionValue {
    #[must_use]
    pub fn empty_mapping() -> Self {
        Self::Mapping(OptionMap::new())
    }

    #[must_use]
    pub fn empty_sequence() -> Self {
        Self::Sequence(Vec::new())
    }

    #[must_use]
    pub fn opaque(name: impl Into<String>, formatter: FormatterFn) -> Self {
        Self::Opaque(OpaqueValue::new(name, formatter))
    }

    #[must_use]
    pub fn kind(&self) -> ValueKind {
        match self {
            Self::Null => ValueKind::Missing,
            Self::Bool(_) | Self::Number(_) | Self::String(_) => ValueKind::Scalar,
            Self::Sequence(_) => ValueKind::Sequence,
            Self::Mapping(_) => ValueKind::Mapping,
            Self::Opaque(_) => ValueKind::Opaque,
        }
    }

    #[must_use]
    pub fn is_nullish(&self) -> bool {
        matches!(self, Self::Null)
    }

    #[must_use]
    pub fn as_mapping(&self) -> Option<&OptionMap> {
        match self {
            Self::Mapping(map) => Some(map),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_sequence(&self) -> Option<&[OptionValue]> {
        match self {
            Self::Sequence(items) => Some(items.as_slice()),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(text) => Some(text),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(flag) => Some(*flag),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Self::Number(number) => number.as_f64(),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Self::Number(number) => number.as_i64(),
            _ => None,
        }
    }

    /// Converts into plain JSON. Opaque leaves are dropped from mappings and
    /// become `null` elsewhere.
    #[must_use]
    pub fn to_json(&self) -> serde_json::Value {
        match self {
            Self::Null | Self::Opaque(_) => serde_json::Value::Null,
            Self::Bool(flag) => serde_json::Value::Bool(*flag),
            Self::Number(number) => serde_json::Value::Number(number.clone()),
            Self::String(text) => serde_json::Value::String(text.clone()),
            Self::Sequence(items) => {
                serde_json::Value::Array(items.iter().map(Self::to_json).collect())
            }
            Self::Mapping(map) => serde_json::Value::Object(
                map.iter()
                    .filter(|(_, value)| !matches!(value, Self::Opaque(_)))
                    .map(|(key, value)| (key.clone(), value.to_json()))
                    .collect(),
            ),
        }
    }

    /// Renders the value the way a select option or form field displays it.
    #[must_use]
    pub fn display_string(&self) -> String {
        match self {
            Self::Null => String::new(),
            Self::Bool(flag) => flag.to_string(),
            Self::Number(number) => number.to_string(),
            Self::String(text) => text.clone(),
            Self::Opaque(opaque) => format!("[formatter {}]", opaque.name()),
            Self::Sequence(_) | Self::Mapping(_) => self.to_json().to_string(),
        }
    }
}

impl PartialEq for OptionValue {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Null, Self::Null) => true,
            (Self::Bool(a), Self::Bool(b)) => a == b,
            (Self::Number(a), Self::Number(b)) => match (a.as_i64(), b.as_i64()) {
                (Some(a), Some(b)) => a == b,
                _ => a.as_f64() == b.as_f64(),
            },
            (Self::String(a), Self::String(b)) => a == b,
            (Self::Sequence(a), Self::Sequence(b)) => a == b,
            // Key order does not take part in structural equality.
            (Self::Mapping(a), Self::Mapping(b)) => {
                a.len() == b.len()
                    && a.iter()
                        .all(|(key, value)| b.get(key).is_some_and(|other| value == other))
            }
            (Self::Opaque(a), Self::Opaque(b)) => a == b,
            _ => false,
        }
    }
}

impl From<serde_json::Value> for OptionValue {
    fn from(value: serde_json::Value) -> Self {
        match value {
            serde_json::Value::Null => Self::Null,
            serde_json::Value::Bool(flag) => Self::Bool(flag),
            serde_json::Value::Number(number) => Self::Number(number),
            serde_json::Value::String(text) => Self::String(text),
            serde_json::Value::Array(items) => {
                Self::Sequence(items.into_iter().map(Self::from).collect())
            }
            serde_json::Value::Object(map) => Self::Mapping(
                map.into_iter()
                    .map(|(key, value)| (key, Self::from(value)))
                    .collect(),
            ),
        }
    }
}

impl From<&OptionValue> for serde_json::Value {
    fn from(value: &OptionValue) -> Self {
        value.to_json()
    }
}

impl From<bool> for OptionValue {
    fn from(flag: bool) -> Self {
        Self::Bool(flag)
    }
}

impl From<i64> for OptionValue {
    fn from(number: i64) -> Self {
        Self::Number(Number::from(number))
    }
}

impl From<i32> for OptionValue {
    fn from(number: i32) -> Self {
        Self::Number(Number::from(number))
    }
}

impl From<u32> for OptionValue {
    fn from(number: u32) -> Self {
        Self::Number(Number::from(number))
    }
}

impl From<f64> for OptionValue {
    /// Integral values are stored as integers so `12.0` serializes as `12`;
    /// non-finite values become `Null`.
    fn from(number: f64) -> Self {
        const SAFE_INTEGER: f64 = 9_007_199_254_740_991.0;
        if !number.is_finite() {
            return Self::Null;
        }
        if number.fract() == 0.0 && number.abs() <= SAFE_INTEGER {
            return Self::Number(Number::from(number as i64));
        }
        Number::from_f64(number).map_or(Self::Null, Self::Number)
    }
}

impl From<&str> for OptionValue {
    fn from(text: &str) -> Self {
        Self::String(text.to_owned())
    }
}

impl From<String> for OptionValue {
    fn from(text: String) -> Self {
        Self::String(text)
    }
}

impl From<Vec<OptionValue>> for OptionValue {
    fn from(items: Vec<OptionValue>) -> Self {
        Self::Sequence(items)
    }
}

impl From<OptionMap> for OptionValue {
    fn from(map: OptionMap) -> Self {
        Self::Mapping(map)
    }
}

impl From<OpaqueValue> for OptionValue {
    fn from(opaque: OpaqueValue) -> Self {
        Self::Opaque(opaque)
    }
}

impl Serialize for OptionValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Null | Self::Opaque(_) => serializer.serialize_unit(),
            Self::Bool(flag) => serializer.serialize_bool(*flag),
            Self::Number(number) => number.serialize(serializer),
            Self::String(text) => serializer.serialize_str(text),
            Self::Sequence(items) => {
                let mut seq = serializer.serialize_seq(Some(items.len()))?;
                for item in items {
                    seq.serialize_element(item)?;
                }
                seq.end()
            }
            Self::Mapping(map) => {
                let entries = map
                    .iter()
                    .filter(|(_, value)| !matches!(value, Self::Opaque(_)));
                let mut out = serializer.serialize_map(None)?;
                for (key, value) in entries {
                    out.serialize_entry(key, value)?;
                }
                out.end()
            }
        }
    }
}

impl<'de> Deserialize<'de> for OptionValue {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        serde_json::Value::deserialize(deserializer).map(Self::from)
    }
}
