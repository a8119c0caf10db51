//! Turn structured data into [`Fields`].
//!
//! Anything that can list `(name, value)` pairs in a stable order is a
//! [`FieldSource`]: JSON objects, ordered maps, pair lists, serializable
//! records via [`Record`], and structs deriving `ToFields`.

use std::collections::BTreeMap;
use std::fmt;

use serde::Serialize;
use serde_json::{Map, Value};

use crate::error::{QueError, QueResult};
use crate::field::{Field, Fields};

/// A source of ordered `(name, value)` pairs.
pub trait FieldSource {
    fn field_pairs(self) -> QueResult<Vec<(String, Value)>>;
}

/// Structs that list their own fields. Usually derived.
///
/// ```ignore
/// #[derive(ToFields)]
/// #[que(rename_all = "camelCase")]
/// struct NewUser {
///     user_name: String,
///     #[que(rename = "mail")]
///     email: String,
///     #[que(skip)]
///     password: String,
/// }
///
/// let fields = data_to_fields(&new_user)?;
/// ```
pub trait ToFields {
    fn to_field_pairs(&self) -> QueResult<Vec<(String, Value)>>;

    fn to_fields(&self) -> QueResult<Fields> {
        data_to_fields(self)
    }
}

impl<T: ToFields + ?Sized> FieldSource for &T {
    fn field_pairs(self) -> QueResult<Vec<(String, Value)>> {
        self.to_field_pairs()
    }
}

impl FieldSource for Map<String, Value> {
    fn field_pairs(self) -> QueResult<Vec<(String, Value)>> {
        Ok(self.into_iter().collect())
    }
}

impl<K: Into<String>, V: Into<Value>> FieldSource for BTreeMap<K, V> {
    fn field_pairs(self) -> QueResult<Vec<(String, Value)>> {
        Ok(self.into_iter().map(|(k, v)| (k.into(), v.into())).collect())
    }
}

impl<K: Into<String>, V: Into<Value>> FieldSource for Vec<(K, V)> {
    fn field_pairs(self) -> QueResult<Vec<(String, Value)>> {
        Ok(self.into_iter().map(|(k, v)| (k.into(), v.into())).collect())
    }
}

impl<K: Into<String>, V: Into<Value>, const N: usize> FieldSource for [(K, V); N] {
    fn field_pairs(self) -> QueResult<Vec<(String, Value)>> {
        Ok(self.into_iter().map(|(k, v)| (k.into(), v.into())).collect())
    }
}

/// Every element must be a `[name, value]` array.
impl FieldSource for Vec<Value> {
    fn field_pairs(self) -> QueResult<Vec<(String, Value)>> {
        self.into_iter().enumerate().map(pair_from_value).collect()
    }
}

/// Objects are mappings; arrays are `[name, value]` pair lists.
impl FieldSource for Value {
    fn field_pairs(self) -> QueResult<Vec<(String, Value)>> {
        match self {
            Value::Object(map) => map.field_pairs(),
            Value::Array(items) => items.field_pairs(),
            other => Err(QueError::value(format!(
                "cannot build fields from a JSON {}",
                ValueKind::of(&other)
            ))),
        }
    }
}

fn pair_from_value((index, item): (usize, Value)) -> QueResult<(String, Value)> {
    if let Value::Array(mut pair) = item {
        if pair.len() == 2 {
            let value = pair.pop().unwrap_or(Value::Null);
            if let Some(Value::String(name)) = pair.pop() {
                return Ok((name, value));
            }
        }
        return Err(QueError::value(format!(
            "element {index} is not a [name, value] pair"
        )));
    }
    Err(QueError::value(format!(
        "element {index} is a {}, expected a [name, value] pair",
        ValueKind::of(&item)
    )))
}

/// Any `Serialize` value that serializes to a map (a struct with named
/// fields, a map type, ...). Field order follows serialization order.
#[derive(Debug, Clone, Copy)]
pub struct Record<'a, T: ?Sized>(pub &'a T);

impl<T: Serialize + ?Sized> FieldSource for Record<'_, T> {
    fn field_pairs(self) -> QueResult<Vec<(String, Value)>> {
        match to_value(self.0)? {
            Value::Object(map) => Ok(map.into_iter().collect()),
            other => Err(QueError::value(format!(
                "record serialized to a {}, expected a map",
                ValueKind::of(&other)
            ))),
        }
    }
}

/// Serialize one value for binding.
pub fn to_value<T: Serialize + ?Sized>(value: &T) -> QueResult<Value> {
    serde_json::to_value(value)
        .map_err(|err| QueError::value(format!("value could not be serialized: {err}")))
}

/// JSON type of a value, used by [`Exclude::Kind`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValueKind {
    Null,
    Bool,
    /// A number without a fractional part.
    Integer,
    /// A number with a fractional part.
    Float,
    /// Any number.
    Number,
    String,
    Array,
    Object,
}

impl ValueKind {
    /// The most specific kind of `value`.
    pub fn of(value: &Value) -> Self {
        match value {
            Value::Null => ValueKind::Null,
            Value::Bool(_) => ValueKind::Bool,
            Value::Number(n) if n.is_f64() => ValueKind::Float,
            Value::Number(_) => ValueKind::Integer,
            Value::String(_) => ValueKind::String,
            Value::Array(_) => ValueKind::Array,
            Value::Object(_) => ValueKind::Object,
        }
    }

    pub fn matches(self, value: &Value) -> bool {
        match self {
            ValueKind::Number => value.is_number(),
            kind => kind == ValueKind::of(value),
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            ValueKind::Null => "null",
            ValueKind::Bool => "bool",
            ValueKind::Integer => "integer",
            ValueKind::Float => "float",
            ValueKind::Number => "number",
            ValueKind::String => "string",
            ValueKind::Array => "array",
            ValueKind::Object => "object",
        }
    }
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Which entries [`data_to_fields_excluding`] drops.
#[derive(Debug, Clone)]
pub enum Exclude {
    /// Entries whose value equals this one.
    Value(Value),
    /// Entries whose value has this JSON type.
    Kind(ValueKind),
    /// Entries the predicate accepts.
    Predicate(fn(&str, &Value) -> bool),
}

impl Exclude {
    /// Drop `null` entries.
    pub fn nulls() -> Self {
        Exclude::Kind(ValueKind::Null)
    }

    pub fn matches(&self, name: &str, value: &Value) -> bool {
        match self {
            Exclude::Value(excluded) => excluded == value,
            Exclude::Kind(kind) => kind.matches(value),
            Exclude::Predicate(predicate) => predicate(name, value),
        }
    }
}

/// Build [`Fields`] from `data`, one named field per entry.
///
/// A repeated name keeps its first position and takes the last value.
/// Empty input is a value error.
pub fn data_to_fields(data: impl FieldSource) -> QueResult<Fields> {
    convert(data, None)
}

/// [`data_to_fields`], dropping entries matched by `exclude`.
///
/// The input must be non-empty; the result may be empty when every entry is
/// excluded.
pub fn data_to_fields_excluding(data: impl FieldSource, exclude: &Exclude) -> QueResult<Fields> {
    convert(data, Some(exclude))
}

#[cfg_attr(not(feature = "tracing"), allow(unused_variables))]
fn convert(data: impl FieldSource, exclude: Option<&Exclude>) -> QueResult<Fields> {
    let pairs = data.field_pairs()?;
    if pairs.is_empty() {
        return Err(QueError::value("cannot build fields from empty data"));
    }

    let mut merged = Map::new();
    for (name, value) in pairs {
        merged.insert(name, value);
    }

    let total = merged.len();
    let fields: Fields = merged
        .into_iter()
        .filter(|(name, value)| !exclude.is_some_and(|e| e.matches(name, value)))
        .map(|(name, value)| Field::new(name, value))
        .collect();

    que_trace!(
        target: "que.data",
        fields = fields.len(),
        excluded = total - fields.len(),
        "data_to_fields"
    );

    Ok(fields)
}
