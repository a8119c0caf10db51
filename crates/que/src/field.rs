//! Fields: a column name, a bound value, or both.

use std::ops::Add;
use std::sync::Arc;

use serde_json::{Map, Value};

use crate::error::{QueError, QueResult};

/// A column name (`left`), a value (`right`), or a name bound to a value.
///
/// In a select list `left` is the column and `right` its alias. In filters
/// and write statements `left` names the column and `right` is the bound
/// value.
#[derive(Debug, Clone, PartialEq)]
pub struct Field {
    left: Option<String>,
    right: Option<Value>,
}

impl Field {
    /// Build a field from optional parts. At least one must be present.
    pub fn try_new(left: Option<String>, right: Option<Value>) -> QueResult<Self> {
        if left.is_none() && right.is_none() {
            return Err(QueError::syntax(
                "Field requires a name, a value, or both",
            ));
        }
        Ok(Self { left, right })
    }

    /// A name bound to a value.
    pub fn new(name: impl Into<String>, value: impl Into<Value>) -> Self {
        Self {
            left: Some(name.into()),
            right: Some(value.into()),
        }
    }

    /// A bare name, e.g. a column in a select list.
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            left: Some(name.into()),
            right: None,
        }
    }

    /// A bare value.
    pub fn unnamed(value: impl Into<Value>) -> Self {
        Self {
            left: None,
            right: Some(value.into()),
        }
    }

    pub fn left(&self) -> Option<&str> {
        self.left.as_deref()
    }

    pub fn right(&self) -> Option<&Value> {
        self.right.as_ref()
    }

    /// Alias for [`left`](Self::left).
    pub fn name(&self) -> Option<&str> {
        self.left()
    }

    /// The bound value, `null` when only a name is present.
    pub fn value(&self) -> Value {
        self.right.clone().unwrap_or(Value::Null)
    }

    /// Copy of this field under a different name.
    pub fn with_name(&self, name: impl Into<String>) -> Self {
        Self {
            left: Some(name.into()),
            right: self.right.clone(),
        }
    }

    /// Copy of this field bound to a different value.
    pub fn with_value(&self, value: impl Into<Value>) -> Self {
        Self {
            left: self.left.clone(),
            right: Some(value.into()),
        }
    }

    /// Render for a select list: `left AS right`, `left`, or the value text.
    ///
    /// A `null` or empty-string value renders the bare name.
    pub fn fetch_sql(&self) -> String {
        match (&self.left, &self.right) {
            (Some(left), Some(right)) if !is_blank(right) => {
                format!("{left} AS {}", value_text(right))
            }
            (Some(left), _) => left.clone(),
            (None, Some(right)) => value_text(right),
            // rejected by every constructor
            (None, None) => String::new(),
        }
    }
}

impl From<&str> for Field {
    fn from(name: &str) -> Self {
        Field::named(name)
    }
}

impl From<String> for Field {
    fn from(name: String) -> Self {
        Field::named(name)
    }
}

fn is_blank(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::String(s) => s.is_empty(),
        _ => false,
    }
}

/// Text of a value as it appears inline in SQL: strings unquoted, anything
/// else in its JSON form.
pub(crate) fn value_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

/// An ordered, immutable list of [`Field`]s.
///
/// Cloning is cheap: the list is shared.
#[derive(Debug, Clone, PartialEq)]
pub struct Fields {
    fields: Arc<[Field]>,
}

impl Default for Fields {
    fn default() -> Self {
        Self {
            fields: Arc::from(Vec::new()),
        }
    }
}

impl Fields {
    pub fn new(fields: impl IntoIterator<Item = Field>) -> Self {
        fields.into_iter().collect()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Field> {
        self.fields.iter()
    }

    pub fn as_slice(&self) -> &[Field] {
        &self.fields
    }

    pub fn get(&self, index: usize) -> Option<&Field> {
        self.fields.get(index)
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Field names in order, `None` for unnamed fields.
    pub fn names(&self) -> Vec<Option<&str>> {
        self.iter().map(Field::left).collect()
    }

    /// Field values in order, `null` for name-only fields.
    pub fn values(&self) -> Vec<Value> {
        self.iter().map(Field::value).collect()
    }

    /// Name → value mapping in insertion order.
    ///
    /// Unnamed fields are skipped; a repeated name keeps its first position
    /// and takes the later value.
    pub fn mapping(&self) -> Map<String, Value> {
        let mut map = Map::new();
        for field in self.iter() {
            if let Some(name) = field.left() {
                map.insert(name.to_string(), field.value());
            }
        }
        map
    }

    /// A new list holding `self` followed by `other`.
    pub fn concat(&self, other: &Fields) -> Fields {
        if other.is_empty() {
            return self.clone();
        }
        if self.is_empty() {
            return other.clone();
        }
        self.iter().chain(other.iter()).cloned().collect()
    }
}

impl FromIterator<Field> for Fields {
    fn from_iter<I: IntoIterator<Item = Field>>(iter: I) -> Self {
        Self {
            fields: iter.into_iter().collect(),
        }
    }
}

impl From<Vec<Field>> for Fields {
    fn from(fields: Vec<Field>) -> Self {
        Self {
            fields: Arc::from(fields),
        }
    }
}

impl<const N: usize> From<[Field; N]> for Fields {
    fn from(fields: [Field; N]) -> Self {
        Self::new(fields)
    }
}

impl From<Field> for Fields {
    fn from(field: Field) -> Self {
        Self::new([field])
    }
}

impl<'a> IntoIterator for &'a Fields {
    type Item = &'a Field;
    type IntoIter = std::slice::Iter<'a, Field>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl Add for Fields {
    type Output = Fields;

    fn add(self, rhs: Fields) -> Fields {
        self.concat(&rhs)
    }
}

impl Add<&Fields> for &Fields {
    type Output = Fields;

    fn add(self, rhs: &Fields) -> Fields {
        self.concat(rhs)
    }
}
