//! Bound values collected while rendering.

use std::ops::Add;

use serde::Serialize;
use serde_json::{Map, Value};

use crate::field::{Field, Fields};
use crate::style::ParamStyle;

/// The values consumed by a rendered statement, in placeholder order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Arguments {
    fields: Fields,
}

impl Arguments {
    pub fn new(fields: impl Into<Fields>) -> Self {
        Self {
            fields: fields.into(),
        }
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn fields(&self) -> &Fields {
        &self.fields
    }

    pub fn into_fields(self) -> Fields {
        self.fields
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Field> {
        self.fields.iter()
    }

    /// Values in placeholder order.
    pub fn values(&self) -> Vec<Value> {
        self.fields.values()
    }

    /// Values keyed by (rendered) field name.
    pub fn mapping(&self) -> Map<String, Value> {
        self.fields.mapping()
    }

    pub fn concat(&self, other: &Arguments) -> Arguments {
        Arguments {
            fields: self.fields.concat(&other.fields),
        }
    }

    /// The shape a driver expects for `style`: a mapping for named styles,
    /// a list otherwise.
    pub fn for_sql(&self, style: ParamStyle) -> SqlArgs {
        match style {
            ParamStyle::Named(_) => SqlArgs::Named(self.mapping()),
            ParamStyle::Positional(_) | ParamStyle::Numbered(_) => {
                SqlArgs::Positional(self.values())
            }
        }
    }
}

impl From<Fields> for Arguments {
    fn from(fields: Fields) -> Self {
        Self { fields }
    }
}

impl Add for Arguments {
    type Output = Arguments;

    fn add(self, rhs: Arguments) -> Arguments {
        self.concat(&rhs)
    }
}

impl Add<&Arguments> for &Arguments {
    type Output = Arguments;

    fn add(self, rhs: &Arguments) -> Arguments {
        self.concat(rhs)
    }
}

/// Driver-ready arguments.
///
/// Serializes as a plain JSON array or object.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum SqlArgs {
    Positional(Vec<Value>),
    Named(Map<String, Value>),
}

impl SqlArgs {
    pub fn len(&self) -> usize {
        match self {
            SqlArgs::Positional(values) => values.len(),
            SqlArgs::Named(map) => map.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn as_positional(&self) -> Option<&[Value]> {
        match self {
            SqlArgs::Positional(values) => Some(values),
            SqlArgs::Named(_) => None,
        }
    }

    pub fn as_named(&self) -> Option<&Map<String, Value>> {
        match self {
            SqlArgs::Named(map) => Some(map),
            SqlArgs::Positional(_) => None,
        }
    }
}
