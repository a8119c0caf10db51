//! Common imports.
//!
//! ```ignore
//! use que::prelude::*;
//! ```

pub use crate::arguments::{Arguments, SqlArgs};
pub use crate::config::{RenderConfig, default_style, set_default_style};
pub use crate::data::{
    Exclude, FieldSource, Record, ToFields, ValueKind, data_to_fields, data_to_fields_excluding,
};
pub use crate::error::{QueError, QueResult};
pub use crate::expr::{Expression, Expressions};
pub use crate::field::{Field, Fields};
pub use crate::keywords::{JoinType, Lead, Op};
pub use crate::qb::{
    self, BuiltQuery, CommonTableExpression, Delete, FilterQb, Insert, Join, JoinTarget, Select,
    Statement, TableRef, ToSql, Update,
};
pub use crate::style::ParamStyle;

#[cfg(feature = "derive")]
pub use que_derive::ToFields;
