//! # que
//!
//! Build parameterized SQL statements for any DB-API placeholder style.
//!
//! ## Features
//!
//! - **Every paramstyle**: `?`, `%s`, `:1`, `$1`, `:name` and `%(name)s` from one statement
//! - **Values stay out of the SQL**: rendering yields the SQL text plus the bound values,
//!   ordered or keyed the way the driver expects
//! - **Immutable builders**: render the same statement any number of times, in any style
//! - **Offsets**: start numbering anywhere, so fragments compose into larger statements
//! - **Data in, fields out**: maps, pair lists, serializable records and `#[derive(ToFields)]`
//!   structs all become column/value fields
//!
//! ## Example
//!
//! ```ignore
//! use que::prelude::*;
//!
//! let select = qb::select("foo")
//!     .schema("bar")
//!     .fields(Field::new("foo", "bar"))
//!     .eq("foo", "bar");
//!
//! let (sql, args) = select.to_sql(ParamStyle::NUMERIC, 1);
//! assert_eq!(sql, "SELECT\n  foo AS bar\nFROM\n  bar.foo\nWHERE\n  foo = :1");
//! assert_eq!(args.values(), vec![serde_json::json!("bar")]);
//!
//! let update = qb::update("foo", data_to_fields(serde_json::json!({"foo": "bar"}))?)?
//!     .eq("id", 1)
//!     .returning("id");
//! let built = update.build(RenderConfig::new().with_style(ParamStyle::NAMED));
//! ```

#[macro_use]
mod log;

pub mod arguments;
pub mod config;
pub mod data;
pub mod error;
pub mod expr;
pub mod field;
pub mod keywords;
pub mod prelude;
pub mod qb;
pub mod style;

pub use arguments::{Arguments, SqlArgs};
pub use config::{RenderConfig, STYLE_ENV_VAR, default_style, set_default_style};
pub use data::{
    Exclude, FieldSource, Record, ToFields, ValueKind, data_to_fields, data_to_fields_excluding,
};
pub use error::{QueError, QueResult};
pub use expr::{Expression, Expressions};
pub use field::{Field, Fields};
pub use keywords::{JoinType, Lead, Op};
pub use style::{Named, Numbered, ParamStyle, Positional};

// Re-export qb for easy access
pub use qb::{
    BuiltQuery, CommonTableExpression, Delete, FilterQb, Insert, Join, JoinTarget, Select,
    Statement, TableRef, ToSql, Update, delete, insert, select, update,
};

pub use serde_json::Value;

#[cfg(feature = "derive")]
pub use que_derive::ToFields;

// Lets derive output name `::que` from inside this crate's own tests.
extern crate self as que;

#[doc(hidden)]
pub mod __private {
    pub use crate::data::to_value;
}
