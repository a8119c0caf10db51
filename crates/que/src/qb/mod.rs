//! Statement builders.
//!
//! Every builder is an immutable value: builder methods consume `self` and
//! return the updated statement, and rendering never mutates. The same
//! statement can be rendered in any [`ParamStyle`] at any offset.
//!
//! # Usage
//!
//! ```ignore
//! use que::prelude::*;
//!
//! // SELECT
//! let (sql, args) = qb::select("users")
//!     .fields([Field::named("id"), Field::new("name", "username")])
//!     .eq("status", "active")
//!     .to_sql(ParamStyle::DOLLAR, 1);
//!
//! // INSERT
//! let insert = qb::insert("users", [Field::new("name", "alice")])?
//!     .returning("id");
//!
//! // UPDATE
//! let update = qb::update("users", [Field::new("status", "inactive")])?
//!     .eq("id", 42);
//!
//! // DELETE
//! let delete = qb::delete("users").eq("id", 42);
//! ```

mod cte;
mod delete;
mod insert;
mod join;
mod select;
mod statement;
mod table;
mod traits;
mod update;

#[cfg(test)]
mod tests;

pub use cte::CommonTableExpression;
pub use delete::Delete;
pub use insert::{COLUMN_PREFIX, Insert, VALUE_PREFIX};
pub use join::{Join, JoinTarget};
pub use select::Select;
pub use statement::Statement;
pub use table::TableRef;
pub use traits::{BuiltQuery, FilterQb, ToSql};
pub use update::{SET_PREFIX, Update};

use crate::arguments::Arguments;
use crate::error::{QueError, QueResult};
use crate::field::{Field, Fields};
use crate::style::ParamStyle;

/// Create a SELECT for the given table.
///
/// # Example
/// ```ignore
/// let select = que::qb::select("users").eq("id", 1);
/// ```
pub fn select(table: impl Into<TableRef>) -> Select {
    Select::new(table)
}

/// Create an INSERT of one row. Fails when a field has no name.
pub fn insert(table: impl Into<TableRef>, fields: impl Into<Fields>) -> QueResult<Insert> {
    Insert::new(table, fields)
}

/// Create an UPDATE. Fails when `fields` is empty or a field has no name.
pub fn update(table: impl Into<TableRef>, fields: impl Into<Fields>) -> QueResult<Update> {
    Update::new(table, fields)
}

/// Create a DELETE for the given table.
pub fn delete(table: impl Into<TableRef>) -> Delete {
    Delete::new(table)
}

/// Create a JOIN on `lkey`.
pub fn join(target: impl Into<JoinTarget>, lkey: impl Into<String>) -> Join {
    Join::new(target, lkey)
}

/// Write statements bind by column name, so every field needs one.
pub(crate) fn require_named(statement: &str, fields: &Fields) -> QueResult<()> {
    match fields.iter().position(|field| field.left().is_none()) {
        Some(index) => Err(QueError::syntax(format!(
            "{statement} requires named fields (field {index} has no name)"
        ))),
        None => Ok(()),
    }
}

pub(crate) fn returning_clause(returns: Option<&Field>) -> String {
    returns
        .map(|field| format!("RETURNING {}", field.fetch_sql()))
        .unwrap_or_default()
}

#[cfg_attr(not(feature = "tracing"), allow(unused_variables))]
pub(crate) fn trace_render(
    kind: &'static str,
    style: ParamStyle,
    offset: usize,
    sql: &str,
    args: &Arguments,
) {
    que_trace!(
        target: "que.sql",
        kind,
        style = %style,
        offset,
        args = args.len(),
        sql,
        "rendered statement"
    );
}
