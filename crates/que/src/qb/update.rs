//! UPDATE statements.

use crate::arguments::Arguments;
use crate::error::{QueError, QueResult};
use crate::expr::{Expression, Expressions};
use crate::field::{Field, Fields};
use crate::keywords::Op;
use crate::qb::join::{Join, build_joins};
use crate::qb::table::TableRef;
use crate::qb::traits::{FilterQb, ToSql};
use crate::qb::{require_named, returning_clause, trace_render};
use crate::style::ParamStyle;

/// Prefix for SET parameter names under named styles.
pub const SET_PREFIX: &str = "col";

/// `UPDATE <table> SET ... [JOIN ...] [WHERE ...] [RETURNING ...]`
#[derive(Debug, Clone, PartialEq)]
pub struct Update {
    table: TableRef,
    fields: Fields,
    filters: Expressions,
    joins: Vec<Join>,
    returns: Option<Field>,
}

impl Update {
    /// Assign each of `fields` (name = value).
    ///
    /// Fails when `fields` is empty or any field has no name.
    pub fn new(table: impl Into<TableRef>, fields: impl Into<Fields>) -> QueResult<Self> {
        let fields = fields.into();
        if fields.is_empty() {
            return Err(QueError::syntax("Update requires at least one field to SET"));
        }
        require_named("Update", &fields)?;
        Ok(Self {
            table: table.into(),
            fields,
            filters: Expressions::default(),
            joins: Vec::new(),
            returns: None,
        })
    }

    pub fn schema(mut self, schema: impl Into<String>) -> Self {
        self.table = self.table.with_schema(schema);
        self
    }

    pub fn filters(mut self, filters: impl Into<Expressions>) -> Self {
        self.filters = filters.into();
        self
    }

    pub fn join(mut self, join: Join) -> Self {
        self.joins.push(join);
        self
    }

    pub fn returning(mut self, field: impl Into<Field>) -> Self {
        self.returns = Some(field.into());
        self
    }

    pub fn table(&self) -> &TableRef {
        &self.table
    }

    pub fn assignments(&self) -> &Fields {
        &self.fields
    }

    pub fn conditions(&self) -> &Expressions {
        &self.filters
    }

    pub fn returns(&self) -> Option<&Field> {
        self.returns.as_ref()
    }

    /// `UPDATE\n  <table>\nSET\n  a = :1,\n  b = :2`
    pub fn build_update(&self, style: ParamStyle, offset: usize) -> (String, Arguments) {
        let (fields, sets): (Vec<Field>, Vec<String>) = self
            .fields
            .iter()
            .enumerate()
            .map(|(i, field)| {
                Expression::from_named(field.clone(), Op::Eq, SET_PREFIX.to_string())
                    .to_sql(style, offset.saturating_add(i))
            })
            .unzip();
        let sql = format!(
            "UPDATE\n  {}\nSET\n  {}",
            self.table.qualified(),
            sets.join(",\n  ")
        );
        (sql, Arguments::new(fields))
    }
}

impl FilterQb for Update {
    fn filter(mut self, expression: Expression) -> Self {
        self.filters = self.filters.and(expression);
        self
    }
}

impl ToSql for Update {
    fn to_sql(&self, style: ParamStyle, offset: usize) -> (String, Arguments) {
        let (mut sql, mut args) = self.build_update(style, offset);
        sql.push('\n');

        let join_offset = offset.saturating_add(args.len());
        let (joins, join_args) = build_joins(&self.joins, style, join_offset);
        for join in joins {
            sql.push_str(&join);
            sql.push('\n');
        }
        args = args + join_args;

        let where_offset = offset.saturating_add(args.len());
        let (where_sql, where_args) = self.filters.to_where_sql(style, where_offset);
        if !where_sql.is_empty() {
            sql.push_str(&where_sql);
            sql.push('\n');
        }
        args = args + where_args;

        sql.push_str(&returning_clause(self.returns.as_ref()));
        trace_render("update", style, offset, &sql, &args);
        (sql, args)
    }
}
