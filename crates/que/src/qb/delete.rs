//! DELETE statements.

use crate::arguments::Arguments;
use crate::expr::{Expression, Expressions};
use crate::field::Field;
use crate::qb::join::{Join, build_joins};
use crate::qb::table::TableRef;
use crate::qb::traits::{FilterQb, ToSql};
use crate::qb::{returning_clause, trace_render};
use crate::style::ParamStyle;

/// `DELETE FROM <table> [JOIN ...] [WHERE ...] [RETURNING ...]`
///
/// A delete without filters removes every row; nothing stops that here.
#[derive(Debug, Clone, PartialEq)]
pub struct Delete {
    table: TableRef,
    filters: Expressions,
    joins: Vec<Join>,
    returns: Option<Field>,
}

impl Delete {
    pub fn new(table: impl Into<TableRef>) -> Self {
        Self {
            table: table.into(),
            filters: Expressions::default(),
            joins: Vec::new(),
            returns: None,
        }
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

    pub fn conditions(&self) -> &Expressions {
        &self.filters
    }

    pub fn returns(&self) -> Option<&Field> {
        self.returns.as_ref()
    }
}

impl FilterQb for Delete {
    fn filter(mut self, expression: Expression) -> Self {
        self.filters = self.filters.and(expression);
        self
    }
}

impl ToSql for Delete {
    fn to_sql(&self, style: ParamStyle, offset: usize) -> (String, Arguments) {
        let mut sql = format!("DELETE FROM\n  {}\n", self.table.qualified());

        let (joins, join_args) = build_joins(&self.joins, style, offset);
        for join in joins {
            sql.push_str(&join);
            sql.push('\n');
        }

        let where_offset = offset.saturating_add(join_args.len());
        let (where_sql, where_args) = self.filters.to_where_sql(style, where_offset);
        if !where_sql.is_empty() {
            sql.push_str(&where_sql);
            sql.push('\n');
        }

        sql.push_str(&returning_clause(self.returns.as_ref()));
        let args = join_args + where_args;
        trace_render("delete", style, offset, &sql, &args);
        (sql, args)
    }
}
