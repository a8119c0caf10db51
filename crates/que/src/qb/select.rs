//! SELECT statements.

use crate::arguments::Arguments;
use crate::expr::{Expression, Expressions};
use crate::field::{Field, Fields};
use crate::qb::join::{Join, build_joins};
use crate::qb::table::TableRef;
use crate::qb::trace_render;
use crate::qb::traits::{FilterQb, ToSql};
use crate::style::ParamStyle;

/// `SELECT <fields> FROM <table> [JOIN ...] [WHERE ...]`
#[derive(Debug, Clone, PartialEq)]
pub struct Select {
    table: TableRef,
    fields: Fields,
    filters: Expressions,
    joins: Vec<Join>,
}

impl Select {
    /// Select every column (`*`) from `table`.
    pub fn new(table: impl Into<TableRef>) -> Self {
        Self {
            table: table.into(),
            fields: Fields::default(),
            filters: Expressions::default(),
            joins: Vec::new(),
        }
    }

    pub fn schema(mut self, schema: impl Into<String>) -> Self {
        self.table = self.table.with_schema(schema);
        self
    }

    /// Replace the select list.
    pub fn fields(mut self, fields: impl Into<Fields>) -> Self {
        self.fields = fields.into();
        self
    }

    /// Append one entry to the select list.
    pub fn field(mut self, field: impl Into<Field>) -> Self {
        self.fields = self.fields.concat(&Fields::from(field.into()));
        self
    }

    /// Replace the WHERE predicates.
    pub fn filters(mut self, filters: impl Into<Expressions>) -> Self {
        self.filters = filters.into();
        self
    }

    pub fn join(mut self, join: Join) -> Self {
        self.joins.push(join);
        self
    }

    pub fn joins(mut self, joins: impl IntoIterator<Item = Join>) -> Self {
        self.joins.extend(joins);
        self
    }

    pub fn table(&self) -> &TableRef {
        &self.table
    }

    pub fn select_fields(&self) -> &Fields {
        &self.fields
    }

    pub fn conditions(&self) -> &Expressions {
        &self.filters
    }

    pub fn join_clauses(&self) -> &[Join] {
        &self.joins
    }

    /// `SELECT\n  <cols>\nFROM\n  <table>` with no placeholders.
    pub fn build_select(&self) -> String {
        let columns = if self.fields.is_empty() {
            "*".to_string()
        } else {
            self.fields
                .iter()
                .map(Field::fetch_sql)
                .collect::<Vec<_>>()
                .join(",\n  ")
        };
        format!("SELECT\n  {columns}\nFROM\n  {}", self.table.qualified())
    }
}

impl FilterQb for Select {
    fn filter(mut self, expression: Expression) -> Self {
        self.filters = self.filters.and(expression);
        self
    }
}

impl ToSql for Select {
    fn to_sql(&self, style: ParamStyle, offset: usize) -> (String, Arguments) {
        let mut parts = vec![self.build_select()];

        let (joins, join_args) = build_joins(&self.joins, style, offset);
        parts.extend(joins);

        let where_offset = offset.saturating_add(join_args.len());
        let (where_sql, where_args) = self.filters.to_where_sql(style, where_offset);
        if !where_sql.is_empty() {
            parts.push(where_sql);
        }

        let sql = parts.join("\n");
        let args = join_args + where_args;
        trace_render("select", style, offset, &sql, &args);
        (sql, args)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn star_when_no_fields() {
        let (sql, args) = Select::new("foo").to_sql(ParamStyle::NUMERIC, 1);
        assert_eq!(sql, "SELECT\n  *\nFROM\n  foo");
        assert!(args.is_empty());
    }

    #[test]
    fn aliased_fields_and_where() {
        let select = Select::new("foo")
            .schema("bar")
            .fields(Field::new("foo", "bar"))
            .filters(Expression::eq("foo", "bar"));
        let (sql, args) = select.to_sql(ParamStyle::NUMERIC, 1);
        assert_eq!(sql, "SELECT\n  foo AS bar\nFROM\n  bar.foo\nWHERE\n  foo = :1");
        assert_eq!(args.values(), vec![json!("bar")]);
    }

    #[test]
    fn field_appends() {
        let select = Select::new("t").field("a").field(Field::new("b", "c"));
        assert_eq!(select.build_select(), "SELECT\n  a,\n  b AS c\nFROM\n  t");
    }

    #[test]
    fn filter_shorthands_accumulate() {
        let select = Select::new("t").eq("a", 1).gte("b", 2).ilike("c", "%x");
        let (sql, args) = select.to_sql(ParamStyle::QMARK, 1);
        assert!(sql.ends_with("WHERE\n  a = ? AND\n  b >= ? AND\n  c ILIKE ?"));
        assert_eq!(args.len(), 3);
    }
}
