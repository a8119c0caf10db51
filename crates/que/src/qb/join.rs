//! JOIN clauses.

use crate::arguments::Arguments;
use crate::expr::Expressions;
use crate::keywords::{JoinType, Lead};
use crate::qb::select::Select;
use crate::qb::table::TableRef;
use crate::qb::traits::ToSql;
use crate::style::ParamStyle;

/// What a JOIN reads from.
#[derive(Debug, Clone, PartialEq)]
pub enum JoinTarget {
    Table(TableRef),
    /// A derived table, rendered in parentheses.
    Select(Box<Select>),
}

impl From<&str> for JoinTarget {
    fn from(name: &str) -> Self {
        JoinTarget::Table(TableRef::new(name))
    }
}

impl From<String> for JoinTarget {
    fn from(name: String) -> Self {
        JoinTarget::Table(TableRef::new(name))
    }
}

impl From<TableRef> for JoinTarget {
    fn from(table: TableRef) -> Self {
        JoinTarget::Table(table)
    }
}

impl From<Select> for JoinTarget {
    fn from(select: Select) -> Self {
        JoinTarget::Select(Box::new(select))
    }
}

/// `[<HOW> ]JOIN <target>[ AS <alias>] ON <lkey>[ = <rkey>][ AND <filters>]`
#[derive(Debug, Clone, PartialEq)]
pub struct Join {
    target: JoinTarget,
    lkey: String,
    rkey: Option<String>,
    alias: Option<String>,
    how: Option<JoinType>,
    filters: Expressions,
}

impl Join {
    /// Join `target` on `lkey`, which may be a full condition (`a.id = b.id`)
    /// or the left side of one completed by [`rkey`](Self::rkey).
    pub fn new(target: impl Into<JoinTarget>, lkey: impl Into<String>) -> Self {
        Self {
            target: target.into(),
            lkey: lkey.into(),
            rkey: None,
            alias: None,
            how: None,
            filters: Expressions::default(),
        }
    }

    pub fn rkey(mut self, rkey: impl Into<String>) -> Self {
        self.rkey = Some(rkey.into());
        self
    }

    /// Set the schema of a table target. Ignored for derived tables.
    pub fn schema(mut self, schema: impl Into<String>) -> Self {
        self.target = match self.target {
            JoinTarget::Table(table) => JoinTarget::Table(table.with_schema(schema)),
            derived => derived,
        };
        self
    }

    pub fn alias(mut self, alias: impl Into<String>) -> Self {
        self.alias = Some(alias.into());
        self
    }

    pub fn how(mut self, how: JoinType) -> Self {
        self.how = Some(how);
        self
    }

    /// Extra `AND` predicates on the join condition.
    ///
    /// Under named styles these bind by column name like WHERE predicates
    /// do; give them a prefix ([`Expression::with_prefix`]) when the same
    /// column is also filtered in WHERE.
    ///
    /// [`Expression::with_prefix`]: crate::Expression::with_prefix
    pub fn filters(mut self, filters: impl Into<Expressions>) -> Self {
        self.filters = filters.into();
        self
    }

    pub fn target(&self) -> &JoinTarget {
        &self.target
    }

    pub fn join_type(&self) -> Option<JoinType> {
        self.how
    }

    pub fn conditions(&self) -> &Expressions {
        &self.filters
    }
}

impl ToSql for Join {
    fn to_sql(&self, style: ParamStyle, offset: usize) -> (String, Arguments) {
        let mut args = Arguments::default();
        let mut sql = String::new();

        if let Some(how) = self.how {
            sql.push_str(how.as_str());
            sql.push(' ');
        }
        sql.push_str("JOIN ");
        match &self.target {
            JoinTarget::Table(table) => sql.push_str(&table.qualified()),
            JoinTarget::Select(select) => {
                let (inner, inner_args) = select.to_sql(style, offset);
                sql.push_str("(\n");
                sql.push_str(&inner);
                sql.push_str("\n)");
                args = inner_args;
            }
        }
        if let Some(alias) = &self.alias {
            sql.push_str(" AS ");
            sql.push_str(alias);
        }

        sql.push_str("\n  ON ");
        sql.push_str(&self.lkey);
        if let Some(rkey) = &self.rkey {
            sql.push_str(" = ");
            sql.push_str(rkey);
        }

        let (filters, filter_args) =
            self.filters
                .to_sql(style, offset.saturating_add(args.len()), Lead::And);
        if !filters.is_empty() {
            sql.push_str("\n  ");
            sql.push_str(&filters);
        }

        (sql, args + filter_args)
    }
}

/// Render joins in order, continuing the placeholder count across them.
pub(crate) fn build_joins(
    joins: &[Join],
    style: ParamStyle,
    offset: usize,
) -> (Vec<String>, Arguments) {
    let mut args = Arguments::default();
    let mut parts = Vec::with_capacity(joins.len());
    for join in joins {
        let (sql, join_args) = join.to_sql(style, offset.saturating_add(args.len()));
        parts.push(sql);
        args = args + join_args;
    }
    (parts, args)
}
