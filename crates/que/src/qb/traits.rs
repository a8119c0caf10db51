//! Trait definitions for statement builders.

use serde::Serialize;
use serde_json::Value;

use crate::arguments::{Arguments, SqlArgs};
use crate::config::RenderConfig;
use crate::expr::Expression;
use crate::keywords::Op;
use crate::qb::cte::CommonTableExpression;
use crate::qb::statement::Statement;
use crate::style::ParamStyle;

/// Anything that renders to SQL text plus the values it binds.
pub trait ToSql {
    /// Render with `style`, numbering placeholders from `offset`.
    ///
    /// Numbers saturate at `usize::MAX`, so offsets that close to the top
    /// repeat the last number instead of wrapping.
    fn to_sql(&self, style: ParamStyle, offset: usize) -> (String, Arguments);

    /// Render with a [`RenderConfig`].
    fn render(&self, config: RenderConfig) -> (String, Arguments) {
        self.to_sql(config.style, config.offset)
    }

    /// Render with the process-wide default style, starting at 1.
    fn as_sql(&self) -> (String, Arguments) {
        self.render(RenderConfig::default())
    }

    /// Render and convert the arguments into the shape a driver expects.
    fn build(&self, config: RenderConfig) -> BuiltQuery {
        let (sql, args) = self.render(config);
        BuiltQuery {
            sql,
            args: args.for_sql(config.style),
            style: config.style,
        }
    }

    /// Use `self` as the body of `WITH <alias> AS (...) <statement>`.
    ///
    /// Without an alias one is derived from the table name and statement
    /// kind, e.g. `bar_foo_select`.
    fn cte(self, statement: impl Into<Statement>, alias: Option<&str>) -> CommonTableExpression
    where
        Self: Sized + Into<Statement>,
    {
        let expression: Statement = self.into();
        let alias = alias
            .map(str::to_string)
            .unwrap_or_else(|| expression.default_alias());
        CommonTableExpression::new(expression, statement, alias)
    }
}

/// A rendered statement ready to hand to a driver.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BuiltQuery {
    pub sql: String,
    pub args: SqlArgs,
    pub style: ParamStyle,
}

/// Builders that accept WHERE predicates.
///
/// Only [`filter`](Self::filter) is required; the comparison shorthands
/// append an [`Expression`] through it.
pub trait FilterQb: Sized {
    /// Append a predicate to the WHERE clause.
    fn filter(self, expression: Expression) -> Self;

    /// Add WHERE: column <op> value
    fn compare(self, column: impl Into<String>, op: Op, value: impl Into<Value>) -> Self {
        self.filter(Expression::compare(column, op, value))
    }

    /// Add WHERE: column = value
    fn eq(self, column: impl Into<String>, value: impl Into<Value>) -> Self {
        self.compare(column, Op::Eq, value)
    }

    /// Add WHERE: column <> value
    fn ne(self, column: impl Into<String>, value: impl Into<Value>) -> Self {
        self.compare(column, Op::Ne, value)
    }

    /// Add WHERE: column > value
    fn gt(self, column: impl Into<String>, value: impl Into<Value>) -> Self {
        self.compare(column, Op::Gt, value)
    }

    /// Add WHERE: column >= value
    fn gte(self, column: impl Into<String>, value: impl Into<Value>) -> Self {
        self.compare(column, Op::Gte, value)
    }

    /// Add WHERE: column < value
    fn lt(self, column: impl Into<String>, value: impl Into<Value>) -> Self {
        self.compare(column, Op::Lt, value)
    }

    /// Add WHERE: column <= value
    fn lte(self, column: impl Into<String>, value: impl Into<Value>) -> Self {
        self.compare(column, Op::Lte, value)
    }

    /// Add WHERE: column LIKE pattern
    fn like(self, column: impl Into<String>, pattern: impl Into<Value>) -> Self {
        self.compare(column, Op::Like, pattern)
    }

    /// Add WHERE: column ILIKE pattern (case-insensitive)
    fn ilike(self, column: impl Into<String>, pattern: impl Into<Value>) -> Self {
        self.compare(column, Op::ILike, pattern)
    }
}
