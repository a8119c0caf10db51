//! Common table expressions (WITH clause).

use crate::arguments::Arguments;
use crate::qb::statement::Statement;
use crate::qb::trace_render;
use crate::qb::traits::ToSql;
use crate::style::ParamStyle;

/// `WITH <alias> AS (\n<expression>\n)\n<statement>`
///
/// Placeholders are numbered through the body first, then the dependent
/// statement, matching their order in the text.
#[derive(Debug, Clone, PartialEq)]
pub struct CommonTableExpression {
    expression: Statement,
    statement: Statement,
    alias: String,
}

impl CommonTableExpression {
    pub fn new(
        expression: impl Into<Statement>,
        statement: impl Into<Statement>,
        alias: impl Into<String>,
    ) -> Self {
        Self {
            expression: expression.into(),
            statement: statement.into(),
            alias: alias.into(),
        }
    }

    pub fn expression(&self) -> &Statement {
        &self.expression
    }

    pub fn statement(&self) -> &Statement {
        &self.statement
    }

    pub fn alias(&self) -> &str {
        &self.alias
    }
}

impl ToSql for CommonTableExpression {
    fn to_sql(&self, style: ParamStyle, offset: usize) -> (String, Arguments) {
        let (body, body_args) = self.expression.to_sql(style, offset);
        let stmt_offset = offset.saturating_add(body_args.len());
        let (stmt, stmt_args) = self.statement.to_sql(style, stmt_offset);
        let sql = format!("WITH {} AS (\n{body}\n)\n{stmt}", self.alias);
        let args = body_args + stmt_args;
        trace_render("cte", style, offset, &sql, &args);
        (sql, args)
    }
}
