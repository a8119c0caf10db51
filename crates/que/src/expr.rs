//! Filter expressions.

use std::sync::Arc;

use serde_json::Value;

use crate::arguments::Arguments;
use crate::error::{QueError, QueResult};
use crate::field::{Field, Fields};
use crate::keywords::{Lead, Op};
use crate::style::ParamStyle;

/// `<column> <op> <placeholder>`, with the field carrying the bound value.
///
/// `prefix` is prepended to the parameter name under named styles, which
/// keeps SET values (`:colfoo`) apart from WHERE values (`:foo`).
#[derive(Debug, Clone, PartialEq)]
pub struct Expression {
    field: Field,
    op: Op,
    prefix: String,
}

impl Expression {
    /// Wrap a field in an `=` comparison. The field must be named.
    pub fn new(field: Field) -> QueResult<Self> {
        if field.left().is_none() {
            return Err(QueError::syntax("Expression.field.name must be provided"));
        }
        Ok(Self::from_named(field, Op::Eq, String::new()))
    }

    /// Caller guarantees `field` is named.
    pub(crate) fn from_named(field: Field, op: Op, prefix: String) -> Self {
        Self { field, op, prefix }
    }

    /// `column <op> value`.
    pub fn compare(column: impl Into<String>, op: Op, value: impl Into<Value>) -> Self {
        Self::from_named(Field::new(column, value), op, String::new())
    }

    pub fn eq(column: impl Into<String>, value: impl Into<Value>) -> Self {
        Self::compare(column, Op::Eq, value)
    }

    pub fn ne(column: impl Into<String>, value: impl Into<Value>) -> Self {
        Self::compare(column, Op::Ne, value)
    }

    pub fn gt(column: impl Into<String>, value: impl Into<Value>) -> Self {
        Self::compare(column, Op::Gt, value)
    }

    pub fn gte(column: impl Into<String>, value: impl Into<Value>) -> Self {
        Self::compare(column, Op::Gte, value)
    }

    pub fn lt(column: impl Into<String>, value: impl Into<Value>) -> Self {
        Self::compare(column, Op::Lt, value)
    }

    pub fn lte(column: impl Into<String>, value: impl Into<Value>) -> Self {
        Self::compare(column, Op::Lte, value)
    }

    pub fn like(column: impl Into<String>, pattern: impl Into<Value>) -> Self {
        Self::compare(column, Op::Like, pattern)
    }

    pub fn ilike(column: impl Into<String>, pattern: impl Into<Value>) -> Self {
        Self::compare(column, Op::ILike, pattern)
    }

    pub fn not_like(column: impl Into<String>, pattern: impl Into<Value>) -> Self {
        Self::compare(column, Op::NotLike, pattern)
    }

    pub fn not_ilike(column: impl Into<String>, pattern: impl Into<Value>) -> Self {
        Self::compare(column, Op::NotILike, pattern)
    }

    pub fn regexp(column: impl Into<String>, pattern: impl Into<Value>) -> Self {
        Self::compare(column, Op::Regexp, pattern)
    }

    /// Replace the operator.
    pub fn with_op(mut self, op: Op) -> Self {
        self.op = op;
        self
    }

    /// Replace the named-style prefix.
    pub fn with_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = prefix.into();
        self
    }

    pub fn field(&self) -> &Field {
        &self.field
    }

    pub fn op(&self) -> Op {
        self.op
    }

    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    pub fn column(&self) -> &str {
        self.field.left().unwrap_or_default()
    }

    /// Render as one predicate.
    ///
    /// Numbered styles use `offset` as the placeholder number. Named styles
    /// return the field renamed to `prefix + column`, which is the key the
    /// value must be bound under.
    pub fn to_sql(&self, style: ParamStyle, offset: usize) -> (Field, String) {
        let column = self.column();
        match style {
            ParamStyle::Positional(p) => (
                self.field.clone(),
                format!("{column} {} {}", self.op, p.placeholder()),
            ),
            ParamStyle::Numbered(n) => (
                self.field.clone(),
                format!("{column} {} {}", self.op, n.placeholder(offset)),
            ),
            ParamStyle::Named(n) => {
                let name = format!("{}{column}", self.prefix);
                let sql = format!("{column} {} {}", self.op, n.placeholder(&name));
                (self.field.with_name(name), sql)
            }
        }
    }
}

/// Separator between predicates of one clause.
pub const AND_SEPARATOR: &str = " AND\n  ";

/// An ordered list of [`Expression`]s, AND-joined when rendered.
#[derive(Debug, Clone, PartialEq)]
pub struct Expressions {
    expressions: Arc<[Expression]>,
}

impl Default for Expressions {
    fn default() -> Self {
        Self {
            expressions: Arc::from(Vec::new()),
        }
    }
}

impl Expressions {
    pub fn new(expressions: impl IntoIterator<Item = Expression>) -> Self {
        expressions.into_iter().collect()
    }

    /// A copy with `expression` appended.
    pub fn and(&self, expression: Expression) -> Self {
        self.iter().cloned().chain(std::iter::once(expression)).collect()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Expression> {
        self.expressions.iter()
    }

    pub fn len(&self) -> usize {
        self.expressions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.expressions.is_empty()
    }

    /// Render every member, numbering from `offset`.
    pub fn iter_sql(
        &self,
        style: ParamStyle,
        offset: usize,
    ) -> impl Iterator<Item = (Field, String)> + '_ {
        self.iter()
            .enumerate()
            .map(move |(i, expression)| {
                expression.to_sql(style, offset.saturating_add(i))
            })
    }

    /// Render as `"<lead>\n  a = :1 AND\n  b = :2"`, or `""` when empty.
    pub fn to_sql(&self, style: ParamStyle, offset: usize, lead: Lead) -> (String, Arguments) {
        if self.is_empty() {
            return (String::new(), Arguments::default());
        }

        let (fields, predicates): (Vec<Field>, Vec<String>) = self.iter_sql(style, offset).unzip();
        let sql = format!("{lead}\n  {}", predicates.join(AND_SEPARATOR));
        (sql, Arguments::new(Fields::from(fields)))
    }

    /// [`to_sql`](Self::to_sql) with a `WHERE` lead.
    pub fn to_where_sql(&self, style: ParamStyle, offset: usize) -> (String, Arguments) {
        self.to_sql(style, offset, Lead::Where)
    }
}

impl FromIterator<Expression> for Expressions {
    fn from_iter<I: IntoIterator<Item = Expression>>(iter: I) -> Self {
        Self {
            expressions: iter.into_iter().collect(),
        }
    }
}

impl From<Vec<Expression>> for Expressions {
    fn from(expressions: Vec<Expression>) -> Self {
        Self {
            expressions: Arc::from(expressions),
        }
    }
}

impl<const N: usize> From<[Expression; N]> for Expressions {
    fn from(expressions: [Expression; N]) -> Self {
        Self::new(expressions)
    }
}

impl From<Expression> for Expressions {
    fn from(expression: Expression) -> Self {
        Self::new([expression])
    }
}

impl<'a> IntoIterator for &'a Expressions {
    type Item = &'a Expression;
    type IntoIter = std::slice::Iter<'a, Expression>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn new_requires_name() {
        let err = Expression::new(Field::unnamed("bar")).unwrap_err();
        assert!(err.is_syntax());
        assert!(Expression::new(Field::new("foo", "bar")).is_ok());
    }

    #[test]
    fn render_per_family() {
        let expr = Expression::eq("foo", "bar").with_prefix("col");

        let (field, sql) = expr.to_sql(ParamStyle::QMARK, 9);
        assert_eq!(sql, "foo = ?");
        assert_eq!(field.left(), Some("foo"));

        let (_, sql) = expr.to_sql(ParamStyle::DOLLAR, 9);
        assert_eq!(sql, "foo = $9");

        let (field, sql) = expr.to_sql(ParamStyle::PYFORMAT, 9);
        assert_eq!(sql, "foo = %(colfoo)s");
        assert_eq!(field.left(), Some("colfoo"));
        assert_eq!(field.right(), Some(&json!("bar")));
    }

    #[test]
    fn operators_render_verbatim() {
        let (_, sql) = Expression::not_ilike("name", "%x%").to_sql(ParamStyle::NUMERIC, 1);
        assert_eq!(sql, "name NOT ILIKE :1");
        let (_, sql) = Expression::eq("a", 1).with_op(Op::Gte).to_sql(ParamStyle::QMARK, 1);
        assert_eq!(sql, "a >= ?");
    }

    #[test]
    fn empty_renders_nothing() {
        let (sql, args) = Expressions::default().to_where_sql(ParamStyle::NUMERIC, 1);
        assert_eq!(sql, "");
        assert!(args.is_empty());
    }

    #[test]
    fn numbering_and_separators() {
        let exprs = Expressions::new([
            Expression::eq("a", 1),
            Expression::gt("b", 2),
            Expression::like("c", "x%"),
        ]);
        let (sql, args) = exprs.to_where_sql(ParamStyle::NUMERIC, 4);
        assert_eq!(sql, "WHERE\n  a = :4 AND\n  b > :5 AND\n  c LIKE :6");
        assert_eq!(sql.matches("AND\n  ").count(), exprs.len() - 1);
        assert_eq!(args.values(), vec![json!(1), json!(2), json!("x%")]);
    }

    #[test]
    fn and_lead() {
        let exprs = Expressions::from(Expression::eq("a", 1));
        let (sql, _) = exprs.to_sql(ParamStyle::QMARK, 1, Lead::And);
        assert_eq!(sql, "AND\n  a = ?");
    }

    #[test]
    fn and_appends_without_mutating() {
        let base = Expressions::from(Expression::eq("a", 1));
        let more = base.and(Expression::eq("b", 2));
        assert_eq!(base.len(), 1);
        assert_eq!(more.len(), 2);
    }
}
