//! The statement sum type.

use crate::arguments::Arguments;
use crate::qb::cte::CommonTableExpression;
use crate::qb::delete::Delete;
use crate::qb::insert::Insert;
use crate::qb::select::Select;
use crate::qb::table::TableRef;
use crate::qb::traits::ToSql;
use crate::qb::update::Update;
use crate::style::ParamStyle;

/// Any renderable statement.
#[derive(Debug, Clone, PartialEq)]
pub enum Statement {
    Select(Select),
    Insert(Insert),
    Update(Update),
    Delete(Delete),
    Cte(Box<CommonTableExpression>),
}

impl Statement {
    /// Lower-case statement keyword, e.g. `"select"`.
    pub fn kind(&self) -> &'static str {
        match self {
            Statement::Select(_) => "select",
            Statement::Insert(_) => "insert",
            Statement::Update(_) => "update",
            Statement::Delete(_) => "delete",
            Statement::Cte(_) => "cte",
        }
    }

    /// The target table, if the statement has one.
    pub fn table(&self) -> Option<&TableRef> {
        match self {
            Statement::Select(s) => Some(s.table()),
            Statement::Insert(s) => Some(s.table()),
            Statement::Update(s) => Some(s.table()),
            Statement::Delete(s) => Some(s.table()),
            Statement::Cte(_) => None,
        }
    }

    /// `<schema>_<table>_<kind>`, used when a CTE is given no alias.
    pub(crate) fn default_alias(&self) -> String {
        match self {
            Statement::Cte(cte) => format!("{}_{}", cte.alias(), self.kind()),
            _ => {
                let table = self
                    .table()
                    .map(|t| t.qualified().replace('.', "_"))
                    .unwrap_or_default();
                format!("{table}_{}", self.kind())
            }
        }
    }
}

impl ToSql for Statement {
    fn to_sql(&self, style: ParamStyle, offset: usize) -> (String, Arguments) {
        match self {
            Statement::Select(s) => s.to_sql(style, offset),
            Statement::Insert(s) => s.to_sql(style, offset),
            Statement::Update(s) => s.to_sql(style, offset),
            Statement::Delete(s) => s.to_sql(style, offset),
            Statement::Cte(s) => s.to_sql(style, offset),
        }
    }
}

impl From<Select> for Statement {
    fn from(s: Select) -> Self {
        Statement::Select(s)
    }
}

impl From<Insert> for Statement {
    fn from(s: Insert) -> Self {
        Statement::Insert(s)
    }
}

impl From<Update> for Statement {
    fn from(s: Update) -> Self {
        Statement::Update(s)
    }
}

impl From<Delete> for Statement {
    fn from(s: Delete) -> Self {
        Statement::Delete(s)
    }
}

impl From<CommonTableExpression> for Statement {
    fn from(s: CommonTableExpression) -> Self {
        Statement::Cte(Box::new(s))
    }
}
