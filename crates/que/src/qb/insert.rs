//! INSERT statements.

use serde_json::Value;

use crate::arguments::Arguments;
use crate::error::QueResult;
use crate::field::{Field, Fields};
use crate::qb::table::TableRef;
use crate::qb::traits::ToSql;
use crate::qb::{require_named, returning_clause, trace_render};
use crate::style::ParamStyle;

/// Prefix for column parameter names.
pub const COLUMN_PREFIX: &str = "col";
/// Prefix for value parameter names.
pub const VALUE_PREFIX: &str = "val";

/// `INSERT INTO <table> (<cols>) VALUES (<vals>) [RETURNING ...]`
///
/// With `inject_columns` (the default) column names are written into the
/// SQL verbatim. Without it they are bound as parameters too, ahead of the
/// values.
#[derive(Debug, Clone, PartialEq)]
pub struct Insert {
    table: TableRef,
    fields: Fields,
    returns: Option<Field>,
    inject_columns: bool,
}

impl Insert {
    /// Insert one row from `fields` (name = value). Every field must be
    /// named; an empty list inserts `DEFAULT VALUES`.
    pub fn new(table: impl Into<TableRef>, fields: impl Into<Fields>) -> QueResult<Self> {
        let fields = fields.into();
        require_named("Insert", &fields)?;
        Ok(Self {
            table: table.into(),
            fields,
            returns: None,
            inject_columns: true,
        })
    }

    pub fn schema(mut self, schema: impl Into<String>) -> Self {
        self.table = self.table.with_schema(schema);
        self
    }

    pub fn returning(mut self, field: impl Into<Field>) -> Self {
        self.returns = Some(field.into());
        self
    }

    pub fn inject_columns(mut self, inject: bool) -> Self {
        self.inject_columns = inject;
        self
    }

    pub fn table(&self) -> &TableRef {
        &self.table
    }

    pub fn row(&self) -> &Fields {
        &self.fields
    }

    pub fn returns(&self) -> Option<&Field> {
        self.returns.as_ref()
    }

    pub fn injects_columns(&self) -> bool {
        self.inject_columns
    }

    /// `col<name>` fields whose value is the column name.
    pub fn columns(&self) -> Fields {
        self.fields
            .iter()
            .filter_map(Field::left)
            .map(|name| Field::new(format!("{COLUMN_PREFIX}{name}"), name))
            .collect()
    }

    /// `val<name>` fields carrying the inserted values.
    pub fn values(&self) -> Fields {
        self.fields
            .iter()
            .filter_map(|field| {
                let name = field.left()?;
                Some(Field::new(
                    format!("{VALUE_PREFIX}{name}"),
                    field.right().cloned().unwrap_or(Value::Null),
                ))
            })
            .collect()
    }

    /// The INSERT clause without RETURNING.
    pub fn build_insert(&self, style: ParamStyle, offset: usize) -> (String, Arguments) {
        let table = self.table.qualified();
        if self.fields.is_empty() {
            return (
                format!("INSERT INTO\n  {table}\nDEFAULT VALUES\n"),
                Arguments::default(),
            );
        }

        let values = self.values();
        let (columns_sql, column_args) = if self.inject_columns {
            let names: Vec<&str> = self.fields.iter().filter_map(Field::left).collect();
            (names.join(", "), Arguments::default())
        } else {
            let columns = self.columns();
            (placeholders(&columns, style, offset), Arguments::new(columns))
        };
        let values_offset = offset.saturating_add(column_args.len());
        let values_sql = placeholders(&values, style, values_offset);

        let sql = format!("INSERT INTO\n  {table} ({columns_sql})\nVALUES\n  ({values_sql})\n");
        (sql, column_args + Arguments::new(values))
    }
}

fn placeholders(fields: &Fields, style: ParamStyle, offset: usize) -> String {
    fields
        .iter()
        .enumerate()
        .map(|(i, field)| {
            style.placeholder(field.left().unwrap_or_default(), offset.saturating_add(i))
        })
        .collect::<Vec<_>>()
        .join(", ")
}

impl ToSql for Insert {
    fn to_sql(&self, style: ParamStyle, offset: usize) -> (String, Arguments) {
        let (mut sql, args) = self.build_insert(style, offset);
        sql.push_str(&returning_clause(self.returns.as_ref()));
        trace_render("insert", style, offset, &sql, &args);
        (sql, args)
    }
}
