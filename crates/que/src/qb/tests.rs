//! Integration tests for the qb module.

use serde_json::json;

use crate::arguments::SqlArgs;
use crate::config::RenderConfig;
use crate::expr::Expression;
use crate::field::Field;
use crate::keywords::JoinType;
use crate::qb::{FilterQb, Join, Statement, ToSql, delete, insert, join, select, update};
use crate::style::ParamStyle;

fn default_select() -> crate::qb::Select {
    select("foo")
        .schema("bar")
        .fields(Field::new("foo", "bar"))
        .filters(Expression::eq("foo", "bar"))
}

fn default_update() -> crate::qb::Update {
    update("foo", Field::new("foo", "bar"))
        .unwrap()
        .schema("bar")
        .eq("foo", "bar")
}

fn default_insert() -> crate::qb::Insert {
    insert("foo", Field::new("foo", "bar")).unwrap().schema("bar")
}

#[test]
fn test_select_every_style() {
    let cases = [
        (ParamStyle::NUMERIC, "foo = :1"),
        (ParamStyle::DOLLAR, "foo = $1"),
        (ParamStyle::NAMED, "foo = :foo"),
        (ParamStyle::PYFORMAT, "foo = %(foo)s"),
        (ParamStyle::FORMAT, "foo = %s"),
        (ParamStyle::QMARK, "foo = ?"),
    ];
    for (style, predicate) in cases {
        let (sql, args) = default_select().to_sql(style, 1);
        assert_eq!(
            sql,
            format!("SELECT\n  foo AS bar\nFROM\n  bar.foo\nWHERE\n  {predicate}")
        );
        assert_eq!(args.values(), vec![json!("bar")]);
    }
}

#[test]
fn test_update_every_style() {
    let cases = [
        (ParamStyle::NUMERIC, "foo = :1", "foo = :2"),
        (ParamStyle::DOLLAR, "foo = $1", "foo = $2"),
        (ParamStyle::NAMED, "foo = :colfoo", "foo = :foo"),
        (ParamStyle::PYFORMAT, "foo = %(colfoo)s", "foo = %(foo)s"),
        (ParamStyle::FORMAT, "foo = %s", "foo = %s"),
        (ParamStyle::QMARK, "foo = ?", "foo = ?"),
    ];
    for (style, set, filter) in cases {
        let (sql, args) = default_update().to_sql(style, 1);
        assert_eq!(
            sql,
            format!("UPDATE\n  bar.foo\nSET\n  {set}\nWHERE\n  {filter}\n")
        );
        assert_eq!(args.len(), 2);
    }
}

#[test]
fn test_insert_bound_columns_every_style() {
    let cases = [
        (ParamStyle::NUMERIC, ":1", ":2"),
        (ParamStyle::DOLLAR, "$1", "$2"),
        (ParamStyle::NAMED, ":colfoo", ":valfoo"),
        (ParamStyle::PYFORMAT, "%(colfoo)s", "%(valfoo)s"),
        (ParamStyle::FORMAT, "%s", "%s"),
        (ParamStyle::QMARK, "?", "?"),
    ];
    for (style, column, value) in cases {
        let (sql, args) = default_insert().inject_columns(false).to_sql(style, 1);
        assert_eq!(
            sql,
            format!("INSERT INTO\n  bar.foo ({column})\nVALUES\n  ({value})\n")
        );
        assert_eq!(args.values(), vec![json!("foo"), json!("bar")]);
    }
}

#[test]
fn test_insert_injected_named() {
    let (sql, args) = default_insert().to_sql(ParamStyle::NAMED, 1);
    assert_eq!(sql, "INSERT INTO\n  bar.foo (foo)\nVALUES\n  (:valfoo)\n");
    assert_eq!(
        args.for_sql(ParamStyle::NAMED),
        SqlArgs::Named(json!({"valfoo": "bar"}).as_object().unwrap().clone())
    );
}

#[test]
fn test_returning_on_every_write() {
    let insert = default_insert().returning("id");
    let update = default_update().returning("id");
    let delete = delete("foo").schema("bar").eq("foo", "bar").returning("id");
    for stmt in [
        Statement::from(insert),
        Statement::from(update),
        Statement::from(delete),
    ] {
        let (sql, _) = stmt.to_sql(ParamStyle::NUMERIC, 1);
        assert!(sql.ends_with("\nRETURNING id"), "{sql}");
    }
}

#[test]
fn test_select_joins_number_before_where() {
    let select = select("orders")
        .fields([Field::named("orders.id"), Field::named("c.name")])
        .join(
            join("customers", "orders.customer_id")
                .rkey("c.id")
                .alias("c")
                .how(JoinType::Inner)
                .filters(Expression::eq("c.active", true)),
        )
        .gt("orders.total", 100);

    let (sql, args) = select.to_sql(ParamStyle::DOLLAR, 1);
    assert_eq!(
        sql,
        "SELECT\n  orders.id,\n  c.name\nFROM\n  orders\n\
         INNER JOIN customers AS c\n  ON orders.customer_id = c.id\n  AND\n  c.active = $1\n\
         WHERE\n  orders.total > $2"
    );
    assert_eq!(args.values(), vec![json!(true), json!(100)]);
}

#[test]
fn test_update_numbering_set_join_where() {
    let update = update("t", [Field::new("a", 1), Field::new("b", 2)])
        .unwrap()
        .join(Join::new("u", "u.id = t.u_id").filters(Expression::eq("u.k", 3)))
        .eq("t.id", 4);

    let (sql, args) = update.to_sql(ParamStyle::NUMERIC, 1);
    assert_eq!(
        sql,
        "UPDATE\n  t\nSET\n  a = :1,\n  b = :2\nJOIN u\n  ON u.id = t.u_id\n  AND\n  u.k = :3\nWHERE\n  t.id = :4\n"
    );
    assert_eq!(args.values(), vec![json!(1), json!(2), json!(3), json!(4)]);
}

#[test]
fn test_delete_with_join() {
    let delete = delete("t")
        .join(Join::new("u", "u.id = t.u_id").filters(Expression::eq("u.gone", true)))
        .eq("t.kind", "x");
    let (sql, args) = delete.to_sql(ParamStyle::QMARK, 1);
    assert_eq!(
        sql,
        "DELETE FROM\n  t\nJOIN u\n  ON u.id = t.u_id\n  AND\n  u.gone = ?\nWHERE\n  t.kind = ?\n"
    );
    assert_eq!(args.values(), vec![json!(true), json!("x")]);
}

#[test]
fn test_offset_shifts_every_placeholder() {
    let (sql, _) = default_update().to_sql(ParamStyle::DOLLAR, 10);
    assert!(sql.contains("foo = $10"));
    assert!(sql.contains("foo = $11"));
}

#[test]
fn test_cte_of_insert() {
    let insert = default_insert().returning("id");
    let cte = insert.cte(select("bar_foo_insert"), None);
    let (sql, args) = cte.to_sql(ParamStyle::NUMERIC, 1);
    assert_eq!(
        sql,
        "WITH bar_foo_insert AS (\nINSERT INTO\n  bar.foo (foo)\nVALUES\n  (:1)\nRETURNING id\n)\nSELECT\n  *\nFROM\n  bar_foo_insert"
    );
    assert_eq!(args.len(), 1);
}

#[test]
fn test_build_for_driver() {
    let built = default_update().build(
        RenderConfig::new()
            .with_style(ParamStyle::PYFORMAT)
            .with_offset(1),
    );
    assert_eq!(built.style, ParamStyle::PYFORMAT);
    assert_eq!(
        serde_json::to_value(&built).unwrap(),
        json!({
            "sql": "UPDATE\n  bar.foo\nSET\n  foo = %(colfoo)s\nWHERE\n  foo = %(foo)s\n",
            "args": {"colfoo": "bar", "foo": "bar"},
            "style": "pyformat"
        })
    );
}

#[test]
fn test_render_is_repeatable() {
    let select = default_select();
    let first = select.to_sql(ParamStyle::NAMED, 1);
    let second = select.to_sql(ParamStyle::NAMED, 1);
    assert_eq!(first, second);
}

#[test]
fn test_null_valued_fields_render_bare_names() {
    let fields = crate::data::data_to_fields(json!({"id": null, "name": "n", "note": ""})).unwrap();
    let (sql, _) = select("t").fields(fields).to_sql(ParamStyle::NUMERIC, 1);
    assert_eq!(sql, "SELECT\n  id,\n  name AS n,\n  note\nFROM\n  t");

    let delete = delete("t").returning(Field::new("id", serde_json::Value::Null));
    let (sql, _) = delete.to_sql(ParamStyle::NUMERIC, 1);
    assert!(sql.ends_with("RETURNING id"));
}
