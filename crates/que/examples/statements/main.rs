//! Example: build the same statements in every placeholder style.
//!
//! Run with:
//!   cargo run --example statements -p que
//!
//! Optional:
//!   QUE_PARAM_STYLE=pyformat cargo run --example statements -p que

use que::prelude::*;
use serde::Serialize;

#[derive(ToFields)]
struct NewUser {
    username: String,
    email: Option<String>,
}

#[derive(Serialize)]
struct StatusChange {
    status: &'static str,
}

fn print(title: &str, query: &BuiltQuery) -> QueResult<()> {
    println!("-- {title} [{}]", query.style);
    println!("{}", query.sql);
    println!("-- args: {}", que::__private::to_value(&query.args)?);
    println!();
    Ok(())
}

fn main() -> QueResult<()> {
    let user = NewUser {
        username: "alice".to_string(),
        email: Some("alice@example.com".to_string()),
    };

    let insert = qb::insert("users", user.to_fields()?)?
        .schema("app")
        .returning("id");

    let change = data_to_fields(Record(&StatusChange { status: "inactive" }))?;
    let update = qb::update("users", change)?
        .schema("app")
        .eq("username", "alice")
        .returning("id");

    let select = qb::select("users")
        .schema("app")
        .fields([Field::named("id"), Field::new("username", "name")])
        .join(
            Join::new("app.orders", "users.id")
                .rkey("o.user_id")
                .alias("o")
                .how(JoinType::Left)
                .filters(Expression::gt("o.total", 100)),
        )
        .ilike("email", "%@example.com");

    for style in ParamStyle::ALL {
        let config = RenderConfig::new().with_style(style);
        print("insert", &insert.build(config))?;
        print("update", &update.build(config))?;
        print("select", &select.build(config))?;
    }

    // default style comes from QUE_PARAM_STYLE (numeric if unset)
    let (sql, args) = qb::delete("users").eq("id", 1).as_sql();
    println!("-- delete [{}]\n{sql}\n-- {} arg(s)", default_style(), args.len());

    Ok(())
}
