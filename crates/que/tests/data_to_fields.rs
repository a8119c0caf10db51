use std::collections::BTreeMap;

use que::prelude::*;
use serde::Serialize;
use serde_json::{Value, json};

fn foo_bar() -> Fields {
    Fields::new([Field::new("foo", "bar")])
}

#[test]
fn every_representation_gives_the_same_fields() {
    #[derive(Serialize)]
    struct Record1 {
        foo: String,
    }

    let map = json!({"foo": "bar"}).as_object().cloned().unwrap();
    let from_map = data_to_fields(map).unwrap();
    let from_btree = data_to_fields(BTreeMap::from([("foo", "bar")])).unwrap();
    let from_pairs = data_to_fields(vec![("foo", "bar")]).unwrap();
    let from_array = data_to_fields([("foo".to_string(), json!("bar"))]).unwrap();
    let from_json_pairs = data_to_fields(json!([["foo", "bar"]])).unwrap();
    let from_record = data_to_fields(Record(&Record1 { foo: "bar".into() })).unwrap();

    for fields in [
        from_map,
        from_btree,
        from_pairs,
        from_array,
        from_json_pairs,
        from_record,
    ] {
        assert_eq!(fields, foo_bar());
    }
}

#[cfg(feature = "derive")]
mod derived {
    use super::*;

    #[derive(ToFields)]
    struct FooBar {
        foo: String,
    }

    #[derive(ToFields)]
    #[que(rename_all = "camelCase")]
    struct NewUser {
        user_name: String,
        #[que(rename = "mail")]
        email: Option<String>,
        #[que(skip)]
        #[allow(dead_code)]
        password_hash: String,
        login_count: i64,
    }

    #[test]
    fn derived_struct_matches_map() {
        let record = FooBar { foo: "bar".into() };
        assert_eq!(data_to_fields(&record).unwrap(), foo_bar());
        assert_eq!(record.to_fields().unwrap(), foo_bar());
    }

    #[test]
    fn derive_attributes() {
        let user = NewUser {
            user_name: "alice".into(),
            email: None,
            password_hash: "secret".into(),
            login_count: 3,
        };
        let fields = data_to_fields(&user).unwrap();
        assert_eq!(
            fields.names(),
            vec![Some("userName"), Some("mail"), Some("loginCount")]
        );
        assert_eq!(fields.values(), vec![json!("alice"), Value::Null, json!(3)]);

        let fields = data_to_fields_excluding(&user, &Exclude::nulls()).unwrap();
        assert_eq!(fields.names(), vec![Some("userName"), Some("loginCount")]);
    }

    #[test]
    fn derived_fields_feed_an_insert() {
        let user = NewUser {
            user_name: "bob".into(),
            email: Some("b@example.com".into()),
            password_hash: String::new(),
            login_count: 0,
        };
        let insert = qb::insert("users", user.to_fields().unwrap()).unwrap();
        let (sql, args) = insert.to_sql(ParamStyle::PYFORMAT, 1);
        assert_eq!(
            sql,
            "INSERT INTO\n  users (userName, mail, loginCount)\nVALUES\n  (%(valuserName)s, %(valmail)s, %(valloginCount)s)\n"
        );
        assert_eq!(args.len(), 3);
    }
}

#[test]
fn empty_or_malformed_input_is_a_value_error() {
    let empty: Vec<(String, Value)> = Vec::new();
    assert!(data_to_fields(empty).unwrap_err().is_value());
    assert!(data_to_fields(json!(["foo"])).unwrap_err().is_value());
    assert!(data_to_fields(json!([["foo"]])).unwrap_err().is_value());
    assert!(data_to_fields(json!({})).unwrap_err().is_value());
    assert!(data_to_fields(json!(42)).unwrap_err().is_value());
}

#[test]
fn excluding_everything_yields_empty_fields() {
    let fields = data_to_fields_excluding(
        json!({"a": null, "b": null}),
        &Exclude::Kind(ValueKind::Null),
    )
    .unwrap();
    assert!(fields.is_empty());

    // an empty row inserts defaults
    let insert = qb::insert("t", fields).unwrap();
    let (sql, _) = insert.to_sql(ParamStyle::NUMERIC, 1);
    assert_eq!(sql, "INSERT INTO\n  t\nDEFAULT VALUES\n");
}
