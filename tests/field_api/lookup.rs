//! Lookup Tests
//!
//! - Single field returns text
//! - List returns requested keys with stored values
//! - Dotted names follow joins; unresolved joins yield None

use crate::common::*;

// ============================================================================
// Single field
// ============================================================================

#[test]
fn single_field_is_text_of_stored_value() {
    let t = TestDb::new();
    assert_eq!(
        t.api.lookup_field("case", 5, "status", false).unwrap(),
        FieldLookup::Text("open".to_string())
    );
    assert_eq!(t.api.lookup_text("case", 5, "customer").unwrap(), "7");
}

#[test]
fn single_field_absent_is_empty_text() {
    let t = TestDb::new();
    assert_eq!(t.api.lookup_text("case", 6, "title").unwrap(), "");
}

// ============================================================================
// List
// ============================================================================

#[test]
fn case_with_customer_name() {
    let t = TestDb::new();
    let values = t
        .api
        .lookup_values("case", 5, ["status", "customer.name"])
        .unwrap();

    assert_eq!(values.len(), 2);
    assert_eq!(values.get("status"), Some(&Value::from("open")));
    assert_eq!(values.get("customer.name"), Some(&Value::from("Acme")));
}

#[test]
fn list_returns_exactly_requested_keys() {
    let t = TestDb::new();
    let requested = ["title", "customer.tier", "assignee.email", "missing"];
    let values = t.api.lookup_values("case", 5, requested).unwrap();

    assert_eq!(values.keys().collect::<Vec<_>>(), requested.to_vec());
    assert_eq!(values.get("title"), Some(&Value::from("Login fails")));
    assert_eq!(values.get("customer.tier"), Some(&Value::from("gold")));
    assert_eq!(
        values.get("assignee.email"),
        Some(&Value::from("dana@example.com"))
    );
    assert!(values.contains_key("missing"));
    assert!(values.get("missing").is_none());
}

#[test]
fn list_form_of_lookup_field() {
    let t = TestDb::new();
    let found = t
        .api
        .lookup_field("case", 5, vec!["status".to_string()], false)
        .unwrap();
    let values = found.into_values().expect("list form");
    assert_eq!(values.get("status"), Some(&Value::from("open")));
}

// ============================================================================
// Joins
// ============================================================================

#[test]
fn join_to_missing_record_is_none() {
    let t = TestDb::new();
    let values = t.api.lookup_values("case", 6, ["customer.name"]).unwrap();
    assert!(values.contains_key("customer.name"));
    assert!(values.get("customer.name").is_none());
}

#[test]
fn join_without_source_value_is_none() {
    let t = TestDb::new();
    let values = t.api.lookup_values("case", 6, ["assignee.email"]).unwrap();
    assert!(values.get("assignee.email").is_none());
}

#[test]
fn join_to_unregistered_type_is_none() {
    let t = TestDb::new();
    let values = t.api.lookup_values("case", 5, ["vendor.name"]).unwrap();
    assert!(values.get("vendor.name").is_none());
}

#[test]
fn join_through_plain_field_is_none() {
    let t = TestDb::new();
    let values = t.api.lookup_values("case", 5, ["status.name"]).unwrap();
    assert!(values.get("status.name").is_none());
}

#[test]
fn join_reads_current_target_state() {
    let t = TestDb::new();
    t.api
        .submit_field("customer", 7, "name", "Acme Corp", false)
        .unwrap();

    let values = t.api.lookup_values("case", 5, ["customer.name"]).unwrap();
    assert_eq!(values.get("customer.name"), Some(&Value::from("Acme Corp")));
}

#[test]
fn retargeting_the_source_field_changes_the_join() {
    let t = TestDb::new();
    t.db.insert_record("customer", Record::new(8).with("name", "Globex"))
        .unwrap();

    let values = t.api.lookup_values("case", 6, ["customer.name"]).unwrap();
    assert_eq!(values.get("customer.name"), Some(&Value::from("Globex")));

    t.api.submit_field("case", 6, "customer", 7i64, false).unwrap();
    let values = t.api.lookup_values("case", 6, ["customer.name"]).unwrap();
    assert_eq!(values.get("customer.name"), Some(&Value::from("Acme")));
}

#[test]
fn join_through_integral_float_key() {
    let fixture = Fixture::from_json(
        r#"{
            "__metadata": [
                {"code": "case", "fields": [{"code": "customer", "recordType": "customer"}]},
                {"code": "customer", "fields": [{"code": "name"}]}
            ],
            "case": [{"internalid": 5.0, "customer": 7.0}],
            "customer": [{"internalid": 7, "name": "Acme"}]
        }"#,
    )
    .unwrap();
    let t = TestDb::from_fixture(&fixture);

    assert_eq!(t.record("case", 5).unwrap().get("customer"), Some(&Value::Int(7)));
    let values = t.api.lookup_values("case", 5, ["customer.name"]).unwrap();
    assert_eq!(values.get("customer.name"), Some(&Value::from("Acme")));
}

#[test]
fn single_field_null_and_absent_share_text() {
    let t = TestDb::new();
    t.api
        .submit_field("case", 5, ["title"], vec![Value::Null], false)
        .unwrap();

    assert_eq!(t.api.lookup_text("case", 5, "title").unwrap(), "");
    assert_eq!(t.api.lookup_text("case", 5, "never_set").unwrap(), "");
    let values = t.api.lookup_values("case", 5, ["title", "never_set"]).unwrap();
    assert_eq!(
        values.iter().collect::<Vec<_>>(),
        vec![("title", Some(&Value::Null)), ("never_set", None)]
    );
}
