//! Validation Order Tests
//!
//! Each call below is wrong in several ways at once; the first failing
//! check in the documented order decides the error.

use crate::common::*;

fn lookup_kind(t: &TestDb, record_type: &str, id: Value, fields: FieldSpec) -> ErrorKind {
    t.api
        .lookup_field(record_type, id, fields, false)
        .unwrap_err()
        .kind()
        .expect("field API error")
}

fn submit_kind(
    t: &TestDb,
    record_type: &str,
    id: Value,
    fields: FieldSpec,
    values: ValueSpec,
) -> ErrorKind {
    t.api
        .submit_field(record_type, id, fields, values, false)
        .unwrap_err()
        .kind()
        .expect("field API error")
}

fn fields(names: &[&str]) -> FieldSpec {
    FieldSpec::from(names)
}

#[test]
fn lookup_order() {
    let t = TestDb::new();
    use ErrorKind::*;

    assert_eq!(lookup_kind(&t, "", Value::Null, fields(&[])), TypeArgumentRequired);
    assert_eq!(lookup_kind(&t, "nope", Value::Null, fields(&[])), IdArgumentRequired);
    assert_eq!(lookup_kind(&t, "nope", Value::from(""), fields(&[])), IdArgumentRequired);
    assert_eq!(lookup_kind(&t, "nope", Value::from("5"), fields(&[])), InvalidInternalId);
    assert_eq!(lookup_kind(&t, "nope", Value::Float(5.5), fields(&[])), InvalidInternalId);
    assert_eq!(lookup_kind(&t, "nope", Value::Int(5), fields(&[])), FieldsArgumentRequired);
    assert_eq!(lookup_kind(&t, "nope", Value::Int(5), "".into()), FieldsArgumentRequired);
    assert_eq!(lookup_kind(&t, "nope", Value::Int(999), "status".into()), InvalidRecordType);
    assert_eq!(lookup_kind(&t, "case", Value::Int(999), "status".into()), InvalidInternalId);
}

#[test]
fn submit_order() {
    let t = TestDb::new();
    use ErrorKind::*;
    let none = ValueSpec::List(Vec::new());

    assert_eq!(submit_kind(&t, "", Value::Null, fields(&[]), none.clone()), TypeArgumentRequired);
    assert_eq!(submit_kind(&t, "nope", Value::Int(0), fields(&[]), none.clone()), IdArgumentRequired);
    assert_eq!(
        submit_kind(&t, "nope", Value::from("abc"), fields(&[]), none.clone()),
        InvalidInternalId
    );
    assert_eq!(
        submit_kind(&t, "nope", Value::Int(5), fields(&[]), none.clone()),
        FieldsArgumentRequired
    );
    assert_eq!(
        submit_kind(&t, "nope", Value::Int(5), "status".into(), none.clone()),
        ValuesArgumentRequired
    );
    assert_eq!(
        submit_kind(&t, "nope", Value::Int(5), "status".into(), Value::Bool(false).into()),
        ValuesArgumentRequired
    );
    assert_eq!(
        submit_kind(&t, "nope", Value::Int(5), fields(&["a", "b"]), "x".into()),
        ValuesArgumentRequired
    );
    assert_eq!(
        submit_kind(&t, "nope", Value::Int(999), "status".into(), "x".into()),
        InvalidRecordType
    );
    assert_eq!(
        submit_kind(&t, "case", Value::Int(999), "status".into(), "x".into()),
        InvalidInternalId
    );
}

#[test]
fn error_codes_and_context() {
    let t = TestDb::new();

    let err = t.api.lookup_field("case", 999, "status", false).unwrap_err();
    assert_eq!(err.kind().map(|k| k.code()), Some("SSS_INVALID_INTERNAL_ID"));
    assert!(matches!(
        &err,
        Error::InvalidInternalId { record_type, id } if record_type == "case" && id == "999"
    ));

    let err = t
        .api
        .submit_field("case", 5, ["a", "b"], ["x"], false)
        .unwrap_err();
    assert_eq!(err.kind().map(|k| k.code()), Some("SSS_VALUES_ARG_REQD"));
    assert!(err.to_string().contains("2 fields but 1 values"));
}

#[test]
fn failed_calls_leave_store_untouched() {
    let t = TestDb::new();
    let before = t.db.capture().unwrap();

    let _ = t.api.submit_field("case", 5, ["status", "title"], ["closed"], false);
    let _ = t.api.submit_field("invoice", 5, "status", "closed", false);
    let _ = t.api.submit_field("case", Value::from("5"), "status", "closed", false);

    assert_eq!(t.db.capture().unwrap(), before);
}
