//! Tests for user payload validation ordering and messages.

use super::*;
use crate::domain::ErrorCode;
use crate::domain::ports::{DirectoryStoreError, MockDirectoryStore};
use rstest::{fixture, rstest};
use serde_json::json;

const EXPECTED: &str = "first_name, last_name, userid, groups";

#[fixture]
fn userid() -> UserId {
    UserId::new("nmarcus").expect("valid id")
}

#[fixture]
fn payload() -> Value {
    json!({
        "first_name": "Nina",
        "last_name": "Marcus",
        "userid": "nmarcus",
        "groups": ["admins", "auditors"],
    })
}

fn store_with_user(exists: bool) -> MockDirectoryStore {
    let mut store = MockDirectoryStore::new();
    store.expect_contains_user().return_const(Ok(exists));
    store
}

/// A store that fails the test if validation reaches the existence check.
fn untouched_store() -> MockDirectoryStore {
    let mut store = MockDirectoryStore::new();
    store.expect_contains_user().never();
    store
}

#[rstest]
#[case(OperationKind::Create, false)]
#[case(OperationKind::Update, true)]
fn valid_payload_yields_typed_record(
    userid: UserId,
    payload: Value,
    #[case] kind: OperationKind,
    #[case] exists: bool,
) {
    let store = store_with_user(exists);

    let record = validate_user(&store, &userid, &payload, kind).expect("payload is valid");

    assert_eq!(record.userid(), &userid);
    assert_eq!(record.first_name(), "Nina");
    assert_eq!(record.groups(), ["admins", "auditors"]);
}

#[rstest]
#[case::missing_field(json!({"first_name": "Nina", "last_name": "Marcus", "userid": "nmarcus"}))]
#[case::extra_field(json!({
    "first_name": "Nina",
    "last_name": "Marcus",
    "userid": "nmarcus",
    "groups": ["admins"],
    "email": "nina@example.com",
}))]
#[case::renamed_field(json!({"first": "Nina", "last_name": "Marcus", "userid": "nmarcus", "groups": ["admins"]}))]
#[case::not_an_object(json!(["nmarcus"]))]
fn wrong_field_set_is_invalid(userid: UserId, #[case] candidate: Value) {
    let error = validate_user(&untouched_store(), &userid, &candidate, OperationKind::Create)
        .expect_err("field set must match exactly");

    assert_eq!(error.code(), ErrorCode::InvalidRequest);
    assert_eq!(
        error.message(),
        format!("Missing fields in user data. Expected {EXPECTED}")
    );
}

#[rstest]
#[case::empty_string("first_name", json!(""))]
#[case::null("last_name", Value::Null)]
#[case::empty_groups("groups", json!([]))]
#[case::false_value("first_name", json!(false))]
#[case::zero("last_name", json!(0))]
fn falsy_value_is_invalid(
    userid: UserId,
    mut payload: Value,
    #[case] field: &str,
    #[case] value: Value,
) {
    payload[field] = value;

    let error = validate_user(&untouched_store(), &userid, &payload, OperationKind::Update)
        .expect_err("every field needs a value");

    assert_eq!(error.code(), ErrorCode::InvalidRequest);
    assert_eq!(
        error.message(),
        format!("Not all fields have values. Required values: {EXPECTED}")
    );
}

#[rstest]
fn mismatched_userid_reports_both_values(userid: UserId, mut payload: Value) {
    payload["userid"] = json!("someone_else");

    let error = validate_user(&untouched_store(), &userid, &payload, OperationKind::Create)
        .expect_err("userid must match the path");

    assert_eq!(error.code(), ErrorCode::InvalidRequest);
    assert_eq!(
        error.message(),
        "Inconsistent userid in URL & payload: nmarcus vs. someone_else"
    );
}

#[rstest]
fn non_string_userid_is_inconsistent(userid: UserId, mut payload: Value) {
    payload["userid"] = json!(42);

    let error = validate_user(&untouched_store(), &userid, &payload, OperationKind::Create)
        .expect_err("numeric userid cannot match");

    assert_eq!(
        error.message(),
        "Inconsistent userid in URL & payload: nmarcus vs. 42"
    );
}

#[rstest]
#[case::numeric_name("first_name", json!(7))]
#[case::groups_not_a_list("groups", json!("admins"))]
#[case::groups_with_numbers("groups", json!(["admins", 3]))]
fn wrong_field_types_are_invalid(
    userid: UserId,
    mut payload: Value,
    #[case] field: &str,
    #[case] value: Value,
) {
    payload[field] = value;

    let error = validate_user(&untouched_store(), &userid, &payload, OperationKind::Create)
        .expect_err("field types must match");

    assert_eq!(error.code(), ErrorCode::InvalidRequest);
    assert!(error.message().starts_with("Invalid field types in user data."));
}

#[rstest]
fn create_conflicts_with_existing_user(userid: UserId, payload: Value) {
    let error = validate_user(&store_with_user(true), &userid, &payload, OperationKind::Create)
        .expect_err("duplicate create");

    assert_eq!(error.code(), ErrorCode::Conflict);
    assert_eq!(error.message(), "Conflict: username nmarcus already exists");
}

#[rstest]
fn update_requires_existing_user(userid: UserId, payload: Value) {
    let error = validate_user(&store_with_user(false), &userid, &payload, OperationKind::Update)
        .expect_err("update of missing user");

    assert_eq!(error.code(), ErrorCode::NotFound);
    assert_eq!(error.message(), "User nmarcus not found so cannot be updated.");
}

#[rstest]
fn store_failures_surface_as_unavailable(userid: UserId, payload: Value) {
    let mut store = MockDirectoryStore::new();
    store
        .expect_contains_user()
        .return_const(Err(DirectoryStoreError::connection("refused")));

    let error = validate_user(&store, &userid, &payload, OperationKind::Create)
        .expect_err("store is down");

    assert_eq!(error.code(), ErrorCode::ServiceUnavailable);
}

#[rstest]
#[case::whitespace(json!(["admins", "  "]))]
#[case::empty(json!(["", "admins"]))]
fn blank_group_names_are_invalid(userid: UserId, mut payload: Value, #[case] groups: Value) {
    payload["groups"] = groups;

    let error = validate_user(&untouched_store(), &userid, &payload, OperationKind::Create)
        .expect_err("group names must not be blank");

    assert_eq!(error.code(), ErrorCode::InvalidRequest);
    assert_eq!(error.message(), "Group name must not be empty");
}
