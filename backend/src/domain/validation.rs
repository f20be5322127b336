//! User payload validation.
//!
//! Checks run in a fixed order and stop at the first failure:
//!
//! 1. the payload carries exactly the fields in [`USER_FIELDS`];
//! 2. every field holds a truthy value;
//! 3. the payload `userid` matches the addressed identifier;
//! 4. the fields have the expected JSON types and no group name is blank;
//! 5. the identifier is absent (create) or present (update) in the store.
//!
//! Nothing here mutates the store.

use serde_json::{Map, Value};

use crate::domain::manager::map_store_error;
use crate::domain::ports::DirectoryStore;
use crate::domain::{Error, OperationKind, USER_FIELDS, UserId, UserRecord};

/// Message for a missing or whitespace-only group name.
pub(crate) const BLANK_GROUP_NAME: &str = "Group name must not be empty";

fn expected_fields() -> String {
    USER_FIELDS.join(", ")
}

/// Validate `payload` as the record stored under `userid`.
///
/// Returns the typed record on success. Failures carry the code and message
/// clients receive.
///
/// # Examples
/// ```
/// use serde_json::json;
/// use usergroups::domain::{validate_user, OperationKind, UserId};
/// use usergroups::outbound::memory::InMemoryDirectoryStore;
///
/// let store = InMemoryDirectoryStore::default();
/// let id = UserId::new("nmarcus").expect("valid id");
/// let payload = json!({
///     "first_name": "Nina",
///     "last_name": "Marcus",
///     "userid": "nmarcus",
///     "groups": ["users"],
/// });
///
/// let record = validate_user(&store, &id, &payload, OperationKind::Create).expect("valid");
/// assert_eq!(record.userid(), &id);
/// ```
pub fn validate_user<S>(
    store: &S,
    userid: &UserId,
    payload: &Value,
    kind: OperationKind,
) -> Result<UserRecord, Error>
where
    S: DirectoryStore + ?Sized,
{
    let fields = require_field_set(payload)?;
    require_values(fields)?;
    require_matching_userid(userid, fields)?;
    let record = parse_record(payload)?;
    require_group_names(&record)?;
    require_existence(store, userid, kind)?;
    Ok(record)
}

fn require_field_set(payload: &Value) -> Result<&Map<String, Value>, Error> {
    let missing_fields = || {
        Error::invalid_request(format!(
            "Missing fields in user data. Expected {}",
            expected_fields()
        ))
    };

    let fields = payload.as_object().ok_or_else(missing_fields)?;
    let exact = fields.len() == USER_FIELDS.len()
        && USER_FIELDS.iter().all(|field| fields.contains_key(*field));
    if !exact {
        return Err(missing_fields());
    }
    Ok(fields)
}

fn require_values(fields: &Map<String, Value>) -> Result<(), Error> {
    if fields.values().all(is_truthy) {
        return Ok(());
    }
    Err(Error::invalid_request(format!(
        "Not all fields have values. Required values: {}",
        expected_fields()
    )))
}

/// JSON truthiness: `null`, `false`, zero, and empty strings, arrays, or
/// objects count as missing values.
fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(flag) => *flag,
        Value::Number(number) => number.as_f64().is_some_and(|n| n != 0.0),
        Value::String(text) => !text.is_empty(),
        Value::Array(items) => !items.is_empty(),
        Value::Object(entries) => !entries.is_empty(),
    }
}

fn require_matching_userid(userid: &UserId, fields: &Map<String, Value>) -> Result<(), Error> {
    match fields.get("userid") {
        Some(Value::String(given)) if given == userid.as_ref() => Ok(()),
        other => {
            let given = match other {
                Some(Value::String(text)) => text.clone(),
                Some(value) => value.to_string(),
                None => String::new(),
            };
            Err(Error::invalid_request(format!(
                "Inconsistent userid in URL & payload: {userid} vs. {given}"
            )))
        }
    }
}

fn parse_record(payload: &Value) -> Result<UserRecord, Error> {
    serde_json::from_value(payload.clone()).map_err(|_| {
        Error::invalid_request(
            "Invalid field types in user data. Expected strings for first_name, last_name, \
             userid and a list of strings for groups",
        )
    })
}

fn require_group_names(record: &UserRecord) -> Result<(), Error> {
    if record.groups().iter().any(|name| name.trim().is_empty()) {
        return Err(Error::invalid_request(BLANK_GROUP_NAME));
    }
    Ok(())
}

fn require_existence<S>(store: &S, userid: &UserId, kind: OperationKind) -> Result<(), Error>
where
    S: DirectoryStore + ?Sized,
{
    let exists = store.contains_user(userid).map_err(map_store_error)?;
    match (kind, exists) {
        (OperationKind::Create, true) => Err(Error::conflict(format!(
            "Conflict: username {userid} already exists"
        ))),
        (OperationKind::Update, false) => Err(Error::not_found(format!(
            "User {userid} not found so cannot be updated."
        ))),
        _ => Ok(()),
    }
}

#[cfg(test)]
mod tests;
