//! Validate-then-mutate operations over a [`DirectoryStore`].
//!
//! These functions are the only code that writes to the store. Each takes the
//! store by mutable reference, so the caller decides how access is
//! serialised (see [`crate::domain::DirectoryService`]). Functions documented
//! with a precondition trust the caller to have checked existence first.

use tracing::{debug, info};

use crate::domain::ports::{DirectoryStore, DirectoryStoreError};
use crate::domain::validation::{BLANK_GROUP_NAME, validate_user};
use crate::domain::{Confirmation, Error, Group, OperationKind, UserId, UserRecord};
use serde_json::Value;

/// Map store adapter errors to domain errors.
pub(crate) fn map_store_error(error: DirectoryStoreError) -> Error {
    match error {
        DirectoryStoreError::Connection { message } => {
            Error::service_unavailable(format!("directory store unavailable: {message}"))
        }
        DirectoryStoreError::Query { message } => {
            Error::internal(format!("directory store error: {message}"))
        }
    }
}

/// Validate `payload` and store it under `userid`, then merge the user into
/// the groups it lists.
///
/// Validation errors are returned unchanged and leave the store untouched.
/// Updating a user never removes it from groups it no longer lists.
///
/// The record is written before the group merge. A store that fails midway
/// through the merge leaves the user stored with only part of its
/// memberships; the in-memory adapter never fails.
pub fn create_or_update_user<S>(
    store: &mut S,
    userid: &UserId,
    payload: &Value,
    kind: OperationKind,
) -> Result<UserRecord, Error>
where
    S: DirectoryStore + ?Sized,
{
    let record = validate_user(&*store, userid, payload, kind)?;

    store.upsert_user(record.clone()).map_err(map_store_error)?;
    merge_into_groups(&mut *store, userid, record.groups())?;

    info!(user_id = %userid, operation = ?kind, "user stored");
    Ok(record)
}

/// Remove a user and strip it from every group's membership.
///
/// Precondition: the user exists. Calling this for an unknown id still
/// removes it from any group that lists it.
pub fn delete_user<S>(store: &mut S, userid: &UserId) -> Result<Confirmation, Error>
where
    S: DirectoryStore + ?Sized,
{
    store.remove_user(userid).map_err(map_store_error)?;
    remove_from_groups(&mut *store, userid)?;

    info!(user_id = %userid, "user deleted");
    Ok(Confirmation::new(format!("Deleted user {userid}")))
}

/// Add `userid` to each named group, creating groups that do not exist.
///
/// Adding an existing member is a no-op.
pub fn merge_into_groups<S>(store: &mut S, userid: &UserId, names: &[String]) -> Result<(), Error>
where
    S: DirectoryStore + ?Sized,
{
    for name in names {
        let group = match store.find_group(name).map_err(map_store_error)? {
            Some(mut group) => {
                group.insert(userid.clone());
                group
            }
            None => {
                debug!(group = %name, user_id = %userid, "creating group on first member");
                Group::with_members(name.as_str(), [userid.clone()])
            }
        };
        store.upsert_group(group).map_err(map_store_error)?;
    }
    Ok(())
}

fn remove_from_groups<S>(store: &mut S, userid: &UserId) -> Result<(), Error>
where
    S: DirectoryStore + ?Sized,
{
    for name in store.group_names().map_err(map_store_error)? {
        let Some(mut group) = store.find_group(&name).map_err(map_store_error)? else {
            continue;
        };
        if group.remove(userid) {
            store.upsert_group(group).map_err(map_store_error)?;
        }
    }
    Ok(())
}

/// Create an empty group.
///
/// Fails with a conflict when the name is taken and with an invalid request
/// when the name is blank.
pub fn create_group<S>(store: &mut S, name: &str) -> Result<Group, Error>
where
    S: DirectoryStore + ?Sized,
{
    if name.trim().is_empty() {
        return Err(Error::invalid_request(BLANK_GROUP_NAME));
    }
    if store.contains_group(name).map_err(map_store_error)? {
        return Err(Error::conflict(format!(
            "Conflict: group {name} already exists"
        )));
    }

    let group = Group::empty(name);
    store.upsert_group(group.clone()).map_err(map_store_error)?;

    info!(group = %name, "group created");
    Ok(group)
}

/// Union `members` into the group's current membership.
///
/// Precondition: the group exists. A missing group is treated as empty.
pub fn replace_group_members<S>(
    store: &mut S,
    name: &str,
    members: Vec<UserId>,
) -> Result<Group, Error>
where
    S: DirectoryStore + ?Sized,
{
    let mut group = store
        .find_group(name)
        .map_err(map_store_error)?
        .unwrap_or_else(|| Group::empty(name));
    group.extend(members);
    store.upsert_group(group.clone()).map_err(map_store_error)?;

    info!(group = %name, members = group.len(), "group members merged");
    Ok(group)
}

/// Remove a group. Users keep the group name in their own records.
///
/// Precondition: the group exists.
pub fn delete_group<S>(store: &mut S, name: &str) -> Result<Confirmation, Error>
where
    S: DirectoryStore + ?Sized,
{
    store.remove_group(name).map_err(map_store_error)?;

    info!(group = %name, "group deleted");
    Ok(Confirmation::new(format!("Deleted group {name}")))
}
