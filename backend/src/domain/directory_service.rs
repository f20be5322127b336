//! Lock-scoped directory service implementing the driving ports.
//!
//! Every operation takes the store mutex once and holds it across the
//! existence check, validation, and mutation, so concurrent requests cannot
//! interleave between "check" and "write".

use std::sync::{Mutex, MutexGuard};

use serde_json::Value;
use tracing::error;

use crate::domain::manager::{self, map_store_error};
use crate::domain::ports::{DirectoryStore, GroupDirectory, UserDirectory};
use crate::domain::{Confirmation, Error, Group, OperationKind, UserId, UserRecord};

fn user_not_found(id: &UserId) -> Error {
    Error::not_found(format!("User not found: {id}"))
}

fn group_not_found(name: &str) -> Error {
    Error::not_found(format!("Group not found: {name}"))
}

/// Directory service owning a [`DirectoryStore`] behind a single mutex.
///
/// # Examples
/// ```
/// use usergroups::domain::ports::GroupDirectory;
/// use usergroups::domain::DirectoryService;
/// use usergroups::outbound::memory::InMemoryDirectoryStore;
///
/// let service = DirectoryService::new(InMemoryDirectoryStore::default());
/// let group = service.create_group("auditors").expect("new group");
/// assert!(group.is_empty());
/// ```
#[derive(Debug)]
pub struct DirectoryService<S> {
    store: Mutex<S>,
}

impl<S> DirectoryService<S>
where
    S: DirectoryStore,
{
    /// Wrap a store.
    pub fn new(store: S) -> Self {
        Self {
            store: Mutex::new(store),
        }
    }

    fn lock(&self) -> Result<MutexGuard<'_, S>, Error> {
        self.store.lock().map_err(|err| {
            error!(error = %err, "directory store lock poisoned");
            Error::internal("directory store lock poisoned")
        })
    }

    fn require_group(store: &S, name: &str) -> Result<(), Error> {
        if store.contains_group(name).map_err(map_store_error)? {
            Ok(())
        } else {
            Err(group_not_found(name))
        }
    }
}

impl<S> UserDirectory for DirectoryService<S>
where
    S: DirectoryStore,
{
    fn get_user(&self, id: &UserId) -> Result<UserRecord, Error> {
        let store = self.lock()?;
        store
            .find_user(id)
            .map_err(map_store_error)?
            .ok_or_else(|| user_not_found(id))
    }

    fn create_user(&self, id: &UserId, payload: &Value) -> Result<UserRecord, Error> {
        let mut store = self.lock()?;
        manager::create_or_update_user(&mut *store, id, payload, OperationKind::Create)
    }

    fn update_user(&self, id: &UserId, payload: &Value) -> Result<UserRecord, Error> {
        let mut store = self.lock()?;
        manager::create_or_update_user(&mut *store, id, payload, OperationKind::Update)
    }

    fn delete_user(&self, id: &UserId) -> Result<Confirmation, Error> {
        let mut store = self.lock()?;
        if !store.contains_user(id).map_err(map_store_error)? {
            return Err(user_not_found(id));
        }
        manager::delete_user(&mut *store, id)
    }
}

impl<S> GroupDirectory for DirectoryService<S>
where
    S: DirectoryStore,
{
    fn get_group(&self, name: &str) -> Result<Group, Error> {
        let store = self.lock()?;
        store
            .find_group(name)
            .map_err(map_store_error)?
            .ok_or_else(|| group_not_found(name))
    }

    fn create_group(&self, name: &str) -> Result<Group, Error> {
        let mut store = self.lock()?;
        manager::create_group(&mut *store, name)
    }

    fn merge_group_members(&self, name: &str, members: Vec<UserId>) -> Result<Group, Error> {
        let mut store = self.lock()?;
        Self::require_group(&store, name)?;
        manager::replace_group_members(&mut *store, name, members)
    }

    fn delete_group(&self, name: &str) -> Result<Confirmation, Error> {
        let mut store = self.lock()?;
        Self::require_group(&store, name)?;
        manager::delete_group(&mut *store, name)
    }
}
