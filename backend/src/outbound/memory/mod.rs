//! In-memory [`DirectoryStore`] adapter.
//!
//! Holds the user and group mappings for the lifetime of the process. The
//! adapter itself is not synchronised; the directory service wraps it in a
//! mutex.

use std::collections::HashMap;

use crate::domain::ports::{DirectoryStore, DirectoryStoreError};
use crate::domain::{Group, UserId, UserRecord};

/// Process-local user and group mappings.
#[derive(Debug, Default, Clone)]
pub struct InMemoryDirectoryStore {
    users: HashMap<UserId, UserRecord>,
    groups: HashMap<String, Group>,
}

impl InMemoryDirectoryStore {
    /// Build a store pre-populated with the given users and groups.
    ///
    /// Later entries replace earlier ones with the same key.
    pub fn with_contents(
        users: impl IntoIterator<Item = UserRecord>,
        groups: impl IntoIterator<Item = Group>,
    ) -> Self {
        Self {
            users: users
                .into_iter()
                .map(|record| (record.userid().clone(), record))
                .collect(),
            groups: groups
                .into_iter()
                .map(|group| (group.name().to_owned(), group))
                .collect(),
        }
    }

    /// Number of stored users.
    pub fn user_count(&self) -> usize {
        self.users.len()
    }

    /// Number of stored groups.
    pub fn group_count(&self) -> usize {
        self.groups.len()
    }
}

impl DirectoryStore for InMemoryDirectoryStore {
    fn find_user(&self, id: &UserId) -> Result<Option<UserRecord>, DirectoryStoreError> {
        Ok(self.users.get(id).cloned())
    }

    fn contains_user(&self, id: &UserId) -> Result<bool, DirectoryStoreError> {
        Ok(self.users.contains_key(id))
    }

    fn upsert_user(&mut self, record: UserRecord) -> Result<(), DirectoryStoreError> {
        self.users.insert(record.userid().clone(), record);
        Ok(())
    }

    fn remove_user(&mut self, id: &UserId) -> Result<Option<UserRecord>, DirectoryStoreError> {
        Ok(self.users.remove(id))
    }

    fn find_group(&self, name: &str) -> Result<Option<Group>, DirectoryStoreError> {
        Ok(self.groups.get(name).cloned())
    }

    fn contains_group(&self, name: &str) -> Result<bool, DirectoryStoreError> {
        Ok(self.groups.contains_key(name))
    }

    fn group_names(&self) -> Result<Vec<String>, DirectoryStoreError> {
        Ok(self.groups.keys().cloned().collect())
    }

    fn upsert_group(&mut self, group: Group) -> Result<(), DirectoryStoreError> {
        self.groups.insert(group.name().to_owned(), group);
        Ok(())
    }

    fn remove_group(&mut self, name: &str) -> Result<Option<Group>, DirectoryStoreError> {
        Ok(self.groups.remove(name))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::{fixture, rstest};

    fn id(value: &str) -> UserId {
        UserId::new(value).expect("valid id")
    }

    #[fixture]
    fn store() -> InMemoryDirectoryStore {
        let jsmith = UserRecord::new("Joe", "Smith", id("jsmith"), vec!["admins".to_owned()]);
        InMemoryDirectoryStore::with_contents([jsmith], [Group::with_members("admins", [id("jsmith")])])
    }

    #[rstest]
    fn with_contents_keys_entries(store: InMemoryDirectoryStore) {
        assert_eq!(store.user_count(), 1);
        assert_eq!(store.group_count(), 1);
        assert_eq!(store.contains_user(&id("jsmith")), Ok(true));
        assert_eq!(store.contains_group("admins"), Ok(true));
    }

    #[rstest]
    fn upsert_user_replaces_existing(mut store: InMemoryDirectoryStore) {
        let renamed = UserRecord::new("Joseph", "Smith", id("jsmith"), vec!["users".to_owned()]);
        store.upsert_user(renamed.clone()).expect("upsert");

        assert_eq!(store.find_user(&id("jsmith")), Ok(Some(renamed)));
        assert_eq!(store.user_count(), 1);
    }

    #[rstest]
    fn remove_returns_previous_values(mut store: InMemoryDirectoryStore) {
        assert!(store.remove_user(&id("jsmith")).expect("remove").is_some());
        assert_eq!(store.remove_user(&id("jsmith")), Ok(None));
        assert!(store.remove_group("admins").expect("remove").is_some());
        assert_eq!(store.group_names(), Ok(Vec::new()));
    }
}
