//! Driven port for the user and group mappings.
//!
//! The manager and validator only talk to storage through this trait, so the
//! in-memory adapter can be swapped for an external datastore without
//! changing their contracts. Methods are synchronous: callers hold the
//! directory lock for the whole validate-then-mutate sequence.

use thiserror::Error;

use crate::domain::{Group, UserId, UserRecord};

/// Errors raised by directory store adapters.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DirectoryStoreError {
    /// The backing store could not be reached.
    #[error("directory store connection failed: {message}")]
    Connection { message: String },
    /// A read or write failed during execution.
    #[error("directory store query failed: {message}")]
    Query { message: String },
}

impl DirectoryStoreError {
    /// Build a [`DirectoryStoreError::Connection`].
    pub fn connection(message: impl Into<String>) -> Self {
        Self::Connection {
            message: message.into(),
        }
    }

    /// Build a [`DirectoryStoreError::Query`].
    pub fn query(message: impl Into<String>) -> Self {
        Self::Query {
            message: message.into(),
        }
    }
}

/// Storage for user records keyed by id and groups keyed by name.
#[cfg_attr(test, mockall::automock)]
pub trait DirectoryStore: Send {
    /// Fetch a user by identifier.
    fn find_user(&self, id: &UserId) -> Result<Option<UserRecord>, DirectoryStoreError>;

    /// Whether a user with this identifier exists.
    fn contains_user(&self, id: &UserId) -> Result<bool, DirectoryStoreError>;

    /// Insert or replace the record stored under `record.userid()`.
    fn upsert_user(&mut self, record: UserRecord) -> Result<(), DirectoryStoreError>;

    /// Remove a user, returning the previous record if any.
    fn remove_user(&mut self, id: &UserId) -> Result<Option<UserRecord>, DirectoryStoreError>;

    /// Fetch a group by name.
    fn find_group(&self, name: &str) -> Result<Option<Group>, DirectoryStoreError>;

    /// Whether a group with this name exists.
    fn contains_group(&self, name: &str) -> Result<bool, DirectoryStoreError>;

    /// Names of every stored group.
    fn group_names(&self) -> Result<Vec<String>, DirectoryStoreError>;

    /// Insert or replace the group stored under `group.name()`.
    fn upsert_group(&mut self, group: Group) -> Result<(), DirectoryStoreError>;

    /// Remove a group, returning it if it existed.
    fn remove_group(&mut self, name: &str) -> Result<Option<Group>, DirectoryStoreError>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(DirectoryStoreError::connection("refused"), "directory store connection failed: refused")]
    #[case(DirectoryStoreError::query("timeout"), "directory store query failed: timeout")]
    fn errors_render_their_message(#[case] error: DirectoryStoreError, #[case] expected: &str) {
        assert_eq!(error.to_string(), expected);
    }
}
