//! Driving port for group operations.

use crate::domain::{Confirmation, Error, Group, UserId};

/// Use-case port for reading and mutating groups.
pub trait GroupDirectory: Send + Sync {
    /// Return the group or a not-found error.
    fn get_group(&self, name: &str) -> Result<Group, Error>;

    /// Create an empty group; conflicts when the name is taken.
    fn create_group(&self, name: &str) -> Result<Group, Error>;

    /// Union `members` into an existing group.
    fn merge_group_members(&self, name: &str, members: Vec<UserId>) -> Result<Group, Error>;

    /// Remove a group. Users keep their own `groups` field.
    fn delete_group(&self, name: &str) -> Result<Confirmation, Error>;
}
