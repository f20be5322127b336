//! Driving port for user operations.
//!
//! HTTP handlers depend on this trait rather than on the store, so they can
//! be exercised against any implementation.

use serde_json::Value;

use crate::domain::{Confirmation, Error, UserId, UserRecord};

/// Use-case port for reading and mutating users.
pub trait UserDirectory: Send + Sync {
    /// Return the stored record or a not-found error.
    fn get_user(&self, id: &UserId) -> Result<UserRecord, Error>;

    /// Validate `payload` with the create rules and store it.
    fn create_user(&self, id: &UserId, payload: &Value) -> Result<UserRecord, Error>;

    /// Validate `payload` with the update rules and store it.
    fn update_user(&self, id: &UserId, payload: &Value) -> Result<UserRecord, Error>;

    /// Remove a user and its group memberships.
    fn delete_user(&self, id: &UserId) -> Result<Confirmation, Error>;
}
