//! User data model.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Field names a user payload must carry, in the order used by messages.
pub const USER_FIELDS: [&str; 4] = ["first_name", "last_name", "userid", "groups"];

/// Validation errors returned by [`UserId::new`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UserValidationError {
    EmptyId,
}

impl fmt::Display for UserValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyId => write!(f, "user id must not be empty"),
        }
    }
}

impl std::error::Error for UserValidationError {}

/// User identifier, also used as the store key.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct UserId(String);

impl UserId {
    /// Validate and construct a [`UserId`].
    ///
    /// # Examples
    /// ```
    /// use usergroups::domain::UserId;
    ///
    /// let id = UserId::new("jsmith").expect("valid id");
    /// assert_eq!(id.as_ref(), "jsmith");
    /// assert!(UserId::new("").is_err());
    /// ```
    pub fn new(id: impl Into<String>) -> Result<Self, UserValidationError> {
        let id = id.into();
        if id.is_empty() {
            return Err(UserValidationError::EmptyId);
        }
        Ok(Self(id))
    }
}

impl AsRef<str> for UserId {
    fn as_ref(&self) -> &str {
        self.0.as_str()
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_ref())
    }
}

impl From<UserId> for String {
    fn from(value: UserId) -> Self {
        value.0
    }
}

impl TryFrom<String> for UserId {
    type Error = UserValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

/// Stored user record.
///
/// ## Invariants
/// - Serialises to exactly the four fields in [`USER_FIELDS`].
/// - `groups` keeps the order it was submitted in; group membership itself
///   lives in the group mapping.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct UserRecord {
    first_name: String,
    last_name: String,
    userid: UserId,
    groups: Vec<String>,
}

impl UserRecord {
    /// Build a record from its parts.
    pub fn new(
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        userid: UserId,
        groups: Vec<String>,
    ) -> Self {
        Self {
            first_name: first_name.into(),
            last_name: last_name.into(),
            userid,
            groups,
        }
    }

    /// Given name.
    pub fn first_name(&self) -> &str {
        self.first_name.as_str()
    }

    /// Family name.
    pub fn last_name(&self) -> &str {
        self.last_name.as_str()
    }

    /// Identifier the record is stored under.
    pub fn userid(&self) -> &UserId {
        &self.userid
    }

    /// Group names the user claims membership in.
    pub fn groups(&self) -> &[String] {
        &self.groups
    }
}

/// Distinguishes the existence check applied during validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OperationKind {
    /// The user must not exist yet.
    Create,
    /// The user must already exist.
    Update,
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use serde_json::json;

    #[rstest]
    fn user_id_rejects_empty_values() {
        assert_eq!(UserId::new(""), Err(UserValidationError::EmptyId));
    }

    #[rstest]
    fn record_serialises_with_snake_case_fields() {
        let record = UserRecord::new(
            "Joe",
            "Smith",
            UserId::new("jsmith").expect("valid id"),
            vec!["admins".to_owned(), "users".to_owned()],
        );

        let value = serde_json::to_value(&record).expect("serialise record");
        assert_eq!(
            value,
            json!({
                "first_name": "Joe",
                "last_name": "Smith",
                "userid": "jsmith",
                "groups": ["admins", "users"],
            })
        );
    }

    #[rstest]
    fn record_rejects_unknown_fields() {
        let payload = json!({
            "first_name": "Joe",
            "last_name": "Smith",
            "userid": "jsmith",
            "groups": ["admins"],
            "email": "joe@example.com",
        });
        assert!(serde_json::from_value::<UserRecord>(payload).is_err());
    }
}
