//! Group data model.

use std::collections::BTreeSet;

use crate::domain::UserId;

/// Named collection of user identifiers with set semantics.
///
/// Members may reference users that do not exist in the user mapping.
/// Iteration order is sorted but not part of any external contract.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Group {
    name: String,
    members: BTreeSet<UserId>,
}

impl Group {
    /// Create a group without members.
    pub fn empty(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            members: BTreeSet::new(),
        }
    }

    /// Create a group from any collection of members, collapsing duplicates.
    ///
    /// # Examples
    /// ```
    /// use usergroups::domain::{Group, UserId};
    ///
    /// let jsmith = UserId::new("jsmith").expect("valid id");
    /// let group = Group::with_members("admins", [jsmith.clone(), jsmith]);
    /// assert_eq!(group.len(), 1);
    /// ```
    pub fn with_members(name: impl Into<String>, members: impl IntoIterator<Item = UserId>) -> Self {
        Self {
            name: name.into(),
            members: members.into_iter().collect(),
        }
    }

    /// Group name.
    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    /// Members in iteration order.
    pub fn members(&self) -> impl Iterator<Item = &UserId> {
        self.members.iter()
    }

    /// Number of distinct members.
    pub fn len(&self) -> usize {
        self.members.len()
    }

    /// Whether the group has no members.
    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    /// Whether `id` is a member.
    pub fn contains(&self, id: &UserId) -> bool {
        self.members.contains(id)
    }

    /// Add a member. Returns `false` when it was already present.
    pub fn insert(&mut self, id: UserId) -> bool {
        self.members.insert(id)
    }

    /// Remove a member. Returns `false` when it was absent.
    pub fn remove(&mut self, id: &UserId) -> bool {
        self.members.remove(id)
    }

    /// Union the given members into the group.
    pub fn extend(&mut self, members: impl IntoIterator<Item = UserId>) {
        self.members.extend(members);
    }

    /// Member identifiers as owned strings, for serialisation.
    pub fn member_names(&self) -> Vec<String> {
        self.members.iter().map(|id| id.as_ref().to_owned()).collect()
    }
}
