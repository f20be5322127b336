//! Initial directory contents applied at startup.

use std::collections::BTreeMap;

use serde::Deserialize;
use serde_json::{Value, json};

use crate::domain::manager::{self, map_store_error};
use crate::domain::ports::DirectoryStore;
use crate::domain::{Error, Group, OperationKind, UserId};

/// Users and groups to load into an empty store.
///
/// Users are raw payloads so they pass through the same validation as
/// `POST /users/{id}`. Each user is merged into the groups it lists.
///
/// JSON shape:
/// `{"users": {"jsmith": {...}}, "groups": {"admins": ["jsmith"]}}`
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DirectorySeed {
    #[serde(default)]
    users: BTreeMap<String, Value>,
    #[serde(default)]
    groups: BTreeMap<String, Vec<String>>,
}

/// Counts reported after a seed is applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SeedSummary {
    /// Users written to the store.
    pub user_count: usize,
    /// Groups in the store afterwards, including those created by user entries.
    pub group_count: usize,
}

impl DirectorySeed {
    /// The default contents: `jsmith` in `admins` and `users`.
    pub fn builtin() -> Self {
        let users = BTreeMap::from([(
            "jsmith".to_owned(),
            json!({
                "first_name": "Joe",
                "last_name": "Smith",
                "userid": "jsmith",
                "groups": ["admins", "users"],
            }),
        )]);
        let groups = BTreeMap::from([
            ("admins".to_owned(), vec!["jsmith".to_owned()]),
            ("users".to_owned(), vec!["jsmith".to_owned()]),
        ]);
        Self { users, groups }
    }

    /// Parse a seed from JSON text.
    pub fn from_json(contents: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(contents)
    }

    /// Write the seed into `store`.
    ///
    /// Groups are written first, then each user is validated with the create
    /// rules and merged into its groups. The first invalid entry aborts the
    /// load with the validation error.
    pub fn apply<S>(&self, store: &mut S) -> Result<SeedSummary, Error>
    where
        S: DirectoryStore + ?Sized,
    {
        for (name, members) in &self.groups {
            let members = members
                .iter()
                .map(|member| {
                    UserId::new(member.as_str()).map_err(|err| {
                        Error::invalid_request(format!("invalid member of group {name}: {err}"))
                    })
                })
                .collect::<Result<Vec<_>, _>>()?;
            store
                .upsert_group(Group::with_members(name.as_str(), members))
                .map_err(map_store_error)?;
        }

        for (raw_id, payload) in &self.users {
            let userid = UserId::new(raw_id.as_str())
                .map_err(|err| Error::invalid_request(format!("invalid seed user id: {err}")))?;
            manager::create_or_update_user(&mut *store, &userid, payload, OperationKind::Create)?;
        }

        Ok(SeedSummary {
            user_count: self.users.len(),
            group_count: store.group_names().map_err(map_store_error)?.len(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ErrorCode;
    use crate::outbound::memory::InMemoryDirectoryStore;
    use rstest::rstest;

    fn id(value: &str) -> UserId {
        UserId::new(value).expect("valid id")
    }

    #[rstest]
    fn builtin_seed_populates_jsmith_and_groups() {
        let mut store = InMemoryDirectoryStore::default();

        let summary = DirectorySeed::builtin().apply(&mut store).expect("seed applies");

        assert_eq!(summary, SeedSummary { user_count: 1, group_count: 2 });
        for name in ["admins", "users"] {
            let group = store.find_group(name).expect("read").expect("group exists");
            assert_eq!(group.member_names(), vec!["jsmith".to_owned()]);
        }
    }

    #[rstest]
    fn json_seed_creates_groups_listed_by_users() {
        let seed = DirectorySeed::from_json(
            r#"{
                "users": {
                    "nmarcus": {
                        "first_name": "Nina",
                        "last_name": "Marcus",
                        "userid": "nmarcus",
                        "groups": ["auditors"]
                    }
                }
            }"#,
        )
        .expect("valid seed JSON");
        let mut store = InMemoryDirectoryStore::default();

        let summary = seed.apply(&mut store).expect("seed applies");

        assert_eq!(summary.group_count, 1);
        let auditors = store.find_group("auditors").expect("read").expect("created");
        assert!(auditors.contains(&id("nmarcus")));
    }

    #[rstest]
    fn invalid_seed_user_is_rejected() {
        let seed = DirectorySeed::from_json(
            r#"{"users": {"nmarcus": {"first_name": "Nina", "userid": "nmarcus"}}}"#,
        )
        .expect("valid seed JSON");

        let error = seed
            .apply(&mut InMemoryDirectoryStore::default())
            .expect_err("incomplete user");

        assert_eq!(error.code(), ErrorCode::InvalidRequest);
    }

    #[rstest]
    fn unknown_top_level_keys_are_rejected() {
        assert!(DirectorySeed::from_json(r#"{"people": {}}"#).is_err());
    }
}
