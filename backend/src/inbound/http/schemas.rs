//! OpenAPI schema definitions for domain types.
//!
//! Domain types stay free of utoipa derives. The wrappers here mirror their
//! wire shape and live in the adapter layer where framework concerns belong.

use std::collections::BTreeMap;

use utoipa::ToSchema;

/// OpenAPI schema for [`crate::domain::UserRecord`].
///
/// Exactly these four fields are accepted; any other field is rejected.
#[derive(ToSchema)]
#[expect(
    dead_code,
    reason = "Used only for OpenAPI schema generation via utoipa"
)]
pub struct UserRecordSchema {
    #[schema(example = "Joe")]
    first_name: String,
    #[schema(example = "Smith")]
    last_name: String,
    /// Must equal the `{userid}` path segment.
    #[schema(example = "jsmith")]
    userid: String,
    /// Groups the user is merged into on create or update.
    #[schema(example = json!(["admins", "users"]))]
    groups: Vec<String>,
}

/// OpenAPI schema for a group rendered as `{name: [members]}`.
///
/// Member order is not significant.
#[derive(ToSchema)]
#[schema(example = json!({"admins": ["jsmith", "nmarcus"]}))]
#[expect(
    dead_code,
    reason = "Used only for OpenAPI schema generation via utoipa"
)]
pub struct GroupMembersSchema(BTreeMap<String, Vec<String>>);

#[cfg(test)]
mod tests {
    use super::*;
    use utoipa::PartialSchema;

    fn schema_to_json<T: PartialSchema>() -> String {
        serde_json::to_string(&T::schema()).expect("schema serialises to JSON")
    }

    #[test]
    fn user_record_schema_lists_the_four_fields() {
        let schema_json = schema_to_json::<UserRecordSchema>();
        for field in crate::domain::USER_FIELDS {
            assert!(
                schema_json.contains(&format!("\"{field}\"")),
                "schema should contain {field}"
            );
        }
    }

    #[test]
    fn group_members_schema_is_a_map_of_lists() {
        let schema_json = schema_to_json::<GroupMembersSchema>();
        assert!(
            schema_json.contains("additionalProperties"),
            "group schema should be keyed by group name"
        );
    }
}
