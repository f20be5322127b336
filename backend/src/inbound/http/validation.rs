//! Request-level parsing helpers shared by the HTTP handlers.

use crate::domain::{Error, UserId};

/// Parse the `{userid}` path segment.
pub(crate) fn parse_path_user_id(raw: String) -> Result<UserId, Error> {
    UserId::new(raw).map_err(|err| Error::invalid_request(format!("Invalid userid: {err}")))
}

/// Parse a list of member ids, rejecting empty entries by position.
pub(crate) fn parse_member_ids(raw: Vec<String>) -> Result<Vec<UserId>, Error> {
    raw.into_iter()
        .enumerate()
        .map(|(index, value)| {
            UserId::new(value).map_err(|err| {
                Error::invalid_request(format!("Invalid member at index {index}: {err}"))
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ErrorCode;
    use rstest::rstest;

    #[rstest]
    fn member_ids_keep_order() {
        let ids = parse_member_ids(vec!["jsmith".to_owned(), "nmarcus".to_owned()])
            .expect("valid ids");
        let names: Vec<&str> = ids.iter().map(AsRef::as_ref).collect();
        assert_eq!(names, ["jsmith", "nmarcus"]);
    }

    #[rstest]
    fn empty_member_reports_its_index() {
        let error = parse_member_ids(vec!["jsmith".to_owned(), String::new()])
            .expect_err("empty id");
        assert_eq!(error.code(), ErrorCode::InvalidRequest);
        assert_eq!(
            error.message(),
            "Invalid member at index 1: user id must not be empty"
        );
    }

    #[rstest]
    fn empty_path_id_is_invalid() {
        let error = parse_path_user_id(String::new()).expect_err("empty id");
        assert_eq!(error.code(), ErrorCode::InvalidRequest);
    }
}
