//! Groups API handlers.
//!
//! ```text
//! GET    /groups/admins
//! POST   /groups {"name":"auditors"}
//! PUT    /groups/admins ["jsmith","nmarcus"]
//! DELETE /groups/admins
//! ```

use std::collections::BTreeMap;

use actix_web::http::StatusCode;
use actix_web::{delete, get, post, put, web};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::Group;
use crate::inbound::http::ApiResult;
use crate::inbound::http::error::StatusMessage;
use crate::inbound::http::schemas::GroupMembersSchema;
use crate::inbound::http::state::HttpState;
use crate::inbound::http::validation::parse_member_ids;

/// Request body for `POST /groups`.
#[derive(Debug, Deserialize, Serialize, ToSchema)]
pub struct CreateGroupRequest {
    #[schema(example = "auditors")]
    pub name: String,
}

/// `{name: [members]}` rendering of a group.
fn keyed_by_name(group: &Group) -> BTreeMap<String, Vec<String>> {
    BTreeMap::from([(group.name().to_owned(), group.member_names())])
}

/// List the members of a group.
#[utoipa::path(
    get,
    path = "/groups/{name}",
    params(("name" = String, Path, description = "Group name")),
    responses(
        (status = 200, description = "Member ids in no particular order", body = [String]),
        (status = 404, description = "Group not found", body = StatusMessage)
    ),
    tags = ["groups"],
    operation_id = "getGroup"
)]
#[get("/groups/{name}")]
pub async fn get_group(
    state: web::Data<HttpState>,
    path: web::Path<String>,
) -> ApiResult<web::Json<Vec<String>>> {
    let group = state.groups.get_group(&path)?;
    Ok(web::Json(group.member_names()))
}

/// Create an empty group.
#[utoipa::path(
    post,
    path = "/groups",
    request_body = CreateGroupRequest,
    responses(
        (status = 200, description = "Created group", body = GroupMembersSchema),
        (status = 400, description = "Missing or blank name", body = StatusMessage),
        (status = 409, description = "Group already exists", body = StatusMessage),
        (status = 415, description = "Body is not JSON", body = StatusMessage)
    ),
    tags = ["groups"],
    operation_id = "createGroup"
)]
#[post("/groups")]
pub async fn create_group(
    state: web::Data<HttpState>,
    payload: web::Json<CreateGroupRequest>,
) -> ApiResult<web::Json<BTreeMap<String, Vec<String>>>> {
    let group = state.groups.create_group(&payload.name)?;
    Ok(web::Json(keyed_by_name(&group)))
}

/// Merge member ids into an existing group.
#[utoipa::path(
    put,
    path = "/groups/{name}",
    params(("name" = String, Path, description = "Group name")),
    request_body = [String],
    responses(
        (status = 200, description = "Group after the merge", body = GroupMembersSchema),
        (status = 400, description = "Body is not a list of ids", body = StatusMessage),
        (status = 404, description = "Group not found", body = StatusMessage),
        (status = 415, description = "Body is not JSON", body = StatusMessage)
    ),
    tags = ["groups"],
    operation_id = "mergeGroupMembers"
)]
#[put("/groups/{name}")]
pub async fn merge_group_members(
    state: web::Data<HttpState>,
    path: web::Path<String>,
    payload: web::Json<Vec<String>>,
) -> ApiResult<web::Json<BTreeMap<String, Vec<String>>>> {
    let members = parse_member_ids(payload.into_inner())?;
    let group = state.groups.merge_group_members(&path, members)?;
    Ok(web::Json(keyed_by_name(&group)))
}

/// Delete a group. Users keep the name in their own records.
#[utoipa::path(
    delete,
    path = "/groups/{name}",
    params(("name" = String, Path, description = "Group name")),
    responses(
        (status = 200, description = "Group deleted", body = StatusMessage),
        (status = 404, description = "Group not found", body = StatusMessage)
    ),
    tags = ["groups"],
    operation_id = "deleteGroup"
)]
#[delete("/groups/{name}")]
pub async fn delete_group(
    state: web::Data<HttpState>,
    path: web::Path<String>,
) -> ApiResult<web::Json<StatusMessage>> {
    let confirmation = state.groups.delete_group(&path)?;
    Ok(web::Json(StatusMessage::new(
        StatusCode::OK,
        confirmation.message(),
    )))
}
