//! Users API handlers.
//!
//! ```text
//! GET    /users/jsmith
//! POST   /users/nmarcus {"first_name":"Nina","last_name":"Marcus","userid":"nmarcus","groups":["users"]}
//! PUT    /users/nmarcus {...}
//! DELETE /users/nmarcus
//! ```
//!
//! Bodies are taken as raw JSON so the domain validator can report missing,
//! extra, or empty fields with its own messages.

use actix_web::http::StatusCode;
use actix_web::{delete, get, post, put, web};
use serde_json::Value;

use crate::domain::UserRecord;
use crate::inbound::http::ApiResult;
use crate::inbound::http::error::StatusMessage;
use crate::inbound::http::schemas::UserRecordSchema;
use crate::inbound::http::state::HttpState;
use crate::inbound::http::validation::parse_path_user_id;

/// Fetch a user record.
#[utoipa::path(
    get,
    path = "/users/{userid}",
    params(("userid" = String, Path, description = "User identifier")),
    responses(
        (status = 200, description = "Stored user record", body = UserRecordSchema),
        (status = 404, description = "User not found", body = StatusMessage)
    ),
    tags = ["users"],
    operation_id = "getUser"
)]
#[get("/users/{userid}")]
pub async fn get_user(
    state: web::Data<HttpState>,
    path: web::Path<String>,
) -> ApiResult<web::Json<UserRecord>> {
    let userid = parse_path_user_id(path.into_inner())?;
    let record = state.users.get_user(&userid)?;
    Ok(web::Json(record))
}

/// Create a user and merge it into the groups it lists.
#[utoipa::path(
    post,
    path = "/users/{userid}",
    params(("userid" = String, Path, description = "User identifier; must match the body")),
    request_body = UserRecordSchema,
    responses(
        (status = 200, description = "Created user record", body = UserRecordSchema),
        (status = 400, description = "Missing, extra, empty, or inconsistent fields", body = StatusMessage),
        (status = 409, description = "User already exists", body = StatusMessage),
        (status = 415, description = "Body is not JSON", body = StatusMessage)
    ),
    tags = ["users"],
    operation_id = "createUser"
)]
#[post("/users/{userid}")]
pub async fn create_user(
    state: web::Data<HttpState>,
    path: web::Path<String>,
    payload: web::Json<Value>,
) -> ApiResult<web::Json<UserRecord>> {
    let userid = parse_path_user_id(path.into_inner())?;
    let record = state.users.create_user(&userid, &payload)?;
    Ok(web::Json(record))
}

/// Replace a user record and merge it into the groups it lists.
#[utoipa::path(
    put,
    path = "/users/{userid}",
    params(("userid" = String, Path, description = "User identifier; must match the body")),
    request_body = UserRecordSchema,
    responses(
        (status = 200, description = "Updated user record", body = UserRecordSchema),
        (status = 400, description = "Missing, extra, empty, or inconsistent fields", body = StatusMessage),
        (status = 404, description = "User not found", body = StatusMessage),
        (status = 415, description = "Body is not JSON", body = StatusMessage)
    ),
    tags = ["users"],
    operation_id = "updateUser"
)]
#[put("/users/{userid}")]
pub async fn update_user(
    state: web::Data<HttpState>,
    path: web::Path<String>,
    payload: web::Json<Value>,
) -> ApiResult<web::Json<UserRecord>> {
    let userid = parse_path_user_id(path.into_inner())?;
    let record = state.users.update_user(&userid, &payload)?;
    Ok(web::Json(record))
}

/// Delete a user and remove it from every group.
#[utoipa::path(
    delete,
    path = "/users/{userid}",
    params(("userid" = String, Path, description = "User identifier")),
    responses(
        (status = 200, description = "User deleted", body = StatusMessage),
        (status = 404, description = "User not found", body = StatusMessage)
    ),
    tags = ["users"],
    operation_id = "deleteUser"
)]
#[delete("/users/{userid}")]
pub async fn delete_user(
    state: web::Data<HttpState>,
    path: web::Path<String>,
) -> ApiResult<web::Json<StatusMessage>> {
    let userid = parse_path_user_id(path.into_inner())?;
    let confirmation = state.users.delete_user(&userid)?;
    Ok(web::Json(StatusMessage::new(
        StatusCode::OK,
        confirmation.message(),
    )))
}
