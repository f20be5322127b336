//! OpenAPI documentation configuration.
//!
//! [`ApiDoc`] registers every HTTP endpoint together with the adapter-layer
//! schema wrappers. The document backs Swagger UI in debug builds and is
//! exported by `cargo run --bin openapi-dump`.

use utoipa::OpenApi;

use crate::inbound::http::error::StatusMessage;
use crate::inbound::http::groups::CreateGroupRequest;
use crate::inbound::http::index::Greeting;
use crate::inbound::http::schemas::{GroupMembersSchema, UserRecordSchema};

/// OpenAPI document for the REST API.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Users and groups directory API",
        description = "In-memory CRUD service for user records and group memberships."
    ),
    servers(
        (url = "/", description = "Relative to the deployment base URL")
    ),
    paths(
        crate::inbound::http::index::index,
        crate::inbound::http::users::get_user,
        crate::inbound::http::users::create_user,
        crate::inbound::http::users::update_user,
        crate::inbound::http::users::delete_user,
        crate::inbound::http::groups::get_group,
        crate::inbound::http::groups::create_group,
        crate::inbound::http::groups::merge_group_members,
        crate::inbound::http::groups::delete_group,
        crate::inbound::http::health::ready,
        crate::inbound::http::health::live,
    ),
    components(schemas(
        UserRecordSchema,
        GroupMembersSchema,
        CreateGroupRequest,
        StatusMessage,
        Greeting
    )),
    tags(
        (name = "users", description = "User records"),
        (name = "groups", description = "Group memberships"),
        (name = "health", description = "Endpoints for health checks")
    )
)]
pub struct ApiDoc;
