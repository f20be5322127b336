//! Root greeting used as a smoke check.

use actix_web::{get, web};
use serde::Serialize;
use utoipa::ToSchema;

/// Body returned by `GET /`.
#[derive(Debug, Serialize, ToSchema)]
pub struct Greeting {
    #[schema(example = "Hello World!")]
    response: &'static str,
}

/// Respond with a fixed greeting.
#[utoipa::path(
    get,
    path = "/",
    responses((status = 200, description = "Service is reachable", body = Greeting)),
    tags = ["health"],
    operation_id = "index"
)]
#[get("/")]
pub async fn index() -> web::Json<Greeting> {
    web::Json(Greeting {
        response: "Hello World!",
    })
}
