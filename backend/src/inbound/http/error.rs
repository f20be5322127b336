//! HTTP adapter mapping for domain errors.
//!
//! Every failure is rendered as `{"status": <code>, "message": <text>}` with
//! the same code on the status line. The request trace identifier travels in
//! the `trace-id` header rather than the body.

use actix_web::error::JsonPayloadError;
use actix_web::{HttpRequest, HttpResponse, ResponseError, http::StatusCode, web};
use serde::{Deserialize, Serialize};
use tracing::{error, warn};
use utoipa::ToSchema;

use crate::domain::{Error, ErrorCode, TRACE_ID_HEADER};

/// Convenient result alias for HTTP handlers.
pub type ApiResult<T> = Result<T, Error>;

/// Status-and-message body shared by error and deletion responses.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct StatusMessage {
    /// HTTP status code, repeated from the status line.
    #[schema(example = 404)]
    pub status: u16,
    /// Human-readable outcome.
    #[schema(example = "User not found: jsmith")]
    pub message: String,
}

impl StatusMessage {
    /// Build a body for `status`.
    pub fn new(status: StatusCode, message: impl Into<String>) -> Self {
        Self {
            status: status.as_u16(),
            message: message.into(),
        }
    }
}

fn status_for(code: ErrorCode) -> StatusCode {
    match code {
        ErrorCode::InvalidRequest => StatusCode::BAD_REQUEST,
        ErrorCode::NotFound => StatusCode::NOT_FOUND,
        ErrorCode::Conflict => StatusCode::CONFLICT,
        ErrorCode::UnsupportedMediaType => StatusCode::UNSUPPORTED_MEDIA_TYPE,
        ErrorCode::ServiceUnavailable => StatusCode::SERVICE_UNAVAILABLE,
        ErrorCode::InternalError => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

fn client_message(error: &Error) -> &str {
    if matches!(error.code(), ErrorCode::InternalError) {
        "Internal server error"
    } else {
        error.message()
    }
}

impl ResponseError for Error {
    fn status_code(&self) -> StatusCode {
        status_for(self.code())
    }

    fn error_response(&self) -> HttpResponse {
        let status = self.status_code();
        if status.is_server_error() {
            error!(status = status.as_u16(), error = %self, "request failed");
        }

        let mut builder = HttpResponse::build(status);
        if let Some(id) = self.trace_id() {
            builder.insert_header((TRACE_ID_HEADER, id.to_owned()));
        }
        builder.json(StatusMessage::new(status, client_message(self)))
    }
}

fn map_json_error(err: &JsonPayloadError) -> Error {
    match err {
        JsonPayloadError::ContentType => Error::unsupported_media_type("Invalid media type"),
        _ => Error::invalid_request("Invalid request"),
    }
}

/// JSON extractor configuration rendering body errors in the shared shape.
///
/// A non-JSON content type maps to 415; unparsable or mis-shaped JSON maps to
/// 400.
pub fn json_config() -> web::JsonConfig {
    web::JsonConfig::default().error_handler(|err, _req| {
        warn!(error = %err, "rejected request body");
        map_json_error(&err).into()
    })
}

/// Fallback for unmatched routes.
pub async fn not_found(req: HttpRequest) -> ApiResult<HttpResponse> {
    warn!(path = %req.path(), method = %req.method(), "no route matched");
    Err(Error::not_found("Not found"))
}
