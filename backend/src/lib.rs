//! Users and groups directory service.
//!
//! The crate follows a ports-and-adapters layout: [`domain`] holds the
//! entities, validation rules, and directory operations; [`inbound::http`]
//! exposes them over REST; [`outbound::memory`] stores them in memory.

pub mod doc;
pub mod domain;
pub mod inbound;
pub mod middleware;
pub mod outbound;
pub mod server;
pub mod settings;

/// Public OpenAPI surface used by Swagger UI and tooling.
pub use doc::ApiDoc;
pub use domain::TraceId;
pub use middleware::Trace;
